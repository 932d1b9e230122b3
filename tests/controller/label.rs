use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::LabelStatus as DbLabelStatus;
use etiqueta::{
    model::{
        label::{CreateLabelDto, FoodLabelDto, LabelQuery, LabelStatus, UpdateLabelStatusDto},
        print::{PrintJobDto, PrintRequestDto},
        qr::QrPayload,
    },
    server::controller::label::{
        create_label, get_label_qr, get_labels, print_labels, update_label_status,
    },
};
use etiqueta_test_utils::prelude::*;

use super::{app_state, json_body, sign_in};

mod create_label {
    use super::*;

    #[tokio::test]
    /// Expect 201 created with the expiration derived from the product
    async fn creates_label_from_product() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let product = test
            .kitchen()
            .insert_product(organization.id, "Salada Verde", 1, "Cozinha Fria")
            .await?;
        sign_in(&test, cook.id).await;

        let production = factory::at(18, 8, 0);
        let resp = create_label(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateLabelDto {
                product_name: "Salada Verde".to_string(),
                product_id: Some(product.id),
                production_date: Some(production),
                quantity: "2 bandejas".to_string(),
                ..Default::default()
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let label: FoodLabelDto = json_body(resp).await;
        assert_eq!(label.expiration_date, factory::at(19, 8, 0));
        assert_eq!(label.status, LabelStatus::Active);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 bad request when the quantity is blank
    async fn rejects_blank_quantity() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let result = create_label(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateLabelDto {
                product_name: "Pudim".to_string(),
                expiration_date: Some(factory::at(20, 8, 0)),
                quantity: " ".to_string(),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 not found without a user in session
    async fn requires_session() -> Result<(), TestError> {
        let test = test_setup_with_label_tables!()?;

        let result = create_label(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateLabelDto::default()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_labels {
    use super::*;

    #[tokio::test]
    /// Expect only active labels of the user's organization
    async fn lists_own_active_labels() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let (other, _, _) = test.kitchen().insert_kitchen("Padaria").await?;
        let production = factory::at(15, 8, 0);
        let expiration = factory::at(30, 8, 0);
        test.kitchen()
            .insert_label(
                organization.id,
                "Molho Sugo",
                production,
                expiration,
                DbLabelStatus::Active,
            )
            .await?;
        test.kitchen()
            .insert_label(
                organization.id,
                "Arroz",
                production,
                expiration,
                DbLabelStatus::Used,
            )
            .await?;
        test.kitchen()
            .insert_label(
                other.id,
                "Pão de Queijo",
                production,
                expiration,
                DbLabelStatus::Active,
            )
            .await?;
        sign_in(&test, cook.id).await;

        let resp = get_labels(
            State(app_state(&test)),
            test.session.clone(),
            Query(LabelQuery::default()),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let labels: Vec<FoodLabelDto> = json_body(resp).await;
        let names: Vec<&str> = labels.iter().map(|l| l.product_name.as_str()).collect();
        assert_eq!(names, vec!["Molho Sugo"]);

        Ok(())
    }
}

mod update_label_status {
    use super::*;

    #[tokio::test]
    /// Expect 200 on the first status change and 409 on the second
    async fn rejects_second_transition() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let label = test
            .kitchen()
            .insert_label(
                organization.id,
                "Molho Sugo",
                factory::at(15, 8, 0),
                factory::at(19, 8, 0),
                DbLabelStatus::Active,
            )
            .await?;
        sign_in(&test, cook.id).await;

        let resp = update_label_status(
            State(app_state(&test)),
            test.session.clone(),
            Path(label.id),
            Json(UpdateLabelStatusDto {
                status: LabelStatus::Used,
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let result = update_label_status(
            State(app_state(&test)),
            test.session.clone(),
            Path(label.id),
            Json(UpdateLabelStatusDto {
                status: LabelStatus::Discarded,
            }),
        )
        .await;
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 not found for a label of another organization
    async fn hides_foreign_label() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let (other, _, _) = test.kitchen().insert_kitchen("Padaria").await?;
        let label = test
            .kitchen()
            .insert_label(
                other.id,
                "Pão de Queijo",
                factory::at(15, 8, 0),
                factory::at(19, 8, 0),
                DbLabelStatus::Active,
            )
            .await?;
        sign_in(&test, cook.id).await;

        let result = update_label_status(
            State(app_state(&test)),
            test.session.clone(),
            Path(label.id),
            Json(UpdateLabelStatusDto {
                status: LabelStatus::Discarded,
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_label_qr {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the label's QR payload
    async fn returns_payload() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let label = test
            .kitchen()
            .insert_label(
                organization.id,
                "Molho Sugo",
                factory::at(15, 8, 0),
                factory::at(18, 8, 0),
                DbLabelStatus::Active,
            )
            .await?;
        sign_in(&test, cook.id).await;

        let resp = get_label_qr(State(app_state(&test)), test.session.clone(), Path(label.id))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let payload: QrPayload = json_body(resp).await;
        assert_eq!(payload.id, label.id.to_string());
        assert_eq!(payload.expiration, "2026-10-18T08:00");

        Ok(())
    }
}

mod print_labels {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with one HTML command per copy on the standard printer
    async fn builds_standard_printer_job() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let label = test
            .kitchen()
            .insert_label(
                organization.id,
                "Molho Sugo",
                factory::at(15, 8, 0),
                factory::at(19, 8, 0),
                DbLabelStatus::Active,
            )
            .await?;
        sign_in(&test, cook.id).await;

        let resp = print_labels(
            State(app_state(&test)),
            test.session.clone(),
            Json(PrintRequestDto {
                label_ids: vec![label.id],
                printer_id: "standard_printer".to_string(),
                copies: 3,
                template_id: None,
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let job: PrintJobDto = json_body(resp).await;
        assert_eq!(job.total, 3);
        assert!(job.commands.iter().all(|c| c.contains("width:70mm")));

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 bad request for an empty selection
    async fn rejects_empty_selection() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let result = print_labels(
            State(app_state(&test)),
            test.session.clone(),
            Json(PrintRequestDto {
                label_ids: vec![],
                printer_id: "zebra_zt230".to_string(),
                copies: 1,
                template_id: None,
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
