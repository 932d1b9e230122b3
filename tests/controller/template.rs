use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use etiqueta::{
    model::template::{default_templates, LabelTemplateDto, SaveTemplateDto},
    server::controller::template::{create_template, delete_template, get_templates},
};
use etiqueta_test_utils::prelude::*;

use super::{app_state, json_body, sign_in};

fn save_template(name: &str) -> SaveTemplateDto {
    let compact = default_templates().remove(1);

    SaveTemplateDto {
        name: name.to_string(),
        width: compact.width,
        height: compact.height,
        font_size: compact.font_size,
        show_qr: false,
        qr_size: compact.qr_size,
        layout: compact.layout,
        colors: compact.colors,
    }
}

mod create_template {
    use super::*;

    #[tokio::test]
    /// Expect the created template to be listed after the built-ins
    async fn lists_created_template() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let resp = create_template(
            State(app_state(&test)),
            test.session.clone(),
            Json(save_template("Potes pequenos")),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = get_templates(State(app_state(&test)), test.session.clone())
            .await
            .unwrap()
            .into_response();
        let templates: Vec<LabelTemplateDto> = json_body(resp).await;
        assert_eq!(templates.len(), 4);
        assert_eq!(templates[3].name, "Potes pequenos");
        assert!(!templates[3].built_in);

        Ok(())
    }
}

mod delete_template {
    use super::*;

    #[tokio::test]
    /// Expect 409 conflict when deleting a built-in template
    async fn rejects_built_in() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let result = delete_template(
            State(app_state(&test)),
            test.session.clone(),
            Path("standard".to_string()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 204 no content when deleting a custom template, then 404
    async fn deletes_custom_template() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        let template = test
            .kitchen()
            .insert_template(organization.id, "Potes")
            .await?;
        sign_in(&test, cook.id).await;

        let resp = delete_template(
            State(app_state(&test)),
            test.session.clone(),
            Path(template.id.to_string()),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let result = delete_template(
            State(app_state(&test)),
            test.session.clone(),
            Path(template.id.to_string()),
        )
        .await;
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
