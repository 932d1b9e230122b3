//! Food label service.
//!
//! Covers the label lifecycle (creation, listing, status changes) and the views derived
//! from an organization's labels: expiration alerts, analytics, QR payloads and print jobs.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        analytics::{compute_analytics, LabelAnalyticsDto},
        label::{
            default_expiration, expiration_alerts, filter_active_labels, CreateLabelDto,
            ExpirationAlertDto, FoodLabelDto, LabelQuery, LabelStatus,
        },
        print::{build_print_commands, find_printer, PrintJobDto, PrintRequestDto},
        product::ProductDto,
        qr::QrPayload,
        template::DEFAULT_TEMPLATE_ID,
        validation::{validate_label, validate_print, ValidationError},
    },
    server::{
        data::{
            label::{LabelRepository, NewLabel},
            product::ProductRepository,
        },
        error::{resource::ResourceError, Error},
        service::template::TemplateService,
    },
};

pub struct LabelService<'a> {
    db: &'a DatabaseConnection,
}

/// Trims an optional text field, blank values become `None`
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<'a> LabelService<'a> {
    /// Creates a new instance of [`LabelService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active label.
    ///
    /// The production date defaults to `now`. When the expiration date is omitted it is
    /// derived from the selected product's default validity; without a product the
    /// expiration date is required.
    ///
    /// # Returns
    /// - `Ok(FoodLabelDto)` - The stored label
    /// - `Err(Error::ValidationError)` - Missing fields or expiration before production
    /// - `Err(Error::ResourceError(ResourceError::ProductNotFound))` - `product_id` is not a
    ///   product of the organization
    pub async fn create_label(
        &self,
        organization_id: Uuid,
        label: CreateLabelDto,
        now: NaiveDateTime,
    ) -> Result<FoodLabelDto, Error> {
        let product = match label.product_id {
            Some(product_id) => Some(
                ProductRepository::new(self.db)
                    .get(organization_id, product_id)
                    .await?
                    .ok_or(ResourceError::ProductNotFound(product_id))?,
            ),
            None => None,
        };

        let production_date = label.production_date.unwrap_or(now);
        let expiration_date = label.expiration_date.or_else(|| {
            product
                .as_ref()
                .map(|p| default_expiration(production_date, p.default_validity_days))
        });

        let label = CreateLabelDto {
            production_date: Some(production_date),
            expiration_date,
            ..label
        };
        validate_label(&label)?;

        let expiration_date = expiration_date.ok_or(ValidationError::LabelFieldsRequired)?;

        let label_repo = LabelRepository::new(self.db);
        let created = label_repo
            .create(
                organization_id,
                NewLabel {
                    product_name: label.product_name.trim().to_string(),
                    product_id: label.product_id,
                    production_date,
                    expiration_date,
                    quantity: label.quantity.trim().to_string(),
                    responsible: optional_text(label.responsible),
                    observations: optional_text(label.observations),
                },
                now,
            )
            .await?;

        Ok(created.into())
    }

    /// Active labels matching the query's bucket filter and search, most urgent first
    pub async fn get_labels(
        &self,
        organization_id: Uuid,
        query: &LabelQuery,
        now: NaiveDateTime,
    ) -> Result<Vec<FoodLabelDto>, Error> {
        let labels = self.get_active_labels(organization_id).await?;

        Ok(filter_active_labels(
            &labels,
            query.filter.unwrap_or_default(),
            query.search.as_deref(),
            now,
        ))
    }

    /// Marks a label as used or discarded.
    ///
    /// # Returns
    /// - `Ok(FoodLabelDto)` - The updated label
    /// - `Err(Error::ResourceError(ResourceError::LabelNotFound))` - No such label within the
    ///   organization
    /// - `Err(Error::ResourceError(ResourceError::InvalidStatusTransition))` - The label is
    ///   not active or `status` is `active`
    pub async fn update_status(
        &self,
        organization_id: Uuid,
        label_id: Uuid,
        status: LabelStatus,
    ) -> Result<FoodLabelDto, Error> {
        let label_repo = LabelRepository::new(self.db);

        let Some(label) = label_repo.get(organization_id, label_id).await? else {
            return Err(ResourceError::LabelNotFound(label_id).into());
        };

        let current: LabelStatus = label.status.into();
        if !current.can_transition_to(status) {
            return Err(ResourceError::InvalidStatusTransition {
                from: current,
                to: status,
            }
            .into());
        }

        // The write only applies while the label still has the status checked above
        if let Some(updated) = label_repo
            .update_status(organization_id, label_id, current.into(), status.into())
            .await?
        {
            return Ok(updated.into());
        }

        match label_repo.get(organization_id, label_id).await? {
            Some(label) => Err(ResourceError::InvalidStatusTransition {
                from: label.status.into(),
                to: status,
            }
            .into()),
            None => Err(ResourceError::LabelNotFound(label_id).into()),
        }
    }

    /// Expired, expiring today, and expiring soon alerts, in that order
    pub async fn get_alerts(
        &self,
        organization_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Vec<ExpirationAlertDto>, Error> {
        let labels = self.get_active_labels(organization_id).await?;

        Ok(expiration_alerts(&labels, now))
    }

    /// Aggregates every label of the organization for the dashboard
    pub async fn get_analytics(
        &self,
        organization_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<LabelAnalyticsDto, Error> {
        let label_repo = LabelRepository::new(self.db);
        let product_repo = ProductRepository::new(self.db);

        let labels: Vec<FoodLabelDto> = label_repo
            .get_all(organization_id)
            .await?
            .into_iter()
            .map(FoodLabelDto::from)
            .collect();
        let products: Vec<ProductDto> = product_repo
            .get_all(organization_id)
            .await?
            .into_iter()
            .map(ProductDto::from)
            .collect();

        Ok(compute_analytics(&labels, &products, now))
    }

    /// QR payload of a stored label
    pub async fn get_qr_payload(
        &self,
        organization_id: Uuid,
        label_id: Uuid,
    ) -> Result<QrPayload, Error> {
        let label_repo = LabelRepository::new(self.db);

        let label = label_repo
            .get(organization_id, label_id)
            .await?
            .ok_or(ResourceError::LabelNotFound(label_id))?;

        Ok(QrPayload::from_label(&label.into()))
    }

    /// Builds the printer commands of a print job.
    ///
    /// Labels are printed in expiration order, each repeated `copies` times. Every requested
    /// label must belong to the organization.
    pub async fn print_labels(
        &self,
        organization_id: Uuid,
        request: &PrintRequestDto,
    ) -> Result<PrintJobDto, Error> {
        validate_print(request)?;

        let printer = find_printer(&request.printer_id)
            .ok_or_else(|| ValidationError::UnknownPrinter(request.printer_id.clone()))?;

        let template_id = request.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID);
        let template = TemplateService::new(self.db)
            .get_template(organization_id, template_id)
            .await?;

        let label_repo = LabelRepository::new(self.db);
        let labels: Vec<FoodLabelDto> = label_repo
            .get_many(organization_id, &request.label_ids)
            .await?
            .into_iter()
            .map(FoodLabelDto::from)
            .collect();

        if let Some(missing) = request
            .label_ids
            .iter()
            .find(|id| !labels.iter().any(|label| label.id == **id))
        {
            return Err(ResourceError::LabelNotFound(*missing).into());
        }

        let commands = build_print_commands(&labels, &printer, request.copies, &template);

        Ok(PrintJobDto {
            printer,
            copies: request.copies,
            label_count: labels.len(),
            total: commands.len(),
            commands,
        })
    }

    async fn get_active_labels(&self, organization_id: Uuid) -> Result<Vec<FoodLabelDto>, Error> {
        let label_repo = LabelRepository::new(self.db);

        Ok(label_repo
            .get_active(organization_id)
            .await?
            .into_iter()
            .map(FoodLabelDto::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    mod create_label {
        use etiqueta_test_utils::prelude::*;

        use crate::{
            model::{
                label::{CreateLabelDto, LabelStatus},
                validation::ValidationError,
            },
            server::{
                error::{resource::ResourceError, Error},
                service::label::LabelService,
            },
        };

        /// Expect expiration to be derived from the product's default validity
        #[tokio::test]
        async fn derives_expiration_from_product() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let product = test
                .kitchen()
                .insert_product(organization.id, "Molho Sugo", 3, "Cozinha Quente")
                .await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .create_label(
                    organization.id,
                    CreateLabelDto {
                        product_name: "Molho Sugo".to_string(),
                        product_id: Some(product.id),
                        quantity: "3 litros".to_string(),
                        responsible: Some("  ".to_string()),
                        ..Default::default()
                    },
                    factory::test_now(),
                )
                .await;

            assert!(result.is_ok());
            let label = result.unwrap();
            assert_eq!(label.production_date, factory::test_now());
            assert_eq!(label.expiration_date, factory::at(21, 10, 0));
            assert_eq!(label.status, LabelStatus::Active);
            assert_eq!(label.responsible, None);

            Ok(())
        }

        /// Expect validation error without a product or an expiration date
        #[tokio::test]
        async fn requires_expiration_without_product() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .create_label(
                    organization.id,
                    CreateLabelDto {
                        product_name: "Pudim".to_string(),
                        quantity: "1 forma".to_string(),
                        ..Default::default()
                    },
                    factory::test_now(),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::LabelFieldsRequired))
            ));

            Ok(())
        }

        /// Expect validation error when expiration precedes production
        #[tokio::test]
        async fn rejects_expiration_before_production() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .create_label(
                    organization.id,
                    CreateLabelDto {
                        product_name: "Pudim".to_string(),
                        production_date: Some(factory::at(18, 9, 0)),
                        expiration_date: Some(factory::at(17, 9, 0)),
                        quantity: "1 forma".to_string(),
                        ..Default::default()
                    },
                    factory::test_now(),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(
                    ValidationError::ExpirationBeforeProduction
                ))
            ));

            Ok(())
        }

        /// Expect not found when the product belongs to another organization
        #[tokio::test]
        async fn rejects_foreign_product() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let other = test.kitchen().insert_organization("Padaria").await?;
            let product = test
                .kitchen()
                .insert_product(other.id, "Pão de Queijo", 2, "Padaria")
                .await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .create_label(
                    organization.id,
                    CreateLabelDto {
                        product_name: "Pão de Queijo".to_string(),
                        product_id: Some(product.id),
                        quantity: "20 un".to_string(),
                        ..Default::default()
                    },
                    factory::test_now(),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::ProductNotFound(_)))
            ));

            Ok(())
        }
    }

    mod get_labels {
        use entity::sea_orm_active_enums::LabelStatus;
        use etiqueta_test_utils::prelude::*;

        use crate::{
            model::label::{LabelFilter, LabelQuery},
            server::service::label::LabelService,
        };

        /// Expect only active labels in the requested bucket
        #[tokio::test]
        async fn filters_by_bucket() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let production = factory::at(15, 8, 0);
            for (name, expiration, status) in [
                ("Vencido", factory::at(17, 9, 0), LabelStatus::Active),
                ("Hoje", factory::at(18, 20, 0), LabelStatus::Active),
                ("Usado", factory::at(18, 20, 0), LabelStatus::Used),
                ("Amanhã", factory::at(19, 9, 0), LabelStatus::Active),
            ] {
                test.kitchen()
                    .insert_label(organization.id, name, production, expiration, status)
                    .await?;
            }

            let label_service = LabelService::new(&test.db);
            let query = LabelQuery {
                filter: Some(LabelFilter::Today),
                search: None,
            };
            let labels = label_service
                .get_labels(organization.id, &query, factory::test_now())
                .await
                .unwrap();

            assert_eq!(labels.len(), 1);
            assert_eq!(labels[0].product_name, "Hoje");

            Ok(())
        }
    }

    mod update_status {
        use entity::sea_orm_active_enums::LabelStatus as DbLabelStatus;
        use etiqueta_test_utils::prelude::*;

        use crate::{
            model::label::LabelStatus,
            server::{
                data::label::LabelRepository,
                error::{resource::ResourceError, Error},
                service::label::LabelService,
            },
        };

        /// Expect an active label to be marked as used
        #[tokio::test]
        async fn marks_active_label_used() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
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

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .update_status(organization.id, label.id, LabelStatus::Used)
                .await;

            assert!(matches!(result, Ok(l) if l.status == LabelStatus::Used));

            Ok(())
        }

        /// Expect exactly one of two simultaneous transitions to win
        #[tokio::test]
        async fn concurrent_transitions_keep_terminal_status() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
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

            let label_service = LabelService::new(&test.db);
            let (used, discarded) = tokio::join!(
                label_service.update_status(organization.id, label.id, LabelStatus::Used),
                label_service.update_status(organization.id, label.id, LabelStatus::Discarded),
            );

            let (winner, loser) = match (used, discarded) {
                (Ok(winner), Err(loser)) | (Err(loser), Ok(winner)) => (winner, loser),
                (used, discarded) => panic!(
                    "expected exactly one transition to succeed, got {:?} and {:?}",
                    used.map(|l| l.status),
                    discarded.map(|l| l.status)
                ),
            };
            assert!(matches!(
                loser,
                Error::ResourceError(ResourceError::InvalidStatusTransition { .. })
            ));

            let stored = LabelRepository::new(&test.db)
                .get(organization.id, label.id)
                .await?
                .map(|l| LabelStatus::from(l.status));
            assert_eq!(stored, Some(winner.status));

            Ok(())
        }

        /// Expect conflict when changing a discarded label
        #[tokio::test]
        async fn rejects_terminal_label() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let label = test
                .kitchen()
                .insert_label(
                    organization.id,
                    "Molho Sugo",
                    factory::at(15, 8, 0),
                    factory::at(19, 8, 0),
                    DbLabelStatus::Discarded,
                )
                .await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .update_status(organization.id, label.id, LabelStatus::Used)
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(
                    ResourceError::InvalidStatusTransition { .. }
                ))
            ));

            Ok(())
        }

        /// Expect not found for a label of another organization
        #[tokio::test]
        async fn rejects_foreign_label() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let other = test.kitchen().insert_organization("Padaria").await?;
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

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .update_status(organization.id, label.id, LabelStatus::Discarded)
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::LabelNotFound(_)))
            ));

            Ok(())
        }
    }

    mod get_analytics {
        use entity::sea_orm_active_enums::LabelStatus;
        use etiqueta_test_utils::prelude::*;

        use crate::server::service::label::LabelService;

        /// Expect departments to be resolved through the organization's catalog
        #[tokio::test]
        async fn resolves_departments_from_catalog() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            test.kitchen()
                .insert_product(organization.id, "Molho Sugo", 3, "Cozinha Quente")
                .await?;
            let production = factory::at(17, 8, 0);
            test.kitchen()
                .insert_label(
                    organization.id,
                    "Molho Sugo",
                    production,
                    factory::at(20, 8, 0),
                    LabelStatus::Active,
                )
                .await?;
            test.kitchen()
                .insert_label(
                    organization.id,
                    "Pudim",
                    production,
                    factory::at(20, 8, 0),
                    LabelStatus::Discarded,
                )
                .await?;

            let label_service = LabelService::new(&test.db);
            let analytics = label_service
                .get_analytics(organization.id, factory::test_now())
                .await
                .unwrap();

            assert_eq!(analytics.stats.total, 2);
            assert_eq!(analytics.waste_rate, 50.0);
            let departments: Vec<&str> = analytics
                .department_stats
                .iter()
                .map(|d| d.name.as_str())
                .collect();
            assert_eq!(departments, vec!["Cozinha Quente", "Geral"]);

            Ok(())
        }
    }

    mod print_labels {
        use entity::sea_orm_active_enums::LabelStatus;
        use etiqueta_test_utils::prelude::*;

        use crate::{
            model::{print::PrintRequestDto, validation::ValidationError},
            server::{
                error::{resource::ResourceError, Error},
                service::label::LabelService,
            },
        };

        /// Expect one ZPL command per label copy
        #[tokio::test]
        async fn builds_thermal_job() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let label = test
                .kitchen()
                .insert_label(
                    organization.id,
                    "Molho Sugo",
                    factory::at(15, 8, 0),
                    factory::at(19, 8, 0),
                    LabelStatus::Active,
                )
                .await?;

            let label_service = LabelService::new(&test.db);
            let job = label_service
                .print_labels(
                    organization.id,
                    &PrintRequestDto {
                        label_ids: vec![label.id],
                        printer_id: "brother_ql820nwb".to_string(),
                        copies: 2,
                        template_id: None,
                    },
                )
                .await
                .unwrap();

            assert_eq!(job.label_count, 1);
            assert_eq!(job.total, 2);
            assert!(job.commands[0].contains("^FDMolho Sugo^FS"));

            Ok(())
        }

        /// Expect a validation error when the same label is selected twice
        #[tokio::test]
        async fn rejects_repeated_label() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let label = test
                .kitchen()
                .insert_label(
                    organization.id,
                    "Molho Sugo",
                    factory::at(15, 8, 0),
                    factory::at(19, 8, 0),
                    LabelStatus::Active,
                )
                .await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .print_labels(
                    organization.id,
                    &PrintRequestDto {
                        label_ids: vec![label.id, label.id],
                        printer_id: "zebra_zt230".to_string(),
                        copies: 1,
                        template_id: None,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(
                    ValidationError::DuplicateLabelSelection
                ))
            ));

            Ok(())
        }

        /// Expect not found when a selected label belongs to another organization
        #[tokio::test]
        async fn rejects_foreign_label() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let other = test.kitchen().insert_organization("Padaria").await?;
            let label = test
                .kitchen()
                .insert_label(
                    other.id,
                    "Pão de Queijo",
                    factory::at(15, 8, 0),
                    factory::at(19, 8, 0),
                    LabelStatus::Active,
                )
                .await?;

            let label_service = LabelService::new(&test.db);
            let result = label_service
                .print_labels(
                    organization.id,
                    &PrintRequestDto {
                        label_ids: vec![label.id],
                        printer_id: "standard_printer".to_string(),
                        copies: 1,
                        template_id: Some("compact".to_string()),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::LabelNotFound(_)))
            ));

            Ok(())
        }
    }
}
