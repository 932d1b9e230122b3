//! Label template service.
//!
//! Built-in templates are served from `model::template` and are never stored; custom
//! templates live in the `label_template` table and are identified by UUID strings.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        template::{
            default_templates, find_template, is_built_in, LabelTemplateDto, SaveTemplateDto,
        },
        validation::validate_template,
    },
    server::{
        data::template::TemplateRepository,
        error::{resource::ResourceError, Error},
    },
};

pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

/// Parses a custom template id, built-in and malformed ids are reported as not found
fn custom_template_id(template_id: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(template_id)
        .map_err(|_| ResourceError::TemplateNotFound(template_id.to_string()).into())
}

impl<'a> TemplateService<'a> {
    /// Creates a new instance of [`TemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Built-in templates followed by the organization's custom templates
    pub async fn get_templates(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<LabelTemplateDto>, Error> {
        let template_repo = TemplateRepository::new(self.db);

        let mut templates = default_templates();
        templates.extend(
            template_repo
                .get_all(organization_id)
                .await?
                .into_iter()
                .map(LabelTemplateDto::from),
        );

        Ok(templates)
    }

    /// Looks up a built-in or custom template by id
    pub async fn get_template(
        &self,
        organization_id: Uuid,
        template_id: &str,
    ) -> Result<LabelTemplateDto, Error> {
        if is_built_in(template_id) {
            let templates = default_templates();
            return find_template(&templates, template_id)
                .cloned()
                .ok_or_else(|| {
                    Error::InternalError(format!("Built-in template {} is missing", template_id))
                });
        }

        let template_repo = TemplateRepository::new(self.db);
        template_repo
            .get(organization_id, custom_template_id(template_id)?)
            .await?
            .map(LabelTemplateDto::from)
            .ok_or_else(|| ResourceError::TemplateNotFound(template_id.to_string()).into())
    }

    pub async fn create_template(
        &self,
        organization_id: Uuid,
        template: SaveTemplateDto,
        now: NaiveDateTime,
    ) -> Result<LabelTemplateDto, Error> {
        validate_template(&template)?;

        let template_repo = TemplateRepository::new(self.db);
        let created = template_repo.create(organization_id, template, now).await?;

        Ok(created.into())
    }

    /// Replaces a custom template; built-in templates cannot be changed
    pub async fn update_template(
        &self,
        organization_id: Uuid,
        template_id: &str,
        template: SaveTemplateDto,
    ) -> Result<LabelTemplateDto, Error> {
        if is_built_in(template_id) {
            return Err(ResourceError::BuiltInTemplate(template_id.to_string()).into());
        }
        validate_template(&template)?;

        let template_repo = TemplateRepository::new(self.db);
        template_repo
            .update(organization_id, custom_template_id(template_id)?, template)
            .await?
            .map(LabelTemplateDto::from)
            .ok_or_else(|| ResourceError::TemplateNotFound(template_id.to_string()).into())
    }

    /// Deletes a custom template; built-in templates cannot be deleted
    pub async fn delete_template(
        &self,
        organization_id: Uuid,
        template_id: &str,
    ) -> Result<(), Error> {
        if is_built_in(template_id) {
            return Err(ResourceError::BuiltInTemplate(template_id.to_string()).into());
        }

        let template_repo = TemplateRepository::new(self.db);
        let result = template_repo
            .delete(organization_id, custom_template_id(template_id)?)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::TemplateNotFound(template_id.to_string()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::template::{default_templates, SaveTemplateDto};

    fn save_dto(name: &str) -> SaveTemplateDto {
        let detailed = default_templates().remove(2);

        SaveTemplateDto {
            name: name.to_string(),
            width: detailed.width,
            height: detailed.height,
            font_size: detailed.font_size,
            show_qr: detailed.show_qr,
            qr_size: detailed.qr_size,
            layout: detailed.layout,
            colors: detailed.colors,
        }
    }

    mod get_templates {
        use etiqueta_test_utils::prelude::*;

        use crate::server::service::template::TemplateService;

        /// Expect built-ins first, then the organization's own templates
        #[tokio::test]
        async fn lists_built_ins_and_custom() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let other = test.kitchen().insert_organization("Padaria").await?;
            test.kitchen()
                .insert_template(organization.id, "Potes")
                .await?;
            test.kitchen().insert_template(other.id, "Caixas").await?;

            let template_service = TemplateService::new(&test.db);
            let templates = template_service.get_templates(organization.id).await.unwrap();

            let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["Standard", "Compact", "Detailed", "Potes"]);
            assert!(!templates[3].built_in);

            Ok(())
        }
    }

    mod get_template {
        use etiqueta_test_utils::prelude::*;

        use crate::server::{
            error::{resource::ResourceError, Error},
            service::template::TemplateService,
        };

        /// Expect built-in ids to resolve without touching the database
        #[tokio::test]
        async fn resolves_built_in() -> Result<(), TestError> {
            let test = test_setup_with_label_tables!()?;

            let template_service = TemplateService::new(&test.db);
            let result = template_service
                .get_template(uuid::Uuid::new_v4(), "compact")
                .await;

            assert!(matches!(result, Ok(t) if t.width == 50 && t.built_in));

            Ok(())
        }

        /// Expect not found for malformed ids
        #[tokio::test]
        async fn fails_for_malformed_id() -> Result<(), TestError> {
            let test = test_setup_with_label_tables!()?;

            let template_service = TemplateService::new(&test.db);
            let result = template_service
                .get_template(uuid::Uuid::new_v4(), "poster")
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::TemplateNotFound(_)))
            ));

            Ok(())
        }
    }

    mod update_template {
        use etiqueta_test_utils::prelude::*;

        use super::save_dto;
        use crate::server::{
            error::{resource::ResourceError, Error},
            service::template::TemplateService,
        };

        /// Expect built-in templates to be immutable
        #[tokio::test]
        async fn rejects_built_in() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;

            let template_service = TemplateService::new(&test.db);
            let result = template_service
                .update_template(organization.id, "standard", save_dto("Meu padrão"))
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::BuiltInTemplate(_)))
            ));

            Ok(())
        }

        /// Expect the updated template for a custom template of the organization
        #[tokio::test]
        async fn updates_custom_template() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let template = test
                .kitchen()
                .insert_template(organization.id, "Potes")
                .await?;

            let template_service = TemplateService::new(&test.db);
            let result = template_service
                .update_template(organization.id, &template.id.to_string(), save_dto("Caixas"))
                .await;

            assert!(matches!(result, Ok(t) if t.name == "Caixas" && t.width == 80));

            Ok(())
        }
    }

    mod delete_template {
        use etiqueta_test_utils::prelude::*;

        use crate::server::{
            error::{resource::ResourceError, Error},
            service::template::TemplateService,
        };

        /// Expect not found when deleting another organization's template
        #[tokio::test]
        async fn rejects_foreign_template() -> Result<(), TestError> {
            let mut test = test_setup_with_label_tables!()?;
            let organization = test.kitchen().insert_organization("Cozinha Central").await?;
            let other = test.kitchen().insert_organization("Padaria").await?;
            let template = test.kitchen().insert_template(other.id, "Caixas").await?;

            let template_service = TemplateService::new(&test.db);
            let result = template_service
                .delete_template(organization.id, &template.id.to_string())
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::TemplateNotFound(_)))
            ));

            Ok(())
        }

        /// Expect built-in templates to survive deletion attempts
        #[tokio::test]
        async fn rejects_built_in() -> Result<(), TestError> {
            let test = test_setup_with_label_tables!()?;

            let template_service = TemplateService::new(&test.db);
            let result = template_service
                .delete_template(uuid::Uuid::new_v4(), "detailed")
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::BuiltInTemplate(_)))
            ));

            Ok(())
        }
    }
}
