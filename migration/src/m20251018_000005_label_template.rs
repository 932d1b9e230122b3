use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_organization::Organization;

static IDX_LABEL_TEMPLATE_ORGANIZATION_ID: &str = "idx-label_template-organization_id";
static FK_LABEL_TEMPLATE_ORGANIZATION_ID: &str = "fk-label_template-organization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LabelTemplate::Table)
                    .if_not_exists()
                    .col(pk_uuid(LabelTemplate::Id))
                    .col(string(LabelTemplate::Name))
                    .col(integer(LabelTemplate::WidthMm))
                    .col(integer(LabelTemplate::HeightMm))
                    .col(integer(LabelTemplate::ProductFontSize))
                    .col(integer(LabelTemplate::DetailsFontSize))
                    .col(integer(LabelTemplate::SmallFontSize))
                    .col(boolean(LabelTemplate::ShowQr))
                    .col(integer(LabelTemplate::QrSize))
                    .col(string_len(LabelTemplate::Layout, 16))
                    .col(string_len(LabelTemplate::BackgroundColor, 7))
                    .col(string_len(LabelTemplate::TextColor, 7))
                    .col(string_len(LabelTemplate::AccentColor, 7))
                    .col(uuid(LabelTemplate::OrganizationId))
                    .col(timestamp(LabelTemplate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LABEL_TEMPLATE_ORGANIZATION_ID)
                    .table(LabelTemplate::Table)
                    .col(LabelTemplate::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LABEL_TEMPLATE_ORGANIZATION_ID)
                    .from_tbl(LabelTemplate::Table)
                    .from_col(LabelTemplate::OrganizationId)
                    .to_tbl(Organization::Table)
                    .to_col(Organization::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LABEL_TEMPLATE_ORGANIZATION_ID)
                    .table(LabelTemplate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LABEL_TEMPLATE_ORGANIZATION_ID)
                    .table(LabelTemplate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LabelTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LabelTemplate {
    Table,
    Id,
    Name,
    WidthMm,
    HeightMm,
    ProductFontSize,
    DetailsFontSize,
    SmallFontSize,
    ShowQr,
    QrSize,
    Layout,
    BackgroundColor,
    TextColor,
    AccentColor,
    OrganizationId,
    CreatedAt,
}
