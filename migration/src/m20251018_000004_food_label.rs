use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000001_organization::Organization, m20251018_000003_product::Product};

static IDX_FOOD_LABEL_ORGANIZATION_ID_STATUS: &str = "idx-food_label-organization_id-status";
static FK_FOOD_LABEL_ORGANIZATION_ID: &str = "fk-food_label-organization_id";
static FK_FOOD_LABEL_PRODUCT_ID: &str = "fk-food_label-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodLabel::Table)
                    .if_not_exists()
                    .col(pk_uuid(FoodLabel::Id))
                    .col(string(FoodLabel::ProductName))
                    .col(uuid_null(FoodLabel::ProductId))
                    .col(timestamp(FoodLabel::ProductionDate))
                    .col(timestamp(FoodLabel::ExpirationDate))
                    .col(string(FoodLabel::Quantity))
                    .col(string_null(FoodLabel::Responsible))
                    .col(text_null(FoodLabel::Observations))
                    .col(string_len(FoodLabel::Status, 16))
                    .col(uuid(FoodLabel::OrganizationId))
                    .col(timestamp(FoodLabel::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOD_LABEL_ORGANIZATION_ID_STATUS)
                    .table(FoodLabel::Table)
                    .col(FoodLabel::OrganizationId)
                    .col(FoodLabel::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOOD_LABEL_ORGANIZATION_ID)
                    .from_tbl(FoodLabel::Table)
                    .from_col(FoodLabel::OrganizationId)
                    .to_tbl(Organization::Table)
                    .to_col(Organization::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOOD_LABEL_PRODUCT_ID)
                    .from_tbl(FoodLabel::Table)
                    .from_col(FoodLabel::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOOD_LABEL_PRODUCT_ID)
                    .table(FoodLabel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOOD_LABEL_ORGANIZATION_ID)
                    .table(FoodLabel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOD_LABEL_ORGANIZATION_ID_STATUS)
                    .table(FoodLabel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FoodLabel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FoodLabel {
    Table,
    Id,
    ProductName,
    ProductId,
    ProductionDate,
    ExpirationDate,
    Quantity,
    Responsible,
    Observations,
    Status,
    OrganizationId,
    CreatedAt,
}
