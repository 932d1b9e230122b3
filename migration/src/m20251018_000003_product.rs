use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_organization::Organization;

static IDX_PRODUCT_ORGANIZATION_ID: &str = "idx-product-organization_id";
static FK_PRODUCT_ORGANIZATION_ID: &str = "fk-product-organization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_uuid(Product::Id))
                    .col(string(Product::Name))
                    .col(integer(Product::DefaultValidityDays))
                    .col(string(Product::Department))
                    .col(uuid(Product::OrganizationId))
                    .col(timestamp(Product::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_ORGANIZATION_ID)
                    .table(Product::Table)
                    .col(Product::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_ORGANIZATION_ID)
                    .from_tbl(Product::Table)
                    .from_col(Product::OrganizationId)
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
                    .name(FK_PRODUCT_ORGANIZATION_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_ORGANIZATION_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    DefaultValidityDays,
    Department,
    OrganizationId,
    CreatedAt,
}
