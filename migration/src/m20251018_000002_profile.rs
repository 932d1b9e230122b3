use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_organization::Organization;

static IDX_PROFILE_ORGANIZATION_ID: &str = "idx-profile-organization_id";
static FK_PROFILE_ORGANIZATION_ID: &str = "fk-profile-organization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_uuid(Profile::Id))
                    .col(string_uniq(Profile::Username))
                    .col(string_len(Profile::Role, 16))
                    .col(string_null(Profile::PinHash))
                    .col(uuid(Profile::OrganizationId))
                    .col(timestamp(Profile::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROFILE_ORGANIZATION_ID)
                    .table(Profile::Table)
                    .col(Profile::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_ORGANIZATION_ID)
                    .from_tbl(Profile::Table)
                    .from_col(Profile::OrganizationId)
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
                    .name(FK_PROFILE_ORGANIZATION_ID)
                    .table(Profile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROFILE_ORGANIZATION_ID)
                    .table(Profile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Username,
    Role,
    PinHash,
    OrganizationId,
    CreatedAt,
}
