pub use sea_orm_migration::prelude::*;

mod m20251018_000001_organization;
mod m20251018_000002_profile;
mod m20251018_000003_product;
mod m20251018_000004_food_label;
mod m20251018_000005_label_template;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_organization::Migration),
            Box::new(m20251018_000002_profile::Migration),
            Box::new(m20251018_000003_product::Migration),
            Box::new(m20251018_000004_food_label::Migration),
            Box::new(m20251018_000005_label_template::Migration),
        ]
    }
}
