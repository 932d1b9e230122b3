use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        product::{CreateProductDto, ProductDto, DEFAULT_CATALOG},
        validation::validate_product,
    },
    server::{data::product::ProductRepository, error::Error},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the organization's catalog sorted by name
    ///
    /// `search` matches the product name or department, ignoring case.
    pub async fn get_products(
        &self,
        organization_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<ProductDto>, Error> {
        let product_repo = ProductRepository::new(self.db);

        let products = product_repo
            .get_all(organization_id)
            .await?
            .into_iter()
            .map(ProductDto::from)
            .filter(|product| search.map_or(true, |term| product.matches_search(term)))
            .collect();

        Ok(products)
    }

    /// Adds a product to the organization's catalog
    pub async fn create_product(
        &self,
        organization_id: Uuid,
        product: CreateProductDto,
        now: NaiveDateTime,
    ) -> Result<ProductDto, Error> {
        validate_product(&product)?;

        let product_repo = ProductRepository::new(self.db);
        let created = product_repo
            .create(
                organization_id,
                product.name.trim(),
                product.default_validity_days,
                product.department.trim(),
                now,
            )
            .await?;

        Ok(created.into())
    }

    /// Seeds the default catalog into an organization that has no products yet
    ///
    /// Returns whether the catalog was seeded.
    pub async fn seed_default_catalog(
        &self,
        organization_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<bool, Error> {
        let product_repo = ProductRepository::new(self.db);

        if product_repo.count(organization_id).await? > 0 {
            return Ok(false);
        }

        product_repo
            .create_many(organization_id, &DEFAULT_CATALOG, now)
            .await?;

        tracing::info!(
            organization_id = %organization_id,
            "Seeded default product catalog"
        );

        Ok(true)
    }
}
