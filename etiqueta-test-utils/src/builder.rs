//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::label_tables, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// organizations. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_label_tables: bool,

    // Organizations to insert, each with an admin and a cook
    kitchens: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every application table to the test database.
    ///
    /// Creates Organization, Profile, Product, FoodLabel and LabelTemplate, in that order.
    pub fn with_label_tables(mut self) -> Self {
        self.include_label_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use etiqueta_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), etiqueta_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Organization)
    ///     .with_table(Product)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an organization with an admin and a cook during `build()`.
    ///
    /// See [`KitchenFixtures::insert_kitchen`](crate::fixtures::kitchen::KitchenFixtures::insert_kitchen)
    /// for the usernames and PINs created.
    pub fn with_kitchen(mut self, name: impl Into<String>) -> Self {
        self.kitchens.push(name.into());
        self
    }

    /// Build the test context, creating tables first and then fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_label_tables {
            all_tables.extend(label_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for name in self.kitchens {
            setup.kitchen().insert_kitchen(&name).await?;
        }

        Ok(setup)
    }
}
