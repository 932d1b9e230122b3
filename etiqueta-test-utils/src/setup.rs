use sea_orm::{sea_query::TableCreateStatement, Schema};

/// Create statements for every application table, parents first.
pub fn label_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Organization),
        schema.create_table_from_entity(entity::prelude::Profile),
        schema.create_table_from_entity(entity::prelude::Product),
        schema.create_table_from_entity(entity::prelude::FoodLabel),
        schema.create_table_from_entity(entity::prelude::LabelTemplate),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_label_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::setup::label_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
