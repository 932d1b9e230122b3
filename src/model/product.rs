use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog every new organization starts with: (name, default validity in days, department)
pub const DEFAULT_CATALOG: [(&str, i32, &str); 4] = [
    ("Molho de Tomate", 3, "Cozinha Quente"),
    ("Molho Sugo", 3, "Cozinha Quente"),
    ("Salada Verde", 1, "Cozinha Fria"),
    ("Carne Moída", 2, "Açougue"),
];

pub const MIN_VALIDITY_DAYS: i32 = 1;
pub const MAX_VALIDITY_DAYS: i32 = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub default_validity_days: i32,
    pub department: String,
    pub created_at: NaiveDateTime,
}

impl ProductDto {
    /// Case-insensitive match of `term` against the product name or department
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();

        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.department.to_lowercase().contains(&term)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateProductDto {
    pub name: String,
    pub default_validity_days: i32,
    pub department: String,
}

impl Default for CreateProductDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            default_validity_days: MIN_VALIDITY_DAYS,
            department: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
pub struct ProductQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::ProductDto;

    fn product(name: &str, department: &str) -> ProductDto {
        ProductDto {
            id: Uuid::new_v4(),
            name: name.to_string(),
            default_validity_days: 3,
            department: department.to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn matches_name_or_department_ignoring_case() {
        let product = product("Molho de Tomate", "Cozinha Quente");

        assert!(product.matches_search("tomate"));
        assert!(product.matches_search("QUENTE"));
        assert!(product.matches_search(""));
        assert!(!product.matches_search("salada"));
    }
}
