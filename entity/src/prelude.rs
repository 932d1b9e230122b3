pub use super::food_label::Entity as FoodLabel;
pub use super::label_template::Entity as LabelTemplate;
pub use super::organization::Entity as Organization;
pub use super::product::Entity as Product;
pub use super::profile::Entity as Profile;
