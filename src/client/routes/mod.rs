pub mod dashboard;
pub mod labels;
pub mod login;
pub mod new_label;
pub mod not_found;
pub mod products;
pub mod templates;
pub mod users;

pub use dashboard::Dashboard;
pub use labels::Labels;
pub use login::Login;
pub use new_label::NewLabel;
pub use not_found::NotFound;
pub use products::Products;
pub use templates::Templates;
pub use users::Users;
