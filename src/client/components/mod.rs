pub mod expiration_badge;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod title;

pub use expiration_badge::ExpirationBadge;
pub use layout::AppLayout;
pub use navbar::Navbar;
pub use page::Page;
pub use title::EtiquetaTitleButton;
