pub mod current_organization;
pub mod header;
pub mod signed_in_as;
pub mod user_menu;

pub use header::Header;
pub use user_menu::UserMenu;
