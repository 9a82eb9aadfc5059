//! Widgets for the streambox TUI

pub mod confirm_dialog;
pub mod home;
pub mod pages;
pub mod settings;
pub mod toast;
pub mod top_nav;

pub use confirm_dialog::ConfirmDialog;
pub use home::HomePage;
pub use pages::{AppsPage, Placeholder};
pub use settings::SettingsOverlay;
pub use toast::Toast;
pub use top_nav::TopNav;
