// Modules principaux
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

// Ré-exports pour faciliter l'utilisation
pub use crate::api::ApiClient;
pub use crate::config::AppConfig;
pub use crate::core::auth::AuthService;
pub use crate::core::session::{Session, SessionStore};
pub use crate::error::{AppError, AppResult};

// Version de l'application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "GlobalEdutech Admin";
