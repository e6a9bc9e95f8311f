pub mod config;
pub mod db;
pub mod error;
pub mod fs;
pub mod models;
pub mod services;

pub use config::StoreConfig;
pub use db::Store;
pub use error::{StoreError, StoreResult};
