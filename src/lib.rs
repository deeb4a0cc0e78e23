pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod web;

pub use config::*;
pub use error::*;
pub use models::*;
