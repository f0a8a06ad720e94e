pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod service;
pub mod template;
pub mod types;

pub use error::CmsError;
