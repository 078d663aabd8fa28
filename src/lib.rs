pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod html;
pub mod middleware;
pub mod router;
pub mod service;

pub use db::Datastores;
pub use error::AdminError;
