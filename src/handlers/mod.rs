pub mod auth;
pub mod create;
pub mod details;
pub mod edit;
pub mod entities;
pub mod forms;
