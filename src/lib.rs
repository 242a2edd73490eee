pub mod api;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod services;
