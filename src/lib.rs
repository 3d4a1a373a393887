pub mod config;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;
