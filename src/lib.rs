pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod photo;
pub mod routes;
pub mod server;
pub mod state;
