pub mod config;
pub mod db;
pub mod errors;
pub mod extraction;
pub mod intake;
pub mod models;
pub mod routes;
pub mod screening;
pub mod sessions;
pub mod state;
