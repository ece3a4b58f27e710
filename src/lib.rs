pub mod actions;
pub mod auth;
pub mod cache;
pub mod config;
pub mod db;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod state;
