pub mod catalog;
pub mod client;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod namespace;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
