/// Solar system and SpaceX data service
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod mapper;
pub mod query;
pub mod routes;
pub mod services;
