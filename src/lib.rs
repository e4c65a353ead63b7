pub mod app_state;
pub mod config;
pub mod dictionary;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod model;
pub mod web;
