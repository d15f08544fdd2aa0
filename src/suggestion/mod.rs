// src/suggestion/mod.rs
pub mod client;
pub mod models;

pub use client::SuggestionClient;
pub use models::SuggestionRequest;
