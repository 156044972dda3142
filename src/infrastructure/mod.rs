pub mod auth;
pub mod llm;
pub mod observability;
pub mod persistence;
