mod chat;
pub mod chat_types;
mod health;

pub use chat::chat_handler;
pub use health::{health_handler, root_handler};
