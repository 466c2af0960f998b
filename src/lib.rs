pub mod grammar;
pub mod parser;
pub mod intent;
pub mod responses;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod bot;

pub use bot::{ChatSession, Responder};
pub use config::BotConfig;
pub use error::BotError;
