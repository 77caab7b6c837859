mod config;
mod ids;
mod message;

pub use config::{ConfigError, SessionConfig};
pub use ids::MessageId;
pub use message::{Message, MessageRole};
