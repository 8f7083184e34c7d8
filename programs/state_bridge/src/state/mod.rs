pub mod config;
pub mod outgoing_message;

pub use config::*;
pub use outgoing_message::*;
