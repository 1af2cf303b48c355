//! Line-oriented text protocol for playing a tabiya game.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::SessionError;
pub use session::{Flow, Session, SessionConfig};
