//! Conversation layer: turns a predicted intent into a reply and drives the
//! read-classify-answer loop.

pub mod context;
pub mod resolver;
pub mod session;

pub use context::{ChatContext, Reply};
pub use resolver::{MATH_INTENT, MATH_PREFIX, NO_ANSWER, resolve};
pub use session::{ChatSession, SessionConfig, SessionState};
