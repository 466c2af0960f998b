pub mod responder;
pub mod session;

pub use responder::{Reply, Responder};
pub use session::{ChatSession, SessionId, APOLOGY};
