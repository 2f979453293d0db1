//! Domain entities - Core objects with no external concerns

pub mod colleague_id;
pub mod message;

pub use colleague_id::{ColleagueId, Slot};
pub use message::Message;
