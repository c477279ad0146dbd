//! WS-Federation types and data structures.

mod constants;
mod message;
mod relying_party;

pub use constants::*;
pub use message::*;
pub use relying_party::*;
