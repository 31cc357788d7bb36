pub mod actions;
pub mod views;
pub mod builder;
pub mod scheduling;
pub mod conflicts;
pub mod ranking;
pub mod swiss;

pub use actions::*;
pub use views::*;

pub use bracket_entities::error::{BracketError, ErrorKind};
