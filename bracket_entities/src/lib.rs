pub mod schema;
pub mod domain;
pub mod derived_models;
pub mod error;
pub mod group;
pub mod prelude;
pub mod utilities;
pub mod mock;

pub use group::*;
pub use error::{BracketError, ErrorKind};
