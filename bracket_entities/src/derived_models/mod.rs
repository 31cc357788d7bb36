mod tournament_details;

pub use tournament_details::*;
