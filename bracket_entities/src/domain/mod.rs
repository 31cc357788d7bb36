pub mod entity;
pub mod tournament;
pub mod team;
pub mod court;
pub mod official;
pub mod stage;
pub mod ranking;
pub mod stage_item;
pub mod stage_item_input;
pub mod round;
pub mod tournament_match;

pub use entity::{TournamentEntity, LoadEntity};

pub type TournamentId = i32;
pub type TeamId = i32;
pub type CourtId = i32;
pub type OfficialId = i32;
pub type StageId = i32;
pub type RankingId = i32;
pub type StageItemId = i32;
pub type StageItemInputId = i32;
pub type RoundId = i32;
pub type MatchId = i32;
