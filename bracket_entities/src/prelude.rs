pub use crate::domain::{
    court::Court,
    official::Official,
    ranking::Ranking,
    round::{BracketPosition, Round},
    stage::Stage,
    stage_item::{StageItem, StageType},
    stage_item_input::{InputSource, MatchOutcome, StageItemInput, TeamStatistics},
    team::Team,
    tournament::Tournament,
    tournament_match::{MatchSide, MatchSource, TournamentMatch},
    LoadEntity,
    TournamentEntity,
};
pub use crate::derived_models::{RoundWithMatches, StageItemWithRounds, StageWithItems, TournamentDetails};
pub use crate::error::{BracketError, ErrorKind};
pub use crate::group::{Entity, EntityGroup};
