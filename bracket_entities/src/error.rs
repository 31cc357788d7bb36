use thiserror::Error;

/// Coarse classification of a [`BracketError`], used by callers to decide
/// whether a failure should be reported back to the user or treated as a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    NotFound,
    Internal,
}

#[derive(Debug, Error, PartialEq)]
pub enum BracketError {
    #[error("Invalid team count {team_count}, must be one of {allowed:?}")]
    InvalidTeamCount { team_count: usize, allowed: Vec<usize> },
    #[error("Round has {matches} matches but only {courts} courts are available")]
    TooManyMatchesForCourts { matches: usize, courts: usize },
    #[error("Requested start {requested} is before the next free slot {next_slot} on court {court_id}")]
    InfeasibleAdjustTime {
        court_id: i32,
        requested: chrono::NaiveDateTime,
        next_slot: chrono::NaiveDateTime,
    },
    #[error("Input {input_id} can not be resolved yet")]
    UnresolvableInput { input_id: i32 },
    #[error("Need at least {required} teams, got {actual}")]
    NotEnoughTeams { required: usize, actual: usize },
    #[error("Tournament has no courts")]
    NoCourts,
    #[error("Invalid reschedule: {0}")]
    InvalidReschedule(String),
    #[error("Tournament has no active stage")]
    NoActiveStage,
    #[error("There is no stage to move to")]
    NoNextStage,
    #[error("Stage item {stage_item_id} already has rounds")]
    AlreadyBuilt { stage_item_id: i32 },
    #[error("Stage item {stage_item_id} is not a Swiss stage item")]
    NotSwiss { stage_item_id: i32 },
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Unknown stage type {0}")]
    UnknownStageType(String),
    #[error("Unknown bracket position {0}")]
    UnknownBracketPosition(String),
    #[error("Winner requested from a round without matches")]
    WinnerRoundWithoutMatches,
    #[error("Stage item {stage_item_id} has no ranking policy")]
    MissingRankingPolicy { stage_item_id: i32 },
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl BracketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BracketError::InvalidTeamCount { .. }
            | BracketError::TooManyMatchesForCourts { .. }
            | BracketError::InfeasibleAdjustTime { .. }
            | BracketError::UnresolvableInput { .. }
            | BracketError::NotEnoughTeams { .. }
            | BracketError::NoCourts
            | BracketError::InvalidReschedule(_)
            | BracketError::NoActiveStage
            | BracketError::NoNextStage
            | BracketError::AlreadyBuilt { .. }
            | BracketError::NotSwiss { .. } => ErrorKind::Client,
            BracketError::NotFound { .. } => ErrorKind::NotFound,
            BracketError::UnknownStageType(_)
            | BracketError::UnknownBracketPosition(_)
            | BracketError::WinnerRoundWithoutMatches
            | BracketError::MissingRankingPolicy { .. }
            | BracketError::InvariantViolation(_) => ErrorKind::Internal,
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        BracketError::NotFound { entity, id }
    }
}
