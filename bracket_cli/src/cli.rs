use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Tournament bracket scheduling and ranking")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create or upgrade the database schema
    Migrate,
    /// Create the rounds and matches of a stage item
    Build {
        stage_item_id: i32,
    },
    /// Put every unscheduled match of a tournament on a court
    ScheduleAll {
        tournament_id: i32,
        /// Also assign officials to the scheduled matches
        #[arg(long)]
        assign_officials: bool,
        /// Use the randomized scheduler with the given seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recompute the conflict flags of every match in a tournament
    UpdateConflicts {
        tournament_id: i32,
    },
    /// Recompute the statistics of a stage item from its match history
    RecomputeRanking {
        stage_item_id: i32,
    },
    /// Print the standings of a stage item
    Standings {
        stage_item_id: i32,
    },
    /// Print pairing suggestions for the next Swiss round
    SuggestSwiss {
        stage_item_id: i32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply an action given as JSON
    Apply {
        /// Path of the JSON file, `-` reads stdin
        path: String,
    },
}
