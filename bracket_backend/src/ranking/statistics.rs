use std::collections::HashMap;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Serialize, Deserialize};

use bracket_entities::prelude::*;
use bracket_entities::domain::StageItemInputId;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloOptions {
    pub start_rating: f64,
    pub k_factor: f64,
}

impl Default for EloOptions {
    fn default() -> Self {
        EloOptions { start_rating: 1200.0, k_factor: 32.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    fn of(own: i32, opponent: i32) -> Self {
        if own > opponent { MatchResult::Win } else if own < opponent { MatchResult::Loss } else { MatchResult::Draw }
    }

    fn record(self, stats: &mut TeamStatistics) {
        match self {
            MatchResult::Win => stats.wins += 1,
            MatchResult::Draw => stats.draws += 1,
            MatchResult::Loss => stats.losses += 1,
        }
    }
}

fn result_points(ranking: &Ranking, result: MatchResult, score: i32) -> f64 {
    let base = match result {
        MatchResult::Win => ranking.win_points,
        MatchResult::Draw => ranking.draw_points,
        MatchResult::Loss => ranking.loss_points,
    };
    if ranking.add_score_points { base + score as f64 } else { base }
}

fn expected_score(own_rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - own_rating) / 400.0))
}

/// Derives the statistics of every input from the committed matches of the
/// stage item. Nothing is carried over from earlier computations.
///
/// Swiss items treat `points` as a rating that starts at
/// `elo.start_rating`; both sides of a match are updated from their
/// ratings before the match.
pub fn compute_statistics(item: &StageItemWithRounds, ranking: &Ranking, elo: &EloOptions) -> HashMap<StageItemInputId, TeamStatistics> {
    let is_swiss = item.stage_item.stage_type == StageType::Swiss;
    let start = if is_swiss { elo.start_rating } else { 0.0 };

    let mut stats: HashMap<StageItemInputId, TeamStatistics> = item.inputs.iter()
        .map(|i| (i.id, TeamStatistics::with_points(start)))
        .collect();

    for m in item.definitive_matches() {
        let (Some(input_1), Some(input_2)) = (m.side_1.input_id, m.side_2.input_id) else {
            continue;
        };
        let result_1 = MatchResult::of(m.side_1.score, m.side_2.score);
        let result_2 = MatchResult::of(m.side_2.score, m.side_1.score);
        let delta_1 = result_points(ranking, result_1, m.side_1.score);
        let delta_2 = result_points(ranking, result_2, m.side_2.score);

        let rating_1 = stats.get(&input_1).map_or(start, |s| s.points);
        let rating_2 = stats.get(&input_2).map_or(start, |s| s.points);

        let (gain_1, gain_2) = if is_swiss {
            (
                (elo.k_factor * (delta_1 - expected_score(rating_1, rating_2))).round(),
                (elo.k_factor * (delta_2 - expected_score(rating_2, rating_1))).round(),
            )
        }
        else {
            (delta_1, delta_2)
        };

        for (input, result, gain) in [(input_1, result_1, gain_1), (input_2, result_2, gain_2)] {
            let entry = stats.entry(input).or_insert_with(|| TeamStatistics::with_points(start));
            result.record(entry);
            entry.points += gain;
        }
    }

    stats
}

/// Input ids ordered best first: points, then wins, then seed.
pub fn determine_team_ranking_for_stage_item(item: &StageItemWithRounds, stats: &HashMap<StageItemInputId, TeamStatistics>) -> Vec<StageItemInputId> {
    item.inputs.iter()
        .map(|i| (i, stats.get(&i.id).copied().unwrap_or_default()))
        .sorted_by_key(|(i, s)| (std::cmp::Reverse(OrderedFloat(s.points)), std::cmp::Reverse(s.wins), i.slot))
        .map(|(i, _)| i.id)
        .collect()
}
