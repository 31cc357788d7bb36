use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::{seq::SliceRandom, Rng};
use serde::{Serialize, Deserialize};

use bracket_entities::prelude::*;
use bracket_entities::domain::StageItemInputId;

use crate::builder::unordered_pair;


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwissSuggestionOptions {
    pub iterations: usize,
    pub elo_diff_threshold: f64,
    pub limit: usize,
    pub only_behind_schedule: bool,
}

impl Default for SwissSuggestionOptions {
    fn default() -> Self {
        SwissSuggestionOptions {
            iterations: 2000,
            elo_diff_threshold: 200.0,
            limit: 50,
            only_behind_schedule: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedMatch {
    pub input_1: StageItemInputId,
    pub input_2: StageItemInputId,
    pub elo_diff: f64,
    /// At least one side has played as few matches as anybody else.
    pub is_recommended: bool,
}

/// Randomly samples pairings for the next Swiss matches.
///
/// `ratings` holds the current rating of every input of the stage item.
/// Pairs that already met in a committed round, inputs already in the
/// draft round and pairs further apart than the threshold are skipped.
pub fn suggest_swiss_matches<R: Rng>(
    item: &StageItemWithRounds,
    ratings: &HashMap<StageItemInputId, f64>,
    options: &SwissSuggestionOptions,
    rng: &mut R,
) -> Vec<SuggestedMatch> {
    let roster = item.inputs.iter().filter(|i| i.is_final()).map(|i| i.id).collect::<Vec<_>>();

    let mut played: HashMap<StageItemInputId, usize> = roster.iter().map(|i| (*i, 0)).collect();
    let mut played_pairs = HashSet::new();
    for m in item.definitive_matches() {
        for input in m.input_ids() {
            *played.entry(input).or_default() += 1;
        }
        if let (Some(a), Some(b)) = (m.side_1.input_id, m.side_2.input_id) {
            played_pairs.insert(unordered_pair(a, b));
        }
    }

    let in_draft = item.draft_round()
        .map(|r| r.matches.iter().flat_map(|m| m.input_ids()).collect::<HashSet<_>>())
        .unwrap_or_default();

    let max_played = roster.iter().map(|i| played[i]).max().unwrap_or(0);
    let min_played = roster.iter().map(|i| played[i]).min().unwrap_or(0);
    let behind = roster.iter().copied().filter(|i| played[i] < max_played).collect::<Vec<_>>();

    let candidates = if options.only_behind_schedule && behind.len() >= 2 { behind } else { roster };
    if candidates.len() < 2 {
        return vec![];
    }

    let rating = |input: StageItemInputId| ratings.get(&input).copied().unwrap_or(0.0);
    let mut found: HashMap<(StageItemInputId, StageItemInputId), SuggestedMatch> = HashMap::new();

    for _ in 0..options.iterations {
        let sample = candidates.choose_multiple(rng, 2).copied().collect::<Vec<_>>();
        let (a, b) = (sample[0], sample[1]);
        if in_draft.contains(&a) || in_draft.contains(&b) {
            continue;
        }
        let pair = unordered_pair(a, b);
        if played_pairs.contains(&pair) || found.contains_key(&pair) {
            continue;
        }
        let elo_diff = (rating(a) - rating(b)).abs();
        if elo_diff > options.elo_diff_threshold {
            continue;
        }

        found.insert(pair, SuggestedMatch {
            input_1: pair.0,
            input_2: pair.1,
            elo_diff,
            is_recommended: played[&a].min(played[&b]) <= min_played,
        });
    }

    found.into_values()
        .sorted_by_key(|s| (OrderedFloat(s.elo_diff), !s.is_recommended, s.input_1, s.input_2))
        .take(options.limit)
        .collect()
}

/// Picks suggestions in order, skipping any that reuse an input, until
/// `max_matches` are chosen.
pub fn pick_disjoint(suggestions: &[SuggestedMatch], max_matches: usize) -> Vec<SuggestedMatch> {
    let mut used = HashSet::new();
    let mut out = vec![];
    for s in suggestions {
        if out.len() >= max_matches {
            break;
        }
        if used.contains(&s.input_1) || used.contains(&s.input_2) {
            continue;
        }
        used.insert(s.input_1);
        used.insert(s.input_2);
        out.push(s.clone());
    }
    out
}
