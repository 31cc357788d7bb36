use std::collections::HashMap;

use bracket_entities::prelude::*;
use bracket_entities::domain::{MatchId, StageItemInputId};


fn resolve_side(side: &MatchSide, resolved: &HashMap<MatchId, TournamentMatch>) -> Result<Option<StageItemInputId>, BracketError> {
    match side.source {
        None => Ok(side.input_id),
        Some(source) => {
            let origin = resolved.get(&source.match_id()).ok_or(BracketError::WinnerRoundWithoutMatches)?;
            Ok(match source {
                MatchSource::WinnerOf(_) => origin.get_winner(),
                MatchSource::LoserOf(_) => origin.get_loser(),
            })
        }
    }
}

/// A rematch between the winner and the loser of one match is only played
/// when the second side of that match won it, as with a grand finals reset.
fn rematch_is_void(m: &TournamentMatch, resolved: &HashMap<MatchId, TournamentMatch>) -> bool {
    match (m.side_1.source, m.side_2.source) {
        (Some(MatchSource::WinnerOf(a)), Some(MatchSource::LoserOf(b))) if a == b => {
            resolved.get(&a).map_or(false, |origin| {
                origin.get_winner().is_some() && origin.get_winner() == origin.side_1.input_id
            })
        },
        _ => false,
    }
}

/// Binds every side that follows the winner or loser of an earlier match
/// to that match's current result, and unbinds it while there is none.
///
/// Rounds are visited in order so a result travels through the whole
/// bracket in one call. Returns the matches whose inputs changed.
pub fn propagate_elimination_results(item: &StageItemWithRounds) -> Result<Vec<TournamentMatch>, BracketError> {
    let mut resolved: HashMap<MatchId, TournamentMatch> = HashMap::new();
    let mut changed = vec![];

    for round in item.rounds.iter() {
        for original in round.matches.iter() {
            let mut m = original.clone();
            m.side_1.input_id = resolve_side(&m.side_1, &resolved)?;
            m.side_2.input_id = resolve_side(&m.side_2, &resolved)?;
            if rematch_is_void(&m, &resolved) {
                m.side_1.input_id = None;
                m.side_2.input_id = None;
            }

            if m != *original {
                changed.push(m.clone());
            }
            resolved.insert(m.id, m);
        }
    }

    Ok(changed)
}
