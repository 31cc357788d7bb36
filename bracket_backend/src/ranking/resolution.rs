use std::collections::HashMap;

use bracket_entities::prelude::*;
use bracket_entities::domain::{StageItemId, StageItemInputId, TeamId};

use super::{compute_statistics, determine_team_ranking_for_stage_item, EloOptions};


struct Resolver<'a> {
    details: &'a TournamentDetails,
    elo: &'a EloOptions,
    teams: HashMap<StageItemInputId, TeamId>,
    rankings: HashMap<StageItemId, Vec<StageItemInputId>>,
}

impl<'a> Resolver<'a> {
    fn ranking_of(&mut self, stage_item_id: StageItemId) -> Result<&Vec<StageItemInputId>, BracketError> {
        if !self.rankings.contains_key(&stage_item_id) {
            let item = self.details.stage_item(stage_item_id)?;
            let policy = self.details.ranking_for(&item.stage_item)?;
            let stats = compute_statistics(item, policy, self.elo);
            self.rankings.insert(stage_item_id, determine_team_ranking_for_stage_item(item, &stats));
        }
        self.rankings.get(&stage_item_id).ok_or(BracketError::not_found("Stage item", stage_item_id))
    }

    fn resolve(&mut self, input: &StageItemInput) -> Result<Option<TeamId>, BracketError> {
        match input.source {
            InputSource::Final { team_id } => Ok(Some(team_id)),
            InputSource::Tentative { winner_from_stage_item_id, winner_position } => {
                let ranking = self.ranking_of(winner_from_stage_item_id)?;
                let placed = usize::try_from(winner_position - 1).ok().and_then(|idx| ranking.get(idx)).copied();
                Ok(placed.and_then(|input_id| self.teams.get(&input_id).copied()))
            },
            InputSource::FromMatch { match_id, outcome } => {
                let m = self.details.find_match(match_id)?;
                let input_id = match outcome {
                    MatchOutcome::Winner => m.get_winner(),
                    MatchOutcome::Loser => m.get_loser(),
                };
                Ok(input_id.and_then(|input_id| self.teams.get(&input_id).copied()))
            },
        }
    }
}

/// Turns every pending input of the stage at `stage_index` into a final
/// one. Fails as a whole if any input has no team yet.
pub fn resolve_stage_inputs(details: &TournamentDetails, stage_index: usize, elo: &EloOptions) -> Result<Vec<StageItemInput>, BracketError> {
    let stage = details.stages.get(stage_index).ok_or(BracketError::NoNextStage)?;
    let mut resolver = Resolver {
        details,
        elo,
        teams: details.input_teams(),
        rankings: HashMap::new(),
    };

    let mut changed = vec![];
    for input in stage.items.iter().flat_map(|i| i.inputs.iter()) {
        if input.is_final() {
            continue;
        }
        let team_id = resolver.resolve(input)?.ok_or(BracketError::UnresolvableInput { input_id: input.id })?;
        changed.push(StageItemInput { source: InputSource::Final { team_id }, ..input.clone() });
    }
    Ok(changed)
}
