use std::collections::HashSet;

use assert_matches::assert_matches;
use itertools::Itertools;
use tracing_test::traced_test;

use bracket_backend::actions::*;
use bracket_backend::views::StandingsView;
use bracket_entities::prelude::*;
use bracket_entities::mock::MockOption;

mod common;
use common::{apply, find_match_between, set_up_db, with_items};


fn assert_contiguous_courts(details: &TournamentDetails) {
    let by_court = details.all_matches()
        .filter(|m| m.is_scheduled())
        .into_group_map_by(|m| m.court_id);
    for (court, matches) in by_court {
        let ordered = matches.into_iter().sorted_by_key(|m| m.position_in_schedule).collect::<Vec<_>>();
        let positions = ordered.iter().map(|m| m.position_in_schedule.unwrap()).collect::<Vec<_>>();
        assert_eq!(positions, (0..ordered.len() as i32).collect::<Vec<_>>(), "court {:?}", court);
        assert!(ordered.windows(2).all(|w| w[0].start_time <= w[1].start_time), "court {:?}", court);
    }
}

#[tokio::test]
async fn test_build_round_robin_persists_all_pairs() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption::default())).await?;

    let changes = apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;
    assert_eq!(changes.matches().count(), 28);

    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    assert_eq!(item.rounds.len(), 7);

    let pairs = item.matches()
        .map(|m| {
            let (a, b) = (m.side_1.input_id.unwrap(), m.side_2.input_id.unwrap());
            (a.min(b), a.max(b))
        })
        .collect::<HashSet<_>>();
    assert_eq!(pairs.len(), 28);

    for round in item.rounds.iter() {
        let inputs = round.matches.iter().flat_map(|m| m.input_ids()).collect::<Vec<_>>();
        assert_eq!(inputs.len(), inputs.iter().unique().count());
    }
    Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_build_logs_summary() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::RoundRobin, 4)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;
    assert!(logs_contain("Built stage item 1 with 3 rounds and 6 matches"));
    Ok(())
}

#[tokio::test]
async fn test_rebuilding_round_robin_adds_nothing() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption::default())).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let changes = BuildStageItemAction { stage_item_id: 1 }.get_changes(&db).await?;
    assert_eq!(changes.matches().count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_build_single_elimination_chains_winners() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::SingleElimination, 8)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    assert_eq!(item.rounds.iter().map(|r| r.matches.len()).collect::<Vec<_>>(), vec![4, 2, 1]);

    let round_1_ids = item.rounds[0].matches.iter().map(|m| m.id).collect::<HashSet<_>>();
    for m in item.rounds[1].matches.iter() {
        assert_matches!(m.side_1.source, Some(MatchSource::WinnerOf(id)) if round_1_ids.contains(&id));
        assert_matches!(m.side_2.source, Some(MatchSource::WinnerOf(id)) if round_1_ids.contains(&id));
        assert!(m.input_ids().is_empty());
    }

    let err = BuildStageItemAction { stage_item_id: 1 }.get_changes(&db).await.unwrap_err();
    assert_matches!(err.downcast_ref::<BracketError>(), Some(BracketError::AlreadyBuilt { stage_item_id: 1 }));
    Ok(())
}

#[tokio::test]
async fn test_single_elimination_rejects_six_teams() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::SingleElimination, 6)]))).await?;

    let err = BuildStageItemAction { stage_item_id: 1 }.get_changes(&db).await.unwrap_err();
    let err = err.downcast_ref::<BracketError>().unwrap();
    assert_matches!(err, BracketError::InvalidTeamCount { team_count: 6, .. });
    assert_eq!(err.kind(), ErrorKind::Client);

    let details = TournamentDetails::load(&db, 1).await?;
    assert!(details.stage_item(1)?.rounds.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_build_double_elimination_with_byes() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::DoubleElimination, 5)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;

    let winners = item.rounds.iter().filter(|r| r.round.bracket_position == BracketPosition::Winners).count();
    let losers = item.rounds.iter().filter(|r| r.round.bracket_position == BracketPosition::Losers).count();
    assert_eq!((winners, losers), (3, 4));

    let finals = item.rounds.iter().find(|r| r.round.bracket_position == BracketPosition::GrandFinals).unwrap();
    assert_eq!(finals.matches.len(), 2);
    let decider = &finals.matches[0];
    let reset = &finals.matches[1];
    assert_eq!(reset.side_1.source, Some(MatchSource::WinnerOf(decider.id)));
    assert_eq!(reset.side_2.source, Some(MatchSource::LoserOf(decider.id)));
    Ok(())
}

#[tokio::test]
async fn test_schedule_all_fills_courts() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::RoundRobin, 4), (StageType::RoundRobin, 4)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 2 }).await?;

    let changes = apply(&db, ScheduleAllAction { tournament_id: 1, mode: SchedulingMode::Batch, assign_officials: true, seed: None }).await?;
    assert_eq!(changes.matches().count(), 12);

    let details = TournamentDetails::load(&db, 1).await?;
    assert!(details.all_matches().all(|m| m.is_scheduled() && m.official_id.is_some()));
    assert!(details.stage_item(1)?.matches().all(|m| m.court_id == Some(1)));
    assert!(details.stage_item(2)?.matches().all(|m| m.court_id == Some(2)));
    assert_contiguous_courts(&details);

    let again = ScheduleAllAction { tournament_id: 1, mode: SchedulingMode::Batch, assign_officials: true, seed: None }.get_changes(&db).await?;
    assert!(again.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_randomized_schedule_places_every_match() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption::default())).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    apply(&db, ScheduleAllAction { tournament_id: 1, mode: SchedulingMode::Randomized, assign_officials: false, seed: Some(11) }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    assert!(details.all_matches().all(|m| m.is_scheduled()));
    assert_contiguous_courts(&details);
    Ok(())
}

#[tokio::test]
async fn test_auto_assign_schedules_on_build() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption { auto_assign_courts: true, ..Default::default() })).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    assert!(details.all_matches().all(|m| m.is_scheduled()));
    Ok(())
}

#[tokio::test]
async fn test_schedule_without_courts_fails() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption { num_courts: 0, ..Default::default() })).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let err = ScheduleAllAction { tournament_id: 1, mode: SchedulingMode::Batch, assign_officials: false, seed: None }.get_changes(&db).await.unwrap_err();
    assert_matches!(err.downcast_ref::<BracketError>(), Some(BracketError::NoCourts));
    Ok(())
}

#[tokio::test]
async fn test_reschedule_moves_match_between_courts() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::RoundRobin, 4), (StageType::RoundRobin, 4)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 2 }).await?;
    apply(&db, ScheduleAllAction { tournament_id: 1, mode: SchedulingMode::Batch, assign_officials: false, seed: None }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let moved = details.all_matches().find(|m| m.court_id == Some(1) && m.position_in_schedule == Some(1)).unwrap().id;

    apply(&db, RescheduleMatchAction { match_id: moved, court_id: 2, position: 2 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let m = details.find_match(moved)?;
    assert_eq!(m.court_id, Some(2));
    assert_eq!(m.position_in_schedule, Some(2));
    assert_eq!(details.all_matches().filter(|m| m.court_id == Some(1)).count(), 5);
    assert_eq!(details.all_matches().filter(|m| m.court_id == Some(2)).count(), 7);
    assert_contiguous_courts(&details);
    Ok(())
}

#[tokio::test]
async fn test_reschedule_to_unknown_court_is_not_found() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption::default())).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let err = RescheduleMatchAction { match_id: 1, court_id: 42, position: 0 }.get_changes(&db).await.unwrap_err();
    let err = err.downcast_ref::<BracketError>().unwrap();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_conflicts_are_flagged_and_cleared() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::RoundRobin, 4)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;
    apply(&db, ScheduleAllAction { tournament_id: 1, mode: SchedulingMode::Batch, assign_officials: false, seed: None }).await?;

    let clean = UpdateConflictsAction { tournament_id: 1 }.get_changes(&db).await?;
    assert!(clean.is_empty());

    let details = TournamentDetails::load(&db, 1).await?;
    let first = find_match_between(&details, 1, 2);
    let mut second = find_match_between(&details, 1, 3);
    second.start_time = first.start_time;
    second.court_id = Some(2);
    second.position_in_schedule = Some(0);
    second.save(&db, false).await?;

    let changes = apply(&db, UpdateConflictsAction { tournament_id: 1 }).await?;
    assert_eq!(changes.matches().count(), 2);

    let details = TournamentDetails::load(&db, 1).await?;
    for m in [details.find_match(first.id)?, details.find_match(second.id)?] {
        let flagged_input = if m.side_1.conflict { m.side_1.input_id } else { m.side_2.input_id };
        assert_eq!(flagged_input, Some(1));
        assert!(m.side_1.conflict != m.side_2.conflict);
    }

    let mut second = details.find_match(second.id)?.clone();
    second.start_time = None;
    second.position_in_schedule = None;
    second.save(&db, false).await?;

    apply(&db, UpdateConflictsAction { tournament_id: 1 }).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    assert!(details.all_matches().all(|m| !m.side_1.conflict && !m.side_2.conflict));
    Ok(())
}

#[tokio::test]
async fn test_scores_update_statistics() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::RoundRobin, 4)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let m = find_match_between(&details, 1, 2);
    let (winner_score_1, winner_score_2) = if m.side_1.input_id == Some(2) { (3, 1) } else { (1, 3) };
    apply(&db, UpdateMatchScoresAction { match_id: m.id, score_1: winner_score_1, score_2: winner_score_2 }).await?;

    let draw = find_match_between(&details, 3, 4);
    apply(&db, UpdateMatchScoresAction { match_id: draw.id, score_1: 2, score_2: 2 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    assert_eq!(item.input(2).unwrap().statistics, TeamStatistics { wins: 1, draws: 0, losses: 0, points: 1.0 });
    assert_eq!(item.input(1).unwrap().statistics, TeamStatistics { wins: 0, draws: 0, losses: 1, points: 0.0 });
    assert_eq!(item.input(3).unwrap().statistics, TeamStatistics { wins: 0, draws: 1, losses: 0, points: 0.5 });

    let recompute = RecomputeRankingAction { stage_item_id: 1 }.get_changes(&db).await?;
    assert!(recompute.is_empty());

    let standings = StandingsView::load(&db, 1).await?;
    assert_eq!(standings.rows.iter().map(|r| r.input_id).collect::<Vec<_>>(), vec![2, 3, 4, 1]);
    assert_eq!(standings.rows[0].team_id, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_elimination_scores_propagate() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::SingleElimination, 4)]))).await?;
    apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let semis = details.stage_item(1)?.rounds[0].matches.clone();
    let final_id = details.stage_item(1)?.rounds[1].matches[0].id;

    apply(&db, UpdateMatchScoresAction { match_id: semis[0].id, score_1: 0, score_2: 2 }).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    let final_match = details.find_match(final_id)?;
    assert_eq!(final_match.side_1.input_id, semis[0].side_2.input_id);
    assert_eq!(final_match.side_2.input_id, None);

    apply(&db, UpdateMatchScoresAction { match_id: semis[1].id, score_1: 5, score_2: 1 }).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    let final_match = details.find_match(final_id)?;
    assert_eq!(final_match.side_2.input_id, semis[1].side_1.input_id);
    assert!(final_match.is_definitive());

    apply(&db, UpdateMatchScoresAction { match_id: semis[0].id, score_1: 4, score_2: 2 }).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    assert_eq!(details.find_match(final_id)?.side_1.input_id, semis[0].side_1.input_id);
    Ok(())
}

#[tokio::test]
async fn test_action_enum_round_trips_through_json() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(with_items(vec![(StageType::RoundRobin, 4)]))).await?;
    let action: Action = serde_json::from_str(r#"{"type": "BuildStageItem", "action": {"stage_item_id": 1}}"#)?;

    let changes = action.execute(&db).await?;
    assert_eq!(changes.matches().count(), 6);
    Ok(())
}
