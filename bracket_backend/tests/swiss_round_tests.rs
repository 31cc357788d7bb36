use std::collections::HashSet;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use itertools::Itertools;

use bracket_backend::actions::*;
use bracket_backend::swiss::SwissSuggestionOptions;
use bracket_entities::prelude::*;
use bracket_entities::mock::MockOption;

mod common;
use common::{apply, set_up_db, with_items};


fn swiss_tournament(num_courts: usize) -> MockOption {
    MockOption { num_courts, ..with_items(vec![(StageType::Swiss, 8)]) }
}

fn create_round(seed: u64) -> CreateSwissRoundAction {
    CreateSwissRoundAction { stage_item_id: 1, adjust_to_time: None, seed: Some(seed), options: SwissSuggestionOptions::default() }
}

fn at(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap()
}

fn played_pairs(item: &StageItemWithRounds) -> Vec<(i32, i32)> {
    item.matches()
        .map(|m| {
            let (a, b) = (m.side_1.input_id.unwrap(), m.side_2.input_id.unwrap());
            (a.min(b), a.max(b))
        })
        .collect()
}

#[tokio::test]
async fn test_swiss_build_creates_nothing() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(4))).await?;
    let changes = apply(&db, BuildStageItemAction { stage_item_id: 1 }).await?;
    assert!(changes.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_swiss_round_lifecycle() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(4))).await?;

    apply(&db, create_round(5)).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    let draft = item.draft_round().unwrap();
    assert_eq!(draft.round.name, "Round 1");
    assert_eq!(draft.matches.len(), 4);

    let inputs = draft.matches.iter().flat_map(|m| m.input_ids()).collect::<Vec<_>>();
    assert_eq!(inputs.iter().unique().count(), 8);
    assert_eq!(draft.matches.iter().map(|m| m.court_id).unique().count(), 4);
    assert!(draft.matches.iter().all(|m| m.start_time == Some(at(9, 0)) && m.position_in_schedule == Some(0)));

    apply(&db, CommitDraftRoundAction { stage_item_id: 1 }).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    assert!(item.draft_round().is_none());
    assert!(item.rounds[0].round.is_active);

    for m in item.rounds[0].matches.iter() {
        apply(&db, UpdateMatchScoresAction { match_id: m.id, score_1: 1, score_2: 0 }).await?;
    }
    let details = TournamentDetails::load(&db, 1).await?;
    let first_round_pairs = played_pairs(details.stage_item(1)?);
    let ratings = details.stage_item(1)?.inputs.iter().map(|i| i.statistics.points).sorted_by(|a, b| a.total_cmp(b)).dedup().collect::<Vec<_>>();
    assert_eq!(ratings, vec![1184.0, 1216.0]);

    apply(&db, create_round(9)).await?;
    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    let draft = item.draft_round().unwrap();
    assert_eq!(draft.round.name, "Round 2");
    assert!(!draft.matches.is_empty());
    for m in draft.matches.iter() {
        let pair = (m.side_1.input_id.unwrap().min(m.side_2.input_id.unwrap()), m.side_1.input_id.unwrap().max(m.side_2.input_id.unwrap()));
        assert!(!first_round_pairs.contains(&pair));
        assert_eq!(m.start_time, Some(at(9, 15)));
    }
    Ok(())
}

#[tokio::test]
async fn test_commit_after_new_draft_deactivates_previous_round() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(4))).await?;
    apply(&db, create_round(1)).await?;
    apply(&db, CommitDraftRoundAction { stage_item_id: 1 }).await?;
    apply(&db, create_round(2)).await?;
    apply(&db, CommitDraftRoundAction { stage_item_id: 1 }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    assert_eq!(item.rounds.iter().map(|r| (r.round.is_draft, r.round.is_active)).collect::<Vec<_>>(), vec![(false, false), (false, true)]);
    Ok(())
}

#[tokio::test]
async fn test_commit_without_draft_is_not_found() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(4))).await?;
    let err = CommitDraftRoundAction { stage_item_id: 1 }.get_changes(&db).await.unwrap_err();
    assert_eq!(err.downcast_ref::<BracketError>().map(|e| e.kind()), Some(ErrorKind::NotFound));
    Ok(())
}

#[tokio::test]
async fn test_round_robin_item_is_not_swiss() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(MockOption::default())).await?;
    let err = create_round(1).get_changes(&db).await.unwrap_err();
    assert_matches!(err.downcast_ref::<BracketError>(), Some(BracketError::NotSwiss { stage_item_id: 1 }));
    Ok(())
}

#[tokio::test]
async fn test_draft_is_limited_by_court_count() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(2))).await?;
    apply(&db, create_round(3)).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let draft = details.stage_item(1)?.draft_round().unwrap();
    assert_eq!(draft.matches.len(), 2);

    let again = create_round(4).get_changes(&db).await?;
    assert_eq!(again.matches().count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_partially_scheduled_round_uses_the_free_court() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(2))).await?;
    let round_id = manual_round(&db, &[(1, 2), (3, 4)]).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let mut first = details.stage_item(1)?.rounds.iter().find(|r| r.round.id == round_id).unwrap().matches[0].clone();
    first.court_id = Some(1);
    first.position_in_schedule = Some(0);
    first.start_time = Some(at(9, 0));
    first.save(&db, false).await?;

    apply(&db, ScheduleSwissRoundAction { round_id, adjust_to_time: None }).await?;

    let details = TournamentDetails::load(&db, 1).await?;
    let round = details.stage_item(1)?.rounds.iter().find(|r| r.round.id == round_id).unwrap();
    let courts = round.matches.iter().map(|m| m.court_id).collect::<HashSet<_>>();
    assert_eq!(courts.len(), 2);
    assert!(round.matches.iter().all(|m| m.start_time == Some(at(9, 0)) && m.position_in_schedule == Some(0)));
    Ok(())
}

async fn manual_round(db: &sea_orm::DatabaseConnection, pairs: &[(i32, i32)]) -> Result<i32, anyhow::Error> {
    let round = Round::new(1, "Manual", BracketPosition::None).create(db).await?;
    for (a, b) in pairs {
        TournamentMatch::new(round.id, MatchSide::input(*a), MatchSide::input(*b), 10, 5).create(db).await?;
    }
    Ok(round.id)
}

#[tokio::test]
async fn test_round_larger_than_courts_is_rejected() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(2))).await?;
    let round_id = manual_round(&db, &[(1, 2), (3, 4), (5, 6)]).await?;

    let err = ScheduleSwissRoundAction { round_id, adjust_to_time: None }.get_changes(&db).await.unwrap_err();
    assert_matches!(err.downcast_ref::<BracketError>(), Some(BracketError::TooManyMatchesForCourts { matches: 3, courts: 2 }));
    Ok(())
}

#[tokio::test]
async fn test_adjust_to_time_extends_previous_margin() -> Result<(), anyhow::Error> {
    let db = set_up_db(Some(swiss_tournament(2))).await?;
    let first = manual_round(&db, &[(1, 2), (3, 4)]).await?;
    apply(&db, ScheduleSwissRoundAction { round_id: first, adjust_to_time: None }).await?;

    let second = manual_round(&db, &[(1, 3), (2, 4)]).await?;
    let err = ScheduleSwissRoundAction { round_id: second, adjust_to_time: Some(at(9, 5)) }.get_changes(&db).await.unwrap_err();
    assert_matches!(err.downcast_ref::<BracketError>(), Some(BracketError::InfeasibleAdjustTime { .. }));

    let changes = apply(&db, ScheduleSwissRoundAction { round_id: second, adjust_to_time: Some(at(9, 30)) }).await?;
    assert_eq!(changes.matches().count(), 4);

    let details = TournamentDetails::load(&db, 1).await?;
    let item = details.stage_item(1)?;
    let first_round = item.rounds.iter().find(|r| r.round.id == first).unwrap();
    assert!(first_round.matches.iter().all(|m| m.custom_margin_minutes == Some(20)));
    let second_round = item.rounds.iter().find(|r| r.round.id == second).unwrap();
    assert!(second_round.matches.iter().all(|m| m.start_time == Some(at(9, 30)) && m.position_in_schedule == Some(1)));

    let courts = second_round.matches.iter().map(|m| m.court_id).collect::<HashSet<_>>();
    assert_eq!(courts.len(), 2);
    Ok(())
}
