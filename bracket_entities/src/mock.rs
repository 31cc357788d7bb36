use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    court::Court,
    official::Official,
    ranking::Ranking,
    stage::Stage,
    stage_item::{StageItem, StageType},
    stage_item_input::{InputSource, StageItemInput},
    team::Team,
    tournament::Tournament,
};
use crate::group::EntityGroup;


#[derive(Debug, Clone)]
pub struct MockStageItem {
    pub stage_type: StageType,
    pub team_count: usize,
}

impl MockStageItem {
    pub fn new(stage_type: StageType, team_count: usize) -> Self {
        MockStageItem { stage_type, team_count }
    }
}

/// Shape of the generated tournament. All ids are assigned sequentially
/// starting at 1, so tests can refer to them directly.
#[derive(Debug, Clone)]
pub struct MockOption {
    pub num_teams: usize,
    pub num_courts: usize,
    pub num_officials: usize,
    pub start_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub margin_minutes: i32,
    pub auto_assign_courts: bool,
    /// Items of the first (active) stage. Teams are handed out in order.
    pub stage_items: Vec<MockStageItem>,
    /// Optional second stage whose inputs are tentative placements
    /// from the first stage's items.
    pub playoff: Option<MockStageItem>,
}

pub fn mock_start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

impl Default for MockOption {
    fn default() -> Self {
        MockOption {
            num_teams: 8,
            num_courts: 2,
            num_officials: 2,
            start_time: mock_start_time(),
            duration_minutes: 10,
            margin_minutes: 5,
            auto_assign_courts: false,
            stage_items: vec![MockStageItem::new(StageType::RoundRobin, 8)],
            playoff: None,
        }
    }
}

pub fn make_mock_tournament() -> EntityGroup {
    make_mock_tournament_with_options(MockOption::default())
}

pub fn make_mock_tournament_with_options(options: MockOption) -> EntityGroup {
    let mut group = EntityGroup::new();
    let tournament_id = 1;

    group.add(Tournament {
        id: tournament_id,
        name: "Mock Tournament".into(),
        start_time: options.start_time,
        duration_minutes: options.duration_minutes,
        margin_minutes: options.margin_minutes,
        auto_assign_courts: options.auto_assign_courts,
    });

    for i in 1..=options.num_teams as i32 {
        group.add(Team { id: i, tournament_id, name: format!("Team {}", i) });
    }
    for i in 1..=options.num_courts as i32 {
        group.add(Court { id: i, tournament_id, name: format!("Court {}", i) });
    }
    for i in 1..=options.num_officials as i32 {
        group.add(Official { id: i, tournament_id, name: format!("Official {}", i) });
    }

    group.add(Ranking { id: 1, ..Ranking::new(tournament_id) });
    group.add(Stage { id: 1, is_active: true, ..Stage::new(tournament_id, "Group Stage", 0) });

    let mut next_item_id = 1;
    let mut next_input_id = 1;
    let mut next_team = 0;
    let mut first_stage_items = vec![];

    for (idx, item) in options.stage_items.iter().enumerate() {
        let stage_item_id = next_item_id;
        next_item_id += 1;
        first_stage_items.push(stage_item_id);
        group.add(StageItem {
            id: stage_item_id,
            ..StageItem::new(1, format!("Group {}", idx + 1), item.stage_type, item.team_count as i32, 1)
        });
        for slot in 1..=item.team_count as i32 {
            let team_id = (next_team % options.num_teams.max(1)) as i32 + 1;
            next_team += 1;
            group.add(StageItemInput { id: next_input_id, ..StageItemInput::new_final(stage_item_id, slot, team_id) });
            next_input_id += 1;
        }
    }

    if let (Some(playoff), false) = (options.playoff, first_stage_items.is_empty()) {
        group.add(Stage { id: 2, ..Stage::new(tournament_id, "Playoffs", 1) });
        let stage_item_id = next_item_id;
        group.add(StageItem {
            id: stage_item_id,
            ..StageItem::new(2, "Playoffs", playoff.stage_type, playoff.team_count as i32, 1)
        });
        for slot in 1..=playoff.team_count as i32 {
            let k = (slot - 1) as usize;
            let source = InputSource::Tentative {
                winner_from_stage_item_id: first_stage_items[k % first_stage_items.len()],
                winner_position: (k / first_stage_items.len()) as i32 + 1,
            };
            group.add(StageItemInput { id: next_input_id, ..StageItemInput::new(stage_item_id, slot, source) });
            next_input_id += 1;
        }
    }

    group
}
