use league_planner::models::{EliminationSchedule, MatchKind, Team, TeamId};
use league_planner::scheduler::{Knockout, SeasonPlan};
use league_planner::season::{MatchPersistence, MemoryStore, ResultFeed, SeasonCoordinator};
use league_planner::season_file::SeasonFile;
use league_planner::testing_utils::TestDataBuilder;
use league_planner::AppError;
use std::io::Write;
use tempfile::NamedTempFile;

fn coordinator(store: &MemoryStore) -> SeasonCoordinator<MemoryStore, MemoryStore, MemoryStore> {
    SeasonCoordinator::new(store.clone(), store.clone(), store.clone(), 8)
}

#[tokio::test]
async fn test_schedule_league_stores_plan() {
    let store = MemoryStore::new();
    let league = TestDataBuilder::league("spring");
    store.set_teams(&league.id, TestDataBuilder::teams(4)).await;

    let plan = coordinator(&store)
        .schedule_league(&league, Knockout::AllTeams)
        .await
        .unwrap();

    assert_eq!(plan.fixtures.len(), 12);
    assert_eq!(plan.elimination_dates.final_date(), Some(league.end_date));
    assert_eq!(store.plan(&league.id).await, Some(plan));
}

#[tokio::test]
async fn test_rescheduling_replaces_plan() {
    let store = MemoryStore::new();
    let mut league = TestDataBuilder::league("spring");
    store.set_teams(&league.id, TestDataBuilder::teams(6)).await;
    let coordinator = coordinator(&store);

    coordinator
        .schedule_league(&league, Knockout::Skip)
        .await
        .unwrap();
    league.end_date = TestDataBuilder::date(2025, 8, 30);
    let moved = coordinator
        .schedule_league(&league, Knockout::Qualifiers(4))
        .await
        .unwrap();

    let stored = store.plan(&league.id).await.unwrap();
    assert_eq!(stored, moved);
    assert_eq!(stored.elimination_dates.final_date(), Some(league.end_date));
    assert!(stored.fixtures.iter().all(|f| f.date <= league.end_date));
}

#[tokio::test]
async fn test_failed_plan_leaves_store_untouched() {
    let store = MemoryStore::new();
    let league = TestDataBuilder::league("spring");
    store.set_teams(&league.id, TestDataBuilder::teams(1)).await;

    let err = coordinator(&store)
        .schedule_league(&league, Knockout::Skip)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput { .. }));
    assert_eq!(store.plan(&league.id).await, None);
}

#[tokio::test]
async fn test_unknown_league_is_reported() {
    let store = MemoryStore::new();
    let league = TestDataBuilder::league("ghost");

    let err = coordinator(&store).standings(&league).await.unwrap_err();

    assert!(matches!(err, AppError::LeagueNotFound { .. }));
    assert!(err.is_storage_error());
    let empty = SeasonPlan {
        fixtures: vec![],
        elimination_dates: EliminationSchedule::default(),
    };
    assert!(store.save_plan("ghost", &empty).await.is_err());
}

#[tokio::test]
async fn test_standings_follow_recorded_matches() {
    let store = MemoryStore::new();
    let league = TestDataBuilder::league("spring");
    store.set_teams(&league.id, TestDataBuilder::teams(3)).await;
    store
        .add_record(&league.id, TestDataBuilder::played_match("T2", "T0", 3, 0))
        .await;
    store
        .add_record(&league.id, TestDataBuilder::upcoming_match("T0", "T1"))
        .await;
    let coordinator = coordinator(&store);

    let before = coordinator.standings(&league).await.unwrap();
    assert_eq!(before[0].team_id, TeamId::from("T2"));
    assert_eq!(before[1].team_id, TeamId::from("T1"));
    assert_eq!(before[2].team_id, TeamId::from("T0"));

    // A newly completed match changes the snapshot, so the table is recomputed
    store
        .set_records(
            &league.id,
            vec![
                TestDataBuilder::played_match("T2", "T0", 3, 0),
                TestDataBuilder::played_match("T0", "T1", 1, 0),
            ],
        )
        .await;
    let after = coordinator.standings(&league).await.unwrap();

    assert_eq!(after[0].team_id, TeamId::from("T2"));
    assert_eq!(after[1].team_id, TeamId::from("T0"));
    assert_eq!(after[1].points, 3);
    assert_eq!(after[2].team_id, TeamId::from("T1"));
    assert_eq!(after[2].lost, 1);
}

#[tokio::test]
async fn test_result_with_unregistered_team_fails() {
    let store = MemoryStore::new();
    let league = TestDataBuilder::league("spring");
    store.set_teams(&league.id, TestDataBuilder::teams(2)).await;
    store
        .add_record(&league.id, TestDataBuilder::played_match("T0", "X9", 1, 0))
        .await;

    let err = coordinator(&store).standings(&league).await.unwrap_err();

    assert!(matches!(err, AppError::UnknownTeam { ref team_id } if team_id == "X9"));
}

#[tokio::test]
async fn test_group_standings_and_scorers() {
    let store = MemoryStore::new();
    let league = TestDataBuilder::league("cup");
    store
        .set_teams(
            &league.id,
            vec![
                Team::new("A1", "Alpha One").in_group("A"),
                Team::new("A2", "Alpha Two").in_group("A"),
                Team::new("B1", "Beta One").in_group("B"),
                Team::new("B2", "Beta Two").in_group("B"),
            ],
        )
        .await;
    let mut final_match = TestDataBuilder::played_match("A1", "B2", 2, 0);
    final_match.kind = MatchKind::Final;
    store
        .set_records(
            &league.id,
            vec![
                TestDataBuilder::played_match("A2", "A1", 1, 0),
                TestDataBuilder::played_match("B1", "B2", 0, 2),
                final_match,
            ],
        )
        .await;
    let coordinator = coordinator(&store);

    let groups = coordinator.group_standings(&league).await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "A");
    assert_eq!(groups[0].table[0].team_id, TeamId::from("A2"));
    assert_eq!(groups[1].table[0].team_id, TeamId::from("B2"));

    let scorers = coordinator.top_scorers(&league).await.unwrap();
    assert_eq!(scorers[0].goals, 2);
    assert_eq!(scorers.len(), 3);
    assert_eq!(store.match_records(&league.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_season_file_end_to_end() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
name = "Autumn Cup"
start_date = "2025-09-01"
end_date = "2025-11-30"

[[teams]]
id = "N"
name = "North"

[[teams]]
id = "S"
name = "South"

[[matches]]
home = "N"
away = "S"
completed = true
home_goals = [{{ player = "Hill" }}]
"#
    )
    .unwrap();

    let season = SeasonFile::load(file.path().to_str().unwrap()).await.unwrap();
    let (league, store) = season.into_store().await.unwrap();
    assert_eq!(league.id, "autumn-cup");

    let coordinator = coordinator(&store);
    let plan = coordinator
        .schedule_league(&league, Knockout::AllTeams)
        .await
        .unwrap();
    assert_eq!(plan.fixtures.len(), 2);
    assert_eq!(plan.elimination_dates.dates(), &[league.end_date]);

    let table = coordinator.standings(&league).await.unwrap();
    assert_eq!(table[0].team_id, TeamId::from("N"));
    assert_eq!(table[0].points, 3);
}
