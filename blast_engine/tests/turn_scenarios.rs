//! End-to-end match scenarios driven through the public engine API.

use blast_engine::{
    EngineError, GameStatus, LocalOutcome, MatchSetup, MatchSnapshot, TurnEngine, TurnEvent,
    TurnPhase,
};
use blast_rules::{Action, MatchId, PlayerId, Position, RulesConfig, TileContent};
use uuid::Uuid;

fn start(map: &str, players: &[(usize, usize)], local: usize, rules: RulesConfig) -> TurnEngine {
    let setup = MatchSetup::from_ascii(
        map,
        300,
        players.iter().map(|p| Position::from(*p)).collect(),
        local,
    )
    .unwrap()
    .with_rules(rules);
    TurnEngine::initialize(setup).unwrap()
}

fn quick_fuse() -> RulesConfig {
    RulesConfig::default().with_counter_init(1)
}

#[test]
fn test_bomb_on_two_cell_grid_is_a_draw() {
    let mut engine = start("..", &[(0, 0), (1, 0)], 0, quick_fuse());

    let report = engine
        .execute_turn(0, &[Action::PlaceBomb, Action::None])
        .unwrap();

    assert_eq!(report.status, GameStatus::Drawn);
    assert_eq!(report.deaths(), vec![PlayerId(0), PlayerId(1)]);
    assert_eq!(report.events.last(), Some(&TurnEvent::GameDrawn));
    assert_eq!(engine.phase(), TurnPhase::GameDrawn);
    assert_eq!(engine.alive_count(), 0);
    assert_eq!(engine.local_outcome(), LocalOutcome::Draw);
    assert_eq!(engine.status_text(), "Draw.");
}

#[test]
fn test_bomber_dies_other_player_wins() {
    let rules = quick_fuse().with_radius(1);
    let mut engine = start("...", &[(0, 0), (2, 0)], 0, rules);

    let report = engine
        .execute_turn(0, &[Action::PlaceBomb, Action::None])
        .unwrap();

    assert_eq!(report.status, GameStatus::Won(PlayerId(1)));
    assert_eq!(
        report.events.last(),
        Some(&TurnEvent::GameWon {
            winner: PlayerId(1)
        })
    );
    assert_eq!(engine.phase(), TurnPhase::GameWon);
    assert_eq!(engine.local_outcome(), LocalOutcome::Lost);
    assert_eq!(engine.status_text(), "You lose!");
}

#[test]
fn test_local_player_wins() {
    let rules = quick_fuse().with_radius(1);
    let mut engine = start("...", &[(0, 0), (2, 0)], 1, rules);

    engine
        .execute_turn(0, &[Action::PlaceBomb, Action::None])
        .unwrap();

    assert_eq!(engine.local_outcome(), LocalOutcome::Won);
    assert_eq!(engine.status_text(), "You won!");
}

#[test]
fn test_move_into_hard_block_is_dropped() {
    let mut engine = start(".#.", &[(0, 0), (2, 0)], 0, RulesConfig::default());

    let report = engine
        .execute_turn(0, &[Action::MOVE_RIGHT, Action::None])
        .unwrap();

    assert!(report.events.is_empty());
    assert_eq!(engine.players()[0].position(), Position::new(0, 0));
    assert_eq!(report.status, GameStatus::InProgress);
}

#[test]
fn test_move_into_soft_block_and_off_grid_dropped() {
    let mut engine = start(".+", &[(0, 0), (1, 0)], 0, RulesConfig::default());

    engine
        .execute_turn(0, &[Action::MOVE_RIGHT, Action::MOVE_DOWN])
        .unwrap();
    engine
        .execute_turn(1, &[Action::MOVE_LEFT, Action::MOVE_UP])
        .unwrap();

    assert_eq!(engine.players()[0].position(), Position::new(0, 0));
    assert_eq!(engine.players()[1].position(), Position::new(1, 0));
}

#[test]
fn test_walk_onto_bomb() {
    let mut engine = start("o..", &[(1, 0), (2, 0)], 0, RulesConfig::default());

    engine
        .execute_turn(0, &[Action::MOVE_LEFT, Action::None])
        .unwrap();

    assert_eq!(engine.players()[0].position(), Position::new(0, 0));
    assert!(!engine.can_do(PlayerId(0), Action::PlaceBomb));
}

#[test]
fn test_soft_block_two_cells_away_destroyed() {
    let rules = quick_fuse().with_radius(2);
    let mut engine = start("o.+..", &[(4, 0), (3, 0)], 0, rules);

    engine.execute_turn(0, &[Action::None, Action::None]).unwrap();

    assert_eq!(engine.tile_content(Position::new(0, 0)), Some(TileContent::Free));
    assert_eq!(engine.tile_content(Position::new(1, 0)), Some(TileContent::Free));
    assert_eq!(engine.tile_content(Position::new(2, 0)), Some(TileContent::Free));
    assert_eq!(engine.alive_count(), 2);
}

#[test]
fn test_fuse_counts_down_once_per_turn() {
    let rules = RulesConfig::default().with_counter_init(3).with_radius(1);
    let mut engine = start("....", &[(0, 0), (3, 0)], 0, rules);

    engine
        .execute_turn(0, &[Action::PlaceBomb, Action::MOVE_LEFT])
        .unwrap();
    let fuse = |e: &TurnEngine| e.bombs().get(Position::new(0, 0)).map(|b| b.fuse());
    assert_eq!(fuse(&engine), Some(2));

    engine
        .execute_turn(1, &[Action::MOVE_RIGHT, Action::None])
        .unwrap();
    assert_eq!(fuse(&engine), Some(1));

    // Player 0 steps out of range to (2, 0); player 1 steps into it at (1, 0).
    let report = engine
        .execute_turn(2, &[Action::MOVE_RIGHT, Action::MOVE_LEFT])
        .unwrap();
    assert_eq!(fuse(&engine), None);
    assert_eq!(report.detonations(), vec![Position::new(0, 0)]);
    assert_eq!(report.deaths(), vec![PlayerId(1)]);
    assert_eq!(report.status, GameStatus::Won(PlayerId(0)));
}

#[test]
fn test_no_turns_after_match_over() {
    let mut engine = start("..", &[(0, 0), (1, 0)], 0, quick_fuse());
    engine
        .execute_turn(0, &[Action::PlaceBomb, Action::None])
        .unwrap();

    let err = engine
        .execute_turn(1, &[Action::None, Action::None])
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::MatchOver {
            status: GameStatus::Drawn
        }
    ));
    assert_eq!(engine.turn(), 1);
}

#[test]
fn test_dead_players_stay_in_roster() {
    let rules = quick_fuse().with_radius(1);
    let mut engine = start(".....", &[(0, 0), (4, 0), (3, 0)], 0, rules);

    engine
        .execute_turn(0, &[Action::PlaceBomb, Action::None, Action::None])
        .unwrap();

    assert_eq!(engine.players().len(), 3);
    assert!(engine.player(PlayerId(0)).unwrap().is_dead());
    assert_eq!(engine.alive_count(), 2);
    assert_eq!(
        engine
            .alive_players()
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>(),
        vec![PlayerId(1), PlayerId(2)]
    );
    assert_eq!(engine.status_text(), "You lose!");
}

#[test]
fn test_snapshot_json_for_presentation() {
    let mut engine = start("..+", &[(0, 0), (1, 0)], 0, RulesConfig::default());
    engine
        .execute_turn(0, &[Action::PlaceBomb, Action::None])
        .unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.turn, 1);
    assert_eq!(snapshot.bombs.len(), 1);
    assert_eq!(snapshot.grid.to_ascii(), "o.+\n");

    let json = snapshot.to_json().unwrap();
    assert_eq!(MatchSnapshot::from_json(&json).unwrap(), snapshot);
}

#[test]
fn test_setup_from_json() {
    let source = r#"{
        "width": 3,
        "height": 1,
        "turn_length_ms": 250,
        "map": ["Free", "SoftBlock", "Free"],
        "players": [{"x": 0, "y": 0}, {"x": 2, "y": 0}],
        "local_player": 1,
        "rules": {"bomb_counter_init": 1, "bomb_radius": 1}
    }"#;
    let mut engine = TurnEngine::initialize(MatchSetup::from_json(source).unwrap()).unwrap();
    assert!(engine.local_player().is_local());
    assert_eq!(engine.local_player().id(), PlayerId(1));

    engine
        .execute_turn(0, &[Action::None, Action::PlaceBomb])
        .unwrap();
    assert_eq!(engine.tile_content(Position::new(1, 0)), Some(TileContent::Free));
    assert_eq!(engine.status(), GameStatus::Won(PlayerId(0)));
}

#[test]
fn test_caller_supplied_match_id() {
    let setup = MatchSetup::from_ascii("...", 100, vec![Position::new(0, 0), Position::new(2, 0)], 0)
        .unwrap();
    let id = MatchId::from_uuid(Uuid::nil());
    let engine = TurnEngine::initialize_with_id(setup, id).unwrap();

    assert_eq!(engine.match_id(), id);
    assert_eq!(engine.snapshot().match_id, id);
}
