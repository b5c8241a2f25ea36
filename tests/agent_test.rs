//! Tests for the heuristic agent's decision list.

use tictac_agent::{AgentRng, Board, CORNERS, GameError, HeuristicAgent, HeuristicRule, Mark};

const X: Mark = Mark::Player;
const O: Mark = Mark::Agent;
const E: Mark = Mark::Empty;

#[test]
fn test_win_beats_block() {
    // O O _ / X X _ / X _ _
    let board = Board::from_cells([O, O, E, X, X, E, X, E, E]);
    let choice = HeuristicAgent::seeded(0).choose_cell(&board).unwrap();
    assert_eq!(choice.index, 2);
    assert_eq!(choice.rule, HeuristicRule::WinNow);
}

#[test]
fn test_blocks_when_no_win() {
    // X O X / O X O / _ _ O: no agent line to finish, X threatens 6.
    let board = Board::from_cells([X, O, X, O, X, O, E, E, O]);
    let choice = HeuristicAgent::seeded(0).choose_cell(&board).unwrap();
    assert_eq!(choice.index, 6);
    assert_eq!(choice.rule, HeuristicRule::Block);
}

#[test]
fn test_takes_center_when_free() {
    let board = Board::from_cells([X, E, E, E, E, E, E, E, E]);
    let choice = HeuristicAgent::seeded(0).choose_cell(&board).unwrap();
    assert_eq!(choice.index, 4);
    assert_eq!(choice.rule, HeuristicRule::Center);
}

#[test]
fn test_prefers_corner_over_edge() {
    let board = Board::from_cells([E, E, E, E, X, E, E, E, E]);
    for seed in 0..64 {
        let choice = HeuristicAgent::seeded(seed).choose_cell(&board).unwrap();
        assert!(CORNERS.contains(&choice.index), "seed {seed} picked {}", choice.index);
        assert_eq!(choice.rule, HeuristicRule::Corner);
    }
}

#[test]
fn test_falls_back_to_edges_when_corners_taken() {
    // X O X / _ X _ / O X O: no threats, center and corners taken.
    let board = Board::from_cells([X, O, X, E, X, E, O, X, O]);
    for seed in 0..32 {
        let choice = HeuristicAgent::seeded(seed).choose_cell(&board).unwrap();
        assert!(matches!(choice.index, 3 | 5));
        assert_eq!(choice.rule, HeuristicRule::AnyRemaining);
    }
}

#[test]
fn test_rules_apply_in_isolation() {
    let mut rng = AgentRng::new(5);
    let quiet = Board::from_cells([X, O, X, E, X, E, O, X, O]);
    assert_eq!(HeuristicRule::WinNow.select(&quiet, &mut rng), None);
    assert_eq!(HeuristicRule::Block.select(&quiet, &mut rng), None);
    assert_eq!(HeuristicRule::Center.select(&quiet, &mut rng), None);
    assert_eq!(HeuristicRule::Corner.select(&quiet, &mut rng), None);
    assert!(HeuristicRule::AnyRemaining.select(&quiet, &mut rng).is_some());

    let threat = Board::from_cells([X, X, E, E, O, E, E, E, E]);
    assert_eq!(HeuristicRule::Block.select(&threat, &mut rng), Some(2));
    assert_eq!(HeuristicRule::WinNow.select(&threat, &mut rng), None);
}

#[test]
fn test_same_seed_same_choices() {
    let board = Board::from_cells([E, E, E, E, X, E, E, E, E]);
    let mut a = HeuristicAgent::seeded(1234);
    let mut b = HeuristicAgent::seeded(1234);
    for _ in 0..16 {
        assert_eq!(a.choose_cell(&board), b.choose_cell(&board));
    }
}

#[test]
fn test_full_board_is_rejected() {
    let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
    let result = HeuristicAgent::seeded(0).choose_cell(&board);
    assert!(matches!(result, Err(GameError::InvariantViolation(_))));
}
