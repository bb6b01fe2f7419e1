//! Engine tests - run lifecycle through the public facade

use dotdash::core::GameState;
use dotdash::types::{Phase, BLANK_GLYPH, DEFAULT_GRID_WIDTH};

/// Tick until the run is lost, with a hard bound.
fn run_until_lost(game: &mut GameState) {
    for _ in 0..10_000 {
        game.tick();
        if game.lost() {
            return;
        }
    }
    panic!("grounded player never collided");
}

#[test]
fn test_initial_score_offsets_first_screen() {
    let game = GameState::new(1);
    assert_eq!(game.score(), -(DEFAULT_GRID_WIDTH as i64 - 1));
    assert_eq!(game.display_score(), 0);
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn test_frames_cover_the_grid() {
    for width in [7, 11, 40] {
        let mut game = GameState::with_width(width, 1);
        let frame = game.tick().unwrap();
        assert_eq!(frame.chars().count(), width / 2 + width % 2);
    }
}

#[test]
fn test_jump_lifts_the_player() {
    let mut game = GameState::new(1);
    assert_eq!(game.player_row(), 3);

    game.jump();
    game.tick();
    assert_eq!(game.player_row(), 2);
    game.tick();
    assert_eq!(game.player_row(), 1);
}

#[test]
fn test_grounded_run_ends_on_the_first_obstacle() {
    let mut game = GameState::with_width(8, 21);
    run_until_lost(&mut game);
    assert!(game.lost());
}

#[test]
fn test_loss_banner_format() {
    let mut game = GameState::with_width(8, 2);
    run_until_lost(&mut game);

    let banner = game.tick().expect("banner on the first lost tick");
    assert!(banner.contains("Score:"));
    assert!(!banner.contains(' '));
    assert!(banner.contains(BLANK_GLYPH));

    // Only once.
    assert_eq!(game.tick(), None);
}

#[test]
fn test_restart_debounce_then_full_reset() {
    let mut game = GameState::with_width(8, 4);
    run_until_lost(&mut game);

    // Before any lost tick has elapsed the press is swallowed.
    game.input();
    assert!(game.lost());

    game.tick();
    game.tick();
    game.input();
    assert!(game.lost());

    game.tick();
    game.input();
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score(), -7);
    assert!(game.grid().cells().iter().all(|&p| !p));
}

#[test]
fn test_restarted_run_is_playable() {
    let mut game = GameState::with_width(8, 4);
    run_until_lost(&mut game);
    for _ in 0..3 {
        game.tick();
    }
    game.input();

    // The fresh run ticks and renders normally.
    let frame = game.tick().expect("fresh run yields frames");
    assert_eq!(frame.chars().count(), 4);
}

#[test]
fn test_jump_presses_do_not_stack() {
    let mut one = GameState::new(55);
    let mut many = GameState::new(55);

    one.input();
    many.input();
    for _ in 0..10 {
        many.input();
        assert_eq!(one.tick(), many.tick());
    }
}

#[test]
fn test_identical_seeds_identical_runs() {
    let mut a = GameState::new(2026);
    let mut b = GameState::new(2026);
    for tick in 0..500 {
        assert_eq!(a.tick(), b.tick(), "runs diverged at tick {tick}");
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_lost_state_is_sticky_without_input() {
    let mut game = GameState::with_width(8, 9);
    run_until_lost(&mut game);
    for _ in 0..50 {
        game.tick();
    }
    assert!(game.lost());
}
