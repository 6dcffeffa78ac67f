// Safety Filter Tests
//
// Each rule is checked on its own where possible: single-segment snakes
// have no neck, so only the rule under test can exclude anything.

use greedy_snake::safety::safe_moves;
use greedy_snake::types::{Battlesnake, Board, Coord, Direction, GameState};

fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    let body: Vec<Coord> = body.iter().map(|&(x, y)| Coord { x, y }).collect();
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 90,
        head: body[0],
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: None,
    }
}

/// Builds a state where `you` is also listed among the board snakes, as on the wire
fn state(width: i32, height: i32, you: &[(i32, i32)], opponents: &[&[(i32, i32)]]) -> GameState {
    let you = snake("you", you);
    let mut snakes = vec![you.clone()];
    for (i, body) in opponents.iter().enumerate() {
        snakes.push(snake(&format!("opponent-{}", i), body));
    }

    GameState {
        game: Default::default(),
        turn: 1,
        board: Board {
            width,
            height,
            food: vec![],
            snakes,
            hazards: vec![],
        },
        you,
    }
}

fn safe(state: &GameState) -> Vec<Direction> {
    safe_moves(state).safe_directions()
}

#[test]
fn test_neck_below_excludes_down() {
    let s = state(11, 11, &[(5, 5), (5, 4)], &[]);
    assert_eq!(safe(&s), vec![Direction::Up, Direction::Left, Direction::Right]);
}

#[test]
fn test_neck_above_excludes_up() {
    let s = state(11, 11, &[(5, 5), (5, 6)], &[]);
    assert_eq!(safe(&s), vec![Direction::Down, Direction::Left, Direction::Right]);
}

#[test]
fn test_neck_left_and_right() {
    let s = state(11, 11, &[(5, 5), (4, 5)], &[]);
    assert!(!safe_moves(&s).left);

    let s = state(11, 11, &[(5, 5), (6, 5)], &[]);
    assert!(!safe_moves(&s).right);
}

#[test]
fn test_walls_exclude_leaving_the_board() {
    // 7 wide, 5 tall so a width/height mix-up shows
    let cases = [
        ((0, 2), Direction::Left),
        ((6, 2), Direction::Right),
        ((3, 0), Direction::Down),
        ((3, 4), Direction::Up),
    ];

    for (head, excluded) in cases {
        let s = state(7, 5, &[head], &[]);
        let moves = safe_moves(&s);
        for dir in Direction::all() {
            assert_eq!(
                moves.is_safe(dir),
                dir != excluded,
                "head {:?}: {} should be {}",
                head,
                dir,
                if dir == excluded { "unsafe" } else { "safe" }
            );
        }
    }
}

#[test]
fn test_left_wall_with_neck_to_the_right() {
    // Head hugging the left wall, having just moved left
    let s = state(11, 11, &[(0, 5), (1, 5)], &[]);
    assert_eq!(safe(&s), vec![Direction::Up, Direction::Down]);
}

#[test]
fn test_own_coil_blocks_adjacent_cells() {
    // Head at (5,5) wrapped by its own body on three sides
    let s = state(
        11,
        11,
        &[(5, 5), (5, 4), (4, 4), (4, 5), (4, 6), (5, 6)],
        &[],
    );
    assert_eq!(safe(&s), vec![Direction::Right]);
}

#[test]
fn test_own_tail_counts_as_body() {
    let s = state(11, 11, &[(5, 5), (5, 4), (6, 4), (6, 5)], &[]);
    assert!(!safe_moves(&s).right, "tail segment at (6,5) blocks right");
}

#[test]
fn test_opponent_segments_block() {
    let opponent: &[(i32, i32)] = &[(6, 5), (6, 6), (5, 6)];
    let s = state(11, 11, &[(5, 5), (5, 4)], &[opponent]);
    assert_eq!(safe(&s), vec![Direction::Left]);
}

#[test]
fn test_opponent_head_blocks() {
    let opponent: &[(i32, i32)] = &[(4, 5), (3, 5), (2, 5)];
    let s = state(11, 11, &[(5, 5), (5, 4)], &[opponent]);
    assert!(!safe_moves(&s).left);
}

#[test]
fn test_every_opponent_is_checked() {
    let first: &[(i32, i32)] = &[(0, 0), (0, 1)];
    let second: &[(i32, i32)] = &[(5, 6), (5, 7)];
    let third: &[(i32, i32)] = &[(4, 5), (3, 5)];
    let s = state(11, 11, &[(5, 5), (5, 4)], &[first, second, third]);
    assert_eq!(safe(&s), vec![Direction::Right]);
}

#[test]
fn test_distant_snakes_do_not_matter() {
    let opponent: &[(i32, i32)] = &[(9, 9), (9, 8), (9, 7)];
    let s = state(11, 11, &[(5, 5), (5, 4)], &[opponent]);
    assert_eq!(safe(&s), vec![Direction::Up, Direction::Left, Direction::Right]);
}

#[test]
fn test_fully_enclosed_has_no_safe_move() {
    let s = state(11, 11, &[(0, 0), (1, 0), (1, 1), (0, 1)], &[]);
    assert!(safe_moves(&s).is_empty());
}
