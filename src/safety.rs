// Safety filter for move selection
//
// Starts from all four directions and strikes out the ones that would
// reverse into the neck, leave the board, or land on a body segment.
// Only the very next cell is examined; nothing here looks further ahead.

use crate::types::{Board, Coord, Direction, GameState};

/// Safe/unsafe flag for each of the four directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for MoveSet {
    fn default() -> Self {
        MoveSet::all_safe()
    }
}

impl MoveSet {
    pub fn all_safe() -> Self {
        MoveSet {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }

    pub fn is_safe(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn mark_unsafe(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = false,
            Direction::Down => self.down = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }

    /// Directions still marked safe, in up, down, left, right order
    pub fn safe_directions(&self) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|&dir| self.is_safe(dir))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Forbids turning back onto the neck.
///
/// Horizontal offsets are checked before vertical ones and at most one
/// direction is excluded. A missing neck, or one stacked on the head
/// (turn 0), excludes nothing.
pub fn exclude_backwards(moves: &mut MoveSet, head: Coord, neck: Option<Coord>) {
    let Some(neck) = neck else {
        return;
    };

    if neck.x < head.x {
        moves.mark_unsafe(Direction::Left);
    } else if neck.x > head.x {
        moves.mark_unsafe(Direction::Right);
    } else if neck.y < head.y {
        moves.mark_unsafe(Direction::Down);
    } else if neck.y > head.y {
        moves.mark_unsafe(Direction::Up);
    }
}

/// Forbids any direction whose next cell falls off the board
pub fn exclude_out_of_bounds(moves: &mut MoveSet, head: Coord, board: &Board) {
    for dir in Direction::all() {
        if !board.contains(dir.apply(&head)) {
            moves.mark_unsafe(dir);
        }
    }
}

/// Forbids any direction whose next cell is occupied by one of `body`'s segments.
/// Every segment counts, tail included.
pub fn exclude_body(moves: &mut MoveSet, head: Coord, body: &[Coord]) {
    for dir in Direction::all() {
        let next = dir.apply(&head);
        if body.contains(&next) {
            moves.mark_unsafe(dir);
        }
    }
}

/// Runs every filter against the given state
pub fn safe_moves(state: &GameState) -> MoveSet {
    let mut moves = MoveSet::all_safe();
    let head = state.you.head_position();

    exclude_backwards(&mut moves, head, state.you.neck());
    exclude_out_of_bounds(&mut moves, head, &state.board);
    exclude_body(&mut moves, head, &state.you.body);

    for snake in &state.board.snakes {
        exclude_body(&mut moves, head, &snake.body);
    }

    moves
}
