// Greedy food seeking
//
// Targets the single nearest food item and steps along whichever axis
// brings the head closer, provided that step survived the safety filter.

use crate::safety::MoveSet;
use crate::types::{Coord, Direction};

/// Order in which reducing directions are tried
pub const FOOD_PRIORITY: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Down,
    Direction::Up,
];

/// Nearest food by Manhattan distance.
/// On a tie the item listed first wins.
pub fn nearest_food(head: Coord, food: &[Coord]) -> Option<Coord> {
    let mut items = food.iter();
    let mut closest = *items.next()?;
    let mut closest_distance = head.manhattan_distance(&closest);

    for item in items {
        let distance = head.manhattan_distance(item);
        if distance < closest_distance {
            closest = *item;
            closest_distance = distance;
        }
    }

    Some(closest)
}

/// True if stepping in `direction` shortens the gap to `target` on that axis
fn reduces_distance(head: Coord, target: Coord, direction: Direction) -> bool {
    match direction {
        Direction::Left => target.x < head.x,
        Direction::Right => target.x > head.x,
        Direction::Down => target.y < head.y,
        Direction::Up => target.y > head.y,
    }
}

/// First safe direction, in [`FOOD_PRIORITY`] order, that moves toward the
/// nearest food. Food that is only reachable through an unsafe step is not
/// swapped for the next-nearest item.
pub fn move_towards_food(head: Coord, food: &[Coord], moves: &MoveSet) -> Option<Direction> {
    let target = nearest_food(head, food)?;

    FOOD_PRIORITY
        .iter()
        .copied()
        .find(|&dir| reduces_distance(head, target, dir) && moves.is_safe(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_food_none_without_food() {
        assert_eq!(nearest_food(Coord { x: 1, y: 1 }, &[]), None);
    }

    #[test]
    fn test_nearest_food_first_wins_ties() {
        let head = Coord { x: 5, y: 5 };
        let food = [
            Coord { x: 9, y: 9 },
            Coord { x: 5, y: 7 },
            Coord { x: 3, y: 5 },
            Coord { x: 5, y: 3 },
        ];
        assert_eq!(nearest_food(head, &food), Some(Coord { x: 5, y: 7 }));
    }

    #[test]
    fn test_horizontal_axis_beats_vertical() {
        let head = Coord { x: 5, y: 5 };
        let food = [Coord { x: 8, y: 1 }];
        let moves = MoveSet::all_safe();
        assert_eq!(move_towards_food(head, &food, &moves), Some(Direction::Right));
    }

    #[test]
    fn test_falls_through_to_other_axis() {
        let head = Coord { x: 5, y: 5 };
        let food = [Coord { x: 8, y: 1 }];
        let mut moves = MoveSet::all_safe();
        moves.mark_unsafe(Direction::Right);
        assert_eq!(move_towards_food(head, &food, &moves), Some(Direction::Down));
    }

    #[test]
    fn test_does_not_retarget_when_nearest_is_blocked() {
        let head = Coord { x: 5, y: 5 };
        // nearest is straight left; the other item is reachable going up
        let food = [Coord { x: 4, y: 5 }, Coord { x: 5, y: 9 }];
        let mut moves = MoveSet::all_safe();
        moves.mark_unsafe(Direction::Left);
        assert_eq!(move_towards_food(head, &food, &moves), None);
    }

    #[test]
    fn test_food_under_head_gives_nothing() {
        let head = Coord { x: 2, y: 2 };
        let moves = MoveSet::all_safe();
        assert_eq!(move_towards_food(head, &[head], &moves), None);
    }
}
