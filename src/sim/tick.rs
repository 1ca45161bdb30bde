//! One simulation step of the grid kernel

use rand::Rng;

use super::grid::Direction;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Requested direction; ignored if it reverses into the snake's neck
    pub direction: Option<Direction>,
    /// Whether the immortality window is active this tick
    pub immortal: bool,
}

/// Result of one step: the successor state plus the events it produced
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Advance the kernel by exactly one tick. Never mutates its input; a
/// game-over state is terminal and steps to itself with no events.
pub fn step(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> StepOutcome {
    let mut next = state.clone();
    let mut events = Vec::new();

    if next.game_over {
        return StepOutcome {
            state: next,
            events,
        };
    }

    next.time_ticks += 1;

    if let Some(dir) = input.direction {
        // Direct reversal into the neck is silently ignored
        if dir != next.direction.opposite() {
            next.direction = dir;
        }
    }

    let n = next.grid_size;
    let mut new_head = next.head().shifted(next.direction);

    if input.immortal {
        // Walls wrap, self-collision is tolerated
        new_head = new_head.wrapped(n);
    } else {
        if !new_head.in_bounds(n) {
            log::debug!("hit wall at {:?}, score {}", new_head, next.score);
            next.game_over = true;
            events.push(GameEvent::GameOver);
            return StepOutcome {
                state: next,
                events,
            };
        }
        if next.occupies(new_head) {
            log::debug!("hit self at {:?}, score {}", new_head, next.score);
            next.game_over = true;
            events.push(GameEvent::GameOver);
            return StepOutcome {
                state: next,
                events,
            };
        }
    }

    next.snake.push_front(new_head);
    events.push(GameEvent::HeadAdvanced { cell: new_head });

    if new_head == next.food.cell {
        let growth = next.food.kind.growth();
        // Tail kept this tick covers the first unit of growth
        next.pending_growth += growth - 1;
        next.score += SCORE_PER_FOOD;
        events.push(GameEvent::FoodEaten {
            cell: new_head,
            growth,
        });
        next.regenerate_food(rng);
        if next.game_over {
            events.push(GameEvent::GameOver);
        }
    } else if next.pending_growth > 0 {
        next.pending_growth -= 1;
    } else {
        next.snake.pop_back();
    }

    StepOutcome {
        state: next,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Cell;
    use crate::sim::state::{Food, FoodKind};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(1234)
    }

    fn state_with(snake: &[(i32, i32)], dir: Direction, food: (i32, i32)) -> GameState {
        GameState {
            grid_size: 20,
            snake: snake.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            food: Food {
                cell: Cell::new(food.0, food.1),
                kind: FoodKind::Normal,
            },
            direction: dir,
            score: 0,
            game_over: false,
            time_ticks: 0,
            pending_growth: 0,
        }
    }

    #[test]
    fn test_step_moves_head_and_drops_tail() {
        let state = state_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up, (5, 5));
        let out = step(&state, &TickInput::default(), &mut rng());

        assert_eq!(out.state.snake.len(), state.snake.len());
        assert_eq!(out.state.head(), Cell::new(10, 9));
        assert!(!out.state.occupies(Cell::new(10, 12)));
        assert_eq!(
            out.events,
            vec![GameEvent::HeadAdvanced {
                cell: Cell::new(10, 9)
            }]
        );
    }

    #[test]
    fn test_step_never_mutates_input() {
        let state = state_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up, (10, 9));
        let before = state.clone();
        let _ = step(&state, &TickInput::default(), &mut rng());

        assert_eq!(state.snake, before.snake);
        assert_eq!(state.score, before.score);
        assert_eq!(state.time_ticks, before.time_ticks);
    }

    #[test]
    fn test_reversal_into_neck_is_ignored() {
        let state = state_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up, (5, 5));
        let input = TickInput {
            direction: Some(Direction::Down),
            ..Default::default()
        };
        let out = step(&state, &input, &mut rng());

        assert_eq!(out.state.direction, Direction::Up);
        assert_eq!(out.state.head(), Cell::new(10, 9));
        assert!(!out.state.game_over);
    }

    #[test]
    fn test_eating_food_grows_scores_and_relocates() {
        let state = state_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up, (10, 9));
        let out = step(&state, &TickInput::default(), &mut rng());

        assert_eq!(out.state.snake.len(), state.snake.len() + 1);
        assert_eq!(out.state.score, SCORE_PER_FOOD);
        assert_ne!(out.state.food.cell, Cell::new(10, 9));
        assert!(!out.state.occupies(out.state.food.cell));
        assert!(out.events.contains(&GameEvent::FoodEaten {
            cell: Cell::new(10, 9),
            growth: 1
        }));
    }

    #[test]
    fn test_bonus_growth_spreads_over_ticks() {
        let mut state = state_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up, (10, 9));
        state.food.kind = FoodKind::Bonus { growth: 3 };
        let start_len = state.snake.len();
        let mut rng = rng();

        // Eat, then keep stepping; each tick may grow by at most one
        let mut lens = vec![start_len];
        let mut cur = state;
        for _ in 0..5 {
            let out = step(&cur, &TickInput::default(), &mut rng);
            lens.push(out.state.snake.len());
            cur = out.state;
            if cur.game_over {
                break;
            }
        }

        for pair in lens.windows(2) {
            assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
        }
        assert_eq!(cur.snake.len(), start_len + 3);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let state = state_with(&[(0, 5), (1, 5), (2, 5)], Direction::Left, (9, 9));
        let out = step(&state, &TickInput::default(), &mut rng());

        assert!(out.state.game_over);
        assert_eq!(out.events, vec![GameEvent::GameOver]);
        // Snake unchanged by the fatal step
        assert_eq!(out.state.snake, state.snake);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let state = state_with(
            &[(5, 5), (5, 6), (6, 6), (6, 5), (7, 5)],
            Direction::Right,
            (9, 9),
        );
        // Heading right from (5,5) into (6,5), an occupied body cell
        let out = step(&state, &TickInput::default(), &mut rng());
        assert!(out.state.game_over);
    }

    #[test]
    fn test_immortal_wraps_walls_and_ignores_self() {
        let state = state_with(&[(0, 5), (1, 5), (2, 5)], Direction::Left, (9, 9));
        let input = TickInput {
            immortal: true,
            ..Default::default()
        };
        let out = step(&state, &input, &mut rng());
        assert!(!out.state.game_over);
        assert_eq!(out.state.head(), Cell::new(19, 5));

        let coiled = state_with(
            &[(5, 5), (5, 6), (6, 6), (6, 5), (7, 5)],
            Direction::Right,
            (9, 9),
        );
        let out = step(&coiled, &input, &mut rng());
        assert!(!out.state.game_over);
        assert_eq!(out.state.head(), Cell::new(6, 5));
        // Overlap tolerated: the cell now appears twice in the body
        assert_eq!(
            out.state
                .snake
                .iter()
                .filter(|&&c| c == Cell::new(6, 5))
                .count(),
            2
        );
    }

    #[test]
    fn test_game_over_is_terminal() {
        let state = state_with(&[(0, 5), (1, 5), (2, 5)], Direction::Left, (9, 9));
        let dead = step(&state, &TickInput::default(), &mut rng()).state;
        assert!(dead.game_over);

        let out = step(&dead, &TickInput::default(), &mut rng());
        assert!(out.events.is_empty());
        assert_eq!(out.state.snake, dead.snake);
        assert_eq!(out.state.time_ticks, dead.time_ticks);
    }

    #[test]
    fn test_500_tick_cycle_never_panics() {
        // Spec scenario: cycle RIGHT, DOWN, LEFT, UP for 500 ticks
        let mut state = state_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up, (5, 5));
        let dirs = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        let mut rng = rng();

        for i in 0..500 {
            let was_over = state.game_over;
            let input = TickInput {
                direction: Some(dirs[i % 4]),
                ..Default::default()
            };
            let out = step(&state, &input, &mut rng);

            if was_over {
                // Halted: no further mutation
                assert_eq!(out.state.snake, state.snake);
                assert_eq!(out.state.score, state.score);
            } else {
                let head = out.state.head();
                assert!(head.in_bounds(20) || out.state.game_over);
            }
            state = out.state;
        }
    }

    proptest! {
        #[test]
        fn prop_step_length_and_adjacency(
            x in 5i32..15, y in 5i32..15,
            dir_idx in 0usize..4,
            len in 1usize..6,
        ) {
            let dirs = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
            let dir = dirs[dir_idx];
            // Straight snake trailing opposite to the travel direction
            let (dx, dy) = dir.opposite().offset();
            let snake: Vec<(i32, i32)> =
                (0..len as i32).map(|i| (x + dx * i, y + dy * i)).collect();
            let state = state_with(&snake, dir, (0, 0));

            let out = step(&state, &TickInput::default(), &mut rng());
            prop_assert!(!out.state.game_over);

            let grew = out.state.score > state.score;
            prop_assert_eq!(
                out.state.snake.len(),
                state.snake.len() + usize::from(grew)
            );

            let old = state.head();
            let new = out.state.head();
            prop_assert_eq!((new.x - old.x).abs() + (new.y - old.y).abs(), 1);
        }

        #[test]
        fn prop_food_placement_avoids_body(
            seed in any::<u64>(),
            cells in proptest::collection::hash_set((0i32..6, 0i32..6), 1..35),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let snake: VecDeque<Cell> =
                cells.iter().map(|&(x, y)| Cell::new(x, y)).collect();
            let mut state = GameState {
                grid_size: 6,
                snake,
                food: Food { cell: Cell::new(0, 0), kind: FoodKind::Normal },
                direction: Direction::Up,
                score: 0,
                game_over: false,
                time_ticks: 0,
                pending_growth: 0,
            };

            state.regenerate_food(&mut rng);
            // At least one free cell exists (<= 35 of 36 occupied)
            prop_assert!(!state.game_over);
            prop_assert!(!state.occupies(state.food.cell));
            prop_assert!(state.food.cell.in_bounds(6));
        }
    }
}
