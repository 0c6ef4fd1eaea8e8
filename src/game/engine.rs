use rand::Rng;

use super::{
    action::Direction,
    config::GameConfig,
    events::EventSink,
    state::{CollisionType, GameState, Position, Snake},
};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake advanced one cell
    Moved,
    /// Snake advanced and consumed the food
    AteFood,
    /// Snake is dead; the state no longer advances
    GameOver,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: the snake lies along the top row with its tail
    /// at the origin and its head pointing right, and the food is placed
    /// at random.
    pub fn reset(&mut self) -> GameState {
        let head = Position::new(self.config.initial_snake_length as i32 - 1, 0);
        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);
        let food = self.spawn_food();

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Request a heading change. Reversals are ignored; a successful change
    /// fires the `direction_changed` hook. Returns whether it took effect.
    pub fn set_direction(
        &mut self,
        state: &mut GameState,
        requested: Direction,
        events: &mut dyn EventSink,
    ) -> bool {
        if !state.is_alive {
            return false;
        }

        let changed = state.snake.set_direction(requested);
        if changed {
            events.direction_changed();
        }
        changed
    }

    /// Advance the simulation by one step.
    ///
    /// Eating is resolved against the pre-tick head: landing on the food
    /// keeps the tail for one tick (net growth of one) and respawns the
    /// food before the head moves on. The self-collision scan runs after
    /// the tail drop, so stepping into the cell the tail just vacated is
    /// legal. A dead state is never mutated.
    pub fn tick(&mut self, state: &mut GameState, events: &mut dyn EventSink) -> TickOutcome {
        if !state.is_alive {
            return TickOutcome::GameOver;
        }

        let head = state.snake.head();

        let ate = head == state.food;
        if ate {
            state.score += 1;
            state.food = self.spawn_food();
            events.food_eaten();
        } else {
            state.snake.pop_tail();
        }

        let next = head.moved_in_direction(state.snake.direction);

        if !state.is_in_bounds(next) {
            return self.kill(state, CollisionType::Wall, events);
        }
        if state.snake.occupies(next) {
            return self.kill(state, CollisionType::SelfCollision, events);
        }

        state.snake.push_head(next);

        if ate {
            TickOutcome::AteFood
        } else {
            TickOutcome::Moved
        }
    }

    fn kill(
        &self,
        state: &mut GameState,
        cause: CollisionType,
        events: &mut dyn EventSink,
    ) -> TickOutcome {
        state.is_alive = false;
        state.cause_of_death = Some(cause);
        events.game_over();
        TickOutcome::GameOver
    }

    /// Pick a food cell uniformly from the whole grid. The snake's own
    /// cells are not excluded; food under the body is simply eaten when
    /// the head passes over it again.
    fn spawn_food(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;
        Position::new(x, y)
    }
}
