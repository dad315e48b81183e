//! Game state management module.
//!
//! This module defines the [`GameState`] struct, the level session that owns the
//! current maze, its wall rectangles, the player and the held keys. The host
//! drives it through a small set of calls:
//!
//! - [`GameState::start_level`] generates a fresh maze and respawns the player.
//! - [`GameState::on_key_down`] / [`GameState::on_key_up`] update the held keys.
//! - [`GameState::tick`] advances the player by one fixed step.
//! - [`GameState::walls`] exposes the wall set for rendering.

pub mod collision;
pub mod keys;
pub mod movement;
pub mod player;
pub mod ticker;

use self::collision::{CollisionSystem, Rect};
use self::keys::{GameKey, InputState};
use self::player::Player;
use crate::benchmarks::{self, MAZE_GENERATION, MOVEMENT_TICK};
use crate::config::GameConfig;
use crate::maze::{self, Maze, MazeError};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Lifecycle of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    /// No level loaded; ticks do nothing.
    Idle,
    /// A maze is being generated.
    Generating,
    /// The player can move.
    Active,
}

/// Represents the entire mutable state of one game session.
pub struct GameState {
    config: GameConfig,
    level_state: LevelState,
    maze: Option<Maze>,
    collision_system: CollisionSystem,
    player: Player,
    input: InputState,
    seed: Option<u64>,
    ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates an idle session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates an idle session with a custom configuration.
    pub fn with_config(config: GameConfig) -> Self {
        let (spawn_x, spawn_y) = config.spawn_point();
        let (width, height) = config.player_size;
        Self {
            player: Player::new(spawn_x, spawn_y, width, height),
            config,
            level_state: LevelState::Idle,
            maze: None,
            collision_system: CollisionSystem::new(),
            input: InputState::new(),
            seed: None,
            ticks: 0,
        }
    }

    /// Generates a new maze and places the player at the spawn point.
    ///
    /// The previous maze and its walls are discarded first. With `seed` set the
    /// maze is reproducible; otherwise a seed is drawn from entropy and can be read
    /// back with [`GameState::seed`].
    ///
    /// # Errors
    /// Propagates [`MazeError`] when the configured size is invalid; the session is
    /// left idle in that case.
    pub fn start_level(&mut self, seed: Option<u64>) -> Result<(), MazeError> {
        self.level_state = LevelState::Generating;
        self.maze = None;
        self.collision_system.clear();

        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let (width, height) = (self.config.maze_width, self.config.maze_height);

        let maze = match benchmarks::time(MAZE_GENERATION, || {
            maze::generate(width, height, &mut rng)
        }) {
            Ok(maze) => maze,
            Err(err) => {
                warn!("Level generation failed: {err}");
                self.level_state = LevelState::Idle;
                return Err(err);
            }
        };

        self.collision_system
            .build_from_maze(&maze, self.config.cell_size);
        debug!("Maze for seed {seed}:\n{maze}");
        self.maze = Some(maze);

        self.player.set_position(self.config.spawn_point());
        self.seed = Some(seed);
        self.ticks = 0;
        self.level_state = LevelState::Active;

        info!(
            "Level started: {}x{} maze, seed {}, {} walls",
            width,
            height,
            seed,
            self.collision_system.walls().len()
        );
        Ok(())
    }

    /// Leaves the current level and discards its maze.
    pub fn quit_level(&mut self) {
        if self.level_state == LevelState::Idle {
            return;
        }
        info!("Level quit after {} ticks", self.ticks);
        self.level_state = LevelState::Idle;
        self.maze = None;
        self.collision_system.clear();
    }

    /// Records a key press. Keys that do not steer are ignored.
    pub fn on_key_down(&mut self, key: GameKey) {
        self.input.press_key(key);
    }

    /// Records a key release. Keys that do not steer are ignored.
    pub fn on_key_up(&mut self, key: GameKey) {
        self.input.release_key(key);
    }

    /// Releases every held direction.
    pub fn release_all_keys(&mut self) {
        self.input.clear();
    }

    /// Advances the level by one fixed tick.
    ///
    /// Returns the updated player while a level is active, `None` otherwise.
    pub fn tick(&mut self) -> Option<&Player> {
        if self.level_state != LevelState::Active {
            return None;
        }

        let _timer = benchmarks::scoped_timer(MOVEMENT_TICK);
        self.player = movement::step(
            &self.input,
            &self.collision_system,
            &self.player,
            self.config.playfield_size(),
            self.config.speed,
        );
        self.ticks += 1;
        Some(&self.player)
    }

    /// Wall rectangles of the active maze; empty while idle.
    pub fn walls(&self) -> &[Rect] {
        self.collision_system.walls()
    }

    /// The active maze, if any.
    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The currently held directions.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Current lifecycle state.
    pub fn level_state(&self) -> LevelState {
        self.level_state
    }

    /// Seed of the most recently generated maze.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Ticks run since the level started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig {
            maze_width: 11,
            maze_height: 9,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let mut game = GameState::new();
        assert_eq!(game.level_state(), LevelState::Idle);
        assert!(game.walls().is_empty());
        assert!(game.maze().is_none());

        game.on_key_down(GameKey::MoveRight);
        assert!(game.tick().is_none());
        assert_eq!(game.player().position(), (40.0, 40.0));
    }

    #[test]
    fn test_start_level_builds_walls_and_spawns() {
        let mut game = GameState::new();
        game.start_level(Some(7)).unwrap();

        assert_eq!(game.level_state(), LevelState::Active);
        assert_eq!(game.seed(), Some(7));
        let maze = game.maze().unwrap();
        assert_eq!((maze.width(), maze.height()), (20, 20));
        assert_eq!(game.walls().len(), 20 * 20 - maze.open_count());
        assert_eq!(game.player().position(), (40.0, 40.0));
    }

    #[test]
    fn test_spawn_does_not_touch_walls() {
        let mut game = GameState::with_config(small_config());
        for seed in 0..20 {
            game.start_level(Some(seed)).unwrap();
            let player = game.player().rect();
            assert!(game.walls().iter().all(|wall| !wall.intersects(&player)));
        }
    }

    #[test]
    fn test_same_seed_same_walls() {
        let mut first = GameState::new();
        let mut second = GameState::new();
        first.start_level(Some(99)).unwrap();
        second.start_level(Some(99)).unwrap();
        assert_eq!(first.walls(), second.walls());
    }

    #[test]
    fn test_random_seed_is_recorded() {
        let mut game = GameState::with_config(small_config());
        game.start_level(None).unwrap();
        let seed = game.seed().unwrap();

        let mut replay = GameState::with_config(small_config());
        replay.start_level(Some(seed)).unwrap();
        assert_eq!(game.maze(), replay.maze());
    }

    #[test]
    fn test_restart_respawns_player() {
        let mut game = GameState::new();
        game.start_level(Some(3)).unwrap();
        game.player.set_position((200.0, 200.0));
        game.start_level(Some(4)).unwrap();
        assert_eq!(game.player().position(), (40.0, 40.0));
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn test_quit_discards_level() {
        let mut game = GameState::new();
        game.start_level(Some(1)).unwrap();
        game.quit_level();

        assert_eq!(game.level_state(), LevelState::Idle);
        assert!(game.walls().is_empty());
        assert!(game.maze().is_none());
        assert!(game.tick().is_none());
    }

    #[test]
    fn test_invalid_size_leaves_session_idle() {
        let mut game = GameState::with_config(GameConfig {
            maze_width: 2,
            ..GameConfig::default()
        });
        let err = game.start_level(Some(1)).unwrap_err();
        assert!(matches!(err, MazeError::TooSmall { width: 2, .. }));
        assert_eq!(game.level_state(), LevelState::Idle);
        assert!(game.walls().is_empty());
    }

    #[test]
    fn test_idle_input_keeps_player_still() {
        let mut game = GameState::new();
        game.start_level(Some(5)).unwrap();
        for _ in 0..50 {
            game.tick();
        }
        assert_eq!(game.player().position(), (40.0, 40.0));
        assert_eq!(game.ticks(), 50);
    }

    #[test]
    fn test_player_stays_in_playfield_and_out_of_walls() {
        let mut game = GameState::with_config(small_config());
        game.start_level(Some(11)).unwrap();
        let (bound_x, bound_y) = game.config().playfield_size();
        let pattern = [
            GameKey::MoveRight,
            GameKey::MoveDown,
            GameKey::MoveLeft,
            GameKey::MoveUp,
        ];

        for (i, key) in pattern.iter().cycle().take(400).enumerate() {
            if i % 3 == 0 {
                game.on_key_down(*key);
            } else {
                game.on_key_up(*key);
            }
            let player = *game.tick().unwrap();
            assert!(player.x >= 0.0 && player.x + player.width <= bound_x);
            assert!(player.y >= 0.0 && player.y + player.height <= bound_y);
            let rect = player.rect();
            assert!(game.walls().iter().all(|wall| !wall.intersects(&rect)));
        }
    }

    #[test]
    fn test_keys_survive_restart() {
        let mut game = GameState::new();
        game.on_key_down(GameKey::MoveDown);
        game.start_level(Some(2)).unwrap();
        assert!(game.input().down);
        game.on_key_up(GameKey::MoveDown);
        assert!(!game.input().is_moving());

        game.on_key_down(GameKey::MoveLeft);
        game.on_key_down(GameKey::MoveUp);
        game.release_all_keys();
        assert!(!game.input().is_moving());
    }
}
