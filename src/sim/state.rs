//! Game state and core simulation types
//!
//! Everything the presentation layer can observe lives in [`GameState`] and is
//! handed out through [`Snapshot`].

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{Direction, InputIntent};
use super::spawn::generate;
use super::tick::{TickOutcome, tick};
use crate::consts::*;
use crate::hook_home;

/// Lifecycle phase; the score rides along with the phase that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for Start, no simulation running
    Idle,
    /// Active gameplay
    Running { score: u32 },
    /// A fish was caught; score is frozen
    Over { final_score: u32 },
}

impl GamePhase {
    pub fn score(&self) -> u32 {
        match *self {
            GamePhase::Idle => 0,
            GamePhase::Running { score } => score,
            GamePhase::Over { final_score } => final_score,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running { .. })
    }
}

/// Horizontal swim direction of a fish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// A fish swimming back and forth in its lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub pos: Vec2,
    /// Points awarded when caught (fixed at spawn)
    pub value: u32,
    pub heading: Heading,
    /// Units per tick (fixed at spawn)
    pub speed: f32,
}

/// RNG state wrapper for serialization
///
/// Every population draw uses a fresh stream so consecutive games differ while
/// the whole session stays reproducible from `seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out the generator for the current stream and advance to the next
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// What the presentation layer needs to draw one fish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishView {
    pub x: f32,
    pub y: f32,
    pub value: u32,
}

/// Immutable view of a whole tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub hook: Vec2,
    pub player_x: f32,
    pub fish: Vec<FishView>,
}

/// Complete game state (deterministic, serializable)
///
/// Only the lifecycle commands and `tick` mutate it; everything else reads
/// through the getters or [`Snapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub(crate) seed: u64,
    /// RNG state
    pub(crate) rng_state: RngState,
    /// Current phase (and score)
    pub(crate) phase: GamePhase,
    /// Player anchor on the surface
    pub(crate) player_x: f32,
    /// Hook position; `hook.x` always equals `player_x`
    pub(crate) hook: Vec2,
    /// Live population, in generation order
    pub(crate) fish: Vec<Fish>,
    /// Ticks simulated in the current game
    pub(crate) time_ticks: u64,
    /// Directions held by continuous sources (touch buttons)
    #[serde(skip)]
    pub(crate) held: InputIntent,
    /// One-shot moves from discrete sources, applied on the next tick
    #[serde(skip)]
    pub(crate) pulses: Vec<Direction>,
}

impl GameState {
    /// Create an idle game with an initial population to show behind the menu
    pub fn new(seed: u64) -> Self {
        let mut rng_state = RngState::new(seed);
        let fish = generate(&mut rng_state.next_rng());

        Self {
            seed,
            rng_state,
            phase: GamePhase::Idle,
            player_x: PLAYER_START_X,
            hook: hook_home(PLAYER_START_X),
            fish,
            time_ticks: 0,
            held: InputIntent::default(),
            pulses: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.phase.score()
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn hook(&self) -> Vec2 {
        self.hook
    }

    /// Live population, in generation order
    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Start a new game. Only valid from Idle.
    pub fn start(&mut self) {
        if !self.can_start() {
            return;
        }

        let fish = generate(&mut self.rng_state.next_rng());
        log::debug!("Drew population from stream {}", self.rng_state.stream - 1);
        self.begin(fish);
    }

    /// Start a game with a caller-chosen population instead of a random one.
    /// Same phase rules as [`start`](Self::start).
    #[doc(hidden)]
    pub fn start_with_population(&mut self, fish: Vec<Fish>) {
        if !self.can_start() {
            return;
        }
        self.begin(fish);
    }

    fn can_start(&self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        true
    }

    fn begin(&mut self, fish: Vec<Fish>) {
        self.fish = fish;
        self.hook = hook_home(self.player_x);
        self.time_ticks = 0;
        self.clear_input();
        self.phase = GamePhase::Running { score: 0 };
        log::info!("Game started (seed {}, {} fish)", self.seed, self.fish.len());
    }

    /// Return to Idle after a catch. Only valid from Over.
    ///
    /// The player keeps its horizontal position and the old population stays
    /// in the water until the next `start`.
    pub fn restart(&mut self) {
        if !matches!(self.phase, GamePhase::Over { .. }) {
            log::debug!("restart ignored in {:?}", self.phase);
            return;
        }

        self.hook = hook_home(self.player_x);
        self.clear_input();
        self.phase = GamePhase::Idle;
        log::info!("Back to idle");
    }

    /// Advance one frame. A no-op outside Running.
    pub fn tick(&mut self) -> TickOutcome {
        tick(self)
    }

    /// Press or release a direction on a continuous control source
    pub fn set_intent(&mut self, direction: Direction, active: bool) {
        if !self.is_running() {
            return;
        }
        self.held.set(direction, active);
    }

    /// Replace the whole held set at once
    pub fn set_held(&mut self, intent: InputIntent) {
        if !self.is_running() {
            return;
        }
        self.held = intent;
    }

    /// Queue one discrete step (key press) for the next tick
    pub fn move_once(&mut self, direction: Direction) {
        if !self.is_running() {
            return;
        }
        self.pulses.push(direction);
    }

    pub fn held(&self) -> InputIntent {
        self.held
    }

    pub(crate) fn clear_input(&mut self) {
        self.held = InputIntent::default();
        self.pulses.clear();
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score(),
            hook: self.hook,
            player_x: self.player_x,
            fish: self
                .fish
                .iter()
                .map(|f| FishView {
                    x: f.pos.x,
                    y: f.pos.y,
                    value: f.value,
                })
                .collect(),
        }
    }
}
