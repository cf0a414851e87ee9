//! Game loop driver: one session of play, advanced one tick at a time.

use bevy::log::{debug, info};
use rand::Rng;

use super::{
    Chain, Difficulty, Direction, FOOD_RGB, Frame, Grid, Point, SNAKE_RGB, Tile,
    has_self_collision, place_food,
};

/// Where the head starts every session.
pub const START_POSITION: Point = Point::new(100, 300);

/// Lifecycle of a session. `Ended` is terminal until [`Session::restart`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    Ended,
}

/// What a single tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickEvent {
    Moved,
    Grew,
    Ended,
}

/// Sound cues the audio collaborator knows how to play.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AudioCue {
    Eat,
    Collision,
}

/// Side effects a tick asks its collaborators to perform.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Request {
    RenderFrame,
    PlayCue(AudioCue),
    PersistHighScore { difficulty: Difficulty, score: u32 },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TickReport {
    pub event: TickEvent,
    pub requests: Vec<Request>,
}

/// A chain, its food and the running score for one difficulty tier.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    start: Point,
    chain: Chain,
    food: Point,
    score: u32,
    best: u32,
    difficulty: Difficulty,
    phase: Phase,
}

impl Session {
    /// Starts a session with a lone head at `start` and freshly placed food.
    ///
    /// `best` is the stored high score for `difficulty` at the time the session starts.
    pub fn new<R: Rng>(
        grid: Grid,
        start: Point,
        difficulty: Difficulty,
        best: u32,
        rng: &mut R,
    ) -> Self {
        let chain = Chain::new(grid, start);
        let food = place_food(&chain, &grid, rng);
        info!("Starting {difficulty} session, high score {best}");
        Session {
            grid,
            start,
            chain,
            food,
            score: 0,
            best,
            difficulty,
            phase: Phase::Running,
        }
    }

    /// Resets the chain and score for another round at the same tier.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.chain.reset(self.start);
        self.food = place_food(&self.chain, &self.grid, rng);
        self.score = 0;
        self.phase = Phase::Running;
        info!(
            "Restarting {} session, high score {}",
            self.difficulty, self.best
        );
    }

    /// Runs one simulation step.
    ///
    /// Moves the chain, ends the session on a collision, otherwise grows and rescores when
    /// the head lands on the food. A session that already ended is left untouched.
    pub fn tick<R: Rng>(&mut self, requested: Option<Direction>, rng: &mut R) -> TickReport {
        if self.phase == Phase::Ended {
            return TickReport {
                event: TickEvent::Ended,
                requests: Vec::new(),
            };
        }

        let mut requests = Vec::new();
        let reversed_into_tail = self.chain.propagate(requested);

        let event = if reversed_into_tail || has_self_collision(&self.chain) {
            self.phase = Phase::Ended;
            requests.push(Request::PlayCue(AudioCue::Collision));
            if self.score > self.best {
                self.best = self.score;
                requests.push(Request::PersistHighScore {
                    difficulty: self.difficulty,
                    score: self.score,
                });
            }
            info!(
                "Session ended with score {} (length {})",
                self.score,
                self.chain.len()
            );
            TickEvent::Ended
        } else if self.chain.head().position == self.food {
            requests.push(Request::PlayCue(AudioCue::Eat));
            self.chain.grow();
            self.score += 1;
            self.food = place_food(&self.chain, &self.grid, rng);
            debug!(
                "Ate food, score {} length {}, next food at {:?}",
                self.score,
                self.chain.len(),
                self.food
            );
            TickEvent::Grew
        } else {
            TickEvent::Moved
        };

        requests.push(Request::RenderFrame);
        TickReport { event, requests }
    }

    /// Everything the renderer needs for the current state.
    pub fn frame(&self) -> Frame {
        Frame {
            segments: self
                .chain
                .segments()
                .iter()
                .map(|segment| Tile {
                    position: segment.position,
                    color: SNAKE_RGB,
                })
                .collect(),
            food: Tile {
                position: self.food,
                color: FOOD_RGB,
            },
            score: self.score,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The better of the stored high score and this session's score once it ended.
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    #[cfg(test)]
    fn with_state(chain: Chain, food: Point, score: u32, best: u32) -> Self {
        Session {
            grid: *chain.grid(),
            start: START_POSITION,
            chain,
            food,
            score,
            best,
            difficulty: Difficulty::Normal,
            phase: Phase::Running,
        }
    }
}
