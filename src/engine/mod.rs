//! Simulation core: grid geometry, the segment chain, collision checks, food placement and
//! the per-tick session driver.
//!
//! Holds no display, audio or file handles and uses bevy only for its log macros. The [`Session`] reports what the
//! outside world should do through [`Request`]s and the bevy plugins carry them out.

mod chain;
mod collision;
mod difficulty;
mod food;
mod frame;
mod grid;
mod session;

pub use chain::*;
pub use collision::*;
pub use difficulty::*;
pub use food::*;
pub use frame::*;
pub use grid::*;
pub use session::*;
