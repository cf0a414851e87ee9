//! Shared ECS glue: components, resources, messages, and constants.

mod components;
mod constants;
mod events;
mod resources;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
