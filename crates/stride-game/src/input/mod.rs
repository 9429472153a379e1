//! Input system with action-based mapping
//!
//! Raw key events become action state; the sampler reduces that state to the
//! axes and edges the locomotion controller consumes.

mod sampler;
mod state;

pub use sampler::{InputSample, InputSampler, InputSource};
pub use state::{InputAction, InputBinding, InputBindings, InputHandler, InputState};
