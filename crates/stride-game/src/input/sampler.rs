use super::state::{InputAction, InputState};

/// Narrow input contract: axes plus key edges.
///
/// Everything device-specific stays behind this trait. Axes may exceed
/// `[-1, 1]`; [`InputSampler`] clamps them.
pub trait InputSource {
    /// Horizontal axis, positive to the right
    fn axis_horizontal(&self) -> f32;
    /// Vertical axis, positive forward
    fn axis_vertical(&self) -> f32;
    /// True only on the frame `action` went down
    fn key_down(&self, action: InputAction) -> bool;
    /// True only on the frame `action` went up
    fn key_up(&self, action: InputAction) -> bool;
}

impl InputSource for InputState {
    fn axis_horizontal(&self) -> f32 {
        self.digital_axis(InputAction::MoveLeft, InputAction::MoveRight) + self.move_axis.x
    }

    fn axis_vertical(&self) -> f32 {
        self.digital_axis(InputAction::MoveBackward, InputAction::MoveForward) + self.move_axis.y
    }

    fn key_down(&self, action: InputAction) -> bool {
        self.is_just_pressed(action)
    }

    fn key_up(&self, action: InputAction) -> bool {
        self.is_just_released(action)
    }
}

/// One frame of locomotion input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Strafe axis in `[-1, 1]`
    pub horizontal: f32,
    /// Forward axis in `[-1, 1]`
    pub vertical: f32,
    /// Jump went down this frame
    pub jump_edge: bool,
    /// Run went down this frame
    pub run_key_down: bool,
    /// Run went up this frame
    pub run_key_up: bool,
}

impl InputSample {
    /// Whether the axes request any movement
    pub fn has_movement(&self) -> bool {
        self.horizontal != 0.0 || self.vertical != 0.0
    }

    /// Fold a newer frame into this one.
    ///
    /// Axes take the newest values and the jump edge stays set until consumed.
    /// Run edges from a newer frame replace older ones, so a release followed
    /// by a press ends up running.
    pub fn merge(&mut self, newer: InputSample) {
        self.horizontal = newer.horizontal;
        self.vertical = newer.vertical;
        self.jump_edge |= newer.jump_edge;
        if newer.run_key_down || newer.run_key_up {
            self.run_key_down = newer.run_key_down;
            self.run_key_up = newer.run_key_up;
        }
    }

    /// Drop the edges, keeping the axes
    pub fn clear_edges(&mut self) {
        self.jump_edge = false;
        self.run_key_down = false;
        self.run_key_up = false;
    }
}

/// Reads an [`InputSource`] once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler;

impl InputSampler {
    pub fn new() -> Self {
        Self
    }

    /// Capture the current axes and edges
    pub fn sample(&self, source: &impl InputSource) -> InputSample {
        InputSample {
            horizontal: source.axis_horizontal().clamp(-1.0, 1.0),
            vertical: source.axis_vertical().clamp(-1.0, 1.0),
            jump_edge: source.key_down(InputAction::Jump),
            run_key_down: source.key_down(InputAction::Run),
            run_key_up: source.key_up(InputAction::Run),
        }
    }
}
