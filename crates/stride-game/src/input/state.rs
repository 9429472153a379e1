//! Keyboard-facing input state: held keys, per-frame edges and key bindings

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Locomotion commands a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Jump,
    /// Run while held
    Run,
}

/// Held actions plus the press/release edges seen since the last
/// [`clear_frame`](Self::clear_frame)
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub held: HashSet<InputAction>,
    pub just_pressed: HashSet<InputAction>,
    pub just_released: HashSet<InputAction>,
    /// Analog stick (x = horizontal, y = vertical), summed with the keys
    pub move_axis: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    /// Records a press edge only when the action was up
    pub fn press(&mut self, action: InputAction) {
        if self.held.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Records a release edge only when the action was down
    pub fn release(&mut self, action: InputAction) {
        if self.held.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// -1, 0 or 1 depending on which of the two opposing actions are held
    pub fn digital_axis(&self, negative: InputAction, positive: InputAction) -> f32 {
        f32::from(i8::from(self.is_held(positive)) - i8::from(self.is_held(negative)))
    }

    /// Drop this frame's edges; held actions persist
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

/// Physical input that can trigger an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    Key(KeyCode),
}

/// Key map with a reverse index so rebinding UIs can list an action's keys
#[derive(Debug, Clone)]
pub struct InputBindings {
    by_binding: HashMap<InputBinding, InputAction>,
    by_action: HashMap<InputAction, Vec<InputBinding>>,
}

impl Default for InputBindings {
    /// WASD plus arrow keys, Space to jump, either Shift to run
    fn default() -> Self {
        use InputAction::*;

        let mut map = Self {
            by_binding: HashMap::new(),
            by_action: HashMap::new(),
        };
        for (key, action) in [
            (KeyCode::KeyW, MoveForward),
            (KeyCode::KeyS, MoveBackward),
            (KeyCode::KeyA, MoveLeft),
            (KeyCode::KeyD, MoveRight),
            (KeyCode::ArrowUp, MoveForward),
            (KeyCode::ArrowDown, MoveBackward),
            (KeyCode::ArrowLeft, MoveLeft),
            (KeyCode::ArrowRight, MoveRight),
            (KeyCode::Space, Jump),
            (KeyCode::ShiftLeft, Run),
            (KeyCode::ShiftRight, Run),
        ] {
            map.bind(key, action);
        }
        map
    }
}

impl InputBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` to `action`, replacing whatever it was bound to before
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        let binding = InputBinding::Key(key);
        if let Some(previous) = self.by_binding.insert(binding, action) {
            self.forget(previous, binding);
        }
        self.by_action.entry(action).or_default().push(binding);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        let binding = InputBinding::Key(key);
        if let Some(action) = self.by_binding.remove(&binding) {
            self.forget(action, binding);
        }
    }

    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.by_binding.get(&InputBinding::Key(key)).copied()
    }

    pub fn bindings_for(&self, action: InputAction) -> &[InputBinding] {
        self.by_action.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    fn forget(&mut self, action: InputAction, binding: InputBinding) {
        if let Some(list) = self.by_action.get_mut(&action) {
            list.retain(|b| *b != binding);
        }
    }
}

/// Turns raw winit key events into [`InputState`] through [`InputBindings`]
#[derive(Debug, Default)]
pub struct InputHandler {
    pub state: InputState,
    pub bindings: InputBindings,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unbound and unidentified keys are ignored
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        let PhysicalKey::Code(code) = physical_key else {
            return;
        };
        let Some(action) = self.bindings.get_key_action(code) else {
            return;
        };

        if element_state.is_pressed() {
            self.state.press(action);
        } else {
            self.state.release(action);
        }
    }

    /// Analog movement from a gamepad stick or similar
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.state.move_axis = axis;
    }

    /// Call once the frame's input has been consumed
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }
}
