//! Input system with action-based mapping
//!
//! Translates raw winit events into camera actions. Platform key codes stop
//! here: the camera only ever sees [`MovementAxes`] and [`CameraEvent`]s.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::CameraEvent;

/// Pixels per scroll line for high-precision (touchpad) scrolling
const PIXELS_PER_LINE: f32 = 120.0;

/// One of the four camera movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementAxis {
    Forward,
    Back,
    Left,
    Right,
}

impl MovementAxis {
    pub const ALL: [MovementAxis; 4] = [
        MovementAxis::Forward,
        MovementAxis::Back,
        MovementAxis::Left,
        MovementAxis::Right,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of held movement axes, stored as a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovementAxes(u8);

impl MovementAxes {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, axis: MovementAxis) {
        self.0 |= axis.bit();
    }

    pub fn remove(&mut self, axis: MovementAxis) {
        self.0 &= !axis.bit();
    }

    pub const fn contains(self, axis: MovementAxis) -> bool {
        self.0 & axis.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Held axes in declaration order
    pub fn iter(self) -> impl Iterator<Item = MovementAxis> {
        MovementAxis::ALL
            .into_iter()
            .filter(move |axis| self.contains(*axis))
    }
}

impl From<MovementAxis> for MovementAxes {
    fn from(axis: MovementAxis) -> Self {
        Self(axis.bit())
    }
}

impl FromIterator<MovementAxis> for MovementAxes {
    fn from_iter<I: IntoIterator<Item = MovementAxis>>(iter: I) -> Self {
        let mut axes = Self::empty();
        for axis in iter {
            axes.insert(axis);
        }
        axes
    }
}

/// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move along an axis (WASD / arrows by default)
    Move(MovementAxis),
    /// Mouse look while held (left mouse button by default)
    Look,
    /// Quit the viewer (Escape by default)
    Quit,
}

/// Current state of held inputs
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Movement axes currently held
    pub held: MovementAxes,
    /// Whether the look button is held
    pub look_held: bool,
    /// Quit was requested
    pub quit_requested: bool,
    /// Keys and buttons physically down
    pressed: HashSet<InputBinding>,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Release everything that is held
    pub fn clear_held(&mut self) {
        self.held.clear();
        self.look_held = false;
        self.pressed.clear();
    }
}

/// Binding of a physical key or button to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// Keyboard key
    Key(KeyCode),
    /// Mouse button
    Mouse(MouseButton),
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for InputBinding {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Maps physical inputs to actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<InputBinding, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        bindings.bind(KeyCode::KeyW, InputAction::Move(MovementAxis::Forward));
        bindings.bind(KeyCode::KeyS, InputAction::Move(MovementAxis::Back));
        bindings.bind(KeyCode::KeyA, InputAction::Move(MovementAxis::Left));
        bindings.bind(KeyCode::KeyD, InputAction::Move(MovementAxis::Right));

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::Move(MovementAxis::Forward));
        bindings.bind(KeyCode::ArrowDown, InputAction::Move(MovementAxis::Back));
        bindings.bind(KeyCode::ArrowLeft, InputAction::Move(MovementAxis::Left));
        bindings.bind(KeyCode::ArrowRight, InputAction::Move(MovementAxis::Right));

        bindings.bind(KeyCode::Escape, InputAction::Quit);
        bindings.bind_mouse(MouseButton::Left, InputAction::Look);

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(InputBinding::Key(key), action);
    }

    /// Bind a mouse button to an action
    pub fn bind_mouse(&mut self, button: MouseButton, action: InputAction) {
        self.bindings.insert(InputBinding::Mouse(button), action);
    }

    /// Unbind a key or button
    pub fn unbind(&mut self, binding: impl Into<InputBinding>) {
        self.bindings.remove(&binding.into());
    }

    /// Get the action for a binding, if any
    pub fn get_action(&self, binding: &InputBinding) -> Option<InputAction> {
        self.bindings.get(binding).copied()
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.get_action(&InputBinding::Key(key))
    }

    /// All bindings that trigger `action`
    pub fn bindings_for(&self, action: InputAction) -> Vec<InputBinding> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(binding, _)| *binding)
            .collect()
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input handler with custom bindings
    pub fn with_bindings(bindings: InputBindings) -> Self {
        Self {
            state: InputState::new(),
            bindings,
        }
    }

    /// Dispatch a window event. Returns the camera event it produced, if any.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<CameraEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard(event.physical_key, event.state)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state)
            }
            WindowEvent::CursorMoved { position, .. } => Some(CameraEvent::CursorMoved(
                Vec2::new(position.x as f32, position.y as f32),
            )),
            WindowEvent::MouseWheel { delta, .. } => self.handle_scroll(*delta),
            WindowEvent::Focused(false) => {
                debug!("Window lost focus, releasing held input");
                let was_looking = self.state.look_held;
                self.state.clear_held();
                was_looking.then_some(CameraEvent::LookReleased)
            }
            _ => None,
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(
        &mut self,
        physical_key: PhysicalKey,
        element_state: ElementState,
    ) -> Option<CameraEvent> {
        let PhysicalKey::Code(key_code) = physical_key else {
            return None;
        };
        self.handle_binding(InputBinding::Key(key_code), element_state)
    }

    /// Handle a mouse button event
    pub fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        element_state: ElementState,
    ) -> Option<CameraEvent> {
        self.handle_binding(InputBinding::Mouse(button), element_state)
    }

    /// Handle scroll wheel
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) -> Option<CameraEvent> {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
        (scroll != 0.0).then_some(CameraEvent::Scrolled(scroll))
    }

    fn handle_binding(
        &mut self,
        binding: InputBinding,
        element_state: ElementState,
    ) -> Option<CameraEvent> {
        let pressed = element_state == ElementState::Pressed;
        if pressed {
            self.state.pressed.insert(binding);
        } else {
            self.state.pressed.remove(&binding);
        }
        let action = self.bindings.get_action(&binding)?;
        self.apply_action(action, pressed)
    }

    /// Whether any binding for `action` is still down
    fn is_action_held(&self, action: InputAction) -> bool {
        self.bindings
            .bindings_for(action)
            .iter()
            .any(|binding| self.state.pressed.contains(binding))
    }

    fn apply_action(&mut self, action: InputAction, pressed: bool) -> Option<CameraEvent> {
        match action {
            InputAction::Move(axis) => {
                if self.is_action_held(action) {
                    self.state.held.insert(axis);
                } else {
                    self.state.held.remove(axis);
                }
                None
            }
            InputAction::Look => {
                let held = self.is_action_held(action);
                if held == self.state.look_held {
                    return None;
                }
                self.state.look_held = held;
                Some(if held {
                    CameraEvent::LookPressed
                } else {
                    CameraEvent::LookReleased
                })
            }
            InputAction::Quit => {
                if pressed {
                    self.state.quit_requested = true;
                }
                None
            }
        }
    }
}
