//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (held movement
//! keys, the mouse-look tracker, modifier keys) and the key-binding
//! map.  It is the only thing that sits between raw window events and
//! [`CameraRig::execute`](crate::camera::rig::CameraRig::execute).

use crate::command::{CameraCommand, MovementAxes};
use crate::input::event::{InputEvent, MouseButton};
use crate::input::keyboard::KeyAction;
use crate::input::mouse::MouseLook;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`CameraCommand`]s.
///
/// Discrete commands (reset, mouse-look toggles, zoom, look deltas) come
/// back from [`handle_event`](Self::handle_event) and
/// [`handle_key`](Self::handle_key); continuous movement is reported as
/// [`movement_axes`](Self::movement_axes) and integrated once per frame
/// by the rig.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = processor.handle_event(event) {
///     rig.execute(cmd);
/// }
///
/// // Key strings use the winit::keyboard::KeyCode debug format:
/// if let Some(cmd) = processor.handle_key("KeyW", pressed) {
///     rig.execute(cmd);
/// }
///
/// // Once per frame:
/// rig.frame(processor.movement_axes(), delta_time);
/// ```
pub struct InputProcessor {
    /// Cursor tracking and first-sample suppression.
    look: MouseLook,
    /// Held movement keys and the sprint modifier.
    axes: MovementAxes,
    /// Whether cursor motion currently produces look commands.
    mouse_look: bool,
    /// Key string → action mapping.
    bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            look: MouseLook::new(),
            axes: MovementAxes::default(),
            mouse_look: false,
            bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_bindings(mut bindings: KeybindingOptions) -> Self {
        bindings.rebuild_reverse_map();
        Self {
            bindings,
            ..Self::new()
        }
    }

    /// Currently held movement axes, for the per-frame movement path.
    #[must_use]
    pub fn movement_axes(&self) -> MovementAxes {
        self.axes
    }

    /// Whether mouse-look is currently engaged.
    #[must_use]
    pub fn mouse_look(&self) -> bool {
        self.mouse_look
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.bindings
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.axes.sprint = shift;
                None
            }
            InputEvent::FocusLost => self.handle_focus_lost(),
        }
    }

    /// Look up a key transition and return the corresponding command,
    /// if any.
    ///
    /// `key` uses the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
    /// `"Tab"`, `"Escape"`, etc. Movement actions update the held axes
    /// and produce no command; OS key-repeat presses are harmless
    /// because they re-set an already-set flag.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<CameraCommand> {
        match self.bindings.lookup(key)? {
            KeyAction::MoveForward => {
                self.axes.forward = pressed;
                None
            }
            KeyAction::MoveBackward => {
                self.axes.backward = pressed;
                None
            }
            KeyAction::StrafeLeft => {
                self.axes.left = pressed;
                None
            }
            KeyAction::StrafeRight => {
                self.axes.right = pressed;
                None
            }
            KeyAction::ResetCamera => {
                pressed.then_some(CameraCommand::ResetCamera)
            }
            KeyAction::ToggleMouseLook => {
                pressed.then(|| self.set_mouse_look(!self.mouse_look))
            }
        }
    }

    /// Cursor moved — track the delta, emit a look command while
    /// mouse-look is engaged.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<CameraCommand> {
        let delta = self.look.sample(x, y);

        if self.mouse_look && delta != glam::Vec2::ZERO {
            return Some(CameraCommand::Look { delta });
        }

        None
    }

    /// Left press engages mouse-look when it is off; everything else is
    /// ignored.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if button == MouseButton::Left && pressed && !self.mouse_look {
            return Some(self.set_mouse_look(true));
        }
        None
    }

    /// Focus loss drops held keys and disengages mouse-look.
    fn handle_focus_lost(&mut self) -> Option<CameraCommand> {
        self.axes = MovementAxes::default();
        if self.mouse_look {
            return Some(self.set_mouse_look(false));
        }
        self.look.reset();
        None
    }

    /// Flip mouse-look, re-anchor the cursor, and build the state
    /// command for the rig and windowing collaborator.
    fn set_mouse_look(&mut self, active: bool) -> CameraCommand {
        self.mouse_look = active;
        self.look.reset();
        CameraCommand::SetMouseLook { active }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn engaged() -> InputProcessor {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        processor
    }

    #[test]
    fn movement_keys_drive_axes() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_key("KeyW", true), None);
        assert_eq!(processor.handle_key("KeyD", true), None);
        let axes = processor.movement_axes();
        assert!(axes.forward && axes.right);
        assert!(!axes.backward && !axes.left);

        assert_eq!(processor.handle_key("KeyW", false), None);
        assert!(!processor.movement_axes().forward);
        assert!(processor.movement_axes().right);
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_key("KeyZ", true), None);
    }

    #[test]
    fn shift_modifier_marks_sprint() {
        let mut processor = InputProcessor::new();
        let _ = processor
            .handle_event(InputEvent::ModifiersChanged { shift: true });
        assert!(processor.movement_axes().sprint);
    }

    #[test]
    fn cursor_motion_without_mouse_look_is_silent() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
        assert_eq!(
            processor
                .handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 }),
            None
        );
    }

    #[test]
    fn click_engages_mouse_look_then_motion_looks() {
        let mut processor = engaged();
        assert!(processor.mouse_look());

        // Anchoring sample produces no command
        assert_eq!(
            processor
                .handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 }),
            None
        );
        // Subsequent motion does (screen-down = pitch-down)
        assert_eq!(
            processor
                .handle_event(InputEvent::CursorMoved { x: 110.0, y: 104.0 }),
            Some(CameraCommand::Look {
                delta: Vec2::new(10.0, -4.0)
            })
        );
    }

    #[test]
    fn click_while_engaged_does_nothing() {
        let mut processor = engaged();
        assert_eq!(
            processor.handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            }),
            None
        );
    }

    #[test]
    fn scroll_zooms_regardless_of_mouse_look() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(CameraCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn toggle_key_flips_mouse_look() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key("Tab", true),
            Some(CameraCommand::SetMouseLook { active: true })
        );
        assert_eq!(processor.handle_key("Tab", false), None);
        assert_eq!(
            processor.handle_key("Tab", true),
            Some(CameraCommand::SetMouseLook { active: false })
        );
    }

    #[test]
    fn reset_key_fires_on_press_only() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key("KeyR", true),
            Some(CameraCommand::ResetCamera)
        );
        assert_eq!(processor.handle_key("KeyR", false), None);
    }

    #[test]
    fn focus_loss_clears_everything() {
        let mut processor = engaged();
        let _ = processor.handle_key("KeyW", true);

        assert_eq!(
            processor.handle_event(InputEvent::FocusLost),
            Some(CameraCommand::SetMouseLook { active: false })
        );
        assert!(!processor.mouse_look());
        assert!(!processor.movement_axes().any());
    }

    #[test]
    fn mouse_look_reanchors_after_toggle() {
        let mut processor = engaged();
        let _ = processor
            .handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });

        // Disengage and re-engage; the old anchor must not leak through
        let _ = processor.handle_key("Tab", true);
        let _ = processor.handle_key("Tab", true);
        assert_eq!(
            processor
                .handle_event(InputEvent::CursorMoved { x: 500.0, y: 500.0 }),
            None
        );
    }
}
