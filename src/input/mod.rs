//! Input handling: event types, cursor tracking, and the processor that
//! converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Serializable key actions for binding presets.
pub mod keyboard;
/// Cursor-to-look-delta tracking.
pub(crate) mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
