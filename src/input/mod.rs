//! Input handling: event types, navigation key state, and the processor
//! that folds raw window events into per-frame camera input.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame accumulated input.
pub mod frame;
/// Navigation actions and the pressed-key bitmask.
pub mod keyboard;
/// Absolute-to-relative cursor tracking.
pub(crate) mod mouse;
/// Converts raw events into [`FrameInput`].
pub mod processor;

pub use event::InputEvent;
pub use frame::FrameInput;
pub use keyboard::{NavAction, NavKeys};
pub use processor::InputProcessor;
