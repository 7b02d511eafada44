//! Frame view: button actions, display messages and rendering.

pub mod action;
pub mod message;
pub mod render;

pub use action::Action;
pub use message::dispatch;
