//! Terminal UI for the Eshtrak client.
//!
//! `render` draws the chrome (title, navigation, status bar) and dispatches
//! to the per-route screens; `input` translates key events into application
//! state changes.

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;
