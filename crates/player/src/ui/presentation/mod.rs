//! Presentation layer - Dioxus UI components and view state

pub mod components;
pub mod keyboard;
pub mod state;
