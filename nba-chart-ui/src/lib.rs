//! Shared Dioxus components and D3.js bridge for the shot analysis dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (card, selectors, panels, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
