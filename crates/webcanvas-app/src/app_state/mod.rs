//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the canvas scene, webview lifecycle,
//! and mouse interaction.

mod context_menu;
mod core;
mod dispatch;
mod drag;
mod event_handler;
mod refresh;
mod settings_dialog;
mod url_bar;
mod webview_bridge;

pub use core::CanvasApp;
