//! WebView bridge for embedding web pages in canvas items.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances per canvas item and UI panel
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Navigation control (URL load, reload)
//! - Event handling (page load, title change)
//! - Suppression of the engine's native context menu, forwarding
//!   right-clicks to the host instead

pub mod events;
pub mod ipc;
pub mod manager;

pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
