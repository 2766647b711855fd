pub mod actions;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, WebCanvasError};
pub use events::{Event, EventBus};
pub use types::{PageId, Point, Rect};

pub type Result<T> = std::result::Result<T, WebCanvasError>;
