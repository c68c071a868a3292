//! # Events Module
//!
//! Model events (what changed), view events (what to repaint), the event bus
//! that carries them, and the small value types they share.

pub mod event_bus;
pub mod model_events;
pub mod types;
pub mod view_events;

pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus, ViewEventHandler};
pub use model_events::ModelEvent;
pub use types::{Focus, Theme};
pub use view_events::ViewEvent;
