//! Interactive controller for live curlicue rendering.
//!
//! This module provides the application layer for interactive exploration,
//! reacting to parameter changes and dispatching results to the presentation
//! layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `on_*_changed` notifications from parameter widgets
//! - **Output**: `InteractiveControllerPresenterPort` for receiving frames
//! - **Core**: Uses domain actions from `core/` for actual computation
//!
//! Every notification triggers one synchronous regeneration on the calling
//! thread; there is no background work and nothing to cancel.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
