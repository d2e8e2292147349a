//! # Frames, containers and interaction
//!
//! redraw is an immediate-mode engine: the application redeclares its whole
//! UI every frame as plain function calls, and the engine keeps only a small
//! amount of identity-keyed state between frames.
//!
//! - [`Engine`]: owns input, hover/press ownership and retained containers.
//! - [`Ui`]: the per-frame declaration handle.
//! - [`Frame`]: the finished command buffer plus its clip ranges.
//!
//! ```rust
//! use redraw_core::*;
//!
//! let mut engine = Engine::default();
//! engine.set_pointer(vec2(50.0, 30.0));
//!
//! let frame = engine.run_frame(Size::new(800.0, 600.0), |ui, _size| {
//!     ui.push_container("panel", vec2(10.0, 10.0), vec2(210.0, 410.0));
//!     let origin = ui.element_origin();
//!     let state = ui.button_behavior(
//!         "ok",
//!         origin + vec2(20.0, 10.0),
//!         origin + vec2(120.0, 40.0),
//!     );
//!     assert!(state.hovered);
//!     ui.scrollbar(1200.0);
//!     ui.pop_container();
//! });
//!
//! // root, panel, root again
//! assert_eq!(frame.ranges.len(), 3);
//! ```
//!
//! ## Retention
//!
//! Containers are looked up by identity every time they are pushed. Their
//! bounds come from the current declaration; scroll position and drag offset
//! persist. Records are kept for the lifetime of the engine unless
//! [`RetentionConfig::evict_after_frames`] is set.
//!
//! ## Re-running frames
//!
//! Some interactions change state after part of the frame was already
//! declared (a scrollbar drag, a click handler mutating application data). The
//! frame then reports `wants_another_frame`, and the host runs the
//! declaration again before presenting.

pub mod color;
pub mod command;
pub mod command_list;
pub mod config;
pub mod container;
pub mod context;
pub mod engine;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod id;
pub mod input;
pub mod interaction;
pub mod prelude;
pub mod render_api;
pub mod scrollbar;

pub use color::*;
pub use command::*;
pub use command_list::{CommandList, CommandRange};
pub use config::*;
pub use container::{Container, ContainerKey, ContainerStore};
pub use context::Ui;
pub use engine::Engine;
pub use error::{Error, Result};
pub use frame::Frame;
pub use geometry::*;
pub use id::ItemId;
pub use input::*;
pub use interaction::Interaction;
pub use render_api::*;
pub use scrollbar::{ThumbGeometry, thumb_geometry};
