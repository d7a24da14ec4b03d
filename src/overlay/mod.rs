// src/overlay/mod.rs

//! Selection and interaction overlay.
//!
//! Everything here is stateless: the caller owns selection and focus and
//! passes them in on every render.
//!
//! - [`hit`] resolves pointer positions to nodes and dispatches clicks.
//! - [`selection`] derives per-node and per-connector visual state.
//! - [`navigate`] moves keyboard focus between nodes.

pub mod hit;
pub mod navigate;
pub mod selection;

pub use hit::{dispatch_click, hit_test};
pub use navigate::{navigate, NavKey};
pub use selection::{render_state, ConnectorVisual, NodeVisual, RenderModel, StatusCategory};
