//! User interface layer.
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → text output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable list state
//! - [`renderer`]: Plain-text renderer used by the bundled binary

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{EmptyState, ErrorBanner, UIViewModel};
