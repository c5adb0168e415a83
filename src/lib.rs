//! Core logic for the campus election management demo: the session and
//! role-based access model, the candidacy request workflow, election
//! management with live tallies, and the seed dataset the UI renders.
//!
//! The crate is deliberately presentation-free. The UI layer owns a
//! [`Workspace`], drives it in response to user actions, and renders the
//! values and errors it gets back.

pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod workspace;

pub use config::Config;
pub use error::{Error, Result};
pub use workspace::Workspace;
