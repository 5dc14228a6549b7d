//! Navigation shell
//!
//! This module holds the UI-agnostic state of a browsing session. Frontends
//! translate user input into [`Intent`]s, hand them to
//! [`GallerySession::dispatch`], and render whatever the session reports
//! through its views. Nothing here performs I/O.
//!
//! # Architecture
//!
//! - `intent`: screens, intents and the transitions they produce
//! - `session`: the state machine consuming intents
//! - `view`: read-only views for renderers (gallery, detail, sidebar)
//! - `pacing`: the loading phase run between screens

pub mod error;
pub mod intent;
pub mod pacing;
pub mod session;
pub mod view;

pub use error::NavError;
pub use intent::{Intent, Screen, Transition};
pub use pacing::{DelayPacer, NoPacing, Pacer};
pub use session::{GalleryContext, GallerySession};
pub use view::{DetailView, GalleryView, ResultSummary, Sidebar, SidebarFolder};
