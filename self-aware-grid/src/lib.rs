//! Positional self-awareness for the children of a grid container.
//!
//! For adapter-level utilities (an in-memory host, keyboard navigation), see the
//! `self-aware-grid-adapter` crate.
//!
//! Given a container laid out as a grid of uniform-width tiles, this crate infers the row/column
//! topology from measured geometry, answers edge and neighbor queries (for spreadsheet-like
//! keyboard traversal or edge-aware styling), and labels children with position classes.
//!
//! It is UI-agnostic. A host layer is expected to provide (see [`GridHost`]):
//! - the container's children and rendered widths
//! - the container's gap style
//! - a labeling surface (class lists)
//! - subtree/resize notifications, delivered to [`SelfAwareGrid::handle_notification`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod css;
mod error;
mod grid;
mod host;
mod labels;
mod options;
mod topology;
mod types;


pub use error::SelfAwareGridError;
pub use grid::SelfAwareGrid;
pub use host::GridHost;
pub use labels::ClassNames;
pub use options::{DEFAULT_CLASS_PREFIX, SelfAwareGridOptions};
pub use types::{
    ABSENT, EdgeFlags, GapProperty, GridIndex, GridPosition, GridTopology, Notification,
};
