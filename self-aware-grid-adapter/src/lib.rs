//! Adapter utilities for the `self-aware-grid` crate.
//!
//! The `self-aware-grid` crate is UI-agnostic and focuses on topology inference and labeling.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - [`MemoryGrid`], an in-memory container implementing `GridHost`
//! - [`Navigator`], spreadsheet-style arrow-key traversal
//!
//! This crate is intentionally framework-agnostic (no DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod memory;
mod navigator;


pub use memory::{ChildId, MemoryChild, MemoryGrid};
pub use navigator::{Direction, Navigator, NavigatorOptions};
