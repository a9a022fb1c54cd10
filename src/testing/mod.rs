//! Headless testing helpers: Pilot, DOM outlines.
//!
//! Use the [`Pilot`] to drive a gallery inside a host without a browser. Use
//! [`outline`] to capture a rendered subtree as text for snapshot assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::outline;
