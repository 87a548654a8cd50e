//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`DisplaySurface`] - Retained region table the shell draws into

pub mod surface;

pub use surface::{BorderKind, DisplaySurface, RegionHandle, RegionSpec, RegionStyle};
