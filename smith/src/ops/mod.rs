//! Core operations.
//!
//! This module contains the business logic for smith commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod build;
pub mod check;
pub mod list;
pub mod render;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use list::list;
pub use render::{RenderRequest, render};
