//! **knight-core**: geometry primitives shared by the knightpath crates.
//!
//! [`Point`] is an integer grid coordinate and [`Range`] a half-open
//! rectangle, used both for the playing board and for bounded search windows.

pub mod geom;

pub use geom::{Point, Range};
