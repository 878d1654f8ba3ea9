//! Generic 2D/3D vectors, ball/box/polygon primitives and point containment tests, with small
//! helpers for length units, bounded random numbers and vector formatting.

pub mod core;
pub mod util;
