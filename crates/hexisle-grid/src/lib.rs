//! Hexagonal tile grid: axial coordinates, the offset hex-to-world transform,
//! and the circular island boundary test.
//!
//! Tiles are addressed by integer `(i, j)` pairs in offset-coordinate space and
//! mapped to planar world positions by [`HexLayout`]. The layout is pure data;
//! every operation is a deterministic function of its inputs.

mod axial;
mod layout;

pub use axial::AxialCoord;
pub use layout::{H_SPACING, HexLayout, V_SPACING};
