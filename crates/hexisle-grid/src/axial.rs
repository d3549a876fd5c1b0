//! Integer tile addresses in offset-coordinate space.

/// Address of one hex tile in grid-index space.
///
/// Carries no identity beyond its coordinates; two equal `AxialCoord`s name
/// the same tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxialCoord {
    /// Column index.
    pub i: i32,
    /// Row index. Odd rows are shifted half a tile horizontally by the layout.
    pub j: i32,
}

impl AxialCoord {
    /// Creates a coordinate from column and row indices.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Returns `true` if this tile sits on an odd (horizontally shifted) row.
    ///
    /// Uses Euclidean remainder so negative rows shift the same way as
    /// positive ones.
    pub const fn odd_row(&self) -> bool {
        self.j.rem_euclid(2) == 1
    }
}

impl From<(i32, i32)> for AxialCoord {
    fn from((i, j): (i32, i32)) -> Self {
        Self { i, j }
    }
}
