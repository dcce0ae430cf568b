use serde::{Deserialize, Serialize};

/// Requested dimensions of a rectangle to be placed.
///
/// Carries no validity guarantee of its own; the layouter rejects
/// non-positive dimensions at its boundary.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}
