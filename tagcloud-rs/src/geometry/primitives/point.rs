use serde::{Deserialize, Serialize};

/// Integer offset from the origin `(0, 0)`, the visual center of the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
pub struct Point(pub i32, pub i32);

impl Point {
    pub fn distance(&self, other: Point) -> f64 {
        f64::hypot((self.0 - other.0) as f64, (self.1 - other.1) as f64)
    }
}
