use serde::Serialize;

use tagcloud_rs::geometry::primitives::Rect;

use crate::config::CCLConfig;

/// JSON output document bundling the config a cloud was produced with and
/// the placed tags, in placement order.
#[derive(Debug, Serialize)]
pub struct CloudOutput {
    pub name: String,
    pub config: CCLConfig,
    pub placed_tags: Vec<PlacedTag>,
    /// Smallest axis-aligned rectangle containing the whole cloud
    pub extent: Rect,
}

#[derive(Debug, Serialize)]
pub struct PlacedTag {
    pub text: String,
    pub weight: f64,
    pub rect: Rect,
}
