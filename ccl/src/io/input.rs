use serde::{Deserialize, Serialize};

/// External JSON representation of a tag list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtTagList {
    /// Name of the cloud, used for output file naming and the SVG title
    pub name: String,
    pub tags: Vec<ExtTag>,
}

/// A single tag: text plus a relative weight that drives its box size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtTag {
    pub text: String,
    pub weight: f64,
}
