use serde::{Deserialize, Serialize};

/// Configuration of the placement search.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LayouterConfig {
    /// Angular increment (radians) of the curve walk. Smaller steps pack
    /// tighter but search longer.
    pub angle_step: f64,
    /// Linear increment (pixels) of the post-acceptance slide toward the
    /// origin.
    pub compaction_step: f64,
}

impl Default for LayouterConfig {
    fn default() -> Self {
        LayouterConfig {
            angle_step: 0.01,
            compaction_step: 1.0,
        }
    }
}
