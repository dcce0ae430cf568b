use serde::{Deserialize, Serialize};

use tagcloud_rs::cloud::LayouterConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the circular cloud reference implementation
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CCLConfig {
    /// Configuration of the placement search
    pub layouter: LayouterConfig,
    /// Start radius of the Archimedean spiral the layouter walks
    pub spiral_start_radius: f64,
    /// Radius growth per radian of the Archimedean spiral
    pub spiral_extend_ratio: f64,
    /// Seed for the PRNG used by the demo tag generator. If undefined, demo tags are generated from entropy
    pub prng_seed: Option<u64>,
    /// Number of tags the demo generator produces when no input file is given
    pub n_demo_tags: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for CCLConfig {
    fn default() -> Self {
        Self {
            layouter: LayouterConfig::default(),
            spiral_start_radius: 0.0,
            spiral_extend_ratio: 8.0,
            prng_seed: Some(0),
            n_demo_tags: 30,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
