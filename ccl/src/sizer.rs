use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::NotNan;
use rand::Rng;
use rand::prelude::SmallRng;

use tagcloud_rs::geometry::primitives::Size;

use crate::io::input::ExtTag;

/// Smallest rendered font height in pixels, for a tag of weight 0.
const MIN_FONT_PX: f64 = 14.0;
/// Additional font height per unit of tag weight.
const PX_PER_WEIGHT: f64 = 1.0;
/// Approximate advance width of a glyph as a fraction of the font height.
const GLYPH_ASPECT: f64 = 0.62;

/// A tag with its bounding box resolved; what gets fed into the layouter.
#[derive(Debug, Clone)]
pub struct SizedTag {
    pub text: String,
    pub weight: f64,
    pub size: Size,
}

/// Approximates the bounding box of `text` rendered at a font size derived
/// from `weight`. A stand-in for real font measurement: the layouter only
/// cares that the mapping is deterministic and the box dimensions positive.
pub fn size_for(text: &str, weight: f64) -> Size {
    let height = (MIN_FONT_PX + weight.max(0.0) * PX_PER_WEIGHT).round() as i32;
    let glyphs = text.chars().count().max(1) as f64;
    let width = (glyphs * height as f64 * GLYPH_ASPECT).round() as i32;
    Size::new(width.max(1), height.max(1))
}

/// Resolves sizes and orders the tags by descending weight, so the heaviest
/// tags claim the positions closest to the center.
pub fn sized_descending(tags: Vec<ExtTag>) -> Vec<SizedTag> {
    tags.into_iter()
        .map(|tag| {
            let size = size_for(&tag.text, tag.weight);
            SizedTag {
                text: tag.text,
                weight: tag.weight,
                size,
            }
        })
        .sorted_by_cached_key(|tag| {
            Reverse(NotNan::new(tag.weight).expect("tag weight must not be NaN"))
        })
        .collect_vec()
}

const DEMO_WORDS: [&str; 24] = [
    "rust", "layout", "spiral", "cloud", "vector", "pixel", "kernel", "cache", "parser", "thread",
    "socket", "buffer", "crate", "module", "trait", "struct", "macro", "borrow", "lifetime",
    "async", "stream", "codec", "arena", "atlas",
];

/// Generates a deterministic-for-a-seed demo tag list when no input file is
/// given.
pub fn demo_tags(n: usize, rng: &mut SmallRng) -> Vec<ExtTag> {
    (0..n)
        .map(|i| ExtTag {
            text: DEMO_WORDS[i % DEMO_WORDS.len()].to_string(),
            weight: rng.random_range(4.0..=96.0),
        })
        .collect_vec()
}
