mod config;
mod layouter;

#[doc(inline)]
pub use config::LayouterConfig;
#[doc(inline)]
pub use layouter::CircularCloudLayouter;
