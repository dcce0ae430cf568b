mod geo_traits;

pub mod primitives;

#[doc(inline)]
pub use geo_traits::CollidesWith;
