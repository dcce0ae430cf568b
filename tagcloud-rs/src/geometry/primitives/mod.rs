mod point;
mod rect;
mod size;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use size::Size;
