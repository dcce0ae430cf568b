/// Trait for types that can detect collisions between `Self` and `T`.
///
/// What counts as a collision is up to the implementation; the layouter relies
/// on [`Rect`](crate::geometry::primitives::Rect)'s open-interval semantics,
/// where shapes sharing only a boundary do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
