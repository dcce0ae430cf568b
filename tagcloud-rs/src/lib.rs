//! A layout engine for circular tag clouds.
//!
//! Rectangles (tag bounding boxes) are placed one at a time around a common
//! center by walking a [`curves::Curve`] outward from the origin and accepting
//! the first position where the candidate does not overlap any previously
//! placed rectangle. A post-acceptance compaction pass then slides the
//! rectangle back toward the origin as far as the collision predicate allows.
//!
//! The placement is greedy and deterministic: it does not attempt a globally
//! optimal (minimum-area) packing, and rectangles can neither be removed nor
//! resized once placed.

/// The layouter: placement search, compaction and their configuration.
pub mod cloud;

/// The [`curves::Curve`] abstraction and its concrete implementations.
pub mod curves;

/// Geometric primitives and the collision seam.
pub mod geometry;
