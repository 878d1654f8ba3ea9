#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::shape::Shape;
use std::marker::PhantomData;

/// An axis-aligned rectangle or cuboid, depending on the vector type, stored as a center and a
/// component-wise non-negative half extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxShape<V, S> {
    pub center: V,
    half_extent: V,
    scalar: PhantomData<S>,
}

pub type Rect2<S> = BoxShape<Vector2<S>, S>;
pub type Cuboid3<S> = BoxShape<Vector3<S>, S>;

impl<V: VectorLike<S>, S: Scalar> BoxShape<V, S> {
    pub fn new(center: V, half_extent: V) -> Self {
        Self {
            center,
            half_extent: half_extent.absolute(),
            scalar: PhantomData,
        }
    }
    pub fn from_extent(center: V, extent: V) -> Self {
        let mut rv = Self::new(center, V::default());
        rv.set_extent(extent);
        rv
    }

    pub fn half_extent(&self) -> V {
        self.half_extent
    }
    pub fn extent(&self) -> V {
        self.half_extent * S::two()
    }
    pub fn set_half_extent(&mut self, half_extent: V) {
        self.half_extent = half_extent.absolute();
    }
    pub fn set_extent(&mut self, extent: V) {
        self.half_extent = extent.absolute() / S::two();
    }

    /// Exclusive: a point is inside only if it is strictly within the half extent on every axis.
    pub fn contains(&self, point: &V) -> bool {
        self.center
            .abs_delta(point)
            .components()
            .zip(self.half_extent.components())
            .all(|(delta, half)| delta < half)
    }
}

impl<V: VectorLike<S>, S: Scalar> Shape for BoxShape<V, S> {
    type Vector = V;

    fn is_point_inside(&self, point: &V) -> bool {
        self.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_point() {
        let rect = Rect2::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0));
        assert!(rect.contains(&Vector2::new(1.5, -0.5)));
        assert!(!rect.contains(&Vector2::new(2.5, 0.0)));
        assert!(!rect.contains(&Vector2::new(0.0, -1.5)));
    }

    #[test]
    fn boundary_is_outside() {
        let rect = Rect2::new(Vector2::new(10, 10), Vector2::new(5, 5));
        assert!(rect.is_point_inside(&Vector2::new(14, 6)));
        assert!(!rect.is_point_inside(&Vector2::new(15, 10)));
        assert!(!rect.is_point_inside(&Vector2::new(10, 5)));
    }

    #[test]
    fn cuboid_checks_every_axis() {
        let cuboid = Cuboid3::from_extent(Vector3::new(0_u32, 0, 0), Vector3::new(4, 4, 2));
        assert!(cuboid.contains(&Vector3::new(1, 1, 0)));
        assert!(!cuboid.contains(&Vector3::new(1, 1, 1)));
        assert!(!cuboid.contains(&Vector3::new(3, 0, 0)));
    }

    #[test]
    fn half_extent_is_never_negative() {
        let mut rect = Rect2::new(Vector2::zero(), Vector2::new(-1.0, 2.0));
        assert_eq!(rect.half_extent(), Vector2::new(1.0, 2.0));
        assert_eq!(rect.extent(), rect.half_extent() * 2.0);

        for value in [Vector2::new(-4.0, -0.5), Vector2::new(3.0, -6.0), Vector2::zero()] {
            rect.set_half_extent(value);
            assert!(rect.half_extent().x >= 0.0 && rect.half_extent().y >= 0.0);
            assert_eq!(rect.extent(), rect.half_extent() * 2.0);

            rect.set_extent(value);
            assert!(rect.half_extent().x >= 0.0 && rect.half_extent().y >= 0.0);
            assert_eq!(rect.extent(), rect.half_extent() * 2.0);
            assert_eq!(rect.extent(), value.absolute());
        }
    }

    #[test]
    fn from_extent_halves() {
        let cuboid = Cuboid3::from_extent(Vector3::splat(1.0), Vector3::new(2.0, -4.0, 6.0));
        assert_eq!(cuboid.half_extent(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(cuboid.center, Vector3::splat(1.0));
    }
}
