#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::shape::Shape;

/// A circle or sphere, depending on the vector type.
///
/// The radius is always non-negative: negative inputs are replaced by their absolute value. For
/// integer scalars, [`Ball::set_diameter`] truncates odd diameters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ball<V, S> {
    pub center: V,
    radius: S,
}

pub type Circle2<S> = Ball<Vector2<S>, S>;
pub type Sphere3<S> = Ball<Vector3<S>, S>;

impl<V: VectorLike<S>, S: Scalar> Ball<V, S> {
    pub fn new(center: V, radius: S) -> Self {
        Self { center, radius: radius.abs() }
    }

    pub fn radius(&self) -> S {
        self.radius
    }
    pub fn diameter(&self) -> S {
        self.radius * S::two()
    }
    pub fn set_radius(&mut self, radius: S) {
        self.radius = radius.abs();
    }
    pub fn set_diameter(&mut self, diameter: S) {
        self.radius = diameter.abs() / S::two();
    }

    /// Inclusive: points exactly on the boundary are inside.
    pub fn contains(&self, point: &V) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

impl<V: VectorLike<S>, S: Scalar> Shape for Ball<V, S> {
    type Vector = V;

    fn is_point_inside(&self, point: &V) -> bool {
        self.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_contains_point() {
        let circle = Circle2::new(Vector2::new(20, 20), 10);
        assert!(circle.is_point_inside(&Vector2::new(16, 22)));
        let circle = Circle2::new(Vector2::new(20, 20), 2);
        assert!(!circle.is_point_inside(&Vector2::new(16, 22)));
    }

    #[test]
    fn boundary_is_inside() {
        let circle = Circle2::new(Vector2::new(0.0, 0.0), 5.0);
        assert!(circle.contains(&Vector2::new(3.0, 4.0)));
        assert!(!circle.contains(&Vector2::new(3.0, 4.001)));
    }

    #[test]
    fn unsigned_center_does_not_underflow() {
        let circle = Circle2::new(Vector2::new(1_u32, 1), 3);
        assert!(circle.contains(&Vector2::new(3, 3)));
        assert!(!circle.contains(&Vector2::new(5, 0)));
    }

    #[test]
    fn sphere_contains_point() {
        let sphere = Sphere3::new(Vector3::new(1.0, 1.0, 1.0), 1.0);
        assert!(sphere.contains(&Vector3::new(1.5, 1.5, 1.5)));
        assert!(!sphere.contains(&Vector3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn radius_is_never_negative() {
        let mut ball = Circle2::new(Vector2::zero(), -4.0);
        assert_eq!(ball.radius(), 4.0);
        assert_eq!(ball.diameter(), 2.0 * ball.radius());

        for value in [-10.0, -0.5, 0.0, 3.25] {
            ball.set_radius(value);
            assert!(ball.radius() >= 0.0);
            assert_eq!(ball.diameter(), 2.0 * ball.radius());

            ball.set_diameter(value);
            assert!(ball.radius() >= 0.0);
            assert_eq!(ball.diameter(), 2.0 * ball.radius());
            assert_eq!(ball.diameter(), value.abs());
        }
    }

    #[test]
    fn integer_diameter_truncates() {
        let mut ball = Sphere3::new(Vector3::splat(0_i32), 1);
        ball.set_diameter(-7);
        assert_eq!(ball.radius(), 3);
        assert_eq!(ball.diameter(), 6);
    }
}
