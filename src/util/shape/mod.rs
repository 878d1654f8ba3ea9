mod ball;
mod box_shape;
mod polygon;

pub use ball::{Ball, Circle2, Sphere3};
pub use box_shape::{BoxShape, Cuboid3, Rect2};
pub use polygon::Polygon2;

#[allow(unused_imports)]
use crate::core::prelude::*;

/// A region that can answer whether a point lies inside it.
///
/// Containment rules differ per shape: [`Ball`] includes its boundary, [`BoxShape`] excludes it,
/// and [`Polygon2`] leaves boundary points unspecified.
pub trait Shape {
    type Vector;

    fn is_point_inside(&self, point: &Self::Vector) -> bool;
}

/// ```
/// use qmaths::core::prelude::*;
///
/// let circle = Circle2::new(Vector2::new(20, 20), 10);
/// assert!(is_point_inside(&circle, &Vector2::new(16, 22)));
/// ```
pub fn is_point_inside<T: Shape>(shape: &T, point: &T::Vector) -> bool {
    shape.is_point_inside(point)
}

/// Any of the 2D shapes, for when the concrete kind is only known at runtime.
#[derive(Clone, Debug)]
pub enum GenericShape2<S> {
    Circle(Circle2<S>),
    Rect(Rect2<S>),
    Polygon(Polygon2<S>),
}

impl<S: Scalar> Shape for GenericShape2<S> {
    type Vector = Vector2<S>;

    fn is_point_inside(&self, point: &Vector2<S>) -> bool {
        match self {
            GenericShape2::Circle(circle) => circle.is_point_inside(point),
            GenericShape2::Rect(rect) => rect.is_point_inside(point),
            GenericShape2::Polygon(polygon) => polygon.is_point_inside(point),
        }
    }
}

impl<S: Scalar> From<Circle2<S>> for GenericShape2<S> {
    fn from(value: Circle2<S>) -> Self {
        GenericShape2::Circle(value)
    }
}
impl<S: Scalar> From<Rect2<S>> for GenericShape2<S> {
    fn from(value: Rect2<S>) -> Self {
        GenericShape2::Rect(value)
    }
}
impl<S: Scalar> From<Polygon2<S>> for GenericShape2<S> {
    fn from(value: Polygon2<S>) -> Self {
        GenericShape2::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_dispatches_on_shape() {
        let point = Vector2::new(16.0, 22.0);
        assert!(is_point_inside(&Circle2::new(Vector2::new(20.0, 20.0), 10.0), &point));
        assert!(!is_point_inside(&Circle2::new(Vector2::new(20.0, 20.0), 2.0), &point));
        assert!(is_point_inside(&Rect2::new(Vector2::new(15.0, 20.0), Vector2::splat(3.0)), &point));
        assert!(is_point_inside(&Polygon2::square(30.0, false), &point));
        assert!(is_point_inside(
            &Sphere3::new(Vector3::splat(0), 2),
            &Vector3::new(1, 1, 1)
        ));
        assert!(!is_point_inside(
            &Cuboid3::new(Vector3::splat(0), Vector3::splat(1)),
            &Vector3::new(0, 0, 1)
        ));
    }

    #[test]
    fn generic_shapes_at_runtime() {
        let shapes: Vec<GenericShape2<i32>> = vec![
            Circle2::new(Vector2::new(0, 0), 2).into(),
            Rect2::new(Vector2::new(10, 0), Vector2::new(2, 2)).into(),
            Polygon2::rectangle(4, 4, false).into(),
        ];
        let hits = |point: Vector2<i32>| {
            shapes
                .iter()
                .filter(|shape| shape.is_point_inside(&point))
                .count()
        };
        assert_eq!(hits(Vector2::new(1, 1)), 2);
        assert_eq!(hits(Vector2::new(11, -1)), 1);
        assert_eq!(hits(Vector2::new(-5, -5)), 0);
    }
}
