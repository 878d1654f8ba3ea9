#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::{qm_scalar, shape::Shape};
use serde::{Deserialize, Serialize};

/// A closed loop of 2D vertices; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Polygon2<S> {
    points: Vec<Vector2<S>>,
}

impl<S: Scalar> Polygon2<S> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }
    pub fn from_points(points: impl IntoIterator<Item = Vector2<S>>) -> Self {
        Self { points: points.into_iter().collect() }
    }

    /// Four vertices in the order top-left, top-right, bottom-right, bottom-left. If `centered`,
    /// the rectangle is centered on the origin, otherwise its top-left corner is.
    ///
    /// ```
    /// use qmaths::core::prelude::*;
    ///
    /// let rect = Polygon2::rectangle(4, 2, true);
    /// assert_eq!(rect.points()[0], Vector2::new(-2, -1));
    /// assert!(rect.is_point_inside(&Vector2::new(0, 0)));
    /// ```
    pub fn rectangle(width: S, height: S, centered: bool) -> Self {
        if centered {
            let (half_width, half_height) = (width / S::two(), height / S::two());
            Self::from_points([
                Vector2::new(half_width.negate(), half_height.negate()),
                Vector2::new(half_width, half_height.negate()),
                Vector2::new(half_width, half_height),
                Vector2::new(half_width.negate(), half_height),
            ])
        } else {
            Self::from_points([
                Vector2::new(S::zero(), S::zero()),
                Vector2::new(width, S::zero()),
                Vector2::new(width, height),
                Vector2::new(S::zero(), height),
            ])
        }
    }
    pub fn square(size: S, centered: bool) -> Self {
        Self::rectangle(size, size, centered)
    }

    /// `point_count` vertices spaced evenly by angle, starting on the positive x-axis. Fewer than
    /// three vertices are raised to three.
    pub fn ellipse(x_radius: S, y_radius: S, point_count: usize) -> Self {
        let point_count = if point_count < MIN_POLYGON_POINT_COUNT {
            warn!(
                "Polygon2::ellipse(): point count {point_count} too small, using {MIN_POLYGON_POINT_COUNT}"
            );
            MIN_POLYGON_POINT_COUNT
        } else {
            point_count
        };
        #[allow(clippy::cast_precision_loss)]
        let step = 360.0 / point_count as f64;
        let (x_radius, y_radius) = (x_radius.as_f64(), y_radius.as_f64());
        (0..point_count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = qm_scalar::to_radians(step * i as f64);
                Vector2::new(
                    S::from_f64_lossy(angle.cos() * x_radius),
                    S::from_f64_lossy(angle.sin() * y_radius),
                )
            })
            .collect()
    }
    pub fn circle(radius: S, point_count: usize) -> Self {
        Self::ellipse(radius, radius, point_count)
    }

    pub fn add_point(&mut self, point: Vector2<S>) {
        self.points.push(point);
    }
    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index >= self.point_count()`.
    pub fn point(&self, index: usize) -> Result<Vector2<S>> {
        self.points
            .get(index)
            .copied()
            .ok_or_else(|| MathError::index_out_of_range("Polygon2", index, self.points.len()))
    }
    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index >= self.point_count()`.
    pub fn set_point(&mut self, index: usize, point: Vector2<S>) -> Result<()> {
        let len = self.points.len();
        *self
            .points
            .get_mut(index)
            .ok_or_else(|| MathError::index_out_of_range("Polygon2", index, len))? = point;
        Ok(())
    }
    /// Grows (with zero vectors) or truncates the vertex list.
    pub fn set_point_count(&mut self, count: usize) {
        self.points.resize(count, Vector2::default());
    }
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
    pub fn points(&self) -> &[Vector2<S>] {
        &self.points
    }

    /// Even-odd ray casting. Polygons with fewer than three vertices contain nothing, and points
    /// exactly on an edge may land on either side.
    ///
    /// Edge intercepts are computed in `f64` for every scalar type, so integer polygons do not
    /// truncate the intercept toward zero.
    pub fn is_point_inside(&self, point: &Vector2<S>) -> bool {
        if self.points.len() < MIN_POLYGON_POINT_COUNT {
            return false;
        }
        let (px, py) = (point.x.as_f64(), point.y.as_f64());
        let mut inside = false;
        for (prev, curr) in self.points.iter().circular_tuple_windows() {
            let (xi, yi) = (curr.x.as_f64(), curr.y.as_f64());
            let (xj, yj) = (prev.x.as_f64(), prev.y.as_f64());
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
        }
        inside
    }
}

impl<S: Scalar> PartialEq for Polygon2<S> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<S: Scalar> FromIterator<Vector2<S>> for Polygon2<S> {
    fn from_iter<T: IntoIterator<Item = Vector2<S>>>(iter: T) -> Self {
        Self::from_points(iter)
    }
}

impl<S: Scalar> Shape for Polygon2<S> {
    type Vector = Vector2<S>;

    fn is_point_inside(&self, point: &Vector2<S>) -> bool {
        Polygon2::is_point_inside(self, point)
    }
}
