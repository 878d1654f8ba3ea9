#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::format;
use crate::util::qm_scalar::{partial_max, partial_min};
use num_traits::{float::Float, AsPrimitive, Num, NumCast, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::{Debug, Display, Formatter},
    iter::Sum,
    ops::{
        Add,
        AddAssign,
        Div,
        DivAssign,
        Index,
        IndexMut,
        Mul,
        MulAssign,
        Neg,
        Sub,
        SubAssign,
    },
};

/// A non-boolean arithmetic type usable as a vector or shape component.
///
/// Implemented for every primitive integer and floating point type. Integer types follow their
/// usual cast semantics wherever a floating point step is needed: [`Scalar::sqrt`] goes through
/// `f64` and truncates, and [`Scalar::low_tolerance`] is zero, so integer vectors compare exactly.
pub trait Scalar:
    Num + NumCast + Copy + PartialOrd + Default + Debug + Display + Send + Sync + 'static
{
    const INTEGRAL: bool;
    const TYPE_NAME: &'static str;

    /// Absolute value. Wraps for the minimum value of signed integer types.
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    /// Arithmetic negation; wrapping (two's complement) for integer types.
    fn negate(self) -> Self;
    fn as_f64(self) -> f64;
    /// Converts from `f64` with `as` semantics (truncating and saturating for integers).
    fn from_f64_lossy(value: f64) -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }
    fn low_tolerance() -> Self {
        Self::from_f64_lossy(LOW_TOLERANCE)
    }
    /// `|self - other|`, computed without underflowing unsigned types.
    fn abs_delta(self, other: Self) -> Self {
        if self > other { self - other } else { other - self }
    }
    fn format_with(self, precision: usize, fixed: bool) -> String {
        if Self::INTEGRAL {
            self.to_string()
        } else {
            format::format_float(self.as_f64(), precision, fixed)
        }
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = false;
            const TYPE_NAME: &'static str = stringify!($t);

            fn abs(self) -> Self { <$t>::abs(self) }
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn negate(self) -> Self { -self }
            #[allow(clippy::cast_lossless)]
            fn as_f64(self) -> f64 { self as f64 }
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64_lossy(value: f64) -> Self { value as $t }
        }
    )+};
}

macro_rules! impl_scalar_signed {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = true;
            const TYPE_NAME: &'static str = stringify!($t);

            fn abs(self) -> Self { self.wrapping_abs() }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            fn sqrt(self) -> Self { (self as f64).sqrt() as $t }
            fn negate(self) -> Self { self.wrapping_neg() }
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn as_f64(self) -> f64 { self as f64 }
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64_lossy(value: f64) -> Self { value as $t }
        }
    )+};
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = true;
            const TYPE_NAME: &'static str = stringify!($t);

            fn abs(self) -> Self { self }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn sqrt(self) -> Self { (self as f64).sqrt() as $t }
            fn negate(self) -> Self { self.wrapping_neg() }
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn as_f64(self) -> f64 { self as f64 }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_f64_lossy(value: f64) -> Self { value as $t }
        }
    )+};
}

impl_scalar_float!(f32, f64);
impl_scalar_signed!(i8, i16, i32, i64, i128, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);

fn cast_component<S: Scalar, T: Scalar>(value: S) -> Result<T> {
    <T as NumCast>::from(value).ok_or_else(|| MathError::NotRepresentable {
        value: value.to_string(),
        target: T::TYPE_NAME,
    })
}

/// The capabilities shapes need from a vector type.
///
/// [`Ball`](crate::util::shape::Ball) and [`BoxShape`](crate::util::shape::BoxShape) are generic
/// over any `V: VectorLike<S>`, which is how one definition serves as both circle and sphere (or
/// rectangle and cuboid).
pub trait VectorLike<S: Scalar>:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<S, Output = Self>
    + Div<S, Output = Self>
{
    const DIMENSIONS: usize;

    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index >= Self::DIMENSIONS`.
    fn component(&self, index: usize) -> Result<S>;
    fn components(&self) -> impl Iterator<Item = S>;
    fn absolute(&self) -> Self;
    fn abs_delta(&self, other: &Self) -> Self;
    fn distance_squared(&self, other: &Self) -> S;
}

/// A two-dimensional vector, generic over its [`Scalar`] component type.
///
/// # Equality
/// Two vectors are considered equal if each pair of components differs by at most
/// [`LOW_TOLERANCE`](crate::core::config::LOW_TOLERANCE), converted to the component type. For
/// integer components this is exact equality. Use [`Vector2::nearly_equal`] for a custom
/// tolerance.
///
/// # Examples
///
/// ```
/// use qmaths::core::prelude::*;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(2.0 * v + 1.0, Vector2::new(7.0, 9.0));
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vector2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vector2<S> {
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
    pub fn splat(value: S) -> Self {
        Self { x: value, y: value }
    }
    pub fn set(&mut self, x: S, y: S) {
        self.x = x;
        self.y = y;
    }
    pub fn dimensions(&self) -> usize {
        2
    }

    /// Returns the component with the given index (0 for `x`, 1 for `y`).
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<S> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::index_out_of_range("Vector2", index, 2)),
        }
    }
    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index > 1`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut S> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(MathError::index_out_of_range("Vector2", index, 2)),
        }
    }
    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index > 1`.
    pub fn set_component(&mut self, index: usize, value: S) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`Vector2::length`] when comparing lengths to avoid the square root.
    pub fn length_squared(&self) -> S {
        self.dot(self)
    }
    pub fn length(&self) -> S {
        self.length_squared().sqrt()
    }
    /// Converts the components to `T` first, then computes the squared length in `T`.
    pub fn length_squared_as<T: Scalar>(&self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().length_squared()
    }
    /// Converts the components to `T` first, then computes the length in `T`.
    ///
    /// ```
    /// use qmaths::core::prelude::*;
    ///
    /// let v = Vector2::new(1, 1);
    /// assert_eq!(v.length(), 1);
    /// assert!((v.length_as::<f64>() - 2.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn length_as<T: Scalar>(&self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().length()
    }

    pub fn distance_squared(&self, other: &Self) -> S {
        self.abs_delta(other).length_squared()
    }
    pub fn distance(&self, other: &Self) -> S {
        self.abs_delta(other).length()
    }
    pub fn distance_squared_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().distance_squared(&other.convert())
    }
    pub fn distance_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().distance(&other.convert())
    }

    pub fn dot(&self, other: &Self) -> S {
        self.x * other.x + self.y * other.y
    }
    pub fn dot_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().dot(&other.convert())
    }

    /// Returns `x * other.y + y * other.x`.
    ///
    /// Note this sums both products; it is not the signed parallelogram area. Use
    /// [`Vector2::perp_dot`] for `x * other.y - y * other.x`.
    pub fn cross(&self, other: &Self) -> S {
        self.x * other.y + self.y * other.x
    }
    pub fn cross_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().cross(&other.convert())
    }
    /// The standard 2D cross product: the signed area of the parallelogram spanned by the two
    /// vectors.
    pub fn perp_dot(&self, other: &Self) -> S {
        self.x * other.y - self.y * other.x
    }

    /// Reflects the vector about the surface with the given normal, which need not be normalised.
    pub fn reflect(&self, normal: &Self) -> Self {
        let normal = normal.normalize();
        *self - normal * normal.dot(self) * S::two()
    }
    pub fn reflect_self(&mut self, normal: &Self) -> &mut Self {
        *self = self.reflect(normal);
        self
    }

    /// Returns the vector scaled to unit length. A zero-length vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len.is_zero() {
            *self
        } else {
            *self / len
        }
    }
    pub fn normalize_self(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    pub fn absolute(&self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
    /// Component-wise `|self - other|`.
    pub fn abs_delta(&self, other: &Self) -> Self {
        Self {
            x: self.x.abs_delta(other.x),
            y: self.y.abs_delta(other.y),
        }
    }

    /// Casts each component to `T` with `as` semantics (truncating, no overflow checks).
    pub fn convert<T: Scalar>(&self) -> Vector2<T>
    where
        S: AsPrimitive<T>,
    {
        Vector2 {
            x: self.x.as_(),
            y: self.y.as_(),
        }
    }
    /// Like [`Vector2::convert`], but fails instead of wrapping or saturating.
    ///
    /// # Errors
    /// [`MathError::NotRepresentable`] if a component does not fit in `T`.
    pub fn try_convert<T: Scalar>(&self) -> Result<Vector2<T>> {
        Ok(Vector2 {
            x: cast_component(self.x)?,
            y: cast_component(self.y)?,
        })
    }

    pub fn nearly_equal<F: Float + 'static>(&self, other: &Self, tolerance: F) -> bool
    where
        S: AsPrimitive<F>,
    {
        let close = |a: S, b: S| (a.as_() - b.as_()).abs() <= tolerance;
        close(self.x, other.x) && close(self.y, other.y)
    }

    /// Component-wise minimum.
    pub fn lower_bounds(lhs: &Self, rhs: &Self) -> Self {
        Self {
            x: partial_min(lhs.x, rhs.x),
            y: partial_min(lhs.y, rhs.y),
        }
    }
    /// Component-wise maximum.
    pub fn upper_bounds(lhs: &Self, rhs: &Self) -> Self {
        Self {
            x: partial_max(lhs.x, rhs.x),
            y: partial_max(lhs.y, rhs.y),
        }
    }
    /// Rearranges the components so that `lower` ends up with the component-wise minimum and
    /// `upper` with the component-wise maximum of the original pair.
    pub fn bounds(lower: &mut Self, upper: &mut Self) {
        let (min, max) = (Self::lower_bounds(lower, upper), Self::upper_bounds(lower, upper));
        *lower = min;
        *upper = max;
    }

    pub fn to_string_with(&self, format: &VectorFormat) -> String {
        format.format_components(&[("x", self.x), ("y", self.y)])
    }
}

impl<S: Scalar> VectorLike<S> for Vector2<S> {
    const DIMENSIONS: usize = 2;

    fn component(&self, index: usize) -> Result<S> {
        self.get(index)
    }
    fn components(&self) -> impl Iterator<Item = S> {
        [self.x, self.y].into_iter()
    }
    fn absolute(&self) -> Self {
        Vector2::absolute(self)
    }
    fn abs_delta(&self, other: &Self) -> Self {
        Vector2::abs_delta(self, other)
    }
    fn distance_squared(&self, other: &Self) -> S {
        Vector2::distance_squared(self, other)
    }
}

impl<S: Scalar> PartialEq for Vector2<S> {
    fn eq(&self, other: &Self) -> bool {
        let tolerance = S::low_tolerance();
        self.x.abs_delta(other.x) <= tolerance && self.y.abs_delta(other.y) <= tolerance
    }
}

impl<S: Scalar> Index<usize> for Vector2<S> {
    type Output = S;

    /// # Panics
    /// If `index > 1`; see [`Vector2::get`] for the fallible version.
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", MathError::index_out_of_range("Vector2", index, 2)),
        }
    }
}
impl<S: Scalar> IndexMut<usize> for Vector2<S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", MathError::index_out_of_range("Vector2", index, 2)),
        }
    }
}

impl<S: Scalar> From<[S; 2]> for Vector2<S> {
    fn from(value: [S; 2]) -> Self {
        Vector2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl<S: Scalar> From<(S, S)> for Vector2<S> {
    fn from((x, y): (S, S)) -> Self {
        Vector2 { x, y }
    }
}
impl<S: Scalar> From<Vector2<S>> for [S; 2] {
    fn from(value: Vector2<S>) -> Self {
        [value.x, value.y]
    }
}

impl<S: Scalar> fmt::Display for Vector2<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&VectorFormat::default()))
    }
}

/// A three-dimensional vector, generic over its [`Scalar`] component type.
///
/// Shares the equality semantics and most of the API of [`Vector2`]; [`Vector3::cross`] is the
/// standard right-handed cross product.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vector3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vector3<S> {
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }
    pub fn splat(value: S) -> Self {
        Self { x: value, y: value, z: value }
    }
    pub fn set(&mut self, x: S, y: S, z: S) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
    pub fn dimensions(&self) -> usize {
        3
    }

    /// Returns the component with the given index (0 for `x`, 1 for `y`, 2 for `z`).
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<S> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::index_out_of_range("Vector3", index, 3)),
        }
    }
    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index > 2`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut S> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(MathError::index_out_of_range("Vector3", index, 3)),
        }
    }
    /// # Errors
    /// [`MathError::IndexOutOfRange`] if `index > 2`.
    pub fn set_component(&mut self, index: usize, value: S) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn length_squared(&self) -> S {
        self.dot(self)
    }
    pub fn length(&self) -> S {
        self.length_squared().sqrt()
    }
    pub fn length_squared_as<T: Scalar>(&self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().length_squared()
    }
    pub fn length_as<T: Scalar>(&self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().length()
    }

    pub fn distance_squared(&self, other: &Self) -> S {
        self.abs_delta(other).length_squared()
    }
    pub fn distance(&self, other: &Self) -> S {
        self.abs_delta(other).length()
    }
    pub fn distance_squared_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().distance_squared(&other.convert())
    }
    pub fn distance_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().distance(&other.convert())
    }

    pub fn dot(&self, other: &Self) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    pub fn dot_as<T: Scalar>(&self, other: &Self) -> T
    where
        S: AsPrimitive<T>,
    {
        self.convert::<T>().dot(&other.convert())
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Reflects the vector about the surface with the given normal, which need not be normalised.
    pub fn reflect(&self, normal: &Self) -> Self {
        let normal = normal.normalize();
        *self - normal * normal.dot(self) * S::two()
    }
    pub fn reflect_self(&mut self, normal: &Self) -> &mut Self {
        *self = self.reflect(normal);
        self
    }

    /// Returns the vector scaled to unit length. A zero-length vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len.is_zero() {
            *self
        } else {
            *self / len
        }
    }
    pub fn normalize_self(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    pub fn absolute(&self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    pub fn abs_delta(&self, other: &Self) -> Self {
        Self {
            x: self.x.abs_delta(other.x),
            y: self.y.abs_delta(other.y),
            z: self.z.abs_delta(other.z),
        }
    }

    pub fn convert<T: Scalar>(&self) -> Vector3<T>
    where
        S: AsPrimitive<T>,
    {
        Vector3 {
            x: self.x.as_(),
            y: self.y.as_(),
            z: self.z.as_(),
        }
    }
    /// # Errors
    /// [`MathError::NotRepresentable`] if a component does not fit in `T`.
    pub fn try_convert<T: Scalar>(&self) -> Result<Vector3<T>> {
        Ok(Vector3 {
            x: cast_component(self.x)?,
            y: cast_component(self.y)?,
            z: cast_component(self.z)?,
        })
    }

    pub fn nearly_equal<F: Float + 'static>(&self, other: &Self, tolerance: F) -> bool
    where
        S: AsPrimitive<F>,
    {
        let close = |a: S, b: S| (a.as_() - b.as_()).abs() <= tolerance;
        close(self.x, other.x) && close(self.y, other.y) && close(self.z, other.z)
    }

    pub fn lower_bounds(lhs: &Self, rhs: &Self) -> Self {
        Self {
            x: partial_min(lhs.x, rhs.x),
            y: partial_min(lhs.y, rhs.y),
            z: partial_min(lhs.z, rhs.z),
        }
    }
    pub fn upper_bounds(lhs: &Self, rhs: &Self) -> Self {
        Self {
            x: partial_max(lhs.x, rhs.x),
            y: partial_max(lhs.y, rhs.y),
            z: partial_max(lhs.z, rhs.z),
        }
    }
    pub fn bounds(lower: &mut Self, upper: &mut Self) {
        let (min, max) = (Self::lower_bounds(lower, upper), Self::upper_bounds(lower, upper));
        *lower = min;
        *upper = max;
    }

    pub fn to_string_with(&self, format: &VectorFormat) -> String {
        format.format_components(&[("x", self.x), ("y", self.y), ("z", self.z)])
    }
}

impl<S: Scalar> VectorLike<S> for Vector3<S> {
    const DIMENSIONS: usize = 3;

    fn component(&self, index: usize) -> Result<S> {
        self.get(index)
    }
    fn components(&self) -> impl Iterator<Item = S> {
        [self.x, self.y, self.z].into_iter()
    }
    fn absolute(&self) -> Self {
        Vector3::absolute(self)
    }
    fn abs_delta(&self, other: &Self) -> Self {
        Vector3::abs_delta(self, other)
    }
    fn distance_squared(&self, other: &Self) -> S {
        Vector3::distance_squared(self, other)
    }
}

impl<S: Scalar> PartialEq for Vector3<S> {
    fn eq(&self, other: &Self) -> bool {
        let tolerance = S::low_tolerance();
        self.x.abs_delta(other.x) <= tolerance
            && self.y.abs_delta(other.y) <= tolerance
            && self.z.abs_delta(other.z) <= tolerance
    }
}

impl<S: Scalar> Index<usize> for Vector3<S> {
    type Output = S;

    /// # Panics
    /// If `index > 2`; see [`Vector3::get`] for the fallible version.
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", MathError::index_out_of_range("Vector3", index, 3)),
        }
    }
}
impl<S: Scalar> IndexMut<usize> for Vector3<S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", MathError::index_out_of_range("Vector3", index, 3)),
        }
    }
}

impl<S: Scalar> From<[S; 3]> for Vector3<S> {
    fn from(value: [S; 3]) -> Self {
        Vector3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}
impl<S: Scalar> From<(S, S, S)> for Vector3<S> {
    fn from((x, y, z): (S, S, S)) -> Self {
        Vector3 { x, y, z }
    }
}
impl<S: Scalar> From<Vector3<S>> for [S; 3] {
    fn from(value: Vector3<S>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<S: Scalar> fmt::Display for Vector3<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&VectorFormat::default()))
    }
}

// Component-wise arithmetic against another vector or a scalar, shared by both vector types.
macro_rules! impl_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<S: Scalar> Add<$name<S>> for $name<S> {
            type Output = $name<S>;

            fn add(self, rhs: $name<S>) -> Self::Output {
                $name { $($field: self.$field + rhs.$field),+ }
            }
        }
        impl<S: Scalar> Sub<$name<S>> for $name<S> {
            type Output = $name<S>;

            fn sub(self, rhs: $name<S>) -> Self::Output {
                $name { $($field: self.$field - rhs.$field),+ }
            }
        }
        impl<S: Scalar> Mul<$name<S>> for $name<S> {
            type Output = $name<S>;

            fn mul(self, rhs: $name<S>) -> Self::Output {
                $name { $($field: self.$field * rhs.$field),+ }
            }
        }
        impl<S: Scalar> Div<$name<S>> for $name<S> {
            type Output = $name<S>;

            fn div(self, rhs: $name<S>) -> Self::Output {
                $name { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl<S: Scalar> Add<S> for $name<S> {
            type Output = $name<S>;

            fn add(self, rhs: S) -> Self::Output {
                $name { $($field: self.$field + rhs),+ }
            }
        }
        impl<S: Scalar> Sub<S> for $name<S> {
            type Output = $name<S>;

            fn sub(self, rhs: S) -> Self::Output {
                $name { $($field: self.$field - rhs),+ }
            }
        }
        impl<S: Scalar> Mul<S> for $name<S> {
            type Output = $name<S>;

            fn mul(self, rhs: S) -> Self::Output {
                $name { $($field: self.$field * rhs),+ }
            }
        }
        impl<S: Scalar> Div<S> for $name<S> {
            type Output = $name<S>;

            fn div(self, rhs: S) -> Self::Output {
                $name { $($field: self.$field / rhs),+ }
            }
        }

        impl<S: Scalar> AddAssign<$name<S>> for $name<S> {
            fn add_assign(&mut self, rhs: $name<S>) {
                *self = *self + rhs;
            }
        }
        impl<S: Scalar> SubAssign<$name<S>> for $name<S> {
            fn sub_assign(&mut self, rhs: $name<S>) {
                *self = *self - rhs;
            }
        }
        impl<S: Scalar> MulAssign<$name<S>> for $name<S> {
            fn mul_assign(&mut self, rhs: $name<S>) {
                *self = *self * rhs;
            }
        }
        impl<S: Scalar> DivAssign<$name<S>> for $name<S> {
            fn div_assign(&mut self, rhs: $name<S>) {
                *self = *self / rhs;
            }
        }
        impl<S: Scalar> AddAssign<S> for $name<S> {
            fn add_assign(&mut self, rhs: S) {
                *self = *self + rhs;
            }
        }
        impl<S: Scalar> SubAssign<S> for $name<S> {
            fn sub_assign(&mut self, rhs: S) {
                *self = *self - rhs;
            }
        }
        impl<S: Scalar> MulAssign<S> for $name<S> {
            fn mul_assign(&mut self, rhs: S) {
                *self = *self * rhs;
            }
        }
        impl<S: Scalar> DivAssign<S> for $name<S> {
            fn div_assign(&mut self, rhs: S) {
                *self = *self / rhs;
            }
        }

        impl<S: Scalar + Neg<Output = S>> Neg for $name<S> {
            type Output = $name<S>;

            fn neg(self) -> Self::Output {
                $name { $($field: -self.$field),+ }
            }
        }
        impl<S: Scalar + Neg<Output = S>> Neg for &$name<S> {
            type Output = $name<S>;

            fn neg(self) -> Self::Output {
                -*self
            }
        }

        impl<S: Scalar> Zero for $name<S> {
            fn zero() -> Self {
                $name::splat(S::zero())
            }

            fn is_zero(&self) -> bool {
                $(self.$field.is_zero())&&+
            }
        }

        impl<S: Scalar> Sum for $name<S> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($name::zero(), |acc, v| acc + v)
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });

// Scalar on the left-hand side. The orphan rule rules out a blanket impl over `S`, so each
// primitive gets its own.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),+) => {$(
        impl Add<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn add(self, rhs: Vector2<$t>) -> Self::Output { rhs + self }
        }
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, rhs: Vector2<$t>) -> Self::Output { rhs * self }
        }
        impl Mul<&Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, rhs: &Vector2<$t>) -> Self::Output { *rhs * self }
        }
        impl Add<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn add(self, rhs: Vector3<$t>) -> Self::Output { rhs + self }
        }
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, rhs: Vector3<$t>) -> Self::Output { rhs * self }
        }
        impl Mul<&Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, rhs: &Vector3<$t>) -> Self::Output { *rhs * self }
        }
    )+};
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector2i = Vector2<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;
pub type Vector3i = Vector3<i32>;
pub type Vector3u = Vector3<u32>;
