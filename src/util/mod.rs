pub mod format;
pub mod length;
pub mod linalg;
pub mod random;
pub mod shape;

pub mod qm_scalar {
    use crate::util::linalg::Scalar;
    use num_traits::{Float, FloatConst};
    use std::mem;

    /// Swaps the two values if needed, so that afterwards `lower <= higher`.
    pub fn min_max_ref<T: PartialOrd>(lower: &mut T, higher: &mut T) {
        if *lower > *higher {
            mem::swap(lower, higher);
        }
    }

    pub fn nearly_equal<T: Scalar>(a: T, b: T, tolerance: T) -> bool {
        a.abs_delta(b) <= tolerance
    }

    /// Clamps `current` into the range spanned by the two boundaries, which may be given in either
    /// order.
    pub fn clamp_checked<T: PartialOrd + Copy>(current: T, boundary_a: T, boundary_b: T) -> T {
        let (mut lower, mut upper) = (boundary_a, boundary_b);
        min_max_ref(&mut lower, &mut upper);
        if current < lower {
            lower
        } else if current > upper {
            upper
        } else {
            current
        }
    }

    // Same tie-breaking as `std::cmp::min`: the first argument wins on equality.
    pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
        if b < a { b } else { a }
    }
    pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
        if b > a { b } else { a }
    }

    pub fn to_radians<T: Float + FloatConst + From<u8>>(degrees: T) -> T {
        degrees / <T as From<u8>>::from(180) * T::PI()
    }
    pub fn to_degrees<T: Float + FloatConst + From<u8>>(radians: T) -> T {
        radians * <T as From<u8>>::from(180) / T::PI()
    }

}
