#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::qm_scalar::min_max_ref;
use rand::{
    distributions::uniform::SampleUniform,
    rngs::StdRng,
    Rng,
    SeedableRng,
};

/// Draws one value uniformly from the inclusive range between `from` and `to`, which may be given
/// in either order. Integer types use a discrete distribution, floating point types a continuous
/// one.
///
/// # Panics
/// If either bound is NaN.
pub fn generate<T, R>(rng: &mut R, from: T, to: T) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    let (mut lower, mut upper) = (from, to);
    min_max_ref(&mut lower, &mut upper);
    rng.gen_range(lower..=upper)
}

/// Like [`generate`], using the thread-local generator. Not reproducible; pass a seeded
/// [`RandomContext`] around where determinism matters.
pub fn generate_default<T: SampleUniform + PartialOrd + Copy>(from: T, to: T) -> T {
    generate(&mut rand::thread_rng(), from, to)
}

/// An explicitly owned random number generator.
///
/// ```
/// use qmaths::core::prelude::*;
///
/// let mut first = RandomContext::from_seed(7);
/// let mut second = RandomContext::from_seed(7);
/// assert_eq!(first.generate(0, 1000), second.generate(0, 1000));
/// ```
#[derive(Clone, Debug)]
pub struct RandomContext {
    rng: StdRng,
}

impl RandomContext {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
    pub fn from_entropy() -> Self {
        debug!("seeding random context from OS entropy");
        Self { rng: StdRng::from_entropy() }
    }

    pub fn generate<T: SampleUniform + PartialOrd + Copy>(&mut self, from: T, to: T) -> T {
        generate(&mut self.rng, from, to)
    }

    /// Component-wise random vector within the box spanned by the two corners.
    pub fn vector2<S: Scalar + SampleUniform>(
        &mut self,
        from: &Vector2<S>,
        to: &Vector2<S>,
    ) -> Vector2<S> {
        Vector2::new(self.generate(from.x, to.x), self.generate(from.y, to.y))
    }
    pub fn vector3<S: Scalar + SampleUniform>(
        &mut self,
        from: &Vector3<S>,
        to: &Vector3<S>,
    ) -> Vector3<S> {
        Vector3::new(
            self.generate(from.x, to.x),
            self.generate(from.y, to.y),
            self.generate(from.z, to.z),
        )
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for RandomContext {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_values_stay_within_bounds() {
        let mut ctx = RandomContext::from_seed(42);
        for _ in 0..1000 {
            let i = ctx.generate(-3, 3);
            assert!((-3..=3).contains(&i));
            let f = ctx.generate(0.5, 1.5);
            assert!((0.5..=1.5).contains(&f));
        }
    }

    #[test]
    fn bounds_may_be_reversed() {
        let mut ctx = RandomContext::from_seed(1);
        for _ in 0..100 {
            let u = ctx.generate(10_u8, 2_u8);
            assert!((2..=10).contains(&u));
        }
        assert_eq!(ctx.generate(5, 5), 5);
    }

    #[test]
    fn every_integer_in_range_is_reachable() {
        let mut ctx = RandomContext::from_seed(3);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[ctx.generate(0_usize, 3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn seeded_contexts_are_reproducible() {
        let mut a = RandomContext::from_seed(2024);
        let mut b = RandomContext::from_seed(2024);
        let xs = (0..16).map(|_| a.generate(0.0, 1.0)).collect_vec();
        let ys = (0..16).map(|_| b.generate(0.0, 1.0)).collect_vec();
        assert_eq!(xs, ys);
    }

    #[test]
    fn random_vectors_stay_within_corners() {
        let mut ctx = RandomContext::from_seed(9);
        let lower = Vector3::new(-1.0, 0.0, 10.0);
        let upper = Vector3::new(1.0, 5.0, 8.0);
        for _ in 0..200 {
            let v = ctx.vector3(&lower, &upper);
            assert!((-1.0..=1.0).contains(&v.x));
            assert!((0.0..=5.0).contains(&v.y));
            assert!((8.0..=10.0).contains(&v.z));
        }
        let p = ctx.vector2(&Vector2::new(0, 0), &Vector2::new(2, -2));
        assert!((0..=2).contains(&p.x) && (-2..=0).contains(&p.y));
    }

    #[test]
    fn generate_accepts_any_rng() {
        let mut rng = StdRng::seed_from_u64(5);
        let value = generate(&mut rng, 100_i64, -100);
        assert!((-100..=100).contains(&value));
        let value = generate_default(1.0_f32, 2.0);
        assert!((1.0..=2.0).contains(&value));
    }
}
