use itertools::zip_eq;
use tracing::trace;
use crate::vec::base::{Scalar, ComputeScalar, Dim, AngularDimension, square_root};
use crate::vec::fixed::FixedVector;

const COSINE_ROUNDING: ComputeScalar = 1e-6;

impl<const N: usize, T: Scalar> FixedVector<N, T> {
    pub fn is_zero_vec(&self) -> bool {
        let zero = T::default();
        self.components.iter().all(|elem| *elem == zero)
    }

    /// Euclidean norm, accumulated in the compute scalar. The zero vector
    /// returns 0 without taking a root.
    pub fn magnitude(&self) -> ComputeScalar {
        if self.is_zero_vec() {
            trace!(dimension = N, "magnitude of zero vector");
            return 0.0;
        }

        let norm_squared = self.components.
            iter().
            fold(0.0, |acc, elem| {
                let x = elem.to_compute();
                acc + x * x
            });
        square_root(norm_squared)
    }

    /// Scales to unit length in place. The zero vector is left untouched;
    /// this is the only operation that guards against dividing by zero.
    pub fn normalize(&mut self) -> &mut Self {
        if self.is_zero_vec() {
            trace!(dimension = N, "normalize skipped for zero vector");
            return self;
        }

        let norm = self.magnitude();
        *self /= norm;
        self
    }

    pub fn copy_normalized(&self) -> Self {
        let mut result = *self;
        result.normalize();
        result
    }

    pub fn distance<U: Scalar>(&self, other: &FixedVector<N, U>) -> ComputeScalar {
        let norm_squared = zip_eq(self.components.iter(), other.components.iter()).
            fold(0.0, |acc, (x, y)| {
                let delta = y.to_compute() - x.to_compute();
                acc + delta * delta
            });
        square_root(norm_squared)
    }

    pub fn dot<U: Scalar>(&self, other: &FixedVector<N, U>) -> ComputeScalar {
        zip_eq(self.components.iter(), other.components.iter()).
            fold(0.0, |acc, (x, y)| acc + x.to_compute() * y.to_compute())
    }
}

impl<const N: usize, T: Scalar> FixedVector<N, T>
where
    Dim<N>: AngularDimension
{
    /// Dot product from its geometric definition, `|a| |b| cos(theta)`, for
    /// an angle supplied by the caller in degrees. Use `dot` to compute the
    /// product from the components; this one exists to check or derive one
    /// quantity from the other. Zero when either vector is the zero vector.
    pub fn dot_with_angle<U: Scalar>(&self, other: &FixedVector<N, U>, degrees: ComputeScalar) -> ComputeScalar {
        if self.is_zero_vec() || other.is_zero_vec() {
            trace!(dimension = N, "dot with angle of zero vector");
            return 0.0;
        }

        self.magnitude() * other.magnitude() * degrees.to_radians().cos()
    }

    /// Angle in degrees recovered from a dot product the caller already
    /// computed. Zero when either vector is the zero vector.
    pub fn angle_between<U: Scalar>(&self, other: &FixedVector<N, U>, dot_product: ComputeScalar) -> ComputeScalar {
        if self.is_zero_vec() || other.is_zero_vec() {
            trace!(dimension = N, "angle between zero vector");
            return 0.0;
        }

        // Rounding can push the cosine of (anti)parallel vectors just past 1.
        // Anything further out is a bad dot product and stays NaN.
        let mut cosine = dot_product / (self.magnitude() * other.magnitude());
        if cosine.abs() > 1.0 && cosine.abs() <= 1.0 + COSINE_ROUNDING {
            cosine = cosine.signum();
        }
        cosine.acos().to_degrees()
    }
}

impl<T: Scalar> FixedVector<3, T> {
    pub fn cross_product<U: Scalar + Into<T>>(&self, other: &FixedVector<3, U>) -> Self {
        let [a0, a1, a2] = self.components;
        let [b0, b1, b2]: [T; 3] = other.components.map(Into::into);

        FixedVector::new([
            T::cross_term(a1, b2, a2, b1),
            T::cross_term(a2, b0, a0, b2),
            T::cross_term(a0, b1, a1, b0)
        ])
    }
}

#[cfg(test)]
mod fixed_vector_geometry_tests {
    use super::*;
    use rand::Rng;

    const TOLERANCE: f32 = 1e-5;

    fn random_vector<const N: usize>() -> FixedVector<N, f32> {
        let mut rng = rand::thread_rng();
        (0..N).
            map(|_| rng.gen_range(-10f32..10f32)).
            collect::<FixedVector<N, f32>>()
    }

    #[test]
    fn test_is_zero_vec() {
        assert!(FixedVector::<3, f32>::default().is_zero_vec());
        assert!(FixedVector::new([0u8, 0]).is_zero_vec());
        assert!(!FixedVector::new([0i16, 0, 1]).is_zero_vec());
        assert!(FixedVector::new([-0.0f64, 0.0]).is_zero_vec());
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(FixedVector::new([0f32, 0f32, 0f32]).magnitude(), 0.0);
        assert_eq!(FixedVector::new([3f32, 4f32, 0f32]).magnitude(), 5.0);
        assert_eq!(FixedVector::new([3i32, 4i32]).magnitude(), 5.0);
        assert_eq!(FixedVector::new([6u8, 8u8]).magnitude(), 10.0);
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        let mut v = FixedVector::new([0f32, 0f32, 0f32]);
        v.normalize();
        assert_eq!(v, FixedVector::new([0f32, 0f32, 0f32]));
    }

    #[test]
    fn test_normalize_yields_unit_magnitude() {
        let mut v = FixedVector::new([3f32, 4f32, 0f32]);
        assert!((v.normalize().magnitude() - 1.0).abs() < TOLERANCE);
        assert_eq!(v, FixedVector::new([0.6, 0.8, 0.0]));

        for _ in 0..50 {
            let w = random_vector::<4>();
            if !w.is_zero_vec() {
                assert!((w.copy_normalized().magnitude() - 1.0).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_copy_normalized_leaves_receiver() {
        let v = FixedVector::new([0f64, 2f64]);
        let n = v.copy_normalized();
        assert_eq!(v, FixedVector::new([0.0, 2.0]));
        assert_eq!(n, FixedVector::new([0.0, 1.0]));
    }

    #[test]
    fn test_normalize_integers_truncates() {
        let mut v = FixedVector::new([3i32, 4, 0]);
        v.normalize();
        assert_eq!(v, FixedVector::new([0, 0, 0]));
    }

    #[test]
    fn test_distance() {
        let a = FixedVector::new([1f32, 2f32, 3f32]);
        let b = FixedVector::new([4f32, 6f32, 3f32]);
        assert_eq!(a.distance(&a), 0.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);

        let c = FixedVector::new([4u8, 6u8, 3u8]);
        assert_eq!(a.distance(&c), 5.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        for _ in 0..50 {
            let a = random_vector::<3>();
            let b = random_vector::<3>();
            assert_eq!(a.distance(&a), 0.0);
            assert!((a.distance(&b) - b.distance(&a)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_dot() {
        let x = FixedVector::new([1f32, 0f32, 0f32]);
        let y = FixedVector::new([0f32, 1f32, 0f32]);
        assert_eq!(x.dot(&y), 0.0);
        assert_eq!(FixedVector::new([1, 2, 3]).dot(&FixedVector::new([4, 5, 6])), 32.0);
        assert_eq!(FixedVector::new([1.5f64, 2.0]).dot(&FixedVector::new([2u16, 1u16])), 5.0);
    }

    #[test]
    fn test_dot_with_angle_matches_components() {
        let x = FixedVector::new([2f32, 0f32]);
        let y = FixedVector::new([3f32, 3f32]);
        assert!((x.dot_with_angle(&y, 45.0) - x.dot(&y)).abs() < 1e-4);
        assert!(x.dot_with_angle(&FixedVector::new([0f32, 5f32]), 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_dot_with_angle_zero_vector() {
        let x = FixedVector::new([0f32, 0f32, 0f32]);
        let y = FixedVector::new([1f32, 2f32, 3f32]);
        assert_eq!(x.dot_with_angle(&y, 30.0), 0.0);
        assert_eq!(y.dot_with_angle(&x, 30.0), 0.0);
    }

    #[test]
    fn test_angle_between() {
        let x = FixedVector::new([1f32, 0f32, 0f32]);
        let y = FixedVector::new([0f32, 1f32, 0f32]);
        assert!((x.angle_between(&y, x.dot(&y)) - 90.0).abs() < 1e-4);

        let z = FixedVector::new([1f32, 1f32, 0f32]);
        assert!((x.angle_between(&z, x.dot(&z)) - 45.0).abs() < 1e-3);
        let parallel = FixedVector::new([3f32, 4f32, 0f32]);
        assert_eq!(parallel.angle_between(&parallel, parallel.dot(&parallel)), 0.0);

        let w = FixedVector::new([-2f32, 0f32, 0f32]);
        assert!((x.angle_between(&w, x.dot(&w)) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_between_zero_vector() {
        let x = FixedVector::new([0i32, 0i32]);
        let y = FixedVector::new([1i32, 1i32]);
        assert_eq!(x.angle_between(&y, 3.0), 0.0);
        assert_eq!(y.angle_between(&x, 3.0), 0.0);
    }

    #[test]
    fn test_angle_and_dot_invert_each_other() {
        let x = FixedVector::new([1f32, 2f32, 2f32]);
        let y = FixedVector::new([-3f32, 0f32, 4f32]);
        let theta = x.angle_between(&y, x.dot(&y));
        assert!((x.dot_with_angle(&y, theta) - x.dot(&y)).abs() < 1e-3);
    }

    #[test]
    fn test_cross_product_basis() {
        let x = FixedVector::new([1f32, 0f32, 0f32]);
        let y = FixedVector::new([0f32, 1f32, 0f32]);
        assert_eq!(x.cross_product(&y), FixedVector::new([0f32, 0f32, 1f32]));
        assert_eq!(y.cross_product(&x), FixedVector::new([0f32, 0f32, -1f32]));
    }

    #[test]
    fn test_cross_product_integers() {
        let a = FixedVector::new([2i32, 3, 4]);
        let b = FixedVector::new([5i32, 6, 7]);
        assert_eq!(a.cross_product(&b), FixedVector::new([-3, 6, -3]));
        assert_eq!(a.cross_product(&a), FixedVector::new([0, 0, 0]));
        assert_eq!(a.cross_product(&FixedVector::new([1i8, 0, 0])), FixedVector::new([0, 4, -3]));
    }

    #[test]
    fn test_cross_product_unsigned_wraps() {
        let x = FixedVector::new([1u32, 0, 0]);
        let y = FixedVector::new([0u32, 1, 0]);
        assert_eq!(x.cross_product(&y), FixedVector::new([0, 0, 1]));
        assert_eq!(y.cross_product(&x), FixedVector::new([0, 0, u32::MAX]));
        assert_eq!(-y.cross_product(&x), x.cross_product(&y));
    }

    #[test]
    fn test_angle_between_rounding_is_clamped() {
        let x = FixedVector::new([1f32, 0f32, 0f32]);
        assert_eq!(x.angle_between(&x, 1.0 + 5e-7), 0.0);
        assert!((x.angle_between(&x, -1.0 - 5e-7) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_between_bad_dot_product_is_nan() {
        let x = FixedVector::new([1f32, 0f32, 0f32]);
        assert!(x.angle_between(&x, 100.0).is_nan());
        assert!(x.angle_between(&x, -1.5).is_nan());
    }
}
