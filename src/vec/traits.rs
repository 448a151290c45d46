use core::ops::{Add, Sub, Div, Mul};
use crate::vec::base::{Scalar, ComputeScalar};
use crate::vec::fixed::FixedVector;

pub trait VectorArithmetic:
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<ComputeScalar, Output=Self> +
    Div<ComputeScalar, Output=Self> +
    Default
{
}

pub trait Vector: VectorArithmetic {
    type DType;

    fn dot(&self, other: &Self) -> ComputeScalar;
    fn distance(&self, other: &Self) -> ComputeScalar;
    fn magnitude(&self) -> ComputeScalar;
    fn dimension(&self) -> usize;
}

impl<const N: usize, T: Scalar> VectorArithmetic for FixedVector<N, T> {}

impl<const N: usize, T: Scalar> Vector for FixedVector<N, T> {
    type DType = T;

    fn dot(&self, other: &Self) -> ComputeScalar {
        FixedVector::dot(self, other)
    }

    fn distance(&self, other: &Self) -> ComputeScalar {
        FixedVector::distance(self, other)
    }

    fn magnitude(&self) -> ComputeScalar {
        FixedVector::magnitude(self)
    }

    fn dimension(&self) -> usize {
        N
    }
}

/// The candidate closest to `query` by Euclidean distance. Ties keep the
/// earliest candidate. Candidates at a NaN distance are never chosen.
pub fn nearest<'a, V: Vector>(query: &V, candidates: &'a [V]) -> Option<&'a V> {
    candidates.
        iter().
        map(|x| (query.distance(x), x)).
        filter(|(d, _)| !d.is_nan()).
        fold(None, |acc, (d, v)| {
            match acc {
                None => Some((d, v)),
                Some((min, w)) => {
                    if d < min {
                        Some((d, v))
                    }
                    else {
                        Some((min, w))
                    }
                }
            }
        }).
        map(|(_, v)| v)
}
