use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};
use std::cmp::{PartialEq, Eq};
use itertools::zip_eq;
use paste::paste;
use crate::vec::base::{Scalar, ComputeScalar};
use crate::vec::fixed::FixedVector;

// The compound form is the only place the arithmetic lives; the binary form
// takes its left operand by value and delegates, so the two can never drift.
macro_rules! create_elementwise_operator {
    ($trait:ident, $method:ident, $op:tt) => {
        paste! {
            impl<const N: usize, T, U> [<$trait Assign>]<FixedVector<N, U>> for FixedVector<N, T>
            where
                T: [<$trait Assign>],
                U: Into<T>
            {
                #[inline]
                fn [<$method _assign>](&mut self, other: FixedVector<N, U>) {
                    for (lhs, rhs) in zip_eq(self.components.iter_mut(), other.components) {
                        *lhs $op Into::<T>::into(rhs);
                    }
                }
            }

            impl<'a, const N: usize, T, U> [<$trait Assign>]<&'a FixedVector<N, U>> for FixedVector<N, T>
            where
                T: [<$trait Assign>],
                U: Into<T> + Clone
            {
                #[inline]
                fn [<$method _assign>](&mut self, other: &'a FixedVector<N, U>) {
                    for (lhs, rhs) in zip_eq(self.components.iter_mut(), other.components.iter()) {
                        *lhs $op Into::<T>::into(rhs.clone());
                    }
                }
            }

            impl<const N: usize, T> $trait for FixedVector<N, T>
            where
                T: [<$trait Assign>]
            {
                type Output = Self;

                #[inline]
                fn $method(mut self, other: Self) -> Self {
                    self $op other;
                    self
                }
            }

            impl<'a, const N: usize, T> $trait<&'a FixedVector<N, T>> for FixedVector<N, T>
            where
                T: [<$trait Assign>] + Clone
            {
                type Output = Self;

                #[inline]
                fn $method(mut self, other: &'a Self) -> Self {
                    self $op other;
                    self
                }
            }
        }
    };
}

create_elementwise_operator!(Add, add, +=);
create_elementwise_operator!(Sub, sub, -=);

// Division by zero is deliberately left to the element type: floats produce
// inf/NaN, integers saturate through the compute scalar.
macro_rules! create_scaling_operator {
    ($trait:ident, $method:ident, $op:tt, $scalar_fn:ident) => {
        paste! {
            impl<const N: usize, T: Scalar> [<$trait Assign>]<ComputeScalar> for FixedVector<N, T> {
                #[inline]
                fn [<$method _assign>](&mut self, c: ComputeScalar) {
                    for elem in self.components.iter_mut() {
                        *elem = elem.$scalar_fn(c);
                    }
                }
            }

            impl<const N: usize, T: Scalar> $trait<ComputeScalar> for FixedVector<N, T> {
                type Output = Self;

                #[inline]
                fn $method(mut self, c: ComputeScalar) -> Self {
                    self $op c;
                    self
                }
            }

            // Scalar on the left yields the same vector as scalar on the right.
            impl<const N: usize, T: Scalar> $trait<FixedVector<N, T>> for ComputeScalar {
                type Output = FixedVector<N, T>;

                #[inline]
                fn $method(self, v: FixedVector<N, T>) -> FixedVector<N, T> {
                    v.$method(self)
                }
            }
        }
    };
}

create_scaling_operator!(Mul, mul, *=, scale);
create_scaling_operator!(Div, div, /=, shrink);

impl<const N: usize, T: Scalar> FixedVector<N, T> {
    /// Negates every component in place and hands the same vector back for
    /// chaining. Integer components negate with wrapping semantics.
    pub fn negative(&mut self) -> &mut Self {
        for elem in self.components.iter_mut() {
            *elem = elem.negate();
        }
        self
    }
}

impl<const N: usize, T: Scalar> Neg for FixedVector<N, T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negative();
        self
    }
}

impl<const N: usize, T: PartialEq> PartialEq for FixedVector<N, T> {
    fn eq(&self, other: &Self) -> bool {
        zip_eq(self.components.iter(), other.components.iter()).
            all(|(x, y)| x == y)
    }
}

impl<const N: usize, T: Eq> Eq for FixedVector<N, T> {}
