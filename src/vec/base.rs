use core::ops::{Add, Sub, Mul, AddAssign, SubAssign};
use std::default::Default;
use std::fmt::Debug;
use num_traits::AsPrimitive;
use paste::paste;

/// The floating point type every geometric quantity is accumulated in.
pub type ComputeScalar = f32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    SignedInteger,
    UnsignedInteger,
    FloatingPoint
}

/// An element type a `FixedVector` can do arithmetic and geometry with.
///
/// Implemented for the signed integers, unsigned integers and floating point
/// types only. Scaling goes through the compute scalar, so `scale` and
/// `shrink` convert to `f32`, operate, and convert back with `as` semantics
/// (float to integer conversions saturate, NaN becomes zero).
pub trait Scalar:
    Copy +
    Sized +
    Default +
    Debug +
    PartialEq +
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<Output=Self> +
    AddAssign +
    SubAssign +
    AsPrimitive<ComputeScalar>
{
    const CATEGORY: Category;

    fn scale(self, c: ComputeScalar) -> Self;
    fn shrink(self, c: ComputeScalar) -> Self;
    fn negate(self) -> Self;

    /// `a * b - c * d`, one component of a cross product. Integers wrap
    /// on overflow, matching `negate`.
    fn cross_term(a: Self, b: Self, c: Self, d: Self) -> Self;

    #[inline(always)]
    fn to_compute(self) -> ComputeScalar {
        self.as_()
    }
}

pub trait SignedInteger: Scalar {}
pub trait UnsignedInteger: Scalar {}

pub trait FloatingPoint: Scalar {
    fn square_root(self) -> Self;
}

/// Native floating point square root: NaN for negative input, NaN and
/// infinity propagate.
#[inline(always)]
pub fn square_root<F: FloatingPoint>(x: F) -> F {
    x.square_root()
}

/// Multi-pass iteration: the iterator can be cloned and each clone replays
/// the same sequence, so its length can be measured before it is consumed.
pub trait ForwardIterator: Iterator + Clone {}

impl<I: Iterator + Clone> ForwardIterator for I {}

/// Type-level dimension, used to gate operations on `N`.
pub struct Dim<const N: usize>;

/// Dimensions where the angle between two vectors is defined by the
/// magnitude/cosine relation.
pub trait AngularDimension {}

impl AngularDimension for Dim<2> {}
impl AngularDimension for Dim<3> {}

macro_rules! create_integer_scalar {
    ($marker:ident, $($type:ty),+) => {
        $(
            impl Scalar for $type {
                const CATEGORY: Category = Category::$marker;

                #[inline(always)]
                fn scale(self, c: ComputeScalar) -> Self { ((self as ComputeScalar) * c) as $type }

                #[inline(always)]
                fn shrink(self, c: ComputeScalar) -> Self { ((self as ComputeScalar) / c) as $type }

                #[inline(always)]
                fn negate(self) -> Self { self.wrapping_neg() }

                #[inline(always)]
                fn cross_term(a: Self, b: Self, c: Self, d: Self) -> Self {
                    a.wrapping_mul(b).wrapping_sub(c.wrapping_mul(d))
                }
            }

            impl $marker for $type {}
        )+
    };
}

macro_rules! create_float_scalar {
    ($($type:ty),+) => {
        $(
            impl Scalar for $type {
                const CATEGORY: Category = Category::FloatingPoint;

                #[inline(always)]
                fn scale(self, c: ComputeScalar) -> Self { self * (c as $type) }

                #[inline(always)]
                fn shrink(self, c: ComputeScalar) -> Self { self / (c as $type) }

                #[inline(always)]
                fn negate(self) -> Self { -self }

                #[inline(always)]
                fn cross_term(a: Self, b: Self, c: Self, d: Self) -> Self { a * b - c * d }
            }

            impl FloatingPoint for $type {
                #[inline(always)]
                fn square_root(self) -> Self { self.sqrt() }
            }
        )+
    };
}

create_integer_scalar!(SignedInteger, i8, i16, i32, i64);
create_integer_scalar!(UnsignedInteger, u8, u16, u32, u64);
create_float_scalar!(f32, f64);

macro_rules! create_category_predicate {
    ($category:ident) => {
        paste! {
            #[inline(always)]
            pub const fn [<is_ $category:snake>]<T: Scalar>() -> bool {
                matches!(T::CATEGORY, Category::$category)
            }
        }
    };
}

create_category_predicate!(SignedInteger);
create_category_predicate!(UnsignedInteger);
create_category_predicate!(FloatingPoint);
