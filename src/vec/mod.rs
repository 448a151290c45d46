mod base;
mod fixed;
mod ops;
mod geometry;
pub mod traits;
pub use base::{
    Category, Scalar, SignedInteger, UnsignedInteger, FloatingPoint, ForwardIterator,
    Dim, AngularDimension, ComputeScalar, square_root,
    is_signed_integer, is_unsigned_integer, is_floating_point
};
pub use fixed::FixedVector;
pub use traits::{Vector, VectorArithmetic, nearest};

/// Builds a `FixedVector` from a component list; the dimension is the
/// number of arguments.
///
/// `fixed_vector![1.0, 2.0, 3.0]` keeps the argument type,
/// `fixed_vector![as f64 => 1, 2, 3]` converts each argument with `as`.
#[macro_export]
macro_rules! fixed_vector {
    (as $t:ty => $($x:expr),+ $(,)?) => {
        $crate::vec::FixedVector::new([$(($x) as $t),+])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::vec::FixedVector::new([$($x),+])
    };
}

macro_rules! create_vector_aliases {
    ($suffix:ident, $type:ty) => {
        paste::paste! {
            pub type [<Vec1 $suffix>] = FixedVector<1, $type>;
            pub type [<Vec2 $suffix>] = FixedVector<2, $type>;
            pub type [<Vec3 $suffix>] = FixedVector<3, $type>;
            pub type [<Vec4 $suffix>] = FixedVector<4, $type>;
        }
    };
}

create_vector_aliases!(f, f32);
create_vector_aliases!(d, f64);
create_vector_aliases!(i, i32);
create_vector_aliases!(u, u32);
