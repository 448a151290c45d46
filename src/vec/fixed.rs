use std::convert::TryFrom;
use std::default::Default;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, IntoIterator, Iterator};
use std::ops::{Index, IndexMut};
use itertools::Itertools;
use num_traits::AsPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use tracing::{debug, error};
use crate::vec::base::ForwardIterator;

/// Exactly `N` components of `T`, stored inline.
///
/// The dimension is part of the type, so vectors of different dimension can
/// never be mixed in arithmetic and dimension-gated operations (such as the
/// cross product) only exist where they make sense.
#[derive(Debug, Copy, Clone)]
pub struct FixedVector<const N: usize, T> {
    pub(super) components: [T; N]
}

#[cold]
fn length_violation(expected: usize, actual: usize) -> ! {
    error!(expected, actual, "dimension mismatch constructing FixedVector");
    panic!("FixedVector of dimension {} cannot be built from {} components", expected, actual)
}

#[inline(always)]
fn check_index(index: usize, dimension: usize) {
    if index >= dimension {
        error!(index, dimension, "FixedVector index out of range");
        panic!("index {} out of range for FixedVector of dimension {}", index, dimension)
    }
}

impl<const N: usize, T> FixedVector<N, T> {
    const NONZERO_DIMENSION: () = assert!(N > 0, "the component number needs to be greater than zero");

    pub fn new(components: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_DIMENSION;
        FixedVector { components }
    }

    /// Element-wise conversion from a vector of the same dimension.
    pub fn from_vector<U: Into<T>>(other: FixedVector<N, U>) -> Self {
        FixedVector::new(other.components.map(Into::into))
    }

    /// Numeric conversion with `as` semantics.
    pub fn cast<U>(&self) -> FixedVector<N, U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static
    {
        FixedVector::new(self.components.map(|x| x.as_()))
    }

    #[inline(always)]
    pub const fn dimension(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> &T {
        check_index(idx, N);
        &self.components[idx]
    }

    #[inline(always)]
    pub fn at_mut(&mut self, idx: usize) -> &mut T {
        check_index(idx, N);
        &mut self.components[idx]
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.components.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.components.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    pub fn into_array(self) -> [T; N] {
        self.components
    }
}

impl<const N: usize, T: Default> FixedVector<N, T> {
    // Fills positions in order, but keeps counting past N so the caller can
    // report how long the input actually was.
    fn fill_exact<I: Iterator<Item=T>>(iter: I) -> std::result::Result<Self, usize> {
        let mut components: [T; N] = std::array::from_fn(|_| T::default());
        let mut count = 0usize;
        for item in iter {
            if count < N {
                components[count] = item;
            }
            count += 1;
        }

        if count == N {
            Ok(FixedVector::new(components))
        }
        else {
            Err(count)
        }
    }

    /// Builds a vector from a multi-pass iterator whose length must be
    /// exactly `N`. The length is measured on a clone before any element is
    /// copied.
    ///
    /// # Panics
    /// When the iterator does not yield exactly `N` items.
    pub fn from_forward<I>(iter: I) -> Self
    where
        I: ForwardIterator<Item=T>
    {
        let distance = iter.clone().count();
        if distance != N {
            length_violation(N, distance)
        }
        Self::from_iter_exact(iter)
    }

    /// # Panics
    /// When the iterator does not yield exactly `N` items.
    pub fn from_iter_exact<I: IntoIterator<Item=T>>(iter: I) -> Self {
        match Self::fill_exact(iter.into_iter()) {
            Ok(v) => v,
            Err(actual) => length_violation(N, actual)
        }
    }

    pub fn try_from_iter<I: IntoIterator<Item=T>>(iter: I) -> crate::Result<Self> {
        Self::fill_exact(iter.into_iter()).map_err(|actual| {
            debug!(expected = N, actual, "rejected FixedVector components");
            format!("expected {} components, got {}", N, actual).into()
        })
    }
}

impl<const N: usize, T: Default> Default for FixedVector<N, T> {
    fn default() -> Self {
        FixedVector::new(std::array::from_fn(|_| T::default()))
    }
}

impl<const N: usize, T> From<[T; N]> for FixedVector<N, T> {
    fn from(components: [T; N]) -> Self {
        FixedVector::new(components)
    }
}

impl<'a, const N: usize, T: Clone> TryFrom<&'a [T]> for FixedVector<N, T> {
    type Error = crate::Error;

    fn try_from(slice: &'a [T]) -> crate::Result<Self> {
        match <&[T; N]>::try_from(slice) {
            Ok(arr) => Ok(FixedVector::new(arr.clone())),
            Err(_) => {
                debug!(expected = N, actual = slice.len(), "rejected FixedVector slice");
                Err(format!("expected {} components, got {}", N, slice.len()).into())
            }
        }
    }
}

impl<const N: usize, T> TryFrom<Vec<T>> for FixedVector<N, T> {
    type Error = crate::Error;

    fn try_from(v: Vec<T>) -> crate::Result<Self> {
        <[T; N]>::try_from(v).
            map(FixedVector::new).
            map_err(|v| {
                debug!(expected = N, actual = v.len(), "rejected FixedVector vec");
                format!("expected {} components, got {}", N, v.len()).into()
            })
    }
}

// Unlike a growable container there is no sensible padding or truncation
// here: the item count must match the dimension.
impl<const N: usize, T: Default> FromIterator<T> for FixedVector<N, T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Self::from_iter_exact(iter)
    }
}

impl<const N: usize, T> Index<usize> for FixedVector<N, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: usize) -> &T {
        self.at(idx)
    }
}

impl<const N: usize, T> IndexMut<usize> for FixedVector<N, T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        self.at_mut(idx)
    }
}

impl<const N: usize, T> AsRef<[T]> for FixedVector<N, T> {
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

impl<const N: usize, T> IntoIterator for FixedVector<N, T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.components)
    }
}

impl<'a, const N: usize, T> IntoIterator for &'a FixedVector<N, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<'a, const N: usize, T> IntoIterator for &'a mut FixedVector<N, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter_mut()
    }
}

impl<const N: usize, T: Hash> Hash for FixedVector<N, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl<const N: usize, T: fmt::Display> fmt::Display for FixedVector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.components.iter().join(", "))
    }
}

impl<const N: usize, T> Distribution<FixedVector<N, T>> for Standard
where
    Standard: Distribution<T>
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FixedVector<N, T> {
        FixedVector::new(std::array::from_fn(|_| rng.gen()))
    }
}
