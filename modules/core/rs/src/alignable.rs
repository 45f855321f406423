// Rust has no builtin trait for "indexable container with a length", hence the custom one.
// Everything is byte-oriented downstream, but the trait itself stays symbol-agnostic.

use derive_getters::Dissolve;
use derive_more::Constructor;

/// Trait for sequences that can be aligned.
pub trait Alignable {
    /// The type of individual symbols being aligned.
    type Symbol;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Returns a reversed view of the sequence.
    fn reversed(&self) -> Reversed<'_, Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy, const N: usize> Alignable for &[T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

// Strings are aligned byte-wise, i.e. multibyte characters are not treated as a single symbol
impl Alignable for &str {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

impl Alignable for String {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

/// A view that walks the underlying sequence from the end to the start.
#[derive(Dissolve, Constructor, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reversed<'a, T: Alignable> {
    base: &'a T,
}

impl<T: Alignable> Alignable for Reversed<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        self.base.at(self.base.len() - pos - 1)
    }
}
