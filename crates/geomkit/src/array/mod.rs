//! Growable, bounds-checked sequence with explicit capacity doubling.
//!
//! Purpose
//! - Hold any element type (scalars, strings, points, owned polygons, shared
//!   figure handles) behind a small contract: append, remove, checked access.
//! - Report a deterministic `capacity` that starts at `cfg::DEFAULT_CAPACITY`
//!   and doubles whenever an append finds the buffer full.
//!
//! Ownership
//! - The buffer belongs to exactly one array. `Clone` builds a fresh buffer of
//!   the same capacity and clones elements in order; `take` hands the buffer to
//!   the returned array and leaves the source with size 0, capacity 0 and no
//!   allocation.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cfg::DEFAULT_CAPACITY;
use crate::error::{GeomError, Result};
use crate::figure::Figure;

/// Dynamic array with doubling growth.
///
/// Invariant: `len() <= capacity()`.
#[derive(Debug)]
pub struct DynamicArray<T> {
    buf: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Empty array with the default capacity (16).
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Empty array reserving `reserve` slots. Zero is rejected.
    pub fn with_capacity(reserve: usize) -> Result<Self> {
        if reserve == 0 {
            return Err(GeomError::invalid("array reserve size must be > 0"));
        }
        Ok(Self {
            buf: Vec::with_capacity(reserve),
            capacity: reserve,
        })
    }

    /// Move every element into a buffer twice as large, in order.
    fn grow(&mut self) {
        let next = if self.capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity * 2
        };
        let mut fresh = Vec::with_capacity(next);
        fresh.extend(self.buf.drain(..));
        self.buf = fresh;
        self.capacity = next;
    }

    /// Insert at the end, growing first if full. Returns `self` for chaining.
    pub fn append(&mut self, value: T) -> &mut Self {
        if self.buf.len() == self.capacity {
            self.grow();
        }
        self.buf.push(value);
        self
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        GeomError::check_index(index, self.buf.len())?;
        Ok(self.buf.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        GeomError::check_index(index, self.buf.len())?;
        Ok(&self.buf[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        GeomError::check_index(index, self.buf.len())?;
        Ok(&mut self.buf[index])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Alias of `len`.
    #[inline]
    pub fn get_size(&self) -> usize {
        self.len()
    }

    /// Alias of `capacity`.
    #[inline]
    pub fn get_capacity(&self) -> usize {
        self.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Move the contents out, leaving `self` relinquished (size 0, capacity 0).
    ///
    /// A relinquished array is still usable: the next append regrows it to the
    /// default capacity.
    pub fn take(&mut self) -> Self {
        let capacity = std::mem::replace(&mut self.capacity, 0);
        let buf = std::mem::take(&mut self.buf);
        Self { buf, capacity }
    }
}

impl<T: fmt::Display> DynamicArray<T> {
    /// One element followed by a newline.
    pub fn format_at(&self, index: usize) -> Result<String> {
        let item = self.get(index)?;
        Ok(format!("{item}\n"))
    }

    /// Write the diagnostic dump (see `Display`) to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Write one element and a newline to stdout.
    pub fn print_at(&self, index: usize) -> Result<()> {
        print!("{}", self.format_at(index)?);
        Ok(())
    }
}

impl<T: Figure> DynamicArray<T> {
    /// Sum of element areas; `0.0` for an empty array.
    pub fn total_area(&self) -> f64 {
        self.buf.iter().map(Figure::area).sum()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend(self.buf.iter().cloned());
        Self {
            buf,
            capacity: self.capacity,
        }
    }

    /// Builds the copy before replacing `self`, so a panicking element clone
    /// leaves the destination as it was.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

/// Element-wise; capacity is not compared.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Concatenates elements with no separator; an empty array prints
/// `Array is empty` and a newline.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.buf.is_empty() {
            return writeln!(f, "Array is empty");
        }
        for item in &self.buf {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter_mut()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

#[cfg(test)]
mod tests;
