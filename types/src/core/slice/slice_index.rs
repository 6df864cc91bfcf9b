// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `slice[i]` for every [`CheckedIndex`] type. An untyped integer literal falls back to
//! `i32`, so `slice[-1]` compiles and then panics as out of range.

use std::ops::{Index, IndexMut};

use crate::{CheckedIndex, Slice};

impl<T, I: CheckedIndex> Index<I> for Slice<'_, T> {
    type Output = T;

    /// Same as [`Slice::at`].
    #[track_caller]
    fn index(&self, arg_index: I) -> &T { self.at(arg_index) }
}

impl<T, I: CheckedIndex> IndexMut<I> for Slice<'_, T> {
    /// Same as [`Slice::at_mut`].
    #[track_caller]
    fn index_mut(&mut self, arg_index: I) -> &mut T { self.at_mut(arg_index) }
}

#[cfg(test)]
mod tests {
    use crate::{Slice, assert_eq2, idx};

    #[test]
    fn test_index_with_every_integer_flavor() {
        let mut storage = [10, 20, 30];
        let slice = Slice::new(&mut storage);
        assert_eq2!(slice[0], 10);
        assert_eq2!(slice[1_u8], 20);
        assert_eq2!(slice[2_i16], 30);
        assert_eq2!(slice[idx(2)], 30);
    }

    #[test]
    fn test_index_mut() {
        let mut storage = [10, 20, 30];
        let mut slice = Slice::new(&mut storage);
        slice[0_usize] += 1;
        slice[idx(2)] = 0;
        assert_eq2!(storage, [11, 20, 0]);
    }

    #[test]
    #[should_panic(expected = "index -1 is out of range for a slice of length 3")]
    fn test_index_mut_negative_panics() {
        let mut storage = [10, 20, 30];
        let mut slice = Slice::new(&mut storage);
        slice[-1] = 0;
    }
}
