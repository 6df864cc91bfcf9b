// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::marker::PhantomData;

/// Satisfied by any iterator that is re-walkable ([`Clone`]) and whose
/// [`Iterator::Item`] is exactly `T`. As a bound this is strict: an iterator over `&i32`
/// satisfies `ForwardIteratorOfType<&i32>`, not `ForwardIteratorOfType<i32>`. The
/// [`crate::is_forward_iterator_of_type!`] query is looser and accepts either.
///
/// This is blanket implemented, so there's nothing to implement by hand.
///
/// ```
/// use r3bl_types::ForwardIteratorOfType;
///
/// fn count_then_sum(it: impl ForwardIteratorOfType<u32>) -> (usize, u32) {
///     (it.clone().count(), it.sum())
/// }
///
/// assert_eq!(count_then_sum([1, 2, 3].into_iter()), (3, 6));
/// ```
///
/// A draining iterator is single pass, so it's rejected.
///
/// ```compile_fail
/// use r3bl_types::ForwardIteratorOfType;
///
/// fn count_then_sum(it: impl ForwardIteratorOfType<u32>) -> (usize, u32) {
///     (it.clone().count(), it.sum())
/// }
///
/// let mut vec = vec![1_u32, 2, 3];
/// count_then_sum(vec.drain(..));
/// ```
pub trait ForwardIteratorOfType<T>: Iterator<Item = T> + Clone {}

impl<It, T> ForwardIteratorOfType<T> for It where It: Iterator<Item = T> + Clone {}

/// Used by [`crate::is_forward_iterator_of_type!`]. The inherent `VALUE` only exists when
/// the bound holds. Otherwise path resolution falls through to the blanket trait
/// [`NotForwardIteratorOfType`].
#[doc(hidden)]
#[derive(Debug)]
pub struct IsForwardIteratorOfType<It: ?Sized, T: ?Sized>(
    PhantomData<fn() -> (*const It, *const T)>,
);

impl<It, T> IsForwardIteratorOfType<It, T>
where
    It: ForwardIteratorOfType<T>,
{
    pub const VALUE: bool = true;
}

/// Used by [`crate::is_forward_iterator_of_type!`]. Same as [`IsForwardIteratorOfType`],
/// for iterators that yield `&T` (eg, `slice::Iter<'_, T>`).
#[doc(hidden)]
#[derive(Debug)]
pub struct IsForwardIteratorOfRefs<It: ?Sized, T: ?Sized>(
    PhantomData<fn() -> (*const It, *const T)>,
);

impl<'a, It, T: 'a> IsForwardIteratorOfRefs<It, T>
where
    It: ForwardIteratorOfType<&'a T>,
{
    pub const VALUE: bool = true;
}

#[doc(hidden)]
pub trait NotForwardIteratorOfType {
    const VALUE: bool = false;
}

impl<U: ?Sized> NotForwardIteratorOfType for U {}

/// Answers "is `$it` a re-walkable iterator over `$t`?" as a `const bool`. The items
/// may be `$t` values or `&$t` references, since walking storage w/ `slice::Iter` yields
/// references. Any other item type is `false`, so is a single pass iterator. A type that
/// isn't an iterator at all is simply `false`, not a compile error.
///
/// The answer is only meaningful for concrete types. Inside a generic function, use the
/// [`crate::ForwardIteratorOfType`] bound instead.
///
/// ```
/// use r3bl_types::is_forward_iterator_of_type;
///
/// const RANGE_OK: bool = is_forward_iterator_of_type!(std::ops::Range<i32>, i32);
/// const SLICE_OK: bool = is_forward_iterator_of_type!(std::slice::Iter<'static, i32>, i32);
/// const WRONG_ITEM: bool = is_forward_iterator_of_type!(std::ops::Range<i32>, i64);
/// const NOT_AN_ITERATOR: bool = is_forward_iterator_of_type!(i32, i32);
///
/// assert!(RANGE_OK);
/// assert!(SLICE_OK);
/// assert!(!WRONG_ITEM);
/// assert!(!NOT_AN_ITERATOR);
/// ```
#[macro_export]
macro_rules! is_forward_iterator_of_type {
    ($it:ty, $t:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::NotForwardIteratorOfType as _;
        <$crate::IsForwardIteratorOfType<$it, $t>>::VALUE
            || <$crate::IsForwardIteratorOfRefs<$it, $t>>::VALUE
    }};
}

/// Fails to compile unless [`crate::is_forward_iterator_of_type!`] is `true` for `$it`
/// and `$t`. Can be used at item level or inside a function body, w/ concrete types.
///
/// ```
/// r3bl_types::assert_forward_iterator_of_type!(std::vec::IntoIter<String>, String);
/// r3bl_types::assert_forward_iterator_of_type!(std::slice::Iter<'static, u8>, u8);
/// ```
///
/// ```compile_fail
/// r3bl_types::assert_forward_iterator_of_type!(std::vec::Drain<'static, u8>, u8);
/// ```
///
/// ```compile_fail
/// r3bl_types::assert_forward_iterator_of_type!(std::slice::Iter<'static, u8>, u16);
/// ```
#[macro_export]
macro_rules! assert_forward_iterator_of_type {
    ($it:ty, $t:ty $(,)?) => {
        const _: () = ::core::assert!(
            $crate::is_forward_iterator_of_type!($it, $t),
            "not a re-walkable iterator over the requested item type"
        );
    };
}

#[cfg(test)]
mod tests {
    use std::{collections::{BTreeMap, HashSet, btree_map, hash_set},
              io::{Bytes, Empty},
              iter::Copied,
              ops::Range,
              slice,
              vec};

    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, is_forward_iterator_of_type};

    #[derive(Debug)]
    struct SinglePass(u8);

    impl Iterator for SinglePass {
        type Item = u8;
        fn next(&mut self) -> Option<u8> {
            self.0 = self.0.checked_sub(1)?;
            Some(self.0)
        }
    }

    #[derive(Debug, Clone)]
    struct Countdown(u8);

    impl Iterator for Countdown {
        type Item = u8;
        fn next(&mut self) -> Option<u8> {
            self.0 = self.0.checked_sub(1)?;
            Some(self.0)
        }
    }

    #[test_case(is_forward_iterator_of_type!(slice::Iter<'static, i32>, &'static i32), true; "slice iter yields refs")]
    #[test_case(is_forward_iterator_of_type!(slice::Iter<'static, i32>, i32), true; "slice iter over the element type")]
    #[test_case(is_forward_iterator_of_type!(hash_set::Iter<'static, String>, String), true; "hash set iter over the element type")]
    #[test_case(is_forward_iterator_of_type!(Copied<slice::Iter<'static, i32>>, i32), true; "copied slice iter")]
    #[test_case(is_forward_iterator_of_type!(Range<i32>, i32), true; "range exact item")]
    #[test_case(is_forward_iterator_of_type!(Range<i32>, i64), false; "range widened item")]
    #[test_case(is_forward_iterator_of_type!(vec::IntoIter<String>, String), true; "owning vec iter")]
    #[test_case(is_forward_iterator_of_type!(btree_map::Iter<'static, i32, char>, (&'static i32, &'static char)), true; "bidirectional btree iter")]
    #[test_case(is_forward_iterator_of_type!(hash_set::Iter<'static, u8>, &'static u8), true; "hash set iter")]
    #[test_case(is_forward_iterator_of_type!(Countdown, u8), true; "user clone iterator")]
    fn test_accepts_forward_iterators(actual: bool, expected: bool) {
        assert_eq2!(actual, expected);
    }

    #[test_case(is_forward_iterator_of_type!(i32, i32), false; "not an iterator")]
    #[test_case(is_forward_iterator_of_type!(Vec<i32>, i32), false; "collection is not an iterator")]
    #[test_case(is_forward_iterator_of_type!(vec::Drain<'static, i32>, i32), false; "draining is single pass")]
    #[test_case(is_forward_iterator_of_type!(Bytes<Empty>, std::io::Result<u8>), false; "reader is single pass")]
    #[test_case(is_forward_iterator_of_type!(SinglePass, u8), false; "user non clone iterator")]
    #[test_case(is_forward_iterator_of_type!(slice::Iter<'static, i32>, i64), false; "slice iter widened item")]
    #[test_case(is_forward_iterator_of_type!(slice::Iter<'static, i32>, &'static &'static i32), false; "slice iter double ref")]
    #[test_case(is_forward_iterator_of_type!(vec::Drain<'static, &'static i32>, i32), false; "draining refs is single pass")]
    fn test_rejects_everything_else(actual: bool, expected: bool) {
        assert_eq2!(actual, expected);
    }

    #[test]
    fn test_single_pass_is_still_an_iterator() {
        assert_eq2!(SinglePass(3).collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_usable_in_const_context() {
        const CHECKS: [bool; 2] = [
            is_forward_iterator_of_type!(Range<u8>, u8),
            is_forward_iterator_of_type!(Range<u8>, u16),
        ];
        assert_eq2!(CHECKS, [true, false]);
    }

    #[test]
    fn test_bound_allows_walking_twice() {
        fn min_and_max(it: impl ForwardIteratorOfType<u8>) -> (Option<u8>, Option<u8>) {
            (it.clone().min(), it.max())
        }

        assert_eq2!(min_and_max(Countdown(4)), (Some(0), Some(3)));

        let set: HashSet<u8> = [7, 1, 4].into_iter().collect();
        assert_eq2!(min_and_max(set.iter().copied()), (Some(1), Some(7)));
    }

    #[test]
    fn test_bound_over_borrowed_items() {
        fn keys_twice<'a>(
            it: impl ForwardIteratorOfType<(&'a i32, &'a char)>,
        ) -> (usize, i32) {
            (it.clone().count(), it.map(|(key, _)| *key).sum())
        }

        let map = BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        assert_eq2!(keys_twice(map.iter()), (3, 6));
    }

    crate::assert_forward_iterator_of_type!(Copied<slice::Iter<'static, u8>>, u8);
    crate::assert_forward_iterator_of_type!(slice::Iter<'static, u8>, u8);
    crate::assert_forward_iterator_of_type!(Countdown, u8);
}
