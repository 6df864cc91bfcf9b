// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Exercises the crate only through its public API, the way a downstream crate would.

use r3bl_types::{ForwardIteratorOfType, OpResult, OpResultAccessError, OperationType,
                 Slice, SliceError, SliceRef, assert_eq2,
                 assert_forward_iterator_of_type, error, is_forward_iterator_of_type,
                 len, ok};

mod op_result_scenarios {
    use super::*;

    #[test]
    fn test_success_holds_value() {
        let res: OpResult<i32, i32> = ok(10);
        assert!(res.is_success());
        assert_eq2!(res.operation_type(), OperationType::Ok);
        assert_eq2!(
            res.clone().try_unwrap_error(),
            Err(OpResultAccessError::UnwrapErrorOnOk)
        );
        assert_eq2!(res.unwrap(), 10);
    }

    #[test]
    #[should_panic(expected = "on an `Ok` value")]
    fn test_success_error_accessor_panics() {
        let res: OpResult<i32, i32> = ok(10);
        let _unused = res.unwrap_error();
    }

    #[test]
    fn test_failure_holds_error() {
        let res: OpResult<i32, i32> = error(2);
        assert!(!res.is_success());
        assert_eq2!(res.operation_type(), OperationType::Err);
        assert_eq2!(
            res.clone().try_unwrap(),
            Err(OpResultAccessError::UnwrapOnErr { message: None })
        );
        assert_eq2!(res.unwrap_error(), 2);
    }

    #[test]
    #[should_panic(expected = "on an `Err` value")]
    fn test_failure_success_accessor_panics() {
        let res: OpResult<i32, i32> = error(2);
        let _unused = res.unwrap();
    }

    #[test]
    fn test_question_mark_through_miette() -> miette::Result<()> {
        fn load(ok_path: bool) -> OpResult<&'static str, std::io::Error> {
            if ok_path {
                ok("contents")
            } else {
                r3bl_types::error_with_message(
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                    "reading settings",
                )
            }
        }

        assert_eq2!(load(true).into_miette_result()?, "contents");
        let report = load(false).into_miette_result().unwrap_err();
        assert_eq2!(report.to_string(), "reading settings");
        Ok(())
    }
}

mod slice_scenarios {
    use super::*;

    #[test]
    fn test_shared_read_only_views() {
        let storage = vec![3, 1, 4, 1, 5];
        let whole = SliceRef::from(&storage);
        let tail = SliceRef::try_from_parts(&storage, 2_usize, 3_usize).unwrap();

        assert_eq2!(whole[2], tail[0]);
        assert_eq2!(tail.iter().copied().collect::<Vec<_>>(), vec![4, 1, 5]);
        assert_eq2!(
            whole.try_at(-1),
            Err(SliceError::IndexOutOfRange {
                index: -1,
                length: len(5)
            })
        );
    }

    #[test]
    fn test_checked_random_access() {
        let mut storage = [1, 2, 3, 4, 5];
        let slice = Slice::new(&mut storage);
        assert_eq2!(slice[0], 1);
        assert_eq2!(slice[4], 5);
        assert_eq2!(
            slice.try_at(10),
            Err(SliceError::IndexOutOfRange {
                index: 10,
                length: len(5)
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_ten_panics() {
        let mut storage = [1, 2, 3, 4, 5];
        let slice = Slice::new(&mut storage);
        let _unused = slice[10];
    }

    #[test]
    fn test_mutable_traversal_writes_storage() {
        let mut storage = [1, 2, 3, 4, 5];
        let mut slice = Slice::new(&mut storage);
        for it in &mut slice {
            *it += 1;
        }
        assert_eq2!(storage, [2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_write_then_read_back() {
        let mut storage = vec![0_u8; 8];
        let mut slice = Slice::from(&mut storage);
        for i in 0..8_u8 {
            slice[i] = i * 3;
        }
        for i in 0..8_u8 {
            assert_eq2!(slice[i], i * 3);
        }
    }
}

mod iter_check_scenarios {
    use super::*;

    assert_forward_iterator_of_type!(std::ops::Range<u32>, u32);

    fn first_and_count<It: ForwardIteratorOfType<u32>>(it: It) -> (Option<u32>, usize) {
        (it.clone().next(), it.count())
    }

    #[test]
    fn test_forward_iterator_bound() {
        assert_eq2!(first_and_count(3..6), (Some(3), 3));
    }

    #[test]
    fn test_const_query() {
        const EXACT: bool = is_forward_iterator_of_type!(std::ops::Range<u32>, u32);
        const WIDENED: bool = is_forward_iterator_of_type!(std::ops::Range<u32>, u64);
        const NOT_ITER: bool = is_forward_iterator_of_type!(String, char);
        const VEC_ITER: bool = is_forward_iterator_of_type!(std::slice::Iter<'static, u32>, u32);
        assert_eq2!(
            (EXACT, WIDENED, NOT_ITER, VEC_ITER),
            (true, false, false, true)
        );
    }
}
