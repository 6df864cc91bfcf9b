// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Compile time checks on iterator types.
//!
//! "Forward or better" means the iterator can be walked more than once. In Rust that
//! capability is [`Clone`]: cloning an iterator snapshots its position, and each copy
//! can be advanced independently. Single pass iterators (draining, reading from a
//! stream, etc) are not [`Clone`].
//!
//! | Item                                | Use it when                                                |
//! |-------------------------------------|------------------------------------------------------------|
//! | [`ForwardIteratorOfType`]           | You want a generic bound that rejects bad types outright.  |
//! | [`is_forward_iterator_of_type!`]    | You want a `const bool` answer, `T` or `&T` items count.   |
//! | [`assert_forward_iterator_of_type!`]| You want a compile error at item level for a bad type.     |

// Attach sources.
pub mod forward_iterator_of_type;

// Re-export.
pub use forward_iterator_of_type::*;
