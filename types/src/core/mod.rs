// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common;
pub mod coordinates;
pub mod decl_macros;
pub mod iter_check;
pub mod op_result;
pub mod slice;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use coordinates::*;
pub use iter_check::*;
pub use op_result::*;
pub use slice::*;
