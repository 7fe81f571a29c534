//! Ready-made leaf validators and pipeline transforms
//!
//! This catalogue depends on nothing from the engine beyond the leaf-test
//! and transform contracts; everything here could equally live in caller
//! code. Grouped by subject:
//!
//! - **String**: [`not_empty`], [`length_range`], [`contains`],
//!   [`ends_with`], [`equals`]
//! - **Bytes**: [`bytes_min`], [`bytes_max`], [`valid_utf8`]
//! - **Numeric**: [`in_range`], [`equal_to`]
//! - **Nullable**: [`required`]
//! - **Transforms**: [`as_bytes`], [`parse_int`]

pub mod bytes;
pub mod convert;
pub mod nullable;
pub mod numeric;
pub mod string;

pub use bytes::{bytes_max, bytes_min, valid_utf8};
pub use convert::{as_bytes, parse_int};
pub use nullable::required;
pub use numeric::{equal_to, in_range};
pub use string::{contains, ends_with, equals, length_range, not_empty};
