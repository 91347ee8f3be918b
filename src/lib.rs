#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod hash;
pub mod order;
pub mod table;

pub use hash::HashWidth;
pub use hash::InvalidWidth;
pub use hash::string_hash;
pub use order::reorder;
pub use table::SlotTable;
