#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod error;
pub mod hash_table;
pub mod linked_list;
pub mod search;

extern crate alloc;

pub use error::Error;
pub use error::Result;
pub use hash_table::Entry;
pub use hash_table::HashTable;
pub use hash_table::hash;
pub use linked_list::LinkedList;
pub use linked_list::ListNode;
pub use search::binary_search;
