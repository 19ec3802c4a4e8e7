//! Error types for the fallible list and table operations.

use thiserror::Error;

/// Errors returned by [`LinkedList`](crate::LinkedList) and
/// [`HashTable`](crate::HashTable).
///
/// Both variants are local and recoverable: the structure is left untouched
/// when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// [`HashTable::insert_list_into_map`](crate::HashTable::insert_list_into_map)
    /// was asked to install a list into a bucket that already holds one.
    #[error("bucket {bucket} already holds a list")]
    BucketOccupied {
        /// The hash code of the occupied bucket
        bucket: i32,
    },

    /// [`LinkedList::find_k_to_last`](crate::LinkedList::find_k_to_last) was
    /// called with `k` outside `1..=len`.
    #[error("k-th to last index {k} is out of range for a list of length {len}")]
    OutOfRange {
        /// The requested position, counted from the end
        k: usize,
        /// The length of the list at the time of the call
        len: usize,
    },
}

/// Result type specialized for this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
