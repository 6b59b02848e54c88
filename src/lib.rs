#![cfg_attr(not(test), no_std)]

//! Generic containers over owned payloads: a doubly linked list and a
//! fixed-size separate-chaining hash table. Payload behavior comes from
//! ordinary trait bounds (`Display` for stringification, `Ord`/`PartialEq`
//! for ordering and search) instead of caller-supplied function pointers;
//! the one remaining callback seam is [`traits::BucketHash`].

extern crate alloc;

pub mod hash_table;
pub mod linked_list;
pub mod traits;

pub use hash_table::HashTable;
pub use linked_list::LinkedList;
pub use traits::{BucketHash, HashFn, ModHash};
