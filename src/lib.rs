//! A skiplist is a way of storing elements in such a way that elements can be
//! efficiently searched, inserted and removed, all in `O(log(n))` on average.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where each node `[x]` has references to nodes further down the list,
//! allowing the algorithm to effectively skip ahead.
//!
//! The [`SkipList`] in this crate is an ordered multiset: it keeps its
//! elements sorted by a caller-supplied comparison function and keeps every
//! copy of equal elements. Besides the usual iterators, it hands out
//! [`Cursor`]s that can remove the element they have just visited while
//! keeping every level of the list consistent.
//!
//! ```
//! use leveled_skiplist::SkipList;
//!
//! let mut skiplist = SkipList::with_comp(|a: &&str, b: &&str| a.cmp(b));
//! skiplist.extend(["gibbon", "ape", "gibbon", "ant"]);
//! assert!(skiplist.contains(&"ape"));
//!
//! let mut cursor = skiplist.cursor_mut();
//! while let Ok(&animal) = cursor.next() {
//!     if animal.starts_with('a') {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(skiplist.iter().copied().collect::<Vec<_>>(), ["gibbon", "gibbon"]);
//! ```

mod arena;
pub mod cursor;
pub mod iter;
pub mod level_generator;
pub mod skiplist;
mod skipnode;

pub use cursor::{Cursor, CursorError, CursorMut};
pub use level_generator::{Geometric, GeometricError, LevelGenerator};
pub use skiplist::{DEFAULT_MAX_HEIGHT, DEFAULT_PROBABILITY, SkipList, Structure};
