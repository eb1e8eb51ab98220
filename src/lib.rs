//! An ordered, rank-indexed sorted set: `(score, member)` pairs with unique
//! members, kept sorted lexicographically by `(score, member)` and supporting
//! `O(log n)` insertion, removal, rank lookup, and windowed range queries by
//! rank or by score, in either direction.
//!
//! The ordering backbone is a skip list, which conceptually resembles:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where each node `[x]` has links to nodes further down the list, allowing
//! the algorithms to skip ahead. Every link additionally records its *span*,
//! the number of nodes it crosses, so the 1-based rank of any element falls
//! out of the descent itself rather than a walk along the base level.
//!
//! Two types are exported:
//!
//! - [`RankedSkipList`] is the span-augmented skip list over `(score, member)`
//!   pairs. It trusts its caller never to insert the same pair twice.
//! - [`SortedSet`] composes the skip list with a member-to-score hash index,
//!   enforcing member uniqueness and adding member-centric operations: rank
//!   and reverse rank, rank- and score-windowed ranges, and top/bottom
//!   retention. It is the intended entry point for all mutation.
//!
//! Nodes live in a contiguous arena and refer to each other through copyable
//! handles; the crate contains no `unsafe` code. Tower heights come from an
//! injectable, seedable [`level_generator::LevelGenerator`], so structural
//! layouts can be made deterministic in tests.
//!
//! Everything is single-threaded and synchronous: no operation suspends,
//! blocks, or performs I/O, and no internal locking is provided. Concurrent
//! use must serialize operations through an external lock.

pub mod level_generator;
mod skiplist;
mod skipnode;
mod sorted_set;

pub use crate::skiplist::{Iter, RankedSkipList, MAX_LEVEL};
pub use crate::sorted_set::SortedSet;
