//! A singly linked list over integer values, built around the classic
//! node-traversal algorithms: the two-pointer techniques (middle finding,
//! nth-from-end, Floyd cycle detection) and the pointer-rewiring mutations
//! (reverse, delete, ascending insert).
//!
//! # Purpose
//! Writing a linked list from raw node pointers is the canonical exercise for
//! understanding ownership of heap allocations, so this crate implements one
//! properly rather than leaning on [`std::collections::LinkedList`]. The list
//! is deliberately non-generic: values are plain [`i64`]s, which keeps the
//! focus on the link manipulation itself.
//!
//! # Cycles
//! Unusually for a list type, [`LinkedList`](collections::linked::LinkedList)
//! can be put into a cyclic state on purpose, where the tail links back to the
//! head. That state exists to exercise Floyd's tortoise-and-hare detection
//! against a genuinely infinite chain; see the type-level docs for which
//! operations remain defined once a cycle exists.
//!
//! # Error Handling
//! Fallible queries return [`Result`]s with small concrete error types that
//! implement [`Error`](std::error::Error), aggregated into an enum for static
//! dispatch. Nothing in the public API panics; list states that make a query
//! unanswerable (an empty list, an index past the end) are reported to the
//! caller instead.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
