//! Linked collection types. Revolves around [`LinkedList`] and its traversal
//! queries.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
