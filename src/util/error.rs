use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The list has no nodes, so there is no value to answer with.
///
/// Returned by the queries that must be seeded with at least one element
/// (min/max/middle) and by cycle creation, which needs a tail to relink.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty list!")
    }
}

impl Error for EmptyList {}

/// The requested position lies past the end of the list.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Aggregate of every failure the list can report, for callers that chain
/// differently-fallible queries behind one error type.
#[derive(Debug, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ListError {
    EmptyList(EmptyList),
    IndexOutOfBounds(IndexOutOfBounds),
}
