use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, LinkedList};

impl LinkedList {
    /// Returns an iterator over the values in the list, head to tail. Walks
    /// next links, so it assumes acyclic mode like every other traversal.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i64;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            current: self.head,
            _phantom: PhantomData,
        }
    }
}

/// Borrowing iterator over a [`LinkedList`]. Values are [`i64`]s, so it yields
/// them by copy rather than by reference.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) current: Link,
    pub(crate) _phantom: PhantomData<&'a LinkedList>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = *node.next();
        Some(node.value())
    }
}

impl FusedIterator for Iter<'_> {}

impl FromIterator<i64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter.into_iter() {
            list.insert(value);
        }
        // Head insertion reversed the input; flip it back.
        list.reverse();
        list
    }
}
