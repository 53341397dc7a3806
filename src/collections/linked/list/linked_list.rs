use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Link, Node, NodePtr};
#[doc(inline)]
pub use crate::util::error::{EmptyList, IndexOutOfBounds, ListError};

/// A list with links in one direction, holding [`i64`] values.
///
/// The list stores nothing besides its head link: length is recomputed by
/// traversal and the tail is found by walking, which keeps every invariant in
/// the chain itself.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the
/// LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)` |
/// | `insert_ascending` | `O(n)` |
/// | `front` | `O(1)` |
/// | `search` | `O(n)` |
/// | `find_max/min` | `O(n)` |
/// | `len` | `O(n)` |
/// | `find_nth_from_beginning/end` | `O(n)` |
/// | `find_middle_value` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `delete` | `O(n)` |
/// | `create_cycle` | `O(n)` |
/// | `has_cycle` | `O(n)` |
///
/// # Cyclic Mode
/// [`create_cycle`](LinkedList::create_cycle) links the tail back to the head,
/// making the chain infinite to traverse. Once that has happened, only
/// [`has_cycle`](LinkedList::has_cycle), another `create_cycle` and dropping
/// the list are defined; every other operation assumes the chain terminates
/// and will walk forever on a cyclic list. That precondition is documented,
/// not guarded.
pub struct LinkedList {
    pub(crate) head: Link,
}

impl LinkedList {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList {
        LinkedList { head: None }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first value in the list, if it exists.
    pub fn front(&self) -> Option<i64> {
        self.head.map(NodePtr::value)
    }

    /// Adds the provided value at the front of the list. The previous head
    /// becomes the second element.
    pub fn insert(&mut self, value: i64) {
        self.head = Some(NodePtr::from_node(Node {
            value,
            next: self.head,
        }));
    }

    /// Splices the provided value into an ascending-sorted list, keeping it
    /// sorted: the new node lands immediately before the first node whose
    /// value is greater than or equal to `value`, or at the tail if `value` is
    /// the new maximum.
    ///
    /// The sort invariant is the caller's to maintain: the list must already
    /// be ascending, which holds whenever it was built by this method alone.
    /// Mixing in [`insert`](LinkedList::insert) calls breaks it.
    pub fn insert_ascending(&mut self, value: i64) {
        match self.head {
            Some(head) if head.value() < value => {
                let mut current = head;
                while let Some(next) = *current.next() {
                    if value <= next.value() {
                        break;
                    }
                    current = next;
                }

                let node = NodePtr::from_node(Node {
                    value,
                    next: *current.next(),
                });
                *current.next_mut() = Some(node);
            },
            // Empty list, or the new value belongs before the head.
            _ => self.insert(value),
        }
    }

    /// Returns the values in the list, head to tail. This is the canonical
    /// observation of list contents; the [`Display`] impl renders the same
    /// sequence for humans.
    pub fn visit(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Returns true if any node holds the provided value. Scans from the
    /// head and stops at the first match.
    pub fn search(&self, value: i64) -> bool {
        for element in self.iter() {
            if element == value {
                return true;
            }
        }
        false
    }

    /// Returns the largest value in the list, or [`EmptyList`] if there are no
    /// nodes to seed the scan with.
    ///
    /// An error rather than a sentinel: any [`i64`] the list could hold is a
    /// legitimate maximum, so no in-band value can mean "no data".
    pub fn find_max(&self) -> Result<i64, EmptyList> {
        let Some(head) = self.head else {
            return Err(EmptyList);
        };

        let mut max = head.value();
        let mut current = *head.next();
        while let Some(node) = current {
            if node.value() > max {
                max = node.value();
            }
            current = *node.next();
        }
        Ok(max)
    }

    /// Returns the smallest value in the list, or [`EmptyList`] if there are
    /// no nodes to seed the scan with.
    pub fn find_min(&self) -> Result<i64, EmptyList> {
        let Some(head) = self.head else {
            return Err(EmptyList);
        };

        let mut min = head.value();
        let mut current = *head.next();
        while let Some(node) = current {
            if node.value() < min {
                min = node.value();
            }
            current = *node.next();
        }
        Ok(min)
    }

    /// Returns the length of the LinkedList by counting nodes in a full
    /// traversal. An empty list has length 0.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head;
        while let Some(node) = current {
            count += 1;
            current = *node.next();
        }
        count
    }

    /// Returns the value `n` steps from the head, 0-indexed, or
    /// [`IndexOutOfBounds`] when `n` is not below the list's length.
    pub fn find_nth_from_beginning(&self, n: usize) -> Result<i64, IndexOutOfBounds> {
        let mut remaining = n;
        let mut current = self.head;
        while let Some(node) = current {
            if remaining == 0 {
                return Ok(node.value());
            }
            remaining -= 1;
            current = *node.next();
        }

        Err(IndexOutOfBounds { index: n, len: self.len() })
    }

    /// Returns the value `n` steps from the tail, 0-indexed, in a single pass:
    /// a lookahead cursor advances `n + 1` steps from the head, then a
    /// trailing cursor follows in lockstep until the lookahead falls off the
    /// end. Fails with [`IndexOutOfBounds`] when the list has fewer than
    /// `n + 1` nodes.
    pub fn find_nth_from_end(&self, n: usize) -> Result<i64, IndexOutOfBounds> {
        let mut lookahead = self.head;
        for _ in 0..=n {
            match lookahead {
                Some(node) => lookahead = *node.next(),
                None => return Err(IndexOutOfBounds { index: n, len: self.len() }),
            }
        }

        // SAFETY: The lookahead advanced n + 1 steps without falling off, so
        // the list has at least one node.
        let mut trailing = unsafe { self.head.unwrap_unchecked() };
        while let Some(node) = lookahead {
            lookahead = *node.next();
            // SAFETY: trailing sits n + 1 nodes behind a node that is still in
            // the list, so it must have a successor.
            trailing = unsafe { (*trailing.next()).unwrap_unchecked() };
        }
        Ok(trailing.value())
    }

    /// Returns the value of the middle node: a slow cursor starts at the head,
    /// a fast one a single node ahead, and each round the slow cursor moves
    /// one node for the fast cursor's two. When the fast cursor runs out, the
    /// slow one sits on the middle. Even-length lists yield the lower middle,
    /// index `(len - 1) / 2`. Fails with [`EmptyList`] when there is no
    /// middle to speak of.
    pub fn find_middle_value(&self) -> Result<i64, EmptyList> {
        let Some(head) = self.head else {
            return Err(EmptyList);
        };

        let mut slow = head;
        let mut fast = *head.next();
        while let Some(node) = fast {
            let Some(ahead) = *node.next() else {
                break;
            };
            // SAFETY: The fast cursor sits ahead of the slow one and is still
            // in the list, so the slow cursor has a successor.
            slow = unsafe { (*slow.next()).unwrap_unchecked() };
            fast = *ahead.next();
        }
        Ok(slow.value())
    }

    /// Reverses the direction of every link, making the former tail the head.
    /// Runs in one pass with no extra allocation; a no-op on empty and
    /// single-element lists.
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut current = self.head;
        while let Some(node) = current {
            current = mem::replace(node.next_mut(), prev);
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Removes the first node holding the provided value, scanning from the
    /// head. Deleting a value that isn't present is a no-op, not an error.
    pub fn delete(&mut self, value: i64) {
        let Some(head) = self.head else {
            return;
        };

        if head.value() == value {
            self.head = head.take_node().next;
            return;
        }

        let mut current = head;
        while let Some(next) = *current.next() {
            if next.value() == value {
                *current.next_mut() = next.take_node().next;
                return;
            }
            current = next;
        }
    }

    /// Links the tail's next pointer back to the head, putting the list into
    /// cyclic mode (see the type-level docs for what remains defined there).
    /// Fails with [`EmptyList`] when there is no tail to relink; calling it on
    /// an already-cyclic list changes nothing.
    pub fn create_cycle(&mut self) -> Result<(), EmptyList> {
        let Some(head) = self.head else {
            return Err(EmptyList);
        };

        let mut current = head;
        while let Some(next) = *current.next() {
            // The only cycle this list ever forms points at the head, so
            // finding the head again means the tail walk would never end.
            if next == head {
                return Ok(());
            }
            current = next;
        }

        *current.next_mut() = Some(head);
        Ok(())
    }

    /// Returns true if following next links from the head revisits a node,
    /// using Floyd's tortoise and hare: the hare starts one node ahead and
    /// moves two nodes for the tortoise's one, so on a cyclic list it laps the
    /// tortoise in at most one round of the cycle while an acyclic list stops
    /// it at the genuine end. Terminates in `O(len)` on both shapes, which is
    /// why the two cursors beat visited-set tracking here: no auxiliary
    /// memory, bounded even on an infinite-to-traverse chain.
    pub fn has_cycle(&self) -> bool {
        let Some(head) = self.head else {
            return false;
        };

        let mut slow = head;
        let mut fast = *head.next();
        while let Some(node) = fast {
            if node == slow {
                return true;
            }
            let Some(ahead) = *node.next() else {
                return false;
            };
            fast = *ahead.next();
            // SAFETY: The hare is ahead of the tortoise (or both are inside a
            // cycle), so the tortoise always has a successor here.
            slow = unsafe { (*slow.next()).unwrap_unchecked() };
        }
        false
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LinkedList {
    /// Deep copy: clones every node, not just the head link. Assumes acyclic
    /// mode like the other traversals.
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl Drop for LinkedList {
    fn drop(&mut self) {
        let Some(head) = self.head else {
            return;
        };

        let mut current = Some(head);
        while let Some(ptr) = current {
            let node = ptr.take_node();
            // create_cycle only ever links the tail back to the head, so a
            // next pointer equal to the original head marks the end of a
            // cyclic list. Compared by address only; the head node itself was
            // freed on the first pass through this loop.
            current = match node.next {
                Some(next) if next == head => None,
                next => next,
            };
        }
    }
}

impl Debug for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|value| value.to_string())
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
