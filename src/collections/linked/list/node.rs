use std::ptr::NonNull;

pub(crate) type Link = Option<NodePtr>;

// NOTE: Nodes are allocated with Box and released with Box::from_raw, so every
// NodePtr is backed by a live allocation until take_node consumes it. The list
// is the only owner of its nodes; NodePtr copies never outlive the list.

#[derive(Debug)]
pub(crate) struct NodePtr(NonNull<Node>);

impl NodePtr {
    pub(crate) fn value(self) -> i64 {
        // SAFETY: The pointee is live until take_node is called on this node.
        unsafe { (*self.0.as_ptr()).value }
    }

    pub(crate) fn next(&self) -> &Link {
        // SAFETY: The pointee is live until take_node is called on this node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub(crate) fn next_mut(&self) -> &mut Link {
        // SAFETY: The pointee is live until take_node is called on this node.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub(crate) fn from_node(node: Node) -> NodePtr {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub(crate) fn take_node(self) -> Node {
        // SAFETY: The pointer came from Box::leak in from_node and this is the
        // single point where the allocation is reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl Clone for NodePtr {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl Copy for NodePtr {}

impl PartialEq for NodePtr {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) next: Link,
}
