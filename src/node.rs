//! Node representation shared by every queue algorithm.
//!
//! Each element lives in its own `Rc<RefCell<Node<T>>>`. Strong references
//! flow downward and sideways (`children_head`, `next`), so every node is
//! owned by exactly one link: the queue's root-list head, a parent's
//! `children_head`, or a sibling's `next`. Parent references are weak to
//! keep the graph acyclic for `Rc`. This is also what makes meld cheap:
//! whole trees move between queues by relinking, never by reallocation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub(crate) type NodeRef<T> = Rc<RefCell<Node<T>>>;
pub(crate) type NodePtr<T> = Option<NodeRef<T>>;
pub(crate) type WeakNodeRef<T> = Weak<RefCell<Node<T>>>;

/// One element of a queue together with its structural links.
///
/// `order` is the binomial-tree rank: a node of order `k` has exactly `k`
/// children of orders `k-1, k-2, ..., 0` in `children_head` list order.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Back-reference to the parent, `None` for a tree root.
    pub(crate) parent: Option<WeakNodeRef<T>>,
    /// First child; children are linked through `next` in decreasing order.
    pub(crate) children_head: NodePtr<T>,
    /// Next sibling, or next root when this node is in a root list.
    pub(crate) next: NodePtr<T>,
    /// Rank of the subtree rooted here; equals the number of children.
    pub(crate) order: usize,
}

impl<T> Node<T> {
    /// Allocates a detached rank-0 node holding `value`.
    pub(crate) fn new_detached(value: T) -> NodeRef<T> {
        Rc::new(RefCell::new(Node {
            value,
            parent: None,
            children_head: None,
            next: None,
            order: 0,
        }))
    }

    /// Resets all structural fields so membership state is unambiguous.
    pub(crate) fn detach(&mut self) {
        self.parent = None;
        self.children_head = None;
        self.next = None;
        self.order = 0;
    }

    /// The parent as a strong reference, `None` for roots.
    pub(crate) fn parent_node(&self) -> NodePtr<T> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}

/// Reverses a children list into a standalone root list, clearing every
/// `parent` on the way. Children are stored in decreasing order, so the
/// reversed list comes out in the increasing order a root list requires.
pub(crate) fn subtree_list_to_heap_list<T>(head: NodePtr<T>) -> NodePtr<T> {
    let mut new_head: NodePtr<T> = None;
    let mut node = head;
    while let Some(n) = node {
        let next = {
            let mut nb = n.borrow_mut();
            let next = nb.next.take();
            nb.next = new_head.take();
            nb.parent = None;
            next
        };
        new_head = Some(n);
        node = next;
    }
    new_head
}

/// Pointer equality over optional node references, `None == None`.
pub(crate) fn ptr_eq_opt<T>(a: &NodePtr<T>, b: &NodePtr<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
