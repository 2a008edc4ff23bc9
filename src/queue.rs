//! The priority queue and its five internal algorithms.
//!
//! A [`PriQueue`] is a binomial heap: a root list of binomial trees in
//! strictly increasing rank, one tree per rank at most, like the set bits of
//! the element count in binary. Everything is built from one O(1) primitive
//! (merging two same-rank trees) plus list splicing:
//!
//! - `merge_tree` links two rank-k trees into one rank-(k+1) tree
//! - `list_add_node` adds one tree to a root list, cascading carries like a
//!   binary-counter increment
//! - `binom_heap_union` merges two root lists like binary addition
//! - `decrease_key` relocates a node upward by demoting ancestors into its
//!   vacated position, one pointer splice at a time
//! - `increase_key` rebuilds a node's own subtree from its detached children
//!
//! No operation ever copies or reallocates a subtree; priorities move by
//! relinking alone, so handles stay valid across every mutation except the
//! removal of the element they refer to.

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::compare::{Compare, NaturalOrd};
use crate::node::{ptr_eq_opt, subtree_list_to_heap_list, Node, NodePtr, NodeRef, WeakNodeRef};

/// Error type for handle-based queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The handle no longer refers to a queued element (it was popped or
    /// removed).
    InvalidHandle,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::InvalidHandle => {
                write!(f, "handle no longer refers to a queued element")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Handle to an element in a [`PriQueue`].
///
/// Returned by [`PriQueue::insert`] and used with [`PriQueue::remove`],
/// [`PriQueue::update`], [`PriQueue::update_with`] and [`PriQueue::get`].
/// The handle holds a weak reference, so it can tell whether its element has
/// since been popped or removed, and it never keeps an element alive.
///
/// # Contract
///
/// A handle must only be passed to the queue that created it, or to the
/// queue that absorbed that one through [`PriQueue::meld`]. Handles are
/// cheap to clone and compare by element identity.
pub struct ElemHandle<T> {
    node: WeakNodeRef<T>,
}

impl<T> ElemHandle<T> {
    /// Whether the element this handle refers to is still linked into a
    /// queue. Note that this cannot distinguish *which* queue after a meld.
    pub fn is_linked(&self) -> bool {
        self.node.strong_count() > 0
    }
}

impl<T> Clone for ElemHandle<T> {
    fn clone(&self) -> Self {
        ElemHandle {
            node: self.node.clone(),
        }
    }
}

impl<T> PartialEq for ElemHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(&other.node)
    }
}

impl<T> Eq for ElemHandle<T> {}

impl<T> fmt::Debug for ElemHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElemHandle")
            .field("linked", &self.is_linked())
            .finish()
    }
}

/// Names the link that holds a given position in some list: the queue's
/// root-list head, a node's `children_head` field, or a node's `next` field.
/// The arena-free rendition of a pointer-to-pointer into a singly linked
/// list: a `Slot` stays meaningful while its holder stays in place, even as
/// the nodes around it are respliced.
enum Slot<T> {
    Head,
    Children(NodeRef<T>),
    Next(NodeRef<T>),
}

/// A captured tree position: everything needed to splice some other node
/// into the place a removed node used to occupy.
struct TreePos<T> {
    parent: NodePtr<T>,
    list_pos: Slot<T>,
    children_head: NodePtr<T>,
    order: usize,
}

fn compare_nodes<T, C: Compare<T>>(cmp: &C, a: &NodeRef<T>, b: &NodeRef<T>) -> Ordering {
    let (a, b) = (a.borrow(), b.borrow());
    cmp.compare(&a.value, &b.value)
}

/// Merges two binomial trees of the same order into one of order + 1.
///
/// The smaller root (ties to `a`) becomes the new root; the other tree is
/// prepended to its children list. This is the only place a structural
/// heap-order relationship is ever created.
fn merge_tree<T, C: Compare<T>>(cmp: &C, a: NodeRef<T>, b: NodeRef<T>) -> NodeRef<T> {
    let (new_root, new_subtree) = if compare_nodes(cmp, &a, &b) != Ordering::Greater {
        (a, b)
    } else {
        (b, a)
    };

    {
        let mut root = new_root.borrow_mut();
        {
            let mut subtree = new_subtree.borrow_mut();
            subtree.parent = Some(Rc::downgrade(&new_root));
            subtree.next = root.children_head.take();
        }
        root.children_head = Some(new_subtree);
        root.order += 1;
    }

    new_root
}

/// Adds a single tree to the root list at `head`, merging with same-order
/// heads until the orders differ — a binary-counter increment, with
/// `merge_tree` as the carry. Worst case O(log n), amortized O(1) over
/// consecutive insertions.
fn list_add_node<T, C: Compare<T>>(cmp: &C, head: &mut NodePtr<T>, mut insnode: NodeRef<T>) {
    loop {
        let same_order = match head.as_ref() {
            Some(next) => next.borrow().order == insnode.borrow().order,
            None => false,
        };
        if !same_order {
            break;
        }
        let next = head.take().expect("loop guard checked the head");
        *head = next.borrow_mut().next.take();
        insnode = merge_tree(cmp, next, insnode);
    }

    insnode.borrow_mut().next = head.take();
    *head = Some(insnode);
}

/// Advances the traversal cursor: first child if any, otherwise the next
/// sibling of the nearest ancestor that has one.
fn advance<T>(node: &NodeRef<T>) -> NodePtr<T> {
    let first_child = node.borrow().children_head.clone();
    if first_child.is_some() {
        return first_child;
    }

    let mut cur = Some(node.clone());
    while let Some(c) = cur {
        let (next, parent) = {
            let b = c.borrow();
            (b.next.clone(), b.parent_node())
        };
        if next.is_some() {
            return next;
        }
        cur = parent;
    }
    None
}

/// A priority queue implemented as a binomial heap.
///
/// The only supported lookup is the element with the highest priority, which
/// is the *smallest* value under the queue's comparator. Finding or removing
/// the minimum is O(log n); insertion is O(log n) worst case but O(1)
/// amortized over consecutive insertions; removing or repositioning an
/// arbitrary element through its [`ElemHandle`] is O(log n); and two queues
/// can be melded in O(log n).
///
/// The queue is not thread-safe (it is `!Send`/`!Sync`); callers that share
/// one across threads must serialize every operation externally, including
/// reads.
///
/// # Example
///
/// ```rust
/// use pri_queue::PriQueue;
///
/// let mut pq = PriQueue::new();
/// let handle = pq.insert(30);
/// pq.insert(10);
/// pq.insert(20);
///
/// pq.update_with(&handle, |v| *v = 0).unwrap();
/// assert_eq!(pq.pop_min(), Some(0));
/// assert_eq!(pq.pop_min(), Some(10));
/// ```
pub struct PriQueue<T, C: Compare<T> = NaturalOrd> {
    head: NodePtr<T>,
    cmp: C,
    size: usize,
}

impl<T: Ord> PriQueue<T> {
    /// Creates an empty queue ordered by `T`'s own [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrd)
    }
}

impl<T: Ord> Default for PriQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> PriQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`.
    ///
    /// `cmp` decides which of any two elements is smaller, i.e. has the
    /// higher priority; context travels with the comparator (typically as
    /// closure captures inside an [`FnCompare`](crate::FnCompare)).
    pub fn with_comparator(cmp: C) -> Self {
        PriQueue {
            head: None,
            cmp,
            size: 0,
        }
    }

    /// Number of queued elements. O(1); maintained incrementally, never
    /// recomputed from the structure.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `value`, returning a handle for later [`remove`](Self::remove)
    /// / [`update`](Self::update) calls.
    ///
    /// O(log n) worst case, O(1) amortized over `n` consecutive insertions.
    pub fn insert(&mut self, value: T) -> ElemHandle<T> {
        let node = Node::new_detached(value);
        let handle = ElemHandle {
            node: Rc::downgrade(&node),
        };
        list_add_node(&self.cmp, &mut self.head, node);
        self.size += 1;
        handle
    }

    /// The smallest element, without removing it, or `None` when empty.
    ///
    /// Ties resolve to an arbitrary minimal element, but two consecutive
    /// calls without an intervening mutation return the same element. O(log n).
    pub fn get_min(&self) -> Option<(ElemHandle<T>, &T)> {
        let node = self.min_root()?;
        let handle = ElemHandle {
            node: Rc::downgrade(&node),
        };
        // SAFETY: `min_root` found the node in this queue's own root list,
        // which cannot change while `self` is borrowed, so the value
        // outlives the returned reference and no mutable access can exist
        // alongside it.
        let ptr = node.as_ptr();
        Some((handle, unsafe { &(*ptr).value }))
    }

    /// Removes and returns the smallest element, or `None` when empty.
    /// O(log n).
    pub fn pop_min(&mut self) -> Option<T> {
        let delnode = self.min_root()?;
        self.remove_heap_root(&delnode);
        self.size -= 1;

        delnode.borrow_mut().detach();
        let cell = Rc::try_unwrap(delnode)
            .ok()
            .expect("detached node has no other strong references");
        Some(cell.into_inner().value)
    }

    /// Removes the element `handle` refers to and returns its value.
    ///
    /// O(log n), though with a larger constant than an insertion: the
    /// element is first force-promoted to its tree root, then removed as a
    /// root. Fails with [`QueueError::InvalidHandle`] if the element was
    /// already popped or removed.
    pub fn remove(&mut self, handle: &ElemHandle<T>) -> Result<T, QueueError> {
        let delnode = handle.node.upgrade().ok_or(QueueError::InvalidHandle)?;
        let _ = self.decrease_key(&delnode, true);
        self.remove_heap_root(&delnode);
        self.size -= 1;

        delnode.borrow_mut().detach();
        let cell = Rc::try_unwrap(delnode)
            .ok()
            .expect("detached node has no other strong references");
        Ok(cell.into_inner().value)
    }

    /// Repositions an element after its value changed in a way the
    /// comparator can observe (e.g. through interior mutability).
    ///
    /// Mutating a queued element's comparator-relevant state without a
    /// subsequent `update` leaves the queue silently invalid; prefer
    /// [`update_with`](Self::update_with), which cannot be forgotten halfway.
    /// O(log n).
    pub fn update(&mut self, handle: &ElemHandle<T>) -> Result<(), QueueError> {
        let node = handle.node.upgrade().ok_or(QueueError::InvalidHandle)?;
        self.reposition(&node);
        Ok(())
    }

    /// Mutates the element in place, then repositions it. O(log n).
    ///
    /// ```rust
    /// use pri_queue::PriQueue;
    ///
    /// let mut pq = PriQueue::new();
    /// let h = pq.insert(7);
    /// pq.update_with(&h, |v| *v = 42).unwrap();
    /// assert_eq!(pq.get(&h), Some(&42));
    /// ```
    pub fn update_with<F>(&mut self, handle: &ElemHandle<T>, f: F) -> Result<(), QueueError>
    where
        F: FnOnce(&mut T),
    {
        let node = handle.node.upgrade().ok_or(QueueError::InvalidHandle)?;
        f(&mut node.borrow_mut().value);
        self.reposition(&node);
        Ok(())
    }

    /// Reads the element `handle` refers to, or `None` if it is gone.
    ///
    /// `handle` must have been issued by this queue (or one that was melded
    /// into it); passing a handle from an unrelated queue is a contract
    /// violation and the returned reference may dangle once that queue is
    /// mutated or dropped.
    pub fn get(&self, handle: &ElemHandle<T>) -> Option<&T> {
        let node = handle.node.upgrade()?;
        // SAFETY: the upgrade only shows the node is still linked somewhere;
        // the handle contract is what pins it to this queue's structure,
        // which is frozen for the lifetime of the returned borrow.
        let ptr = node.as_ptr();
        Some(unsafe { &(*ptr).value })
    }

    /// Melds `other` into `self` in O(log n); afterwards `self` contains the
    /// elements of both queues and `other` is consumed. Handles into `other`
    /// remain valid and now refer into `self`.
    pub fn meld(&mut self, mut other: PriQueue<T, C>) {
        let head_b = other.head.take();
        self.binom_heap_union(head_b);
        self.size += other.size;
        other.size = 0;
    }

    /// Drops all elements, leaving the queue empty.
    pub fn clear(&mut self) {
        self.head = None;
        self.size = 0;
    }

    /// Iterates over all elements in an unspecified order — explicitly *not*
    /// priority order; the first element is not even guaranteed to be the
    /// minimum. The borrow taken here makes mutation during iteration a
    /// compile error.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.clone(),
            remaining: self.size,
            _marker: PhantomData,
        }
    }

    /*
     * Root-list plumbing
     */

    fn slot_get(&self, slot: &Slot<T>) -> NodePtr<T> {
        match slot {
            Slot::Head => self.head.clone(),
            Slot::Children(n) => n.borrow().children_head.clone(),
            Slot::Next(n) => n.borrow().next.clone(),
        }
    }

    fn slot_set(&mut self, slot: &Slot<T>, val: NodePtr<T>) {
        match slot {
            Slot::Head => self.head = val,
            Slot::Children(n) => n.borrow_mut().children_head = val,
            Slot::Next(n) => n.borrow_mut().next = val,
        }
    }

    /// Unlinks `delnode` from the list starting at `head`, returning the
    /// slot it occupied. `head` must be the actual head of the containing
    /// list.
    fn list_remove_node(&mut self, head: Slot<T>, delnode: &NodeRef<T>) -> Slot<T> {
        let mut slot = head;
        loop {
            let node = self
                .slot_get(&slot)
                .expect("linked element must be present in its containing list");
            if Rc::ptr_eq(&node, delnode) {
                let rest = node.borrow_mut().next.take();
                self.slot_set(&slot, rest);
                return slot;
            }
            slot = Slot::Next(node);
        }
    }

    fn list_insert_node(&mut self, slot: &Slot<T>, insnode: NodeRef<T>) {
        let rest = self.slot_get(slot);
        insnode.borrow_mut().next = rest;
        self.slot_set(slot, Some(insnode));
    }

    fn containing_list(&self, node: &NodeRef<T>) -> Slot<T> {
        match node.borrow().parent_node() {
            Some(p) => Slot::Children(p),
            None => Slot::Head,
        }
    }

    fn remove_node_from_containing_list(&mut self, delnode: &NodeRef<T>) -> Slot<T> {
        let head = self.containing_list(delnode);
        self.list_remove_node(head, delnode)
    }

    /// Merges the root list `head_b` into this queue's root list, walking
    /// both in rank order like a merge of sorted sequences. Equal ranks move
    /// the A-side tree over to the B-list, where `list_add_node` cascades
    /// the carry. Destroys the B-list. O(log n).
    fn binom_heap_union(&mut self, mut head_b: NodePtr<T>) {
        let mut pnext_a = Slot::Head;
        loop {
            let next_a = match self.slot_get(&pnext_a) {
                Some(n) => n,
                None => break,
            };
            let b = match head_b.clone() {
                Some(b) => b,
                None => break,
            };

            let order_a = next_a.borrow().order;
            let order_b = b.borrow().order;
            if order_b > order_a {
                pnext_a = Slot::Next(next_a);
            } else if order_b < order_a {
                // Move the head of the B-list into the A-list.
                head_b = b.borrow_mut().next.take();
                self.list_insert_node(&pnext_a, b);
            } else {
                // Same rank: pull the A-side tree out and let the B-list
                // absorb it, carries included.
                let rest = next_a.borrow_mut().next.take();
                self.slot_set(&pnext_a, rest);
                list_add_node(&self.cmp, &mut head_b, next_a);
            }
        }

        if head_b.is_some() {
            // A-list exhausted; append the rest of the B-list.
            self.slot_set(&pnext_a, head_b);
        }
    }

    /*
     * Position surgery (decrease/increase-key)
     */

    /// Unlinks `delnode` and captures its position for a later splice.
    /// `delnode` keeps its stale `children_head`; the captured copy is the
    /// authoritative one from here on.
    fn remove_tree_node(&mut self, delnode: &NodeRef<T>) -> TreePos<T> {
        let parent = delnode.borrow().parent_node();
        let head = match parent.as_ref() {
            Some(p) => Slot::Children(p.clone()),
            None => Slot::Head,
        };
        let list_pos = self.list_remove_node(head, delnode);
        let (children_head, order) = {
            let d = delnode.borrow();
            (d.children_head.clone(), d.order)
        };
        TreePos {
            parent,
            list_pos,
            children_head,
            order,
        }
    }

    /// Splices `insnode` into a captured position, adopting the children
    /// recorded there. Does not set `insnode`'s own parent; the caller does.
    fn insert_tree_node(&mut self, pos: TreePos<T>, insnode: &NodeRef<T>) {
        let mut child = pos.children_head.clone();
        while let Some(c) = child {
            c.borrow_mut().parent = Some(Rc::downgrade(insnode));
            child = c.borrow().next.clone();
        }

        insnode.borrow_mut().order = pos.order;
        self.list_insert_node(&pos.list_pos, insnode.clone());
        insnode.borrow_mut().children_head = pos.children_head;
    }

    fn should_decrease(
        &self,
        parent: Option<&NodeRef<T>>,
        node: &NodeRef<T>,
        is_minus_inf: bool,
    ) -> bool {
        match parent {
            Some(p) => is_minus_inf || compare_nodes(&self.cmp, node, p) == Ordering::Less,
            None => false,
        }
    }

    /// Moves `node` upward in its tree until min-heap order is restored, by
    /// demoting each ancestor into the node's vacated position. With
    /// `is_minus_inf` the walk is forced all the way to the root regardless
    /// of the comparator (the removal path). Pure pointer relocation; no
    /// subtree is rebuilt. Returns whether the node moved.
    fn decrease_key(&mut self, node: &NodeRef<T>, is_minus_inf: bool) -> bool {
        {
            let parent = node.borrow().parent_node();
            if !self.should_decrease(parent.as_ref(), node, is_minus_inf) {
                return false;
            }
        }

        let mut current_pos = self.remove_tree_node(node);

        loop {
            let parent = current_pos
                .parent
                .clone()
                .expect("should_decrease guarantees a parent");
            let mut parent_pos = self.remove_tree_node(&parent);
            self.insert_tree_node(current_pos, &parent);

            // If the parent was spliced in at the head of its own former
            // children list, the captured head is stale: the true head is
            // now the parent itself.
            let parent_next = parent.borrow().next.clone();
            if ptr_eq_opt(&parent_pos.children_head, &parent_next) {
                parent_pos.children_head = Some(parent.clone());
            }

            current_pos = parent_pos;

            if !self.should_decrease(current_pos.parent.as_ref(), node, is_minus_inf) {
                break;
            }
        }

        let new_parent = current_pos.parent.clone();
        self.insert_tree_node(current_pos, node);
        node.borrow_mut().parent = new_parent.as_ref().map(Rc::downgrade);

        true
    }

    /// Repositions `node` downward within its own subtree after its value
    /// grew. The node is detached, its children become an independent root
    /// list, and re-adding the node as a fresh rank-0 tree merges the pieces
    /// back into a single valid tree of the original rank, which is spliced
    /// into the original slot. O(log n).
    fn increase_key(&mut self, node: &NodeRef<T>) {
        let parent = node.borrow().parent_node();
        let list_pos = self.remove_node_from_containing_list(node);

        let children = node.borrow_mut().children_head.take();
        let mut head = subtree_list_to_heap_list(children);
        {
            let mut n = node.borrow_mut();
            n.order = 0;
            n.parent = None;
        }
        list_add_node(&self.cmp, &mut head, node.clone());

        let new_root = head.expect("re-added node guarantees a non-empty list");
        self.list_insert_node(&list_pos, new_root.clone());
        new_root.borrow_mut().parent = parent.as_ref().map(Rc::downgrade);
    }

    /// Decrease first (the cheap, common case); if the node did not move,
    /// it may still violate order with its own children, so fall back to
    /// the increase path.
    fn reposition(&mut self, node: &NodeRef<T>) {
        if !self.decrease_key(node, false) {
            self.increase_key(node);
        }
    }

    /// Unlinks a root-list tree and folds its children back into the queue.
    fn remove_heap_root(&mut self, delnode: &NodeRef<T>) {
        self.list_remove_node(Slot::Head, delnode);
        let children = delnode.borrow_mut().children_head.take();
        self.binom_heap_union(subtree_list_to_heap_list(children));
    }

    fn min_root(&self) -> NodePtr<T> {
        let mut min_node = self.head.clone()?;
        let mut node = min_node.borrow().next.clone();
        while let Some(n) = node {
            let next = n.borrow().next.clone();
            if compare_nodes(&self.cmp, &n, &min_node) == Ordering::Less {
                min_node = n;
            }
            node = next;
        }
        Some(min_node)
    }

    /*
     * Debug API
     */

    /// Checks every structural invariant: per-tree rank/child-count/heap-order/
    /// parent-pointer consistency, strictly increasing root ranks, and the
    /// size counter against the actual element count.
    ///
    /// Intended for tests and debugging, not production hot paths.
    pub fn is_valid(&self) -> bool {
        if !self.is_heap_list_order_increasing() {
            return false;
        }

        let mut size = 0usize;
        let mut heap = self.head.clone();
        while let Some(h) = heap {
            if h.borrow().parent_node().is_some() {
                return false;
            }
            match self.binom_tree_size_checked(&h) {
                Some(tree_size) => size += tree_size,
                None => return false,
            }
            heap = h.borrow().next.clone();
        }

        size == self.size
    }

    fn is_heap_list_order_increasing(&self) -> bool {
        let mut node = self.head.clone();
        while let Some(n) = node {
            let next = n.borrow().next.clone();
            if let Some(nx) = next.as_ref() {
                if n.borrow().order >= nx.borrow().order {
                    return false;
                }
            }
            node = next;
        }
        true
    }

    /// Recursively validates one tree, returning its element count, or
    /// `None` on the first violated invariant.
    fn binom_tree_size_checked(&self, root: &NodeRef<T>) -> Option<usize> {
        let mut size = 1usize;
        let mut expected_order = root.borrow().order;

        let mut child = root.borrow().children_head.clone();
        while let Some(c) = child {
            if expected_order == 0 {
                return None; // more children than the rank allows
            }
            expected_order -= 1;

            if c.borrow().order != expected_order {
                return None;
            }
            if compare_nodes(&self.cmp, root, &c) == Ordering::Greater {
                return None;
            }
            let parent_ok = c
                .borrow()
                .parent_node()
                .is_some_and(|p| Rc::ptr_eq(&p, root));
            if !parent_ok {
                return None;
            }

            size += self.binom_tree_size_checked(&c)?;
            child = c.borrow().next.clone();
        }

        if expected_order != 0 {
            return None; // fewer children than the rank requires
        }
        Some(size)
    }

    /// Writes a Graphviz DOT rendering of the internal forest to `out`,
    /// using `write_value` to print each element's label. Root-to-child
    /// edges are red, child-to-parent back-references blue. Debugging aid.
    pub fn write_dot<W, F>(&self, out: &mut W, write_value: &mut F) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &T) -> io::Result<()>,
    {
        writeln!(out, "digraph priqueue {{")?;
        if let Some(head) = self.head.clone() {
            self.write_dot_tree(&head, out, write_value)?;
        }
        writeln!(out, "}}")
    }

    fn write_dot_tree<W, F>(&self, tree: &NodeRef<T>, out: &mut W, write_value: &mut F) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &T) -> io::Result<()>,
    {
        // The root list is rank-increasing, but the conventional drawing has
        // the big trees on the left, so recurse before writing.
        if let Some(next) = tree.borrow().next.clone() {
            self.write_dot_tree(&next, out, write_value)?;
        }
        self.write_dot_node(tree, out, write_value)?;
        self.write_dot_children(tree, out, write_value)
    }

    fn write_dot_node<W, F>(&self, node: &NodeRef<T>, out: &mut W, write_value: &mut F) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &T) -> io::Result<()>,
    {
        write!(out, "  {} [label=\"", Rc::as_ptr(node) as usize)?;
        write_value(out, &node.borrow().value)?;
        writeln!(out, "\"];")
    }

    fn write_dot_children<W, F>(&self, root: &NodeRef<T>, out: &mut W, write_value: &mut F) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &T) -> io::Result<()>,
    {
        let mut child = root.borrow().children_head.clone();
        while let Some(node) = child {
            self.write_dot_node(&node, out, write_value)?;
            writeln!(
                out,
                "  {} -> {} [color=red];",
                Rc::as_ptr(root) as usize,
                Rc::as_ptr(&node) as usize
            )?;
            if let Some(parent) = node.borrow().parent_node() {
                writeln!(
                    out,
                    "  {} -> {} [color=blue];",
                    Rc::as_ptr(&node) as usize,
                    Rc::as_ptr(&parent) as usize
                )?;
            }
            if node.borrow().children_head.is_some() {
                self.write_dot_children(&node, out, write_value)?;
            }
            child = node.borrow().next.clone();
        }
        Ok(())
    }
}

/// Lazy, single-pass traversal over a queue's elements in unspecified order.
///
/// Created by [`PriQueue::iter`]. The traversal descends to a node's first
/// child when it has one, and otherwise moves to the next sibling of the
/// nearest ancestor that has one.
pub struct Iter<'a, T> {
    node: NodePtr<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node.take()?;
        self.node = advance(&node);
        self.remaining -= 1;
        // SAFETY: the queue is immutably borrowed for 'a, so the node stays
        // owned by the structure and unaliased by any mutable access.
        let ptr = node.as_ptr();
        Some(unsafe { &(*ptr).value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T, C: Compare<T>> IntoIterator for &'a PriQueue<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
