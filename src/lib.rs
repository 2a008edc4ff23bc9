//! Meldable priority queue backed by a binomial heap.
//!
//! [`PriQueue`] supports finding or dequeuing the element with the highest
//! priority — defined as the *smallest* value under the queue's comparator —
//! with an upper bound of O(log n). Insertions are O(log n) worst case but
//! O(1) amortized over consecutive insertions. Beyond the usual heap
//! operations it also supports, each in O(log n):
//!
//! - removing an arbitrary element through its [`ElemHandle`]
//! - repositioning an element in place after its value changed
//!   ([`PriQueue::update_with`]), cheaper than a remove + re-insert
//! - melding two queues into one ([`PriQueue::meld`])
//!
//! Removing an arbitrary non-minimal element is noticeably more expensive
//! than an insertion (a constant factor of roughly 5 in the worst case),
//! since it first promotes the element to a tree root.
//!
//! # Example
//!
//! ```rust
//! use pri_queue::PriQueue;
//!
//! let mut pq = PriQueue::new();
//! for v in [5, 3, 8, 1, 4] {
//!     pq.insert(v);
//! }
//! assert_eq!(pq.pop_min(), Some(1));
//! assert_eq!(pq.pop_min(), Some(3));
//! assert_eq!(pq.len(), 3);
//! ```
//!
//! Elements need not be `Ord`; any total order can be supplied through the
//! [`Compare`] trait, with context captured in the comparator:
//!
//! ```rust
//! use pri_queue::{FnCompare, PriQueue};
//!
//! #[derive(Debug, PartialEq)]
//! struct Job { deadline: u64, name: &'static str }
//!
//! let mut pq = PriQueue::with_comparator(FnCompare(|a: &Job, b: &Job| {
//!     a.deadline.cmp(&b.deadline)
//! }));
//! pq.insert(Job { deadline: 90, name: "flush" });
//! pq.insert(Job { deadline: 10, name: "retransmit" });
//! assert_eq!(pq.pop_min().unwrap().name, "retransmit");
//! ```
//!
//! # Thread safety
//!
//! None. The queue performs no internal locking and is `!Send`/`!Sync`;
//! sharing one across threads requires external mutual exclusion around
//! every operation, reads included.

pub mod compare;
mod node;
pub mod queue;

pub use compare::{Compare, FnCompare, NaturalOrd};
pub use queue::{ElemHandle, Iter, PriQueue, QueueError};
