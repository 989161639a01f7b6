//! Bounded, lock-protected FIFO of item handles.
//!
//! Backlogs for the gap fillers. A fixed-capacity circular buffer sits behind
//! a single [`parking_lot::Mutex`]; every mutation and every size query takes
//! the lock for exactly one operation, so concurrent producers and consumers
//! never observe a torn head/tail pair.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      ItemQueue<T> (capacity = 4)                            │
//! │                                                                             │
//! │   Mutex<Ring<T>>                                                            │
//! │                                                                             │
//! │   After enqueue(a, b, c, d), take() → a, enqueue(e):                        │
//! │                                                                             │
//! │   Index:     0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   buf:     │  e  │  b  │  c  │  d  │                                        │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │               ▲     ▲                                                       │
//! │               │     └── head = 1 (next take)                                │
//! │               └──────── tail = 1 (next enqueue, wrapped)                    │
//! │                                                                             │
//! │   len = 4 → is_full() == true, enqueue(f) hands `f` back                    │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation     | Description                           | Complexity |
//! |---------------|---------------------------------------|------------|
//! | [`enqueue`]   | Append at tail, fail when full        | O(1)       |
//! | [`take`]      | Remove head, `None` when empty        | O(1)       |
//! | [`is_empty`]  | Locked snapshot                       | O(1)       |
//! | [`is_full`]   | Locked snapshot                       | O(1)       |
//!
//! [`enqueue`]: ItemQueue::enqueue
//! [`take`]: ItemQueue::take
//! [`is_empty`]: ItemQueue::is_empty
//! [`is_full`]: ItemQueue::is_full
//!
//! ## Example Usage
//!
//! ```
//! use slotweave::ds::ItemQueue;
//!
//! let queue = ItemQueue::with_capacity(2);
//! assert!(queue.enqueue("a").is_ok());
//! assert!(queue.enqueue("b").is_ok());
//!
//! // Full: the rejected item is handed back untouched
//! assert_eq!(queue.enqueue("c"), Err("c"));
//!
//! assert_eq!(queue.take(), Some("a"));
//! assert_eq!(queue.take(), Some("b"));
//! assert_eq!(queue.take(), None);
//! ```
//!
//! ## Thread Safety
//!
//! `ItemQueue<T>` is `Send + Sync` whenever `T: Send`. `take` never blocks
//! waiting for an item: an empty queue is reported immediately, callers that
//! need to wait must poll. Each enqueued item is returned by exactly one
//! `take` call.
//!
//! ## Implementation Notes
//!
//! - The buffer is allocated once at construction and never grows
//! - Capacity 0 is honored: every `enqueue` fails, every `take` is `None`
//! - Handles are moved in and out; the queue never clones them
//! - `check_invariants()` is available for tests and debugging

use parking_lot::Mutex;

use crate::error::InvariantError;

#[derive(Debug)]
struct Ring<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Ring<T> {
    fn new(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self {
            buf: buf.into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn push(&mut self, item: T) -> Result<(), T> {
        if self.len == self.capacity() {
            return Err(item);
        }
        self.buf[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buf[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        item
    }
}

/// Bounded multi-producer/multi-consumer FIFO.
///
/// Capacity is fixed at construction. All operations take `&self`, so a
/// queue can be shared across threads behind an `Arc` or a plain reference
/// inside a scoped thread.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use slotweave::ds::ItemQueue;
///
/// let queue = Arc::new(ItemQueue::from_items(0..100));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let queue = Arc::clone(&queue);
///         thread::spawn(move || {
///             let mut taken = Vec::new();
///             while let Some(item) = queue.take() {
///                 taken.push(item);
///             }
///             taken
///         })
///     })
///     .collect();
///
/// let mut all: Vec<i32> = handles
///     .into_iter()
///     .flat_map(|h| h.join().unwrap())
///     .collect();
/// all.sort_unstable();
/// assert_eq!(all, (0..100).collect::<Vec<_>>());
/// ```
#[derive(Debug)]
pub struct ItemQueue<T> {
    inner: Mutex<Ring<T>>,
}

impl<T> ItemQueue<T> {
    /// Creates an empty queue holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Ring::new(capacity)),
        }
    }

    /// Creates a queue sized exactly to `items` and enqueues them in order.
    ///
    /// ```
    /// use slotweave::ds::ItemQueue;
    ///
    /// let queue = ItemQueue::from_items(vec![1, 2, 3]);
    /// assert!(queue.is_full());
    /// assert_eq!(queue.take(), Some(1));
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let len = items.len();
        let buf: Vec<Option<T>> = items.into_iter().map(Some).collect();
        Self {
            inner: Mutex::new(Ring {
                buf: buf.into_boxed_slice(),
                head: 0,
                tail: 0,
                len,
            }),
        }
    }

    /// Appends `item` at the tail.
    ///
    /// Returns `Err(item)` without mutating the queue when it is at capacity.
    pub fn enqueue(&self, item: T) -> Result<(), T> {
        self.inner.lock().push(item)
    }

    /// Removes and returns the head item, or `None` if the queue is empty.
    ///
    /// Never blocks waiting for an item to arrive.
    pub fn take(&self) -> Option<T> {
        self.inner.lock().pop()
    }

    /// Returns `true` if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().len == 0
    }

    /// Returns `true` if the queue holds `capacity` items.
    pub fn is_full(&self) -> bool {
        let ring = self.inner.lock();
        ring.len == ring.capacity()
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.inner.lock().len
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Validates the ring bookkeeping under the lock.
    ///
    /// Checks `len <= capacity`, cursor bounds, that exactly `len` cells are
    /// occupied, and that they form the contiguous run starting at `head`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let ring = self.inner.lock();
        let cap = ring.capacity();

        if ring.len > cap {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                ring.len, cap
            )));
        }
        if cap == 0 {
            if ring.head != 0 || ring.tail != 0 {
                return Err(InvariantError::new("zero-capacity ring moved its cursors"));
            }
            return Ok(());
        }
        if ring.head >= cap || ring.tail >= cap {
            return Err(InvariantError::new(format!(
                "cursor out of bounds: head={} tail={} capacity={}",
                ring.head, ring.tail, cap
            )));
        }
        if (ring.head + ring.len) % cap != ring.tail {
            return Err(InvariantError::new(format!(
                "tail {} does not follow head {} by len {}",
                ring.tail, ring.head, ring.len
            )));
        }
        for offset in 0..cap {
            let idx = (ring.head + offset) % cap;
            let occupied = ring.buf[idx].is_some();
            if occupied != (offset < ring.len) {
                return Err(InvariantError::new(format!(
                    "slot {idx} occupancy does not match len {}",
                    ring.len
                )));
            }
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for ItemQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
