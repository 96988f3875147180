//! Slot storage for the nodes of a skiplist.
//!
//! Nodes refer to each other through [`NodeId`] handles rather than pointers,
//! so that a node may be linked from several levels (and from a live cursor)
//! at once without any aliasing concerns. Freed slots are threaded onto a free
//! list and recycled by later allocations.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::skipnode::NodeId;

enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// A growable store of `T` addressed by [`NodeId`].
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    /// Create an arena whose first allocation is `first`, stored at
    /// [`NodeId::HEAD`].
    pub(crate) fn with_head(first: T) -> Self {
        Arena {
            slots: vec![Slot::Occupied(first)],
            free: None,
            len: 1,
        }
    }

    /// Number of occupied slots, the head included.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Store `value`, reusing a vacant slot when one is available.
    pub(crate) fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            }
            Some(id) => {
                let vacant = mem::replace(&mut self.slots[id.0], Slot::Occupied(value));
                match vacant {
                    Slot::Vacant(next) => self.free = next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                id
            }
        }
    }

    /// Release the slot at `id` and return what it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` is the head or does not refer to an occupied slot.
    pub(crate) fn free(&mut self, id: NodeId) -> T {
        assert!(id != NodeId::HEAD, "the head is never freed");
        assert!(
            matches!(self.slots.get(id.0), Some(Slot::Occupied(_))),
            "attempted to free a vacant slot"
        );
        let old = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free.take()));
        self.len -= 1;
        self.free = Some(id);
        match old {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => unreachable!("slot was checked to be occupied"),
        }
    }

    /// Returns the value at `id`, or `None` if the slot is vacant or out of
    /// range.
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            Some(Slot::Vacant(_)) | None => None,
        }
    }

    /// Drop everything but the head.
    pub(crate) fn truncate_to_head(&mut self) {
        self.slots.truncate(1);
        self.free = None;
        self.len = 1;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id.0] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("dangling node handle {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.0] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("dangling node handle {id:?}"),
        }
    }
}
