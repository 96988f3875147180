//! Ordered traversal with removal of the element just visited.
//!
//! A cursor sits in the gap between two consecutive elements. Besides the
//! gap's position at level 0 it remembers, for *every* level, the last node
//! before the gap at that level. Removing the element most recently returned
//! by `next` uses these per-level predecessors to unlink the node from each
//! level of its tower, so no upper level is left pointing at a node that is
//! gone from the base list.
//!
//! ```text
//! level 2:  <head> -----------------------------------> [7] -->
//! level 1:  <head> ------------> [3] -----------------> [7] -->
//! level 0:  <head> --> [1] --> [3] --> [5] --> [6] --> [7] -->
//!                                       ^
//!                                       last returned
//!
//! preds = [[3], [3], <head>]
//! ```

use thiserror::Error;

use crate::{skiplist::SkipList, skipnode::NodeId};

/// Errors raised by [`Cursor`] and [`CursorMut`].
///
/// None of them leaves the list or the cursor partially modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum CursorError {
    /// `next` was called with no element left.
    #[error("no elements remain.")]
    NoSuchElement,
    /// `remove` was called without a preceding `next`, or twice for the same
    /// element.
    #[error("remove must follow a call to next.")]
    IllegalState,
    /// The list was structurally changed other than through this cursor since
    /// the cursor last touched it. The cursor must be discarded.
    #[error("the skiplist was modified outside of this cursor.")]
    ConcurrentModification,
}

// ////////////////////////////////////////////////////////////////////////////
// Cursor
// ////////////////////////////////////////////////////////////////////////////

/// A fail-fast cursor over a [`SkipList`] which does not borrow the list.
///
/// Created by [`SkipList::cursor`]. Each operation takes the list it was
/// created from as an argument; passing any other list is reported as
/// [`CursorError::ConcurrentModification`].
///
/// Cloning a cursor yields an independent cursor at the same position. Once
/// either of them removes an element, the other one is invalidated.
#[derive(Debug, Clone)]
pub struct Cursor {
    // Identity of the list the cursor was created from.
    list: u64,
    // Last node before the gap at each level, the head if there is none.
    preds: Vec<NodeId>,
    // The node most recently returned by `next`. While it is set, the gap
    // logically lies after it but `preds` still describes the position before
    // it, which is exactly what unlinking it requires.
    last: Option<NodeId>,
    // Modification count of the list when this cursor last touched it.
    expected: u64,
}

impl Cursor {
    pub(crate) fn new(list: u64, max_height: usize, modifications: u64) -> Self {
        Cursor {
            list,
            preds: vec![NodeId::HEAD; max_height],
            last: None,
            expected: modifications,
        }
    }

    /// Returns whether a subsequent [`next`][Cursor::next] would yield an
    /// element.
    ///
    /// # Errors
    ///
    /// [`CursorError::ConcurrentModification`] if the list was changed behind
    /// the cursor's back.
    #[inline]
    pub fn has_next<T, G>(&self, list: &SkipList<T, G>) -> Result<bool, CursorError> {
        self.validate(list)?;
        Ok(self.upcoming(list).is_some())
    }

    /// Advances past the next element and returns it.
    ///
    /// # Errors
    ///
    /// - [`CursorError::NoSuchElement`] if the cursor is past the last
    ///   element; the cursor is left as it was.
    /// - [`CursorError::ConcurrentModification`] if the list was changed
    ///   behind the cursor's back.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::{CursorError, SkipList};
    ///
    /// let skiplist: SkipList<u8> = SkipList::new();
    /// let mut cursor = skiplist.cursor();
    /// assert_eq!(cursor.has_next(&skiplist), Ok(false));
    /// assert_eq!(cursor.next(&skiplist), Err(CursorError::NoSuchElement));
    /// ```
    pub fn next<'a, T, G>(&mut self, list: &'a SkipList<T, G>) -> Result<&'a T, CursorError> {
        self.validate(list)?;
        let next = self.upcoming(list).ok_or(CursorError::NoSuchElement)?;
        let value = list
            .nodes()
            .get(next)
            .and_then(|node| node.value.as_ref())
            .ok_or(CursorError::ConcurrentModification)?;

        // Move the gap past the previously returned node. At every level of
        // its tower it is now the last node before the gap.
        if let Some(last) = self.last {
            let height = list
                .nodes()
                .get(last)
                .ok_or(CursorError::ConcurrentModification)?
                .height();
            for pred in self.preds.iter_mut().take(height) {
                *pred = last;
            }
        }
        self.last = Some(next);
        Ok(value)
    }

    /// Removes the element most recently returned by [`next`][Cursor::next]
    /// from every level it occupies, and returns it.
    ///
    /// The cursor stays valid: the following call to `next` yields the element
    /// that came after the removed one. Any other cursor on the same list is
    /// invalidated.
    ///
    /// # Errors
    ///
    /// - [`CursorError::IllegalState`] if `next` has not been called since the
    ///   cursor was created or since the last removal.
    /// - [`CursorError::ConcurrentModification`] if the list was changed
    ///   behind the cursor's back.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::{CursorError, SkipList};
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend([1, 2, 3]);
    ///
    /// let mut cursor = skiplist.cursor();
    /// assert_eq!(cursor.remove(&mut skiplist), Err(CursorError::IllegalState));
    /// assert_eq!(cursor.next(&skiplist), Ok(&1));
    /// assert_eq!(cursor.next(&skiplist), Ok(&2));
    /// assert_eq!(cursor.remove(&mut skiplist), Ok(2));
    /// assert_eq!(cursor.remove(&mut skiplist), Err(CursorError::IllegalState));
    /// assert_eq!(cursor.next(&skiplist), Ok(&3));
    /// ```
    pub fn remove<T, G>(&mut self, list: &mut SkipList<T, G>) -> Result<T, CursorError> {
        self.validate(list)?;
        let target = self.last.ok_or(CursorError::IllegalState)?;
        let value = list
            .unsplice(&self.preds, target)
            .ok_or(CursorError::ConcurrentModification)?;
        self.last = None;
        self.expected = list.modifications();
        Ok(value)
    }

    fn validate<T, G>(&self, list: &SkipList<T, G>) -> Result<(), CursorError> {
        if list.id() != self.list
            || list.modifications() != self.expected
            || list.max_height() != self.preds.len()
        {
            return Err(CursorError::ConcurrentModification);
        }
        Ok(())
    }

    /// The node `next` would return.
    fn upcoming<T, G>(&self, list: &SkipList<T, G>) -> Option<NodeId> {
        let before = self.last.or_else(|| self.preds.first().copied())?;
        list.nodes().get(before)?.next_at(0)
    }
}

// ////////////////////////////////////////////////////////////////////////////
// CursorMut
// ////////////////////////////////////////////////////////////////////////////

/// A [`Cursor`] bundled with an exclusive borrow of its list.
///
/// Created by [`SkipList::cursor_mut`]. Since nothing else can touch the list
/// while this borrow lives, it never observes
/// [`CursorError::ConcurrentModification`].
pub struct CursorMut<'a, T, G> {
    list: &'a mut SkipList<T, G>,
    cursor: Cursor,
}

impl<'a, T, G> CursorMut<'a, T, G> {
    pub(crate) fn new(list: &'a mut SkipList<T, G>, cursor: Cursor) -> Self {
        CursorMut { list, cursor }
    }

    /// Returns whether a subsequent [`next`][CursorMut::next] would yield an
    /// element.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor.has_next(&*self.list).unwrap_or(false)
    }

    /// Advances past the next element and returns it.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoSuchElement`] if the cursor is past the last element.
    #[inline]
    pub fn next(&mut self) -> Result<&T, CursorError> {
        self.cursor.next(&*self.list)
    }

    /// Removes the element most recently returned by
    /// [`next`][CursorMut::next] and returns it.
    ///
    /// # Errors
    ///
    /// [`CursorError::IllegalState`] if `next` has not been called since the
    /// cursor was created or since the last removal.
    #[inline]
    pub fn remove(&mut self) -> Result<T, CursorError> {
        self.cursor.remove(&mut *self.list)
    }

    /// Detaches the cursor from the borrow, keeping its position.
    #[inline]
    #[must_use]
    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////
