//! An always-ordered skiplist permitting duplicate values.

use std::{
    cmp::Ordering,
    fmt, iter,
    sync::atomic::{self, AtomicU64},
};

use tracing::{debug, trace};

use crate::{
    arena::Arena,
    cursor::{Cursor, CursorError, CursorMut},
    iter::{IntoIter, Iter},
    level_generator::{Geometric, GeometricError, LevelGenerator},
    skipnode::{NodeId, SkipNode},
};

/// The number of levels used when none is specified.
pub const DEFAULT_MAX_HEIGHT: usize = 16;

/// The probability of a node reaching one level higher when none is
/// specified.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Source of the identities that tie cursors to the list they came from.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

// ////////////////////////////////////////////////////////////////////////////
// SkipList
// ////////////////////////////////////////////////////////////////////////////

/// The skiplist provides a way of storing elements such that they are always
/// sorted and at the same time provides efficient way to search, insert and
/// remove them. The same value may be inserted any number of times; each copy
/// is kept as a distinct node.
///
/// The ordering is determined by a comparison function supplied at
/// construction, which **must** be well-behaved. Specifically, given some
/// ordering function `f(a, b)`, it must satisfy the following properties:
///
/// - Be well defined: `f(a, b)` should always return the same value
/// - Be anti-symmetric: `f(a, b) == Greater` iff `f(b, a) == Less` and `f(a, b)
///   == Equal == f(b, a)`.
/// - By transitive: If `f(a, b) == Greater` and `f(b, c) == Greater` then `f(a,
///   c) == Greater`.
///
/// A badly behaved function cannot cause memory unsafety, but lookups and
/// the iteration order become meaningless.
///
/// Elements can be removed while traversing the list through a
/// [`Cursor`] or [`CursorMut`].
pub struct SkipList<T, G = Geometric> {
    // Every node, the head included. The head lives at `NodeId::HEAD`.
    nodes: Arena<SkipNode<T>>,
    len: usize,
    // Highest level currently occupied by any node, in `1..=max_height`.
    height: usize,
    // Bumped on every structural change; cursors snapshot it.
    modifications: u64,
    // Unique among all lists created by this process.
    id: u64,
    level_generator: G,
    compare: Box<dyn Fn(&T, &T) -> Ordering>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T> SkipList<T>
where
    T: Ord + 'static,
{
    /// Create a new skiplist ordered by `T`'s [`Ord`] implementation, with
    /// the default number of 16 levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist: SkipList<i64> = SkipList::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comp(T::cmp)
    }
}

impl<T> SkipList<T> {
    /// Create a new skiplist using the provided function in order to determine
    /// the ordering of elements within the list. It will be generated with 16
    /// levels and a promotion probability of one half.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    /// use std::cmp::Ordering;
    ///
    /// // Store even number before odd ones and sort as usual within same parity group.
    /// let mut skiplist = SkipList::with_comp(|a: &u64, b: &u64| {
    ///     if a % 2 == b % 2 {
    ///         a.cmp(b)
    ///     } else if a % 2 == 0 {
    ///         Ordering::Less
    ///     } else {
    ///         Ordering::Greater
    ///     }
    /// });
    /// skiplist.extend([3, 2, 1, 0]);
    /// assert_eq!(skiplist.iter().copied().collect::<Vec<_>>(), [0, 2, 1, 3]);
    /// ```
    #[inline]
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "The default parameters are known to be valid"
    )]
    pub fn with_comp<F>(f: F) -> Self
    where
        F: 'static + Fn(&T, &T) -> Ordering,
    {
        Self::with_options(f, DEFAULT_MAX_HEIGHT, DEFAULT_PROBABILITY)
            .expect("default skiplist parameters are valid")
    }

    /// Create a new skiplist ordered by `f`, whose nodes reach at most
    /// `max_height` levels and are promoted to the next level with
    /// probability `p`.
    ///
    /// # Errors
    ///
    /// Fails before anything is allocated if `max_height` is zero or `p` lies
    /// outside of `$[0, 1)$`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::{GeometricError, SkipList};
    ///
    /// let skiplist = SkipList::with_options(|a: &u8, b: &u8| a.cmp(b), 4, 0.25);
    /// assert!(skiplist.is_ok());
    ///
    /// let skiplist = SkipList::with_options(|a: &u8, b: &u8| a.cmp(b), 0, 0.25);
    /// assert_eq!(skiplist.err(), Some(GeometricError::ZeroMax));
    /// ```
    #[inline]
    pub fn with_options<F>(f: F, max_height: usize, p: f64) -> Result<Self, GeometricError>
    where
        F: 'static + Fn(&T, &T) -> Ordering,
    {
        let generator = Geometric::new(max_height, p)?;
        debug!(max_height, p, "creating skiplist");
        Ok(Self::with_generator(f, generator))
    }
}

impl<T, G> SkipList<T, G>
where
    G: LevelGenerator,
{
    /// Create a new skiplist ordered by `f` whose node heights are drawn from
    /// `level_generator`. The list has as many levels as the generator's
    /// [`total`][LevelGenerator::total].
    ///
    /// # Panics
    ///
    /// Panics if the generator reports zero levels.
    #[inline]
    pub fn with_generator<F>(f: F, level_generator: G) -> Self
    where
        F: 'static + Fn(&T, &T) -> Ordering,
    {
        let total = level_generator.total();
        assert!(total >= 1, "a skiplist needs at least one level");
        SkipList {
            nodes: Arena::with_head(SkipNode::head(total)),
            len: 0,
            height: 1,
            modifications: 0,
            id: NEXT_LIST_ID.fetch_add(1, atomic::Ordering::Relaxed),
            level_generator,
            compare: Box::new(f),
        }
    }

    /// Insert the element into the skiplist.
    ///
    /// The element is placed after every element comparing less than it;
    /// copies of an equal element are all kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    ///
    /// skiplist.insert(0);
    /// skiplist.insert(5);
    /// skiplist.insert(5);
    /// assert_eq!(skiplist.len(), 3);
    /// assert!(!skiplist.is_empty());
    /// ```
    #[doc(alias = "add")]
    pub fn insert(&mut self, value: T) {
        let preds = self.predecessors(&value);
        let height = self.draw_height();
        let id = self.nodes.allocate(SkipNode::new(value, height));

        for (level, &pred) in preds.iter().enumerate().take(height) {
            let next = self.nodes[pred].links[level];
            self.nodes[id].links[level] = next;
            self.nodes[pred].links[level] = Some(id);
        }

        self.len += 1;
        self.bump();
        trace!(node = id.0, height, "spliced node");
    }

    /// Draw the height of a new node, raising the list's height if needed.
    fn draw_height(&mut self) -> usize {
        let level = self.level_generator.level();
        debug_assert!(
            level < self.max_height(),
            "level generator exceeded its total"
        );
        let height = (level + 1).min(self.max_height());
        if height > self.height {
            self.height = height;
        }
        height
    }
}

impl<T, G> SkipList<T, G> {
    /// Clears the skiplist, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..10);
    /// skiplist.clear();
    /// assert!(skiplist.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        let total = self.max_height();
        self.nodes.truncate_to_head();
        self.nodes[NodeId::HEAD] = SkipNode::head(total);
        self.len = 0;
        self.height = 1;
        self.bump();
        debug!("cleared skiplist");
    }

    /// Returns the number of elements in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..10);
    /// assert_eq!(skiplist.len(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the skiplist contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The highest level currently occupied by any element, counted from 1.
    ///
    /// An empty list has a height of 1.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The maximum number of levels any element may occupy.
    #[inline]
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.nodes[NodeId::HEAD].height()
    }

    /// Provides a reference to the front element, or `None` if the skiplist is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// assert!(skiplist.front().is_none());
    ///
    /// skiplist.insert(2);
    /// skiplist.insert(1);
    /// assert_eq!(skiplist.front(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        let first = self.nodes[NodeId::HEAD].next_at(0)?;
        self.nodes[first].value.as_ref()
    }

    /// Provides a reference to the back element, or `None` if the skiplist is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// assert!(skiplist.back().is_none());
    ///
    /// skiplist.insert(2);
    /// skiplist.insert(1);
    /// assert_eq!(skiplist.back(), Some(&2));
    /// ```
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        let mut current = NodeId::HEAD;
        for level in (0..self.height).rev() {
            while let Some(next) = self.nodes[current].next_at(level) {
                current = next;
            }
        }
        self.nodes[current].value.as_ref()
    }

    /// Removes the first element and returns it, or `None` if the sequence is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.insert(2);
    /// skiplist.insert(1);
    ///
    /// assert_eq!(skiplist.pop_front(), Some(1));
    /// assert_eq!(skiplist.pop_front(), Some(2));
    /// assert!(skiplist.pop_front().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.nodes[NodeId::HEAD].next_at(0)?;
        // The head precedes the first node at every level of its tower.
        let preds = vec![NodeId::HEAD; self.max_height()];
        self.unsplice(&preds, first)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns
    /// false. This method operates in place, through the same removal path as
    /// [`CursorMut::remove`].
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..10);
    /// skiplist.retain(|&x| x % 2 == 0);
    /// assert_eq!(skiplist.len(), 5);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_mut();
        loop {
            let keep = match cursor.next() {
                Ok(value) => f(value),
                Err(_) => break,
            };
            if !keep {
                match cursor.remove() {
                    Ok(_) => {}
                    Err(err) => unreachable!("cursor has just yielded an element: {err}"),
                }
            }
        }
    }

    /// Creates an iterator over the entries of the skiplist, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend([3, 1, 2]);
    /// assert_eq!(skiplist.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.nodes[NodeId::HEAD].next_at(0), self.len)
    }

    /// Creates a detached cursor positioned before the first element.
    ///
    /// The cursor does not borrow the list; every operation on it takes the
    /// list as an argument. Any structural change made to the list other than
    /// through this cursor invalidates it.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::{CursorError, SkipList};
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..3);
    ///
    /// let mut cursor = skiplist.cursor();
    /// assert_eq!(cursor.next(&skiplist), Ok(&0));
    /// assert_eq!(cursor.remove(&mut skiplist), Ok(0));
    ///
    /// skiplist.insert(7);
    /// assert_eq!(cursor.next(&skiplist), Err(CursorError::ConcurrentModification));
    /// ```
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.max_height(), self.modifications)
    }

    /// Creates a cursor borrowing the list mutably, positioned before the
    /// first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend([1, 3, 5, 7, 9]);
    ///
    /// let mut cursor = skiplist.cursor_mut();
    /// while let Ok(&value) = cursor.next() {
    ///     if value > 4 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(skiplist.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, G> {
        let cursor = self.cursor();
        CursorMut::new(self, cursor)
    }

    /// Returns a [`Display`][fmt::Display]-able view of the internal
    /// structure: one line per node (the head first), giving the node's
    /// handle, value, height and the handle it links to at each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let skiplist = SkipList::<u8>::with_options(|a, b| a.cmp(b), 2, 0.0).unwrap();
    /// assert_eq!(
    ///     skiplist.structure().to_string(),
    ///     "0000 <head> (height 2) -> null null"
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn structure(&self) -> Structure<'_, T, G> {
        Structure { list: self }
    }
}

impl<T, G> SkipList<T, G> {
    /// Returns true if the value is contained in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..10);
    /// assert!(skiplist.contains(&4));
    /// assert!(!skiplist.contains(&15));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let preds = self.predecessors(value);
        self.candidate(&preds, value).is_some()
    }

    /// Removes one element equal to `value`, returning whether there was one.
    ///
    /// If the skiplist contains several equal elements, the first of them is
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend([4, 4]);
    /// assert!(skiplist.remove(&4));
    /// assert!(skiplist.remove(&4));
    /// assert!(!skiplist.remove(&4)); // No more '4' left
    /// ```
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns an element equal to `value`, or `None` if there is
    /// no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_skiplist::SkipList;
    ///
    /// let mut skiplist = SkipList::with_comp(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// skiplist.insert((1, 'a'));
    /// assert_eq!(skiplist.take(&(1, 'z')), Some((1, 'a')));
    /// assert_eq!(skiplist.take(&(1, 'z')), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let preds = self.predecessors(value);
        let candidate = self.candidate(&preds, value)?;
        self.unsplice(&preds, candidate)
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<T, G> SkipList<T, G> {
    /// Finds, at every level, the last node whose value is strictly less than
    /// `value` (the head if there is none).
    ///
    /// The search starts at the top occupied level and drops down one level at
    /// a time without restarting from the head. Entries for levels above the
    /// list's height are the head.
    pub(crate) fn predecessors(&self, value: &T) -> Vec<NodeId> {
        let mut preds = vec![NodeId::HEAD; self.max_height()];
        let mut current = NodeId::HEAD;
        for level in (0..self.height).rev() {
            while let Some(next) = self.nodes[current].next_at(level) {
                match self.nodes[next].value.as_ref() {
                    Some(v) if (self.compare)(v, value) == Ordering::Less => current = next,
                    _ => break,
                }
            }
            preds[level] = current;
        }
        preds
    }

    /// The node following `preds[0]` if it holds a value equal to `value`.
    fn candidate(&self, preds: &[NodeId], value: &T) -> Option<NodeId> {
        let next = self.nodes[*preds.first()?].next_at(0)?;
        let found = self.nodes[next].value.as_ref()?;
        ((self.compare)(found, value) == Ordering::Equal).then_some(next)
    }

    /// Unlinks `target` from every level of its tower and frees it.
    ///
    /// `preds[i]` must be the node preceding `target` at level `i`; only the
    /// levels where it actually links to `target` are rewired.
    pub(crate) fn unsplice(&mut self, preds: &[NodeId], target: NodeId) -> Option<T> {
        debug_assert!(target != NodeId::HEAD, "the head cannot be removed");
        let height = self.nodes[target].height();
        for (level, &pred) in preds.iter().enumerate().take(height) {
            if self.nodes[pred].links[level] == Some(target) {
                self.nodes[pred].links[level] = self.nodes[target].links[level];
            }
        }

        let node = self.nodes.free(target);
        self.len -= 1;
        debug_assert_eq!(self.nodes.len(), self.len + 1);
        while self.height > 1 && self.nodes[NodeId::HEAD].next_at(self.height - 1).is_none() {
            self.height -= 1;
        }
        self.bump();
        trace!(node = target.0, height, "unspliced node");
        node.into_inner()
    }

    /// The node arena, for cursors and iterators.
    pub(crate) fn nodes(&self) -> &Arena<SkipNode<T>> {
        &self.nodes
    }

    /// Identity of this list, distinct from every other list.
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Current value of the modification counter.
    pub(crate) fn modifications(&self) -> u64 {
        self.modifications
    }

    fn bump(&mut self) {
        self.modifications = self.modifications.wrapping_add(1);
    }

    /// Checks the integrity of the skiplist.
    #[cfg(test)]
    #[expect(clippy::expect_used, reason = "Test-only integrity check")]
    pub(crate) fn check(&self) {
        let head = &self.nodes[NodeId::HEAD];
        assert!(head.is_head());
        assert!((1..=self.max_height()).contains(&self.height));

        let mut below: Vec<NodeId> = Vec::new();
        let mut links = 0;
        let mut expected_links = 0;
        for level in 0..self.max_height() {
            let mut ids = Vec::new();
            let mut previous: Option<&T> = None;
            let mut current = head.next_at(level);
            while let Some(id) = current {
                let node = &self.nodes[id];
                assert!(node.height() > level, "node {id} linked above its tower");
                let value = node.value.as_ref().expect("only the head has no value");
                if let Some(previous) = previous {
                    assert_ne!(
                        (self.compare)(previous, value),
                        Ordering::Greater,
                        "level {level} is out of order"
                    );
                }
                previous = Some(value);
                ids.push(id);
                current = node.next_at(level);
            }

            if level == 0 {
                assert_eq!(ids.len(), self.len);
                assert_eq!(self.nodes.len(), self.len + 1);
                expected_links = ids.iter().map(|&id| self.nodes[id].height()).sum();
            } else {
                let mut remaining = below.iter();
                for id in &ids {
                    assert!(
                        remaining.any(|b| b == id),
                        "node {id} on level {level} is missing below"
                    );
                }
            }
            if level >= self.height {
                assert!(ids.is_empty(), "level {level} is above the height");
            }
            links += ids.len();
            below = ids;
        }
        assert_eq!(links, expected_links, "some tower is not fully linked");
        if self.height > 1 {
            assert!(head.next_at(self.height - 1).is_some(), "height is stale");
        }
    }
}

// ///////////////////////////////////////////////
// Structure dump
// ///////////////////////////////////////////////

/// Diagnostic view of a skiplist's internal links, created by
/// [`SkipList::structure`].
pub struct Structure<'a, T, G> {
    list: &'a SkipList<T, G>,
}

impl<T, G> fmt::Display for Structure<'_, T, G>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nodes = &self.list.nodes;
        let mut current = Some(NodeId::HEAD);
        while let Some(id) = current {
            let node = &nodes[id];
            if id != NodeId::HEAD {
                writeln!(f)?;
            }
            if node.is_head() {
                write!(f, "{id} <head>")?;
            } else {
                write!(f, "{id} {node}")?;
            }
            write!(f, " (height {}) ->", node.height())?;
            for link in &node.links {
                match link {
                    Some(next) => write!(f, " {next}")?,
                    None => write!(f, " null")?,
                }
            }
            current = node.next_at(0);
        }
        Ok(())
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T: Ord + 'static> Default for SkipList<T> {
    fn default() -> SkipList<T> {
        SkipList::new()
    }
}

/// This implementation of PartialEq only checks that the *values* are equal,
/// in order; it does not check for equivalence of other features (such as the
/// ordering function and the node levels). Furthermore, this uses `T`'s
/// implementation of PartialEq and *does not* use the owning skiplist's
/// comparison function.
impl<A, B, G, H> PartialEq<SkipList<B, H>> for SkipList<A, G>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &SkipList<B, H>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, G> Extend<T> for SkipList<T, G>
where
    G: LevelGenerator,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.insert(element);
        }
    }
}

impl<T> iter::FromIterator<T> for SkipList<T>
where
    T: Ord + 'static,
{
    #[inline]
    fn from_iter<I>(iter: I) -> SkipList<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut skiplist = SkipList::new();
        skiplist.extend(iter);
        skiplist
    }
}

impl<T, G> fmt::Debug for SkipList<T, G>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, G> IntoIterator for SkipList<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T, G>;

    fn into_iter(self) -> IntoIter<T, G> {
        IntoIter::new(self)
    }
}

impl<'a, T, G> IntoIterator for &'a SkipList<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////
