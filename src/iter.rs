//! Plain in-order iterators over a [`SkipList`].
//!
//! These cannot remove elements; use a [`Cursor`][crate::Cursor] for that.

use std::iter::FusedIterator;

use crate::{
    arena::Arena,
    skiplist::SkipList,
    skipnode::{NodeId, SkipNode},
};

/// Iterator by reference, created by [`SkipList::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<SkipNode<T>>,
    next: Option<NodeId>,
    size: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<SkipNode<T>>, first: Option<NodeId>, size: usize) -> Self {
        Iter {
            nodes,
            next: first,
            size,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.next?];
        self.next = node.next_at(0);
        self.size = self.size.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            size: self.size,
        }
    }
}

/// Consuming iterator, yielding the elements in order.
pub struct IntoIter<T, G> {
    list: SkipList<T, G>,
}

impl<T, G> IntoIter<T, G> {
    pub(crate) fn new(list: SkipList<T, G>) -> Self {
        IntoIter { list }
    }
}

impl<T, G> Iterator for IntoIter<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, G> ExactSizeIterator for IntoIter<T, G> {}

impl<T, G> FusedIterator for IntoIter<T, G> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::SkipList;

    #[test]
    fn iter() {
        let size = 10_000;

        let sl: SkipList<_> = (0..size).rev().collect();

        fn test<T>(size: usize, mut iter: T)
        where
            T: Iterator<Item = usize>,
        {
            for i in 0..size {
                assert_eq!(iter.size_hint(), (size - i, Some(size - i)));
                assert_eq!(iter.next(), Some(i));
            }
            assert_eq!(iter.size_hint(), (0, Some(0)));
            assert!(iter.next().is_none());
        }
        test(size, sl.iter().copied());
        test(size, sl.into_iter());
    }

    #[test]
    fn for_loop_by_reference() {
        let sl: SkipList<_> = [5, 1, 3].into_iter().collect();
        let mut seen = Vec::new();
        for value in &sl {
            seen.push(*value);
        }
        assert_eq!(seen, [1, 3, 5]);
    }

    #[test]
    fn cloned_iter_is_independent() {
        let sl: SkipList<_> = (0..4).collect();
        let mut iter = sl.iter();
        assert_eq!(iter.next(), Some(&0));
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, [&1, &2, &3]);
        assert_eq!(iter.len(), 3);
    }
}
