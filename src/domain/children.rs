//! Iterators over a single node's children, front to back and back to front.

use std::iter::FusedIterator;

use crate::domain::node::{ChildList, ChildNodes};

/// Children in their natural left-to-right order.
pub struct Children<'a, N> {
    inner: Forward<'a, N>,
}

enum Forward<'a, N> {
    Indexed {
        list: &'a dyn ChildList<N>,
        next: usize,
        end: usize,
    },
    Sequence(Box<dyn Iterator<Item = &'a N> + 'a>),
}

impl<'a, N> Children<'a, N> {
    pub(crate) fn new(view: ChildNodes<'a, N>) -> Self {
        let inner = match view {
            ChildNodes::Indexed(list) => Forward::Indexed {
                list,
                next: 0,
                end: list.len(),
            },
            ChildNodes::Sequence(iter) => Forward::Sequence(iter),
        };
        Self { inner }
    }
}

impl<'a, N> Iterator for Children<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Forward::Indexed { list, next, end } => {
                if *next >= *end {
                    return None;
                }
                let list: &'a dyn ChildList<N> = *list;
                let child = list.get(*next);
                *next += 1;
                child
            }
            Forward::Sequence(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Forward::Indexed { next, end, .. } => {
                let remaining = end.saturating_sub(*next);
                (remaining, Some(remaining))
            }
            Forward::Sequence(iter) => iter.size_hint(),
        }
    }
}

/// Children from last to first.
///
/// An indexed view is walked by index from the back, so nothing is copied.
/// A sequence view can only be read forwards, so it is collected once and the
/// buffer is drained from the back. Both yield the same order.
pub struct ReverseChildren<'a, N> {
    inner: Backward<'a, N>,
}

enum Backward<'a, N> {
    Indexed {
        list: &'a dyn ChildList<N>,
        remaining: usize,
    },
    Buffered(std::iter::Rev<std::vec::IntoIter<&'a N>>),
}

impl<'a, N> ReverseChildren<'a, N> {
    pub(crate) fn new(view: ChildNodes<'a, N>) -> Self {
        let inner = match view {
            ChildNodes::Indexed(list) => Backward::Indexed {
                list,
                remaining: list.len(),
            },
            ChildNodes::Sequence(iter) => {
                let buffer: Vec<&'a N> = iter.collect();
                Backward::Buffered(buffer.into_iter().rev())
            }
        };
        Self { inner }
    }

    /// True when the children are being read by index rather than from a buffer.
    #[cfg(test)]
    fn is_unbuffered(&self) -> bool {
        matches!(self.inner, Backward::Indexed { .. })
    }
}

impl<'a, N> Iterator for ReverseChildren<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Backward::Indexed { list, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                let list: &'a dyn ChildList<N> = *list;
                list.get(*remaining)
            }
            Backward::Buffered(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Backward::Indexed { remaining, .. } => (*remaining, Some(*remaining)),
            Backward::Buffered(iter) => iter.size_hint(),
        }
    }
}

impl<N> FusedIterator for ReverseChildren<'_, N> {}
