use core::iter::FusedIterator;

use super::LinkedList;
use super::ListNode;

/// An iterator over the payloads of a [`LinkedList`].
///
/// This struct is created by the [`iter`] method on [`LinkedList`]. A
/// default-constructed `Iter` yields nothing.
///
/// [`iter`]: LinkedList::iter
///
/// # Examples
///
/// ```
/// use chain_map::linked_list::LinkedList;
///
/// let list: LinkedList<_> = [1, 2].into_iter().collect();
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    pub(crate) next: Option<&'a ListNode<T>>,
    pub(crate) remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Iter {
            next: None,
            remaining: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the payloads of a [`LinkedList`].
///
/// This struct is created by the [`iter_mut`] method on [`LinkedList`].
///
/// [`iter_mut`]: LinkedList::iter_mut
#[derive(Debug)]
pub struct IterMut<'a, T> {
    pub(crate) next: Option<&'a mut ListNode<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An iterator over the nodes of a [`LinkedList`].
///
/// This struct is created by the [`nodes`] method on [`LinkedList`].
///
/// [`nodes`]: LinkedList::nodes
#[derive(Debug)]
pub struct Nodes<'a, T> {
    pub(crate) next: Option<&'a ListNode<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a ListNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

/// An owning iterator over the payloads of a [`LinkedList`].
///
/// This struct is created by the [`into_iter`] method on [`LinkedList`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
///
/// # Examples
///
/// ```
/// use chain_map::linked_list::LinkedList;
///
/// let list: LinkedList<_> = ["a", "b"].into_iter().collect();
/// let values: Vec<_> = list.into_iter().collect();
/// assert_eq!(values, ["a", "b"]);
/// ```
#[derive(Debug)]
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().map(ListNode::into_data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
