//! Singly linked list.
//!
//! This module provides [`LinkedList`], an ordered chain of heap allocated
//! [`ListNode`]s in which every node exclusively owns its successor. It is
//! usable on its own and is also the collision chain behind each bucket of
//! [`HashTable`](crate::HashTable).
//!
//! Besides the usual push/pop operations the list offers a handful of
//! traversal algorithms that work in place on the chain of nodes:
//! duplicate removal, the runner weave, k-th to last lookup and a palindrome
//! check.
//!
//! # Examples
//!
//! ```
//! use chain_map::linked_list::LinkedList;
//! use chain_map::linked_list::ListNode;
//!
//! let mut list = LinkedList::new();
//! list.append_to_tail(ListNode::new(2));
//! list.append_to_tail(ListNode::new(3));
//! list.prepend_to_head(ListNode::new(1));
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.find_k_to_last(1).unwrap().data, 3);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use log::trace;

use crate::error::Error;
use crate::error::Result;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::IterMut;
pub use iter::Nodes;

/// A single cell of a [`LinkedList`].
///
/// A node owns its payload and, while it is part of a list, the node that
/// follows it. Nodes are created detached with [`ListNode::new`] and handed to
/// [`LinkedList::prepend_to_head`] or [`LinkedList::append_to_tail`]; the
/// successor link is only ever managed by the list, so a node that is not in
/// a list never carries a chain with it.
///
/// # Examples
///
/// ```
/// use chain_map::linked_list::ListNode;
///
/// let node = ListNode::new("payload");
/// assert_eq!(node.data, "payload");
/// assert!(node.next().is_none());
/// ```
pub struct ListNode<T> {
    /// The payload carried by this node
    pub data: T,
    next: Option<Box<ListNode<T>>>,
}

impl<T> ListNode<T> {
    /// Creates a detached node holding `data`.
    pub fn new(data: T) -> Self {
        ListNode { data, next: None }
    }

    /// Returns the node that follows this one, if any.
    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }

    /// Returns a mutable reference to the node that follows this one, if any.
    ///
    /// Only the successor's payload can be changed through the returned
    /// reference; links stay under the control of the owning list.
    pub fn next_mut(&mut self) -> Option<&mut ListNode<T>> {
        self.next.as_deref_mut()
    }

    /// Consumes the node and returns its payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the immediate link, not the rest of the chain.
        f.debug_struct("ListNode")
            .field("data", &self.data)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// An ordered, singly linked chain of [`ListNode`]s.
///
/// The list owns its head node, every node owns its successor, and an empty
/// list simply has no head. The chain is always acyclic and finite.
///
/// `LinkedList` performs no internal synchronization. Sharing one between
/// threads for mutation requires an external lock (for example a single
/// `Mutex` owning the list).
///
/// # Examples
///
/// ```
/// use chain_map::linked_list::LinkedList;
///
/// let mut list: LinkedList<_> = [1, 2, 2, 3, 1].into_iter().collect();
/// assert_eq!(list.find_delete_duplicate(), 2);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u8> = LinkedList::new();
    /// assert!(list.is_empty());
    /// assert!(list.get_head().is_none());
    /// ```
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first node of the list, or `None` if the list is empty.
    pub fn get_head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// Returns a mutable reference to the first node of the list.
    pub fn get_head_mut(&mut self) -> Option<&mut ListNode<T>> {
        self.head.as_deref_mut()
    }

    /// Inserts `node` as the new head of the list in O(1).
    ///
    /// On an empty list the node becomes the only element. Otherwise the old
    /// head becomes the node's successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    /// use chain_map::linked_list::ListNode;
    ///
    /// let mut list = LinkedList::new();
    /// list.prepend_to_head(ListNode::new('b'));
    /// list.prepend_to_head(ListNode::new('a'));
    /// assert_eq!(list.get_head().map(|n| n.data), Some('a'));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn prepend_to_head(&mut self, node: ListNode<T>) {
        let mut node = Box::new(node);
        debug_assert!(node.next.is_none(), "detached nodes carry no successor");
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
        trace!("prepended node, length is now {}", self.len);
    }

    /// Inserts `node` at the end of the list.
    ///
    /// This walks the whole chain to find the last node, so it runs in O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    /// use chain_map::linked_list::ListNode;
    ///
    /// let mut list = LinkedList::new();
    /// list.append_to_tail(ListNode::new(1));
    /// list.append_to_tail(ListNode::new(2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn append_to_tail(&mut self, node: ListNode<T>) {
        debug_assert!(node.next.is_none(), "detached nodes carry no successor");
        *self.tail_slot() = Some(Box::new(node));
        self.len += 1;
        trace!("appended node, length is now {}", self.len);
    }

    /// Pushes `data` onto the front of the list.
    pub fn push_front(&mut self, data: T) {
        self.prepend_to_head(ListNode::new(data));
    }

    /// Pushes `data` onto the back of the list.
    pub fn push_back(&mut self, data: T) {
        self.append_to_tail(ListNode::new(data));
    }

    /// Detaches the head node and returns it.
    ///
    /// The returned node no longer links to the rest of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [1, 2].into_iter().collect();
    /// let node = list.pop_front().unwrap();
    /// assert_eq!(node.data, 1);
    /// assert!(node.next().is_none());
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop_front(&mut self) -> Option<ListNode<T>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(*node)
    }

    /// Removes every node from the list.
    pub fn clear(&mut self) {
        // Unlink one node at a time so that dropping a long chain does not
        // recurse once per node.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over the payloads, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references to the payloads, head to
    /// tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over the nodes themselves, head to tail.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Reorders the list in place by weaving its second half into its first.
    ///
    /// A slow/fast pointer pair finds the end of the first half, which holds
    /// `m = ceil(n / 2)` nodes. The second half is then detached and its nodes
    /// are spliced in one by one, giving `[1, m+1, 2, m+2, ...]`. For an even
    /// length this is exactly `[1, n/2+1, 2, n/2+2, ...]`; an odd length ends
    /// with the middle node `m`. Lists with fewer than two nodes are left
    /// unchanged. No node is allocated or freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = (1..=6).collect();
    /// list.runner_weave();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 4, 2, 5, 3, 6]);
    ///
    /// let mut odd: LinkedList<_> = (1..=5).collect();
    /// odd.runner_weave();
    /// assert_eq!(odd.iter().copied().collect::<Vec<_>>(), [1, 4, 2, 5, 3]);
    /// ```
    pub fn runner_weave(&mut self) {
        if self.len < 2 {
            return;
        }

        let first_half = self.first_half_len();
        let Some(last_of_first) = self.node_at_mut(first_half - 1) else {
            return;
        };
        let mut second = last_of_first.next.take();
        debug!(
            "weaving {} trailing nodes into the first {first_half}",
            self.len - first_half
        );

        let mut first = self.head.as_deref_mut();
        while let Some(node) = first {
            let Some(mut woven) = second.take() else {
                break;
            };
            second = woven.next.take();
            woven.next = node.next.take();
            first = node.next.insert(woven).next.as_deref_mut();
        }
    }

    /// Returns the node `k` positions from the end, where `k == 1` is the last
    /// node and `k == len()` is the head.
    ///
    /// A lead pointer is advanced `k - 1` nodes ahead of a trailing pointer,
    /// then both advance together until the lead reaches the last node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `k` is zero or larger than the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::Error;
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let list: LinkedList<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(list.find_k_to_last(1).unwrap().data, 'c');
    /// assert_eq!(list.find_k_to_last(3).unwrap().data, 'a');
    /// assert_eq!(
    ///     list.find_k_to_last(4).unwrap_err(),
    ///     Error::OutOfRange { k: 4, len: 3 }
    /// );
    /// ```
    pub fn find_k_to_last(&self, k: usize) -> Result<&ListNode<T>> {
        self.check_k_to_last(k)?;

        let mut lead = self.head.as_deref();
        for _ in 1..k {
            lead = lead.and_then(ListNode::next);
        }

        let (Some(mut lead), Some(mut trail)) = (lead, self.head.as_deref()) else {
            return Err(Error::OutOfRange { k, len: self.len });
        };
        while let (Some(next_lead), Some(next_trail)) = (lead.next(), trail.next()) {
            lead = next_lead;
            trail = next_trail;
        }

        Ok(trail)
    }

    /// Mutable counterpart of [`find_k_to_last`](Self::find_k_to_last).
    ///
    /// Two live mutable cursors into the chain are not possible, so instead of
    /// the lead/trail pair this walks `len() - k` nodes from the head using the
    /// cached length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `k` is zero or larger than the list.
    pub fn find_k_to_last_mut(&mut self, k: usize) -> Result<&mut ListNode<T>> {
        self.check_k_to_last(k)?;
        let len = self.len;
        self.node_at_mut(len - k)
            .ok_or(Error::OutOfRange { k, len })
    }

    /// Rejects `k` outside `1..=len()` before any pointer walk starts.
    fn check_k_to_last(&self, k: usize) -> Result<()> {
        if k == 0 || k > self.len {
            return Err(Error::OutOfRange { k, len: self.len });
        }
        Ok(())
    }

    /// Writes the payload of every node on its own line, head to tail.
    ///
    /// An empty list is rendered as `[]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let list: LinkedList<_> = ["x", "y"].into_iter().collect();
    /// let mut out = String::new();
    /// list.print_list(&mut out).unwrap();
    /// assert_eq!(out, "\"x\"\n\"y\"\n");
    /// ```
    pub fn print_list<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Debug,
    {
        if self.is_empty() {
            return writeln!(out, "[]");
        }
        for data in self.iter() {
            writeln!(out, "{data:?}")?;
        }
        Ok(())
    }

    /// Number of nodes in the first half, found by walking a fast pointer two
    /// nodes at a time while the slow pointer walks one.
    fn first_half_len(&self) -> usize {
        let Some(head) = self.head.as_deref() else {
            return 0;
        };
        let mut slow = head;
        let mut slow_position = 1;
        let mut fast = head;
        while let Some(two_ahead) = fast.next().and_then(ListNode::next) {
            fast = two_ahead;
            if let Some(next_slow) = slow.next() {
                slow = next_slow;
                slow_position += 1;
            }
        }
        slow_position
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }

    /// Returns the empty link after the last node.
    fn tail_slot(&mut self) -> &mut Option<Box<ListNode<T>>> {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        slot
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes every node whose payload equals the payload of an earlier node,
    /// keeping the first occurrence of each value.
    ///
    /// For each node, an inner cursor walks the rest of the chain and unlinks
    /// matches by handing the match's successor to the previous link. This runs
    /// in O(n²) time with O(1) extra space. Returns the number of nodes removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [3, 3, 1, 3, 2, 1].into_iter().collect();
    /// assert_eq!(list.find_delete_duplicate(), 3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 1, 2]);
    /// ```
    pub fn find_delete_duplicate(&mut self) -> usize {
        let mut removed = 0;

        let mut outer = self.head.as_deref_mut();
        while let Some(node) = outer {
            let mut cursor = &mut node.next;
            loop {
                match cursor {
                    None => break,
                    Some(candidate) if candidate.data == node.data => {
                        *cursor = candidate.next.take();
                        removed += 1;
                        trace!("unlinked duplicate node");
                    }
                    Some(candidate) => cursor = &mut candidate.next,
                }
            }
            outer = node.next.as_deref_mut();
        }

        self.len -= removed;
        debug!("removed {removed} duplicate nodes, {} remain", self.len);
        removed
    }

    /// Returns `true` if the payloads read the same head to tail as tail to
    /// head.
    ///
    /// While a slow/fast pointer pair searches for the midpoint, the payloads
    /// of the first half are pushed onto a stack. For odd lengths the exact
    /// middle node is skipped. The stack is then popped while walking the
    /// second half, stopping at the first mismatch. Empty and single-node
    /// lists are palindromes.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::linked_list::LinkedList;
    ///
    /// let odd: LinkedList<_> = [1, 2, 1].into_iter().collect();
    /// let even: LinkedList<_> = [1, 2, 2, 1].into_iter().collect();
    /// let not: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert!(odd.is_palindrome());
    /// assert!(even.is_palindrome());
    /// assert!(!not.is_palindrome());
    /// ```
    pub fn is_palindrome(&self) -> bool {
        let mut stack = Vec::with_capacity(self.len / 2);
        let mut slow = self.head.as_deref();
        let mut fast = self.head.as_deref();

        while let (Some(s), Some(f)) = (slow, fast) {
            let Some(one_ahead) = f.next() else {
                // Odd length: `s` is the middle node and has no partner.
                slow = s.next();
                break;
            };
            stack.push(&s.data);
            slow = s.next();
            fast = one_ahead.next();
        }

        for node in core::iter::successors(slow, |node| node.next()) {
            match stack.pop() {
                Some(data) if *data == node.data => {}
                _ => return false,
            }
        }

        stack.is_empty()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut slot = self.tail_slot();
        for data in iter {
            let node = slot.insert(Box::new(ListNode::new(data)));
            slot = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
