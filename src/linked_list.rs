use alloc::{boxed::Box, string::String};
use core::{
    fmt::{self, Debug, Display, Formatter, Write as _},
    marker::PhantomData,
    ptr::NonNull,
};

type NodePtr<T> = NonNull<Node<T>>;

/// Ordered doubly linked sequence of owned payloads.
///
/// `head` and `tail` are both `None` exactly when `len` is zero; following
/// `next` from the head reaches the tail in `len` steps, and `prev`/`next`
/// are mutual inverses for every adjacent pair.
pub struct LinkedList<T> {
    head: Option<NodePtr<T>>,
    tail: Option<NodePtr<T>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

/*
a is head, b is a's next and a is b's prev
so for b
next goes toward the tail
 a <-prev-> b <-next-> c
*/

struct Node<T> {
    value: T,
    prev: Option<NodePtr<T>>,
    next: Option<NodePtr<T>>,
}

impl<T> Node<T> {
    fn link(value: T, prev: Option<NodePtr<T>>, next: Option<NodePtr<T>>) -> NodePtr<T> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }

    /// Takes the payload back from the heap. The node must already be
    /// unlinked from its neighbors.
    unsafe fn reclaim(ptr: NodePtr<T>) -> T {
        Box::from_raw(ptr.as_ptr()).value
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends `item` ahead of the current head.
    pub fn push_front(&mut self, item: T) {
        let node = Node::link(item, None, self.head);
        match self.head {
            Some(mut h) => unsafe { h.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends `item` behind the current tail.
    pub fn push_back(&mut self, item: T) {
        let node = Node::link(item, self.tail, None);
        match self.tail {
            Some(mut t) => unsafe { t.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Places `item` so every adjacent pair stays non-decreasing. Anything
    /// strictly below the front prepends, anything greater-or-equal to the
    /// back appends, and equal elements land after the ones already stored.
    pub fn insert_sorted(&mut self, item: T)
    where
        T: Ord,
    {
        let (head, tail) = match (self.head, self.tail) {
            (Some(h), Some(t)) => (h, t),
            _ => return self.push_front(item),
        };
        unsafe {
            if item < head.as_ref().value {
                return self.push_front(item);
            }
            if item >= tail.as_ref().value {
                return self.push_back(item);
            }
            // item now sits strictly inside (front ..= back), so a strictly
            // greater node exists before the scan runs off the tail
            let mut cur = Some(head);
            while let Some(n) = cur {
                if item < n.as_ref().value {
                    return self.splice_before(n, item);
                }
                cur = n.as_ref().next;
            }
            self.push_back(item);
        }
    }

    /// Links a fresh node immediately ahead of `node`.
    unsafe fn splice_before(&mut self, mut node: NodePtr<T>, item: T) {
        let prev = node.as_ref().prev;
        let fresh = Node::link(item, prev, Some(node));
        node.as_mut().prev = Some(fresh);
        match prev {
            Some(mut p) => p.as_mut().next = Some(fresh),
            None => self.head = Some(fresh),
        }
        self.len += 1;
    }

    /// Unhooks `node` from both neighbors and returns its payload.
    unsafe fn detach(&mut self, node: NodePtr<T>) -> T {
        let prev = node.as_ref().prev;
        let next = node.as_ref().next;
        match prev {
            Some(mut p) => p.as_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(mut n) => n.as_mut().prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        Node::reclaim(node)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;
        Some(unsafe { self.detach(node) })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.tail?;
        Some(unsafe { self.detach(node) })
    }

    /// Removes the first payload (head to tail) equal to `target` and hands
    /// it back, or `None` when nothing matches.
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(node) = cur {
            unsafe {
                if node.as_ref().value == *target {
                    return Some(self.detach(node));
                }
                cur = node.as_ref().next;
            }
        }
        None
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    /// Position of the first payload equal to `target`, head being 0.
    pub fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == target)
    }

    /// Payload at `index` by linear scan from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(target).is_some()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head,
            marker: PhantomData,
        }
    }

    /// Cursor positioned at the head. The list stays borrowed for the
    /// cursor's lifetime, so structural mutation while it is live is a
    /// compile error rather than an invalidated iterator.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            node: self.head,
        }
    }

    /// Tail-to-head counterpart of the `Display` rendering: every payload's
    /// `Display` output concatenated with nothing in between.
    pub fn to_string_reverse(&self) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        let mut cur = self.tail;
        while let Some(n) = cur {
            let node = unsafe { &*n.as_ptr() };
            let _ = write!(out, "{}", node.value);
            cur = node.prev;
        }
        out
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for v in self.iter() {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList {{ ")?;
        for v in self.iter() {
            write!(f, "{v:?} ")?;
        }
        write!(f, "}}")
    }
}

pub struct Iter<'a, T> {
    node: Option<NodePtr<T>>,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.node?;
        let node = unsafe { &*n.as_ptr() };
        self.node = node.next;
        Some(&node.value)
    }
}

/// Bidirectional position marker over a list. `next`/`prev` hand back the
/// payload under the cursor and then step it one node in that direction, so
/// a fresh cursor yields every payload exactly once before running dry.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    node: Option<NodePtr<T>>,
}

impl<'a, T> Cursor<'a, T> {
    /// Payload at the current position, cursor stepped toward the tail.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a T> {
        let n = self.node?;
        let node = unsafe { &*n.as_ptr() };
        self.node = node.next;
        Some(&node.value)
    }

    /// Payload at the current position, cursor stepped toward the head.
    pub fn prev(&mut self) -> Option<&'a T> {
        let n = self.node?;
        let node = unsafe { &*n.as_ptr() };
        self.node = node.prev;
        Some(&node.value)
    }

    /// Back to the list's head.
    pub fn reset(&mut self) {
        self.node = self.list.head;
    }

    /// Jump to the list's tail, for tail-to-head passes with `prev`.
    pub fn reset_back(&mut self) {
        self.node = self.list.tail;
    }
}
