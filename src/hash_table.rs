use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use crate::traits::{BucketHash, ModHash};

type EntryPtr<V> = NonNull<Entry<V>>;

/// Fixed-size separate-chaining hash table keyed by `i64`.
///
/// The bucket array is sized once at creation and never grows, whatever the
/// load factor does. Every entry reachable from bucket `i` hashed to `i`,
/// and each bucket chain holds at most one entry per key.
///
/// The hasher must return an index in `[0, size)`; the table indexes its
/// bucket slice with the result directly, so an out-of-range index panics.
/// A zero-size table satisfies lookups and removes with `None`, but `insert`
/// panics since no bucket can exist for the entry.
pub struct HashTable<V, H = ModHash> {
    buckets: Box<[Bucket<V>]>,
    len: usize,
    hasher: H,
}

struct Entry<V> {
    key: i64,
    val: V,
    next: Option<EntryPtr<V>>,
}

impl<V> Entry<V> {
    fn link(key: i64, val: V) -> EntryPtr<V> {
        NonNull::from(Box::leak(Box::new(Entry {
            key,
            val,
            next: None,
        })))
    }

    /// Takes the payload back from the heap. The entry must already be
    /// unlinked from its chain.
    unsafe fn reclaim(ptr: EntryPtr<V>) -> V {
        Box::from_raw(ptr.as_ptr()).val
    }
}

impl<V> HashTable<V, ModHash> {
    /// Table of `size` empty buckets with modulo placement.
    pub fn new(size: usize) -> Self {
        Self::with_hasher(size, ModHash)
    }
}

impl<V, H: BucketHash> HashTable<V, H> {
    /// Table of `size` empty buckets placing entries via `hasher`.
    pub fn with_hasher(size: usize, hasher: H) -> Self {
        let buckets: Vec<Bucket<V>> = (0..size).map(|_| Bucket::default()).collect();
        Self {
            buckets: buckets.into_boxed_slice(),
            len: 0,
            hasher,
        }
    }

    fn key_index(&self, key: i64) -> usize {
        self.hasher.bucket(self.buckets.len(), key)
    }

    /// Stores `val` under `key`. A fresh key appends an entry at the end of
    /// its bucket's chain; an existing key swaps the payload in place and
    /// hands the old one back.
    pub fn insert(&mut self, key: i64, val: V) -> Option<V> {
        let index = self.key_index(key);
        let prior = self.buckets[index].insert(key, val);
        if prior.is_none() {
            self.len += 1;
        }
        prior
    }

    /// Unlinks the entry under `key` and returns its payload.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }
        let index = self.key_index(key);
        let entry = self.buckets[index].remove(key)?;
        self.len -= 1;
        Some(unsafe { Entry::reclaim(entry) })
    }

    pub fn lookup(&self, key: i64) -> Option<&V> {
        if self.buckets.is_empty() {
            return None;
        }
        let index = self.key_index(key);
        self.buckets[index]
            .find(key)
            .map(|e| unsafe { &(*e.as_ptr()).val })
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.lookup(key).is_some()
    }
}

impl<V, H> HashTable<V, H> {
    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at creation.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// All entries in bucket-index order, chain order within a bucket.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            index: 0,
            node: None,
            marker: PhantomData,
        }
    }
}

impl<V, H> Drop for HashTable<V, H> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut cur = bucket.head.take();
            while let Some(entry) = cur {
                let owned = unsafe { Box::from_raw(entry.as_ptr()) };
                cur = owned.next;
            }
        }
    }
}

impl<V: Display, H> Display for HashTable<V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (_, v) in self.iter() {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<V: Debug, H> Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HashTable {{ capacity: {}, len: {}, entries: {{",
            self.buckets.len(),
            self.len
        )?;
        let mut iter = self.iter();
        if let Some((k, v)) = iter.next() {
            write!(f, "({k}, {v:?})")?;
        }
        for (k, v) in iter {
            write!(f, ", ({k}, {v:?})")?;
        }
        write!(f, "}} }}")
    }
}

struct Bucket<V> {
    head: Option<EntryPtr<V>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self { head: None }
    }
}

impl<V> Bucket<V> {
    fn find(&self, key: i64) -> Option<EntryPtr<V>> {
        let mut cur = self.head;
        while let Some(entry) = cur {
            unsafe {
                if entry.as_ref().key == key {
                    return Some(entry);
                }
                cur = entry.as_ref().next;
            }
        }
        None
    }

    /// Swap-in-place on a key match, otherwise append a fresh entry at the
    /// end of the chain.
    fn insert(&mut self, key: i64, mut val: V) -> Option<V> {
        let mut cur = self.head;
        let mut last: Option<EntryPtr<V>> = None;
        while let Some(mut entry) = cur {
            unsafe {
                if entry.as_ref().key == key {
                    mem::swap(&mut entry.as_mut().val, &mut val);
                    return Some(val);
                }
                last = Some(entry);
                cur = entry.as_ref().next;
            }
        }
        let fresh = Entry::link(key, val);
        match last {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(fresh) },
            None => self.head = Some(fresh),
        }
        None
    }

    /// Unlinks the entry with `key` from the chain without freeing it.
    fn remove(&mut self, key: i64) -> Option<EntryPtr<V>> {
        let mut prev: Option<EntryPtr<V>> = None;
        let mut cur = self.head;
        while let Some(entry) = cur {
            unsafe {
                if entry.as_ref().key == key {
                    let next = entry.as_ref().next;
                    match prev {
                        Some(mut p) => p.as_mut().next = next,
                        None => self.head = next,
                    }
                    return Some(entry);
                }
                prev = Some(entry);
                cur = entry.as_ref().next;
            }
        }
        None
    }
}

pub struct Iter<'a, V> {
    buckets: &'a [Bucket<V>],
    index: usize,
    node: Option<EntryPtr<V>>,
    marker: PhantomData<&'a Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.node {
                let e = unsafe { &*entry.as_ptr() };
                self.node = e.next;
                return Some((e.key, &e.val));
            }
            if self.index >= self.buckets.len() {
                return None;
            }
            self.node = self.buckets[self.index].head;
            self.index += 1;
        }
    }
}
