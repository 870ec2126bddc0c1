//! Recency List Module
//!
//! Arena-backed doubly linked list that orders entries for LRU eviction.

use crate::cache::CacheEntry;

// == Recency List ==
/// Orders live entries by access time.
///
/// Entries live in a slot arena and link to each other by slot id:
/// - Head = Least recently used
/// - Tail = Most recently used
///
/// Freed slots are recycled, so slot ids stay stable for as long as the entry
/// they name is linked.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Slot arena, None = free slot
    slots: Vec<Option<CacheEntry<K, V>>>,
    /// Free slot ids ready for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Push Tail ==
    /// Stores `entry` and links it as the most recently used.
    ///
    /// Returns the slot id the entry now lives in.
    pub fn push_tail(&mut self, entry: CacheEntry<K, V>) -> usize {
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.append_tail(slot);
        self.len += 1;
        slot
    }

    // == Append Tail ==
    /// Links an occupied but unlinked slot after the current tail.
    fn append_tail(&mut self, slot: usize) {
        let old_tail = self.tail;
        if let Some(entry) = self.slots[slot].as_mut() {
            entry.prev = old_tail;
            entry.next = None;
        }

        match old_tail.and_then(|t| self.slots[t].as_mut()) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    // == Unlink ==
    /// Detaches a slot from its neighbours, wherever it sits.
    ///
    /// The entry stays in its slot; head and tail are moved if it was an end.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = match self.slots[slot].as_mut() {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };

        match prev.and_then(|p| self.slots[p].as_mut()) {
            Some(prev_entry) => prev_entry.next = next,
            None => self.head = next,
        }

        match next.and_then(|n| self.slots[n].as_mut()) {
            Some(next_entry) => next_entry.prev = prev,
            None => self.tail = prev,
        }
    }

    // == Move To Tail ==
    /// Marks a slot as most recently used.
    pub fn move_to_tail(&mut self, slot: usize) {
        if self.tail == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.append_tail(slot);
    }

    // == Remove ==
    /// Unlinks a slot and hands back its entry, freeing the slot.
    pub fn remove(&mut self, slot: usize) -> Option<CacheEntry<K, V>> {
        self.slots.get(slot)?.as_ref()?;
        self.unlink(slot);
        let entry = self.slots[slot].take()?;
        self.free.push(slot);
        self.len -= 1;
        Some(entry)
    }

    // == Pop Head ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_head(&mut self) -> Option<CacheEntry<K, V>> {
        let head = self.head?;
        self.remove(head)
    }

    // == Get ==
    /// Returns the entry stored in `slot`, if occupied.
    pub fn get(&self, slot: usize) -> Option<&CacheEntry<K, V>> {
        self.slots.get(slot)?.as_ref()
    }

    /// Mutable access to the entry stored in `slot`.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut CacheEntry<K, V>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Slot of the least recently used entry.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Slot of the most recently used entry.
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    // == Iter ==
    /// Walks entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Clear ==
    /// Drops every entry and empties the arena, keeping its allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    /// Returns true if no entry is linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Head-to-tail iterator over a [`RecencyList`].
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a CacheEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.cursor?)?;
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
