//! Eviction List Module
//!
//! Recency ordering of cache entries as a doubly-linked list stored in a
//! slot arena, so that promotion and removal are O(1).

use super::entry::Entry;

/// Handle to an entry's position in the list.
pub type Slot = usize;

#[derive(Debug)]
struct Node<V> {
    entry: Entry<V>,
    prev: Option<Slot>,
    next: Option<Slot>,
}

// == Eviction List ==
/// Orders entries by access time:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Removed slots are recycled through a free list, so a slot handle is only
/// meaningful until its entry is removed.
#[derive(Debug)]
pub struct EvictionList<V> {
    slots: Vec<Option<Node<V>>>,
    free: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
    len: usize,
}

impl<V> Default for EvictionList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> EvictionList<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry as the most recently used and returns its slot.
    pub fn push_front(&mut self, entry: Entry<V>) -> Slot {
        let node = Node {
            entry,
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Remove ==
    /// Unlinks the entry at `slot` and hands it back.
    ///
    /// Returns None if the slot is vacant.
    pub fn remove(&mut self, slot: Slot) -> Option<Entry<V>> {
        if self.node(slot).is_none() {
            return None;
        }
        self.unlink(slot);
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes the least recently used entry, returning it with the slot it
    /// occupied.
    pub fn pop_back(&mut self) -> Option<(Slot, Entry<V>)> {
        let slot = self.tail?;
        self.remove(slot).map(|entry| (slot, entry))
    }

    // == Move To Front ==
    /// Marks the entry at `slot` as most recently used.
    pub fn move_to_front(&mut self, slot: Slot) {
        if self.head == Some(slot) || self.node(slot).is_none() {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Accessors ==
    /// Returns the slot of the least recently used entry.
    pub fn back(&self) -> Option<Slot> {
        self.tail
    }

    pub fn get(&self, slot: Slot) -> Option<&Entry<V>> {
        self.node(slot).map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut Entry<V>> {
        self.slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .map(|node| &mut node.entry)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Linking ==
    fn node(&self, slot: Slot) -> Option<&Node<V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn link_front(&mut self, slot: Slot) {
        let old_head = self.head;
        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(Some(node)) = self.slots.get_mut(head) {
                    node.prev = Some(slot);
                }
            }
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    fn unlink(&mut self, slot: Slot) {
        let (prev, next) = match self.node(slot) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(Some(node)) = self.slots.get_mut(prev) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next) => {
                if let Some(Some(node)) = self.slots.get_mut(next) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.prev = None;
            node.next = None;
        }
    }
}

// == Iterator ==
/// Front-to-back iterator yielding `(slot, entry)` pairs.
pub struct Iter<'a, V> {
    list: &'a EvictionList<V>,
    cursor: Option<Slot>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Slot, &'a Entry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.list.node(slot)?;
        self.cursor = node.next;
        Some((slot, &node.entry))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> Entry<u32> {
        Entry::new(key.to_string(), 0, None, 0)
    }

    fn keys(list: &EvictionList<u32>) -> Vec<&str> {
        list.iter().map(|(_, e)| e.key.as_str()).collect()
    }

    fn back_key(list: &EvictionList<u32>) -> Option<&str> {
        list.back()
            .and_then(|slot| list.get(slot))
            .map(|e| e.key.as_str())
    }

    #[test]
    fn test_list_new() {
        let list: EvictionList<u32> = EvictionList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_front_orders_by_recency() {
        let mut list = EvictionList::new();

        list.push_front(entry("key1"));
        list.push_front(entry("key2"));
        list.push_front(entry("key3"));

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(back_key(&list), Some("key1"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = EvictionList::new();

        let a = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        list.move_to_front(a);

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(back_key(&list), Some("b"));
    }

    #[test]
    fn test_move_to_front_of_head_is_noop() {
        let mut list = EvictionList::new();

        list.push_front(entry("a"));
        let b = list.push_front(entry("b"));

        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_pop_back() {
        let mut list = EvictionList::new();

        list.push_front(entry("key1"));
        list.push_front(entry("key2"));
        list.push_front(entry("key3"));

        assert_eq!(list.pop_back().map(|(_, e)| e.key), Some("key1".to_string()));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_back().map(|(_, e)| e.key), Some("key2".to_string()));
        assert_eq!(list.pop_back().map(|(_, e)| e.key), Some("key3".to_string()));
        assert!(list.is_empty());
        assert!(list.pop_back().is_none());
    }

    #[test]
    fn test_pop_back_reports_slot() {
        let mut list = EvictionList::new();

        let oldest = list.push_front(entry("key1"));
        list.push_front(entry("key2"));

        let (slot, evicted) = list.pop_back().unwrap();
        assert_eq!(slot, oldest);
        assert_eq!(evicted.key, "key1");
        assert!(list.get(oldest).is_none());
    }

    #[test]
    fn test_remove_middle() {
        let mut list = EvictionList::new();

        list.push_front(entry("key1"));
        let middle = list.push_front(entry("key2"));
        list.push_front(entry("key3"));

        let removed = list.remove(middle).unwrap();

        assert_eq!(removed.key, "key2");
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["key3", "key1"]);
        assert!(list.get(middle).is_none());
    }

    #[test]
    fn test_remove_vacant_slot() {
        let mut list = EvictionList::new();

        let slot = list.push_front(entry("key1"));
        list.remove(slot);

        assert!(list.remove(slot).is_none());
        assert!(list.remove(42).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = EvictionList::new();

        let first = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.remove(first);

        let reused = list.push_front(entry("c"));

        assert_eq!(reused, first);
        assert_eq!(keys(&list), vec!["c", "b"]);
        assert_eq!(back_key(&list), Some("b"));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = EvictionList::new();

        let a = list.push_front(entry("a"));
        let b = list.push_front(entry("b"));
        let c = list.push_front(entry("c"));

        // touch a, c, b: front=[b, c, a]=back
        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        assert_eq!(list.pop_back().map(|(_, e)| e.key), Some("a".to_string()));
        assert_eq!(list.pop_back().map(|(_, e)| e.key), Some("c".to_string()));
        assert_eq!(list.pop_back().map(|(_, e)| e.key), Some("b".to_string()));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = EvictionList::new();

        let slot = list.push_front(entry("a"));
        if let Some(e) = list.get_mut(slot) {
            e.value = 7;
        }

        assert_eq!(list.get(slot).map(|e| e.value), Some(7));
    }
}
