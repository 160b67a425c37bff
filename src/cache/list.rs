//! Recency List Module
//!
//! Doubly-linked list tracking touch order for LRU eviction:
//! front = most recently used, back = least recently used.
//!
//! Nodes live in a `Vec` arena and link to each other by index, with a free
//! list recycling vacated slots. Slot indices stay stable for the lifetime
//! of an item, so the store's key index can point straight at a slot and
//! every list operation is O(1). No `unsafe`, no raw pointers.

use crate::cache::CachedItem;

/// Sentinel value for null links in the doubly-linked list.
const NIL: usize = usize::MAX;

/// A node in the arena-based doubly-linked list.
///
/// `item` is `None` only while the slot sits on the free list.
#[derive(Debug)]
struct Node {
    item: Option<CachedItem>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Ordered sequence of cached items, most recently touched first.
#[derive(Debug)]
pub struct RecencyList {
    /// Arena of nodes
    arena: Vec<Node>,
    /// Slot of the most recently used item
    head: usize,
    /// Slot of the least recently used item (next eviction candidate)
    tail: usize,
    /// Head of the free list of vacated slots
    free_head: usize,
    /// Number of occupied slots
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            head: NIL,
            tail: NIL,
            free_head: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new item at the front (most recently used).
    ///
    /// Returns the slot index, which remains valid until the item is
    /// removed.
    pub fn push_front(&mut self, item: CachedItem) -> usize {
        let slot = self.alloc_slot(item);
        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Move To Front ==
    /// Marks the item at `slot` as most recently used.
    pub fn move_to_front(&mut self, slot: usize) {
        if self.head == slot {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Remove ==
    /// Removes the item at `slot`, returning it and recycling the slot.
    ///
    /// Returns `None` if the slot is vacant or out of range.
    pub fn remove(&mut self, slot: usize) -> Option<CachedItem> {
        let item = self.arena.get_mut(slot)?.item.take()?;
        self.unlink(slot);
        self.arena[slot].next = self.free_head;
        self.free_head = slot;
        self.len -= 1;
        Some(item)
    }

    // == Back ==
    /// Returns the slot of the least recently used item, if any.
    pub fn back(&self) -> Option<usize> {
        (self.tail != NIL).then_some(self.tail)
    }

    // == Get ==
    /// Returns the item at `slot` without changing its recency position.
    pub fn get(&self, slot: usize) -> Option<&CachedItem> {
        self.arena.get(slot)?.item.as_ref()
    }

    /// Mutable access to the item at `slot`, without changing its position.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut CachedItem> {
        self.arena.get_mut(slot)?.item.as_mut()
    }

    // == Length ==
    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    /// Returns true if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iterate ==
    /// Iterates over the items from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            current: self.head,
        }
    }

    // == Internal Link Operations ==
    /// Allocates a slot in the arena, reusing a free slot if available.
    fn alloc_slot(&mut self, item: CachedItem) -> usize {
        if self.free_head != NIL {
            let slot = self.free_head;
            self.free_head = self.arena[slot].next;
            self.arena[slot] = Node {
                item: Some(item),
                prev: NIL,
                next: NIL,
            };
            slot
        } else {
            self.arena.push(Node {
                item: Some(item),
                prev: NIL,
                next: NIL,
            });
            self.arena.len() - 1
        }
    }

    /// Detaches the node at `slot` from its neighbors.
    fn unlink(&mut self, slot: usize) {
        let prev = self.arena[slot].prev;
        let next = self.arena[slot].next;

        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.arena[slot].prev = NIL;
        self.arena[slot].next = NIL;
    }

    /// Links the node at `slot` in as the new head.
    fn link_front(&mut self, slot: usize) {
        self.arena[slot].prev = NIL;
        self.arena[slot].next = self.head;

        if self.head != NIL {
            self.arena[self.head].prev = slot;
        }
        self.head = slot;

        if self.tail == NIL {
            self.tail = slot;
        }
    }
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over items from most to least recently used.
#[derive(Debug)]
pub struct Iter<'a> {
    arena: &'a [Node],
    current: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CachedItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let node = &self.arena[self.current];
        self.current = node.next;
        node.item.as_ref()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn item(key: &str) -> CachedItem {
        CachedItem::new(key.to_string(), key.as_bytes().to_vec(), Duration::from_secs(60))
    }

    fn keys_front_to_back(list: &RecencyList) -> Vec<String> {
        list.iter().map(|i| i.key.clone()).collect()
    }

    #[test]
    fn test_list_new() {
        let list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();

        list.push_front(item("a"));
        list.push_front(item("b"));
        list.push_front(item("c"));

        assert_eq!(list.len(), 3);
        assert_eq!(keys_front_to_back(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_back_is_least_recent() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        list.push_front(item("b"));

        assert_eq!(list.back(), Some(a));
        assert_eq!(list.get(a).map(|i| i.key.as_str()), Some("a"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        list.push_front(item("b"));
        list.push_front(item("c"));

        list.move_to_front(a);

        assert_eq!(keys_front_to_back(&list), vec!["a", "c", "b"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_move_front_to_front_is_noop() {
        let mut list = RecencyList::new();

        list.push_front(item("a"));
        let b = list.push_front(item("b"));

        list.move_to_front(b);

        assert_eq!(keys_front_to_back(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::new();

        list.push_front(item("a"));
        let b = list.push_front(item("b"));
        list.push_front(item("c"));

        let removed = list.remove(b).unwrap();
        assert_eq!(removed.key, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(keys_front_to_back(&list), vec!["c", "a"]);
    }

    #[test]
    fn test_remove_only_item_empties_list() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        assert!(list.remove(a).is_some());

        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        assert_eq!(keys_front_to_back(&list), Vec::<String>::new());
    }

    #[test]
    fn test_remove_vacant_slot_is_none() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        list.remove(a);

        assert!(list.remove(a).is_none());
        assert!(list.remove(999).is_none());
    }

    #[test]
    fn test_slot_reuse_after_remove() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        list.push_front(item("b"));
        list.remove(a);

        // The vacated slot is recycled for the next insertion
        let c = list.push_front(item("c"));
        assert_eq!(c, a);
        assert_eq!(list.len(), 2);
        assert_eq!(keys_front_to_back(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        list.get_mut(a).unwrap().payload = b"updated".to_vec();

        assert_eq!(list.get(a).unwrap().payload, b"updated");
    }

    #[test]
    fn test_eviction_order_after_touches() {
        let mut list = RecencyList::new();

        let a = list.push_front(item("a"));
        let b = list.push_front(item("b"));
        let c = list.push_front(item("c"));

        // Touch in order a, c, b: eviction order becomes a, c, b
        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        assert_eq!(list.remove(list.back().unwrap()).unwrap().key, "a");
        assert_eq!(list.remove(list.back().unwrap()).unwrap().key, "c");
        assert_eq!(list.remove(list.back().unwrap()).unwrap().key, "b");
        assert!(list.is_empty());
    }
}
