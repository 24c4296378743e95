use std::fmt;
use std::iter::FromIterator;

/// A singly linked list that only grows at its tail.
///
/// The list owns its head node and every node owns its successor, so dropping the list frees
/// the whole chain. There is no cached tail: `add` walks the chain to find the last node.
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Node<T> {
        Node { value, next: None }
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList { head: None, size: 0 }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.get_size() == 0
    }

    /// Appends `item` after the current last node, or makes it the head of an empty list.
    pub fn add(&mut self, item: T) {
        let mut current = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        *current = Some(Box::new(Node::new(item)));
        self.size += 1;
        log::trace!("appended node, list size is now {}", self.size);
    }

    /// Value stored in the first node.
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Value stored in the last node.
    pub fn tail(&self) -> Option<&T> {
        self.values().last()
    }

    pub(crate) fn values(&self) -> Values<'_, T> {
        Values { current: &self.head }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

/// Borrowing walk over the values, front to back.
pub(crate) struct Values<'a, T> {
    current: &'a Option<Box<Node<T>>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current.as_ref()?;
        self.current = &node.next;
        Some(&node.value)
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default drop would recurse down the whole chain.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Same result as calling `add` for each item, but the tail is found only once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut current = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        for item in iter {
            let node = current.insert(Box::new(Node::new(item)));
            current = &mut node.next;
            self.size += 1;
        }
        log::trace!("extended list, size is now {}", self.size);
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
        list.values().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.get_size(), 0);
        assert!(list.head.is_none());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn add_to_empty_list_sets_head() {
        let mut list = SinglyLinkedList::new();
        list.add("first");
        let head = list.head.as_ref().expect("head should be set");
        assert_eq!(head.value, "first");
        assert!(head.next.is_none());
        assert_eq!(list.get_size(), 1);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut list = SinglyLinkedList::new();
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.get_size(), 3);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.tail(), Some(&3));
    }

    #[test]
    fn chain_length_matches_size() {
        let mut list = SinglyLinkedList::new();
        for i in 0..50 {
            list.add(i);
        }
        let mut nodes = 0;
        let mut current = &list.head;
        while let Some(node) = current {
            nodes += 1;
            current = &node.next;
        }
        assert_eq!(nodes, 50);
        assert_eq!(list.get_size(), 50);
    }

    #[test]
    fn duplicates_become_distinct_nodes() {
        let mut list = SinglyLinkedList::new();
        list.add(5);
        list.add(5);
        assert_eq!(contents(&list), vec![5, 5]);
        let first = list.head.as_ref().unwrap();
        let second = first.next.as_ref().unwrap();
        assert!(!std::ptr::eq(&**first, &**second));
    }

    #[test]
    fn add_grows_by_one_each_call() {
        let mut list = SinglyLinkedList::new();
        for expected in 1..=10 {
            list.add('x');
            assert_eq!(list.get_size(), expected);
        }
    }

    #[test]
    fn display_and_debug() {
        let list: SinglyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), " 1 2 3");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        let empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(empty.to_string(), "");
        assert_eq!(format!("{:?}", empty), "[]");
    }
}
