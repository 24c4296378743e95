pub mod linked_list;

pub use crate::linked_list::SinglyLinkedList;
