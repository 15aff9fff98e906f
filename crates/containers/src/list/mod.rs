//! Doubly linked list and the LIFO / FIFO adapters built on it.

#[path = "LinkedList.rs"]
pub mod linked_list;
#[path = "ListNode.rs"]
pub mod list_node;
#[path = "Queue.rs"]
pub mod queue;
#[path = "Stack.rs"]
pub mod stack;

pub use linked_list::{Iter, LinkedList};
pub use list_node::ListNode;
pub use queue::Queue;
pub use stack::Stack;
