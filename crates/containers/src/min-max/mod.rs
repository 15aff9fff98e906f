//! Stack and queue answering current minimum and maximum in O(1).

#[path = "MinMaxQueue.rs"]
pub mod min_max_queue;
#[path = "MinMaxStack.rs"]
pub mod min_max_stack;

pub use min_max_queue::MinMaxQueue;
pub use min_max_stack::MinMaxStack;
