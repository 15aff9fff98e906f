/// Arena node of a [`super::LinkedList`].
#[derive(Clone, Debug)]
pub struct ListNode<T> {
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub value: T,
}

impl<T> ListNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            prev: None,
            next: None,
            value,
        }
    }
}
