use crate::types::Node;

/// Arena node of a [`super::LinkedBst`].
#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
    /// Number of inserted copies of `value`; always at least 1.
    pub count: usize,
}

impl<T> BstNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
            count: 1,
        }
    }
}

impl<T> Node for BstNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
