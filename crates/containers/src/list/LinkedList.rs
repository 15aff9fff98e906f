use super::list_node::ListNode;

/// Doubly linked list with O(1) insertion and removal at both ends.
///
/// Nodes live in an arena owned by the list; `prev` / `next` are arena
/// indices. Removing a node moves the last arena slot into the hole, so the
/// arena length always equals the element count.
///
/// The list also carries an iteration cursor. Removing the node under the
/// cursor moves the cursor to the node's successor, or to its predecessor when
/// it was the back node.
///
/// Links are `u32`, so a list holds at most `u32::MAX` elements.
pub struct LinkedList<T> {
    nodes: Vec<ListNode<T>>,
    front: Option<u32>,
    back: Option<u32>,
    cursor: Option<u32>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            front: None,
            back: None,
            cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.front.map(|i| &self.nodes[i as usize].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.back.map(|i| &self.nodes[i as usize].value)
    }

    fn push_node(&mut self, value: T) -> u32 {
        debug_assert!(self.nodes.len() < u32::MAX as usize, "list arena full");
        self.nodes.push(ListNode::new(value));
        (self.nodes.len() - 1) as u32
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.push_node(value);
        self.nodes[node as usize].next = self.front;
        match self.front {
            Some(f) => self.nodes[f as usize].prev = Some(node),
            None => self.back = Some(node),
        }
        self.front = Some(node);
    }

    pub fn push_back(&mut self, value: T) {
        let node = self.push_node(value);
        self.nodes[node as usize].prev = self.back;
        match self.back {
            Some(b) => self.nodes[b as usize].next = Some(node),
            None => self.front = Some(node),
        }
        self.back = Some(node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.front?;
        Some(self.remove_node(node))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.back?;
        Some(self.remove_node(node))
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == len()` appends. Returns `false` without inserting when
    /// `index > len()`.
    pub fn insert(&mut self, value: T, index: usize) -> bool {
        if index > self.len() {
            return false;
        }
        if index == 0 {
            self.push_front(value);
            return true;
        }
        let Some(at) = self.node_at(index) else {
            self.push_back(value);
            return true;
        };
        let before = self.nodes[at as usize].prev;
        let node = self.push_node(value);
        self.nodes[node as usize].prev = before;
        self.nodes[node as usize].next = Some(at);
        self.nodes[at as usize].prev = Some(node);
        if let Some(b) = before {
            self.nodes[b as usize].next = Some(node);
        }
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let node = self.node_at(index)?;
        Some(self.remove_node(node))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|i| &self.nodes[i as usize].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.node_at(index)?;
        Some(&mut self.nodes[node as usize].value)
    }

    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.back = None;
        self.cursor = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.front,
            back: self.back,
            remaining: self.len(),
        }
    }

    /// Places the cursor on the front node.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.front;
    }

    /// Value under the cursor.
    pub fn cursor(&self) -> Option<&T> {
        self.cursor.map(|i| &self.nodes[i as usize].value)
    }

    /// Moves the cursor one node towards the back and returns the new
    /// current value. Past the back node the cursor is cleared.
    pub fn advance(&mut self) -> Option<&T> {
        self.cursor = self.cursor.and_then(|i| self.nodes[i as usize].next);
        self.cursor()
    }

    /// Moves the cursor one node towards the front.
    pub fn retreat(&mut self) -> Option<&T> {
        self.cursor = self.cursor.and_then(|i| self.nodes[i as usize].prev);
        self.cursor()
    }

    /// Walks from whichever end is closer to `index`.
    fn node_at(&self, index: usize) -> Option<u32> {
        let len = self.len();
        if index >= len {
            return None;
        }
        if index < len - index {
            let mut curr = self.front?;
            for _ in 0..index {
                curr = self.nodes[curr as usize].next?;
            }
            Some(curr)
        } else {
            let mut curr = self.back?;
            for _ in 0..(len - 1 - index) {
                curr = self.nodes[curr as usize].prev?;
            }
            Some(curr)
        }
    }

    /// Unlinks `node`, compacts the arena and returns the node's value.
    fn remove_node(&mut self, node: u32) -> T {
        let (prev, next) = (self.nodes[node as usize].prev, self.nodes[node as usize].next);
        match prev {
            Some(p) => self.nodes[p as usize].next = next,
            None => self.front = next,
        }
        match next {
            Some(n) => self.nodes[n as usize].prev = prev,
            None => self.back = prev,
        }
        if self.cursor == Some(node) {
            self.cursor = next.or(prev);
        }

        let last = (self.nodes.len() - 1) as u32;
        if node != last {
            let (prev, next) = (self.nodes[last as usize].prev, self.nodes[last as usize].next);
            match prev {
                Some(p) => self.nodes[p as usize].next = Some(node),
                None => self.front = Some(node),
            }
            match next {
                Some(n) => self.nodes[n as usize].prev = Some(node),
                None => self.back = Some(node),
            }
            if self.cursor == Some(last) {
                self.cursor = Some(node);
            }
        }
        self.nodes.swap_remove(node as usize).value
    }

    /// Checks link symmetry and that a front-to-back walk visits every node.
    pub fn assert_valid(&self) -> Result<(), String> {
        if let Some(f) = self.front {
            if self.nodes[f as usize].prev.is_some() {
                return Err("Front node has a predecessor".to_string());
            }
        }
        if let Some(b) = self.back {
            if self.nodes[b as usize].next.is_some() {
                return Err("Back node has a successor".to_string());
            }
        }
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.front;
        while let Some(i) = curr {
            if self.nodes[i as usize].prev != prev {
                return Err(format!("Broken prev link on node {i}"));
            }
            count += 1;
            if count > self.nodes.len() {
                return Err("Cycle in next links".to_string());
            }
            prev = curr;
            curr = self.nodes[i as usize].next;
        }
        if prev != self.back {
            return Err("Walk from front does not end at back".to_string());
        }
        if count != self.nodes.len() {
            return Err(format!("Visited {count} of {} nodes", self.nodes.len()));
        }
        Ok(())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.front? as usize];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.back? as usize];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
