//! Arena binary-tree helpers.
//!
//! All functions take the arena and node indices; the caller owns the root
//! and receives the new root from mutating helpers.

use std::cmp::Ordering;

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds the node holding `value`.
pub fn find<N>(arena: &[N], root: Option<u32>, value: &N::Value) -> Option<u32>
where
    N: Node,
    N::Value: Ord,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match value.cmp(arena[i as usize].value()) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut pending: Vec<u32> = root.into_iter().collect();
    while let Some(i) = pending.pop() {
        count += 1;
        pending.extend(get_l(arena, i));
        pending.extend(get_r(arena, i));
    }
    count
}

/// Number of levels under `root`; an empty tree has height 0.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut pending: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = pending.pop() {
        max = max.max(depth);
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            pending.push((child, depth + 1));
        }
    }
    max
}

/// Points `parent`'s link at `old` to `new` instead, returning the new root.
fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    if let Some(n) = new {
        set_p(arena, n, parent);
    }
    match parent {
        None => new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
    }
}

/// Unlinks `node` from the tree rooted at `root`.
///
/// A node with two children is replaced by its in-order successor, which
/// takes over both subtrees. Returns the new root. The removed node is left
/// in the arena with all links cleared.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    match (l, r) {
        (None, None) => replace_child(arena, root, p, node, None),
        (Some(child), None) | (None, Some(child)) => {
            replace_child(arena, root, p, node, Some(child))
        }
        (Some(l), Some(r)) => {
            let mut succ = r;
            while let Some(sl) = get_l(arena, succ) {
                succ = sl;
            }
            if succ != r {
                // Detach the successor; its right subtree takes its place.
                let sp = get_p(arena, succ);
                let sr = get_r(arena, succ);
                if let Some(sp) = sp {
                    set_l(arena, sp, sr);
                }
                if let Some(sr) = sr {
                    set_p(arena, sr, sp);
                }
                set_r(arena, succ, Some(r));
                set_p(arena, r, Some(succ));
            }
            set_l(arena, succ, Some(l));
            set_p(arena, l, Some(succ));
            replace_child(arena, root, p, node, Some(succ))
        }
    }
}

/// Moves the node stored at arena slot `from` into slot `to`, repointing
/// every link (and `root`) that referenced `from`. Returns the new root.
///
/// Used to compact an arena after `swap_remove`.
pub(crate) fn relocate<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    from: u32,
    to: u32,
) -> Option<u32> {
    let p = get_p(arena, from);
    let l = get_l(arena, from);
    let r = get_r(arena, from);
    if let Some(l) = l {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = r {
        set_p(arena, r, Some(to));
    }
    match p {
        Some(p) => {
            if get_l(arena, p) == Some(from) {
                set_l(arena, p, Some(to));
            } else {
                set_r(arena, p, Some(to));
            }
            root
        }
        None => Some(to),
    }
}
