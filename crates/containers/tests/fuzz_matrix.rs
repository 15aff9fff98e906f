use std::collections::{BTreeMap, BTreeSet, VecDeque};

use sneklib_containers::{
    ArrayBst, BinaryHeap, LinkedBst, LinkedList, MinMaxQueue, Queue, Stack, Trie,
};
use sneklib_util::{Fuzzer, Op};

const SEEDS: [u64; 6] = [1, 7, 42, 1234, 99_991, 0xdead_beef];

#[test]
fn fuzz_linked_list_against_deque() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();
        for step in 0..600 {
            let value = fuzzer.random_int(0, 1000);
            match fuzzer.random_int(0, 6) {
                0 => {
                    list.push_front(value);
                    model.push_front(value);
                }
                1 => {
                    list.push_back(value);
                    model.push_back(value);
                }
                2 => assert_eq!(list.pop_front(), model.pop_front(), "seed {seed} step {step}"),
                3 => assert_eq!(list.pop_back(), model.pop_back(), "seed {seed} step {step}"),
                4 => {
                    let index = fuzzer.random_index(model.len() + 2);
                    let inserted = list.insert(value, index);
                    assert_eq!(inserted, index <= model.len(), "seed {seed} step {step}");
                    if inserted {
                        model.insert(index, value);
                    }
                }
                5 if !model.is_empty() => {
                    let index = fuzzer.random_index(model.len());
                    let removed = list.remove_at(index);
                    assert_eq!(removed, model.remove(index), "seed {seed} step {step}");
                }
                _ => {
                    let index = fuzzer.random_index(model.len() + 1);
                    assert_eq!(list.get(index), model.get(index), "seed {seed} step {step}");
                }
            }
            assert_eq!(list.len(), model.len(), "seed {seed} step {step}");
            if let Err(e) = list.assert_valid() {
                panic!("seed {seed} step {step}: {e}");
            }
        }
        assert!(list.iter().eq(model.iter()), "seed {seed}");
        assert!(list.iter().rev().eq(model.iter().rev()), "seed {seed}");
    }
}

#[test]
fn fuzz_stack_and_queue_adapters() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        let mut lifo = Vec::new();
        let mut fifo = VecDeque::new();
        for op in fuzzer.ops(400, 50, 0.6) {
            match op {
                Op::Put(v) => {
                    stack.push(v);
                    queue.push(v);
                    lifo.push(v);
                    fifo.push_back(v);
                }
                Op::Take(_) => {
                    assert_eq!(stack.pop(), lifo.pop(), "seed {seed}");
                    assert_eq!(queue.pop(), fifo.pop_front(), "seed {seed}");
                }
            }
            assert_eq!(stack.peek(), lifo.last(), "seed {seed}");
            assert_eq!(queue.front(), fifo.front(), "seed {seed}");
            assert_eq!(queue.back(), fifo.back(), "seed {seed}");
        }
    }
}

#[test]
fn fuzz_linked_bst_against_counting_map() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut tree = LinkedBst::new();
        let mut model: BTreeMap<i64, usize> = BTreeMap::new();
        for (step, op) in fuzzer.ops(800, 60, 0.55).into_iter().enumerate() {
            match op {
                Op::Put(v) => {
                    tree.insert(v);
                    *model.entry(v).or_default() += 1;
                }
                Op::Take(v) => {
                    let expected = match model.get_mut(&v) {
                        Some(count) if *count > 1 => {
                            *count -= 1;
                            true
                        }
                        Some(_) => {
                            model.remove(&v);
                            true
                        }
                        None => false,
                    };
                    assert_eq!(tree.remove(&v), expected, "seed {seed} step {step}");
                }
            }
            if let Err(e) = tree.assert_valid() {
                panic!("seed {seed} step {step}: {e}");
            }
            assert_eq!(tree.distinct_len(), model.len(), "seed {seed} step {step}");
            assert_eq!(tree.min(), model.keys().next(), "seed {seed} step {step}");
            assert_eq!(tree.max(), model.keys().next_back(), "seed {seed} step {step}");
        }
        for (v, c) in &model {
            assert_eq!(tree.occurrences(v), *c, "seed {seed}");
        }
    }
}

#[test]
fn fuzz_array_bst_against_set() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut tree = ArrayBst::new();
        let mut model = BTreeSet::new();
        // Permuted keys keep the array tree shallow enough to stay small.
        for v in fuzzer.permutation(40) {
            assert_eq!(tree.insert(v), model.insert(v), "seed {seed}");
        }
        for (step, op) in fuzzer.ops(300, 39, 0.4).into_iter().enumerate() {
            match op {
                Op::Put(v) => {
                    assert_eq!(tree.insert(v), model.insert(v), "seed {seed} step {step}")
                }
                Op::Take(v) => {
                    assert_eq!(tree.remove(&v), model.remove(&v), "seed {seed} step {step}")
                }
            }
            if let Err(e) = tree.assert_valid() {
                panic!("seed {seed} step {step}: {e}");
            }
        }
        assert_eq!(tree.sorted(), model.iter().copied().collect::<Vec<_>>(), "seed {seed}");
        assert_eq!(tree.min(), model.first(), "seed {seed}");
        assert_eq!(tree.max(), model.last(), "seed {seed}");
    }
}

#[test]
fn fuzz_heap_drains_sorted() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut heap: BinaryHeap<i64> = BinaryHeap::new();
        let mut model = Vec::new();
        for op in fuzzer.ops(500, 10_000, 0.7) {
            match op {
                Op::Put(v) => {
                    heap.push(v);
                    model.push(v);
                }
                Op::Take(_) => {
                    model.sort_unstable_by(|a, b| b.cmp(a));
                    assert_eq!(heap.pop(), model.pop(), "seed {seed}");
                }
            }
            assert_eq!(heap.len(), model.len(), "seed {seed}");
        }
        model.sort_unstable();
        let mut drained = Vec::new();
        while let Some(v) = heap.pop() {
            drained.push(v);
        }
        assert_eq!(drained, model, "seed {seed}");
    }
}

#[test]
fn fuzz_min_max_queue_window() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut queue = MinMaxQueue::new();
        let mut window = VecDeque::new();
        for _ in 0..500 {
            let v = fuzzer.random_int(-100, 100);
            queue.push(v);
            window.push_back(v);
            if window.len() > 8 {
                assert_eq!(queue.pop(), window.pop_front(), "seed {seed}");
            }
            assert_eq!(queue.min(), window.iter().min(), "seed {seed}");
            assert_eq!(queue.max(), window.iter().max(), "seed {seed}");
        }
    }
}

#[test]
fn fuzz_trie_against_set() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut trie = Trie::new();
        let mut model = BTreeSet::new();
        for _ in 0..200 {
            let len = fuzzer.random_index(6) + 1;
            let word = fuzzer.random_string(len, "abcé");
            assert_eq!(trie.add(&word), model.insert(word.clone()), "seed {seed}");
        }
        for _ in 0..200 {
            let len = fuzzer.random_index(7);
            let query = fuzzer.random_string(len, "abcé");
            assert_eq!(trie.contains(&query), model.contains(&query), "seed {seed}: {query:?}");
            let is_prefix = !query.is_empty() && model.iter().any(|w| w.starts_with(&query));
            assert_eq!(trie.is_prefix(&query), is_prefix, "seed {seed}: {query:?}");
        }
        assert_eq!(trie.words(), model.into_iter().collect::<Vec<_>>(), "seed {seed}");
    }
}
