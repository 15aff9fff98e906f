use std::cell::RefCell;

use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// A single step of a randomized container workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Insert / push the value.
    Put(i64),
    /// Remove / pop. The value is a hint for keyed removals.
    Take(i64),
}

/// A fuzzer for generating random workloads.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use sneklib_util::Fuzzer;
///
/// let fuzzer = Fuzzer::from_u64(7);
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// let choices = vec!["a", "b", "c"];
/// let picked = fuzzer.pick(&choices);
/// assert!(choices.contains(picked));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Create a fuzzer whose seed is `n` spread over the first eight bytes.
    pub fn from_u64(n: u64) -> Self {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&n.to_le_bytes());
        Self::new(Some(seed))
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Random index in `[0, len)`. `len` must be non-zero.
    pub fn random_index(&self, len: usize) -> usize {
        self.rng.borrow_mut().gen_range(0..len)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        &elements[self.random_index(elements.len())]
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }

    /// Random boolean that is `true` with the given probability.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability)
    }

    /// Random string of `len` characters drawn from `chars`.
    pub fn random_string(&self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        let mut rng = self.rng.borrow_mut();
        (0..len)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }

    /// The integers `0..n` in random order.
    pub fn permutation(&self, n: usize) -> Vec<i64> {
        let mut out: Vec<i64> = (0..n as i64).collect();
        out.shuffle(&mut *self.rng.borrow_mut());
        out
    }

    /// A workload of `len` operations over values in `[0, max_value]`.
    ///
    /// `put_probability` is the chance of each step being an [`Op::Put`].
    pub fn ops(&self, len: usize, max_value: i64, put_probability: f64) -> Vec<Op> {
        self.repeat(len, || {
            let value = self.random_int(0, max_value);
            if self.random_bool(put_probability) {
                Op::Put(value)
            } else {
                Op::Take(value)
            }
        })
    }
}
