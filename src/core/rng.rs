//! Reproducible pseudo-random sequence for puzzle generation
//!
//! Puzzles for a given day must match on every client, so the formula is fixed
//! here instead of borrowing a `rand` generator whose output may change between
//! releases. The generator is mulberry32 over a 32-bit state:
//!
//! ```text
//! state = state + 0x6D2B79F5
//! t = state
//! t = (t ^ t >> 15) * (t | 1)
//! t = t ^ (t + (t ^ t >> 7) * (t | 61))
//! out = t ^ t >> 14
//! ```
//!
//! All arithmetic wraps at 32 bits. [`SeededRng::next_value`] exposes the top 31
//! bits of `out`, which is the value `pick` reduces modulo the list length.

use rand::RngCore;

/// Seeded mulberry32 generator
///
/// The whole state is one `u32`, so copying a generator forks the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Start a sequence from a seed (day number or practice session id)
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 2^31)`
    pub fn next_value(&mut self) -> u32 {
        self.next_raw() >> 1
    }

    /// Draw the next value and use it to index into `list`
    ///
    /// Returns `None` without advancing the sequence when `list` is empty.
    ///
    /// # Examples
    /// ```
    /// use xordle::core::SeededRng;
    ///
    /// let words = ["north", "bleak", "crisp"];
    /// let mut a = SeededRng::new(42);
    /// let mut b = SeededRng::new(42);
    /// assert_eq!(a.pick(&words), b.pick(&words));
    /// ```
    pub fn pick<'a, T>(&mut self, list: &'a [T]) -> Option<&'a T> {
        if list.is_empty() {
            return None;
        }
        let index = self.next_value() as usize % list.len();
        list.get(index)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
