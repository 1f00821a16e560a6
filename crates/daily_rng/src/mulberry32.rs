//! Mulberry32 pseudo-random number generator.
//!
//! This module provides [`Mulberry32`], a 32-bit-state PRNG whose output
//! sequence is fixed by its seed alone, and the [`mulberry32()`] closure
//! factory over it.

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Weyl increment added to the state on every step.
const INCREMENT: u32 = 0x6D2B_79F5;

/// Scale from a `u32` output to `[0, 1)`: 2^-32.
const U32_TO_UNIT: f64 = 1.0 / 4_294_967_296.0;

/// Deterministic mulberry32 generator.
///
/// Each step adds a fixed odd constant to the 32-bit state, then mixes
/// the new state through xor-shifts and truncating multiplications.
/// All arithmetic wraps at 32 bits, so sequences are bit-identical on
/// every platform and match other mulberry32 implementations.
///
/// Not cryptographically secure.
///
/// # Examples
///
/// ```rust
/// use daily_rng::Mulberry32;
///
/// let mut a = Mulberry32::new(42);
/// let mut b = Mulberry32::new(42);
///
/// let first = a.next_f64();
/// assert!((0.0..1.0).contains(&first));
/// assert_eq!(first, b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from any integer seed.
    ///
    /// The seed is reduced modulo 2^32 (two's complement), so `-1` and
    /// `4294967295` start the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daily_rng::Mulberry32;
    ///
    /// assert_eq!(Mulberry32::new(-1), Mulberry32::new(4_294_967_295));
    /// assert_eq!(Mulberry32::new(1 << 32), Mulberry32::new(0));
    /// ```
    #[inline]
    pub fn new(seed: i64) -> Self {
        Self::from_u32(seed as u32)
    }

    /// Creates a generator from a 32-bit seed.
    #[inline]
    pub const fn from_u32(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns the current internal state.
    ///
    /// A generator rebuilt with `from_u32(state)` continues the same sequence.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Returns the next value in [0, 1).
    ///
    /// The 32-bit output divided by 2^32: never negative, never 1.0.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 * U32_TO_UNIT
    }

    /// Returns the next value in `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high` or either bound is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daily_rng::Mulberry32;
    ///
    /// let mut rng = Mulberry32::new(7);
    /// let x = rng.gen_range(-1.0, 1.0);
    /// assert!((-1.0..1.0).contains(&x));
    /// ```
    #[inline]
    pub fn gen_range(&mut self, low: f64, high: f64) -> f64 {
        assert!(
            low.is_finite() && high.is_finite() && low < high,
            "gen_range requires finite low < high"
        );
        let x = low + (high - low) * self.next_f64();
        // Rounding can land exactly on `high` for wide ranges.
        if x < high {
            x
        } else {
            low
        }
    }

    /// Returns an index in `0..len`, computed as `floor(next_f64() * len)`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[inline]
    pub fn gen_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "gen_index requires a non-empty range");
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len - 1)
    }

    /// Shuffles `items` in place (Fisher–Yates, last position first).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daily_rng::Mulberry32;
    ///
    /// let mut a = [1, 2, 3, 4, 5];
    /// let mut b = a;
    /// Mulberry32::new(2026113).shuffle(&mut a);
    /// Mulberry32::new(2026113).shuffle(&mut b);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Fills the buffer with values in [0, 1).
    ///
    /// Zero-allocation; empty buffers are a no-op. Equivalent to calling
    /// [`next_f64`](Self::next_f64) once per element, in order.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_f64();
        }
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl RngCore for Mulberry32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Mulberry32::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    /// Little-endian 32-bit seed.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_u32(u32::from_le_bytes(seed))
    }

    /// Truncates to the low 32 bits, matching [`Mulberry32::new`].
    fn seed_from_u64(state: u64) -> Self {
        Self::from_u32(state as u32)
    }
}

/// Returns a closure yielding the mulberry32 sequence for `seed`.
///
/// Each call advances the closure's private generator. Build a new closure
/// with the same seed to replay the sequence.
///
/// # Examples
///
/// ```rust
/// use daily_rng::mulberry32;
///
/// let mut next = mulberry32(0);
/// assert_eq!(next(), 0.26642920868471265);
/// ```
pub fn mulberry32(seed: i64) -> impl FnMut() -> f64 {
    let mut rng = Mulberry32::new(seed);
    move || rng.next_f64()
}
