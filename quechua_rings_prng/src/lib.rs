// Seedable pseudo-random source for word-form sampling.
//
// xoshiro256++ (Blackman & Vigna, 2019) seeded through SplitMix64. The
// generator is written out by hand so that a seed printed by the console
// (`quechua-rings random --seed N`) reproduces the same word forms on any
// machine, including the Raspberry Pi that drives the rings.
//
// Consumers: `quechua_rings_lang::generator` (random word forms for manual
// spot checks and property sweeps) and the CLI's `random` subcommand.
//
// Output must depend only on the seed and the number of draws so far.
// No floating point, no OS entropy.

use serde::{Deserialize, Serialize};

/// xoshiro256++ state. Serializable so a sweep can be resumed mid-stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRng {
    s: [u64; 4],
}

impl SuffixRng {
    /// Expand a `u64` seed into the 256-bit state with SplitMix64.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Next raw `u64` in the stream.
    pub fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = self.s;
        let out = s0.wrapping_add(s3).rotate_left(23).wrapping_add(s0);

        let t = s1 << 17;
        let mut next = [s0, s1, s2 ^ s0, s3 ^ s1];
        next[1] ^= next[2];
        next[0] ^= next[3];
        next[2] ^= t;
        next[3] = next[3].rotate_left(45);
        self.s = next;

        out
    }

    /// Uniform integer in `[0, bound)` without modulo bias.
    ///
    /// Returns `None` when `bound == 0`, since the range is empty.
    pub fn below(&mut self, bound: u64) -> Option<u64> {
        if bound == 0 {
            return None;
        }
        if bound.is_power_of_two() {
            return Some(self.next_u64() & (bound - 1));
        }
        // Reject the short tail so every residue is equally likely.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return Some(r % bound);
            }
        }
    }

    /// Uniform index into a collection of `len` items.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        self.below(len as u64).map(|i| i as usize)
    }

    /// Pick one element uniformly. `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }
}

/// SplitMix64 step, used only to expand seeds.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
