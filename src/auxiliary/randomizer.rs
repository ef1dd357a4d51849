//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use crate::traits_and_structs::{Color, ColorSource};

/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed).expect("failed to getrandom");

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

/// Expands a single user-supplied number into a full PCG seed pair.
pub fn seed_from_u64(seed: u64) -> (u64, u64) {
    (seed, seed.rotate_left(32) ^ 0xda3e_39cb_94b9_5bdb)
}

/// Random cell colors drawn from a PCG32 stream.
pub struct PcgColors {
    rng: randomize::PCG32,
}

impl PcgColors {
    pub fn from_seed(seed: (u64, u64)) -> Self {
        Self { rng: seed.into() }
    }

    /// Seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::from_seed(generate_seed())
    }
}

impl ColorSource for PcgColors {
    fn next_color(&mut self) -> Color {
        Color::from_rgb_u32(self.rng.next_u32() >> 8)
    }
}
