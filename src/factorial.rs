//! Exact factorials over the goal counts the model enumerates. `u128` holds
//! factorials up to 34!, which caps the per-side goal bound.

/// Largest `n` for which `n!` fits in a `u128`.
pub const MAX_SUPPORTED: u8 = 34;

const TABLE_LEN: usize = MAX_SUPPORTED as usize + 1;

const fn build_table() -> [u128; TABLE_LEN] {
    let mut entries = [1u128; TABLE_LEN];
    let mut i = 2;
    while i < TABLE_LEN {
        entries[i] = entries[i - 1] * i as u128;
        i += 1;
    }
    entries
}

static TABLE: [u128; TABLE_LEN] = build_table();

pub trait Factorial {
    fn get(&self, n: u8) -> u128;
}

/// Computes each factorial on demand.
#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_SUPPORTED, "{n}! overflows");
        let mut product = 1u128;
        for i in 2..=n {
            product *= i as u128;
        }
        product
    }
}

/// Serves factorials from a table built at compile time.
#[derive(Default)]
pub struct Lookup;

impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_SUPPORTED, "{n}! overflows");
        TABLE[n as usize]
    }
}
