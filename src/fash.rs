// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash for short tile strings and positions.

#[derive(Default)]
pub struct MyHasher(u64);

const SEED: u64 = 0x51_7c_c1_b7_27_22_0a_95;

impl std::hash::Hasher for MyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, b: u8) {
        self.0 = (self.0.rotate_left(5) ^ (b as u64)).wrapping_mul(SEED);
    }

    #[inline(always)]
    fn write_usize(&mut self, n: usize) {
        self.0 = (self.0.rotate_left(5) ^ (n as u64)).wrapping_mul(SEED);
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;
