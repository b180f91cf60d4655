// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

#[derive(Clone)]
pub struct Bag(pub Vec<u8>);

impl Bag {
    // Every tile of the alphabet, freq times each.
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Bag {
        let mut bag = Vec::with_capacity(
            (0..alphabet.len())
                .map(|tile| alphabet.freq(tile) as usize)
                .sum(),
        );
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }

    // Removes the tiles in tiles from the bag, one each. Returns false
    // without changing anything if any is missing.
    pub fn remove_tiles(&mut self, tiles: &[u8]) -> bool {
        let mut remaining = self.0.clone();
        for &tile in tiles {
            match remaining.iter().rposition(|&t| t == tile) {
                Some(idx) => {
                    remaining.swap_remove(idx);
                }
                None => return false,
            }
        }
        self.0 = remaining;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_until_empty() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        assert_eq!(bag.len(), 98);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        bag.shuffle(&mut rng);
        let mut rack = vec![1];
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 92);
        bag.0.truncate(2);
        bag.replenish(&mut rack, 10);
        assert_eq!(rack.len(), 9);
        assert!(bag.is_empty());
    }

    #[test]
    fn removes_known_tiles_only() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        // two Zs do not exist.
        assert!(!bag.remove_tiles(&[26, 26]));
        assert_eq!(bag.len(), 98);
        assert!(bag.remove_tiles(&[3, 1, 20]));
        assert_eq!(bag.len(), 95);
    }
}
