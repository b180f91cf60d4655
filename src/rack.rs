// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, error::EngineError};

// Multiset of tiles in hand, kept sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rack {
    tiles: Box<[u8]>,
}

impl Rack {
    // tiles are 1-based letters of alphabet, 0 is not a tile.
    pub fn new(alphabet: &alphabet::Alphabet<'_>, tiles: &[u8], capacity: i8) -> Result<Rack, EngineError> {
        if let Some(&tile) = tiles.iter().find(|&&t| t == 0 || t >= alphabet.len()) {
            return Err(EngineError::InvalidTile {
                tile,
                alphabet_len: alphabet.len(),
            });
        }
        if tiles.len() > capacity.max(0) as usize {
            return Err(EngineError::OversizedRack {
                len: tiles.len(),
                capacity,
            });
        }
        let mut tiles = tiles.to_vec();
        tiles.sort_unstable();
        Ok(Rack {
            tiles: tiles.into_boxed_slice(),
        })
    }

    pub fn parse(alphabet: &alphabet::Alphabet<'_>, s: &str, capacity: i8) -> error::Returns<Rack> {
        let mut tiles = Vec::with_capacity(s.len());
        for c in s.chars() {
            match alphabet.tile_of(c) {
                Some(tile) => tiles.push(tile),
                None => {
                    return_error!(format!("invalid tile {:?} in rack {:?}", c, s));
                }
            }
        }
        Ok(Rack::new(alphabet, &tiles, capacity)?)
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // rack_tally[tile] = count, sized to the alphabet.
    pub fn fill_tally(&self, rack_tally: &mut [u8]) {
        rack_tally.iter_mut().for_each(|m| *m = 0);
        for &tile in self.tiles.iter() {
            rack_tally[tile as usize] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_sorts() {
        let alphabet = alphabet::make_english_alphabet();
        let rack = Rack::parse(&alphabet, "sEa", 7).unwrap();
        assert_eq!(rack.tiles(), &[1, 5, 19]);
        let mut tally = vec![9u8; alphabet.len() as usize];
        rack.fill_tally(&mut tally);
        assert_eq!(tally[1], 1);
        assert_eq!(tally[5], 1);
        assert_eq!(tally[19], 1);
        assert_eq!(tally.iter().map(|&x| x as usize).sum::<usize>(), 3);
    }

    #[test]
    fn enforces_capacity() {
        let alphabet = alphabet::make_english_alphabet();
        assert!(Rack::parse(&alphabet, "ABCDEFG", 7).is_ok());
        let err = Rack::parse(&alphabet, "ABCDEFGH", 7).unwrap_err();
        assert_eq!(err.to_string(), "rack has 8 tiles, hand capacity is 7");
        assert!(Rack::parse(&alphabet, "AB?", 7).is_err());
        assert!(Rack::new(&alphabet, &[], 7).unwrap().is_empty());
    }

    #[test]
    fn rejects_tiles_outside_the_alphabet() {
        let alphabet = alphabet::make_english_alphabet();
        assert!(Rack::new(&alphabet, &[1, 26], 7).is_ok());
        assert!(matches!(
            Rack::new(&alphabet, &[1, alphabet.len()], 7),
            Err(EngineError::InvalidTile { tile: 27, .. })
        ));
        assert!(matches!(
            Rack::new(&alphabet, &[0], 7),
            Err(EngineError::InvalidTile { tile: 0, .. })
        ));
        assert!(matches!(
            Rack::new(&alphabet, &[200], 7),
            Err(EngineError::InvalidTile { tile: 200, .. })
        ));
    }
}
