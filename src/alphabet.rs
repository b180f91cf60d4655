// Copyright (C) 2020-2026 Andy Kurnia.

// Tile 0 is the empty cell. Letters are numbered from 1 in alphabet order.

pub struct Tile<'a> {
    label: &'a str,
    freq: u8,
    score: i8,
}

const fn tile(label: &str, freq: u8, score: i8) -> Tile<'_> {
    Tile { label, freq, score }
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> Option<&'a str> {
        if idx == 0 || idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(idx).score
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    // Case-insensitive.
    pub fn tile_of(&self, c: char) -> Option<u8> {
        (1..self.len()).find(|&idx| self.get(idx).label.chars().eq(c.to_uppercase()))
    }

    pub fn parse_word(&self, s: &str) -> Option<Box<[u8]>> {
        s.chars().map(|c| self.tile_of(c)).collect()
    }

    pub fn fmt_word(&self, word: &[u8]) -> String {
        let mut s = String::with_capacity(word.len());
        for &tile in word {
            s.push_str(self.label(tile).unwrap_or("."));
        }
        s
    }

    pub fn word_score(&self, word: &[u8]) -> i32 {
        word.iter().map(|&tile| self.score(tile) as i32).sum()
    }
}

static ENGLISH_TILES: &[Tile<'static>] = &[
    tile(".", 0, 0),
    tile("A", 9, 1),
    tile("B", 2, 3),
    tile("C", 2, 3),
    tile("D", 4, 2),
    tile("E", 12, 1),
    tile("F", 2, 4),
    tile("G", 3, 2),
    tile("H", 2, 4),
    tile("I", 9, 1),
    tile("J", 1, 8),
    tile("K", 1, 5),
    tile("L", 4, 1),
    tile("M", 2, 3),
    tile("N", 6, 1),
    tile("O", 8, 1),
    tile("P", 2, 3),
    tile("Q", 1, 10),
    tile("R", 6, 1),
    tile("S", 4, 1),
    tile("T", 6, 1),
    tile("U", 4, 1),
    tile("V", 2, 4),
    tile("W", 2, 4),
    tile("X", 1, 8),
    tile("Y", 2, 4),
    tile("Z", 1, 10),
];

static WWF_TILES: &[Tile<'static>] = &[
    tile(".", 0, 0),
    tile("A", 9, 1),
    tile("B", 2, 4),
    tile("C", 2, 4),
    tile("D", 5, 2),
    tile("E", 13, 1),
    tile("F", 2, 4),
    tile("G", 3, 3),
    tile("H", 4, 3),
    tile("I", 8, 1),
    tile("J", 1, 10),
    tile("K", 1, 5),
    tile("L", 4, 2),
    tile("M", 2, 4),
    tile("N", 5, 2),
    tile("O", 8, 1),
    tile("P", 2, 4),
    tile("Q", 1, 10),
    tile("R", 6, 1),
    tile("S", 5, 1),
    tile("T", 7, 1),
    tile("U", 4, 2),
    tile("V", 2, 5),
    tile("W", 2, 4),
    tile("X", 1, 8),
    tile("Y", 2, 3),
    tile("Z", 1, 10),
];

pub fn make_english_alphabet() -> Alphabet<'static> {
    Alphabet::Static(StaticAlphabet {
        tiles: ENGLISH_TILES,
    })
}

pub fn make_wwf_alphabet() -> Alphabet<'static> {
    Alphabet::Static(StaticAlphabet { tiles: WWF_TILES })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_one_based() {
        let alphabet = make_english_alphabet();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.tile_of('A'), Some(1));
        assert_eq!(alphabet.tile_of('z'), Some(26));
        assert_eq!(alphabet.tile_of('?'), None);
        assert_eq!(alphabet.tile_of('.'), None);
        assert_eq!(alphabet.label(0), None);
        assert_eq!(alphabet.label(3), Some("C"));
    }

    #[test]
    fn parse_and_format_round_trip_is_case_normalised() {
        let alphabet = make_english_alphabet();
        let word = alphabet.parse_word("cAtS").unwrap();
        assert_eq!(&word[..], &[3, 1, 20, 19]);
        assert_eq!(alphabet.fmt_word(&word), "CATS");
        assert!(alphabet.parse_word("CAT5").is_none());
    }

    #[test]
    fn stock_values() {
        let english = make_english_alphabet();
        let wwf = make_wwf_alphabet();
        let cats = english.parse_word("CATS").unwrap();
        assert_eq!(english.word_score(&cats), 6);
        assert_eq!(wwf.word_score(&cats), 7);
        assert_eq!(english.score(english.tile_of('Q').unwrap()), 10);
        assert_eq!(wwf.score(wwf.tile_of('J').unwrap()), 10);
        let english_total = (0..english.len()).map(|t| english.freq(t) as u16).sum::<u16>();
        assert_eq!(english_total, 98);
        let wwf_total = (0..wwf.len()).map(|t| wwf.freq(t) as u16).sum::<u16>();
        assert_eq!(wwf_total, 102);
    }
}
