// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, fash};

// All words of one length, concatenated, with a posting list of word ids
// for every (position, tile).
struct Bucket {
    len: usize,
    words: Vec<u8>,
    postings: Box<[Vec<u32>]>,
}

impl Bucket {
    fn new(len: usize, alphabet_len: u8) -> Self {
        Self {
            len,
            words: Vec::new(),
            postings: vec![Vec::new(); len * alphabet_len as usize].into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn num_words(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.words.len() / self.len
        }
    }

    #[inline(always)]
    fn word(&self, id: u32) -> &[u8] {
        let start = id as usize * self.len;
        &self.words[start..start + self.len]
    }

    #[inline(always)]
    fn posting(&self, alphabet_len: u8, idx: usize, tile: u8) -> &[u32] {
        &self.postings[idx * alphabet_len as usize + tile as usize]
    }
}

pub struct Lexicon {
    alphabet_len: u8,
    words: fash::MyHashSet<Box<[u8]>>,
    buckets: Vec<Bucket>,
}

impl Lexicon {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Self {
        Self {
            alphabet_len: alphabet.len(),
            words: fash::MyHashSet::default(),
            buckets: Vec::new(),
        }
    }

    // Returns false for duplicates. Tiles must come from the same alphabet.
    pub fn insert(&mut self, word: &[u8]) -> bool {
        if word.is_empty() || !self.words.insert(word.into()) {
            return false;
        }
        while self.buckets.len() <= word.len() {
            let len = self.buckets.len();
            self.buckets.push(Bucket::new(len, self.alphabet_len));
        }
        let alphabet_len = self.alphabet_len as usize;
        let bucket = &mut self.buckets[word.len()];
        let id = bucket.num_words() as u32;
        bucket.words.extend_from_slice(word);
        for (idx, &tile) in word.iter().enumerate() {
            bucket.postings[idx * alphabet_len + tile as usize].push(id);
        }
        true
    }

    pub fn from_words<S: AsRef<str>, I: IntoIterator<Item = S>>(
        alphabet: &alphabet::Alphabet<'_>,
        words: I,
    ) -> error::Returns<Lexicon> {
        let mut lexicon = Lexicon::new(alphabet);
        for (line_num, s) in (1..).zip(words) {
            let s = s.as_ref().trim();
            if s.is_empty() {
                continue;
            }
            match alphabet.parse_word(s) {
                Some(word) => {
                    lexicon.insert(&word);
                }
                None => {
                    return_error!(format!("line {}: invalid word {:?}", line_num, s));
                }
            }
        }
        Ok(lexicon)
    }

    pub fn from_text(alphabet: &alphabet::Alphabet<'_>, giant_string: &str) -> error::Returns<Lexicon> {
        Self::from_words(alphabet, giant_string.lines())
    }

    pub fn from_file<P: AsRef<std::path::Path>>(
        alphabet: &alphabet::Alphabet<'_>,
        path: P,
    ) -> error::Returns<Lexicon> {
        let t0 = std::time::Instant::now();
        let giant_string = std::fs::read_to_string(path.as_ref())?;
        let lexicon = Self::from_text(alphabet, &giant_string)?;
        log::debug!(
            "read {} words from {} in {:?}",
            lexicon.len(),
            path.as_ref().display(),
            t0.elapsed()
        );
        Ok(lexicon)
    }

    #[inline(always)]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words_of_len(&self, len: usize) -> impl Iterator<Item = &[u8]> {
        self.buckets
            .get(len)
            .filter(|bucket| bucket.len > 0)
            .map(|bucket| bucket.words.chunks_exact(bucket.len))
            .into_iter()
            .flatten()
    }

    // Calls found(word) for every word of pattern.len() that agrees with
    // every nonzero tile of pattern. Zero tiles match anything.
    pub fn for_each_candidate<F: FnMut(&[u8])>(&self, pattern: &[u8], mut found: F) {
        let bucket = match self.buckets.get(pattern.len()) {
            Some(bucket) if bucket.num_words() > 0 => bucket,
            _ => return,
        };
        // seed from the most selective fixed tile
        let mut seed: Option<&[u32]> = None;
        for (idx, &tile) in pattern.iter().enumerate() {
            if tile != 0 {
                let posting = bucket.posting(self.alphabet_len, idx, tile);
                if seed.is_none_or(|s| posting.len() < s.len()) {
                    seed = Some(posting);
                }
            }
        }
        match seed {
            None => {
                for word in bucket.words.chunks_exact(bucket.len) {
                    found(word);
                }
            }
            Some(ids) => {
                for &id in ids {
                    let word = bucket.word(id);
                    if pattern
                        .iter()
                        .zip(word.iter())
                        .all(|(&p, &w)| p == 0 || p == w)
                    {
                        found(word);
                    }
                }
            }
        }
    }
}
