// Copyright (C) 2020-2026 Andy Kurnia.

use super::{matrix, movegen, rack};

pub struct PlayScorer {
    rack_tally: Vec<u8>,
    cross_word: Vec<u8>,
}

impl PlayScorer {
    pub fn new() -> Self {
        Self {
            rack_tally: Vec::new(),
            cross_word: Vec::new(),
        }
    }

    // Checks an across or down play against the board from scratch, without
    // going through the generator. Scores are not checked.
    pub fn play_is_valid(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        rack: &rack::Rack,
        play: &movegen::Play,
    ) -> bool {
        let flipped_grid;
        let (grid, pos) = if play.down {
            flipped_grid = board_snapshot.grid.transpose();
            (&flipped_grid, play.pos.transposed())
        } else {
            (board_snapshot.grid, play.pos)
        };
        let dim = grid.dim();
        let alphabet = board_snapshot.game_config.alphabet();
        let len = play.word.len();
        if len < 2 || !dim.contains(pos) || pos.col as usize + len > dim.cols as usize {
            return false;
        }
        let end_col = pos.col + len as i8;
        if (pos.col > 0 && grid.is_occupied(pos.row, pos.col - 1))
            || (end_col < dim.cols && grid.is_occupied(pos.row, end_col))
        {
            return false;
        }

        self.rack_tally.clear();
        self.rack_tally.resize(alphabet.len() as usize, 0);
        if rack.tiles().iter().any(|&t| t == 0 || t >= alphabet.len()) {
            return false;
        }
        rack.fill_tally(&mut self.rack_tally);
        let mut num_played = 0;
        let mut connected = false;
        for (col, &tile) in (pos.col..).zip(play.word.iter()) {
            let b = grid.cell_at(pos.row, col);
            if b != 0 {
                if b != tile {
                    return false;
                }
                connected = true;
            } else {
                if tile == 0 || tile >= alphabet.len() || self.rack_tally[tile as usize] == 0 {
                    return false;
                }
                self.rack_tally[tile as usize] -= 1;
                num_played += 1;
                connected |= (pos.row > 0 && grid.is_occupied(pos.row - 1, col))
                    || (pos.row + 1 < dim.rows && grid.is_occupied(pos.row + 1, col));
            }
        }
        if num_played == 0 || !connected || !board_snapshot.lexicon.contains(&play.word) {
            return false;
        }

        let after = grid.with_word_across(pos.row, pos.col, &play.word);
        for col in pos.col..end_col {
            if grid.is_occupied(pos.row, col) {
                continue;
            }
            let mut top = pos.row;
            while top > 0 && after.is_occupied(top - 1, col) {
                top -= 1;
            }
            let mut bottom = pos.row;
            while bottom + 1 < dim.rows && after.is_occupied(bottom + 1, col) {
                bottom += 1;
            }
            if top < bottom {
                self.cross_word.clear();
                self.cross_word
                    .extend((top..=bottom).map(|row| after.cell_at(row, col)));
                if !board_snapshot.lexicon.contains(&self.cross_word) {
                    return false;
                }
            }
        }
        true
    }

    // Score of word placed across from pos, excluding any full-rack bonus.
    // Premiums only count under newly placed tiles. Saturates instead of
    // overflowing on extreme multipliers.
    // Assume play is valid.
    pub fn compute_score(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        pos: matrix::Position,
        word: &[u8],
    ) -> i32 {
        let grid = board_snapshot.grid;
        let board_layout = board_snapshot.board_layout;
        let alphabet = board_snapshot.game_config.alphabet();

        let mut recounted_score = 0i32;
        {
            let mut word_multiplier = 1i32;
            let mut word_score = 0i32;
            for (col, &tile) in (pos.col..).zip(word.iter()) {
                let tile_multiplier;
                if grid.is_occupied(pos.row, col) {
                    tile_multiplier = 1;
                } else {
                    let premium = board_layout.premium_at(pos.row, col);
                    word_multiplier = word_multiplier.saturating_mul(premium.word_multiplier as i32);
                    tile_multiplier = premium.letter_multiplier as i32;
                }
                word_score = word_score.saturating_add(alphabet.score(tile) as i32 * tile_multiplier);
            }
            recounted_score = recounted_score.saturating_add(word_score.saturating_mul(word_multiplier));
        }

        for (col, &tile) in (pos.col..).zip(word.iter()) {
            if grid.is_occupied(pos.row, col) {
                continue;
            }
            let (top, bottom) = movegen::perpendicular_extent(grid, pos.row, col);
            if top == bottom {
                continue;
            }
            let premium = board_layout.premium_at(pos.row, col);
            let mut word_score = alphabet.score(tile) as i32 * premium.letter_multiplier as i32;
            for row in top..=bottom {
                if row != pos.row {
                    word_score += alphabet.score(grid.cell_at(row, col)) as i32;
                }
            }
            recounted_score = recounted_score
                .saturating_add(word_score.saturating_mul(premium.word_multiplier as i32));
        }

        recounted_score
    }
}

impl Default for PlayScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, board_layout, fash, game_config, grid, lexicon};

    fn config_with(
        rows: i8,
        cols: i8,
        letter: &[((i8, i8), i8)],
        word: &[((i8, i8), i8)],
    ) -> game_config::GameConfig<'static> {
        let to_map = |v: &[((i8, i8), i8)]| {
            v.iter()
                .map(|&((r, c), m)| (matrix::Position::new(r, c), m))
                .collect::<fash::MyHashMap<_, _>>()
        };
        let dim = matrix::Dim { rows, cols };
        let layout = board_layout::BoardLayout::from_maps(dim, &to_map(letter), &to_map(word)).unwrap();
        game_config::make_custom_game_config(alphabet::make_english_alphabet(), layout, 7, 0)
    }

    fn score(game_config: &game_config::GameConfig<'static>, rows: &[&str], row: i8, col: i8, word: &str) -> i32 {
        let grid = grid::Grid::from_rows(game_config.alphabet(), rows).unwrap();
        let lexicon = lexicon::Lexicon::new(game_config.alphabet());
        let snapshot = movegen::BoardSnapshot::new(&grid, game_config, &lexicon).unwrap();
        let word = game_config.alphabet().parse_word(word).unwrap();
        PlayScorer::new().compute_score(&snapshot, matrix::Position::new(row, col), &word)
    }

    #[test]
    fn premiums_only_under_new_tiles() {
        let game_config = config_with(2, 5, &[((0, 1), 3), ((0, 3), 2)], &[((0, 0), 2)]);
        // C A T sit on the board, S lands on the double letter.
        assert_eq!(score(&game_config, &["CAT..", "....."], 0, 0, "CATS"), 7);
        // all new: C on double word, A on triple letter, S on double letter.
        assert_eq!(score(&game_config, &[".....", "....."], 0, 0, "CATS"), (3 + 3 + 1 + 2) * 2);
    }

    #[test]
    fn word_multipliers_compound() {
        let game_config = config_with(1, 5, &[], &[((0, 0), 2), ((0, 4), 3)]);
        assert_eq!(score(&game_config, &[".ATE."], 0, 0, "RATED"), (1 + 1 + 1 + 1 + 2) * 6);
    }

    #[test]
    fn large_word_multipliers_do_not_overflow() {
        let game_config = config_with(1, 5, &[], &[((0, 0), 100), ((0, 4), 100)]);
        assert_eq!(score(&game_config, &[".ATE."], 0, 0, "RATED"), (1 + 1 + 1 + 1 + 2) * 100 * 100);
        let every_cell = (0..9).map(|c| ((0, c), 127)).collect::<Vec<_>>();
        let game_config = config_with(1, 9, &every_cell, &every_cell);
        assert_eq!(score(&game_config, &["........."], 0, 0, "AAAAAAAAA"), i32::MAX);
    }

    #[test]
    fn cross_words_take_the_new_tile_premium() {
        let game_config = config_with(3, 3, &[((1, 0), 3)], &[((1, 1), 2)]);
        // TO across: (3 + 1) * 2. AT down: 1 + 3.
        assert_eq!(score(&game_config, &["A..", "...", "..."], 1, 0, "TO"), 8 + 4);
        // O under the double word also makes a cross word here.
        assert_eq!(score(&game_config, &["AB.", "...", "..."], 1, 0, "TO"), 8 + 4 + (3 + 1) * 2);
    }

    #[test]
    fn cross_word_spans_both_sides() {
        let game_config = game_config::make_plain_game_config(3, 2);
        // C A T down with A new, and A X across.
        assert_eq!(score(&game_config, &["C.", "..", "T."], 1, 0, "AX"), (1 + 8) + (3 + 1 + 1));
    }

    struct Fixture {
        game_config: game_config::GameConfig<'static>,
        grid: grid::Grid,
        lexicon: lexicon::Lexicon,
    }

    impl Fixture {
        fn check(&self, rack: &str, word: &str, row: i8, col: i8, down: bool) -> bool {
            let snapshot = movegen::BoardSnapshot::new(&self.grid, &self.game_config, &self.lexicon).unwrap();
            let rack = rack::Rack::parse(self.game_config.alphabet(), rack, 7).unwrap();
            let play = movegen::Play {
                score: 0,
                bonus: 0,
                word: self.game_config.alphabet().parse_word(word).unwrap(),
                pos: matrix::Position::new(row, col),
                down,
            };
            PlayScorer::new().play_is_valid(&snapshot, &rack, &play)
        }
    }

    #[test]
    fn validity_is_checked_from_scratch() {
        let game_config = game_config::make_plain_game_config(4, 4);
        let grid = grid::Grid::from_rows(game_config.alphabet(), &["....", ".AT.", "....", "...."]).unwrap();
        let lexicon = lexicon::Lexicon::from_words(game_config.alphabet(), ["AT", "ATE", "TE", "TA", "EAT"]).unwrap();
        let fx = Fixture {
            game_config,
            grid,
            lexicon,
        };
        assert!(fx.check("E", "ATE", 1, 1, false));
        assert!(fx.check("E", "TE", 1, 2, true));
        // not a word, no rack tile, nothing placed, floating.
        assert!(!fx.check("E", "ATT", 1, 1, false));
        assert!(!fx.check("S", "ATE", 1, 1, false));
        assert!(!fx.check("E", "AT", 1, 1, false));
        assert!(!fx.check("TA", "TA", 3, 0, false));
        // must not start right after a tile.
        assert!(!fx.check("E", "TE", 1, 2, false));
        // E below A forms AE.
        assert!(!fx.check("TE", "TE", 2, 0, false));
        // T under A and A under T.
        assert!(fx.check("TA", "TA", 2, 1, false));
    }
}
