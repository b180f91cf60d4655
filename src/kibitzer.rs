// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error, fash, game_config, grid, matrix, movegen, rack};

// A sparse premium. Absent cells have multiplier 1.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct JsonPremium {
    pub row: i8,
    pub col: i8,
    pub multiplier: i8,
}

fn default_config_name() -> String {
    "english".into()
}

#[derive(serde::Deserialize, Debug)]
pub struct Question {
    #[serde(default = "default_config_name")]
    pub config: String,
    // path to a word list, one word per line.
    pub lexicon: String,
    pub board: Vec<String>,
    pub rack: String,
    // replace the named layout when either is present.
    #[serde(default)]
    pub letter_multipliers: Option<Vec<JsonPremium>>,
    #[serde(default)]
    pub word_multipliers: Option<Vec<JsonPremium>>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn premium_map(premiums: &[JsonPremium]) -> fash::MyHashMap<matrix::Position, i8> {
    premiums
        .iter()
        .map(|p| (matrix::Position::new(p.row, p.col), p.multiplier))
        .collect()
}

impl Question {
    pub fn board_dim(&self) -> matrix::Dim {
        matrix::Dim {
            rows: self.board.len().min(i8::MAX as usize) as i8,
            cols: self
                .board
                .first()
                .map_or(0, |row| row.chars().count().min(i8::MAX as usize)) as i8,
        }
    }

    pub fn game_config(&self) -> error::Returns<game_config::GameConfig<'static>> {
        let dim = self.board_dim();
        let base = match self.config.as_str() {
            "plain" => game_config::make_plain_game_config(dim.rows, dim.cols),
            name => match game_config::make_game_config_by_name(name) {
                Some(game_config) => game_config,
                None => {
                    return_error!(format!("unknown config {:?}", name));
                }
            },
        };
        if self.letter_multipliers.is_none() && self.word_multipliers.is_none() {
            return Ok(base);
        }
        let board_layout = board_layout::BoardLayout::from_maps(
            dim,
            &premium_map(self.letter_multipliers.as_deref().unwrap_or_default()),
            &premium_map(self.word_multipliers.as_deref().unwrap_or_default()),
        )?;
        let alphabet = match self.config.as_str() {
            "wwf" => alphabet::make_wwf_alphabet(),
            _ => alphabet::make_english_alphabet(),
        };
        Ok(game_config::make_custom_game_config(
            alphabet,
            board_layout,
            base.rack_size(),
            base.num_played_bonus(base.rack_size()),
        ))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
pub struct JsonPlay {
    pub word: String,
    // 0-based.
    pub row: i8,
    pub col: i8,
    pub down: bool,
    pub score: i32,
    pub bonus: i32,
}

impl JsonPlay {
    pub fn new(alphabet: &alphabet::Alphabet<'_>, play: &movegen::Play) -> Self {
        Self {
            word: alphabet.fmt_word(&play.word),
            row: play.pos.row,
            col: play.pos.col,
            down: play.down,
            score: play.score,
            bonus: play.bonus,
        }
    }
}

pub struct Kibitzer {
    pub available_tally: Vec<u8>,
}

impl Kibitzer {
    pub fn new() -> Self {
        Self {
            available_tally: Vec::new(),
        }
    }

    // Parses board and rack for game_config. Tile counts beyond what the
    // bag holds are only logged.
    pub fn prepare<S: AsRef<str>>(
        &mut self,
        game_config: &game_config::GameConfig<'_>,
        rack: &str,
        board_rows: &[S],
    ) -> error::Returns<(grid::Grid, rack::Rack)> {
        let alphabet = game_config.alphabet();
        let rack = rack::Rack::parse(alphabet, rack, game_config.rack_size())?;
        let grid = grid::Grid::from_rows(alphabet, board_rows)?;

        let expected_dim = game_config.board_layout().dim();
        let dim = grid.dim();
        if dim.rows != expected_dim.rows {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                expected_dim.rows, dim.rows
            ));
        }
        if dim.cols != expected_dim.cols {
            return_error!(format!(
                "board: need {} cols, found {} cols",
                expected_dim.cols, dim.cols
            ));
        }

        self.available_tally.clear();
        self.available_tally
            .extend((0..alphabet.len()).map(|tile| alphabet.freq(tile)));
        for &tile in rack.tiles().iter().chain(grid.tiles().iter()) {
            if tile == 0 {
                continue;
            }
            if self.available_tally[tile as usize] > 0 {
                self.available_tally[tile as usize] -= 1;
            } else {
                log::warn!(
                    "too many tile {} (bag contains only {})",
                    alphabet.label(tile).unwrap_or("?"),
                    alphabet.freq(tile),
                );
            }
        }

        Ok((grid, rack))
    }
}

impl Default for Kibitzer {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
