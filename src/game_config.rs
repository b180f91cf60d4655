// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, matrix};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    full_rack_bonus: i32,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    // Hand capacity.
    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i32 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                x.full_rack_bonus & -((num_played >= x.rack_size) as i32)
            }
        }
    }
}

pub fn make_english_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        full_rack_bonus: 50,
    })
}

pub fn make_wwf_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_wwf_alphabet(),
        board_layout: board_layout::make_wwf_board_layout(),
        rack_size: 7,
        full_rack_bonus: 35,
    })
}

// English letter values on a board without premiums, and no bonus.
pub fn make_plain_game_config(rows: i8, cols: i8) -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::BoardLayout::plain(matrix::Dim { rows, cols }),
        rack_size: 7,
        full_rack_bonus: 0,
    })
}

pub fn make_custom_game_config(
    alphabet: alphabet::Alphabet<'static>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    full_rack_bonus: i32,
) -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet,
        board_layout,
        rack_size,
        full_rack_bonus,
    })
}

pub fn make_game_config_by_name(name: &str) -> Option<GameConfig<'static>> {
    match name {
        "english" => Some(make_english_game_config()),
        "wwf" => Some(make_wwf_game_config()),
        "plain" => Some(make_plain_game_config(15, 15)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_only_for_full_rack() {
        let game_config = make_wwf_game_config();
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(7), 35);
        assert_eq!(make_english_game_config().num_played_bonus(7), 50);
        assert_eq!(make_plain_game_config(15, 15).num_played_bonus(7), 0);
    }

    #[test]
    fn configs_by_name() {
        assert!(make_game_config_by_name("english").is_some());
        assert!(make_game_config_by_name("wwf").is_some());
        let plain = make_game_config_by_name("plain").unwrap();
        assert_eq!(plain.board_layout().premium_at(0, 0).word_multiplier, 1);
        assert!(make_game_config_by_name("klingon").is_none());
    }
}
