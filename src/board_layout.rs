// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

const TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
const DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
const TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
const DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
const FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

pub struct BoardLayout {
    dim: matrix::Dim,
    premiums: Box<[Premium]>,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    pub fn plain(dim: matrix::Dim) -> BoardLayout {
        BoardLayout {
            dim,
            premiums: vec![FVS; dim.area()].into_boxed_slice(),
        }
    }

    // Absent positions default to 1.
    pub fn from_maps(
        dim: matrix::Dim,
        letter_multipliers: &fash::MyHashMap<matrix::Position, i8>,
        word_multipliers: &fash::MyHashMap<matrix::Position, i8>,
    ) -> error::Returns<BoardLayout> {
        let mut premiums = vec![FVS; dim.area()].into_boxed_slice();
        for (which, map) in [("letter", letter_multipliers), ("word", word_multipliers)] {
            for (&pos, &multiplier) in map.iter() {
                if !dim.contains(pos) {
                    return_error!(format!(
                        "{} multiplier at ({}, {}) is outside the {}x{} board",
                        which, pos.row, pos.col, dim.rows, dim.cols
                    ));
                }
                if multiplier < 1 {
                    return_error!(format!(
                        "{} multiplier at ({}, {}) must be at least 1, found {}",
                        which, pos.row, pos.col, multiplier
                    ));
                }
                let premium = &mut premiums[dim.at_row_col(pos.row, pos.col)];
                if which == "letter" {
                    premium.letter_multiplier = multiplier;
                } else {
                    premium.word_multiplier = multiplier;
                }
            }
        }
        Ok(BoardLayout { dim, premiums })
    }

    pub fn transpose(&self) -> BoardLayout {
        BoardLayout {
            dim: self.dim.transposed(),
            premiums: self.dim.transpose_cells(&self.premiums),
        }
    }
}

#[rustfmt::skip]
pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout {
        dim: matrix::Dim { rows: 15, cols: 15 },
        premiums: Box::new([
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS,
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS,
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS,
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS,
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS,
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS,
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS,
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS,
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS,
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS,
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS,
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS,
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS,
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS,
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS,
        ]),
    }
}

#[rustfmt::skip]
pub fn make_wwf_board_layout() -> BoardLayout {
    BoardLayout {
        dim: matrix::Dim { rows: 15, cols: 15 },
        premiums: Box::new([
            FVS, FVS, FVS, TWS, FVS, FVS, TLS, FVS, TLS, FVS, FVS, TWS, FVS, FVS, FVS,
            FVS, FVS, DLS, FVS, FVS, DWS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, FVS, FVS,
            FVS, DLS, FVS, FVS, DLS, FVS, FVS, FVS, FVS, FVS, DLS, FVS, FVS, DLS, FVS,
            TWS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, TWS,
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS,
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS,
            TLS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, TLS,
            FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS,
            TLS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, TLS,
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS,
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS,
            TWS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, TWS,
            FVS, DLS, FVS, FVS, DLS, FVS, FVS, FVS, FVS, FVS, DLS, FVS, FVS, DLS, FVS,
            FVS, FVS, DLS, FVS, FVS, DWS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, FVS, FVS,
            FVS, FVS, FVS, TWS, FVS, FVS, TLS, FVS, TLS, FVS, FVS, TWS, FVS, FVS, FVS,
        ]),
    }
}
