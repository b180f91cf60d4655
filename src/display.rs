// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, grid, matrix, movegen};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> &'static str {
    let premium = board_layout.premium_at(row, col);
    match premium.word_multiplier {
        3.. => "=",
        2 => "-",
        _ => match premium.letter_multiplier {
            3.. => "\"",
            2 => "\'",
            _ => " ",
        },
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout,
    grid: &grid::Grid,
    row: i8,
    col: i8,
) -> &'a str {
    match grid.cell_at(row, col) {
        0 => empty_label(board_layout, row, col),
        tile => alphabet.label(tile).unwrap_or("?"),
    }
}

#[inline(always)]
fn col_label(col: i8) -> char {
    ((col as u8) + 0x61) as char
}

fn fmt_frame(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

fn fmt_col_labels(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push(col_label(c));
    }
    s.push('\n');
}

pub fn fmt_board<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout,
    grid: &grid::Grid,
) -> String {
    let dim = grid.dim();
    let mut s = String::new();
    fmt_col_labels(&mut s, dim.cols);
    fmt_frame(&mut s, dim.cols);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(board_label(alphabet, board_layout, grid, r, c));
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    fmt_frame(&mut s, dim.cols);
    fmt_col_labels(&mut s, dim.cols);
    s
}

pub fn print_board<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout,
    grid: &grid::Grid,
) {
    print!("{}", fmt_board(alphabet, board_layout, grid));
}

// "8h" for across, "h8" for down.
pub fn fmt_coord(play: &movegen::Play) -> String {
    if play.down {
        format!("{}{}", col_label(play.pos.col), play.pos.row + 1)
    } else {
        format!("{}{}", play.pos.row + 1, col_label(play.pos.col))
    }
}

// Tiles already on the board are parenthesized.
pub fn fmt_word_on_board(alphabet: &alphabet::Alphabet<'_>, grid: &grid::Grid, play: &movegen::Play) -> String {
    let mut s = String::new();
    let mut inside = false;
    for (i, &tile) in play.word.iter().enumerate() {
        let (row, col) = if play.down {
            (play.pos.row + i as i8, play.pos.col)
        } else {
            (play.pos.row, play.pos.col + i as i8)
        };
        let on_board = grid.dim().contains(matrix::Position::new(row, col)) && grid.is_occupied(row, col);
        if on_board != inside {
            s.push(if on_board { '(' } else { ')' });
            inside = on_board;
        }
        s.push_str(alphabet.label(tile).unwrap_or("?"));
    }
    if inside {
        s.push(')');
    }
    s
}

// "8h (CAT)S 7", with "+50" appended for a full-rack bonus.
pub fn fmt_play(alphabet: &alphabet::Alphabet<'_>, grid: &grid::Grid, play: &movegen::Play) -> String {
    let mut s = format!(
        "{} {} {}",
        fmt_coord(play),
        fmt_word_on_board(alphabet, grid, play),
        play.score
    );
    if play.bonus != 0 {
        s.push_str(&format!("+{}", play.bonus));
    }
    s
}
