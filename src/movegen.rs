// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error::EngineError, game_config, grid, lexicon, matrix, play_scorer, rack};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// Everything the engine reads. The engine only ever looks for across plays;
// down plays come from a snapshot over the transposed grid and layout.
pub struct BoardSnapshot<'a> {
    pub grid: &'a grid::Grid,
    pub board_layout: &'a board_layout::BoardLayout,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub lexicon: &'a lexicon::Lexicon,
}

impl<'a> BoardSnapshot<'a> {
    pub fn new(
        grid: &'a grid::Grid,
        game_config: &'a game_config::GameConfig<'a>,
        lexicon: &'a lexicon::Lexicon,
    ) -> Result<Self, EngineError> {
        let board_snapshot = Self {
            grid,
            board_layout: game_config.board_layout(),
            game_config,
            lexicon,
        };
        board_snapshot.check_dim()?;
        Ok(board_snapshot)
    }

    fn check_dim(&self) -> Result<(), EngineError> {
        let grid_dim = self.grid.dim();
        let layout_dim = self.board_layout.dim();
        if grid_dim != layout_dim {
            return Err(EngineError::MalformedBoard(format!(
                "board is {}x{} but the layout is {}x{}",
                grid_dim.rows, grid_dim.cols, layout_dim.rows, layout_dim.cols
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    // primary plus cross words.
    pub score: i32,
    // full-rack bonus, 0 unless the play uses the whole hand.
    pub bonus: i32,
    // the whole word, including tiles already on the board.
    pub word: Box<[u8]>,
    pub pos: matrix::Position,
    pub down: bool,
}

impl Play {
    #[inline(always)]
    pub fn total(&self) -> i32 {
        self.score.saturating_add(self.bonus)
    }
}

// Highest total first, then board order.
pub fn sort_plays(plays: &mut [Play]) {
    plays.sort_unstable_by(|a, b| {
        b.total()
            .cmp(&a.total())
            .then_with(|| a.down.cmp(&b.down))
            .then_with(|| a.pos.cmp(&b.pos))
            .then_with(|| a.word.cmp(&b.word))
    });
}

// Shared flag with an optional deadline, polled between positions.
#[derive(Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
    deadline: Option<std::time::Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: std::time::Instant) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self::with_deadline(std::time::Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self
                .deadline
                .is_some_and(|deadline| std::time::Instant::now() >= deadline)
    }
}

// Inclusive rows of the vertical run of occupied cells touching (row, col)
// from above and below. (row, col) itself is assumed filled.
#[inline(always)]
pub fn perpendicular_extent(grid: &grid::Grid, row: i8, col: i8) -> (i8, i8) {
    let rows = grid.dim().rows;
    let mut top = row;
    while top > 0 && grid.is_occupied(top - 1, col) {
        top -= 1;
    }
    let mut bottom = row;
    while bottom + 1 < rows && grid.is_occupied(bottom + 1, col) {
        bottom += 1;
    }
    (top, bottom)
}

// Word lengths that may start at pos. A word cannot start right after a
// tile, must end at the edge or before an empty cell, must place between 1
// and max_tiles tiles, and must touch a tile already on the board.
pub fn allowable_lengths(grid: &grid::Grid, pos: matrix::Position, max_tiles: i8) -> Vec<i8> {
    let (row, col) = (pos.row, pos.col);
    let row_len = grid.row_len(row);
    if col > 0 && grid.is_occupied(row, col - 1) {
        return Vec::new();
    }
    let mut lengths = Vec::new();
    let mut num_empty = 0i8;
    for k in col..row_len {
        if !grid.is_occupied(row, k) {
            if num_empty >= max_tiles {
                break;
            }
            num_empty += 1;
        }
        let len = k - col + 1;
        if len >= 2 && num_empty > 0 && (k + 1 == row_len || !grid.is_occupied(row, k + 1)) {
            lengths.push(len);
        }
    }
    lengths.retain(|&len| has_neighbor(grid, pos, len));
    lengths
}

pub fn has_neighbor(grid: &grid::Grid, pos: matrix::Position, len: i8) -> bool {
    let (row, col) = (pos.row, pos.col);
    let dim = grid.dim();
    if (col > 0 && grid.is_occupied(row, col - 1))
        || (col + 1 < dim.cols && grid.is_occupied(row, col + 1))
    {
        return true;
    }
    let end = std::cmp::min(col as i16 + len as i16, dim.cols as i16) as i8;
    (col..end).any(|c| {
        grid.is_occupied(row, c)
            || (row > 0 && grid.is_occupied(row - 1, c))
            || (row + 1 < dim.rows && grid.is_occupied(row + 1, c))
    })
}

// Every vertical run of two or more tiles formed by placing word across
// from pos must be a word.
pub fn cross_words_are_valid(
    board_snapshot: &BoardSnapshot<'_>,
    pos: matrix::Position,
    word: &[u8],
) -> bool {
    let grid = board_snapshot.grid;
    let mut cross_word = Vec::new();
    (pos.col..).zip(word.iter()).all(|(col, &tile)| {
        if grid.is_occupied(pos.row, col) {
            return true;
        }
        let (top, bottom) = perpendicular_extent(grid, pos.row, col);
        if top == bottom {
            return true;
        }
        cross_word.clear();
        cross_word.extend((top..=bottom).map(|row| {
            if row == pos.row {
                tile
            } else {
                grid.cell_at(row, col)
            }
        }));
        board_snapshot.lexicon.contains(&cross_word)
    })
}

// rack_tally must not be smaller than the alphabet. working_tally is scratch
// of the same size.
#[inline(always)]
fn rack_covers(span: &[u8], word: &[u8], rack_tally: &[u8], working_tally: &mut [u8]) -> bool {
    working_tally.copy_from_slice(rack_tally);
    for (&b, &tile) in span.iter().zip(word.iter()) {
        if b == 0 {
            if working_tally[tile as usize] == 0 {
                return false;
            }
            working_tally[tile as usize] -= 1;
        }
    }
    true
}

// Calls found(word) for each legal across word of length len from pos.
pub fn for_each_legal_play<F: FnMut(&[u8])>(
    board_snapshot: &BoardSnapshot<'_>,
    rack_tally: &[u8],
    working_tally: &mut [u8],
    pos: matrix::Position,
    len: i8,
    mut found: F,
) {
    let span = board_snapshot.grid.row_slice(pos.row, pos.col, len);
    if span.len() != len as usize {
        return;
    }
    board_snapshot.lexicon.for_each_candidate(span, |word| {
        if rack_covers(span, word, rack_tally, working_tally)
            && cross_words_are_valid(board_snapshot, pos, word)
        {
            found(word);
        }
    });
}

pub fn find_legal_plays(
    board_snapshot: &BoardSnapshot<'_>,
    rack: &rack::Rack,
    pos: matrix::Position,
    len: i8,
) -> Vec<Box<[u8]>> {
    let alphabet_len = board_snapshot.game_config.alphabet().len() as usize;
    let mut rack_tally = vec![0u8; alphabet_len];
    rack.fill_tally(&mut rack_tally);
    let mut working_tally = vec![0u8; alphabet_len];
    let mut words = Vec::new();
    for_each_legal_play(
        board_snapshot,
        &rack_tally,
        &mut working_tally,
        pos,
        len,
        |word| words.push(word.into()),
    );
    words
}

struct WorkingBuffer {
    rack_tally: Box<[u8]>,
    working_tally: Box<[u8]>,
    play_scorer: play_scorer::PlayScorer,
}

impl WorkingBuffer {
    fn new(game_config: &game_config::GameConfig<'_>, rack: &rack::Rack) -> Self {
        let alphabet_len = game_config.alphabet().len() as usize;
        let mut rack_tally = vec![0u8; alphabet_len].into_boxed_slice();
        rack.fill_tally(&mut rack_tally);
        Self {
            rack_tally,
            working_tally: vec![0u8; alphabet_len].into_boxed_slice(),
            play_scorer: play_scorer::PlayScorer::new(),
        }
    }
}

fn max_tiles(game_config: &game_config::GameConfig<'_>, rack: &rack::Rack) -> i8 {
    std::cmp::min(rack.len(), game_config.rack_size().max(0) as usize) as i8
}

fn gen_plays_at(
    board_snapshot: &BoardSnapshot<'_>,
    working_buffer: &mut WorkingBuffer,
    max_tiles: i8,
    pos: matrix::Position,
    down: bool,
    plays: &mut Vec<Play>,
) {
    let grid = board_snapshot.grid;
    let game_config = board_snapshot.game_config;
    for len in allowable_lengths(grid, pos, max_tiles) {
        let num_played = grid.row_slice(pos.row, pos.col, len).iter().filter(|&&b| b == 0).count() as i8;
        let bonus = game_config.num_played_bonus(num_played);
        let WorkingBuffer {
            rack_tally,
            working_tally,
            play_scorer,
        } = working_buffer;
        for_each_legal_play(board_snapshot, rack_tally, working_tally, pos, len, |word| {
            plays.push(Play {
                score: play_scorer.compute_score(board_snapshot, pos, word),
                bonus,
                word: word.into(),
                pos: if down { pos.transposed() } else { pos },
                down,
            });
        });
    }
}

// Across plays starting at pos, scored. This is the single-position entry.
pub fn list_plays_at(
    board_snapshot: &BoardSnapshot<'_>,
    rack: &rack::Rack,
    pos: matrix::Position,
) -> Result<Vec<Play>, EngineError> {
    board_snapshot.grid.check_position(pos)?;
    board_snapshot.check_dim()?;
    check_rack(board_snapshot.game_config, rack)?;
    let mut working_buffer = WorkingBuffer::new(board_snapshot.game_config, rack);
    let mut plays = Vec::new();
    gen_plays_at(
        board_snapshot,
        &mut working_buffer,
        max_tiles(board_snapshot.game_config, rack),
        pos,
        false,
        &mut plays,
    );
    Ok(plays)
}

fn check_rack(game_config: &game_config::GameConfig<'_>, rack: &rack::Rack) -> Result<(), EngineError> {
    if rack.len() > game_config.rack_size().max(0) as usize {
        return Err(EngineError::OversizedRack {
            len: rack.len(),
            capacity: game_config.rack_size(),
        });
    }
    let alphabet_len = game_config.alphabet().len();
    if let Some(&tile) = rack.tiles().iter().find(|&&t| t >= alphabet_len) {
        return Err(EngineError::InvalidTile { tile, alphabet_len });
    }
    Ok(())
}

pub struct GenPlaysParams<'a> {
    pub board_snapshot: &'a BoardSnapshot<'a>,
    pub rack: &'a rack::Rack,
    // 0 means one per cpu.
    pub num_threads: usize,
    pub cancel_token: Option<&'a CancelToken>,
}

pub struct PlayFinder {
    pub plays: Vec<Play>,
}

impl PlayFinder {
    pub fn new() -> Self {
        Self { plays: Vec::new() }
    }

    // Across plays first, then down plays, each in board order.
    pub fn gen_plays(&mut self, params: &GenPlaysParams<'_>) -> Result<(), EngineError> {
        self.plays.clear();
        let board_snapshot = params.board_snapshot;
        board_snapshot.check_dim()?;
        check_rack(board_snapshot.game_config, params.rack)?;
        let num_threads = if params.num_threads == 0 {
            num_cpus::get()
        } else {
            params.num_threads
        };
        let t0 = std::time::Instant::now();

        let across = gen_plays_one_pass(board_snapshot, params, num_threads, false)?;
        let num_across = across.len();
        self.plays.extend(across);

        let flipped_grid = board_snapshot.grid.transpose();
        let flipped_layout = board_snapshot.board_layout.transpose();
        let flipped_snapshot = BoardSnapshot {
            grid: &flipped_grid,
            board_layout: &flipped_layout,
            game_config: board_snapshot.game_config,
            lexicon: board_snapshot.lexicon,
        };
        let down = gen_plays_one_pass(&flipped_snapshot, params, num_threads, true)?;
        let num_down = down.len();
        self.plays.extend(down);

        log::debug!(
            "found {} across and {} down plays with {} threads in {:?}",
            num_across,
            num_down,
            num_threads,
            t0.elapsed()
        );
        Ok(())
    }
}

impl Default for PlayFinder {
    fn default() -> Self {
        Self::new()
    }
}

fn gen_plays_one_pass(
    board_snapshot: &BoardSnapshot<'_>,
    params: &GenPlaysParams<'_>,
    num_threads: usize,
    down: bool,
) -> Result<Vec<Play>, EngineError> {
    let dim = board_snapshot.grid.dim();
    let num_rows = dim.rows.max(0) as usize;
    let max_tiles = max_tiles(board_snapshot.game_config, params.rack);
    let next_row = AtomicUsize::new(0);

    // each worker takes the next unclaimed row until none remain.
    let work = || -> Result<Vec<(usize, Vec<Play>)>, EngineError> {
        let mut working_buffer = WorkingBuffer::new(board_snapshot.game_config, params.rack);
        let mut found = Vec::new();
        loop {
            let row = next_row.fetch_add(1, Ordering::Relaxed);
            if row >= num_rows {
                break;
            }
            let mut plays = Vec::new();
            for col in 0..dim.cols {
                if params.cancel_token.is_some_and(|t| t.is_cancelled()) {
                    return Err(EngineError::Cancelled);
                }
                gen_plays_at(
                    board_snapshot,
                    &mut working_buffer,
                    max_tiles,
                    matrix::Position::new(row as i8, col),
                    down,
                    &mut plays,
                );
            }
            log::trace!(
                "{} {}: {} plays",
                if down { "col" } else { "row" },
                row,
                plays.len()
            );
            found.push((row, plays));
        }
        Ok(found)
    };

    let num_threads = num_threads.clamp(1, num_rows.max(1));
    let mut rows = if num_threads == 1 {
        work()?
    } else {
        std::thread::scope(|s| {
            let handles = (0..num_threads).map(|_| s.spawn(&work)).collect::<Vec<_>>();
            let mut rows = Vec::with_capacity(num_rows);
            let mut result = Ok(());
            for handle in handles {
                match handle.join() {
                    Ok(Ok(found)) => rows.extend(found),
                    Ok(Err(err)) => result = Err(err),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            result.map(|()| rows)
        })?
    };
    rows.sort_unstable_by_key(|&(row, _)| row);
    Ok(rows.into_iter().flat_map(|(_, plays)| plays).collect())
}

// All legal plays in both directions, in board order.
pub fn enumerate_plays(
    board_snapshot: &BoardSnapshot<'_>,
    rack: &rack::Rack,
) -> Result<Vec<Play>, EngineError> {
    let mut play_finder = PlayFinder::new();
    play_finder.gen_plays(&GenPlaysParams {
        board_snapshot,
        rack,
        num_threads: 0,
        cancel_token: None,
    })?;
    Ok(play_finder.plays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    struct Fixture {
        game_config: game_config::GameConfig<'static>,
        grid: grid::Grid,
        lexicon: lexicon::Lexicon,
    }

    impl Fixture {
        fn new(rows: &[&str], words: &[&str]) -> Self {
            let game_config =
                game_config::make_plain_game_config(rows.len() as i8, rows[0].len() as i8);
            let grid = grid::Grid::from_rows(game_config.alphabet(), rows).unwrap();
            let lexicon = lexicon::Lexicon::from_words(game_config.alphabet(), words.iter()).unwrap();
            Self {
                game_config,
                grid,
                lexicon,
            }
        }

        fn snapshot(&self) -> BoardSnapshot<'_> {
            BoardSnapshot::new(&self.grid, &self.game_config, &self.lexicon).unwrap()
        }

        fn rack(&self, s: &str) -> rack::Rack {
            rack::Rack::parse(self.game_config.alphabet(), s, 7).unwrap()
        }

        fn word(&self, s: &str) -> Box<[u8]> {
            self.game_config.alphabet().parse_word(s).unwrap()
        }

        fn words(&self, words: &[Box<[u8]>]) -> Vec<String> {
            let mut ret = words
                .iter()
                .map(|w| self.game_config.alphabet().fmt_word(w))
                .collect::<Vec<_>>();
            ret.sort();
            ret
        }
    }

    fn pos(row: i8, col: i8) -> matrix::Position {
        matrix::Position::new(row, col)
    }

    #[test]
    fn no_start_right_after_a_tile() {
        let fx = Fixture::new(&["CAT..", "....."], &[]);
        assert!(allowable_lengths(&fx.grid, pos(0, 1), 7).is_empty());
        assert!(allowable_lengths(&fx.grid, pos(0, 3), 7).is_empty());
    }

    #[test]
    fn lengths_end_at_word_boundaries() {
        let fx = Fixture::new(&[".CAT..", "......"], &[]);
        // through CAT, then one or two more cells.
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 0), 7), [4, 5, 6]);
        // CAT itself places nothing.
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 1), 7), [4, 5]);
        // ends before CAT are truncations.
        let fx = Fixture::new(&["...CAT", "......"], &[]);
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 0), 7), [6]);
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 2), 7), [4]);
    }

    #[test]
    fn lengths_respect_tile_budget() {
        let fx = Fixture::new(&["..CAT...", "........"], &[]);
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 0), 1), Vec::<i8>::new());
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 1), 1), [4]);
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 1), 2), [4, 5]);
        assert_eq!(allowable_lengths(&fx.grid, pos(0, 2), 2), [4, 5]);
        assert!(allowable_lengths(&fx.grid, pos(0, 2), 0).is_empty());
    }

    #[test]
    fn lengths_need_a_connection() {
        let fx = Fixture::new(&["....", "....", "..A.", "...."], &[]);
        // row 0 touches nothing.
        assert!(allowable_lengths(&fx.grid, pos(0, 0), 7).is_empty());
        // row 1 spans over column 2 reach the A below.
        assert_eq!(allowable_lengths(&fx.grid, pos(1, 0), 7), [3, 4]);
        assert_eq!(allowable_lengths(&fx.grid, pos(1, 3), 7), Vec::<i8>::new());
        assert!(has_neighbor(&fx.grid, pos(3, 1), 2));
        assert!(!has_neighbor(&fx.grid, pos(0, 0), 4));
    }

    #[test]
    fn empty_board_has_no_lengths() {
        let fx = Fixture::new(&["...", "...", "..."], &[]);
        for row in 0..3 {
            for col in 0..3 {
                assert!(allowable_lengths(&fx.grid, pos(row, col), 7).is_empty());
            }
        }
    }

    #[test]
    fn matcher_counts_letters() {
        let fx = Fixture::new(&["....E..", "......."], &["GEESE", "GEE", "EEL", "SEE"]);
        let snapshot = fx.snapshot();
        // two more Es are needed for GEESE, rack has one.
        assert_eq!(
            fx.words(&find_legal_plays(&snapshot, &fx.rack("GESX"), pos(0, 2), 5)),
            Vec::<String>::new()
        );
        assert_eq!(
            fx.words(&find_legal_plays(&snapshot, &fx.rack("GEES"), pos(0, 2), 5)),
            ["GEESE"]
        );
        assert_eq!(
            fx.words(&find_legal_plays(&snapshot, &fx.rack("GEES"), pos(0, 2), 3)),
            ["GEE", "SEE"]
        );
    }

    #[test]
    fn validator_checks_perpendicular_runs() {
        let fx = Fixture::new(&["A...", "....", "...."], &["AT", "TO", "ON", "AX"]);
        let snapshot = fx.snapshot();
        assert!(cross_words_are_valid(&snapshot, pos(1, 0), &fx.word("TO")));
        assert!(!cross_words_are_valid(&snapshot, pos(1, 0), &fx.word("ON")));
        // far from any tile every run is a single letter.
        assert!(cross_words_are_valid(&snapshot, pos(2, 1), &fx.word("QQ")));
        assert_eq!(
            fx.words(&find_legal_plays(&snapshot, &fx.rack("TOXN"), pos(1, 0), 2)),
            ["TO"]
        );
    }

    #[test]
    fn validator_sees_runs_above_and_below() {
        let fx = Fixture::new(&["C..", ".A.", "T.."], &["CAT", "AA", "AB"]);
        let snapshot = fx.snapshot();
        // A at (1, 0) joins C above and T below.
        assert!(cross_words_are_valid(&snapshot, pos(1, 0), &fx.word("AA")));
        assert!(!cross_words_are_valid(&snapshot, pos(1, 0), &fx.word("BA")));
    }

    #[test]
    fn single_position_entry_checks_its_inputs() {
        let fx = Fixture::new(&["CAT..", "....."], &["CAT", "CATS", "AT"]);
        let snapshot = fx.snapshot();
        assert!(matches!(
            list_plays_at(&snapshot, &fx.rack("S"), pos(2, 0)),
            Err(EngineError::InvalidPosition { .. })
        ));
        let plays = list_plays_at(&snapshot, &fx.rack("S"), pos(0, 0)).unwrap();
        assert_eq!(plays.len(), 1);
        assert_eq!(&plays[0].word[..], &fx.word("CATS")[..]);
        assert_eq!(plays[0].score, 6);
    }

    #[test]
    fn snapshot_rejects_mismatched_layout() {
        let game_config = game_config::make_english_game_config();
        let grid = grid::Grid::from_rows(game_config.alphabet(), &["CAT", "...", "..."]).unwrap();
        let lexicon = lexicon::Lexicon::new(game_config.alphabet());
        assert!(matches!(
            BoardSnapshot::new(&grid, &game_config, &lexicon),
            Err(EngineError::MalformedBoard(_))
        ));
    }

    #[test]
    fn finds_plays_both_ways() {
        let fx = Fixture::new(&["....", ".AT.", "....", "...."], &["AT", "ATE", "TA", "TE"]);
        let snapshot = fx.snapshot();
        let plays = enumerate_plays(&snapshot, &fx.rack("E")).unwrap();
        let mut found = plays
            .iter()
            .map(|p| (fx.game_config.alphabet().fmt_word(&p.word), p.pos, p.down, p.score))
            .collect::<Vec<_>>();
        found.sort();
        assert_eq!(
            found,
            [
                ("ATE".to_string(), pos(1, 1), false, 3),
                ("TE".to_string(), pos(1, 2), true, 2),
            ]
        );
    }

    #[test]
    fn thread_count_does_not_change_output() {
        let fx = Fixture::new(
            &[".....", ".CAT.", "...O.", "..ON.", "....."],
            &["CAT", "CATS", "TO", "TON", "TONS", "ON", "NO", "SO", "AT", "SAT", "OS", "NOS"],
        );
        let snapshot = fx.snapshot();
        let rack = fx.rack("SONA");
        let mut results = Vec::new();
        for num_threads in [1, 2, 5, 9] {
            let mut play_finder = PlayFinder::new();
            play_finder
                .gen_plays(&GenPlaysParams {
                    board_snapshot: &snapshot,
                    rack: &rack,
                    num_threads,
                    cancel_token: None,
                })
                .unwrap();
            results.push(play_finder.plays);
        }
        assert!(!results[0].is_empty());
        assert!(results.iter().all(|plays| *plays == results[0]));
    }

    #[test]
    fn cancelled_runs_return_nothing() {
        let fx = Fixture::new(&["CAT..", "....."], &["CAT", "CATS"]);
        let snapshot = fx.snapshot();
        let rack = fx.rack("S");
        let cancel_token = CancelToken::new();
        cancel_token.cancel();
        let mut play_finder = PlayFinder::new();
        let result = play_finder.gen_plays(&GenPlaysParams {
            board_snapshot: &snapshot,
            rack: &rack,
            num_threads: 2,
            cancel_token: Some(&cancel_token),
        });
        assert!(matches!(result, Err(EngineError::Cancelled)));
        assert!(play_finder.plays.is_empty());

        let expired = CancelToken::with_deadline(std::time::Instant::now());
        assert!(expired.is_cancelled());
        let relaxed = CancelToken::with_timeout(std::time::Duration::from_secs(3600));
        assert!(!relaxed.is_cancelled());
    }

    #[test]
    fn oversized_rack_is_rejected() {
        let game_config = game_config::make_custom_game_config(
            alphabet::make_english_alphabet(),
            board_layout::BoardLayout::plain(matrix::Dim { rows: 2, cols: 2 }),
            1,
            0,
        );
        let grid = grid::Grid::from_rows(game_config.alphabet(), &["A.", ".."]).unwrap();
        let lexicon = lexicon::Lexicon::new(game_config.alphabet());
        let snapshot = BoardSnapshot::new(&grid, &game_config, &lexicon).unwrap();
        let rack = rack::Rack::new(game_config.alphabet(), &[1, 2], 7).unwrap();
        assert!(matches!(
            enumerate_plays(&snapshot, &rack),
            Err(EngineError::OversizedRack { len: 2, capacity: 1 })
        ));
    }

    #[test]
    fn sort_puts_best_first() {
        let mut plays = vec![
            Play {
                score: 3,
                bonus: 50,
                word: Box::new([1, 2]),
                pos: pos(0, 0),
                down: false,
            },
            Play {
                score: 9,
                bonus: 0,
                word: Box::new([1, 2]),
                pos: pos(4, 0),
                down: true,
            },
            Play {
                score: 9,
                bonus: 0,
                word: Box::new([1, 2]),
                pos: pos(4, 0),
                down: false,
            },
        ];
        sort_plays(&mut plays);
        assert_eq!(
            plays.iter().map(|p| (p.total(), p.down)).collect::<Vec<_>>(),
            [(53, false), (9, false), (9, true)]
        );
    }
}
