// Copyright (C) 2020-2026 Andy Kurnia.

use playfinder::{bag, display, error, game_config, grid, lexicon, movegen, play_scorer, rack};
use rand::prelude::*;

// Removes the tiles play puts on grid from rack_tiles.
fn use_tiles(grid: &grid::Grid, play: &movegen::Play, rack_tiles: &mut Vec<u8>) {
    for (i, &tile) in play.word.iter().enumerate() {
        let (row, col) = if play.down {
            (play.pos.row + i as i8, play.pos.col)
        } else {
            (play.pos.row, play.pos.col + i as i8)
        };
        if !grid.is_occupied(row, col) {
            if let Some(idx) = rack_tiles.iter().position(|&t| t == tile) {
                rack_tiles.swap_remove(idx);
            }
        }
    }
}

fn main() -> error::Returns<()> {
    playfinder::init_logger();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 5 {
        println!("usage: auto <words.txt> [english|wwf] [games] [seed]");
        return Ok(());
    }
    let config_name = args.get(2).map_or("english", String::as_str);
    let game_config = match game_config::make_game_config_by_name(config_name) {
        Some(game_config) => game_config,
        None => {
            playfinder::return_error!(format!("unknown config {:?}", config_name));
        }
    };
    let num_games = match args.get(3) {
        Some(s) => s.parse::<usize>()?,
        None => 10,
    };
    let seed = match args.get(4) {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random(),
    };
    log::info!("seed {}", seed);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);

    let alphabet = game_config.alphabet();
    let dim = game_config.board_layout().dim();
    let rack_size = game_config.rack_size();
    let lexicon = lexicon::Lexicon::from_file(alphabet, &args[1])?;
    let openers = (2..=std::cmp::min(rack_size, dim.cols) as usize)
        .flat_map(|len| lexicon.words_of_len(len))
        .collect::<Vec<_>>();
    if openers.is_empty() {
        playfinder::return_error!(format!("no words of 2 to {} letters", rack_size));
    }

    let mut play_scorer = play_scorer::PlayScorer::new();
    let mut play_finder = movegen::PlayFinder::new();
    let mut num_checked = 0usize;
    let mut gen_time = std::time::Duration::ZERO;

    for game_num in 1..=num_games {
        let mut bag = bag::Bag::new(alphabet);
        bag.shuffle(&mut rng);
        let opener = match openers.choose(&mut rng) {
            Some(&opener) => opener,
            None => break,
        };
        if !bag.remove_tiles(opener) {
            log::debug!("opener {} is not in the bag", alphabet.fmt_word(opener));
        }
        let mut grid = grid::Grid::empty(dim).with_word_across(
            dim.rows / 2,
            (dim.cols - opener.len() as i8) / 2,
            opener,
        );
        println!("game {}: opening with {}", game_num, alphabet.fmt_word(opener));

        let mut rack_tiles = Vec::new();
        let mut total_score = 0i64;
        let mut num_turns = 0;
        loop {
            bag.replenish(&mut rack_tiles, rack_size as usize);
            if rack_tiles.is_empty() {
                break;
            }
            let rack = rack::Rack::new(alphabet, &rack_tiles, rack_size)?;
            let board_snapshot = movegen::BoardSnapshot::new(&grid, &game_config, &lexicon)?;
            let t0 = std::time::Instant::now();
            play_finder.gen_plays(&movegen::GenPlaysParams {
                board_snapshot: &board_snapshot,
                rack: &rack,
                num_threads: 0,
                cancel_token: None,
            })?;
            gen_time += t0.elapsed();

            for play in play_finder.plays.iter() {
                if !play_scorer.play_is_valid(&board_snapshot, &rack, play) {
                    playfinder::return_error!(format!(
                        "invalid play {} with rack {}",
                        display::fmt_play(alphabet, &grid, play),
                        alphabet.fmt_word(rack.tiles())
                    ));
                }
            }
            num_checked += play_finder.plays.len();

            movegen::sort_plays(&mut play_finder.plays);
            let best = match play_finder.plays.first() {
                Some(play) => play.clone(),
                None => {
                    println!("  no plays with {}", alphabet.fmt_word(rack.tiles()));
                    break;
                }
            };
            num_turns += 1;
            total_score += best.total() as i64;
            println!(
                "  {:2}. {:7} {} ({} plays)",
                num_turns,
                alphabet.fmt_word(rack.tiles()),
                display::fmt_play(alphabet, &grid, &best),
                play_finder.plays.len()
            );
            use_tiles(&grid, &best, &mut rack_tiles);
            grid = grid.with_word(best.pos, best.down, &best.word);
        }

        display::print_board(alphabet, game_config.board_layout(), &grid);
        println!(
            "game {}: {} turns, {} points, {} tiles in bag",
            game_num,
            num_turns,
            total_score,
            bag.len()
        );
    }

    println!("{} plays generated and checked in {:?}", num_checked, gen_time);
    Ok(())
}
