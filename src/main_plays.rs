// Copyright (C) 2020-2026 Andy Kurnia.

use playfinder::{display, error, game_config, grid, lexicon, movegen, rack};

fn print_plays(
    header: &str,
    alphabet: &playfinder::alphabet::Alphabet<'_>,
    grid: &grid::Grid,
    plays: &[&movegen::Play],
) {
    println!("{} ({})", header, plays.len());
    for play in plays {
        println!("  {}", display::fmt_play(alphabet, grid, play));
    }
}

fn write_csv(
    path: &str,
    alphabet: &playfinder::alphabet::Alphabet<'_>,
    plays: &[movegen::Play],
) -> error::Returns<()> {
    let mut csv_out = csv::Writer::from_path(path)?;
    csv_out.serialize(("score", "bonus", "word", "row", "col", "down"))?;
    for play in plays {
        csv_out.serialize((
            play.score,
            play.bonus,
            alphabet.fmt_word(&play.word),
            play.pos.row,
            play.pos.col,
            play.down,
        ))?;
    }
    csv_out.flush()?;
    Ok(())
}

fn main() -> error::Returns<()> {
    playfinder::init_logger();
    let mut positional = Vec::new();
    let mut csv_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--csv" {
            match args.next() {
                Some(path) => csv_path = Some(path),
                None => {
                    playfinder::return_error!("--csv needs a file name".into());
                }
            }
        } else {
            positional.push(arg);
        }
    }
    if positional.len() < 3 || positional.len() > 4 {
        println!(
            "usage: plays <board.txt> <words.txt> <RACK> [english|wwf|plain] [--csv out.csv]"
        );
        return Ok(());
    }

    let config_name = positional.get(3).map_or("plain", String::as_str);
    let english = game_config::make_english_game_config();
    // the plain config takes its size from the board.
    let grid = grid::Grid::from_file(english.alphabet(), &positional[0])?;
    let game_config = match config_name {
        "plain" => game_config::make_plain_game_config(grid.dim().rows, grid.dim().cols),
        name => match game_config::make_game_config_by_name(name) {
            Some(game_config) => game_config,
            None => {
                playfinder::return_error!(format!("unknown config {:?}", name));
            }
        },
    };
    let alphabet = game_config.alphabet();
    let lexicon = lexicon::Lexicon::from_file(alphabet, &positional[1])?;
    let rack = rack::Rack::parse(alphabet, &positional[2], game_config.rack_size())?;
    let board_snapshot = movegen::BoardSnapshot::new(&grid, &game_config, &lexicon)?;

    display::print_board(alphabet, game_config.board_layout(), &grid);
    println!("rack: {}", alphabet.fmt_word(rack.tiles()));

    let t0 = std::time::Instant::now();
    let mut play_finder = movegen::PlayFinder::new();
    play_finder.gen_plays(&movegen::GenPlaysParams {
        board_snapshot: &board_snapshot,
        rack: &rack,
        num_threads: 0,
        cancel_token: None,
    })?;
    log::info!("{} plays in {:?}", play_finder.plays.len(), t0.elapsed());

    let mut plays = play_finder.plays;
    movegen::sort_plays(&mut plays);
    let (down, across): (Vec<_>, Vec<_>) = plays.iter().partition(|play| play.down);
    print_plays("HORIZONTAL PLAYS", alphabet, &grid, &across);
    print_plays("VERTICAL PLAYS", alphabet, &grid, &down);

    if let Some(path) = csv_path {
        write_csv(&path, alphabet, &plays)?;
        log::info!("wrote {} plays to {}", plays.len(), path);
    }
    Ok(())
}
