// Copyright (C) 2020-2026 Andy Kurnia.

use playfinder::{display, error, game_config, grid, lexicon, matrix, movegen, rack, rlhelper};

const HELP: &str = "\
config <english|wwf|plain> [rows cols]  pick rules (clears the board)
board <file>                            read the board, one row per line
lexicon <file>                          read the word list
rack <letters>                          set the rack
show                                    print board and rack
gen [count]                             list the best plays
at <row> <col>                          list across plays starting there (0-based)
play <n>                                put the n-th play of the last gen on the board
source <file>                           run commands from a file
help                                    this
exit                                    quit";

struct Shell {
    game_config: game_config::GameConfig<'static>,
    grid: grid::Grid,
    lexicon: Option<lexicon::Lexicon>,
    rack: Option<rack::Rack>,
    last_plays: Vec<movegen::Play>,
}

impl Shell {
    fn new() -> Self {
        let game_config = game_config::make_english_game_config();
        let grid = grid::Grid::empty(game_config.board_layout().dim());
        Self {
            game_config,
            grid,
            lexicon: None,
            rack: None,
            last_plays: Vec::new(),
        }
    }

    fn lexicon(&self) -> error::Returns<&lexicon::Lexicon> {
        match &self.lexicon {
            Some(lexicon) => Ok(lexicon),
            None => {
                playfinder::return_error!("no lexicon yet, try: lexicon <file>".into());
            }
        }
    }

    fn rack(&self) -> error::Returns<&rack::Rack> {
        match &self.rack {
            Some(rack) => Ok(rack),
            None => {
                playfinder::return_error!("no rack yet, try: rack <letters>".into());
            }
        }
    }

    fn set_config(&mut self, args: &[String]) -> error::Returns<()> {
        let name = args.first().map_or("english", String::as_str);
        self.game_config = if name == "plain" {
            let dim = match args {
                [_, rows, cols] => matrix::Dim {
                    rows: rows.parse()?,
                    cols: cols.parse()?,
                },
                _ => self.grid.dim(),
            };
            game_config::make_plain_game_config(dim.rows, dim.cols)
        } else {
            match game_config::make_game_config_by_name(name) {
                Some(game_config) => game_config,
                None => {
                    playfinder::return_error!(format!("unknown config {:?}", name));
                }
            }
        };
        self.grid = grid::Grid::empty(self.game_config.board_layout().dim());
        self.last_plays.clear();
        Ok(())
    }

    fn set_board(&mut self, path: &str) -> error::Returns<()> {
        let grid = grid::Grid::from_file(self.game_config.alphabet(), path)?;
        let layout_dim = self.game_config.board_layout().dim();
        if grid.dim() != layout_dim {
            playfinder::return_error!(format!(
                "board is {}x{} but the layout is {}x{}, try: config plain",
                grid.dim().rows,
                grid.dim().cols,
                layout_dim.rows,
                layout_dim.cols
            ));
        }
        self.grid = grid;
        self.last_plays.clear();
        Ok(())
    }

    fn generate(&mut self, count: usize) -> error::Returns<()> {
        let lexicon = self.lexicon()?;
        let rack = self.rack()?;
        let board_snapshot = movegen::BoardSnapshot::new(&self.grid, &self.game_config, lexicon)?;
        let t0 = std::time::Instant::now();
        let mut play_finder = movegen::PlayFinder::new();
        play_finder.gen_plays(&movegen::GenPlaysParams {
            board_snapshot: &board_snapshot,
            rack,
            num_threads: 0,
            cancel_token: None,
        })?;
        let elapsed = t0.elapsed();
        let mut plays = play_finder.plays;
        movegen::sort_plays(&mut plays);
        let alphabet = self.game_config.alphabet();
        for (i, play) in plays.iter().take(count).enumerate() {
            println!("{:3}: {}", i + 1, display::fmt_play(alphabet, &self.grid, play));
        }
        println!("{} plays in {:?}", plays.len(), elapsed);
        self.last_plays = plays;
        Ok(())
    }

    fn list_at(&self, row: &str, col: &str) -> error::Returns<()> {
        let lexicon = self.lexicon()?;
        let rack = self.rack()?;
        let board_snapshot = movegen::BoardSnapshot::new(&self.grid, &self.game_config, lexicon)?;
        let pos = matrix::Position::new(row.parse()?, col.parse()?);
        let plays = movegen::list_plays_at(&board_snapshot, rack, pos)?;
        let alphabet = self.game_config.alphabet();
        for play in plays.iter() {
            println!("  {}", display::fmt_play(alphabet, &self.grid, play));
        }
        println!("{} plays", plays.len());
        Ok(())
    }

    fn play(&mut self, n: &str) -> error::Returns<()> {
        let n = n.parse::<usize>()?;
        let play = match n.checked_sub(1).and_then(|i| self.last_plays.get(i)) {
            Some(play) => play,
            None => {
                playfinder::return_error!(format!(
                    "no play {}, last gen found {}",
                    n,
                    self.last_plays.len()
                ));
            }
        };
        let alphabet = self.game_config.alphabet();
        println!("{}", display::fmt_play(alphabet, &self.grid, play));
        self.grid = self.grid.with_word(play.pos, play.down, &play.word);
        self.last_plays.clear();
        Ok(())
    }

    fn show(&self) {
        let alphabet = self.game_config.alphabet();
        display::print_board(alphabet, self.game_config.board_layout(), &self.grid);
        match &self.rack {
            Some(rack) => println!("rack: {}", alphabet.fmt_word(rack.tiles())),
            None => println!("rack: (none)"),
        }
        if let Some(lexicon) = &self.lexicon {
            println!("lexicon: {} words", lexicon.len());
        }
    }

    fn handle(&mut self, strings: &[String]) -> error::Returns<()> {
        let args = &strings[1..];
        match (strings[0].as_str(), args) {
            ("config", _) => self.set_config(args),
            ("board", [path]) => self.set_board(path),
            ("lexicon", [path]) => {
                let lexicon = lexicon::Lexicon::from_file(self.game_config.alphabet(), path)?;
                println!("{} words", lexicon.len());
                self.lexicon = Some(lexicon);
                Ok(())
            }
            ("rack", [letters]) => {
                self.rack = Some(rack::Rack::parse(
                    self.game_config.alphabet(),
                    letters,
                    self.game_config.rack_size(),
                )?);
                Ok(())
            }
            ("show", []) => {
                self.show();
                Ok(())
            }
            ("gen", []) => self.generate(20),
            ("gen", [count]) => self.generate(count.parse()?),
            ("at", [row, col]) => self.list_at(row, col),
            ("play", [n]) => self.play(n),
            (cmd, _) => {
                playfinder::return_error!(format!("invalid input {:?}, help for help", cmd));
            }
        }
    }
}

fn main() -> error::Returns<()> {
    playfinder::init_logger();
    let mut rl = rlhelper::new_rl_editor()?;
    let mut shell = Shell::new();
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "help" => {
                                println!("{}", HELP);
                            }
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.handle(&strings) {
                                    println!("{}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
