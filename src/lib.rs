// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod grid;
pub mod kibitzer;
pub mod lexicon;
pub mod matrix;
pub mod movegen;
pub mod play_scorer;
pub mod rack;
pub mod rlhelper;

// RUST_LOG overrides the default of info.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
