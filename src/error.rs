// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error + Send + Sync>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Structural failures of the engine. Rejected words are not errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    InvalidPosition { row: i8, col: i8, rows: i8, cols: i8 },

    #[error("malformed board: {0}")]
    MalformedBoard(String),

    #[error("rack has {len} tiles, hand capacity is {capacity}")]
    OversizedRack { len: usize, capacity: i8 },

    #[error("tile {tile} is not a letter of the {alphabet_len}-tile alphabet")]
    InvalidTile { tile: u8, alphabet_len: u8 },

    #[error("play generation cancelled")]
    Cancelled,
}
