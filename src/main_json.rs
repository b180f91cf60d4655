// Copyright (C) 2020-2026 Andy Kurnia.

use playfinder::{error, kibitzer, lexicon, movegen};
use tokio::io::AsyncReadExt;

// config: "english", "wwf" or "plain" (plain takes its size from the board).
// lexicon: path to a word list, one word per line.
// board: one string per row. letters are tiles, '.' is empty.
// rack: letters.
// count: maximum number of plays returned, best first.
// timeout_ms: give up (and return an error) after this long.
//
// {
//   "config": "english",
//   "lexicon": "words.txt",
//   "board": [ "...............", ... ],
//   "rack": "AEINRST",
//   "count": 15
// }

fn answer(
    question: &kibitzer::Question,
    cancel_token: &movegen::CancelToken,
) -> error::Returns<Vec<kibitzer::JsonPlay>> {
    let game_config = question.game_config()?;
    let (grid, rack) =
        kibitzer::Kibitzer::new().prepare(&game_config, &question.rack, &question.board)?;
    let lexicon = lexicon::Lexicon::from_file(game_config.alphabet(), &question.lexicon)?;
    let board_snapshot = movegen::BoardSnapshot::new(&grid, &game_config, &lexicon)?;

    let mut play_finder = movegen::PlayFinder::new();
    play_finder.gen_plays(&movegen::GenPlaysParams {
        board_snapshot: &board_snapshot,
        rack: &rack,
        num_threads: 0,
        cancel_token: Some(cancel_token),
    })?;
    let mut plays = play_finder.plays;
    movegen::sort_plays(&mut plays);
    if let Some(count) = question.count {
        plays.truncate(count);
    }
    Ok(plays
        .iter()
        .map(|play| kibitzer::JsonPlay::new(game_config.alphabet(), play))
        .collect())
}

#[tokio::main]
async fn main() -> error::Returns<()> {
    playfinder::init_logger();
    let data = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut data = String::new();
            tokio::io::stdin().read_to_string(&mut data).await?;
            data
        }
    };
    let question = serde_json::from_str::<kibitzer::Question>(&data)?;
    let timeout = question.timeout_ms.map(std::time::Duration::from_millis);
    let cancel_token = std::sync::Arc::new(match timeout {
        Some(timeout) => movegen::CancelToken::with_timeout(timeout),
        None => movegen::CancelToken::new(),
    });

    let t0 = std::time::Instant::now();
    let mut task = tokio::task::spawn_blocking({
        let cancel_token = std::sync::Arc::clone(&cancel_token);
        move || answer(&question, &cancel_token)
    });
    let result = match timeout {
        None => task.await?,
        Some(timeout) => {
            tokio::select! {
                result = &mut task => result?,
                _ = tokio::time::sleep(timeout) => {
                    log::warn!("deadline of {:?} reached", timeout);
                    cancel_token.cancel();
                    task.await?
                }
            }
        }
    };
    log::debug!("answered in {:?}", t0.elapsed());

    match result {
        Ok(plays) => {
            println!("{}", serde_json::to_string_pretty(&plays)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::json!({ "error": err.to_string() }));
            Err(err)
        }
    }
}
