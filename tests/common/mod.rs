// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use parlor::application::{GameSession, Teller};
use parlor::cli::{run_game, run_teller, Console, Palette};

/// Drive the teller menu with `input` and return the teller and everything printed.
pub fn teller_session(input: &str) -> Result<(Teller, String)> {
    let mut teller = Teller::default();
    let mut console = plain_console(input);
    run_teller(&mut teller, &mut console)?;
    Ok((teller, output_of(console)))
}

/// Drive the game with `input` and return the session and everything printed.
pub fn game_session(input: &str) -> Result<(GameSession, String)> {
    let mut session = GameSession::new();
    let mut console = plain_console(input);
    run_game(&mut session, &mut console)?;
    Ok((session, output_of(console)))
}

fn plain_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Palette::plain(),
    )
}

fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_writer()).expect("output is utf-8")
}
