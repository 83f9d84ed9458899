use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::application::{GameSession, RoundSummary};
use crate::domain::{Board, GameStatus, Position, BOARD_SIZE};

use super::{parse_integer, Console, GlobalArgs, Input, Palette};

/// Tic-Tac-Toe - two players, one keyboard
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console Tic-Tac-Toe")]
#[command(version)]
pub struct GameCli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

impl GameCli {
    pub fn run(self) -> Result<()> {
        self.global.init_tracing();

        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout().lock(), self.global.palette());
        let mut session = GameSession::new();
        run_game(&mut session, &mut console)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    Yes,
    No,
}

fn parse_replay(token: &str) -> Option<Replay> {
    match token.to_lowercase().as_str() {
        "y" | "yes" => Some(Replay::Yes),
        "n" | "no" => Some(Replay::No),
        _ => None,
    }
}

/// Draw the grid; empty cells show their position label.
pub fn render_board(board: &Board, palette: Palette) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let position = (row * BOARD_SIZE + col + 1) as Position;
                match board.cell(position) {
                    Some(mark) => palette.mark(mark),
                    None => palette.muted(position),
                }
            })
            .map(|cell| format!(" {} ", cell))
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < BOARD_SIZE - 1 {
            out.push_str("---|---|---\n");
        }
    }
    out
}

/// Play rounds until a player declines a rematch or input runs out.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    let palette = console.palette();
    console.say(palette.header("Welcome to Tic-Tac-Toe!"))?;
    console.say("Players take turns marking a cell; enter its number (1-9).")?;
    console.say("Three in a row, column or diagonal wins.")?;

    loop {
        show_board(session.board(), console)?;

        if !play_round(session, console)? {
            return Ok(());
        }
        if let Some(summary) = session.summary() {
            announce(&summary, session, console)?;
        }

        match ask_replay(console)? {
            Some(Replay::Yes) => session.new_round(),
            Some(Replay::No) => {
                console.say("Thanks for playing!")?;
                return Ok(());
            }
            None => return Ok(()),
        }
    }
}

fn show_board<R: BufRead, W: Write>(board: &Board, console: &mut Console<R, W>) -> Result<()> {
    let rendered = render_board(board, console.palette());
    console.blank()?;
    console.prompt(rendered)?;
    console.blank()
}

/// Take turns until the round ends. Returns `false` if input ended first.
fn play_round<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> Result<bool> {
    let palette = console.palette();
    while !session.board().status().is_over() {
        let mark = session.board().current_player();
        console.prompt(format!(
            "Player {}, enter your move (1-9): ",
            palette.mark(mark)
        ))?;

        let position = match console.read_value("a position (1-9)", parse_integer)? {
            Input::Value(position) => position,
            Input::Malformed(err) => {
                console.report(&err)?;
                continue;
            }
            Input::Closed => return Ok(false),
        };

        match session.play(position) {
            Ok(_) => show_board(session.board(), console)?,
            Err(err) => {
                console.report(&err)?;
                console.say("Try again.")?;
            }
        }
    }
    Ok(true)
}

fn announce<R: BufRead, W: Write>(
    summary: &RoundSummary,
    session: &GameSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    let palette = console.palette();
    match summary.status {
        GameStatus::Won(mark) => {
            console.say(palette.success(format!("Player {} wins!", palette.mark(mark))))?
        }
        GameStatus::Tied => console.say(palette.header("It's a tie!"))?,
        GameStatus::InProgress => {}
    }

    let history: Vec<String> = summary.history.iter().map(u8::to_string).collect();
    console.say(format!("Round {} stats", summary.round))?;
    console.say(format!("  Total moves:  {}", summary.total_moves))?;
    console.say(format!("  Move history: {}", history.join(" -> ")))?;

    let score = session.scoreboard();
    console.say(format!("Rounds played: {}", score.rounds()))?;
    console.say(format!(
        "Score: X {} | O {} | Ties {}",
        score.x_wins, score.o_wins, score.ties
    ))
}

fn ask_replay<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Replay>> {
    loop {
        console.prompt("Play again? (y/n): ")?;
        match console.read_value("y or n", parse_replay)? {
            Input::Value(answer) => return Ok(Some(answer)),
            Input::Malformed(err) => console.report(&err)?,
            Input::Closed => return Ok(None),
        }
    }
}
