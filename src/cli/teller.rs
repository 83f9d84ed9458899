use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::application::{AppError, OperationKind, Receipt, Teller};
use crate::domain::{format_cents, parse_cents};

use super::{parse_integer, Console, GlobalArgs, Input};

/// Teller - a single-account console bank
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "Deposit, withdraw and check the balance of a single account")]
#[command(version)]
pub struct TellerCli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

impl TellerCli {
    pub fn run(self) -> Result<()> {
        self.global.init_tracing();

        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout().lock(), self.global.palette());
        let mut teller = Teller::default();
        run_teller(&mut teller, &mut console)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    Balance,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Deposit),
            2 => Ok(MenuChoice::Withdraw),
            3 => Ok(MenuChoice::Balance),
            4 => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidMenuChoice(other)),
        }
    }
}

/// Serve the menu until the user picks exit or input runs out.
pub fn run_teller<R: BufRead, W: Write>(
    teller: &mut Teller,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        print_menu(console)?;
        console.prompt("Enter your choice: ")?;

        let choice = match console.read_value("a menu option (1-4)", parse_integer)? {
            Input::Value(value) => value,
            Input::Malformed(err) => {
                console.report(&err)?;
                continue;
            }
            Input::Closed => break,
        };

        let choice = match MenuChoice::try_from(choice) {
            Ok(choice) => choice,
            Err(err) => {
                console.report(&err)?;
                continue;
            }
        };

        match choice {
            MenuChoice::Deposit => {
                if !run_operation(teller, console, OperationKind::Deposit)? {
                    break;
                }
            }
            MenuChoice::Withdraw => {
                if !run_operation(teller, console, OperationKind::Withdrawal)? {
                    break;
                }
            }
            MenuChoice::Balance => print_balance(teller, console)?,
            MenuChoice::Exit => break,
        }
    }

    console.blank()?;
    console.say("Exiting program")
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let header = console.palette().header("Bank Management System");
    console.blank()?;
    console.say(header)?;
    console.say("  1. Deposit")?;
    console.say("  2. Withdraw")?;
    console.say("  3. Check balance")?;
    console.say("  4. Exit")
}

/// Ask for an amount until one parses, then apply it. Returns `false` if input ended.
fn run_operation<R: BufRead, W: Write>(
    teller: &mut Teller,
    console: &mut Console<R, W>,
    kind: OperationKind,
) -> Result<bool> {
    let prompt = match kind {
        OperationKind::Deposit => "Enter the amount to deposit: ₹",
        OperationKind::Withdrawal => "Enter the amount to withdraw: ₹",
    };

    let amount = loop {
        console.prompt(prompt)?;
        match console.read_value("an amount such as 50 or 50.25", |token| {
            parse_cents(token).ok()
        })? {
            Input::Value(amount) => break amount,
            Input::Malformed(err) => console.report(&err)?,
            Input::Closed => return Ok(false),
        }
    };

    let result = match kind {
        OperationKind::Deposit => teller.deposit(amount),
        OperationKind::Withdrawal => teller.withdraw(amount),
    };

    match result {
        Ok(receipt) => print_receipt(console, &receipt)?,
        Err(err) => console.report(&err)?,
    }
    Ok(true)
}

fn print_receipt<R: BufRead, W: Write>(console: &mut Console<R, W>, receipt: &Receipt) -> Result<()> {
    let palette = console.palette();
    let verb = match receipt.kind {
        OperationKind::Deposit => "Deposited",
        OperationKind::Withdrawal => "Withdrawn",
    };
    console.say(palette.success(format!("{}: ₹{}", verb, format_cents(receipt.amount))))?;
    console.say(format!("New balance: ₹{}", format_cents(receipt.balance)))?;
    console.say(palette.muted(format!("Date: {}", receipt.at.format("%Y-%m-%d %H:%M:%S"))))?;
    console.say("Thank you")
}

fn print_balance<R: BufRead, W: Write>(teller: &Teller, console: &mut Console<R, W>) -> Result<()> {
    let summary = teller.balance_inquiry();
    console.say(format!("Account number: {}", summary.number))?;
    console.say(format!("Account holder: {}", summary.holder))?;
    console.say(format!("Your balance is: ₹{}", format_cents(summary.balance)))
}
