//! # Interactive Session
//!
//! `run()` parses arguments, builds the desk and hands stdin/stdout to a [`Session`].
//! The session is generic over `BufRead`/`Write` so the whole menu loop can be driven
//! from a byte buffer in tests.
//!
//! Each menu action is one handler. Handlers only prompt, call `DeskApi` and print;
//! every decision about cars, customers and rentals is made behind the API.
//! End of input at any prompt ends the session the same way as choosing Exit.

use super::logging::init_logger;
use super::render::{
    print_available_cars, print_farewell, print_heading, print_menu, print_messages, print_quote,
    INVALID_CHOICE, INVALID_DAYS, RENTAL_CANCELED,
};
use super::setup::Cli;
use clap::Parser;
use colored::Colorize;
use rentdesk::api::CmdMessage;
use rentdesk::error::Result;
use rentdesk::init::{initialize_from, DeskContext};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let ctx = initialize_from(cli.config.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(ctx, stdin.lock(), stdout.lock()).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Rent,
    Return,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::Rent),
            2 => Some(MenuChoice::Return),
            3 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a handler.
enum Flow {
    Continue,
    EndOfInput,
}

pub struct Session<R, W> {
    ctx: DeskContext,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ctx: DeskContext, input: R, out: W) -> Self {
        Self { ctx, input, out }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            print_menu(&mut self.out)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Rent) => self.handle_rent()?,
                Some(MenuChoice::Return) => self.handle_return()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    debug!(input = %line, "unrecognized menu choice");
                    print_messages(&mut self.out, &[CmdMessage::error(INVALID_CHOICE)])?;
                    Flow::Continue
                }
            };

            if let Flow::EndOfInput = flow {
                break;
            }
        }

        print_farewell(&mut self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn handle_rent(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "Rent a Car")?;
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let listing = self.ctx.api.available_cars()?;
        print_available_cars(&mut self.out, &listing.listed_cars)?;
        print_messages(&mut self.out, &listing.messages)?;

        let Some(car_id) = self.prompt("\nEnter the car ID you want to rent: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(days_input) = self.prompt("Enter the number of days for rental: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Ok(days) = days_input.trim().parse::<i32>() else {
            print_messages(&mut self.out, &[CmdMessage::error(INVALID_DAYS)])?;
            return Ok(Flow::Continue);
        };

        // The customer is registered before we know whether a car matches.
        let customer = self.ctx.api.register_customer(&name)?;
        let Some(customer) = customer.customer else {
            return Ok(Flow::Continue);
        };

        let quoted = self.ctx.api.quote(customer.key, &car_id, days)?;
        let Some(quote) = quoted.quote else {
            writeln!(self.out)?;
            print_messages(&mut self.out, &quoted.messages)?;
            return Ok(Flow::Continue);
        };

        print_quote(&mut self.out, &quote, &self.ctx.config)?;
        let Some(confirm) = self.prompt("\nConfirm rental (Y/N): ")? else {
            return Ok(Flow::EndOfInput);
        };

        writeln!(self.out)?;
        if confirm == "Y" || confirm == "y" {
            let result = self
                .ctx
                .api
                .rent(quote.car.key, quote.customer.key, quote.days)?;
            print_messages(&mut self.out, &result.messages)?;
        } else {
            writeln!(self.out, "{}", RENTAL_CANCELED.yellow())?;
        }
        Ok(Flow::Continue)
    }

    fn handle_return(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "Return a Car")?;
        let Some(car_id) = self.prompt("Enter the car ID you want to return: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let located = self.ctx.api.locate_rented(&car_id)?;
        let Some(entry) = located.listed_cars.first() else {
            print_messages(&mut self.out, &located.messages)?;
            return Ok(Flow::Continue);
        };

        let result = self.ctx.api.return_car(entry.key)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    /// Prints `text` and reads one line without its line terminator.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(
            line.trim_end_matches(|c: char| c == '\n' || c == '\r')
                .to_string(),
        ))
    }
}
