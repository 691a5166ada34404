use colored::Colorize;
use rentdesk::api::{CmdMessage, FleetEntry, MessageLevel, Quote};
use rentdesk::config::DeskConfig;
use std::io::{self, Write};

pub const MENU_TITLE: &str = "===== Car Rental System =====";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid option.";
pub const INVALID_DAYS: &str = "Invalid number of days.";
pub const RENTAL_CANCELED: &str = "Rental canceled.";
pub const FAREWELL: &str = "Thank you for using the Car Rental System!";

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MENU_TITLE.bold())?;
    writeln!(out, "1. Rent a Car")?;
    writeln!(out, "2. Return a Car")?;
    writeln!(out, "3. Exit")
}

pub(super) fn print_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("== {} ==", title).bold())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One line per car: `C001 - Toyota Camry`.
pub(super) fn print_available_cars<W: Write>(out: &mut W, cars: &[FleetEntry]) -> io::Result<()> {
    writeln!(out, "\nAvailable Cars:")?;
    for entry in cars {
        writeln!(
            out,
            "{} - {}",
            entry.car.id().cyan(),
            entry.car.display_name()
        )?;
    }
    Ok(())
}

pub(super) fn print_quote<W: Write>(
    out: &mut W,
    quote: &Quote,
    config: &DeskConfig,
) -> io::Result<()> {
    print_heading(out, "Rental Information")?;
    writeln!(out, "Customer ID: {}", quote.customer.customer.id)?;
    writeln!(out, "Customer Name: {}", quote.customer.customer.name)?;
    writeln!(out, "Car: {}", quote.car.car.display_name())?;
    writeln!(out, "Rental Days: {}", quote.days)?;
    writeln!(
        out,
        "Total Price: {}",
        config.format_price(quote.total).bold()
    )
}

pub(super) fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", FAREWELL)
}
