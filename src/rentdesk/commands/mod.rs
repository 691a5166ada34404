use crate::model::{Car, CarKey, Customer, CustomerKey, Rental};

pub mod list;
pub mod quote;
pub mod register;
pub mod rent;
pub mod returns;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a desk operation did. None of these are errors; they are the outcomes the
/// CLI renders as messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Car checked out and a rental opened.
    Rented,
    /// Rent attempted on a car that is already out. Nothing changed.
    Unavailable,
    /// Car checked in and its rental closed.
    Returned,
    /// Car checked in, but no rental was found for it.
    NotRented,
    /// No car matched the requested id in the required state.
    NoMatch,
}

/// A car together with its fleet key.
#[derive(Debug, Clone)]
pub struct FleetEntry {
    pub key: CarKey,
    pub car: Car,
}

/// A customer together with its registry key.
#[derive(Debug, Clone)]
pub struct CustomerEntry {
    pub key: CustomerKey,
    pub customer: Customer,
}

/// Priced rental proposal, shown to the customer before confirmation.
#[derive(Debug, Clone)]
pub struct Quote {
    pub customer: CustomerEntry,
    pub car: FleetEntry,
    pub days: i32,
    pub total: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_cars: Vec<FleetEntry>,
    pub affected_cars: Vec<FleetEntry>,
    pub customer: Option<CustomerEntry>,
    pub quote: Option<Quote>,
    pub rental: Option<Rental>,
    pub outcome: Option<Outcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cars(mut self, cars: Vec<FleetEntry>) -> Self {
        self.listed_cars = cars;
        self
    }

    pub fn with_customer(mut self, customer: CustomerEntry) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}
