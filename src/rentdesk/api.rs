//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for desk operations, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does no
//! business logic, no I/O and no formatting: unavailable cars and unmatched ids come
//! back as an [`Outcome`] plus messages, not as errors.
//!
//! `DeskApi<S: DataStore>` is generic over the storage backend so tests can hand
//! it a pre-populated `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::model::{CarKey, CustomerKey};
use crate::store::DataStore;

/// The main API facade for rental desk operations.
pub struct DeskApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> DeskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn available_cars(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn register_customer(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::register::run(&mut self.store, name)
    }

    pub fn quote(
        &self,
        customer: CustomerKey,
        car_id: &str,
        days: i32,
    ) -> Result<commands::CmdResult> {
        commands::quote::run(&self.store, customer, car_id, days)
    }

    pub fn rent(
        &mut self,
        car: CarKey,
        customer: CustomerKey,
        days: i32,
    ) -> Result<commands::CmdResult> {
        commands::rent::run(&mut self.store, car, customer, days)
    }

    pub fn locate_rented(&self, car_id: &str) -> Result<commands::CmdResult> {
        commands::returns::locate(&self.store, car_id)
    }

    pub fn return_car(&mut self, car: CarKey) -> Result<commands::CmdResult> {
        commands::returns::run(&mut self.store, car)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{
    CmdMessage, CmdResult, CustomerEntry, FleetEntry, MessageLevel, Outcome, Quote,
};
