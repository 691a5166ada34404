//! # Rentdesk Architecture
//!
//! Rentdesk is the bookkeeping core of a single-location car rental desk: which cars
//! are out, who has them, and what a rental costs. It is a library that happens to
//! have an interactive CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, colored output                       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Rent, return, quote, listing, customer registration      │
//! │  - Reports outcomes, never fails for domain reasons         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! │  - Fleet, CustomerRegistry, RentalLedger                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Car Lifecycle
//!
//! A car is either `Available` or `Rented` ([`model::Availability`]). Renting is
//! guarded: a rented car cannot be rented again and the attempt changes nothing.
//! Returning is not guarded: the car becomes available even when the ledger has no
//! rental for it, and the caller is told the car "was not rented".
//!
//! Customers are registered on every rental attempt, confirmed or not, and their ids
//! (`CUS1`, `CUS2`, ...) are never reused.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each desk operation
//! - [`store`]: Registries and the storage trait
//! - [`model`]: Core data types (`Car`, `Customer`, `Rental`, keys)
//! - [`config`]: Fleet and currency configuration
//! - [`init`]: Builds a seeded desk from configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
