//! # Storage Layer
//!
//! The desk keeps three registries: the [`fleet::Fleet`] of cars, the
//! [`customers::CustomerRegistry`] and the [`ledger::RentalLedger`] of active rentals.
//! Commands reach them through the [`DataStore`] trait so the business logic does not
//! care who owns them.
//!
//! ## Ownership
//!
//! Every record is owned by exactly one registry. Rentals refer to cars and customers
//! by key ([`CarKey`](crate::model::CarKey), [`CustomerKey`](crate::model::CustomerKey)),
//! which are resolved through the owning registry when needed. Cars and customers are
//! never removed, so keys cannot dangle.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. State lives for one session and is
//!   discarded at exit.

use crate::model::Car;

pub mod customers;
pub mod fleet;
pub mod ledger;
pub mod memory;

use customers::CustomerRegistry;
use fleet::Fleet;
use ledger::RentalLedger;

/// Access to the desk's registries.
pub trait DataStore {
    fn fleet(&self) -> &Fleet;

    fn fleet_mut(&mut self) -> &mut Fleet;

    fn customers(&self) -> &CustomerRegistry;

    fn customers_mut(&mut self) -> &mut CustomerRegistry;

    fn ledger(&self) -> &RentalLedger;

    fn ledger_mut(&mut self) -> &mut RentalLedger;

    /// Seed the fleet, in order.
    fn seed<I: IntoIterator<Item = Car>>(&mut self, cars: I)
    where
        Self: Sized,
    {
        let fleet = self.fleet_mut();
        for car in cars {
            fleet.add_car(car);
        }
    }
}
