use crate::commands::{CmdMessage, CmdResult, FleetEntry, Outcome};
use crate::error::Result;
use crate::model::CarKey;
use crate::store::DataStore;
use tracing::{debug, info, warn};

pub const RETURNED_MESSAGE: &str = "Car returned successfully.";
pub const NOT_RENTED_MESSAGE: &str = "Car was not rented.";
pub const NO_MATCH_MESSAGE: &str = "Invalid car ID or car is not rented.";

/// Finds the first rented car with `car_id`. The match, if any, is the single entry
/// of `listed_cars`; otherwise the outcome is [`Outcome::NoMatch`].
pub fn locate<S: DataStore>(store: &S, car_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.fleet().find_rented_by_id(car_id) {
        Some(key) => {
            let car = store.fleet().get(key)?.clone();
            Ok(result.with_listed_cars(vec![FleetEntry { key, car }]))
        }
        None => {
            debug!(car = %car_id, "no rented car matches");
            result.add_message(CmdMessage::error(NO_MATCH_MESSAGE));
            Ok(result.with_outcome(Outcome::NoMatch))
        }
    }
}

/// Checks `car` back in and closes its first open rental.
///
/// The car is marked available before the ledger is searched, so a car with no
/// rental still ends up available and the outcome is [`Outcome::NotRented`].
pub fn run<S: DataStore>(store: &mut S, car: CarKey) -> Result<CmdResult> {
    let entry = store.fleet_mut().get_mut(car)?;
    let previous = entry.check_in();
    let snapshot = entry.clone();

    let mut result = CmdResult::default();
    result.affected_cars.push(FleetEntry {
        key: car,
        car: snapshot.clone(),
    });

    match store.ledger_mut().close_first_for(car) {
        Some(rental) => {
            info!(car = %snapshot.id(), days = rental.days, "car returned");
            result.rental = Some(rental);
            result.add_message(CmdMessage::success(RETURNED_MESSAGE));
            Ok(result.with_outcome(Outcome::Returned))
        }
        None => {
            warn!(
                car = %snapshot.id(),
                previous = ?previous,
                "return without an open rental, car marked available anyway"
            );
            result.add_message(CmdMessage::warning(NOT_RENTED_MESSAGE));
            Ok(result.with_outcome(Outcome::NotRented))
        }
    }
}
