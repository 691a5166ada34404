use crate::commands::{CmdMessage, CmdResult, CustomerEntry, FleetEntry, Outcome, Quote};
use crate::error::Result;
use crate::model::CustomerKey;
use crate::store::DataStore;
use tracing::debug;

pub const NO_MATCH_MESSAGE: &str = "Invalid car selection or car not available for rent.";

/// Prices a rental of the first available car with `car_id` for `days` days.
///
/// Nothing is mutated. When no available car matches, the outcome is
/// [`Outcome::NoMatch`] and no quote is attached.
pub fn run<S: DataStore>(
    store: &S,
    customer: CustomerKey,
    car_id: &str,
    days: i32,
) -> Result<CmdResult> {
    let customer = CustomerEntry {
        key: customer,
        customer: store.customers().get(customer)?.clone(),
    };

    let Some(key) = store.fleet().find_available_by_id(car_id) else {
        debug!(car = %car_id, "no available car matches");
        let mut result = CmdResult::default()
            .with_customer(customer)
            .with_outcome(Outcome::NoMatch);
        result.add_message(CmdMessage::error(NO_MATCH_MESSAGE));
        return Ok(result);
    };

    let car = store.fleet().get(key)?.clone();
    let total = car.price_for(days);
    debug!(car = %car.id(), days, total, "rental quoted");

    let quote = Quote {
        customer: customer.clone(),
        car: FleetEntry { key, car },
        days,
        total,
    };
    Ok(CmdResult::default().with_customer(customer).with_quote(quote))
}
