use crate::commands::{CmdMessage, CmdResult, FleetEntry, Outcome};
use crate::error::Result;
use crate::model::{CarKey, CustomerKey, Rental};
use crate::store::DataStore;
use tracing::{info, warn};

pub const RENTED_MESSAGE: &str = "Car rented successfully.";
pub const UNAVAILABLE_MESSAGE: &str = "Car is not available for rent.";

/// Checks `car` out to `customer` for `days` days and opens a rental.
///
/// If the car is already rented nothing changes and the outcome is
/// [`Outcome::Unavailable`]. `days` is taken as given.
pub fn run<S: DataStore>(
    store: &mut S,
    car: CarKey,
    customer: CustomerKey,
    days: i32,
) -> Result<CmdResult> {
    // Resolve the customer first so a bad key cannot leave the car checked out.
    let customer_id = store.customers().get(customer)?.id.clone();
    let entry = store.fleet_mut().get_mut(car)?;
    let mut result = CmdResult::default();

    if !entry.check_out() {
        warn!(car = %entry.id(), customer = %customer_id, "rent refused, car is out");
        result.add_message(CmdMessage::error(UNAVAILABLE_MESSAGE));
        return Ok(result.with_outcome(Outcome::Unavailable));
    }

    let snapshot = entry.clone();
    let rental = Rental::new(car, customer, days);
    info!(
        car = %snapshot.id(),
        customer = %customer_id,
        days,
        started_at = %rental.started_at,
        "car rented"
    );
    store.ledger_mut().open(rental.clone());

    result.affected_cars.push(FleetEntry {
        key: car,
        car: snapshot,
    });
    result.rental = Some(rental);
    result.add_message(CmdMessage::success(RENTED_MESSAGE));
    Ok(result.with_outcome(Outcome::Rented))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;
    use crate::model::Availability;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn checks_out_and_opens_rental() {
        let mut fixture = StoreFixture::new().with_seed_fleet().with_customer("Alice");
        let car = fixture.car_key(0);
        let customer = fixture.customer_key(0);

        let result = run(&mut fixture.store, car, customer, 3).unwrap();
        assert_eq!(result.outcome, Some(Outcome::Rented));
        assert_eq!(result.messages[0].content, RENTED_MESSAGE);

        let store = &fixture.store;
        assert_eq!(
            store.fleet().get(car).unwrap().availability(),
            Availability::Rented
        );
        assert_eq!(store.ledger().len(), 1);
        let rental = store.ledger().find_by_car(car).unwrap();
        assert_eq!(rental.customer, customer);
        assert_eq!(rental.days, 3);
    }

    #[test]
    fn rented_car_is_refused_without_mutation() {
        let mut fixture = StoreFixture::new()
            .with_seed_fleet()
            .with_rented_car("C001", "Alice", 3)
            .with_customer("Bob");
        let car = fixture.car_key(0);
        let bob = fixture.customer_key(1);

        let result = run(&mut fixture.store, car, bob, 5).unwrap();
        assert_eq!(result.outcome, Some(Outcome::Unavailable));
        assert_eq!(result.messages[0].content, UNAVAILABLE_MESSAGE);
        assert!(result.rental.is_none());

        let store = &fixture.store;
        assert_eq!(store.ledger().len(), 1);
        assert_eq!(store.ledger().find_by_car(car).unwrap().days, 3);
        assert!(!store.fleet().get(car).unwrap().is_available());
    }

    #[test]
    fn days_are_not_validated() {
        let mut fixture = StoreFixture::new().with_seed_fleet().with_customer("Alice");
        let car = fixture.car_key(1);
        let customer = fixture.customer_key(0);

        let result = run(&mut fixture.store, car, customer, 0).unwrap();
        assert_eq!(result.outcome, Some(Outcome::Rented));
        assert_eq!(fixture.store.ledger().find_by_car(car).unwrap().days, 0);
    }

    #[test]
    fn unknown_customer_leaves_car_available() {
        let mut fixture = StoreFixture::new().with_seed_fleet();
        let car = fixture.car_key(0);
        let missing = fixture.customer_key(4);

        let err = run(&mut fixture.store, car, missing, 1).unwrap_err();
        assert!(matches!(err, DeskError::UnknownCustomer(_)));
        assert!(fixture.store.fleet().get(car).unwrap().is_available());
        assert!(fixture.store.ledger().is_empty());
    }
}
