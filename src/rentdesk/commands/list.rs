use crate::commands::{CmdMessage, CmdResult, FleetEntry};
use crate::error::Result;
use crate::store::DataStore;

/// Lists the cars currently available, in fleet order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let cars: Vec<FleetEntry> = store
        .fleet()
        .available()
        .map(|(key, car)| FleetEntry {
            key,
            car: car.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if cars.is_empty() {
        result.add_message(CmdMessage::info("No cars available."));
    }
    Ok(result.with_listed_cars(cars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_only_available_cars_in_order() {
        let fixture = StoreFixture::new()
            .with_seed_fleet()
            .with_rented_car("C002", "Alice", 2);

        let result = run(&fixture.store).unwrap();
        let ids: Vec<_> = result.listed_cars.iter().map(|e| e.car.id()).collect();
        assert_eq!(ids, ["C001", "C003"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_fleet_reports_nothing_available() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.listed_cars.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
