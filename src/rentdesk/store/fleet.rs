use crate::error::{DeskError, Result};
use crate::model::{Availability, Car, CarKey};

/// The car registry. Cars keep their insertion (seed) order and are never removed,
/// so a `CarKey` stays valid for the whole session.
#[derive(Debug, Default, Clone)]
pub struct Fleet {
    cars: Vec<Car>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a car. Duplicate ids are the caller's problem.
    pub fn add_car(&mut self, car: Car) -> CarKey {
        self.cars.push(car);
        CarKey(self.cars.len() - 1)
    }

    pub fn get(&self, key: CarKey) -> Result<&Car> {
        self.cars.get(key.0).ok_or(DeskError::UnknownCar(key))
    }

    pub fn get_mut(&mut self, key: CarKey) -> Result<&mut Car> {
        self.cars.get_mut(key.0).ok_or(DeskError::UnknownCar(key))
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// All cars in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CarKey, &Car)> + Clone {
        self.cars.iter().enumerate().map(|(i, car)| (CarKey(i), car))
    }

    /// Currently available cars in insertion order. Calling again (or cloning the
    /// iterator) restarts the walk.
    pub fn available(&self) -> impl Iterator<Item = (CarKey, &Car)> + Clone {
        self.iter().filter(|(_, car)| car.is_available())
    }

    /// First available car with the given id.
    pub fn find_available_by_id(&self, id: &str) -> Option<CarKey> {
        self.find_by_id_in_state(id, Availability::Available)
    }

    /// First rented car with the given id.
    pub fn find_rented_by_id(&self, id: &str) -> Option<CarKey> {
        self.find_by_id_in_state(id, Availability::Rented)
    }

    fn find_by_id_in_state(&self, id: &str, state: Availability) -> Option<CarKey> {
        self.iter()
            .find(|(_, car)| car.id() == id && car.availability() == state)
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Fleet {
        let mut fleet = Fleet::new();
        fleet.add_car(Car::new("C001", "Toyota", "Camry", 60.0));
        fleet.add_car(Car::new("C002", "Honda", "Accord", 70.0));
        fleet.add_car(Car::new("C003", "Mahindra", "Thar", 150.0));
        fleet
    }

    #[test]
    fn keys_follow_insertion_order() {
        let fleet = seeded();
        let ids: Vec<_> = fleet.iter().map(|(_, c)| c.id().to_string()).collect();
        assert_eq!(ids, ["C001", "C002", "C003"]);
        assert_eq!(fleet.get(CarKey(2)).unwrap().model(), "Thar");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let fleet = seeded();
        assert!(matches!(
            fleet.get(CarKey(9)),
            Err(DeskError::UnknownCar(CarKey(9)))
        ));
    }

    #[test]
    fn find_available_skips_rented_cars() {
        let mut fleet = seeded();
        let key = fleet.find_available_by_id("C002").unwrap();
        fleet.get_mut(key).unwrap().check_out();

        assert_eq!(fleet.find_available_by_id("C002"), None);
        assert_eq!(fleet.find_rented_by_id("C002"), Some(key));
        assert_eq!(fleet.find_rented_by_id("C001"), None);
        assert_eq!(fleet.find_available_by_id("C999"), None);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let mut fleet = seeded();
        let dup = fleet.add_car(Car::new("C001", "Ford", "Focus", 40.0));
        assert_eq!(fleet.find_available_by_id("C001"), Some(CarKey(0)));

        fleet.get_mut(CarKey(0)).unwrap().check_out();
        assert_eq!(fleet.find_available_by_id("C001"), Some(dup));
    }

    #[test]
    fn available_listing_is_restartable() {
        let mut fleet = seeded();
        fleet.get_mut(CarKey(1)).unwrap().check_out();

        let listing = fleet.available();
        let first: Vec<_> = listing.clone().map(|(_, c)| c.id()).collect();
        let second: Vec<_> = listing.map(|(_, c)| c.id()).collect();
        assert_eq!(first, ["C001", "C003"]);
        assert_eq!(first, second);
    }
}
