use crate::model::{CarKey, Rental};

/// Active rentals in the order they were opened.
#[derive(Debug, Default, Clone)]
pub struct RentalLedger {
    rentals: Vec<Rental>,
}

impl RentalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// First rental for `car`, if any.
    pub fn find_by_car(&self, car: CarKey) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.car == car)
    }

    /// Removes and returns the first rental for `car`. Later entries for the same
    /// car are left in place.
    pub fn close_first_for(&mut self, car: CarKey) -> Option<Rental> {
        let pos = self.rentals.iter().position(|r| r.car == car)?;
        Some(self.rentals.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.iter()
    }
}
