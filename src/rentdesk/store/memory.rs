use super::customers::CustomerRegistry;
use super::fleet::Fleet;
use super::ledger::RentalLedger;
use super::DataStore;

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    fleet: Fleet,
    customers: CustomerRegistry,
    ledger: RentalLedger,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    fn customers_mut(&mut self) -> &mut CustomerRegistry {
        &mut self.customers
    }

    fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut RentalLedger {
        &mut self.ledger
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::default_fleet;
    use crate::model::{Car, CarKey, CustomerKey, Rental};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// C001 Toyota Camry, C002 Honda Accord, C003 Mahindra Thar.
        pub fn with_seed_fleet(mut self) -> Self {
            self.store
                .seed(default_fleet().into_iter().map(|spec| spec.into_car()));
            self
        }

        pub fn with_car(mut self, id: &str, brand: &str, model: &str, price: f64) -> Self {
            self.store.fleet_mut().add_car(Car::new(id, brand, model, price));
            self
        }

        pub fn with_customer(mut self, name: &str) -> Self {
            self.store.customers_mut().create(name);
            self
        }

        /// Rents the first available car with `car_id` to a fresh customer, bypassing
        /// the rent command.
        pub fn with_rented_car(mut self, car_id: &str, customer: &str, days: i32) -> Self {
            let car = self
                .store
                .fleet()
                .find_available_by_id(car_id)
                .expect("fixture car must exist and be available");
            self.store.fleet_mut().get_mut(car).unwrap().check_out();
            let customer = self.store.customers_mut().create(customer);
            self.store.ledger_mut().open(Rental::new(car, customer, days));
            self
        }

        pub fn car_key(&self, index: usize) -> CarKey {
            CarKey(index)
        }

        pub fn customer_key(&self, index: usize) -> CustomerKey {
            CustomerKey(index)
        }
    }
}
