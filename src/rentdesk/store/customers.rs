use crate::error::{DeskError, Result};
use crate::model::{Customer, CustomerKey};

const CUSTOMER_ID_PREFIX: &str = "CUS";

/// Append-only customer registry.
#[derive(Debug, Default, Clone)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer with the next sequential id (`CUS1`, `CUS2`, ...).
    /// Names are not deduplicated.
    pub fn create(&mut self, name: impl Into<String>) -> CustomerKey {
        let id = format!("{}{}", CUSTOMER_ID_PREFIX, self.customers.len() + 1);
        self.customers.push(Customer::new(id, name.into()));
        CustomerKey(self.customers.len() - 1)
    }

    pub fn get(&self, key: CustomerKey) -> Result<&Customer> {
        self.customers
            .get(key.0)
            .ok_or(DeskError::UnknownCustomer(key))
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }
}
