use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a car in the fleet. Stable for the life of the session since
/// cars are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarKey(pub(crate) usize);

/// Position of a customer in the customer registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerKey(pub(crate) usize);

impl fmt::Display for CarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "car#{}", self.0)
    }
}

impl fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Rented,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    id: String,
    brand: String,
    model: String,
    base_price_per_day: f64,
    availability: Availability,
}

impl Car {
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price_per_day: f64,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            base_price_per_day,
            availability: Availability::Available,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_price_per_day(&self) -> f64 {
        self.base_price_per_day
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// "Brand Model", as shown in listings and rental summaries.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Total price for `days` days. Zero and negative durations are not rejected.
    pub fn price_for(&self, days: i32) -> f64 {
        self.base_price_per_day * f64::from(days)
    }

    /// Moves the car from `Available` to `Rented`.
    ///
    /// Returns `false` and leaves the car untouched if it is already rented.
    pub fn check_out(&mut self) -> bool {
        match self.availability {
            Availability::Available => {
                self.availability = Availability::Rented;
                true
            }
            Availability::Rented => false,
        }
    }

    /// Marks the car available regardless of its current state, returning the
    /// state it was in before.
    pub fn check_in(&mut self) -> Availability {
        std::mem::replace(&mut self.availability, Availability::Available)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

impl Customer {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

/// An active rental. Links into the fleet and customer registry by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub car: CarKey,
    pub customer: CustomerKey,
    pub days: i32,
    pub started_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(car: CarKey, customer: CustomerKey, days: i32) -> Self {
        Self {
            car,
            customer,
            days,
            started_at: Utc::now(),
        }
    }
}
