use crate::error::{DeskError, Result};
use crate::model::Car;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A car as described in the config file. Every seeded car starts available.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarSpec {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
}

impl CarSpec {
    pub fn new(id: &str, brand: &str, model: &str, price_per_day: f64) -> Self {
        Self {
            id: id.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            price_per_day,
        }
    }

    pub fn into_car(self) -> Car {
        Car::new(self.id, self.brand, self.model, self.price_per_day)
    }
}

/// Desk configuration, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskConfig {
    /// Prefix for rendered prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Cars seeded at startup, in listing order
    #[serde(default = "default_fleet")]
    pub fleet: Vec<CarSpec>,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

pub fn default_fleet() -> Vec<CarSpec> {
    vec![
        CarSpec::new("C001", "Toyota", "Camry", 60.0),
        CarSpec::new("C002", "Honda", "Accord", 70.0),
        CarSpec::new("C003", "Mahindra", "Thar", 150.0),
    ]
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            fleet: default_fleet(),
        }
    }
}

impl DeskConfig {
    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(DeskError::Io)?;
        let config: DeskConfig =
            serde_json::from_str(&content).map_err(DeskError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(DeskError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(DeskError::Serialization)?;
        fs::write(path, content).map_err(DeskError::Io)?;
        Ok(())
    }

    /// Formats a price with two decimals, e.g. `$180.00`.
    pub fn format_price(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    fn validate(&self) -> Result<()> {
        if let Some(car) = self.fleet.iter().find(|c| c.price_per_day < 0.0) {
            return Err(DeskError::Config(format!(
                "car {} has a negative daily price",
                car.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.currency_symbol, "$");
        let ids: Vec<_> = config.fleet.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["C001", "C002", "C003"]);
        assert_eq!(config.fleet[2].price_per_day, 150.0);
    }

    #[test]
    fn test_format_price() {
        let config = DeskConfig::default();
        assert_eq!(config.format_price(180.0), "$180.00");
        assert_eq!(config.format_price(0.5), "$0.50");
        assert_eq!(config.format_price(-60.0), "$-60.00");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = DeskConfig::load(dir.path().join("missing.json")).unwrap();
        assert_eq!(config, DeskConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("desk.json");

        let config = DeskConfig {
            currency_symbol: "€".to_string(),
            fleet: vec![CarSpec::new("X1", "Fiat", "Panda", 25.5)],
        };
        config.save(&path).unwrap();

        let loaded = DeskConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desk.json");
        fs::write(&path, r#"{ "currency_symbol": "£" }"#).unwrap();

        let loaded = DeskConfig::load(&path).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.fleet, default_fleet());
    }

    #[test]
    fn test_negative_price_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desk.json");
        fs::write(
            &path,
            r#"{ "fleet": [{ "id": "B1", "brand": "Bad", "model": "Car", "price_per_day": -1.0 }] }"#,
        )
        .unwrap();

        assert!(matches!(
            DeskConfig::load(&path),
            Err(DeskError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desk.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            DeskConfig::load(&path),
            Err(DeskError::Serialization(_))
        ));
    }
}
