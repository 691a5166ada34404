use crate::api::DeskApi;
use crate::config::DeskConfig;
use crate::error::Result;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use std::path::Path;
use tracing::debug;

pub struct DeskContext {
    pub api: DeskApi<InMemoryStore>,
    pub config: DeskConfig,
}

/// Builds a desk with the configured fleet seeded, all cars available.
pub fn initialize(config: DeskConfig) -> DeskContext {
    let mut store = InMemoryStore::new();
    store.seed(config.fleet.iter().cloned().map(|spec| spec.into_car()));
    debug!(cars = store.fleet().len(), "fleet seeded");

    DeskContext {
        api: DeskApi::new(store),
        config,
    }
}

/// Loads the config at `path` (defaults when `None` or missing) and initializes the desk.
pub fn initialize_from(path: Option<&Path>) -> Result<DeskContext> {
    let config = match path {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::default(),
    };
    Ok(initialize(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarSpec;

    #[test]
    fn default_context_has_seed_fleet() {
        let ctx = initialize_from(None).unwrap();
        let listed = ctx.api.available_cars().unwrap().listed_cars;
        let names: Vec<_> = listed
            .iter()
            .map(|e| format!("{} - {}", e.car.id(), e.car.display_name()))
            .collect();
        assert_eq!(
            names,
            [
                "C001 - Toyota Camry",
                "C002 - Honda Accord",
                "C003 - Mahindra Thar"
            ]
        );
    }

    #[test]
    fn configured_fleet_is_seeded_in_order() {
        let config = DeskConfig {
            fleet: vec![
                CarSpec::new("B2", "Kia", "Rio", 30.0),
                CarSpec::new("A1", "Fiat", "Uno", 20.0),
            ],
            ..DeskConfig::default()
        };
        let ctx = initialize(config);
        let ids: Vec<_> = ctx
            .api
            .store()
            .fleet()
            .iter()
            .map(|(_, c)| c.id().to_string())
            .collect();
        assert_eq!(ids, ["B2", "A1"]);
    }
}
