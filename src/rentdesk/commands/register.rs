use crate::commands::{CmdResult, CustomerEntry};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

/// Registers a walk-in customer. Always succeeds, even if the rental that follows
/// is never confirmed.
pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let key = store.customers_mut().create(name);
    let customer = store.customers().get(key)?.clone();
    debug!(customer = %customer.id, name = %customer.name, "customer registered");

    Ok(CmdResult::default().with_customer(CustomerEntry { key, customer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store, "Alice").unwrap().customer.unwrap();
        let second = run(&mut store, "Bob").unwrap().customer.unwrap();

        assert_eq!(first.customer.id, "CUS1");
        assert_eq!(first.customer.name, "Alice");
        assert_eq!(second.customer.id, "CUS2");
        assert_eq!(store.customers().len(), 2);
    }
}
