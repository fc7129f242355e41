use crate::domain::entities::Address;
use crate::domain::errors::StoreError;
use crate::ports::outbound::AccountStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory account book mapping addresses to public keys
pub struct InMemoryAccountStore {
    keys: RwLock<HashMap<Address, Vec<u8>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(HashMap::new()),
        }
    }

    pub fn register(&self, address: Address, public_key: Vec<u8>) -> Result<(), StoreError> {
        let mut keys = self.keys.write().map_err(|_| StoreError::LockPoisoned)?;
        keys.insert(address, public_key);
        Ok(())
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn public_key(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError> {
        let keys = self.keys.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(keys.get(address).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let store = InMemoryAccountStore::new();
        let alice = Address::from("noble1alice");

        assert_eq!(store.public_key(&alice).unwrap(), None);

        store.register(alice.clone(), vec![2; 33]).unwrap();
        assert_eq!(store.public_key(&alice).unwrap(), Some(vec![2; 33]));
    }
}
