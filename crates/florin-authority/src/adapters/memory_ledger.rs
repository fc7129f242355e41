//! In-memory multi-asset ledger.
//!
//! Tracks balances per holder and supply per denom. Every send, including
//! those into and out of module accounts, consults the installed
//! [`SendRestriction`] before any balance moves. Module accounts appear to
//! the restriction under their derived address.

use crate::domain::entities::{Address, Amount, Coin, Coins, Denom};
use crate::domain::errors::LedgerError;
use crate::ports::inbound::SendRestriction;
use crate::ports::outbound::Ledger;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Holder {
    Account(Address),
    Module(String),
}

impl Holder {
    fn describe(&self) -> String {
        match self {
            Holder::Account(address) => address.to_string(),
            Holder::Module(name) => format!("module {}", name),
        }
    }
}

#[derive(Default)]
struct LedgerState {
    balances: HashMap<(Holder, Denom), Amount>,
    supply: HashMap<Denom, Amount>,
}

impl LedgerState {
    fn balance(&self, holder: &Holder, denom: &Denom) -> Amount {
        self.balances
            .get(&(holder.clone(), denom.clone()))
            .copied()
            .unwrap_or(0)
    }

    fn set_balance(&mut self, holder: &Holder, denom: &Denom, amount: Amount) {
        let key = (holder.clone(), denom.clone());
        if amount == 0 {
            self.balances.remove(&key);
        } else {
            self.balances.insert(key, amount);
        }
    }

    /// Move coins, checking every denom before changing any balance.
    fn transfer(&mut self, from: &Holder, to: &Holder, coins: &Coins) -> Result<(), LedgerError> {
        for coin in coins.iter() {
            let available = self.balance(from, &coin.denom);
            if available < coin.amount {
                return Err(LedgerError::InsufficientFunds {
                    address: from.describe(),
                    denom: coin.denom.clone(),
                    required: coin.amount,
                    available,
                });
            }
            if from != to
                && self
                    .balance(to, &coin.denom)
                    .checked_add(coin.amount)
                    .is_none()
            {
                return Err(LedgerError::Overflow(coin.denom.clone()));
            }
        }

        if from == to {
            return Ok(());
        }

        for coin in coins.iter() {
            let debited = self.balance(from, &coin.denom) - coin.amount;
            self.set_balance(from, &coin.denom, debited);
            let credited = self.balance(to, &coin.denom) + coin.amount;
            self.set_balance(to, &coin.denom, credited);
        }
        Ok(())
    }

    fn issue(&mut self, to: &Holder, coins: &Coins) -> Result<(), LedgerError> {
        for coin in coins.iter() {
            let supply = self.supply.get(&coin.denom).copied().unwrap_or(0);
            if supply.checked_add(coin.amount).is_none() {
                return Err(LedgerError::Overflow(coin.denom.clone()));
            }
        }

        for coin in coins.iter() {
            *self.supply.entry(coin.denom.clone()).or_insert(0) += coin.amount;
            let credited = self.balance(to, &coin.denom) + coin.amount;
            self.set_balance(to, &coin.denom, credited);
        }
        Ok(())
    }
}

/// In-memory implementation of Ledger for testing
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
    restriction: RwLock<Option<Arc<dyn SendRestriction>>>,
    /// bech32 prefix of module account addresses
    prefix: String,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::with_prefix("noble")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            restriction: RwLock::new(None),
            prefix: prefix.into(),
        }
    }

    /// Install the hook consulted on every send.
    pub fn set_send_restriction(
        &self,
        restriction: Arc<dyn SendRestriction>,
    ) -> Result<(), LedgerError> {
        let mut slot = self
            .restriction
            .write()
            .map_err(|_| LedgerError::Unavailable("restriction lock poisoned".into()))?;
        *slot = Some(restriction);
        Ok(())
    }

    /// Credit an account with newly issued coins, bypassing module accounts.
    pub fn deposit(&self, to: &Address, coin: Coin) -> Result<(), LedgerError> {
        self.write()?
            .issue(&Holder::Account(to.clone()), &Coins::from(coin))
    }

    pub fn module_balance(&self, module: &str, denom: &Denom) -> Result<Amount, LedgerError> {
        Ok(self.read()?.balance(&Holder::Module(module.to_string()), denom))
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, LedgerState>, LedgerError> {
        self.state
            .read()
            .map_err(|_| LedgerError::Unavailable("ledger lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, LedgerState>, LedgerError> {
        self.state
            .write()
            .map_err(|_| LedgerError::Unavailable("ledger lock poisoned".into()))
    }

    fn module_address(&self, module: &str) -> Result<Address, LedgerError> {
        Address::for_module(&self.prefix, module)
            .map_err(|e| LedgerError::Unavailable(format!("module {}: {}", module, e)))
    }

    /// Runs the send restriction, if any. Called before the state lock is taken.
    fn restrict(&self, from: &Address, to: &Address, coins: &Coins) -> Result<Address, LedgerError> {
        let restriction = self
            .restriction
            .read()
            .map_err(|_| LedgerError::Unavailable("restriction lock poisoned".into()))?
            .clone();

        match restriction {
            Some(hook) => hook
                .check(from, to, coins)
                .map_err(|e| LedgerError::Restricted(e.to_string())),
            None => Ok(to.clone()),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for InMemoryLedger {
    fn mint(&self, module: &str, coins: &Coins) -> Result<(), LedgerError> {
        self.write()?
            .issue(&Holder::Module(module.to_string()), coins)
    }

    fn burn(&self, module: &str, coins: &Coins) -> Result<(), LedgerError> {
        let mut state = self.write()?;
        let holder = Holder::Module(module.to_string());

        for coin in coins.iter() {
            let available = state.balance(&holder, &coin.denom);
            if available < coin.amount {
                return Err(LedgerError::InsufficientFunds {
                    address: holder.describe(),
                    denom: coin.denom.clone(),
                    required: coin.amount,
                    available,
                });
            }
        }

        for coin in coins.iter() {
            let remaining = state.balance(&holder, &coin.denom) - coin.amount;
            state.set_balance(&holder, &coin.denom, remaining);
            if let Some(supply) = state.supply.get_mut(&coin.denom) {
                *supply = supply.saturating_sub(coin.amount);
            }
        }
        Ok(())
    }

    fn balance(&self, address: &Address, denom: &Denom) -> Result<Amount, LedgerError> {
        Ok(self.read()?.balance(&Holder::Account(address.clone()), denom))
    }

    fn supply(&self, denom: &Denom) -> Result<Amount, LedgerError> {
        Ok(self.read()?.supply.get(denom).copied().unwrap_or(0))
    }

    fn send(&self, from: &Address, to: &Address, coins: &Coins) -> Result<(), LedgerError> {
        let to = self.restrict(from, to, coins)?;
        self.write()?.transfer(
            &Holder::Account(from.clone()),
            &Holder::Account(to),
            coins,
        )
    }

    fn send_from_account_to_module(
        &self,
        from: &Address,
        module: &str,
        coins: &Coins,
    ) -> Result<(), LedgerError> {
        self.restrict(from, &self.module_address(module)?, coins)?;
        self.write()?.transfer(
            &Holder::Account(from.clone()),
            &Holder::Module(module.to_string()),
            coins,
        )
    }

    fn send_from_module_to_account(
        &self,
        module: &str,
        to: &Address,
        coins: &Coins,
    ) -> Result<(), LedgerError> {
        let to = self.restrict(&self.module_address(module)?, to, coins)?;
        self.write()?.transfer(
            &Holder::Module(module.to_string()),
            &Holder::Account(to),
            coins,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AuthorityError;

    struct BlockEveryone;

    impl SendRestriction for BlockEveryone {
        fn check(
            &self,
            from: &Address,
            _to: &Address,
            coins: &Coins,
        ) -> Result<Address, AuthorityError> {
            let denom = coins
                .iter()
                .next()
                .map(|c| c.denom.clone())
                .unwrap_or_else(|| Denom::from("none"));
            Err(AuthorityError::Blocked {
                from: from.clone(),
                denom,
            })
        }
    }

    #[test]
    fn test_mint_send_burn_cycle() {
        let ledger = InMemoryLedger::new();
        let alice = Address::from("alice");
        let denom = Denom::from("ueure");
        let coins = Coins::single("ueure", 100);

        ledger.mint("florin", &coins).unwrap();
        ledger.send_from_module_to_account("florin", &alice, &coins).unwrap();
        assert_eq!(ledger.balance(&alice, &denom).unwrap(), 100);
        assert_eq!(ledger.supply(&denom).unwrap(), 100);

        ledger.send_from_account_to_module(&alice, "florin", &coins).unwrap();
        ledger.burn("florin", &coins).unwrap();
        assert_eq!(ledger.balance(&alice, &denom).unwrap(), 0);
        assert_eq!(ledger.supply(&denom).unwrap(), 0);
    }

    #[test]
    fn test_insufficient_funds_moves_nothing() {
        let ledger = InMemoryLedger::new();
        let alice = Address::from("alice");
        let bob = Address::from("bob");
        ledger.deposit(&alice, Coin::new("ueure", 5)).unwrap();

        let result = ledger.send(&alice, &bob, &Coins::single("ueure", 6));

        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(ledger.balance(&alice, &"ueure".into()).unwrap(), 5);
        assert_eq!(ledger.balance(&bob, &"ueure".into()).unwrap(), 0);
    }

    #[test]
    fn test_restriction_applies_to_every_send() {
        let ledger = InMemoryLedger::new();
        let alice = Address::from("alice");
        let bob = Address::from("bob");
        let coins = Coins::single("ueure", 10);
        ledger.deposit(&alice, Coin::new("ueure", 10)).unwrap();
        ledger.set_send_restriction(Arc::new(BlockEveryone)).unwrap();

        assert!(matches!(
            ledger.send(&alice, &bob, &coins),
            Err(LedgerError::Restricted(_))
        ));
        assert!(matches!(
            ledger.send_from_account_to_module(&alice, "florin", &coins),
            Err(LedgerError::Restricted(_))
        ));

        ledger.mint("florin", &coins).unwrap();
        assert!(matches!(
            ledger.send_from_module_to_account("florin", &bob, &coins),
            Err(LedgerError::Restricted(_))
        ));
        assert_eq!(ledger.balance(&bob, &"ueure".into()).unwrap(), 0);
        assert_eq!(ledger.module_balance("florin", &"ueure".into()).unwrap(), 10);
    }

    struct RecordSenders(std::sync::Mutex<Vec<Address>>);

    impl SendRestriction for RecordSenders {
        fn check(
            &self,
            from: &Address,
            to: &Address,
            _coins: &Coins,
        ) -> Result<Address, AuthorityError> {
            self.0.lock().unwrap().push(from.clone());
            Ok(to.clone())
        }
    }

    #[test]
    fn test_module_sends_use_derived_address() {
        let ledger = InMemoryLedger::new();
        let recorder = Arc::new(RecordSenders(std::sync::Mutex::new(Vec::new())));
        ledger.set_send_restriction(recorder.clone()).unwrap();
        let coins = Coins::single("ueure", 3);

        ledger.mint("florin", &coins).unwrap();
        ledger
            .send_from_module_to_account("florin", &Address::from("alice"), &coins)
            .unwrap();

        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![Address::for_module("noble", "florin").unwrap()]
        );
    }
}
