//! # Genesis State
//!
//! Full snapshot of the authority's tables, used to bootstrap a fresh store
//! and to export the committed state.

use super::entities::{AccountEntry, Address, AllowanceEntry, Amount, Denom};
use super::errors::AuthorityError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::collections::BTreeMap;

/// Default cap for `ueure`: 3,000,000 EURe in micro-units.
pub const DEFAULT_MAX_MINT_ALLOWANCE: Amount = 3_000_000_000_000;

/// Deny-list section of the genesis state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenylistGenesis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_owner: Option<Address>,
    #[serde(default)]
    pub admins: Vec<Address>,
    #[serde(default)]
    pub adversaries: Vec<Address>,
}

/// Complete authority state.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub denylist: DenylistGenesis,
    #[serde(default)]
    pub allowed_denoms: Vec<Denom>,
    #[serde(default)]
    pub owners: BTreeMap<Denom, Address>,
    #[serde(default)]
    pub pending_owners: BTreeMap<Denom, Address>,
    #[serde(default)]
    pub systems: Vec<AccountEntry>,
    #[serde(default)]
    pub admins: Vec<AccountEntry>,
    #[serde(default)]
    pub mint_allowances: Vec<AllowanceEntry>,
    #[serde_as(as = "BTreeMap<_, DisplayFromStr>")]
    #[serde(default)]
    pub max_mint_allowances: BTreeMap<Denom, Amount>,
}

impl Default for GenesisState {
    fn default() -> Self {
        let ueure = Denom::from("ueure");
        Self {
            denylist: DenylistGenesis::default(),
            allowed_denoms: vec![ueure.clone()],
            owners: BTreeMap::new(),
            pending_owners: BTreeMap::new(),
            systems: Vec::new(),
            admins: Vec::new(),
            mint_allowances: Vec::new(),
            max_mint_allowances: BTreeMap::from([(ueure, DEFAULT_MAX_MINT_ALLOWANCE)]),
        }
    }
}

impl DenylistGenesis {
    pub fn validate(&self, prefix: &str) -> Result<(), AuthorityError> {
        if let Some(owner) = &self.owner {
            check_address(prefix, "deny-list owner", owner)?;
        }
        if let Some(pending) = &self.pending_owner {
            check_address(prefix, "pending deny-list owner", pending)?;
        }
        for admin in &self.admins {
            check_address(prefix, "deny-list admin", admin)?;
        }
        for adversary in &self.adversaries {
            check_address(prefix, "adversary", adversary)?;
        }
        Ok(())
    }
}

impl GenesisState {
    /// Reject malformed addresses and entries for denoms that are not allowed.
    pub fn validate(&self, prefix: &str) -> Result<(), AuthorityError> {
        self.denylist.validate(prefix)?;

        if let Some(bad) = self.allowed_denoms.iter().find(|d| !d.is_well_formed()) {
            return Err(AuthorityError::InvalidDenom(bad.to_string()));
        }

        for (denom, owner) in &self.owners {
            self.check_allowed("owner", denom)?;
            check_address(prefix, "owner", owner)?;
        }
        for (denom, pending) in &self.pending_owners {
            self.check_allowed("pending owner", denom)?;
            check_address(prefix, "pending owner", pending)?;
        }
        for entry in &self.systems {
            self.check_allowed("system account", &entry.denom)?;
            check_address(prefix, "system", &entry.address)?;
        }
        for entry in &self.admins {
            self.check_allowed("admin account", &entry.denom)?;
            check_address(prefix, "admin", &entry.address)?;
        }
        for entry in &self.mint_allowances {
            self.check_allowed("mint allowance", &entry.denom)?;
            check_address(prefix, "minter", &entry.address)?;
        }
        for denom in self.max_mint_allowances.keys() {
            self.check_allowed("max mint allowance", denom)?;
        }

        Ok(())
    }

    fn check_allowed(&self, what: &str, denom: &Denom) -> Result<(), AuthorityError> {
        if self.allowed_denoms.contains(denom) {
            Ok(())
        } else {
            Err(AuthorityError::InvalidGenesis(format!(
                "found a {} for a not allowed denom {}",
                what, denom
            )))
        }
    }
}

fn check_address(prefix: &str, what: &str, address: &Address) -> Result<(), AuthorityError> {
    address.to_raw(prefix).map(|_| ()).map_err(|e| {
        AuthorityError::InvalidGenesis(format!("invalid {} address ({}): {}", what, address, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MAX_DENOM_LEN;

    fn address(seed: u8) -> Address {
        Address::from_raw("noble", &[seed; 20]).unwrap()
    }

    #[test]
    fn test_default_is_valid() {
        let genesis = GenesisState::default();

        assert!(genesis.validate("noble").is_ok());
        assert_eq!(
            genesis.max_mint_allowances.get(&Denom::from("ueure")),
            Some(&3_000_000_000_000)
        );
    }

    #[test]
    fn test_owner_for_unknown_denom_rejected() {
        let mut genesis = GenesisState::default();
        genesis.owners.insert("ugbpe".into(), address(1));

        assert!(matches!(
            genesis.validate("noble"),
            Err(AuthorityError::InvalidGenesis(_))
        ));
    }

    #[test]
    fn test_overlong_denom_rejected() {
        let mut genesis = GenesisState::default();
        genesis
            .allowed_denoms
            .push(Denom::new("x".repeat(MAX_DENOM_LEN + 1)));

        assert!(matches!(
            genesis.validate("noble"),
            Err(AuthorityError::InvalidDenom(_))
        ));
    }

    #[test]
    fn test_malformed_adversary_rejected() {
        let mut genesis = GenesisState::default();
        genesis.denylist.adversaries.push("noble1notbech32".into());

        assert!(genesis.validate("noble").is_err());
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let mut genesis = GenesisState::default();
        genesis.admins.push(AccountEntry {
            denom: "ueure".into(),
            address: Address::from_raw("cosmos", &[7; 20]).unwrap(),
        });

        assert!(genesis.validate("noble").is_err());
    }

    #[test]
    fn test_json_amounts_are_strings() {
        let json = serde_json::to_value(GenesisState::default()).unwrap();

        assert_eq!(json["max_mint_allowances"]["ueure"], "3000000000000");

        let parsed: GenesisState = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, GenesisState::default());
    }
}
