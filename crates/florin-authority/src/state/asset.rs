//! Typed accessors for per-asset tables.

use super::StateTransaction;
use crate::domain::entities::{AccountEntry, Address, AllowanceEntry, Amount, Denom};
use crate::domain::errors::StoreError;
use crate::domain::keys::{
    account_key, decode_address, decode_amount, denom_key, denom_prefix, encode_amount,
    split_account_key, Table, PRESENT,
};
use crate::domain::ownership::Ownership;
use crate::ports::outbound::KvStore;
use std::collections::BTreeMap;

impl<S: KvStore + ?Sized> StateTransaction<'_, S> {
    // =========================================================================
    // REGISTRY
    // =========================================================================

    pub fn is_allowed_denom(&self, denom: &Denom) -> Result<bool, StoreError> {
        self.has(Table::AllowedDenoms, &denom_key(denom))
    }

    pub fn set_allowed_denom(&mut self, denom: &Denom) {
        self.put(Table::AllowedDenoms, denom_key(denom), PRESENT.to_vec());
    }

    pub fn allowed_denoms(&self) -> Result<Vec<Denom>, StoreError> {
        Ok(self
            .scan(Table::AllowedDenoms, &[])?
            .into_iter()
            .map(|(key, _)| Denom::from_utf8_lossy(&key))
            .collect())
    }

    // =========================================================================
    // OWNERSHIP
    // =========================================================================

    pub fn ownership(&self, denom: &Denom) -> Result<Ownership, StoreError> {
        Ok(Ownership {
            owner: self.address_at(Table::Owners, &denom_key(denom))?,
            pending_owner: self.address_at(Table::PendingOwners, &denom_key(denom))?,
        })
    }

    pub fn set_ownership(&mut self, denom: &Denom, ownership: &Ownership) {
        self.set_address_at(Table::Owners, denom_key(denom), ownership.owner.as_ref());
        self.set_address_at(
            Table::PendingOwners,
            denom_key(denom),
            ownership.pending_owner.as_ref(),
        );
    }

    pub fn owners(&self) -> Result<BTreeMap<Denom, Address>, StoreError> {
        self.addresses_by_denom(Table::Owners)
    }

    pub fn pending_owners(&self) -> Result<BTreeMap<Denom, Address>, StoreError> {
        self.addresses_by_denom(Table::PendingOwners)
    }

    // =========================================================================
    // ROLES
    // =========================================================================

    pub fn is_admin(&self, denom: &Denom, account: &Address) -> Result<bool, StoreError> {
        self.has(Table::Admins, &account_key(denom, account))
    }

    pub fn set_admin(&mut self, denom: &Denom, account: &Address) {
        self.put(Table::Admins, account_key(denom, account), PRESENT.to_vec());
    }

    pub fn remove_admin(&mut self, denom: &Denom, account: &Address) {
        self.delete(Table::Admins, account_key(denom, account));
    }

    /// Admins of `denom`, or of every denom when `None`.
    pub fn admins(&self, denom: Option<&Denom>) -> Result<Vec<AccountEntry>, StoreError> {
        self.account_entries(Table::Admins, denom)
    }

    pub fn is_system(&self, denom: &Denom, account: &Address) -> Result<bool, StoreError> {
        self.has(Table::Systems, &account_key(denom, account))
    }

    pub fn set_system(&mut self, denom: &Denom, account: &Address) {
        self.put(Table::Systems, account_key(denom, account), PRESENT.to_vec());
    }

    pub fn remove_system(&mut self, denom: &Denom, account: &Address) {
        self.delete(Table::Systems, account_key(denom, account));
    }

    /// System accounts of `denom`, or of every denom when `None`.
    pub fn systems(&self, denom: Option<&Denom>) -> Result<Vec<AccountEntry>, StoreError> {
        self.account_entries(Table::Systems, denom)
    }

    // =========================================================================
    // ALLOWANCES
    // =========================================================================

    /// Zero when never set.
    pub fn mint_allowance(&self, denom: &Denom, account: &Address) -> Result<Amount, StoreError> {
        self.amount_at(Table::MintAllowances, &account_key(denom, account))
    }

    pub fn set_mint_allowance(&mut self, denom: &Denom, account: &Address, amount: Amount) {
        self.put(
            Table::MintAllowances,
            account_key(denom, account),
            encode_amount(amount),
        );
    }

    pub fn mint_allowances(&self, denom: Option<&Denom>) -> Result<Vec<AllowanceEntry>, StoreError> {
        let prefix = denom.map(denom_prefix).unwrap_or_default();

        self.scan(Table::MintAllowances, &prefix)?
            .into_iter()
            .map(|(key, value)| {
                let (denom, address) = split_account_key(Table::MintAllowances, &key)?;
                Ok(AllowanceEntry {
                    denom,
                    address,
                    allowance: decode_amount(Table::MintAllowances, &value)?,
                })
            })
            .collect()
    }

    /// Zero when never set.
    pub fn max_mint_allowance(&self, denom: &Denom) -> Result<Amount, StoreError> {
        self.amount_at(Table::MaxMintAllowances, &denom_key(denom))
    }

    pub fn set_max_mint_allowance(&mut self, denom: &Denom, amount: Amount) {
        self.put(
            Table::MaxMintAllowances,
            denom_key(denom),
            encode_amount(amount),
        );
    }

    pub fn max_mint_allowances(&self) -> Result<BTreeMap<Denom, Amount>, StoreError> {
        self.scan(Table::MaxMintAllowances, &[])?
            .into_iter()
            .map(|(key, value)| {
                Ok((
                    Denom::from_utf8_lossy(&key),
                    decode_amount(Table::MaxMintAllowances, &value)?,
                ))
            })
            .collect()
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    pub(super) fn address_at(&self, table: Table, key: &[u8]) -> Result<Option<Address>, StoreError> {
        self.get(table, key)?
            .map(|bytes| decode_address(table, &bytes))
            .transpose()
    }

    pub(super) fn set_address_at(&mut self, table: Table, key: Vec<u8>, address: Option<&Address>) {
        match address {
            Some(address) => self.put(table, key, address.as_bytes().to_vec()),
            None => self.delete(table, key),
        }
    }

    fn amount_at(&self, table: Table, key: &[u8]) -> Result<Amount, StoreError> {
        match self.get(table, key)? {
            Some(bytes) => decode_amount(table, &bytes),
            None => Ok(0),
        }
    }

    fn addresses_by_denom(&self, table: Table) -> Result<BTreeMap<Denom, Address>, StoreError> {
        self.scan(table, &[])?
            .into_iter()
            .map(|(key, value)| Ok((Denom::from_utf8_lossy(&key), decode_address(table, &value)?)))
            .collect()
    }

    fn account_entries(
        &self,
        table: Table,
        denom: Option<&Denom>,
    ) -> Result<Vec<AccountEntry>, StoreError> {
        let prefix = denom.map(denom_prefix).unwrap_or_default();

        self.scan(table, &prefix)?
            .into_iter()
            .map(|(key, _)| {
                let (denom, address) = split_account_key(table, &key)?;
                Ok(AccountEntry { denom, address })
            })
            .collect()
    }
}
