//! Typed accessors for the deny-list tables.

use super::StateTransaction;
use crate::domain::entities::Address;
use crate::domain::errors::StoreError;
use crate::domain::keys::{decode_address, Table, PRESENT, SINGLETON_KEY};
use crate::domain::ownership::Ownership;
use crate::ports::outbound::KvStore;

impl<S: KvStore + ?Sized> StateTransaction<'_, S> {
    pub fn denylist_ownership(&self) -> Result<Ownership, StoreError> {
        Ok(Ownership {
            owner: self.address_at(Table::DenylistOwner, SINGLETON_KEY)?,
            pending_owner: self.address_at(Table::DenylistPendingOwner, SINGLETON_KEY)?,
        })
    }

    pub fn set_denylist_ownership(&mut self, ownership: &Ownership) {
        self.set_address_at(
            Table::DenylistOwner,
            SINGLETON_KEY.to_vec(),
            ownership.owner.as_ref(),
        );
        self.set_address_at(
            Table::DenylistPendingOwner,
            SINGLETON_KEY.to_vec(),
            ownership.pending_owner.as_ref(),
        );
    }

    pub fn is_denylist_admin(&self, account: &Address) -> Result<bool, StoreError> {
        self.has(Table::DenylistAdmins, account.as_bytes())
    }

    pub fn set_denylist_admin(&mut self, account: &Address) {
        self.put(
            Table::DenylistAdmins,
            account.as_bytes().to_vec(),
            PRESENT.to_vec(),
        );
    }

    pub fn remove_denylist_admin(&mut self, account: &Address) {
        self.delete(Table::DenylistAdmins, account.as_bytes().to_vec());
    }

    pub fn denylist_admins(&self) -> Result<Vec<Address>, StoreError> {
        self.addresses_in(Table::DenylistAdmins)
    }

    pub fn is_adversary(&self, address: &Address) -> Result<bool, StoreError> {
        self.has(Table::Adversaries, address.as_bytes())
    }

    pub fn set_adversary(&mut self, address: &Address) {
        self.put(
            Table::Adversaries,
            address.as_bytes().to_vec(),
            PRESENT.to_vec(),
        );
    }

    pub fn remove_adversary(&mut self, address: &Address) {
        self.delete(Table::Adversaries, address.as_bytes().to_vec());
    }

    pub fn adversaries(&self) -> Result<Vec<Address>, StoreError> {
        self.addresses_in(Table::Adversaries)
    }

    fn addresses_in(&self, table: Table) -> Result<Vec<Address>, StoreError> {
        self.scan(table, &[])?
            .into_iter()
            .map(|(key, _)| decode_address(table, &key))
            .collect()
    }
}
