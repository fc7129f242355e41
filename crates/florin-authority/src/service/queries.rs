//! Read-only queries over committed state.
//!
//! Per-denom queries fail with `UnknownAsset` for uncontrolled denoms.
//! Missing allowances read as zero.

use super::registry::ensure_allowed;
use crate::domain::entities::{AccountEntry, Address, AllowanceEntry, Amount, Denom};
use crate::domain::errors::AuthorityError;
use crate::ports::outbound::KvStore;
use crate::state::StateTransaction;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Query surface of the authority.
pub struct AuthorityQueries<S: KvStore> {
    store: Arc<S>,
    authority: Address,
}

/// Owner and pending owner of an asset or of the deny-list.
pub type OwnerView = (Option<Address>, Option<Address>);

impl<S: KvStore> AuthorityQueries<S> {
    pub fn new(store: Arc<S>, authority: Address) -> Self {
        Self { store, authority }
    }

    fn state(&self) -> StateTransaction<'_, S> {
        StateTransaction::new(self.store.as_ref())
    }

    /// Address allowed to place denoms under control.
    pub fn authority(&self) -> &Address {
        &self.authority
    }

    pub fn allowed_denoms(&self) -> Result<Vec<Denom>, AuthorityError> {
        Ok(self.state().allowed_denoms()?)
    }

    pub fn owner(&self, denom: &Denom) -> Result<OwnerView, AuthorityError> {
        let state = self.state();
        ensure_allowed(&state, denom)?;
        let ownership = state.ownership(denom)?;
        Ok((ownership.owner, ownership.pending_owner))
    }

    /// Owners and pending owners of every asset.
    pub fn owners(
        &self,
    ) -> Result<(BTreeMap<Denom, Address>, BTreeMap<Denom, Address>), AuthorityError> {
        let state = self.state();
        Ok((state.owners()?, state.pending_owners()?))
    }

    pub fn systems(&self) -> Result<Vec<AccountEntry>, AuthorityError> {
        Ok(self.state().systems(None)?)
    }

    pub fn systems_by_denom(&self, denom: &Denom) -> Result<Vec<Address>, AuthorityError> {
        let state = self.state();
        ensure_allowed(&state, denom)?;
        Ok(state
            .systems(Some(denom))?
            .into_iter()
            .map(|e| e.address)
            .collect())
    }

    pub fn admins(&self) -> Result<Vec<AccountEntry>, AuthorityError> {
        Ok(self.state().admins(None)?)
    }

    pub fn admins_by_denom(&self, denom: &Denom) -> Result<Vec<Address>, AuthorityError> {
        let state = self.state();
        ensure_allowed(&state, denom)?;
        Ok(state
            .admins(Some(denom))?
            .into_iter()
            .map(|e| e.address)
            .collect())
    }

    pub fn max_mint_allowances(&self) -> Result<BTreeMap<Denom, Amount>, AuthorityError> {
        Ok(self.state().max_mint_allowances()?)
    }

    pub fn max_mint_allowance(&self, denom: &Denom) -> Result<Amount, AuthorityError> {
        let state = self.state();
        ensure_allowed(&state, denom)?;
        Ok(state.max_mint_allowance(denom)?)
    }

    pub fn mint_allowances(&self, denom: &Denom) -> Result<Vec<AllowanceEntry>, AuthorityError> {
        let state = self.state();
        ensure_allowed(&state, denom)?;
        Ok(state.mint_allowances(Some(denom))?)
    }

    pub fn mint_allowance(&self, denom: &Denom, account: &Address) -> Result<Amount, AuthorityError> {
        let state = self.state();
        ensure_allowed(&state, denom)?;
        Ok(state.mint_allowance(denom, account)?)
    }

    pub fn denylist_owner(&self) -> Result<OwnerView, AuthorityError> {
        let ownership = self.state().denylist_ownership()?;
        Ok((ownership.owner, ownership.pending_owner))
    }

    pub fn denylist_admins(&self) -> Result<Vec<Address>, AuthorityError> {
        Ok(self.state().denylist_admins()?)
    }

    pub fn denylist_adversaries(&self) -> Result<Vec<Address>, AuthorityError> {
        Ok(self.state().adversaries()?)
    }
}
