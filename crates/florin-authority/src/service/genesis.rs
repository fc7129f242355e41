//! Genesis import and export.

use crate::domain::errors::StoreError;
use crate::domain::genesis::{DenylistGenesis, GenesisState};
use crate::domain::ownership::Ownership;
use crate::ports::outbound::KvStore;
use crate::state::StateTransaction;
use tracing::info;

/// Write a validated genesis state. Emits no events.
pub(crate) fn import<S: KvStore + ?Sized>(tx: &mut StateTransaction<'_, S>, genesis: &GenesisState) {
    let denylist = &genesis.denylist;
    tx.set_denylist_ownership(&Ownership {
        owner: denylist.owner.clone(),
        pending_owner: denylist.pending_owner.clone(),
    });
    for admin in &denylist.admins {
        tx.set_denylist_admin(admin);
    }
    for adversary in &denylist.adversaries {
        tx.set_adversary(adversary);
    }

    for denom in &genesis.allowed_denoms {
        tx.set_allowed_denom(denom);
        tx.set_ownership(
            denom,
            &Ownership {
                owner: genesis.owners.get(denom).cloned(),
                pending_owner: genesis.pending_owners.get(denom).cloned(),
            },
        );
    }
    for entry in &genesis.systems {
        tx.set_system(&entry.denom, &entry.address);
    }
    for entry in &genesis.admins {
        tx.set_admin(&entry.denom, &entry.address);
    }
    for entry in &genesis.mint_allowances {
        tx.set_mint_allowance(&entry.denom, &entry.address, entry.allowance);
    }
    for (denom, max) in &genesis.max_mint_allowances {
        tx.set_max_mint_allowance(denom, *max);
    }

    info!(
        "[florin] Genesis loaded: {} denoms, {} adversaries",
        genesis.allowed_denoms.len(),
        denylist.adversaries.len()
    );
}

pub(crate) fn export<S: KvStore + ?Sized>(
    tx: &StateTransaction<'_, S>,
) -> Result<GenesisState, StoreError> {
    let denylist = tx.denylist_ownership()?;

    Ok(GenesisState {
        denylist: DenylistGenesis {
            owner: denylist.owner,
            pending_owner: denylist.pending_owner,
            admins: tx.denylist_admins()?,
            adversaries: tx.adversaries()?,
        },
        allowed_denoms: tx.allowed_denoms()?,
        owners: tx.owners()?,
        pending_owners: tx.pending_owners()?,
        systems: tx.systems(None)?,
        admins: tx.admins(None)?,
        mint_allowances: tx.mint_allowances(None)?,
        max_mint_allowances: tx.max_mint_allowances()?,
    })
}
