//! # Commands
//!
//! Closed set of state-changing commands accepted from the dispatcher.
//! `AuthorityService::execute` matches exhaustively, so adding a variant
//! fails to compile until it has a handler.

use crate::domain::attestation::Attestation;
use crate::domain::entities::{Address, Amount, Denom};
use crate::domain::errors::AuthorityError;

/// Any authority command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Asset(AssetCommand),
    Denylist(DenylistCommand),
}

/// Per-asset commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetCommand {
    /// Place `denom` under this authority. Signed by the registry authority.
    AllowDenom {
        signer: Address,
        denom: Denom,
        owner: Address,
    },
    TransferOwnership {
        signer: Address,
        denom: Denom,
        new_owner: Address,
    },
    AcceptOwnership {
        signer: Address,
        denom: Denom,
    },
    AddAdminAccount {
        signer: Address,
        denom: Denom,
        account: Address,
    },
    RemoveAdminAccount {
        signer: Address,
        denom: Denom,
        account: Address,
    },
    AddSystemAccount {
        signer: Address,
        denom: Denom,
        account: Address,
    },
    RemoveSystemAccount {
        signer: Address,
        denom: Denom,
        account: Address,
    },
    SetMaxMintAllowance {
        signer: Address,
        denom: Denom,
        amount: Amount,
    },
    /// Signed so that a negative request reaches the handler and is refused.
    SetMintAllowance {
        signer: Address,
        denom: Denom,
        account: Address,
        amount: i128,
    },
    Mint {
        signer: Address,
        denom: Denom,
        to: Address,
        amount: Amount,
    },
    Burn {
        signer: Address,
        denom: Denom,
        from: Address,
        amount: Amount,
        attestation: Attestation,
    },
    Recover {
        signer: Address,
        denom: Denom,
        from: Address,
        to: Address,
        attestation: Attestation,
    },
}

/// Deny-list commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DenylistCommand {
    TransferOwnership { signer: Address, new_owner: Address },
    AcceptOwnership { signer: Address },
    AddAdminAccount { signer: Address, account: Address },
    RemoveAdminAccount { signer: Address, account: Address },
    Ban { signer: Address, adversary: Address },
    Unban { signer: Address, friend: Address },
}

impl Command {
    pub fn signer(&self) -> &Address {
        match self {
            Command::Asset(cmd) => cmd.signer(),
            Command::Denylist(cmd) => cmd.signer(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Asset(cmd) => cmd.name(),
            Command::Denylist(cmd) => cmd.name(),
        }
    }

    /// Stateless checks run before any state is read.
    pub fn validate_basic(&self, prefix: &str) -> Result<(), AuthorityError> {
        match self {
            Command::Asset(cmd) => cmd.validate_basic(prefix),
            Command::Denylist(cmd) => cmd.validate_basic(prefix),
        }
    }
}

impl From<AssetCommand> for Command {
    fn from(cmd: AssetCommand) -> Self {
        Command::Asset(cmd)
    }
}

impl From<DenylistCommand> for Command {
    fn from(cmd: DenylistCommand) -> Self {
        Command::Denylist(cmd)
    }
}

impl AssetCommand {
    pub fn signer(&self) -> &Address {
        match self {
            AssetCommand::AllowDenom { signer, .. }
            | AssetCommand::TransferOwnership { signer, .. }
            | AssetCommand::AcceptOwnership { signer, .. }
            | AssetCommand::AddAdminAccount { signer, .. }
            | AssetCommand::RemoveAdminAccount { signer, .. }
            | AssetCommand::AddSystemAccount { signer, .. }
            | AssetCommand::RemoveSystemAccount { signer, .. }
            | AssetCommand::SetMaxMintAllowance { signer, .. }
            | AssetCommand::SetMintAllowance { signer, .. }
            | AssetCommand::Mint { signer, .. }
            | AssetCommand::Burn { signer, .. }
            | AssetCommand::Recover { signer, .. } => signer,
        }
    }

    pub fn denom(&self) -> &Denom {
        match self {
            AssetCommand::AllowDenom { denom, .. }
            | AssetCommand::TransferOwnership { denom, .. }
            | AssetCommand::AcceptOwnership { denom, .. }
            | AssetCommand::AddAdminAccount { denom, .. }
            | AssetCommand::RemoveAdminAccount { denom, .. }
            | AssetCommand::AddSystemAccount { denom, .. }
            | AssetCommand::RemoveSystemAccount { denom, .. }
            | AssetCommand::SetMaxMintAllowance { denom, .. }
            | AssetCommand::SetMintAllowance { denom, .. }
            | AssetCommand::Mint { denom, .. }
            | AssetCommand::Burn { denom, .. }
            | AssetCommand::Recover { denom, .. } => denom,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AssetCommand::AllowDenom { .. } => "AllowDenom",
            AssetCommand::TransferOwnership { .. } => "TransferOwnership",
            AssetCommand::AcceptOwnership { .. } => "AcceptOwnership",
            AssetCommand::AddAdminAccount { .. } => "AddAdminAccount",
            AssetCommand::RemoveAdminAccount { .. } => "RemoveAdminAccount",
            AssetCommand::AddSystemAccount { .. } => "AddSystemAccount",
            AssetCommand::RemoveSystemAccount { .. } => "RemoveSystemAccount",
            AssetCommand::SetMaxMintAllowance { .. } => "SetMaxMintAllowance",
            AssetCommand::SetMintAllowance { .. } => "SetMintAllowance",
            AssetCommand::Mint { .. } => "Mint",
            AssetCommand::Burn { .. } => "Burn",
            AssetCommand::Recover { .. } => "Recover",
        }
    }

    pub fn validate_basic(&self, prefix: &str) -> Result<(), AuthorityError> {
        check_address(prefix, "signer", self.signer())?;
        if !self.denom().is_well_formed() {
            return Err(AuthorityError::InvalidDenom(self.denom().to_string()));
        }

        match self {
            AssetCommand::AllowDenom { owner, .. } => check_address(prefix, "owner", owner),
            AssetCommand::TransferOwnership { new_owner, .. } => {
                check_address(prefix, "owner", new_owner)
            }
            AssetCommand::AcceptOwnership { .. } | AssetCommand::SetMaxMintAllowance { .. } => {
                Ok(())
            }
            AssetCommand::AddAdminAccount { account, .. }
            | AssetCommand::RemoveAdminAccount { account, .. }
            | AssetCommand::AddSystemAccount { account, .. }
            | AssetCommand::RemoveSystemAccount { account, .. }
            | AssetCommand::SetMintAllowance { account, .. } => {
                check_address(prefix, "account", account)
            }
            AssetCommand::Mint { to, amount, .. } => {
                check_address(prefix, "to", to)?;
                check_positive("amount", *amount)
            }
            AssetCommand::Burn { from, amount, .. } => {
                check_address(prefix, "from", from)?;
                check_positive("amount", *amount)
            }
            AssetCommand::Recover { from, to, .. } => {
                check_address(prefix, "from", from)?;
                check_address(prefix, "to", to)
            }
        }
    }
}

impl DenylistCommand {
    pub fn signer(&self) -> &Address {
        match self {
            DenylistCommand::TransferOwnership { signer, .. }
            | DenylistCommand::AcceptOwnership { signer }
            | DenylistCommand::AddAdminAccount { signer, .. }
            | DenylistCommand::RemoveAdminAccount { signer, .. }
            | DenylistCommand::Ban { signer, .. }
            | DenylistCommand::Unban { signer, .. } => signer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DenylistCommand::TransferOwnership { .. } => "Denylist/TransferOwnership",
            DenylistCommand::AcceptOwnership { .. } => "Denylist/AcceptOwnership",
            DenylistCommand::AddAdminAccount { .. } => "Denylist/AddAdminAccount",
            DenylistCommand::RemoveAdminAccount { .. } => "Denylist/RemoveAdminAccount",
            DenylistCommand::Ban { .. } => "Denylist/Ban",
            DenylistCommand::Unban { .. } => "Denylist/Unban",
        }
    }

    pub fn validate_basic(&self, prefix: &str) -> Result<(), AuthorityError> {
        check_address(prefix, "signer", self.signer())?;

        match self {
            DenylistCommand::TransferOwnership { new_owner, .. } => {
                check_address(prefix, "owner", new_owner)
            }
            DenylistCommand::AcceptOwnership { .. } => Ok(()),
            DenylistCommand::AddAdminAccount { account, .. }
            | DenylistCommand::RemoveAdminAccount { account, .. } => {
                check_address(prefix, "account", account)
            }
            DenylistCommand::Ban { adversary, .. } => check_address(prefix, "adversary", adversary),
            DenylistCommand::Unban { friend, .. } => check_address(prefix, "friend", friend),
        }
    }
}

fn check_address(prefix: &str, field: &'static str, address: &Address) -> Result<(), AuthorityError> {
    address
        .to_raw(prefix)
        .map(|_| ())
        .map_err(|e| AuthorityError::InvalidAddress {
            field,
            address: address.clone(),
            reason: e.to_string(),
        })
}

fn check_positive(field: &'static str, amount: Amount) -> Result<(), AuthorityError> {
    if amount == 0 {
        return Err(AuthorityError::InvalidAmount { field, amount });
    }
    Ok(())
}
