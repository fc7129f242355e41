//! Shared harness for the authority integration tests.

#![allow(dead_code)]

use florin_authority::domain::attestation::sign_doc_bytes;
use florin_authority::{
    Address, AssetCommand, Attestation, AuthorityApi, AuthorityConfig, AuthorityError,
    AuthorityService, Command, DenylistGenesis, GenesisState, InMemoryAccountStore,
    InMemoryEventLog, InMemoryKvStore, InMemoryLedger, DEFAULT_DECLARATION,
};
use shared_crypto::Secp256k1KeyPair;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const PREFIX: &str = "noble";
pub const MODULE: &str = "florin";

pub type Service =
    AuthorityService<InMemoryKvStore, InMemoryLedger, InMemoryAccountStore, InMemoryEventLog>;

/// Route `tracing` output through the test harness. Set `RUST_LOG=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn addr(seed: u8) -> Address {
    Address::from_raw(PREFIX, &[seed; 20]).unwrap()
}

/// Well-known participants.
pub struct Roles {
    pub authority: Address,
    pub owner: Address,
    pub admin: Address,
    pub system: Address,
    pub denylist_owner: Address,
    pub denylist_admin: Address,
}

impl Roles {
    pub fn new() -> Self {
        Self {
            authority: addr(0xA0),
            owner: addr(0x01),
            admin: addr(0x02),
            system: addr(0x03),
            denylist_owner: addr(0x10),
            denylist_admin: addr(0x11),
        }
    }
}

pub struct Harness {
    pub service: Service,
    pub ledger: Arc<InMemoryLedger>,
    pub accounts: Arc<InMemoryAccountStore>,
    pub events: Arc<InMemoryEventLog>,
    pub roles: Roles,
}

impl Harness {
    /// Empty store with the transfer gate installed on the ledger.
    pub fn new() -> Self {
        init_tracing();

        let roles = Roles::new();
        let ledger = Arc::new(InMemoryLedger::new());
        let accounts = Arc::new(InMemoryAccountStore::new());
        let events = Arc::new(InMemoryEventLog::new());
        let service = AuthorityService::new(
            AuthorityConfig::with_authority(roles.authority.clone()),
            Arc::new(InMemoryKvStore::new()),
            Arc::clone(&ledger),
            Arc::clone(&accounts),
            Arc::clone(&events),
        )
        .unwrap();
        ledger
            .set_send_restriction(Arc::new(service.transfer_gate()))
            .unwrap();

        Self {
            service,
            ledger,
            accounts,
            events,
            roles,
        }
    }

    /// `ueure` owned by `roles.owner` with one admin and one system account,
    /// and a deny-list owned by `roles.denylist_owner` with one admin.
    pub fn bootstrapped(max_mint_allowance: u128) -> Self {
        let harness = Self::new();
        let roles = &harness.roles;
        let ueure = "ueure".into();

        let genesis = GenesisState {
            denylist: DenylistGenesis {
                owner: Some(roles.denylist_owner.clone()),
                pending_owner: None,
                admins: vec![roles.denylist_admin.clone()],
                adversaries: Vec::new(),
            },
            owners: BTreeMap::from([(ueure, roles.owner.clone())]),
            max_mint_allowances: BTreeMap::from([("ueure".into(), max_mint_allowance)]),
            ..GenesisState::default()
        };
        harness.service.init_genesis(&genesis).unwrap();

        harness
            .asset(AssetCommand::AddAdminAccount {
                signer: roles.owner.clone(),
                denom: "ueure".into(),
                account: roles.admin.clone(),
            })
            .unwrap();
        harness
            .asset(AssetCommand::AddSystemAccount {
                signer: roles.owner.clone(),
                denom: "ueure".into(),
                account: roles.system.clone(),
            })
            .unwrap();
        harness.events.drain();

        harness
    }

    pub fn asset(&self, command: AssetCommand) -> Result<(), AuthorityError> {
        self.service.execute(&Command::Asset(command))
    }

    pub fn execute(&self, command: impl Into<Command>) -> Result<(), AuthorityError> {
        self.service.execute(&command.into())
    }
}

/// A keypair together with the address the ledger derives for it.
pub struct Holder {
    pub keypair: Secp256k1KeyPair,
    pub address: Address,
}

impl Holder {
    pub fn generate() -> Self {
        let keypair = Secp256k1KeyPair::generate();
        let address = Address::from_public_key(PREFIX, &keypair.public_key()).unwrap();
        Self { keypair, address }
    }

    pub fn signature(&self) -> Vec<u8> {
        let doc = sign_doc_bytes(&self.address, DEFAULT_DECLARATION.as_bytes()).unwrap();
        self.keypair.sign(&doc).as_bytes().to_vec()
    }

    /// Attestation carrying its own public key.
    pub fn attest(&self) -> Attestation {
        Attestation::new(
            self.keypair.public_key().as_bytes().to_vec(),
            self.signature(),
        )
    }
}
