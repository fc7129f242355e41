//! # Burn and Recover Tests
//!
//! Burn and Recover act on a holder's funds and need the holder's signed
//! declaration. These tests use real secp256k1 keys.

mod common;

use common::{addr, Harness, Holder, MODULE, PREFIX};
use florin_authority::{
    Address, AssetCommand, AssetEvent, Attestation, AuthorityError, AuthorityEvent, Coin, Coins,
    Denom, DenylistCommand, DenylistEvent, Ledger, LedgerError,
};

fn ueure() -> Denom {
    "ueure".into()
}

fn burn(
    h: &Harness,
    holder: &Holder,
    amount: u128,
    attestation: Attestation,
) -> Result<(), AuthorityError> {
    h.asset(AssetCommand::Burn {
        signer: h.roles.system.clone(),
        denom: ueure(),
        from: holder.address.clone(),
        amount,
        attestation,
    })
}

fn recover(h: &Harness, holder: &Holder, attestation: Attestation) -> Result<(), AuthorityError> {
    h.asset(AssetCommand::Recover {
        signer: h.roles.system.clone(),
        denom: ueure(),
        from: holder.address.clone(),
        to: addr(0x90),
        attestation,
    })
}

// =============================================================================
// BURN
// =============================================================================

#[test]
fn test_burn_with_holder_attestation() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 100))
        .unwrap();

    burn(&h, &holder, 40, holder.attest()).unwrap();

    assert_eq!(h.ledger.balance(&holder.address, &ueure()).unwrap(), 60);
    assert_eq!(h.ledger.supply(&ueure()).unwrap(), 60);
}

#[test]
fn test_burn_with_foreign_attestation_rejected() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    let stranger = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 100))
        .unwrap();

    let result = burn(&h, &holder, 40, stranger.attest());

    assert!(matches!(result, Err(AuthorityError::AddressMismatch { .. })));
    assert_eq!(h.ledger.balance(&holder.address, &ueure()).unwrap(), 100);
}

#[test]
fn test_burn_more_than_balance() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 10))
        .unwrap();

    let result = burn(&h, &holder, 11, holder.attest());

    assert!(matches!(
        result,
        Err(AuthorityError::Ledger(LedgerError::InsufficientFunds { .. }))
    ));
    assert_eq!(h.ledger.supply(&ueure()).unwrap(), 10);
}

#[test]
fn test_burn_from_banned_holder_is_restricted() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 10))
        .unwrap();
    h.execute(DenylistCommand::Ban {
        signer: h.roles.denylist_admin.clone(),
        adversary: holder.address.clone(),
    })
    .unwrap();

    let result = burn(&h, &holder, 5, holder.attest());

    assert!(matches!(
        result,
        Err(AuthorityError::Ledger(LedgerError::Restricted(_)))
    ));
    assert_eq!(h.ledger.balance(&holder.address, &ueure()).unwrap(), 10);
}

#[test]
fn test_failed_burn_publishes_no_events() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 10))
        .unwrap();
    h.execute(DenylistCommand::Ban {
        signer: h.roles.denylist_admin.clone(),
        adversary: holder.address.clone(),
    })
    .unwrap();
    h.events.drain();

    assert!(burn(&h, &holder, 5, holder.attest()).is_err());

    assert!(h.events.is_empty());

    // A later direct transfer still reports its decision right away.
    let result = h
        .ledger
        .send(&holder.address, &addr(0x90), &Coins::single("ueure", 1));
    assert!(result.is_err());
    assert_eq!(h.events.len(), 1);
}

#[test]
fn test_burn_publishes_decision_on_commit() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 10))
        .unwrap();

    burn(&h, &holder, 4, holder.attest()).unwrap();

    assert_eq!(
        h.events.drain(),
        vec![AuthorityEvent::Denylist(DenylistEvent::Decision {
            from: holder.address.clone(),
            to: Address::for_module(PREFIX, MODULE).unwrap(),
            amount: 4,
            valid: true,
        })]
    );
}

#[test]
fn test_burn_requires_system_account_before_attestation() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();

    let result = h.asset(AssetCommand::Burn {
        signer: h.roles.admin.clone(),
        denom: ueure(),
        from: holder.address.clone(),
        amount: 1,
        attestation: Attestation::new(vec![], vec![]),
    });

    assert!(matches!(result, Err(AuthorityError::NotSystem { .. })));
}

// =============================================================================
// RECOVER
// =============================================================================

#[test]
fn test_recover_moves_entire_balance() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 77))
        .unwrap();
    h.events.drain();

    recover(&h, &holder, holder.attest()).unwrap();

    assert_eq!(h.ledger.balance(&holder.address, &ueure()).unwrap(), 0);
    assert_eq!(h.ledger.balance(&addr(0x90), &ueure()).unwrap(), 77);
    assert_eq!(
        h.events.events(),
        vec![
            AuthorityEvent::Denylist(DenylistEvent::Decision {
                from: holder.address.clone(),
                to: addr(0x90),
                amount: 77,
                valid: true,
            }),
            AuthorityEvent::Asset(AssetEvent::Recovered {
                denom: ueure(),
                from: holder.address.clone(),
                to: addr(0x90),
                amount: 77,
            }),
        ]
    );
}

#[test]
fn test_recover_empty_account_is_noop() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();

    recover(&h, &holder, holder.attest()).unwrap();

    assert!(h.events.is_empty());
    assert_eq!(h.ledger.balance(&addr(0x90), &ueure()).unwrap(), 0);
}

#[test]
fn test_recover_with_account_store_key() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 5))
        .unwrap();

    assert_eq!(
        recover(&h, &holder, Attestation::with_account_key(holder.signature())),
        Err(AuthorityError::MissingPublicKey(holder.address.clone()))
    );

    h.accounts
        .register(
            holder.address.clone(),
            holder.keypair.public_key().as_bytes().to_vec(),
        )
        .unwrap();
    recover(&h, &holder, Attestation::with_account_key(holder.signature())).unwrap();

    assert_eq!(h.ledger.balance(&addr(0x90), &ueure()).unwrap(), 5);
}

#[test]
fn test_recover_with_tampered_signature() {
    let h = Harness::bootstrapped(1_000);
    let holder = Holder::generate();
    h.ledger
        .deposit(&holder.address, Coin::new("ueure", 5))
        .unwrap();

    let mut attestation = holder.attest();
    attestation.signature[10] ^= 0x01;

    assert_eq!(
        recover(&h, &holder, attestation),
        Err(AuthorityError::InvalidSignature)
    );
}
