//! # Deny-list and Transfer Gate Tests
//!
//! Exercises the deny-list commands together with the send restriction the
//! ledger runs on every account-originated transfer.
//!
//! ## Test Categories
//!
//! 1. **Gating** - Banned senders blocked, unbanned senders released
//! 2. **Decisions** - One decision per controlled denom actually moved
//! 3. **Governance** - Deny-list ownership and admin management

mod common;

use common::{addr, Harness};
use florin_authority::{
    Address, AuthorityError, AuthorityEvent, Coin, Coins, DenylistCommand, DenylistEvent, Ledger,
    LedgerError, OwnershipSubject,
};

const VICTIM: u8 = 0x70;
const ADVERSARY: u8 = 0x71;

fn ban(h: &Harness, adversary: &Address) -> Result<(), AuthorityError> {
    h.execute(DenylistCommand::Ban {
        signer: h.roles.denylist_admin.clone(),
        adversary: adversary.clone(),
    })
}

fn decisions(h: &Harness) -> Vec<(Address, bool)> {
    h.events
        .drain()
        .into_iter()
        .filter_map(|e| match e {
            AuthorityEvent::Denylist(DenylistEvent::Decision { from, valid, .. }) => {
                Some((from, valid))
            }
            _ => None,
        })
        .collect()
}

// =============================================================================
// GATING
// =============================================================================

#[test]
fn test_banned_sender_cannot_transfer_until_unbanned() {
    let h = Harness::bootstrapped(1_000);
    let adversary = addr(ADVERSARY);
    h.ledger.deposit(&adversary, Coin::new("ueure", 100)).unwrap();

    ban(&h, &adversary).unwrap();
    h.events.drain();

    let result = h
        .ledger
        .send(&adversary, &addr(VICTIM), &Coins::single("ueure", 10));
    match result {
        Err(LedgerError::Restricted(reason)) => {
            assert_eq!(reason, format!("{} is blocked from sending ueure", adversary));
        }
        other => panic!("expected restriction, got {:?}", other),
    }
    assert_eq!(decisions(&h), vec![(adversary.clone(), false)]);
    assert_eq!(h.ledger.balance(&adversary, &"ueure".into()).unwrap(), 100);

    h.execute(DenylistCommand::Unban {
        signer: h.roles.denylist_admin.clone(),
        friend: adversary.clone(),
    })
    .unwrap();
    h.events.drain();

    h.ledger
        .send(&adversary, &addr(VICTIM), &Coins::single("ueure", 10))
        .unwrap();
    assert_eq!(decisions(&h), vec![(adversary.clone(), true)]);
    assert_eq!(h.ledger.balance(&addr(VICTIM), &"ueure".into()).unwrap(), 10);
}

#[test]
fn test_uncontrolled_denom_is_not_gated() {
    let h = Harness::bootstrapped(1_000);
    let adversary = addr(ADVERSARY);
    h.ledger.deposit(&adversary, Coin::new("uusdc", 50)).unwrap();
    ban(&h, &adversary).unwrap();
    h.events.drain();

    h.ledger
        .send(&adversary, &addr(VICTIM), &Coins::single("uusdc", 50))
        .unwrap();

    assert!(decisions(&h).is_empty());
}

#[test]
fn test_zero_amount_of_controlled_denom_is_skipped() {
    let h = Harness::bootstrapped(1_000);
    let adversary = addr(ADVERSARY);
    h.ledger.deposit(&adversary, Coin::new("uusdc", 50)).unwrap();
    ban(&h, &adversary).unwrap();
    h.events.drain();

    let coins = Coins::new([Coin::new("ueure", 0), Coin::new("uusdc", 5)]);
    h.ledger.send(&adversary, &addr(VICTIM), &coins).unwrap();

    assert!(decisions(&h).is_empty());
}

#[test]
fn test_recipient_is_not_checked() {
    let h = Harness::bootstrapped(1_000);
    let adversary = addr(ADVERSARY);
    h.ledger.deposit(&addr(VICTIM), Coin::new("ueure", 10)).unwrap();
    ban(&h, &adversary).unwrap();
    h.events.drain();

    h.ledger
        .send(&addr(VICTIM), &adversary, &Coins::single("ueure", 10))
        .unwrap();

    assert_eq!(decisions(&h), vec![(addr(VICTIM), true)]);
}

// =============================================================================
// GOVERNANCE
// =============================================================================

#[test]
fn test_only_denylist_admins_ban() {
    let h = Harness::bootstrapped(1_000);

    assert_eq!(
        h.execute(DenylistCommand::Ban {
            signer: h.roles.owner.clone(),
            adversary: addr(ADVERSARY),
        }),
        Err(AuthorityError::NotAdmin {
            subject: OwnershipSubject::Denylist,
            account: h.roles.owner.clone(),
        })
    );
    assert!(h.service.queries().denylist_adversaries().unwrap().is_empty());
}

#[test]
fn test_admin_management_requires_denylist_owner() {
    let h = Harness::bootstrapped(1_000);
    let recruit = addr(0x12);

    assert!(matches!(
        h.execute(DenylistCommand::AddAdminAccount {
            signer: h.roles.denylist_admin.clone(),
            account: recruit.clone(),
        }),
        Err(AuthorityError::NotOwner { .. })
    ));

    h.execute(DenylistCommand::AddAdminAccount {
        signer: h.roles.denylist_owner.clone(),
        account: recruit.clone(),
    })
    .unwrap();
    ban(&h, &addr(ADVERSARY)).unwrap();
    h.execute(DenylistCommand::Ban {
        signer: recruit.clone(),
        adversary: addr(0x72),
    })
    .unwrap();

    h.execute(DenylistCommand::RemoveAdminAccount {
        signer: h.roles.denylist_owner.clone(),
        account: recruit.clone(),
    })
    .unwrap();
    assert!(matches!(
        h.execute(DenylistCommand::Unban {
            signer: recruit,
            friend: addr(0x72),
        }),
        Err(AuthorityError::NotAdmin { .. })
    ));

    let mut expected = vec![addr(ADVERSARY), addr(0x72)];
    expected.sort();
    assert_eq!(h.service.queries().denylist_adversaries().unwrap(), expected);
}

#[test]
fn test_denylist_ownership_round_trip() {
    let h = Harness::bootstrapped(1_000);
    let successor = addr(0x13);

    h.execute(DenylistCommand::TransferOwnership {
        signer: h.roles.denylist_owner.clone(),
        new_owner: successor.clone(),
    })
    .unwrap();
    assert_eq!(
        h.service.queries().denylist_owner().unwrap(),
        (Some(h.roles.denylist_owner.clone()), Some(successor.clone()))
    );

    h.execute(DenylistCommand::AcceptOwnership {
        signer: successor.clone(),
    })
    .unwrap();

    assert_eq!(
        h.service.queries().denylist_owner().unwrap(),
        (Some(successor.clone()), None)
    );
    assert_eq!(
        h.events.drain(),
        vec![
            AuthorityEvent::Denylist(DenylistEvent::OwnershipTransferStarted {
                previous_owner: h.roles.denylist_owner.clone(),
                new_owner: successor.clone(),
            }),
            AuthorityEvent::Denylist(DenylistEvent::OwnershipTransferred {
                previous_owner: Some(h.roles.denylist_owner.clone()),
                new_owner: successor,
            }),
        ]
    );
}

#[test]
fn test_accept_without_pending_transfer() {
    let h = Harness::bootstrapped(1_000);

    assert_eq!(
        h.execute(DenylistCommand::AcceptOwnership {
            signer: addr(0x13),
        }),
        Err(AuthorityError::NoPendingOwner(OwnershipSubject::Denylist))
    );
}
