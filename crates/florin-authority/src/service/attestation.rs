//! # Attestation Verifier
//!
//! Checks that an attestation was produced by the holder of `claimed`:
//!
//! 1. Resolve the public key (supplied, or from the account store)
//! 2. Derive the address of that key; it must equal `claimed`
//! 3. Verify the signature over the sign document binding the declaration
//!    to `claimed`

use crate::domain::attestation::{sign_doc_bytes, Attestation};
use crate::domain::entities::Address;
use crate::domain::errors::AuthorityError;
use crate::ports::outbound::AccountStore;
use shared_crypto::{Secp256k1PublicKey, Secp256k1Signature};
use std::sync::Arc;

pub struct AttestationVerifier<A: AccountStore> {
    accounts: Arc<A>,
    prefix: String,
    declaration: String,
}

impl<A: AccountStore> AttestationVerifier<A> {
    pub fn new(accounts: Arc<A>, prefix: String, declaration: String) -> Self {
        Self {
            accounts,
            prefix,
            declaration,
        }
    }

    pub fn verify(&self, claimed: &Address, attestation: &Attestation) -> Result<(), AuthorityError> {
        let raw_key = match &attestation.public_key {
            Some(key) => key.clone(),
            None => self
                .accounts
                .public_key(claimed)?
                .ok_or_else(|| AuthorityError::MissingPublicKey(claimed.clone()))?,
        };

        let public_key = Secp256k1PublicKey::from_slice(&raw_key)
            .map_err(|e| AuthorityError::InvalidPublicKey(e.to_string()))?;

        let derived = Address::from_public_key(&self.prefix, &public_key)
            .map_err(|e| AuthorityError::InvalidPublicKey(e.to_string()))?;
        if &derived != claimed {
            return Err(AuthorityError::AddressMismatch {
                claimed: claimed.clone(),
                derived,
            });
        }

        let signature = Secp256k1Signature::from_slice(&attestation.signature)
            .map_err(|_| AuthorityError::InvalidSignature)?;
        let message = sign_doc_bytes(claimed, self.declaration.as_bytes())?;

        public_key
            .verify(&message, &signature)
            .map_err(|_| AuthorityError::InvalidSignature)
    }
}
