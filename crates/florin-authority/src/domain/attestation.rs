//! # Ownership Attestation
//!
//! A holder proves control of an address off-ledger by signing a fixed
//! declaration. The declaration is wrapped in the ledger's canonical
//! off-ledger sign document (ADR-36 style amino JSON) bound to the claimed
//! address, so a signature can't be replayed for another account.
//!
//! ```text
//! {"account_number":"0","chain_id":"","fee":{"amount":[],"gas":"0"},"memo":"",
//!  "msgs":[{"type":"sign/MsgSignData","value":{"data":"<base64>","signer":"<addr>"}}],
//!  "sequence":"0"}
//! ```
//!
//! Keys are serialized in lexicographic order and without whitespace; the
//! signature covers the SHA-256 digest of these bytes.

use super::entities::Address;
use super::errors::AuthorityError;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;

/// Declaration text signed by an address owner.
pub const DEFAULT_DECLARATION: &str = "I hereby declare that I am the address owner.";

const SIGN_DATA_TYPE: &str = "sign/MsgSignData";

/// Signed ownership declaration carried by Burn and Recover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attestation {
    /// Compressed secp256k1 key. When absent, the key is resolved from the
    /// account store.
    pub public_key: Option<Vec<u8>>,
    /// 64-byte `r || s` signature.
    pub signature: Vec<u8>,
}

impl Attestation {
    pub fn new(public_key: impl Into<Vec<u8>>, signature: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key: Some(public_key.into()),
            signature: signature.into(),
        }
    }

    /// Attestation relying on the key already known to the account store.
    pub fn with_account_key(signature: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key: None,
            signature: signature.into(),
        }
    }
}

// Field order is the serialized key order.

#[derive(Serialize)]
struct SignDoc<'a> {
    account_number: &'static str,
    chain_id: &'static str,
    fee: Fee,
    memo: &'static str,
    msgs: [SignDataMsg<'a>; 1],
    sequence: &'static str,
}

#[derive(Serialize)]
struct Fee {
    amount: [(); 0],
    gas: &'static str,
}

#[derive(Serialize)]
struct SignDataMsg<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: SignData<'a>,
}

#[derive(Serialize)]
struct SignData<'a> {
    data: String,
    signer: &'a str,
}

/// Canonical bytes a holder signs to attest `data` for `signer`.
pub fn sign_doc_bytes(signer: &Address, data: &[u8]) -> Result<Vec<u8>, AuthorityError> {
    let doc = SignDoc {
        account_number: "0",
        chain_id: "",
        fee: Fee {
            amount: [],
            gas: "0",
        },
        memo: "",
        msgs: [SignDataMsg {
            kind: SIGN_DATA_TYPE,
            value: SignData {
                data: STANDARD.encode(data),
                signer: signer.as_str(),
            },
        }],
        sequence: "0",
    };

    serde_json::to_vec(&doc).map_err(|e| AuthorityError::Encoding(e.to_string()))
}
