//! Candidate identity resolution
//!
//! Derives the acting candidate's identifier from stored session data, first
//! match wins: development bypass, then plain storage keys, then serialized
//! session objects, then the bearer token's payload. Every decode failure is
//! treated as "not found" and falls through to the next source.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use rims_core::domain::CandidateId;

use crate::store::SessionStore;

/// Fixed identity used under the development bypass.
pub const DEV_CANDIDATE_ID: &str = "11111111-1111-1111-1111-111111111111";

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Keys holding the identifier as a plain string.
const DIRECT_KEYS: [&str; 3] = ["candidateId", "CandidateId", "candidate_id"];

/// Keys holding a serialized session/profile object with an embedded id.
const OBJECT_KEYS: [&str; 3] = ["user", "profile", "authUser"];

/// Identifier fields recognized inside session objects and token payloads.
const ID_FIELDS: [&str; 4] = ["candidateId", "CandidateId", "candidate_id", "sub"];

/// Where a resolved identity came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySource {
    DevBypass,
    DirectKey(String),
    SessionObject(String),
    TokenPayload,
    None,
}

/// Resolve the acting candidate's identifier.
///
/// Returns the anonymous (empty) id when no source yields one.
pub fn resolve_candidate_id(store: &SessionStore, dev_bypass: bool) -> CandidateId {
    resolve_identity(store, dev_bypass).0
}

/// Resolve the candidate id together with the source that produced it.
pub fn resolve_identity(store: &SessionStore, dev_bypass: bool) -> (CandidateId, IdentitySource) {
    if dev_bypass {
        return (
            CandidateId::new(DEV_CANDIDATE_ID),
            IdentitySource::DevBypass,
        );
    }

    for key in DIRECT_KEYS {
        if let Some(value) = store.get(key).filter(|v| !v.is_empty()) {
            return (CandidateId::new(value), IdentitySource::DirectKey(key.into()));
        }
    }

    for key in OBJECT_KEYS {
        if let Some(raw) = store.get(key) {
            if let Some(id) = id_from_json(&raw) {
                return (CandidateId::new(id), IdentitySource::SessionObject(key.into()));
            }
        }
    }

    if let Some(token) = store.get(TOKEN_KEY) {
        if let Some(id) = id_from_token(&token) {
            return (CandidateId::new(id), IdentitySource::TokenPayload);
        }
    }

    (CandidateId::anonymous(), IdentitySource::None)
}

fn id_from_json(raw: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(raw).ok()?;
    id_from_claims(&parsed)
}

/// Extract the identifier from a three-part bearer token without verifying
/// the signature. The payload is only trusted as a last-resort hint; the
/// backend re-checks the token on every request.
fn id_from_token(token: &str) -> Option<String> {
    let mut parts = token.split('.');
    let _header = parts.next()?;
    let payload = parts.next()?;
    parts.next()?;

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;
    id_from_claims(&claims)
}

fn id_from_claims(claims: &Value) -> Option<String> {
    ID_FIELDS.iter().find_map(|field| {
        match claims.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    })
}
