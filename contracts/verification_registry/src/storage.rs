//! # Storage
//!
//! ## Instance storage
//!
//! | Key         | Type      | Description                     |
//! |-------------|-----------|---------------------------------|
//! | `Auditor`   | `Address` | Only address allowed to mint    |
//! | `CertCount` | `u64`     | Next certificate id to assign   |
//!
//! ## Persistent storage
//!
//! | Key            | Type          | Description                      |
//! |----------------|---------------|----------------------------------|
//! | `Cert(id)`     | `Certificate` | Immutable certificate metadata   |
//! | `Uri(id)`      | `String`      | Off-chain metadata URI           |
//! | `Owner(id)`    | `Address`     | Current holder                   |
//! | `Held(addr)`   | `u32`         | Certificates held by an address  |

use carbon_common::ttl::{bump_instance, bump_persistent};
use carbon_common::Error;
use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::Certificate;

const FIRST_CERT_ID: u64 = 1;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Auditor,
    CertCount,
    Cert(u64),
    Uri(u64),
    Owner(u64),
    Held(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

pub fn set_auditor(env: &Env, auditor: &Address) {
    env.storage().instance().set(&DataKey::Auditor, auditor);
    env.storage()
        .instance()
        .set(&DataKey::CertCount, &FIRST_CERT_ID);
    bump_instance(env);
}

pub fn get_auditor(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Auditor)
        .expect("auditor not set")
}

pub fn peek_cert_id(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CertCount)
        .unwrap_or(FIRST_CERT_ID)
}

pub fn get_and_increment_cert_id(env: &Env) -> Result<u64, Error> {
    let current = peek_cert_id(env);
    let next = current.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::CertCount, &next);
    Ok(current)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Write a freshly minted certificate. Never called twice for the same id.
pub fn save_certificate(env: &Env, cert: &Certificate, uri: &String) {
    let cert_key = DataKey::Cert(cert.cert_id);
    let uri_key = DataKey::Uri(cert.cert_id);
    env.storage().persistent().set(&cert_key, cert);
    env.storage().persistent().set(&uri_key, uri);
    bump_persistent(env, &cert_key);
    bump_persistent(env, &uri_key);
}

pub fn load_certificate(env: &Env, cert_id: u64) -> Option<Certificate> {
    let key = DataKey::Cert(cert_id);
    let cert: Certificate = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(cert)
}

pub fn load_uri(env: &Env, cert_id: u64) -> Option<String> {
    let key = DataKey::Uri(cert_id);
    let uri: String = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(uri)
}

pub fn load_owner(env: &Env, cert_id: u64) -> Option<Address> {
    let key = DataKey::Owner(cert_id);
    let owner: Address = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(owner)
}

pub fn save_owner(env: &Env, cert_id: u64, owner: &Address) {
    let key = DataKey::Owner(cert_id);
    env.storage().persistent().set(&key, owner);
    bump_persistent(env, &key);
}

pub fn held_count(env: &Env, owner: &Address) -> u32 {
    let key = DataKey::Held(owner.clone());
    match env.storage().persistent().get::<_, u32>(&key) {
        Some(count) => {
            bump_persistent(env, &key);
            count
        }
        None => 0,
    }
}

fn save_held_count(env: &Env, owner: &Address, count: u32) {
    let key = DataKey::Held(owner.clone());
    env.storage().persistent().set(&key, &count);
    bump_persistent(env, &key);
}

pub fn increment_held(env: &Env, owner: &Address) -> Result<(), Error> {
    let count = held_count(env, owner)
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    save_held_count(env, owner, count);
    Ok(())
}

pub fn decrement_held(env: &Env, owner: &Address) -> Result<(), Error> {
    let count = held_count(env, owner)
        .checked_sub(1)
        .ok_or(Error::InsufficientBalance)?;
    save_held_count(env, owner, count);
    Ok(())
}
