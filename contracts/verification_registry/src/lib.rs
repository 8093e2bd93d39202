//! # Verification Registry Contract
//!
//! Auditor-issued, non-fungible verification certificates. A certificate
//! attests that a registered project reduced a given amount of CO2 and binds
//! that attestation to a holder. Holding at least one certificate is what
//! entitles an address to receive carbon credits from the credit ledger.
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Bootstrap    | `__constructor(auditor)`                              |
//! | Verification | [`VerificationRegistry::mint_certificate`]            |
//! | Ownership    | [`VerificationRegistry::transfer`]                    |
//! | Queries      | `owner_of`, `details_of`, `token_uri`, `is_verified`, `balance`, `current_id` |

#![no_std]

use carbon_common::Error;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod events;
mod storage;
mod types;


pub use events::{CertificateMinted, CertificateTransferred};
pub use types::{Certificate, CertificateRequest};

const NAME: &str = "ProjectNFT";
const SYMBOL: &str = "PJNFT";

#[contract]
pub struct VerificationRegistry;

#[contractimpl]
impl VerificationRegistry {
    /// The auditor is fixed for the lifetime of the contract.
    pub fn __constructor(env: Env, auditor: Address) {
        storage::set_auditor(&env, &auditor);
    }

    /// Mint a certificate for `request.owner`. Auditor only.
    ///
    /// Certificate ids are assigned sequentially from 1. An owner may hold any
    /// number of certificates.
    pub fn mint_certificate(
        env: Env,
        caller: Address,
        request: CertificateRequest,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let auditor = storage::get_auditor(&env);
        if caller != auditor {
            return Err(Error::NotAuditor);
        }
        if request.owner == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }
        if request.credits < 0 {
            return Err(Error::InvalidAmount);
        }

        let cert_id = storage::get_and_increment_cert_id(&env)?;
        let cert = Certificate {
            cert_id,
            project_id: request.project_id,
            project_name: request.project_name.clone(),
            project_owner: request.owner.clone(),
            auditor,
            credits_attested: request.credits,
            location: request.location,
            issuance_date: request.issued_at,
            expiration_date: request.expires_at,
            reduction_method: request.reduction_method,
            verification_date: env.ledger().timestamp(),
        };

        storage::save_certificate(&env, &cert, &request.uri);
        storage::save_owner(&env, cert_id, &request.owner);
        storage::increment_held(&env, &request.owner)?;

        events::emit_certificate_minted(
            &env,
            cert_id,
            request.owner,
            request.project_name,
            request.credits,
        );
        Ok(cert_id)
    }

    /// Move certificate `cert_id` from `from` to `to`. The metadata does not change.
    pub fn transfer(env: Env, from: Address, to: Address, cert_id: u64) -> Result<(), Error> {
        from.require_auth();
        let owner = storage::load_owner(&env, cert_id).ok_or(Error::CertificateNotFound)?;
        if owner != from {
            return Err(Error::NotOwner);
        }
        if to == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }

        storage::decrement_held(&env, &from)?;
        storage::increment_held(&env, &to)?;
        storage::save_owner(&env, cert_id, &to);

        events::emit_certificate_transferred(&env, cert_id, from, to);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner_of(env: Env, cert_id: u64) -> Result<Address, Error> {
        storage::load_owner(&env, cert_id).ok_or(Error::CertificateNotFound)
    }

    pub fn details_of(env: Env, cert_id: u64) -> Result<Certificate, Error> {
        storage::load_certificate(&env, cert_id).ok_or(Error::CertificateNotFound)
    }

    pub fn token_uri(env: Env, cert_id: u64) -> Result<String, Error> {
        storage::load_uri(&env, cert_id).ok_or(Error::CertificateNotFound)
    }

    /// Every minted certificate is verified by construction.
    pub fn is_verified(env: Env, cert_id: u64) -> bool {
        storage::load_certificate(&env, cert_id).is_some()
    }

    /// Number of certificates held by `owner`.
    pub fn balance(env: Env, owner: Address) -> u32 {
        storage::held_count(&env, &owner)
    }

    /// The id the next mint will assign.
    pub fn current_id(env: Env) -> u64 {
        storage::peek_cert_id(&env)
    }

    pub fn auditor(env: Env) -> Address {
        storage::get_auditor(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }
}
