//! # Types
//!
//! A certificate is split the same way projects are:
//!
//! - [`Certificate`]: the attested metadata, written once by the auditor and
//!   never mutated afterwards.
//! - The current holder, stored under its own key and rewritten on transfer.
//!
//! Metadata therefore stays bound to the certificate id no matter how many
//! times ownership changes hands.

use soroban_sdk::{contracttype, Address, String};

/// Everything the auditor supplies when verifying a project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateRequest {
    /// Off-chain metadata location (e.g. an IPFS URI).
    pub uri: String,
    pub project_name: String,
    /// First holder of the certificate; recorded as the project owner.
    pub owner: Address,
    /// Credits attested by the audit.
    pub credits: i128,
    pub location: String,
    pub issued_at: u64,
    pub expires_at: u64,
    pub reduction_method: String,
    /// Project id in the project registry.
    pub project_id: u64,
}

/// Immutable verification record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    pub cert_id: u64,
    pub project_id: u64,
    pub project_name: String,
    pub project_owner: Address,
    pub auditor: Address,
    pub credits_attested: i128,
    pub location: String,
    pub issuance_date: u64,
    pub expiration_date: u64,
    pub reduction_method: String,
    /// Ledger timestamp at which the auditor minted the certificate.
    pub verification_date: u64,
}
