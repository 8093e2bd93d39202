//! # Events
//!
//! | Topic                  | Data                       |
//! |------------------------|----------------------------|
//! | `("minted", cert_id)`  | [`CertificateMinted`]      |
//! | `("cert_xfer", cert_id)` | [`CertificateTransferred`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateMinted {
    pub cert_id: u64,
    pub owner: Address,
    pub project_name: String,
    pub credits: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateTransferred {
    pub cert_id: u64,
    pub from: Address,
    pub to: Address,
}

pub fn emit_certificate_minted(
    env: &Env,
    cert_id: u64,
    owner: Address,
    project_name: String,
    credits: i128,
) {
    env.events().publish(
        (symbol_short!("minted"), cert_id),
        CertificateMinted {
            cert_id,
            owner,
            project_name,
            credits,
        },
    );
}

pub fn emit_certificate_transferred(env: &Env, cert_id: u64, from: Address, to: Address) {
    env.events().publish(
        (symbol_short!("cert_xfer"), cert_id),
        CertificateTransferred { cert_id, from, to },
    );
}
