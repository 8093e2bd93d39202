//! Canonical event types emitted by the marketplace contracts.
//!
//! One indexer follows all five contracts, so the leading topic symbol alone
//! decides the kind. `transfer` and `approve` are shared by the credit ledger
//! and the share ledger; the `contract_id` column tells them apart.

use serde::{Deserialize, Serialize};

/// All recognised event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Project registered (`created`, project id topic).
    ProjectCreated,
    /// Project opened for trading (`listed`).
    ProjectListed,
    /// Project withdrawn from trading (`unlisted`).
    ProjectUnlisted,
    /// Registry admin swept creation fees (`fees_out`).
    FeesCollected,
    /// Auditor minted a verification certificate (`minted`, cert id topic).
    CertificateMinted,
    /// Certificate changed hands (`cert_xfer`).
    CertificateTransferred,
    /// Credits issued to a certified owner (`issued`).
    CreditsIssued,
    /// Credits burned for good (`retired`).
    CreditsRetired,
    /// Reduction method recorded for an owner (`method`).
    ReductionMethodSet,
    /// Fungible transfer on the credit or share ledger (`transfer`).
    Transfer,
    /// Allowance set on the credit or share ledger (`approve`).
    Approval,
    /// Pool minted liquidity shares (`mint`).
    SharesMinted,
    /// Pool burned liquidity shares (`burn`).
    SharesBurned,
    /// Pool bound to its share ledger (`lp_bound`).
    ShareLedgerBound,
    /// Value deposited into the pool (`liq_add`).
    LiquidityAdded,
    /// Credits sold to the pool (`sold`).
    CreditsSold,
    /// Credits bought from the pool (`bought`).
    CreditsBought,
    /// Provider withdrew value (`liq_wdraw`).
    LiquidityWithdrawn,
    /// Owner drained credits from the reserve (`cct_wdraw`).
    CreditsWithdrawn,
    /// An event we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProjectCreated,
            "listed" => Self::ProjectListed,
            "unlisted" => Self::ProjectUnlisted,
            "fees_out" => Self::FeesCollected,
            "minted" => Self::CertificateMinted,
            "cert_xfer" => Self::CertificateTransferred,
            "issued" => Self::CreditsIssued,
            "retired" => Self::CreditsRetired,
            "method" => Self::ReductionMethodSet,
            "transfer" => Self::Transfer,
            "approve" => Self::Approval,
            "mint" => Self::SharesMinted,
            "burn" => Self::SharesBurned,
            "lp_bound" => Self::ShareLedgerBound,
            "liq_add" => Self::LiquidityAdded,
            "sold" => Self::CreditsSold,
            "bought" => Self::CreditsBought,
            "liq_wdraw" => Self::LiquidityWithdrawn,
            "cct_wdraw" => Self::CreditsWithdrawn,
            _ => Self::Unknown,
        }
    }

    /// Short identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::ProjectListed => "project_listed",
            Self::ProjectUnlisted => "project_unlisted",
            Self::FeesCollected => "fees_collected",
            Self::CertificateMinted => "certificate_minted",
            Self::CertificateTransferred => "certificate_transferred",
            Self::CreditsIssued => "credits_issued",
            Self::CreditsRetired => "credits_retired",
            Self::ReductionMethodSet => "reduction_method_set",
            Self::Transfer => "transfer",
            Self::Approval => "approval",
            Self::SharesMinted => "shares_minted",
            Self::SharesBurned => "shares_burned",
            Self::ShareLedgerBound => "share_ledger_bound",
            Self::LiquidityAdded => "liquidity_added",
            Self::CreditsSold => "credits_sold",
            Self::CreditsBought => "credits_bought",
            Self::LiquidityWithdrawn => "liquidity_withdrawn",
            Self::CreditsWithdrawn => "credits_withdrawn",
            Self::Unknown => "unknown",
        }
    }

    /// What the second topic (if any) identifies.
    pub fn subject(&self) -> Option<SubjectKind> {
        match self {
            Self::ProjectCreated | Self::ProjectListed | Self::ProjectUnlisted => {
                Some(SubjectKind::Project)
            }
            Self::CertificateMinted | Self::CertificateTransferred => {
                Some(SubjectKind::Certificate)
            }
            _ => None,
        }
    }

    /// Payload field names holding `(actor, counterparty, amount)`.
    pub fn data_fields(&self) -> (Option<&'static str>, Option<&'static str>, Option<&'static str>) {
        match self {
            Self::ProjectCreated => (Some("owner"), None, Some("estimated_credits")),
            Self::ProjectListed | Self::ProjectUnlisted => (Some("owner"), None, None),
            Self::FeesCollected => (Some("to"), None, Some("amount")),
            Self::CertificateMinted => (Some("owner"), None, Some("credits")),
            Self::CertificateTransferred => (Some("from"), Some("to"), None),
            Self::CreditsIssued => (Some("owner"), None, Some("amount")),
            Self::CreditsRetired => (Some("holder"), None, Some("amount")),
            Self::ReductionMethodSet => (Some("owner"), None, None),
            Self::Transfer => (Some("from"), Some("to"), Some("amount")),
            Self::Approval => (Some("owner"), Some("spender"), Some("amount")),
            Self::SharesMinted => (Some("to"), None, Some("amount")),
            Self::SharesBurned => (Some("from"), None, Some("amount")),
            Self::ShareLedgerBound => (Some("share_ledger"), None, None),
            Self::LiquidityAdded => (Some("provider"), None, Some("value")),
            Self::CreditsSold => (Some("seller"), None, Some("amount")),
            Self::CreditsBought => (Some("buyer"), None, Some("amount")),
            Self::LiquidityWithdrawn => (Some("provider"), None, Some("payout")),
            Self::CreditsWithdrawn => (Some("to"), None, Some("amount")),
            Self::Unknown => (None, None, None),
        }
    }
}

/// Kind of record an event's id topic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Project,
    Certificate,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Certificate => "certificate",
        }
    }
}

/// A fully decoded marketplace event, ready to be stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketEvent {
    /// RPC event id, unique across the network. Used for idempotent inserts.
    pub event_id: String,
    pub event_type: String,
    pub subject_type: Option<String>,
    pub subject_id: Option<String>,
    pub actor: Option<String>,
    pub counterparty: Option<String>,
    /// Decimal string; amounts are `i128` on chain.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event row as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub subject_type: Option<String>,
    pub subject_id: Option<String>,
    pub actor: Option<String>,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
