//! Notification events emitted by the token ledger
//!
//! Every successful mutation returns its event to the caller. Delivery to
//! log/indexing collaborators is the hosting environment's concern; the
//! ledger itself never consumes these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Emitted on every successful balance-moving operation (direct or delegated)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub value: u128,
    pub timestamp: DateTime<Utc>,
}

/// Emitted on every successful allowance update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub spender: Address,
    pub value: u128,
    pub timestamp: DateTime<Utc>,
}
