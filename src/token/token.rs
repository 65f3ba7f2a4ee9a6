//! ERC-20 style fungible-token ledger
//!
//! A single-asset ledger of per-account balances and per-owner/per-spender
//! allowances. All mutation goes through `transfer`, `approve`, and
//! `transfer_from`; each operation validates every precondition before
//! touching any state, so a failed call leaves the ledger unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::address::Address;
use super::events::{ApprovalEvent, TransferEvent};

// =============================================================================
// Constants
// =============================================================================

/// Number of base units in one whole display unit (10^18)
pub const BASE_UNITS_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Fixed decimal scale of every ledger instance
pub const DECIMALS: u8 = 18;

/// Number of transfer events retained in the in-memory history
const TRANSFER_HISTORY_LIMIT: usize = 100;

// =============================================================================
// Error Types
// =============================================================================

/// Ledger errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid recipient: the zero address cannot receive funds")]
    InvalidRecipient,
    #[error("Invalid spender: the zero address cannot be approved")]
    InvalidSpender,
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: u128, need: u128 },
    #[error("Insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance { have: u128, need: u128 },
    #[error("Invalid name: must not be empty")]
    InvalidName,
    #[error("Invalid symbol: must not be empty")]
    InvalidSymbol,
    #[error("Invalid supply: {0} whole units exceed the base-unit range")]
    SupplyOverflow(u128),
}

// =============================================================================
// Metadata
// =============================================================================

/// Token metadata (immutable after deployment)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenMetadata {
    /// Display name (e.g., "Aura Lite")
    pub name: String,
    /// Display symbol (e.g., "ALIT")
    pub symbol: String,
    /// Decimal places, always 18
    pub decimals: u8,
    /// Total supply in base units, fixed at deployment
    pub total_supply: u128,
    /// Account credited with the full supply at deployment
    pub deployer: Address,
    /// Timestamp of deployment
    pub created_at: DateTime<Utc>,
}

impl TokenMetadata {
    /// Create new token metadata with validation
    ///
    /// The supply is given in whole display units and scaled to base units.
    pub fn new(
        name: String,
        symbol: String,
        supply_whole_units: u128,
        deployer: Address,
    ) -> Result<Self, TokenError> {
        if name.is_empty() {
            return Err(TokenError::InvalidName);
        }

        if symbol.is_empty() {
            return Err(TokenError::InvalidSymbol);
        }

        let total_supply = supply_whole_units
            .checked_mul(BASE_UNITS_PER_TOKEN)
            .ok_or(TokenError::SupplyOverflow(supply_whole_units))?;

        Ok(Self {
            name,
            symbol,
            decimals: DECIMALS,
            total_supply,
            deployer,
            created_at: Utc::now(),
        })
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// A fungible-token ledger for a single deployed asset
///
/// Operations apply in the order they are called, one at a time; there are
/// no internal suspension points. A multi-threaded host must serialize
/// access externally (e.g., a mutex around the whole ledger).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    metadata: TokenMetadata,
    /// Balances: account -> base units. Absent key == 0.
    balances: HashMap<Address, u128>,
    /// Allowances: owner -> (spender -> remaining base units). Absent == 0.
    allowances: HashMap<Address, HashMap<Address, u128>>,
    /// Recent transfer events (last 100)
    transfer_history: Vec<TransferEvent>,
}

impl Token {
    /// Deploy a new ledger with the full supply credited to the deployer
    ///
    /// `supply_whole_units` is scaled by 10^18; all other balances and all
    /// allowances start at zero.
    pub fn deploy(
        name: String,
        symbol: String,
        supply_whole_units: u128,
        deployer: Address,
    ) -> Result<Self, TokenError> {
        let metadata = TokenMetadata::new(name, symbol, supply_whole_units, deployer)?;

        let mut balances = HashMap::new();
        balances.insert(deployer, metadata.total_supply);

        log::info!(
            "Token deployed: {} ({}) supply {} credited to {}",
            metadata.name,
            metadata.symbol,
            metadata.total_supply,
            deployer
        );

        Ok(Self {
            metadata,
            balances,
            allowances: HashMap::new(),
            transfer_history: Vec::new(),
        })
    }

    // =========================================================================
    // View Functions
    // =========================================================================

    /// Get token name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Get token symbol
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Get decimal places (always 18)
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// Get total supply in base units
    pub fn total_supply(&self) -> u128 {
        self.metadata.total_supply
    }

    /// Get the full immutable metadata
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Get balance of an account in base units
    pub fn balance_of(&self, account: Address) -> u128 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Get the remaining amount `spender` may move out of `owner`'s balance
    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.allowances
            .get(&owner)
            .and_then(|spenders| spenders.get(&spender))
            .copied()
            .unwrap_or(0)
    }

    /// Get all accounts with a non-zero balance
    pub fn holders(&self) -> Vec<(Address, u128)> {
        self.balances
            .iter()
            .filter(|(_, &balance)| balance > 0)
            .map(|(account, &balance)| (*account, balance))
            .collect()
    }

    /// Get the number of accounts with a non-zero balance
    pub fn holder_count(&self) -> usize {
        self.balances.values().filter(|&&balance| balance > 0).count()
    }

    /// Sum of all balances; equals `total_supply` after every operation
    pub fn total_held(&self) -> u128 {
        self.balances.values().sum()
    }

    /// Recent transfer events (most recent last)
    pub fn transfer_history(&self) -> &[TransferEvent] {
        &self.transfer_history
    }

    // =========================================================================
    // Mutating Functions
    // =========================================================================

    /// Transfer tokens from the caller's balance to `to`
    ///
    /// Fails with `InvalidRecipient` when `to` is the zero address and with
    /// `InsufficientBalance` when the caller holds less than `amount`. A
    /// failed call changes no state.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: u128,
    ) -> Result<TransferEvent, TokenError> {
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }

        let caller_balance = self.balance_of(caller);
        if caller_balance < amount {
            return Err(TokenError::InsufficientBalance {
                have: caller_balance,
                need: amount,
            });
        }

        self.move_balance(caller, to, amount);

        let event = TransferEvent {
            from: caller,
            to,
            value: amount,
            timestamp: Utc::now(),
        };
        self.record_transfer(event.clone());

        log::debug!("transfer {} -> {}: {}", caller, to, amount);

        Ok(event)
    }

    /// Set the allowance of `spender` over the caller's balance
    ///
    /// Overwrites any previous allowance (an amount of 0 revokes). Fails
    /// with `InvalidSpender` when `spender` is the zero address.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: u128,
    ) -> Result<ApprovalEvent, TokenError> {
        if spender.is_zero() {
            return Err(TokenError::InvalidSpender);
        }

        self.allowances
            .entry(caller)
            .or_default()
            .insert(spender, amount);

        log::debug!("approve {} -> {}: {}", caller, spender, amount);

        Ok(ApprovalEvent {
            owner: caller,
            spender,
            value: amount,
            timestamp: Utc::now(),
        })
    }

    /// Transfer tokens out of `from`'s balance on the strength of an
    /// allowance previously granted to the caller
    ///
    /// Preconditions are checked in order: `to` must not be the zero address
    /// (`InvalidRecipient`), the caller's allowance from `from` must cover
    /// `amount` (`InsufficientAllowance`), and `from`'s balance must cover
    /// `amount` (`InsufficientBalance`). All checks run before any mutation;
    /// on success the allowance is decremented and the balance moved in one
    /// indivisible step. Only a `Transfer` event is emitted; the allowance
    /// decrement emits no event of its own.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<TransferEvent, TokenError> {
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }

        let current_allowance = self.allowance(from, caller);
        if current_allowance < amount {
            return Err(TokenError::InsufficientAllowance {
                have: current_allowance,
                need: amount,
            });
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance {
                have: from_balance,
                need: amount,
            });
        }

        // All preconditions hold; apply the allowance decrement and the
        // balance move with no checks in between.
        if let Some(spenders) = self.allowances.get_mut(&from) {
            if let Some(remaining) = spenders.get_mut(&caller) {
                *remaining -= amount;
            }
        }

        self.move_balance(from, to, amount);

        let event = TransferEvent {
            from,
            to,
            value: amount,
            timestamp: Utc::now(),
        };
        self.record_transfer(event.clone());

        log::debug!("transfer_from {} -> {} by {}: {}", from, to, caller, amount);

        Ok(event)
    }

    // Preconditions already checked by the caller; cannot underflow. A
    // self-transfer debits and credits the same entry and nets to zero.
    fn move_balance(&mut self, from: Address, to: Address, amount: u128) {
        *self.balances.entry(from).or_insert(0) -= amount;
        *self.balances.entry(to).or_insert(0) += amount;
    }

    fn record_transfer(&mut self, event: TransferEvent) {
        self.transfer_history.push(event);
        if self.transfer_history.len() > TRANSFER_HISTORY_LIMIT {
            self.transfer_history.remove(0);
        }
    }
}
