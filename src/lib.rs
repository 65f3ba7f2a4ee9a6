//! Aura Token: a fungible-token ledger in Rust
//!
//! This crate provides a single-asset, ERC-20 style ledger featuring:
//! - Per-account balances with exact conservation of total supply
//! - Per-owner/per-spender allowances for delegated transfers
//! - Validate-then-apply mutation (a failed operation changes no state)
//! - Transfer and Approval notification events for external observers
//! - Serde-serializable state so the hosting environment can snapshot it
//!
//! The ledger expects a serialized execution model: the host applies one
//! operation at a time and supplies the caller identity explicitly. There
//! is no mint or burn; the supply is fixed at deployment.
//!
//! # Example
//!
//! ```rust
//! use aura_token::{Address, Token};
//!
//! let deployer: Address = "0x00000000000000000000000000000000000000a1"
//!     .parse()
//!     .unwrap();
//! let recipient: Address = "0x00000000000000000000000000000000000000b2"
//!     .parse()
//!     .unwrap();
//!
//! // Deploy a ledger of 10 million whole units
//! let mut token = Token::deploy(
//!     "Aura Lite".to_string(),
//!     "ALIT".to_string(),
//!     10_000_000,
//!     deployer,
//! )
//! .unwrap();
//!
//! // Move 1000 base units to the recipient
//! let event = token.transfer(deployer, recipient, 1000).unwrap();
//! assert_eq!(event.value, 1000);
//! assert_eq!(token.balance_of(recipient), 1000);
//! ```

pub mod token;

// Re-export commonly used types
pub use token::{
    Address, AddressError, ApprovalEvent, Token, TokenError, TokenMetadata, TransferEvent,
    BASE_UNITS_PER_TOKEN, DECIMALS,
};
