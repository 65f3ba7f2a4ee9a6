//! ERC-20 style fungible-token ledger
//!
//! Provides a single-asset ledger with:
//! - Balances per account
//! - Allowances for delegated transfers
//! - Transfer, approve, and delegated-transfer operations
//!
//! # Example
//!
//! ```ignore
//! use aura_token::token::{Address, Token};
//!
//! let deployer: Address = "0x00000000000000000000000000000000000000a1".parse()?;
//! let recipient: Address = "0x00000000000000000000000000000000000000b2".parse()?;
//!
//! // Deploy a ledger; the full supply goes to the deployer
//! let mut token = Token::deploy(
//!     "Aura Lite".to_string(),
//!     "ALIT".to_string(),
//!     10_000_000, // whole units, scaled by 10^18
//!     deployer,
//! )?;
//!
//! // Transfer tokens
//! token.transfer(deployer, recipient, 1000)?;
//!
//! // Check balance
//! let balance = token.balance_of(recipient);
//! ```

pub mod address;
pub mod events;
pub mod token;

pub use address::{Address, AddressError};
pub use events::{ApprovalEvent, TransferEvent};
pub use token::{Token, TokenError, TokenMetadata, BASE_UNITS_PER_TOKEN, DECIMALS};
