//! Wallet derivations for a social blockchain account.
//!
//! Turns raw account records, network constants and account history into
//! balances, power-down state, APR, payout breakdowns and display-ready
//! history rows. Everything outside `source` and `service` is synchronous
//! and pure.

pub mod apr;
pub mod asset;
pub mod datetime;
pub mod dynamic_props;
pub mod entry_payout;
pub mod error;
pub mod format;
pub mod interest;
pub mod service;
pub mod snapshot;
pub mod source;
pub mod transactions;
pub mod vesting;
pub mod voting;

pub use apr::{compute_apr, compute_apr_with, current_inflation_rate};
pub use asset::{parse_asset, Asset};
pub use dynamic_props::DynamicProps;
pub use entry_payout::{compute_entry_payout, compute_entry_payout_with, EntryPayoutBreakdown};
pub use error::{ParseError, WalletError, WalletResult};
pub use interest::{estimate_savings_interest, SavingsInterest};
pub use service::WalletService;
pub use snapshot::{build_wallet_snapshot, LoadStatus, WalletSnapshot};
pub use source::{ChainDataSource, DynamicPropsCache};
pub use transactions::{classify_transactions, DisplayRecord, TransactionFormatter, TransactionRow};
pub use vesting::{liquid_to_vests, vests_to_liquid, vests_to_rshares};
pub use voting::{vote_value, voting_power};
