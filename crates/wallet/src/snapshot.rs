use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::models::{AccountRecord, AccountState};
use tracing::debug;

use crate::asset::Asset;
use crate::dynamic_props::DynamicProps;
use crate::vesting::vests_to_liquid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loaded,
}

/// Balances, rewards and power-down state derived from one account record.
///
/// Vesting fields are in VESTS; `*_steem`, `total_*` and `estimated_value`
/// are liquid or stable units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub status: LoadStatus,

    pub balance: f64,
    pub saving_balance: f64,
    pub sbd_balance: f64,
    pub saving_balance_sbd: f64,
    pub converting_sbd: f64,

    pub reward_steem_balance: f64,
    pub reward_sbd_balance: f64,
    pub reward_vesting_steem: f64,
    pub has_unclaimed_rewards: bool,

    pub is_powering_down: bool,
    pub next_vesting_withdrawal_date: Option<NaiveDateTime>,
    pub next_vesting_shares_withdrawal: f64,
    pub next_vesting_shares_withdrawal_steem: f64,
    /// Vests still scheduled to be withdrawn across all remaining installments
    pub vesting_shares_withdrawal_remaining: f64,

    pub vesting_shares: f64,
    pub vesting_shares_delegated: f64,
    pub vesting_shares_received: f64,
    pub vesting_shares_total: f64,
    pub vesting_shares_available: f64,

    pub total_steem: f64,
    pub total_sp: f64,
    pub total_sbd: f64,
    pub estimated_value: f64,
}

impl WalletSnapshot {
    pub fn not_loaded() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    /// Effective vesting shares available for voting
    pub fn voting_vests(&self) -> f64 {
        self.vesting_shares - self.vesting_shares_delegated + self.vesting_shares_received
    }
}

/// Derive the wallet for `account`. An account that has not been fetched
/// yields the zeroed `NotLoaded` snapshot. `converting_amount` is stable
/// currency locked in pending conversions and counts toward `total_sbd`.
pub fn build_wallet_snapshot(
    account: &AccountState,
    props: &DynamicProps,
    converting_amount: Option<f64>,
) -> WalletSnapshot {
    match account.record() {
        Some(record) => from_record(record, props, converting_amount.unwrap_or(0.0)),
        None => {
            debug!("Account {} not loaded, returning empty wallet", account.name());
            WalletSnapshot::not_loaded()
        }
    }
}

fn amount(raw: &str) -> f64 {
    Asset::amount_or_zero(raw)
}

fn from_record(account: &AccountRecord, props: &DynamicProps, converting_sbd: f64) -> WalletSnapshot {
    let rate = props.steem_per_mvests;

    let balance = amount(&account.balance);
    let saving_balance = amount(&account.savings_balance);
    let sbd_balance = amount(&account.sbd_balance);
    let saving_balance_sbd = amount(&account.savings_sbd_balance);

    let reward_steem_balance = amount(&account.reward_steem_balance);
    let reward_sbd_balance = amount(&account.reward_sbd_balance);
    let reward_vesting_steem = amount(&account.reward_vesting_steem);
    let has_unclaimed_rewards =
        reward_steem_balance > 0.0 || reward_sbd_balance > 0.0 || reward_vesting_steem > 0.0;

    let vesting_shares = amount(&account.vesting_shares);
    let vesting_shares_delegated = amount(&account.delegated_vesting_shares);
    let vesting_shares_received = amount(&account.received_vesting_shares);

    let next_vesting_withdrawal_date = account.next_vesting_withdrawal;
    let is_powering_down = next_vesting_withdrawal_date.is_some();

    // to_withdraw and withdrawn are in integer satoshi units
    let withdrawal_remaining = (account.to_withdraw - account.withdrawn) / 1e6;

    let (next_vesting_shares_withdrawal, vesting_shares_withdrawal_remaining) = if is_powering_down {
        // the last installment can be smaller than the per-period rate
        let rate_per_period = amount(&account.vesting_withdraw_rate);
        (rate_per_period.min(withdrawal_remaining), withdrawal_remaining)
    } else {
        (0.0, 0.0)
    };

    let next_vesting_shares_withdrawal_steem = if is_powering_down {
        vests_to_liquid(next_vesting_shares_withdrawal, rate)
    } else {
        0.0
    };

    let vesting_shares_total = vesting_shares - vesting_shares_delegated + vesting_shares_received
        - next_vesting_shares_withdrawal;

    let vesting_shares_available = if is_powering_down {
        vesting_shares - withdrawal_remaining - vesting_shares_delegated
    } else {
        vesting_shares - vesting_shares_delegated
    };

    let total_sp = vests_to_liquid(vesting_shares, rate);
    let total_steem = total_sp + balance + saving_balance;
    let total_sbd = sbd_balance + saving_balance_sbd + converting_sbd;
    let estimated_value = total_steem * props.price_per_liquid() + total_sbd;

    debug!(
        "Wallet for {}: {:.3} STEEM total, {:.3} SBD total, estimated {:.3}",
        account.name, total_steem, total_sbd, estimated_value
    );

    WalletSnapshot {
        status: LoadStatus::Loaded,
        balance,
        saving_balance,
        sbd_balance,
        saving_balance_sbd,
        converting_sbd,
        reward_steem_balance,
        reward_sbd_balance,
        reward_vesting_steem,
        has_unclaimed_rewards,
        is_powering_down,
        next_vesting_withdrawal_date,
        next_vesting_shares_withdrawal,
        next_vesting_shares_withdrawal_steem,
        vesting_shares_withdrawal_remaining,
        vesting_shares,
        vesting_shares_delegated,
        vesting_shares_received,
        vesting_shares_total,
        vesting_shares_available,
        total_steem,
        total_sp,
        total_sbd,
        estimated_value,
    }
}
