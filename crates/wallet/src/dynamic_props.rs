use serde::{Deserialize, Serialize};
use shared::models::{DynamicGlobalProperties, FeedHistory, RewardFund};
use tracing::debug;

use crate::asset::Asset;

/// Network-wide constants every derivation reads. Built once per refresh
/// and never mutated by the derivations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicProps {
    /// Liquid units per million vesting shares
    pub steem_per_mvests: f64,
    /// Median feed price base (stable asset)
    pub base: f64,
    /// Median feed price quote (liquid asset)
    pub quote: f64,
    pub fund_recent_claims: f64,
    pub fund_reward_balance: f64,
    /// Basis points of stable-asset payouts actually printed
    pub sbd_print_rate: u32,
    pub sbd_interest_rate: u32,
    pub head_block: u64,
    pub total_vesting_fund: f64,
    pub total_vesting_shares: f64,
    pub virtual_supply: f64,
    pub vesting_reward_percent: u32,
}

impl DynamicProps {
    pub fn from_chain(
        globals: &DynamicGlobalProperties,
        feed: &FeedHistory,
        reward_fund: &RewardFund,
    ) -> Self {
        let total_vesting_fund = Asset::amount_or_zero(&globals.total_vesting_fund_steem);
        let total_vesting_shares = Asset::amount_or_zero(&globals.total_vesting_shares);

        let steem_per_mvests = if total_vesting_shares > 0.0 {
            (total_vesting_fund / total_vesting_shares) * 1e6
        } else {
            0.0
        };

        let props = Self {
            steem_per_mvests,
            base: Asset::amount_or_zero(&feed.current_median_history.base),
            quote: Asset::amount_or_zero(&feed.current_median_history.quote),
            fund_recent_claims: reward_fund.recent_claims,
            fund_reward_balance: Asset::amount_or_zero(&reward_fund.reward_balance),
            sbd_print_rate: globals.sbd_print_rate,
            sbd_interest_rate: globals.sbd_interest_rate,
            head_block: globals.head_block_number,
            total_vesting_fund,
            total_vesting_shares,
            virtual_supply: Asset::amount_or_zero(&globals.virtual_supply),
            vesting_reward_percent: globals.vesting_reward_percent,
        };

        debug!(
            "Dynamic props at block {}: {:.3} per MVESTS, price {:.3}",
            props.head_block,
            props.steem_per_mvests,
            props.price_per_liquid()
        );

        props
    }

    /// Stable-asset price of one liquid unit (`base / quote`), 0 without a feed.
    pub fn price_per_liquid(&self) -> f64 {
        if self.quote == 0.0 {
            return 0.0;
        }
        self.base / self.quote
    }
}
