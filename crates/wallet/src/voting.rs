use chrono::NaiveDateTime;
use shared::models::AccountRecord;

use crate::asset::Asset;
use crate::dynamic_props::DynamicProps;
use crate::vesting::vests_to_rshares;

/// Seconds for voting mana to regenerate from empty to full
pub const VOTE_REGENERATION_SECONDS: f64 = 432_000.0;

fn vests(raw: &str) -> f64 {
    Asset::amount_or_zero(raw)
}

/// Vests that count toward voting: own plus received, minus delegated.
pub fn effective_vests(account: &AccountRecord) -> f64 {
    vests(&account.vesting_shares) + vests(&account.received_vesting_shares)
        - vests(&account.delegated_vesting_shares)
}

/// Current voting power in percent (0-100), regenerating linearly from the
/// last manabar update.
pub fn voting_power(account: &AccountRecord, now: NaiveDateTime) -> f64 {
    let total_shares = effective_vests(account) - vests(&account.vesting_withdraw_rate);
    let max_mana = total_shares * 1e6;
    if max_mana <= 0.0 {
        return 0.0;
    }

    let elapsed = (now.and_utc().timestamp() - account.voting_manabar.last_update_time).max(0) as f64;
    let current_mana =
        (account.voting_manabar.current_mana + elapsed * max_mana / VOTE_REGENERATION_SECONDS).min(max_mana);

    (current_mana * 10_000.0 / max_mana) / 100.0
}

/// Stable-asset value of a vote.
///
/// `voting_power` and `weight` are basis points (10000 = 100%). Yields 0
/// when the reward fund has no recent claims.
pub fn vote_value(account: &AccountRecord, props: &DynamicProps, voting_power: f64, weight: f64) -> f64 {
    if props.fund_recent_claims == 0.0 {
        return 0.0;
    }
    let rshares = vests_to_rshares(effective_vests(account), voting_power, weight);
    (rshares / props.fund_recent_claims) * props.fund_reward_balance * props.price_per_liquid()
}
