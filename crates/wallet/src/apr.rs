use shared::config::InflationConfig;

use crate::dynamic_props::DynamicProps;

/// Inflation percent in effect at `head_block` under `schedule`.
pub fn current_inflation_rate(head_block: u64, schedule: &InflationConfig) -> f64 {
    if schedule.decrease_blocks == 0 {
        return schedule.initial_rate.max(schedule.floor_rate);
    }
    let delta_blocks = head_block as f64 - schedule.initial_block as f64;
    let increments = delta_blocks / schedule.decrease_blocks as f64;
    let rate = schedule.initial_rate - increments * schedule.decrease_percent;
    rate.max(schedule.floor_rate)
}

/// Annualized return on staked capital with the given schedule.
///
/// `virtual_supply * inflation * vesting_reward_fraction / total_vesting_fund`;
/// an empty vesting fund yields 0.
pub fn compute_apr_with(props: &DynamicProps, schedule: &InflationConfig) -> f64 {
    if props.total_vesting_fund == 0.0 {
        return 0.0;
    }

    let inflation = current_inflation_rate(props.head_block, schedule);
    let vesting_reward_fraction = props.vesting_reward_percent as f64 / 10_000.0;

    (props.virtual_supply * inflation * vesting_reward_fraction) / props.total_vesting_fund
}

/// APR under the network's default inflation schedule.
pub fn compute_apr(props: &DynamicProps) -> f64 {
    compute_apr_with(props, &InflationConfig::default())
}
