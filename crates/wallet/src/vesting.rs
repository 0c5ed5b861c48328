//! Conversions between vesting shares, their liquid equivalent, and vote
//! reward shares.

/// `(vests / 1e6) * rate_per_million`
pub fn vests_to_liquid(vests: f64, rate_per_million: f64) -> f64 {
    (vests / 1e6) * rate_per_million
}

/// `(liquid * 1e6) / rate_per_million`, or 0 when the rate is 0.
pub fn liquid_to_vests(liquid: f64, rate_per_million: f64) -> f64 {
    if rate_per_million == 0.0 {
        return 0.0;
    }
    (liquid * 1e6) / rate_per_million
}

/// Reward shares produced by a vote.
///
/// Vests are scaled to satoshi units, the power term is computed, then
/// applied to the scaled shares.
pub fn vests_to_rshares(vests: f64, voting_power: f64, vote_percent: f64) -> f64 {
    let vesting_shares = vests * 1e6;
    let power = (voting_power * vote_percent) / 1e4 / 50.0 + 1.0;
    (power * vesting_shares) / 1e4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vests_to_liquid() {
        // 1M vests at 500 per million is 500 liquid
        assert_eq!(vests_to_liquid(1_000_000.0, 500.0), 500.0);
        assert_eq!(vests_to_liquid(0.0, 500.0), 0.0);
    }

    #[test]
    fn test_liquid_to_vests() {
        assert_eq!(liquid_to_vests(500.0, 500.0), 1_000_000.0);
        assert_eq!(liquid_to_vests(500.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_trip() {
        let rate = 494.832;
        let vests = 123_456.789012;
        let back = liquid_to_vests(vests_to_liquid(vests, rate), rate);
        assert!((back - vests).abs() < 1e-6);
    }

    #[test]
    fn test_rshares_zero_vests() {
        assert_eq!(vests_to_rshares(0.0, 10000.0, 10000.0), 0.0);
    }

    #[test]
    fn test_rshares_full_vote() {
        // power = 10000*10000/1e4/50 + 1 = 201
        let rshares = vests_to_rshares(1.0, 10000.0, 10000.0);
        assert_eq!(rshares, 201.0 * 1e6 / 1e4);
    }

    #[test]
    fn test_rshares_keeps_unrounded_satoshi_units() {
        // 0.261327 * 1e6 lands just under 261327 and is not truncated
        assert_eq!(vests_to_rshares(0.261327, 0.0, 0.0), (0.261327 * 1e6) / 1e4);
        assert!(vests_to_rshares(0.261327, 0.0, 0.0) > 26.1326);

        assert_eq!(vests_to_rshares(0.0000015, 0.0, 0.0), (0.0000015 * 1e6) / 1e4);
    }

    #[test]
    fn test_rshares_partial_vote() {
        // power = 5000*5000/1e4/50 + 1 = 51
        let vests = 1234.567891;
        assert_eq!(vests_to_rshares(vests, 5000.0, 5000.0), (51.0 * (vests * 1e6)) / 1e4);
    }
}
