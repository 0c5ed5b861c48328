use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::models::AccountRecord;

use crate::asset::Asset;
use crate::datetime::{day_diff, second_diff};
use crate::dynamic_props::DynamicProps;

const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.0;

/// Interest is paid at most once per this many days
pub const INTEREST_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInterest {
    pub last_payment: Option<NaiveDateTime>,
    pub days_since_payment: i64,
    pub remaining_days: i64,
    /// Stable-asset interest accrued since the last payment
    pub estimated: f64,
}

/// Estimate the stable-asset savings interest accrued so far.
///
/// The chain accumulates `savings_sbd_seconds` (balance in thousandths
/// times seconds) up to `savings_sbd_seconds_last_update`; the balance held
/// since then is added on top.
pub fn estimate_savings_interest(
    account: &AccountRecord,
    props: &DynamicProps,
    now: NaiveDateTime,
) -> SavingsInterest {
    let last_payment = account.savings_sbd_last_interest_payment;
    let since = last_payment.or(account.savings_sbd_seconds_last_update);
    let days_since_payment = since.map(|d| day_diff(d, now)).unwrap_or(0);

    let seconds_since_update = account
        .savings_sbd_seconds_last_update
        .map(|d| second_diff(d, now).max(0))
        .unwrap_or(0);

    let balance = Asset::amount_or_zero(&account.savings_sbd_balance);
    let pending_seconds = balance * seconds_since_update as f64;
    let seconds_to_estimate = account.savings_sbd_seconds / 1000.0 + pending_seconds;
    let estimated = (seconds_to_estimate / SECONDS_PER_YEAR) * (props.sbd_interest_rate as f64 / 10_000.0);

    SavingsInterest {
        last_payment,
        days_since_payment,
        remaining_days: (INTEREST_PERIOD_DAYS - days_since_payment).max(0),
        estimated,
    }
}
