use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::config::SymbolConfig;
use shared::models::{Beneficiary, EntryRecord};

use crate::asset::Asset;
use crate::dynamic_props::DynamicProps;
use crate::format::format_asset_amount;

/// Payout picture of a post or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPayoutBreakdown {
    pub pending_payout: f64,
    pub promoted: f64,
    pub author_payout: f64,
    pub curator_payout: f64,
    /// `None` when the entry carries no payout cap
    pub max_payout: Option<f64>,
    pub total_payout: f64,
    /// Capped at `max_payout` when the limit is hit
    pub shown_payout: f64,
    pub payout_limit_hit: bool,
    /// Author declined all rewards
    pub is_declined: bool,
    /// All rewards are paid as staked asset
    pub full_power: bool,
    pub is_paidout: bool,
    pub payout_at: Option<NaiveDateTime>,

    /// Fraction of the pending payout requested in the stable asset
    pub percent_steem_dollars: f64,
    pub pending_payout_sbd: f64,
    pub pending_payout_sp: f64,
    pub pending_payout_printed_sbd: f64,
    pub pending_payout_printed_steem: f64,

    /// Formatted non-zero components of the pending payout
    pub breakdown: Vec<String>,
    pub beneficiaries: Vec<Beneficiary>,
}

fn amount(raw: &str) -> f64 {
    Asset::amount_or_zero(raw)
}

fn div_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn compute_entry_payout_with(
    entry: &EntryRecord,
    props: &DynamicProps,
    symbols: &SymbolConfig,
) -> EntryPayoutBreakdown {
    let pending_payout = amount(&entry.pending_payout_value);
    let promoted = amount(&entry.promoted);
    let author_payout = amount(&entry.author_payout_value);
    let curator_payout = amount(&entry.curator_payout_value);
    let max_payout = entry
        .max_accepted_payout
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(amount);

    let total_payout = pending_payout + author_payout + curator_payout;
    let payout_limit_hit = max_payout.is_some_and(|max| total_payout >= max);
    let shown_payout = match max_payout {
        Some(max) if payout_limit_hit && max > 0.0 => max,
        _ => total_payout,
    };

    // percent_steem_dollars is doubled basis points
    let percent_steem_dollars = entry.percent_steem_dollars as f64 / 20_000.0;
    let price_per_liquid = props.price_per_liquid();

    let pending_payout_sbd = pending_payout * percent_steem_dollars;
    let pending_payout_sp = div_or_zero(pending_payout - pending_payout_sbd, price_per_liquid);
    let pending_payout_printed_sbd = pending_payout_sbd * (props.sbd_print_rate as f64 / 10_000.0);
    let pending_payout_printed_steem =
        div_or_zero(pending_payout_sbd - pending_payout_printed_sbd, price_per_liquid);

    let mut breakdown = Vec::with_capacity(3);
    if pending_payout_printed_sbd > 0.0 {
        breakdown.push(format_asset_amount(pending_payout_printed_sbd, &symbols.stable));
    }
    if pending_payout_printed_steem > 0.0 {
        breakdown.push(format_asset_amount(pending_payout_printed_steem, &symbols.liquid));
    }
    if pending_payout_sp > 0.0 {
        breakdown.push(format_asset_amount(pending_payout_sp, &symbols.staked));
    }

    EntryPayoutBreakdown {
        pending_payout,
        promoted,
        author_payout,
        curator_payout,
        max_payout,
        total_payout,
        shown_payout,
        payout_limit_hit,
        is_declined: max_payout == Some(0.0),
        full_power: entry.percent_steem_dollars == 0,
        is_paidout: entry.is_paidout,
        payout_at: entry.payout_at,
        percent_steem_dollars,
        pending_payout_sbd,
        pending_payout_sp,
        pending_payout_printed_sbd,
        pending_payout_printed_steem,
        breakdown,
        beneficiaries: entry.beneficiaries.clone(),
    }
}

pub fn compute_entry_payout(entry: &EntryRecord, props: &DynamicProps) -> EntryPayoutBreakdown {
    compute_entry_payout_with(entry, props, &SymbolConfig::default())
}
