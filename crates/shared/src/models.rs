use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::chain_time;

/// Accepts a JSON number or a numeric string, as the chain emits both for
/// large integers.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("not a number: {}", s))),
    }
}

// Account models
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VotingManabar {
    #[serde(deserialize_with = "number_or_string")]
    pub current_mana: f64,
    /// Unix seconds of the last mana update
    pub last_update_time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRecord {
    pub name: String,
    pub balance: String,
    pub savings_balance: String,
    #[serde(alias = "hbd_balance")]
    pub sbd_balance: String,
    #[serde(alias = "savings_hbd_balance")]
    pub savings_sbd_balance: String,
    #[serde(alias = "reward_hive_balance")]
    pub reward_steem_balance: String,
    #[serde(alias = "reward_hbd_balance")]
    pub reward_sbd_balance: String,
    #[serde(alias = "reward_vesting_hive")]
    pub reward_vesting_steem: String,
    pub reward_vesting_balance: String,
    pub vesting_shares: String,
    pub delegated_vesting_shares: String,
    pub received_vesting_shares: String,
    pub vesting_withdraw_rate: String,
    #[serde(deserialize_with = "number_or_string")]
    pub to_withdraw: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub withdrawn: f64,
    #[serde(with = "chain_time::optional")]
    pub next_vesting_withdrawal: Option<NaiveDateTime>,
    #[serde(alias = "savings_hbd_seconds", deserialize_with = "number_or_string")]
    pub savings_sbd_seconds: f64,
    #[serde(alias = "savings_hbd_seconds_last_update", with = "chain_time::optional")]
    pub savings_sbd_seconds_last_update: Option<NaiveDateTime>,
    #[serde(alias = "savings_hbd_last_interest_payment", with = "chain_time::optional")]
    pub savings_sbd_last_interest_payment: Option<NaiveDateTime>,
    pub voting_manabar: VotingManabar,
    pub post_count: u64,
}

/// Fetch state of an account. A record only exists once the fetch resolved.
#[derive(Debug, Clone)]
pub enum AccountState {
    NotLoaded { name: String },
    Loaded(Box<AccountRecord>),
}

impl AccountState {
    pub fn loaded(record: AccountRecord) -> Self {
        AccountState::Loaded(Box::new(record))
    }

    pub fn name(&self) -> &str {
        match self {
            AccountState::NotLoaded { name } => name,
            AccountState::Loaded(record) => &record.name,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, AccountState::Loaded(_))
    }

    pub fn record(&self) -> Option<&AccountRecord> {
        match self {
            AccountState::Loaded(record) => Some(record.as_ref()),
            AccountState::NotLoaded { .. } => None,
        }
    }
}

// Network-wide models
fn default_vesting_reward_percent() -> u32 {
    1500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicGlobalProperties {
    pub head_block_number: u64,
    #[serde(alias = "total_vesting_fund_hive")]
    pub total_vesting_fund_steem: String,
    pub total_vesting_shares: String,
    pub virtual_supply: String,
    #[serde(alias = "hbd_print_rate")]
    pub sbd_print_rate: u32,
    #[serde(alias = "hbd_interest_rate")]
    pub sbd_interest_rate: u32,
    #[serde(default = "default_vesting_reward_percent")]
    pub vesting_reward_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub base: String,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedHistory {
    pub current_median_history: Price,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardFund {
    #[serde(deserialize_with = "number_or_string")]
    pub recent_claims: f64,
    pub reward_balance: String,
}

// Content models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub account: String,
    /// Basis points of the author reward
    pub weight: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryRecord {
    pub author: String,
    pub permlink: String,
    pub pending_payout_value: String,
    pub promoted: String,
    pub author_payout_value: String,
    pub curator_payout_value: String,
    /// Absent on entries that never set a cap
    pub max_accepted_payout: Option<String>,
    #[serde(alias = "percent_hbd", alias = "percent_sbd")]
    pub percent_steem_dollars: u32,
    #[serde(with = "chain_time::optional")]
    pub payout_at: Option<NaiveDateTime>,
    pub is_paidout: bool,
    pub beneficiaries: Vec<Beneficiary>,
}

// Ledger history models
/// One account-history row as served by the history API, with the
/// operation payload flattened next to the envelope fields. The payload is
/// kept untyped so a single malformed row never fails a whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub num: u64,
    #[serde(rename = "type")]
    pub op_type: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub trx_id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl LedgerRecord {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        chain_time::parse(&self.timestamp)
    }
}
