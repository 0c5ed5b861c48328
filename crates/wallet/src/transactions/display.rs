use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Reward,
    Transfer,
    PowerUp,
    PowerDown,
    Delegation,
    Savings,
    Cancel,
    Recurrent,
    Market,
    Conversion,
    Interest,
    Producer,
    Proposal,
    Post,
    Vote,
    Witness,
}

/// How an operation moved value relative to the account whose history is
/// being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
    SelfTransfer,
}

impl Direction {
    pub fn between(from: &str, to: &str, account: &str) -> Option<Self> {
        match (from == account, to == account) {
            (true, true) => Some(Direction::SelfTransfer),
            (true, false) => Some(Direction::Outgoing),
            (false, true) => Some(Direction::Incoming),
            (false, false) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparts {
    pub from: String,
    pub to: String,
}

/// Link target for operations tied to a post or comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
    pub author: String,
    pub permlink: String,
}

impl EntryRef {
    pub fn new(author: &str, permlink: &str) -> Self {
        Self {
            author: author.to_string(),
            permlink: permlink.to_string(),
        }
    }

    pub fn path(&self) -> String {
        format!("@{}/{}", self.author, self.permlink)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    pub counterparts: Option<Counterparts>,
    pub entry: Option<EntryRef>,
    pub memo: Option<String>,
    /// Extra short lines: request ids, schedules, vote choices
    pub notes: Vec<String>,
}

impl Details {
    pub fn is_empty(&self) -> bool {
        self.counterparts.is_none() && self.entry.is_none() && self.memo.is_none() && self.notes.is_empty()
    }
}

/// Display-ready form of one ledger operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub icon: Icon,
    pub numbers: Vec<String>,
    pub details: Details,
    pub direction: Option<Direction>,
}

impl DisplayRecord {
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            numbers: Vec::new(),
            details: Details::default(),
            direction: None,
        }
    }

    pub fn number(mut self, value: String) -> Self {
        self.numbers.push(value);
        self
    }

    pub fn numbers(mut self, values: impl IntoIterator<Item = String>) -> Self {
        self.numbers.extend(values);
        self
    }

    /// Sets the counterparts and the direction as seen from `account`
    pub fn between(mut self, from: &str, to: &str, account: &str) -> Self {
        self.direction = Direction::between(from, to, account);
        self.details.counterparts = Some(Counterparts {
            from: from.to_string(),
            to: to.to_string(),
        });
        self
    }

    pub fn entry(mut self, author: &str, permlink: &str) -> Self {
        self.details.entry = Some(EntryRef::new(author, permlink));
        self
    }

    /// Empty memos are dropped
    pub fn memo(mut self, memo: &str) -> Self {
        if !memo.is_empty() {
            self.details.memo = Some(memo.to_string());
        }
        self
    }

    pub fn note(mut self, note: String) -> Self {
        self.details.notes.push(note);
        self
    }
}

/// One row of an account history page. `display` is `None` for operation
/// types the formatter does not render and for rows that failed to parse,
/// so rows stay aligned with the source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub num: u64,
    pub op_type: String,
    pub timestamp: Option<NaiveDateTime>,
    pub trx_id: String,
    pub display: Option<DisplayRecord>,
}

impl TransactionRow {
    pub fn is_placeholder(&self) -> bool {
        self.display.is_none()
    }
}
