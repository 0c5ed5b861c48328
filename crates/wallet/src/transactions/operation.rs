use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::LedgerRecord;

use crate::error::WalletError;

/// A ledger operation decoded from its history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    CurationReward {
        curator: String,
        reward: String,
        comment_author: String,
        comment_permlink: String,
    },
    AuthorReward {
        author: String,
        permlink: String,
        #[serde(default, alias = "hbd_payout")]
        sbd_payout: String,
        #[serde(default, alias = "hive_payout")]
        steem_payout: String,
        #[serde(default)]
        vesting_payout: String,
    },
    CommentBenefactorReward {
        benefactor: String,
        author: String,
        permlink: String,
        #[serde(default, alias = "hbd_payout")]
        sbd_payout: String,
        #[serde(default, alias = "hive_payout")]
        steem_payout: String,
        #[serde(default)]
        vesting_payout: String,
    },
    ClaimRewardBalance {
        account: String,
        #[serde(default, alias = "reward_hbd")]
        reward_sbd: String,
        #[serde(default, alias = "reward_hive")]
        reward_steem: String,
        #[serde(default)]
        reward_vests: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        memo: String,
    },
    TransferToVesting {
        from: String,
        to: String,
        amount: String,
    },
    TransferToSavings {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        memo: String,
    },
    TransferFromSavings {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        memo: String,
        request_id: u64,
    },
    FillTransferFromSavings {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        memo: String,
        request_id: u64,
    },
    CancelTransferFromSavings {
        from: String,
        request_id: u64,
    },
    RecurrentTransfer {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        memo: String,
        /// Hours between executions
        recurrence: u32,
        executions: u32,
    },
    FillRecurrentTransfer {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        memo: String,
        remaining_executions: u32,
    },
    WithdrawVesting {
        account: String,
        vesting_shares: String,
    },
    FillVestingWithdraw {
        from_account: String,
        to_account: String,
        withdrawn: String,
        deposited: String,
    },
    SetWithdrawVestingRoute {
        from_account: String,
        to_account: String,
        /// Basis points
        percent: u32,
        #[serde(default)]
        auto_vest: bool,
    },
    DelegateVestingShares {
        delegator: String,
        delegatee: String,
        vesting_shares: String,
    },
    ReturnVestingDelegation {
        account: String,
        vesting_shares: String,
    },
    LimitOrderCreate {
        owner: String,
        orderid: u64,
        amount_to_sell: String,
        min_to_receive: String,
    },
    LimitOrderCancel {
        owner: String,
        orderid: u64,
    },
    FillOrder {
        current_owner: String,
        current_pays: String,
        open_owner: String,
        open_pays: String,
    },
    Convert {
        owner: String,
        requestid: u64,
        amount: String,
    },
    FillConvertRequest {
        owner: String,
        requestid: u64,
        amount_in: String,
        amount_out: String,
    },
    CollateralizedConvert {
        owner: String,
        requestid: u64,
        amount: String,
    },
    FillCollateralizedConvertRequest {
        owner: String,
        requestid: u64,
        amount_in: String,
        amount_out: String,
        #[serde(default)]
        excess_collateral: Option<String>,
    },
    Interest {
        owner: String,
        interest: String,
    },
    ProducerReward {
        producer: String,
        vesting_shares: String,
    },
    ProposalPay {
        receiver: String,
        payment: String,
    },
    UpdateProposalVotes {
        voter: String,
        proposal_ids: Vec<u64>,
        approve: bool,
    },
    CommentPayoutUpdate {
        author: String,
        permlink: String,
    },
    CommentReward {
        author: String,
        permlink: String,
        payout: String,
    },
    EffectiveCommentVote {
        voter: String,
        author: String,
        permlink: String,
        #[serde(default)]
        pending_payout: Option<String>,
    },
    AccountWitnessVote {
        account: String,
        witness: String,
        approve: bool,
    },
    #[serde(other)]
    Unknown,
}

impl Operation {
    /// Decode the typed operation carried by `record`. Unrecognized types
    /// decode to `Unknown`; a recognized type with bad fields is an error.
    pub fn decode(record: &LedgerRecord) -> Result<Self, WalletError> {
        let mut payload = record.fields.clone();
        payload.insert("type".to_string(), Value::String(record.op_type.clone()));

        serde_json::from_value(Value::Object(payload)).map_err(|e| WalletError::MalformedOperation {
            op_type: record.op_type.clone(),
            reason: e.to_string(),
        })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Operation::Unknown)
    }
}
