//! Account history classification.
//!
//! Each ledger record maps to exactly one `TransactionRow`, in input order.
//! Records that are unknown or fail to parse keep their slot with no
//! display record.

pub mod display;
pub mod operation;

use shared::config::SymbolConfig;
use shared::models::LedgerRecord;
use tracing::{debug, warn};

use crate::asset::{parse_asset, Asset};
use crate::dynamic_props::DynamicProps;
use crate::error::{ParseError, WalletResult};
use crate::format::format_asset_amount;
use crate::vesting::vests_to_liquid;

pub use display::{Counterparts, Details, Direction, DisplayRecord, EntryRef, Icon, TransactionRow};
pub use operation::Operation;

/// Formats operations for one account's history view.
pub struct TransactionFormatter<'a> {
    props: &'a DynamicProps,
    symbols: &'a SymbolConfig,
    account: &'a str,
}

impl<'a> TransactionFormatter<'a> {
    pub fn new(props: &'a DynamicProps, symbols: &'a SymbolConfig, account: &'a str) -> Self {
        Self {
            props,
            symbols,
            account,
        }
    }

    /// Classify a page of history. Output length and order always match
    /// the input.
    pub fn classify(&self, records: &[LedgerRecord]) -> Vec<TransactionRow> {
        let rows: Vec<TransactionRow> = records.iter().map(|record| self.row(record)).collect();

        debug!(
            "Classified {} history records for {} ({} placeholders)",
            rows.len(),
            self.account,
            rows.iter().filter(|r| r.is_placeholder()).count()
        );

        rows
    }

    pub fn row(&self, record: &LedgerRecord) -> TransactionRow {
        let display = match self.display_for(record) {
            Ok(display) => display,
            Err(e) => {
                warn!("Rendering history record {} ({}) as placeholder: {}", record.num, record.op_type, e);
                None
            }
        };

        TransactionRow {
            num: record.num,
            op_type: record.op_type.clone(),
            timestamp: record.timestamp(),
            trx_id: record.trx_id.clone(),
            display,
        }
    }

    fn display_for(&self, record: &LedgerRecord) -> WalletResult<Option<DisplayRecord>> {
        let operation = Operation::decode(record)?;
        Ok(self.format(&operation)?)
    }

    /// Display record for a decoded operation; `None` for unknown types.
    pub fn format(&self, operation: &Operation) -> Result<Option<DisplayRecord>, ParseError> {
        let account = self.account;

        let record = match operation {
            Operation::CurationReward {
                reward,
                comment_author,
                comment_permlink,
                ..
            } => DisplayRecord::new(Icon::Reward)
                .number(self.vests_text(reward)?)
                .entry(comment_author, comment_permlink),

            Operation::AuthorReward {
                author,
                permlink,
                sbd_payout,
                steem_payout,
                vesting_payout,
            } => DisplayRecord::new(Icon::Reward)
                .numbers(self.reward_parts(sbd_payout, steem_payout, vesting_payout)?)
                .entry(author, permlink),

            Operation::CommentBenefactorReward {
                benefactor,
                author,
                permlink,
                sbd_payout,
                steem_payout,
                vesting_payout,
            } => DisplayRecord::new(Icon::Reward)
                .numbers(self.reward_parts(sbd_payout, steem_payout, vesting_payout)?)
                .entry(author, permlink)
                .between(author, benefactor, account),

            Operation::ClaimRewardBalance {
                reward_sbd,
                reward_steem,
                reward_vests,
                ..
            } => DisplayRecord::new(Icon::Reward)
                .numbers(self.reward_parts(reward_sbd, reward_steem, reward_vests)?),

            Operation::Transfer {
                from,
                to,
                amount,
                memo,
            }
            | Operation::TransferToSavings {
                from,
                to,
                amount,
                memo,
            } => {
                let icon = if matches!(operation, Operation::TransferToSavings { .. }) {
                    Icon::Savings
                } else {
                    Icon::Transfer
                };
                DisplayRecord::new(icon)
                    .number(asset_text(amount)?)
                    .memo(memo)
                    .between(from, to, account)
            }

            Operation::TransferToVesting { from, to, amount } => DisplayRecord::new(Icon::PowerUp)
                .number(asset_text(amount)?)
                .between(from, to, account),

            Operation::TransferFromSavings {
                from,
                to,
                amount,
                memo,
                request_id,
            }
            | Operation::FillTransferFromSavings {
                from,
                to,
                amount,
                memo,
                request_id,
            } => DisplayRecord::new(Icon::Savings)
                .number(asset_text(amount)?)
                .memo(memo)
                .between(from, to, account)
                .note(format!("Request ID: {}", request_id)),

            Operation::CancelTransferFromSavings { request_id, .. } => {
                DisplayRecord::new(Icon::Cancel).note(format!("Request ID: {}", request_id))
            }

            Operation::RecurrentTransfer {
                from,
                to,
                amount,
                memo,
                recurrence,
                executions,
            } => DisplayRecord::new(Icon::Recurrent)
                .number(asset_text(amount)?)
                .memo(memo)
                .between(from, to, account)
                .note(format!(
                    "Recurrence: {} hours, executions: {}",
                    recurrence, executions
                )),

            Operation::FillRecurrentTransfer {
                from,
                to,
                amount,
                memo,
                remaining_executions,
            } => DisplayRecord::new(Icon::Recurrent)
                .number(asset_text(amount)?)
                .memo(memo)
                .between(from, to, account)
                .note(format!("Remaining executions: {}", remaining_executions)),

            Operation::WithdrawVesting { vesting_shares, .. } => {
                DisplayRecord::new(Icon::PowerDown).number(self.vests_text(vesting_shares)?)
            }

            Operation::FillVestingWithdraw {
                from_account,
                to_account,
                deposited,
                ..
            } => DisplayRecord::new(Icon::PowerDown)
                .number(asset_text(deposited)?)
                .between(from_account, to_account, account),

            Operation::SetWithdrawVestingRoute {
                from_account,
                to_account,
                percent,
                auto_vest,
            } => {
                let record = DisplayRecord::new(Icon::PowerDown)
                    .number(format!("{}%", *percent as f64 / 100.0))
                    .between(from_account, to_account, account);
                if *auto_vest {
                    record.note("Auto vest".to_string())
                } else {
                    record
                }
            }

            Operation::DelegateVestingShares {
                delegator,
                delegatee,
                vesting_shares,
            } => DisplayRecord::new(Icon::Delegation)
                .number(self.vests_text(vesting_shares)?)
                .between(delegator, delegatee, account),

            Operation::ReturnVestingDelegation { vesting_shares, .. } => {
                DisplayRecord::new(Icon::Delegation).number(self.vests_text(vesting_shares)?)
            }

            Operation::LimitOrderCreate {
                orderid,
                amount_to_sell,
                min_to_receive,
                ..
            } => DisplayRecord::new(Icon::Market)
                .number(asset_text(amount_to_sell)?)
                .number(asset_text(min_to_receive)?)
                .note(format!("Order ID: {}", orderid)),

            Operation::LimitOrderCancel { owner, orderid } => DisplayRecord::new(Icon::Market)
                .note(format!("Order ID: {}", orderid))
                .note(format!("@{}", owner)),

            Operation::FillOrder {
                current_owner,
                current_pays,
                open_owner,
                open_pays,
            } => DisplayRecord::new(Icon::Market)
                .number(asset_text(current_pays)?)
                .number(asset_text(open_pays)?)
                .between(current_owner, open_owner, account),

            Operation::Convert {
                requestid, amount, ..
            }
            | Operation::CollateralizedConvert {
                requestid, amount, ..
            } => DisplayRecord::new(Icon::Conversion)
                .number(asset_text(amount)?)
                .note(format!("Request ID: {}", requestid)),

            Operation::FillConvertRequest {
                requestid,
                amount_in,
                amount_out,
                ..
            } => DisplayRecord::new(Icon::Conversion)
                .number(asset_text(amount_in)?)
                .number(asset_text(amount_out)?)
                .note(format!("Request ID: {}", requestid)),

            Operation::FillCollateralizedConvertRequest {
                requestid,
                amount_in,
                amount_out,
                excess_collateral,
                ..
            } => {
                let record = DisplayRecord::new(Icon::Conversion)
                    .number(asset_text(amount_in)?)
                    .number(asset_text(amount_out)?)
                    .note(format!("Request ID: {}", requestid));
                match excess_collateral {
                    Some(excess) if !excess.is_empty() => {
                        record.note(format!("Excess collateral: {}", asset_text(excess)?))
                    }
                    _ => record,
                }
            }

            Operation::Interest { interest, .. } => {
                DisplayRecord::new(Icon::Interest).number(asset_text(interest)?)
            }

            Operation::ProducerReward { vesting_shares, .. } => {
                DisplayRecord::new(Icon::Producer).number(self.vests_text(vesting_shares)?)
            }

            Operation::ProposalPay { payment, .. } => {
                DisplayRecord::new(Icon::Proposal).number(asset_text(payment)?)
            }

            Operation::UpdateProposalVotes {
                proposal_ids,
                approve,
                ..
            } => DisplayRecord::new(Icon::Proposal)
                .numbers(proposal_ids.iter().map(|id| format!("#{}", id)))
                .note(if *approve { "approve" } else { "unapprove" }.to_string()),

            Operation::CommentPayoutUpdate { author, permlink } => {
                DisplayRecord::new(Icon::Post).entry(author, permlink)
            }

            Operation::CommentReward {
                author,
                permlink,
                payout,
            } => DisplayRecord::new(Icon::Post)
                .number(asset_text(payout)?)
                .entry(author, permlink),

            Operation::EffectiveCommentVote {
                voter,
                author,
                permlink,
                pending_payout,
            } => {
                let record = DisplayRecord::new(Icon::Vote)
                    .entry(author, permlink)
                    .between(voter, author, account);
                match pending_payout {
                    Some(payout) if !payout.is_empty() => record.number(asset_text(payout)?),
                    _ => record,
                }
            }

            Operation::AccountWitnessVote {
                account: voter,
                witness,
                approve,
            } => DisplayRecord::new(Icon::Witness)
                .between(voter, witness, account)
                .note(if *approve { "approve" } else { "unapprove" }.to_string()),

            Operation::Unknown => return Ok(None),
        };

        Ok(Some(record))
    }

    /// Vesting amount shown as its liquid equivalent
    fn vests_text(&self, raw: &str) -> Result<String, ParseError> {
        let vests = parse_asset(raw)?;
        Ok(format_asset_amount(
            vests_to_liquid(vests.amount, self.props.steem_per_mvests),
            &self.symbols.staked,
        ))
    }

    /// Non-zero stable, liquid and vesting components, in that order.
    /// Missing fields count as zero.
    fn reward_parts(&self, stable: &str, liquid: &str, vests: &str) -> Result<Vec<String>, ParseError> {
        let mut parts = Vec::with_capacity(3);

        let stable = optional_asset(stable, &self.symbols.stable)?;
        if stable.amount > 0.0 {
            parts.push(format_asset_amount(stable.amount, &stable.symbol));
        }

        let liquid = optional_asset(liquid, &self.symbols.liquid)?;
        if liquid.amount > 0.0 {
            parts.push(format_asset_amount(liquid.amount, &liquid.symbol));
        }

        let vests = optional_asset(vests, &self.symbols.vests)?;
        if vests.amount > 0.0 {
            parts.push(format_asset_amount(
                vests_to_liquid(vests.amount, self.props.steem_per_mvests),
                &self.symbols.staked,
            ));
        }

        Ok(parts)
    }
}

fn asset_text(raw: &str) -> Result<String, ParseError> {
    let asset = parse_asset(raw)?;
    Ok(format_asset_amount(asset.amount, &asset.symbol))
}

fn optional_asset(raw: &str, symbol: &str) -> Result<Asset, ParseError> {
    match parse_asset(raw) {
        Err(ParseError::Empty) => Ok(Asset::zero(symbol)),
        other => other,
    }
}

/// Classify `records` for `account` with the default network symbols.
pub fn classify_transactions(
    records: &[LedgerRecord],
    props: &DynamicProps,
    account: &str,
) -> Vec<TransactionRow> {
    let symbols = SymbolConfig::default();
    TransactionFormatter::new(props, &symbols, account).classify(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn props() -> DynamicProps {
        DynamicProps {
            steem_per_mvests: 500.0,
            base: 1.0,
            quote: 1.0,
            ..Default::default()
        }
    }

    fn record(value: Value) -> LedgerRecord {
        serde_json::from_value(value).unwrap()
    }

    fn display(value: Value) -> DisplayRecord {
        let rows = classify_transactions(&[record(value)], &props(), "alice");
        rows.into_iter().next().unwrap().display.expect("expected a display record")
    }

    #[test]
    fn test_curation_reward_converts_vests() {
        let d = display(json!({
            "num": 1, "type": "curation_reward", "timestamp": "2024-01-01T00:00:00",
            "curator": "alice", "reward": "2000.000000 VESTS",
            "comment_author": "bob", "comment_permlink": "post"
        }));
        assert_eq!(d.icon, Icon::Reward);
        assert_eq!(d.numbers, vec!["1.000 SP"]);
        assert_eq!(d.details.entry, Some(EntryRef::new("bob", "post")));
    }

    #[test]
    fn test_author_reward_suppresses_zero_parts() {
        let d = display(json!({
            "num": 2, "type": "author_reward", "author": "alice", "permlink": "post",
            "sbd_payout": "1.500 SBD", "steem_payout": "0.000 STEEM",
            "vesting_payout": "4000.000000 VESTS"
        }));
        assert_eq!(d.numbers, vec!["1.500 SBD", "2.000 SP"]);
        assert!(d.details.entry.is_some());
    }

    #[test]
    fn test_claim_reward_balance_has_no_link() {
        let d = display(json!({
            "num": 3, "type": "claim_reward_balance", "account": "alice",
            "reward_sbd": "0.000 SBD", "reward_steem": "1.234 STEEM",
            "reward_vests": "0.000000 VESTS"
        }));
        assert_eq!(d.numbers, vec!["1.234 STEEM"]);
        assert!(d.details.entry.is_none());
    }

    #[test]
    fn test_transfer_memo_and_direction() {
        let d = display(json!({
            "num": 4, "type": "transfer", "from": "bob", "to": "alice",
            "amount": "1000.000 STEEM", "memo": "thanks"
        }));
        assert_eq!(d.icon, Icon::Transfer);
        assert_eq!(d.numbers, vec!["1,000.000 STEEM"]);
        assert_eq!(d.details.memo.as_deref(), Some("thanks"));
        assert_eq!(d.direction, Some(Direction::Incoming));
        assert_eq!(
            d.details.counterparts,
            Some(Counterparts {
                from: "bob".to_string(),
                to: "alice".to_string()
            })
        );
    }

    #[test]
    fn test_transfer_subtype_icons() {
        let vesting = display(json!({
            "num": 5, "type": "transfer_to_vesting", "from": "alice", "to": "alice",
            "amount": "5.000 STEEM"
        }));
        assert_eq!(vesting.icon, Icon::PowerUp);
        assert_eq!(vesting.direction, Some(Direction::SelfTransfer));

        let savings = display(json!({
            "num": 6, "type": "transfer_to_savings", "from": "alice", "to": "alice",
            "amount": "5.000 SBD", "memo": ""
        }));
        assert_eq!(savings.icon, Icon::Savings);
        assert!(savings.details.memo.is_none());
    }

    #[test]
    fn test_recurrent_transfers() {
        let scheduled = display(json!({
            "num": 7, "type": "recurrent_transfer", "from": "alice", "to": "bob",
            "amount": "1.000 SBD", "memo": "", "recurrence": 24, "executions": 5
        }));
        assert_eq!(scheduled.numbers, vec!["1.000 SBD"]);
        assert_eq!(scheduled.details.notes, vec!["Recurrence: 24 hours, executions: 5"]);

        let filled = display(json!({
            "num": 8, "type": "fill_recurrent_transfer", "from": "alice", "to": "bob",
            "amount": "1.500 SBD", "memo": "", "remaining_executions": 3
        }));
        assert_eq!(filled.numbers, vec!["1.500 SBD"]);
        assert_eq!(filled.details.notes, vec!["Remaining executions: 3"]);
    }

    #[test]
    fn test_recurrent_amounts_match_transfer_formatting() {
        let filled = display(json!({
            "num": 15, "type": "fill_recurrent_transfer", "from": "bob", "to": "alice",
            "amount": "1000.000 SBD", "memo": "", "remaining_executions": 0
        }));
        let transfer = display(json!({
            "num": 16, "type": "transfer", "from": "bob", "to": "alice",
            "amount": "1000.000 SBD", "memo": ""
        }));
        assert_eq!(filled.numbers, vec!["1,000.000 SBD"]);
        assert_eq!(filled.numbers, transfer.numbers);
        assert_eq!(filled.direction, Some(Direction::Incoming));
    }

    #[test]
    fn test_delegation() {
        let d = display(json!({
            "num": 9, "type": "delegate_vesting_shares", "delegator": "alice",
            "delegatee": "carol", "vesting_shares": "1000000.000000 VESTS"
        }));
        assert_eq!(d.icon, Icon::Delegation);
        assert_eq!(d.numbers, vec!["500.000 SP"]);
        assert_eq!(d.direction, Some(Direction::Outgoing));
    }

    #[test]
    fn test_market_orders() {
        let created = display(json!({
            "num": 10, "type": "limit_order_create", "owner": "alice", "orderid": 77,
            "amount_to_sell": "10.000 STEEM", "min_to_receive": "2.500 SBD"
        }));
        assert_eq!(created.numbers, vec!["10.000 STEEM", "2.500 SBD"]);
        assert_eq!(created.details.notes, vec!["Order ID: 77"]);

        let cancelled = display(json!({
            "num": 11, "type": "limit_order_cancel", "owner": "alice", "orderid": 77
        }));
        assert!(cancelled.numbers.is_empty());
        assert_eq!(cancelled.details.notes[0], "Order ID: 77");
    }

    #[test]
    fn test_fill_collateralized_convert() {
        let d = display(json!({
            "num": 12, "type": "fill_collateralized_convert_request", "owner": "alice",
            "requestid": 5, "amount_in": "10.000 STEEM", "amount_out": "2.000 SBD",
            "excess_collateral": "0.500 STEEM"
        }));
        assert_eq!(d.icon, Icon::Conversion);
        assert_eq!(d.numbers, vec!["10.000 STEEM", "2.000 SBD"]);
        assert_eq!(d.details.notes, vec!["Request ID: 5", "Excess collateral: 0.500 STEEM"]);
    }

    #[test]
    fn test_proposal_votes() {
        let d = display(json!({
            "num": 13, "type": "update_proposal_votes", "voter": "alice",
            "proposal_ids": [1, 42], "approve": false
        }));
        assert_eq!(d.numbers, vec!["#1", "#42"]);
        assert_eq!(d.details.notes, vec!["unapprove"]);
    }

    #[test]
    fn test_producer_reward() {
        let d = display(json!({
            "num": 14, "type": "producer_reward", "producer": "alice",
            "vesting_shares": "600.000000 VESTS"
        }));
        assert_eq!(d.numbers, vec!["0.300 SP"]);
        assert!(d.details.is_empty());
    }

    fn counterparts(from: &str, to: &str) -> Option<Counterparts> {
        Some(Counterparts {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[test]
    fn test_comment_benefactor_reward() {
        let d = display(json!({
            "num": 20, "type": "comment_benefactor_reward", "benefactor": "alice",
            "author": "bob", "permlink": "post", "sbd_payout": "0.250 SBD",
            "steem_payout": "0.000 STEEM", "vesting_payout": "1000.000000 VESTS"
        }));
        assert_eq!(d.icon, Icon::Reward);
        assert_eq!(d.numbers, vec!["0.250 SBD", "0.500 SP"]);
        assert_eq!(d.details.entry, Some(EntryRef::new("bob", "post")));
        assert_eq!(d.details.counterparts, counterparts("bob", "alice"));
        assert_eq!(d.direction, Some(Direction::Incoming));
    }

    #[test]
    fn test_withdraw_vesting() {
        let d = display(json!({
            "num": 21, "type": "withdraw_vesting", "account": "alice",
            "vesting_shares": "20000.000000 VESTS"
        }));
        assert_eq!(d.icon, Icon::PowerDown);
        assert_eq!(d.numbers, vec!["10.000 SP"]);
        assert!(d.details.is_empty());
        assert_eq!(d.direction, None);
    }

    #[test]
    fn test_fill_vesting_withdraw() {
        let d = display(json!({
            "num": 22, "type": "fill_vesting_withdraw", "from_account": "alice",
            "to_account": "alice", "withdrawn": "2000.000000 VESTS", "deposited": "1.000 STEEM"
        }));
        assert_eq!(d.icon, Icon::PowerDown);
        assert_eq!(d.numbers, vec!["1.000 STEEM"]);
        assert_eq!(d.direction, Some(Direction::SelfTransfer));
    }

    #[test]
    fn test_set_withdraw_vesting_route() {
        let d = display(json!({
            "num": 23, "type": "set_withdraw_vesting_route", "from_account": "alice",
            "to_account": "savings-bot", "percent": 2550, "auto_vest": true
        }));
        assert_eq!(d.icon, Icon::PowerDown);
        assert_eq!(d.numbers, vec!["25.5%"]);
        assert_eq!(d.details.notes, vec!["Auto vest"]);
        assert_eq!(d.direction, Some(Direction::Outgoing));

        let plain = display(json!({
            "num": 24, "type": "set_withdraw_vesting_route", "from_account": "alice",
            "to_account": "bob", "percent": 10000
        }));
        assert_eq!(plain.numbers, vec!["100%"]);
        assert!(plain.details.notes.is_empty());
    }

    #[test]
    fn test_return_vesting_delegation() {
        let d = display(json!({
            "num": 25, "type": "return_vesting_delegation", "account": "alice",
            "vesting_shares": "4000.000000 VESTS"
        }));
        assert_eq!(d.icon, Icon::Delegation);
        assert_eq!(d.numbers, vec!["2.000 SP"]);
        assert_eq!(d.direction, None);
    }

    #[test]
    fn test_savings_withdrawals() {
        let requested = display(json!({
            "num": 26, "type": "transfer_from_savings", "from": "alice", "to": "alice",
            "amount": "2.000 SBD", "memo": "rent", "request_id": 9
        }));
        assert_eq!(requested.icon, Icon::Savings);
        assert_eq!(requested.numbers, vec!["2.000 SBD"]);
        assert_eq!(requested.details.memo.as_deref(), Some("rent"));
        assert_eq!(requested.details.notes, vec!["Request ID: 9"]);
        assert_eq!(requested.direction, Some(Direction::SelfTransfer));

        let filled = display(json!({
            "num": 27, "type": "fill_transfer_from_savings", "from": "alice", "to": "bob",
            "amount": "2.000 SBD", "memo": "", "request_id": 9
        }));
        assert_eq!(filled.icon, Icon::Savings);
        assert!(filled.details.memo.is_none());
        assert_eq!(filled.details.counterparts, counterparts("alice", "bob"));
        assert_eq!(filled.direction, Some(Direction::Outgoing));

        let cancelled = display(json!({
            "num": 28, "type": "cancel_transfer_from_savings", "from": "alice", "request_id": 9
        }));
        assert_eq!(cancelled.icon, Icon::Cancel);
        assert!(cancelled.numbers.is_empty());
        assert_eq!(cancelled.details.notes, vec!["Request ID: 9"]);
    }

    #[test]
    fn test_fill_order() {
        let d = display(json!({
            "num": 29, "type": "fill_order", "current_owner": "bob",
            "current_pays": "3.000 SBD", "open_owner": "alice", "open_pays": "12.000 STEEM"
        }));
        assert_eq!(d.icon, Icon::Market);
        assert_eq!(d.numbers, vec!["3.000 SBD", "12.000 STEEM"]);
        assert_eq!(d.details.counterparts, counterparts("bob", "alice"));
        assert_eq!(d.direction, Some(Direction::Incoming));
    }

    #[test]
    fn test_conversions() {
        let convert = display(json!({
            "num": 30, "type": "convert", "owner": "alice", "requestid": 3, "amount": "5.000 SBD"
        }));
        assert_eq!(convert.icon, Icon::Conversion);
        assert_eq!(convert.numbers, vec!["5.000 SBD"]);
        assert_eq!(convert.details.notes, vec!["Request ID: 3"]);

        let filled = display(json!({
            "num": 31, "type": "fill_convert_request", "owner": "alice", "requestid": 3,
            "amount_in": "5.000 SBD", "amount_out": "20.000 STEEM"
        }));
        assert_eq!(filled.icon, Icon::Conversion);
        assert_eq!(filled.numbers, vec!["5.000 SBD", "20.000 STEEM"]);
        assert_eq!(filled.details.notes, vec!["Request ID: 3"]);

        let collateralized = display(json!({
            "num": 32, "type": "collateralized_convert", "owner": "alice", "requestid": 4,
            "amount": "40.000 STEEM"
        }));
        assert_eq!(collateralized.icon, Icon::Conversion);
        assert_eq!(collateralized.numbers, vec!["40.000 STEEM"]);
        assert_eq!(collateralized.details.notes, vec!["Request ID: 4"]);
    }

    #[test]
    fn test_proposal_pay() {
        let d = display(json!({
            "num": 33, "type": "proposal_pay", "receiver": "alice", "payment": "1234.500 SBD"
        }));
        assert_eq!(d.icon, Icon::Proposal);
        assert_eq!(d.numbers, vec!["1,234.500 SBD"]);
        assert!(d.details.is_empty());
    }

    #[test]
    fn test_comment_payout_rows() {
        let update = display(json!({
            "num": 34, "type": "comment_payout_update", "author": "alice", "permlink": "post"
        }));
        assert_eq!(update.icon, Icon::Post);
        assert!(update.numbers.is_empty());
        assert_eq!(update.details.entry, Some(EntryRef::new("alice", "post")));

        let reward = display(json!({
            "num": 35, "type": "comment_reward", "author": "alice", "permlink": "post",
            "payout": "7.250 SBD"
        }));
        assert_eq!(reward.icon, Icon::Post);
        assert_eq!(reward.numbers, vec!["7.250 SBD"]);
        assert_eq!(reward.details.entry, Some(EntryRef::new("alice", "post")));
    }

    #[test]
    fn test_effective_comment_vote() {
        let d = display(json!({
            "num": 36, "type": "effective_comment_vote", "voter": "bob", "author": "alice",
            "permlink": "post", "pending_payout": "0.420 SBD"
        }));
        assert_eq!(d.icon, Icon::Vote);
        assert_eq!(d.numbers, vec!["0.420 SBD"]);
        assert_eq!(d.details.entry, Some(EntryRef::new("alice", "post")));
        assert_eq!(d.direction, Some(Direction::Incoming));

        let without_payout = display(json!({
            "num": 37, "type": "effective_comment_vote", "voter": "alice", "author": "bob",
            "permlink": "post"
        }));
        assert!(without_payout.numbers.is_empty());
        assert_eq!(without_payout.direction, Some(Direction::Outgoing));
    }

    #[test]
    fn test_account_witness_vote() {
        let d = display(json!({
            "num": 38, "type": "account_witness_vote", "account": "alice",
            "witness": "good-witness", "approve": true
        }));
        assert_eq!(d.icon, Icon::Witness);
        assert!(d.numbers.is_empty());
        assert_eq!(d.details.counterparts, counterparts("alice", "good-witness"));
        assert_eq!(d.details.notes, vec!["approve"]);
        assert_eq!(d.direction, Some(Direction::Outgoing));
    }

    #[test]
    fn test_unknown_and_malformed_rows_keep_their_slot() {
        let records = vec![
            record(json!({"num": 1, "type": "transfer", "from": "a", "to": "alice", "amount": "1.000 STEEM"})),
            record(json!({"num": 2, "type": "witness_update", "owner": "w"})),
            record(json!({"num": 3, "type": "transfer", "from": "a", "to": "alice", "amount": "abc"})),
            record(json!({"num": 4, "type": "interest", "owner": "alice", "interest": "0.010 SBD"})),
        ];

        let rows = classify_transactions(&records, &props(), "alice");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.iter().map(|r| r.num).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(!rows[0].is_placeholder());
        assert!(rows[1].is_placeholder());
        assert!(rows[2].is_placeholder());
        assert_eq!(rows[3].display.as_ref().unwrap().numbers, vec!["0.010 SBD"]);
    }
}
