//! Type conversion utilities for FFI boundary
//!
//! Converts between the engine's types and PyO3-compatible types
//! (PyDict, PyList). Incoming parameter dicts are sparse by nature, so
//! this is where a missing field becomes an error naming that field.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::checks::AllocationCheck;
use crate::params::{ParameterSet, FIELD_NAMES};
use crate::projection::Metrics;

/// Extract a required field from a Python dict with a clear error message.
///
/// # Errors
/// Returns PyValueError if the field is missing; a type error if the
/// value is not convertible.
fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| {
            PyValueError::new_err(format!("Missing required field '{}'", key))
        })?
        .extract()
}

/// Convert a Python dict to a complete ParameterSet
///
/// Every field from [`FIELD_NAMES`] is required; there are no implicit
/// defaults at this boundary (defaults are an explicit, separate call).
pub fn parse_parameter_set(dict: &Bound<'_, PyDict>) -> PyResult<ParameterSet> {
    Ok(ParameterSet {
        founder_allocation: extract_required(dict, "founderAllocation")?,
        treasury_allocation: extract_required(dict, "treasuryAllocation")?,
        community_allocation: extract_required(dict, "communityAllocation")?,
        liquidity_allocation: extract_required(dict, "liquidityAllocation")?,
        public_sale_allocation: extract_required(dict, "publicSaleAllocation")?,
        total_supply: extract_required(dict, "totalSupply")?,
        token_holder_threshold: extract_required(dict, "tokenHolderThreshold")?,
        founder_vesting_years: extract_required(dict, "founderVestingYears")?,
        chat_character_split: extract_required(dict, "chatCharacterSplit")?,
        chat_treasury_split: extract_required(dict, "chatTreasurySplit")?,
        chat_protocol_split: extract_required(dict, "chatProtocolSplit")?,
        tip_character_split: extract_required(dict, "tipCharacterSplit")?,
        tip_treasury_split: extract_required(dict, "tipTreasurySplit")?,
        tip_protocol_split: extract_required(dict, "tipProtocolSplit")?,
        auction_treasury_split: extract_required(dict, "auctionTreasurySplit")?,
        auction_founder_split: extract_required(dict, "auctionFounderSplit")?,
        custom_char_treasury_split: extract_required(dict, "customCharTreasurySplit")?,
        custom_char_founder_split: extract_required(dict, "customCharFounderSplit")?,
        chat_price_usd: extract_required(dict, "chatPriceUSD")?,
        avg_tip_usd: extract_required(dict, "avgTipUSD")?,
        eth_price_usd: extract_required(dict, "ethPriceUSD")?,
        avg_daily_auction_eth: extract_required(dict, "avgDailyAuctionETH")?,
        custom_character_fee_eth: extract_required(dict, "customCharacterFeeETH")?,
        monthly_active_users: extract_required(dict, "monthlyActiveUsers")?,
        pct_free_only: extract_required(dict, "pctFreeOnly")?,
        pct_pay_per_message: extract_required(dict, "pctPayPerMessage")?,
        pct_token_holders: extract_required(dict, "pctTokenHolders")?,
        chats_per_paying_user: extract_required(dict, "chatsPerPayingUser")?,
        chats_per_holder: extract_required(dict, "chatsPerHolder")?,
        tips_per_user_per_month: extract_required(dict, "tipsPerUserPerMonth")?,
        custom_characters_per_month: extract_required(dict, "customCharactersPerMonth")?,
        cost_per_message: extract_required(dict, "costPerMessage")?,
        monthly_infra_cost_usd: extract_required(dict, "monthlyInfraCostUSD")?,
        founder_monthly_need_usd: extract_required(dict, "founderMonthlyNeedUSD")?,
    })
}

/// Convert a ParameterSet to a Python dict keyed by the public identifiers
pub fn parameters_to_dict<'py>(
    py: Python<'py>,
    params: &ParameterSet,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for name in FIELD_NAMES {
        // get() cannot fail for names taken from FIELD_NAMES
        let value = params
            .get(name)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        dict.set_item(name, value)?;
    }
    Ok(dict)
}

/// Convert Metrics to a nested Python dict mirroring the JSON layout
pub fn metrics_to_dict<'py>(py: Python<'py>, metrics: &Metrics) -> PyResult<Bound<'py, PyDict>> {
    let segments = PyDict::new_bound(py);
    segments.set_item("freeUsers", metrics.segments.free_users)?;
    segments.set_item("payingUsers", metrics.segments.paying_users)?;
    segments.set_item("holderUsers", metrics.segments.holder_users)?;

    let tokens = PyDict::new_bound(py);
    tokens.set_item("founderTokens", metrics.tokens.founder_tokens)?;
    tokens.set_item("treasuryTokens", metrics.tokens.treasury_tokens)?;
    tokens.set_item("founderTokensPerMonth", metrics.tokens.founder_tokens_per_month)?;
    tokens.set_item("holderChatValueUSD", metrics.tokens.holder_chat_value_usd)?;

    let messages = PyDict::new_bound(py);
    messages.set_item("freeMessages", metrics.messages.free_messages)?;
    messages.set_item("paidMessages", metrics.messages.paid_messages)?;
    messages.set_item("holderMessages", metrics.messages.holder_messages)?;
    messages.set_item("totalMessages", metrics.messages.total_messages)?;

    let revenue = PyDict::new_bound(py);
    revenue.set_item("chat", metrics.revenue.chat)?;
    revenue.set_item("tips", metrics.revenue.tips)?;
    revenue.set_item("auctions", metrics.revenue.auctions)?;
    revenue.set_item("customCharacters", metrics.revenue.custom_characters)?;
    revenue.set_item("gross", metrics.revenue.gross)?;

    let costs = PyDict::new_bound(py);
    costs.set_item("llmInference", metrics.costs.llm_inference)?;
    costs.set_item("infrastructure", metrics.costs.infrastructure)?;
    costs.set_item("total", metrics.costs.total)?;

    let founder = PyDict::new_bound(py);
    founder.set_item("fromChat", metrics.recipients.founder.from_chat)?;
    founder.set_item("fromTips", metrics.recipients.founder.from_tips)?;
    founder.set_item("fromAuctions", metrics.recipients.founder.from_auctions)?;
    founder.set_item(
        "fromCustomCharacters",
        metrics.recipients.founder.from_custom_characters,
    )?;
    founder.set_item("total", metrics.recipients.founder.total)?;

    let recipients = PyDict::new_bound(py);
    recipients.set_item("founder", founder)?;
    recipients.set_item("treasury", metrics.recipients.treasury)?;
    recipients.set_item("characterPool", metrics.recipients.character_pool)?;

    let goal = PyDict::new_bound(py);
    goal.set_item("revenuePerPayingUser", metrics.goal.revenue_per_paying_user)?;
    goal.set_item("payingUsersNeeded", metrics.goal.paying_users_needed)?;
    goal.set_item("totalUsersNeeded", metrics.goal.total_users_needed)?;
    goal.set_item("goalMet", metrics.goal.goal_met)?;
    goal.set_item("gap", metrics.goal.gap)?;

    let annual = PyDict::new_bound(py);
    annual.set_item("founder", metrics.annual.founder)?;
    annual.set_item("treasury", metrics.annual.treasury)?;
    annual.set_item("characterPool", metrics.annual.character_pool)?;
    annual.set_item("net", metrics.annual.net)?;

    let dict = PyDict::new_bound(py);
    dict.set_item("segments", segments)?;
    dict.set_item("tokens", tokens)?;
    dict.set_item("messages", messages)?;
    dict.set_item("revenue", revenue)?;
    dict.set_item("costs", costs)?;
    dict.set_item("netRevenue", metrics.net_revenue)?;
    dict.set_item("profitMargin", metrics.profit_margin)?;
    dict.set_item("recipients", recipients)?;
    dict.set_item("goal", goal)?;
    dict.set_item("annual", annual)?;
    Ok(dict)
}

/// Convert allocation check results to a Python list of dicts
pub fn checks_to_list<'py>(
    py: Python<'py>,
    checks: &[AllocationCheck],
) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty_bound(py);
    for check in checks {
        let entry = PyDict::new_bound(py);
        entry.set_item("group", check.group.key())?;
        entry.set_item("actualSum", check.actual_sum)?;
        entry.set_item("balanced", check.balanced)?;
        list.append(entry)?;
    }
    Ok(list)
}
