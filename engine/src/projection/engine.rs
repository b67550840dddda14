//! Derivation Engine
//!
//! A single pure pass from [`ParameterSet`] to [`Metrics`]. No I/O, no
//! shared state, no randomness: calling [`compute`] twice with equal inputs
//! yields structurally identical outputs, and concurrent callers need no
//! synchronization.
//!
//! # Critical Invariants
//!
//! 1. Every output depends only on the input parameters, never on other
//!    outputs being computed in a particular order.
//! 2. No division leaks `Infinity` or `NaN` into the output: vesting and
//!    goal-analysis divisions are guarded explicitly.
//! 3. Out-of-range inputs (negative counts, percentages beyond 100) produce
//!    well-defined arithmetic results rather than errors.

use crate::params::ParameterSet;
use crate::projection::metrics::{
    AnnualProjection, CostBreakdown, FounderRevenue, GoalAnalysis, MessageVolumes, Metrics,
    RecipientRevenue, RevenueLines, TokenFigures, UserSegments,
};

/// Trial messages granted to each free-tier user per month
pub const FREE_TRIAL_MESSAGES: f64 = 5.0;

/// Daily auctions approximated at a monthly cadence
pub const AUCTIONS_PER_MONTH: f64 = 30.0;

/// Months in a vesting year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Share of a whole given a percentage field
#[inline]
fn pct(value: f64, percent: f64) -> f64 {
    value * (percent / 100.0)
}

/// Floored integer count for a percentage of the user base
#[inline]
fn segment_count(users: f64, percent: f64) -> i64 {
    pct(users, percent).floor() as i64
}

/// Derive the complete metrics for one parameter set
///
/// # Arguments
/// * `params` - Complete input parameter set
///
/// # Returns
/// A fresh [`Metrics`] value; the input is not modified.
///
/// # Example
///
/// ```rust
/// use tokenomics_simulator_core_rs::{compute, ParameterSet};
///
/// let metrics = compute(&ParameterSet::default());
/// assert_eq!(metrics.segments.paying_users, 3_500);
/// assert_eq!(metrics.revenue.gross, 196_250.0);
/// ```
pub fn compute(params: &ParameterSet) -> Metrics {
    // 1. User segments
    let free_users = segment_count(params.monthly_active_users, params.pct_free_only);
    let paying_users = segment_count(params.monthly_active_users, params.pct_pay_per_message);
    let holder_users = segment_count(params.monthly_active_users, params.pct_token_holders);
    let segments = UserSegments {
        free_users,
        paying_users,
        holder_users,
    };

    // 2. Token figures
    let founder_tokens = pct(params.total_supply, params.founder_allocation);
    let treasury_tokens = pct(params.total_supply, params.treasury_allocation);
    let founder_tokens_per_month = if params.founder_vesting_years > 0.0 {
        founder_tokens / (params.founder_vesting_years * MONTHS_PER_YEAR)
    } else {
        // Zero (or negative) vesting period: fully vested immediately
        founder_tokens
    };
    let tokens = TokenFigures {
        founder_tokens,
        treasury_tokens,
        founder_tokens_per_month,
        holder_chat_value_usd: params.chats_per_holder * params.chat_price_usd,
    };

    // 3. Message volumes. Free users get the fixed trial allotment and
    // never reach a paid engagement rate.
    let free_messages = free_users as f64 * FREE_TRIAL_MESSAGES;
    let paid_messages = paying_users as f64 * params.chats_per_paying_user;
    let holder_messages = holder_users as f64 * params.chats_per_holder;
    let total_messages = free_messages + paid_messages + holder_messages;
    let messages = MessageVolumes {
        free_messages,
        paid_messages,
        holder_messages,
        total_messages,
    };

    // 4. Revenue lines. Chat is metered for the paying tier only; tips come
    // from the whole user base.
    let chat = paid_messages * params.chat_price_usd;
    let tips = params.monthly_active_users * params.tips_per_user_per_month * params.avg_tip_usd;
    let auctions = AUCTIONS_PER_MONTH * params.avg_daily_auction_eth * params.eth_price_usd;
    let custom_characters =
        params.custom_characters_per_month * params.custom_character_fee_eth * params.eth_price_usd;
    let gross = chat + tips + auctions + custom_characters;
    let revenue = RevenueLines {
        chat,
        tips,
        auctions,
        custom_characters,
        gross,
    };

    // 5. Operating costs
    let llm_inference = total_messages * params.cost_per_message;
    let costs = CostBreakdown {
        llm_inference,
        infrastructure: params.monthly_infra_cost_usd,
        total: llm_inference + params.monthly_infra_cost_usd,
    };

    // 6. Net position
    let net_revenue = gross - costs.total;
    let profit_margin = if gross > 0.0 { net_revenue / gross } else { 0.0 };

    // 7. Recipient splits
    let from_chat = pct(chat, params.chat_protocol_split);
    let from_tips = pct(tips, params.tip_protocol_split);
    let from_auctions = pct(auctions, params.auction_founder_split);
    let from_custom_characters = pct(custom_characters, params.custom_char_founder_split);
    let founder = FounderRevenue {
        from_chat,
        from_tips,
        from_auctions,
        from_custom_characters,
        total: from_chat + from_tips + from_auctions + from_custom_characters,
    };
    let treasury = pct(chat, params.chat_treasury_split)
        + pct(tips, params.tip_treasury_split)
        + pct(auctions, params.auction_treasury_split)
        + pct(custom_characters, params.custom_char_treasury_split);
    let character_pool =
        pct(chat, params.chat_character_split) + pct(tips, params.tip_character_split);
    let recipients = RecipientRevenue {
        founder,
        treasury,
        character_pool,
    };

    // 8. Goal analysis
    let revenue_per_paying_user = params.chats_per_paying_user
        * params.chat_price_usd
        * (params.chat_protocol_split / 100.0)
        + params.tips_per_user_per_month * params.avg_tip_usd * (params.tip_protocol_split / 100.0);
    let paying_users_needed = if revenue_per_paying_user > 0.0 {
        Some((params.founder_monthly_need_usd / revenue_per_paying_user).ceil() as i64)
    } else {
        None
    };
    let total_users_needed = match paying_users_needed {
        Some(needed) if params.pct_pay_per_message != 0.0 => {
            Some((needed as f64 / (params.pct_pay_per_message / 100.0)).ceil() as i64)
        }
        _ => None,
    };
    let founder_total = recipients.founder.total;
    let goal = GoalAnalysis {
        revenue_per_paying_user,
        paying_users_needed,
        total_users_needed,
        goal_met: founder_total >= params.founder_monthly_need_usd,
        gap: params.founder_monthly_need_usd - founder_total,
    };

    // 9. Annual projections
    let annual = AnnualProjection {
        founder: founder_total * MONTHS_PER_YEAR,
        treasury: recipients.treasury * MONTHS_PER_YEAR,
        character_pool: recipients.character_pool * MONTHS_PER_YEAR,
        net: net_revenue * MONTHS_PER_YEAR,
    };

    Metrics {
        segments,
        tokens,
        messages,
        revenue,
        costs,
        net_revenue,
        profit_margin,
        recipients,
        goal,
        annual,
    }
}
