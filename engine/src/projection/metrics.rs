//! Derived Metrics Types
//!
//! The complete output of one projection pass. A `Metrics` value is always
//! recomputed wholesale from a `ParameterSet`; it carries no independent
//! state and is never partially updated.

use serde::{Deserialize, Serialize};

/// Monthly active users partitioned into funnel tiers
///
/// Counts are floored, so the three segments may undershoot the total when
/// the funnel percentages do not divide evenly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSegments {
    /// Users on the free trial tier (no chat revenue)
    pub free_users: i64,
    /// Pay-per-message users
    pub paying_users: i64,
    /// Token holders with unlimited access
    pub holder_users: i64,
}

/// Token allocation figures derived from supply and distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFigures {
    /// Tokens allocated to the founder (whole tokens)
    pub founder_tokens: f64,
    /// Tokens allocated to the treasury (whole tokens)
    pub treasury_tokens: f64,
    /// Founder tokens released per month under linear vesting.
    /// Equal to `founder_tokens` when the vesting period is zero
    /// (fully vested immediately).
    pub founder_tokens_per_month: f64,
    /// What a holder's monthly chat usage would cost at the per-message
    /// price. The implied value of holding past the access threshold.
    #[serde(rename = "holderChatValueUSD")]
    pub holder_chat_value_usd: f64,
}

/// Chat message volumes per funnel tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageVolumes {
    /// Free-tier messages: a fixed trial allotment per free user,
    /// independent of any engagement rate
    pub free_messages: f64,
    /// Messages from pay-per-message users (the only metered tier)
    pub paid_messages: f64,
    /// Messages from token holders (unmetered)
    pub holder_messages: f64,
    /// All messages across tiers; drives LLM inference cost
    pub total_messages: f64,
}

/// The four monthly revenue lines and their sum (USD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueLines {
    /// Chat revenue. Only the pay-per-message tier is metered; free users
    /// and holders contribute nothing here.
    pub chat: f64,
    /// Tip revenue over all monthly active users. Tipping is universal
    /// across tiers, unlike chat metering.
    pub tips: f64,
    /// Daily character auction proceeds at a fixed 30-auctions/month cadence
    pub auctions: f64,
    /// Custom character creation fees
    pub custom_characters: f64,
    /// Sum of the four lines
    pub gross: f64,
}

/// Monthly operating costs (USD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// LLM inference: total messages times cost per message
    pub llm_inference: f64,
    /// Flat infrastructure cost
    pub infrastructure: f64,
    /// Sum of cost lines
    pub total: f64,
}

/// Founder revenue with its per-line breakdown (USD/month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderRevenue {
    /// Protocol share of chat revenue
    pub from_chat: f64,
    /// Protocol share of tip revenue
    pub from_tips: f64,
    /// Founder share of auction proceeds
    pub from_auctions: f64,
    /// Founder share of custom character fees
    pub from_custom_characters: f64,
    /// Sum across the four lines
    pub total: f64,
}

/// Monthly revenue accruing to each recipient (USD)
///
/// Auction and custom-character proceeds are split between treasury and
/// founder only; the character pool earns from chat and tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRevenue {
    /// Founder/protocol take, with breakdown
    pub founder: FounderRevenue,
    /// Treasury take across all four lines
    pub treasury: f64,
    /// Character-owner pool take (chat + tips only)
    pub character_pool: f64,
}

/// Founder goal analysis
///
/// The two "users needed" figures invert the revenue model. Each is `None`
/// when its division is undefined (non-positive per-user revenue, or a zero
/// pay-per-message share); they are never infinite or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalysis {
    /// Protocol revenue generated by one paying user per month (USD):
    /// protocol share of their chat spend plus protocol share of their tips
    pub revenue_per_paying_user: f64,
    /// Paying users required to hit the founder goal
    pub paying_users_needed: Option<i64>,
    /// Total users required, scaling paying users by the funnel share
    pub total_users_needed: Option<i64>,
    /// Whether founder revenue meets the stated monthly need
    pub goal_met: bool,
    /// Signed shortfall (need minus founder revenue); negative when the
    /// goal is exceeded, only meaningful when `goal_met` is false
    pub gap: f64,
}

/// Annual projections (monthly figures times twelve)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualProjection {
    pub founder: f64,
    pub treasury: f64,
    pub character_pool: f64,
    pub net: f64,
}

/// Complete derived output of one projection pass
///
/// Structural equality holds between any two computations over equal
/// parameter sets; see the property tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub segments: UserSegments,
    pub tokens: TokenFigures,
    pub messages: MessageVolumes,
    pub revenue: RevenueLines,
    pub costs: CostBreakdown,
    /// Gross revenue minus operating costs (USD/month)
    pub net_revenue: f64,
    /// Net over gross as a ratio. Defined as 0 when gross revenue is 0,
    /// matching the interactive model's behavior even though costs may be
    /// positive in that case (known quirk, kept for compatibility).
    pub profit_margin: f64,
    pub recipients: RecipientRevenue,
    pub goal: GoalAnalysis,
    pub annual: AnnualProjection,
}
