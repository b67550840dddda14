//! Simulation Parameters
//!
//! The complete set of named numeric inputs for the tokenomics model:
//! token distribution, revenue splits, pricing, user funnel, engagement,
//! operating costs, and the founder income goal.
//!
//! # Critical Invariants
//!
//! 1. `ParameterSet` is a fixed-shape value type: a missing field cannot
//!    exist once a set has been constructed. Sparse inputs (JSON, Python
//!    dicts) are rejected at the boundary, not here.
//! 2. Updates never mutate: [`ParameterSet::with_field`] returns a fresh set
//!    with exactly one field replaced.
//! 3. No range enforcement. Percentages outside [0, 100] or negative volumes
//!    flow through to the projection unchanged; balance problems are
//!    reported by the advisory checks in [`crate::checks`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during name-based parameter access
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("Unknown parameter field '{0}'")]
    UnknownField(String),
}

/// All public field identifiers, in declaration order.
///
/// These are the exact names accepted by [`ParameterSet::with_field`] and
/// [`ParameterSet::get`], and the names used in JSON (de)serialization.
pub const FIELD_NAMES: [&str; 34] = [
    "founderAllocation",
    "treasuryAllocation",
    "communityAllocation",
    "liquidityAllocation",
    "publicSaleAllocation",
    "totalSupply",
    "tokenHolderThreshold",
    "founderVestingYears",
    "chatCharacterSplit",
    "chatTreasurySplit",
    "chatProtocolSplit",
    "tipCharacterSplit",
    "tipTreasurySplit",
    "tipProtocolSplit",
    "auctionTreasurySplit",
    "auctionFounderSplit",
    "customCharTreasurySplit",
    "customCharFounderSplit",
    "chatPriceUSD",
    "avgTipUSD",
    "ethPriceUSD",
    "avgDailyAuctionETH",
    "customCharacterFeeETH",
    "monthlyActiveUsers",
    "pctFreeOnly",
    "pctPayPerMessage",
    "pctTokenHolders",
    "chatsPerPayingUser",
    "chatsPerHolder",
    "tipsPerUserPerMonth",
    "customCharactersPerMonth",
    "costPerMessage",
    "monthlyInfraCostUSD",
    "founderMonthlyNeedUSD",
];

/// Complete input parameter set for one projection run
///
/// Every field is an `f64` so that the whole set can be addressed uniformly
/// by name from form controls, JSON, and FFI callers. Integer-valued inputs
/// (user counts, token supply) are floored where the projection requires it.
///
/// # Example
///
/// ```rust
/// use tokenomics_simulator_core_rs::ParameterSet;
///
/// let params = ParameterSet::default();
/// assert_eq!(params.founder_allocation, 15.0);
///
/// let tweaked = params.with_field("founderAllocation", 20.0).unwrap();
/// assert_eq!(tweaked.founder_allocation, 20.0);
/// assert_eq!(params.founder_allocation, 15.0); // original untouched
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParameterSet {
    // Token distribution (percentages, expected to sum to 100)
    /// Founder/team allocation, vested over time (% of total supply)
    pub founder_allocation: f64,
    /// DAO treasury allocation (% of total supply)
    pub treasury_allocation: f64,
    /// Community/airdrop allocation (% of total supply)
    pub community_allocation: f64,
    /// Liquidity pool allocation (% of total supply)
    pub liquidity_allocation: f64,
    /// Public sale allocation (% of total supply)
    pub public_sale_allocation: f64,

    // Token details
    /// Total token supply (whole tokens)
    pub total_supply: f64,
    /// Tokens required for the unlimited-access holder tier
    pub token_holder_threshold: f64,
    /// Founder vesting period in years; 0 means fully vested immediately
    pub founder_vesting_years: f64,

    // Chat revenue split (percentages, expected to sum to 100)
    /// Chat revenue share paid to the character owner (%)
    pub chat_character_split: f64,
    /// Chat revenue share retained by the treasury (%)
    pub chat_treasury_split: f64,
    /// Chat revenue share retained by the protocol/founder (%)
    pub chat_protocol_split: f64,

    // Tip revenue split (percentages, expected to sum to 100)
    /// Tip revenue share paid to the character owner (%)
    pub tip_character_split: f64,
    /// Tip revenue share retained by the treasury (%)
    pub tip_treasury_split: f64,
    /// Tip revenue share retained by the protocol/founder (%)
    pub tip_protocol_split: f64,

    // Daily auction split (percentages, expected to sum to 100)
    /// Auction proceeds share sent to the treasury (%)
    pub auction_treasury_split: f64,
    /// Auction proceeds share sent to the founder (%)
    pub auction_founder_split: f64,

    // Custom character creation split (percentages, expected to sum to 100)
    /// Creation fee share sent to the treasury (%)
    pub custom_char_treasury_split: f64,
    /// Creation fee share sent to the founder (%)
    pub custom_char_founder_split: f64,

    // Pricing
    /// Price per chat message (USD)
    #[serde(rename = "chatPriceUSD")]
    pub chat_price_usd: f64,
    /// Average tip amount (USD)
    #[serde(rename = "avgTipUSD")]
    pub avg_tip_usd: f64,
    /// ETH/USD exchange rate used to convert on-chain revenue
    #[serde(rename = "ethPriceUSD")]
    pub eth_price_usd: f64,
    /// Average winning bid in the daily character auction (ETH)
    #[serde(rename = "avgDailyAuctionETH")]
    pub avg_daily_auction_eth: f64,
    /// Fee to create a custom character (ETH)
    #[serde(rename = "customCharacterFeeETH")]
    pub custom_character_fee_eth: f64,

    // User funnel and engagement
    /// Monthly active users across all tiers
    pub monthly_active_users: f64,
    /// Funnel share that only uses the free trial (%)
    pub pct_free_only: f64,
    /// Funnel share that pays per message (%)
    pub pct_pay_per_message: f64,
    /// Funnel share holding enough tokens for unlimited access (%)
    pub pct_token_holders: f64,
    /// Messages per pay-per-message user per month
    pub chats_per_paying_user: f64,
    /// Messages per token holder per month (unlimited tier)
    pub chats_per_holder: f64,
    /// Tips sent per active user per month (all tiers tip)
    pub tips_per_user_per_month: f64,
    /// Custom characters created per month
    pub custom_characters_per_month: f64,

    // Operating costs
    /// LLM inference cost per message (USD)
    pub cost_per_message: f64,
    /// Flat monthly infrastructure cost (USD)
    #[serde(rename = "monthlyInfraCostUSD")]
    pub monthly_infra_cost_usd: f64,

    // Founder goal
    /// Founder's target monthly income (USD)
    #[serde(rename = "founderMonthlyNeedUSD")]
    pub founder_monthly_need_usd: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            founder_allocation: 15.0,
            treasury_allocation: 35.0,
            community_allocation: 10.0,
            liquidity_allocation: 10.0,
            public_sale_allocation: 30.0,
            total_supply: 1_000_000_000.0,
            token_holder_threshold: 10_000.0, // tokens needed for unlimited access
            founder_vesting_years: 3.0,
            chat_character_split: 50.0,
            chat_treasury_split: 30.0,
            chat_protocol_split: 20.0,
            tip_character_split: 70.0,
            tip_treasury_split: 20.0,
            tip_protocol_split: 10.0,
            auction_treasury_split: 80.0,
            auction_founder_split: 20.0,
            custom_char_treasury_split: 50.0,
            custom_char_founder_split: 50.0,
            chat_price_usd: 0.25,
            avg_tip_usd: 5.0,
            eth_price_usd: 3500.0,
            avg_daily_auction_eth: 0.5, // average winning bid
            custom_character_fee_eth: 0.25,
            monthly_active_users: 10_000.0,
            pct_free_only: 40.0,
            pct_pay_per_message: 35.0,
            pct_token_holders: 25.0,
            chats_per_paying_user: 30.0,
            chats_per_holder: 100.0, // holders chat more (it's free for them)
            tips_per_user_per_month: 2.0,
            custom_characters_per_month: 20.0,
            cost_per_message: 0.02, // LLM API cost
            monthly_infra_cost_usd: 500.0,
            founder_monthly_need_usd: 20_000.0,
        }
    }
}

impl ParameterSet {
    /// Read a field by its public identifier
    ///
    /// # Arguments
    /// * `name` - Public field identifier (e.g. `"chatPriceUSD"`)
    ///
    /// # Errors
    /// `ParameterError::UnknownField` if the identifier is not recognized
    pub fn get(&self, name: &str) -> Result<f64, ParameterError> {
        let value = match name {
            "founderAllocation" => self.founder_allocation,
            "treasuryAllocation" => self.treasury_allocation,
            "communityAllocation" => self.community_allocation,
            "liquidityAllocation" => self.liquidity_allocation,
            "publicSaleAllocation" => self.public_sale_allocation,
            "totalSupply" => self.total_supply,
            "tokenHolderThreshold" => self.token_holder_threshold,
            "founderVestingYears" => self.founder_vesting_years,
            "chatCharacterSplit" => self.chat_character_split,
            "chatTreasurySplit" => self.chat_treasury_split,
            "chatProtocolSplit" => self.chat_protocol_split,
            "tipCharacterSplit" => self.tip_character_split,
            "tipTreasurySplit" => self.tip_treasury_split,
            "tipProtocolSplit" => self.tip_protocol_split,
            "auctionTreasurySplit" => self.auction_treasury_split,
            "auctionFounderSplit" => self.auction_founder_split,
            "customCharTreasurySplit" => self.custom_char_treasury_split,
            "customCharFounderSplit" => self.custom_char_founder_split,
            "chatPriceUSD" => self.chat_price_usd,
            "avgTipUSD" => self.avg_tip_usd,
            "ethPriceUSD" => self.eth_price_usd,
            "avgDailyAuctionETH" => self.avg_daily_auction_eth,
            "customCharacterFeeETH" => self.custom_character_fee_eth,
            "monthlyActiveUsers" => self.monthly_active_users,
            "pctFreeOnly" => self.pct_free_only,
            "pctPayPerMessage" => self.pct_pay_per_message,
            "pctTokenHolders" => self.pct_token_holders,
            "chatsPerPayingUser" => self.chats_per_paying_user,
            "chatsPerHolder" => self.chats_per_holder,
            "tipsPerUserPerMonth" => self.tips_per_user_per_month,
            "customCharactersPerMonth" => self.custom_characters_per_month,
            "costPerMessage" => self.cost_per_message,
            "monthlyInfraCostUSD" => self.monthly_infra_cost_usd,
            "founderMonthlyNeedUSD" => self.founder_monthly_need_usd,
            _ => return Err(ParameterError::UnknownField(name.to_string())),
        };
        Ok(value)
    }

    /// Return a new parameter set with exactly one field replaced
    ///
    /// The value is stored as-is; no range validation is applied.
    ///
    /// # Arguments
    /// * `name` - Public field identifier (e.g. `"pctPayPerMessage"`)
    /// * `value` - New value for that field
    ///
    /// # Errors
    /// `ParameterError::UnknownField` if the identifier is not recognized
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokenomics_simulator_core_rs::ParameterSet;
    ///
    /// let params = ParameterSet::default()
    ///     .with_field("monthlyActiveUsers", 50_000.0)
    ///     .unwrap();
    /// assert_eq!(params.monthly_active_users, 50_000.0);
    /// ```
    pub fn with_field(&self, name: &str, value: f64) -> Result<ParameterSet, ParameterError> {
        let mut next = self.clone();
        match name {
            "founderAllocation" => next.founder_allocation = value,
            "treasuryAllocation" => next.treasury_allocation = value,
            "communityAllocation" => next.community_allocation = value,
            "liquidityAllocation" => next.liquidity_allocation = value,
            "publicSaleAllocation" => next.public_sale_allocation = value,
            "totalSupply" => next.total_supply = value,
            "tokenHolderThreshold" => next.token_holder_threshold = value,
            "founderVestingYears" => next.founder_vesting_years = value,
            "chatCharacterSplit" => next.chat_character_split = value,
            "chatTreasurySplit" => next.chat_treasury_split = value,
            "chatProtocolSplit" => next.chat_protocol_split = value,
            "tipCharacterSplit" => next.tip_character_split = value,
            "tipTreasurySplit" => next.tip_treasury_split = value,
            "tipProtocolSplit" => next.tip_protocol_split = value,
            "auctionTreasurySplit" => next.auction_treasury_split = value,
            "auctionFounderSplit" => next.auction_founder_split = value,
            "customCharTreasurySplit" => next.custom_char_treasury_split = value,
            "customCharFounderSplit" => next.custom_char_founder_split = value,
            "chatPriceUSD" => next.chat_price_usd = value,
            "avgTipUSD" => next.avg_tip_usd = value,
            "ethPriceUSD" => next.eth_price_usd = value,
            "avgDailyAuctionETH" => next.avg_daily_auction_eth = value,
            "customCharacterFeeETH" => next.custom_character_fee_eth = value,
            "monthlyActiveUsers" => next.monthly_active_users = value,
            "pctFreeOnly" => next.pct_free_only = value,
            "pctPayPerMessage" => next.pct_pay_per_message = value,
            "pctTokenHolders" => next.pct_token_holders = value,
            "chatsPerPayingUser" => next.chats_per_paying_user = value,
            "chatsPerHolder" => next.chats_per_holder = value,
            "tipsPerUserPerMonth" => next.tips_per_user_per_month = value,
            "customCharactersPerMonth" => next.custom_characters_per_month = value,
            "costPerMessage" => next.cost_per_message = value,
            "monthlyInfraCostUSD" => next.monthly_infra_cost_usd = value,
            "founderMonthlyNeedUSD" => next.founder_monthly_need_usd = value,
            _ => return Err(ParameterError::UnknownField(name.to_string())),
        }
        Ok(next)
    }
}
