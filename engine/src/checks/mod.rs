//! Allocation Invariant Checks
//!
//! Advisory validation over the grouped percentage fields: each group is
//! expected (not required) to sum to 100. An unbalanced group is reported
//! with its actual sum and never blocks a projection run; the interactive
//! model is exploratory and the math stays well-defined either way.

use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};

/// Tolerance when comparing a group sum against 100, absorbing
/// float summation-order noise
pub const BALANCE_EPSILON: f64 = 1e-9;

/// The six grouped percentage sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AllocationGroup {
    /// Founder / treasury / community / liquidity / public sale
    TokenDistribution,
    /// Free / pay-per-message / token holders
    UserFunnel,
    /// Character / treasury / protocol shares of chat revenue
    ChatSplit,
    /// Character / treasury / protocol shares of tip revenue
    TipSplit,
    /// Treasury / founder shares of auction proceeds
    AuctionSplit,
    /// Treasury / founder shares of custom character fees
    CustomCharacterSplit,
}

impl AllocationGroup {
    /// Stable machine-readable key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            AllocationGroup::TokenDistribution => "tokenDistribution",
            AllocationGroup::UserFunnel => "userFunnel",
            AllocationGroup::ChatSplit => "chatSplit",
            AllocationGroup::TipSplit => "tipSplit",
            AllocationGroup::AuctionSplit => "auctionSplit",
            AllocationGroup::CustomCharacterSplit => "customCharacterSplit",
        }
    }

    /// Human-readable group label for reports and warnings
    pub fn label(&self) -> &'static str {
        match self {
            AllocationGroup::TokenDistribution => "token distribution",
            AllocationGroup::UserFunnel => "user funnel",
            AllocationGroup::ChatSplit => "chat revenue split",
            AllocationGroup::TipSplit => "tip revenue split",
            AllocationGroup::AuctionSplit => "auction revenue split",
            AllocationGroup::CustomCharacterSplit => "custom character revenue split",
        }
    }
}

/// Result of checking one percentage group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCheck {
    /// Which group was summed
    pub group: AllocationGroup,
    /// The actual sum of the group's percentage fields
    pub actual_sum: f64,
    /// Whether the sum is within [`BALANCE_EPSILON`] of 100
    pub balanced: bool,
}

impl AllocationCheck {
    fn new(group: AllocationGroup, actual_sum: f64) -> Self {
        Self {
            group,
            actual_sum,
            balanced: (actual_sum - 100.0).abs() <= BALANCE_EPSILON,
        }
    }
}

/// Check every percentage group of a parameter set
///
/// Always returns one entry per group, balanced or not, in a fixed order.
/// Purely advisory: callers are expected to surface unbalanced groups and
/// still run [`crate::projection::compute`].
///
/// # Example
///
/// ```rust
/// use tokenomics_simulator_core_rs::{check_allocations, ParameterSet};
///
/// let checks = check_allocations(&ParameterSet::default());
/// assert!(checks.iter().all(|c| c.balanced));
/// ```
pub fn check_allocations(params: &ParameterSet) -> Vec<AllocationCheck> {
    vec![
        AllocationCheck::new(
            AllocationGroup::TokenDistribution,
            params.founder_allocation
                + params.treasury_allocation
                + params.community_allocation
                + params.liquidity_allocation
                + params.public_sale_allocation,
        ),
        AllocationCheck::new(
            AllocationGroup::UserFunnel,
            params.pct_free_only + params.pct_pay_per_message + params.pct_token_holders,
        ),
        AllocationCheck::new(
            AllocationGroup::ChatSplit,
            params.chat_character_split + params.chat_treasury_split + params.chat_protocol_split,
        ),
        AllocationCheck::new(
            AllocationGroup::TipSplit,
            params.tip_character_split + params.tip_treasury_split + params.tip_protocol_split,
        ),
        AllocationCheck::new(
            AllocationGroup::AuctionSplit,
            params.auction_treasury_split + params.auction_founder_split,
        ),
        AllocationCheck::new(
            AllocationGroup::CustomCharacterSplit,
            params.custom_char_treasury_split + params.custom_char_founder_split,
        ),
    ]
}
