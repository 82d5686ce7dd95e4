//! Suggestion command handler.

use friendgraph_core::{SuggestionDefaults, UserId};
use friendgraph_engine::{FriendGraph, SuggestionFilter, SuggestionQuery};

use crate::{Error, Output, Result};

/// Reject negative, NaN and infinite scoring weights.
fn validate_weight(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput {
            reason: format!("{} must be a finite, non-negative number, got {}", name, value),
        });
    }
    Ok(value)
}

/// Handle GetFriendSuggestions command.
///
/// Unset parameters come from `defaults`.
#[allow(clippy::too_many_arguments)]
pub fn get_friend_suggestions(
    g: &FriendGraph,
    defaults: &SuggestionDefaults,
    user_id: UserId,
    max_level: Option<usize>,
    alpha: Option<f64>,
    beta: Option<f64>,
    min_mutual_friends: Option<usize>,
    max_connection_level: Option<usize>,
) -> Result<Output> {
    let max_level = max_level.unwrap_or(defaults.max_level);
    if max_level == 0 {
        return Err(Error::InvalidInput {
            reason: "max_level must be at least 1".into(),
        });
    }
    let query = SuggestionQuery {
        max_level,
        alpha: validate_weight("alpha", alpha.unwrap_or(defaults.alpha))?,
        beta: validate_weight("beta", beta.unwrap_or(defaults.beta))?,
    };
    let filter = SuggestionFilter {
        max_level: max_connection_level,
        min_mutual_friends: min_mutual_friends.unwrap_or(defaults.min_mutual_friends),
    };

    Ok(Output::Suggestions(
        g.get_filtered_suggestions(user_id, &query, &filter),
    ))
}
