//! Data model: users, friendship edges, interaction weights and suggestions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable identifier of a user.
pub type UserId = u64;

/// Interaction strength toward one neighbor, as it appears in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// The neighbor this weight applies to.
    pub user_id: UserId,
    /// Interaction strength, positive.
    pub weight: u32,
}

/// A node of the friendship graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable id.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unique search key, matched case-sensitively.
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    /// Opaque avatar reference.
    #[serde(default)]
    pub avatar: String,
    /// Ids of direct friends, in insertion order.
    #[serde(default)]
    pub friends: Vec<UserId>,
    /// Interaction weight per neighbor id. Always present, possibly empty.
    ///
    /// Serialized as a list of [`Interaction`] entries ordered by neighbor id.
    /// When a list names the same neighbor twice, the first weight is kept.
    #[serde(default, with = "interaction_list")]
    pub interactions: BTreeMap<UserId, u32>,
}

impl User {
    /// Create a user with no edges.
    pub fn new(id: UserId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// Whether `other` is listed as a direct friend.
    pub fn is_friend(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// This user's interaction weight toward `other`, 0 when absent.
    pub fn interaction_weight(&self, other: UserId) -> u32 {
        self.interactions.get(&other).copied().unwrap_or(0)
    }
}

/// A ranked "people you may know" candidate. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSuggestion {
    /// The suggested user.
    pub user: User,
    /// Users adjacent to both the query user and the candidate.
    pub mutual_friends: Vec<User>,
    /// BFS depth at which the candidate was first discovered (>= 2).
    pub connection_level: usize,
    /// One shortest path from the query user to the candidate, both included.
    pub connection_path: Vec<User>,
    /// `alpha * |mutual_friends| + beta * interaction_weight`.
    pub score: f64,
    /// Sum over mutual friends of the bottleneck weight of the two-hop path.
    pub interaction_weight: u64,
}

/// Serialized form of a whole user collection: `{"users": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
}

mod interaction_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Interaction, UserId};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<UserId, u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let list: Vec<Interaction> = map
            .iter()
            .map(|(&user_id, &weight)| Interaction { user_id, weight })
            .collect();
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<UserId, u32>, D::Error> {
        let list = Vec::<Interaction>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        // first entry for a neighbor wins, later duplicates are ignored
        for i in list {
            map.entry(i.user_id).or_insert(i.weight);
        }
        Ok(map)
    }
}
