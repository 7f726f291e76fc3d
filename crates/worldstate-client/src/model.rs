//! Wire model for worldstate alert records
//!
//! Every field is optional: the feed omits fields freely and the formatter
//! downstream drops whatever is missing. Nothing here fails on a sparse
//! record.

use serde::Deserialize;

/// One active alert as served by the worldstate API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    #[serde(default)]
    id: Option<AlertId>,
    /// Mission on offer, including the nested reward
    #[serde(default)]
    pub mission: Option<Mission>,
    /// ISO-8601 expiry, usually with a trailing `Z`
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Mission sub-record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    #[serde(rename = "type", default)]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub node: Option<String>,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub min_enemy_level: Option<i64>,
    #[serde(default)]
    pub max_enemy_level: Option<i64>,
    #[serde(default)]
    pub reward: Option<Reward>,
}

/// Reward sub-record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(default)]
    pub item_string: Option<String>,
    #[serde(default)]
    pub as_string: Option<String>,
    #[serde(default)]
    pub credits: Option<i64>,
}

/// The feed serves ids as strings or bare numbers depending on record age
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AlertId {
    Text(String),
    Number(serde_json::Number),
}

impl AlertRecord {
    /// Dedupe key: the alert id normalized to a string. Empty or missing
    /// ids yield `None` and the record is never announced.
    pub fn id(&self) -> Option<String> {
        match &self.id {
            Some(AlertId::Text(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(AlertId::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Reward description: `itemString`, falling back to `asString`
    pub fn reward_description(&self) -> Option<&str> {
        let reward = self.mission.as_ref()?.reward.as_ref()?;
        reward.item_string.as_deref().or(reward.as_string.as_deref())
    }

    /// Reward credit amount, if any
    pub fn reward_credits(&self) -> Option<i64> {
        self.mission.as_ref()?.reward.as_ref()?.credits
    }
}
