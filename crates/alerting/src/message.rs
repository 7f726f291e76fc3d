//! Chat message rendering
//!
//! One alert becomes one multi-line message. Each line is produced by a
//! renderer in [`LINE_RENDERERS`], evaluated in order; a renderer returns
//! `None` when its fields are absent and the line is simply omitted.
//! Nothing ever renders an "Unknown ..." placeholder.

use chrono::{DateTime, Utc};
use worldstate_client::AlertRecord;

/// Fixed first line of every announcement
pub const HEADER: &str = "**New Alert!**";

/// Reward descriptions equal to this (case-insensitive) are noise
const NO_REWARD: &str = "no special reward";

type LineRenderer = fn(&AlertRecord, DateTime<Utc>) -> Option<String>;

/// Ordered line producers; message = the Some() results joined with '\n'
const LINE_RENDERERS: &[LineRenderer] = &[
    header_line,
    mission_line,
    faction_line,
    level_line,
    reward_line,
    expiry_line,
];

/// Render one alert at the given instant (injected for testability)
pub fn render(alert: &AlertRecord, now: DateTime<Utc>) -> String {
    LINE_RENDERERS
        .iter()
        .filter_map(|renderer| renderer(alert, now))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-friendly time remaining until `expiry`.
///
/// A trailing `Z` is UTC. Absent or unparseable timestamps yield `None`
/// rather than an error; the expiry line is then omitted downstream.
pub fn expires_in(expiry: Option<&str>, now: DateTime<Utc>) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(expiry?).ok()?;
    let seconds = (parsed.with_timezone(&Utc) - now).num_seconds();

    if seconds <= 0 {
        return Some("Expired".to_string());
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        Some(format!("{}h {}m", hours, minutes))
    } else {
        Some(format!("{}m", minutes))
    }
}

fn header_line(_alert: &AlertRecord, _now: DateTime<Utc>) -> Option<String> {
    Some(HEADER.to_string())
}

fn mission_line(alert: &AlertRecord, _now: DateTime<Utc>) -> Option<String> {
    let mission = alert.mission.as_ref()?;
    let mut parts: Vec<String> = Vec::new();
    if let Some(kind) = mission.mission_type.as_deref() {
        parts.push(kind.to_string());
    }
    if let Some(node) = mission.node.as_deref() {
        parts.push(format!("@ {}", node));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("**Mission:** {}", parts.join(" ")))
    }
}

fn faction_line(alert: &AlertRecord, _now: DateTime<Utc>) -> Option<String> {
    let faction = alert.mission.as_ref()?.faction.as_deref()?;
    Some(format!("**Faction:** {}", faction))
}

fn level_line(alert: &AlertRecord, _now: DateTime<Utc>) -> Option<String> {
    let mission = alert.mission.as_ref()?;
    match (mission.min_enemy_level, mission.max_enemy_level) {
        (Some(min), Some(max)) => Some(format!("**Level:** {}-{}", min, max)),
        (Some(min), None) => Some(format!("**Level:** {}+", min)),
        (None, Some(max)) => Some(format!("**Level:** up to {}", max)),
        (None, None) => None,
    }
}

fn reward_line(alert: &AlertRecord, _now: DateTime<Utc>) -> Option<String> {
    let mut bits: Vec<String> = Vec::new();

    if let Some(description) = alert.reward_description() {
        let description = description.trim();
        if !description.is_empty() && !description.eq_ignore_ascii_case(NO_REWARD) {
            bits.push(description.to_string());
        }
    }

    if let Some(credits) = alert.reward_credits() {
        if credits > 0 {
            bits.push(format!("{}cr", credits));
        }
    }

    if bits.is_empty() {
        None
    } else {
        Some(format!("**Reward:** {}", bits.join(" + ")))
    }
}

fn expiry_line(alert: &AlertRecord, now: DateTime<Utc>) -> Option<String> {
    expires_in(alert.expiry.as_deref(), now).map(|eta| format!("**Expires in:** {}", eta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn alert(value: serde_json::Value) -> AlertRecord {
        serde_json::from_value(value).unwrap()
    }

    fn now() -> DateTime<Utc> {
        "2026-08-27T12:00:00Z".parse().unwrap()
    }

    fn stamp(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    #[test]
    fn test_expiry_in_the_past_is_expired() {
        let past = stamp(now() - Duration::minutes(5));
        assert_eq!(expires_in(Some(&past), now()).as_deref(), Some("Expired"));
    }

    #[test]
    fn test_expiry_exactly_now_is_expired() {
        let at = stamp(now());
        assert_eq!(expires_in(Some(&at), now()).as_deref(), Some("Expired"));
    }

    #[test]
    fn test_expiry_90_minutes_out() {
        let at = stamp(now() + Duration::minutes(90));
        assert_eq!(expires_in(Some(&at), now()).as_deref(), Some("1h 30m"));
    }

    #[test]
    fn test_expiry_45_minutes_out() {
        let at = stamp(now() + Duration::minutes(45));
        assert_eq!(expires_in(Some(&at), now()).as_deref(), Some("45m"));
    }

    #[test]
    fn test_expiry_absent_or_garbage_is_none() {
        assert_eq!(expires_in(None, now()), None);
        assert_eq!(expires_in(Some("not a timestamp"), now()), None);
    }

    #[test]
    fn test_full_alert_renders_every_line() {
        let expiry = stamp(now() + Duration::minutes(90));
        let alert = alert(json!({
            "id": "a",
            "mission": {
                "type": "Rescue",
                "node": "Cambria (Earth)",
                "faction": "Grineer",
                "minEnemyLevel": 8,
                "maxEnemyLevel": 10,
                "reward": {"itemString": "Orokin Catalyst", "credits": 5500}
            },
            "expiry": expiry
        }));
        assert_eq!(
            render(&alert, now()),
            "**New Alert!**\n\
             **Mission:** Rescue @ Cambria (Earth)\n\
             **Faction:** Grineer\n\
             **Level:** 8-10\n\
             **Reward:** Orokin Catalyst + 5500cr\n\
             **Expires in:** 1h 30m"
        );
    }

    #[test]
    fn test_bare_alert_renders_header_only() {
        assert_eq!(render(&alert(json!({"id": "a"})), now()), HEADER);
    }

    #[test]
    fn test_bare_alert_with_expiry_renders_two_lines() {
        let expiry = stamp(now() + Duration::minutes(45));
        let rendered = render(&alert(json!({"id": "a", "expiry": expiry})), now());
        assert_eq!(rendered, "**New Alert!**\n**Expires in:** 45m");
    }

    #[test]
    fn test_mission_line_variants() {
        let both = alert(json!({"mission": {"type": "Rescue", "node": "Cambria"}}));
        let type_only = alert(json!({"mission": {"type": "Rescue"}}));
        let node_only = alert(json!({"mission": {"node": "Cambria"}}));
        assert_eq!(
            mission_line(&both, now()).as_deref(),
            Some("**Mission:** Rescue @ Cambria")
        );
        assert_eq!(
            mission_line(&type_only, now()).as_deref(),
            Some("**Mission:** Rescue")
        );
        assert_eq!(
            mission_line(&node_only, now()).as_deref(),
            Some("**Mission:** @ Cambria")
        );
    }

    #[test]
    fn test_level_line_variants() {
        let min_only = alert(json!({"mission": {"minEnemyLevel": 10}}));
        let max_only = alert(json!({"mission": {"maxEnemyLevel": 30}}));
        let both = alert(json!({"mission": {"minEnemyLevel": 10, "maxEnemyLevel": 30}}));
        let neither = alert(json!({"mission": {}}));
        assert_eq!(level_line(&min_only, now()).as_deref(), Some("**Level:** 10+"));
        assert_eq!(level_line(&max_only, now()).as_deref(), Some("**Level:** up to 30"));
        assert_eq!(level_line(&both, now()).as_deref(), Some("**Level:** 10-30"));
        assert_eq!(level_line(&neither, now()), None);
    }

    #[test]
    fn test_no_special_reward_suppressed_any_case() {
        for phrase in ["No special reward", "NO SPECIAL REWARD", "no special reward"] {
            let a = alert(json!({"mission": {"reward": {"itemString": phrase}}}));
            assert_eq!(reward_line(&a, now()), None, "phrase: {}", phrase);
        }
    }

    #[test]
    fn test_zero_credits_do_not_make_a_reward_line() {
        let a = alert(json!({"mission": {"reward": {"credits": 0}}}));
        assert_eq!(reward_line(&a, now()), None);
    }

    #[test]
    fn test_credits_only_reward() {
        let a = alert(json!({"mission": {"reward": {"itemString": "  ", "credits": 3000}}}));
        assert_eq!(reward_line(&a, now()).as_deref(), Some("**Reward:** 3000cr"));
    }

    #[test]
    fn test_item_only_reward() {
        let a = alert(json!({"mission": {"reward": {"itemString": "Forma"}}}));
        assert_eq!(reward_line(&a, now()).as_deref(), Some("**Reward:** Forma"));
    }
}
