// Legacy roster migration.
//
// Early documents stored a single week of attendance directly under each
// member (`attendance.monday = {..}`). The current format keys attendance by
// week identifier. Old-format members are detected by the absence of any
// week-identifier-shaped attendance key and their whole attendance object is
// moved under the current week.

use serde_json::{Map, Value};

use crate::modules::attendance::core::model::TeamMember;
use crate::modules::attendance::core::week::{current_week_id, is_week_id};

/// Returns the migrated roster and whether anything had to be rewritten.
///
/// Malformed input never surfaces as an error: a non-array document or a
/// document that does not deserialize after patching yields an empty roster.
pub fn migrate_members_if_needed(value: Value) -> (Vec<TeamMember>, bool) {
    let Value::Array(raw_members) = value else {
        tracing::error!("expected an array of team members in the stored roster");
        return (Vec::new(), false);
    };

    let current_week = current_week_id();
    let mut changed = false;
    let mut patched = Vec::with_capacity(raw_members.len());
    for mut raw in raw_members {
        if migrate_member(&mut raw, &current_week) {
            changed = true;
        }
        patched.push(raw);
    }

    match serde_json::from_value::<Vec<TeamMember>>(Value::Array(patched)) {
        Ok(members) => {
            if changed {
                tracing::info!("migrated roster to the per-week attendance format");
            }
            (members, changed)
        }
        Err(err) => {
            tracing::error!(%err, "stored roster has an unexpected shape");
            (Vec::new(), false)
        }
    }
}

fn migrate_member(raw: &mut Value, current_week: &str) -> bool {
    let Some(member) = raw.as_object_mut() else {
        // left untouched; the strict deserialize decides what happens next
        return false;
    };

    let already_per_week = matches!(
        member.get("attendance"),
        Some(Value::Object(attendance)) if attendance.keys().any(|key| is_week_id(key))
    );
    if already_per_week {
        return false;
    }

    // A missing or non-object attendance starts out empty for the current
    // week; anything else is wrapped whole.
    let old = match member.remove("attendance") {
        Some(Value::Object(old)) => old,
        _ => Map::new(),
    };
    let mut weeks = Map::new();
    weeks.insert(current_week.to_string(), Value::Object(old));
    member.insert("attendance".to_string(), Value::Object(weeks));
    true
}
