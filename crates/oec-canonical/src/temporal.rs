use chrono::{Local, NaiveDateTime};

/// Returns false when `value` is strictly later than the local wall clock.
///
/// Absence is always accepted.
pub fn is_not_future(value: Option<NaiveDateTime>) -> bool {
    is_not_future_at(value, Local::now().naive_local())
}

/// Same as [`is_not_future`] against an explicit `now`.
pub fn is_not_future_at(value: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match value {
        Some(t) => t <= now,
        None => true,
    }
}
