//! Internal helpers for the history module

use chrono::{DateTime, Utc};

use crate::record::CalculationRecord;

/// Next record id: the creation time in milliseconds, bumped past every id
/// already in the collection so ids stay strictly increasing even when
/// several records are created within the same millisecond.
///
/// Returns `None` when the collection already holds `u64::MAX`.
pub fn next_id(records: &[CalculationRecord], now: DateTime<Utc>) -> Option<u64> {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let floor = match records.iter().map(|record| record.id).max() {
        Some(max) => max.checked_add(1)?,
        None => 0,
    };
    Some(millis.max(floor))
}

/// Position of the first record carrying `id`
pub fn position_of(records: &[CalculationRecord], id: u64) -> Option<usize> {
    records.iter().position(|record| record.id == id)
}
