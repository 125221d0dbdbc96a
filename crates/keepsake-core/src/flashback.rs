//! Flashback filter: memories from this day in earlier years.

use crate::model::Memory;
use chrono::{Datelike, NaiveDate};

/// Whether a memory is a flashback for the given day: same calendar day
/// and month, year strictly earlier.
pub fn is_flashback(memory: &Memory, today: NaiveDate) -> bool {
    let date = memory.date.date_naive();
    date.day() == today.day() && date.month() == today.month() && date.year() < today.year()
}

/// Filter a collection down to flashbacks for the given day.
///
/// Input order is preserved; callers pass the persisted order straight
/// through. No match is an empty result, not an error. Production
/// callers pass `Utc::now().date_naive()` as today.
pub fn flashbacks(memories: &[Memory], today: NaiveDate) -> Vec<&Memory> {
    memories
        .iter()
        .filter(|memory| is_flashback(memory, today))
        .collect()
}
