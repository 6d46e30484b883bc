//! Slot ordering and classification

use chrono_tz::Tz;
use shared::{Slot, SlotStatus};

/// Stable ascending sort by local start time
pub fn sort(slots: &mut [Slot], tz: Tz) {
    slots.sort_by_key(|slot| slot.local_start(tz));
}

/// Completed and cancelled slots no longer occupy the dock
pub fn is_completed_or_cancelled(slot: &Slot) -> bool {
    matches!(slot.status, SlotStatus::Completed | SlotStatus::Cancelled)
}

pub fn is_active(slot: &Slot) -> bool {
    !is_completed_or_cancelled(slot)
}

pub fn count_active(slots: &[Slot]) -> usize {
    slots.iter().filter(|slot| is_active(slot)).count()
}
