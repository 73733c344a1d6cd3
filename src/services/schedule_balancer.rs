/// Pick which available weekdays receive a session so sessions spread evenly
/// across the week instead of clustering.
///
/// `available_day_ids` must be sorted ascending (0 = Sunday). Returns a sorted
/// subset of size `min(sessions_per_week, available_day_ids.len())`.
pub fn balance_weekly_schedule(available_day_ids: &[u8], sessions_per_week: u32) -> Vec<u8> {
    let available_count = available_day_ids.len();
    let sessions = sessions_per_week as usize;

    if sessions == 0 || available_count == 0 {
        return Vec::new();
    }

    if sessions >= available_count {
        return available_day_ids.to_vec();
    }

    let spacing = available_count / sessions;
    let remainder = available_count % sessions;

    let mut schedule = Vec::with_capacity(sessions);
    let mut current_index = 0;
    for pick in 0..sessions {
        schedule.push(available_day_ids[current_index]);

        // The first `remainder` picks absorb one extra day of spacing
        let extra_spacing = if pick < remainder { 1 } else { 0 };
        current_index = (current_index + spacing + extra_spacing) % available_count;
    }

    schedule.sort_unstable();
    schedule
}
