use chrono::NaiveDate;

/// Consecutive writing days ending at the most recent entry.
///
/// The most recent entry may be today or yesterday; anything older breaks the
/// streak. From there every link back must be exactly one day apart.
pub fn current_streak<'a, I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = dates.into_iter().copied().collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let Some(latest) = dates.first() else {
        return 0;
    };
    if (today - *latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive days anywhere in the journal.
pub fn longest_streak<'a, I>(dates: I) -> u32
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = dates.into_iter().copied().collect();
    dates.sort_unstable();
    dates.dedup();

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for date in dates {
        run = match prev {
            Some(p) if (date - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}
