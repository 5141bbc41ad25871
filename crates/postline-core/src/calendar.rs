//! Calendar-grid generation and per-date bucketing.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::domain::Post;

/// Number of cells in the fixed 6x7 month grid.
pub const GRID_DAYS: usize = 42;

/// The 42 consecutive days backing a month view.
///
/// Starts from the most recent Sunday on or before the 1st of `anchor`'s
/// month and always emits six full weeks, so the grid renders a fixed 6x7
/// layout for every month. Leading and trailing cells belong to adjacent
/// months; callers distinguish them, nothing is filtered out here.
pub fn days_in_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(anchor);
    let start = first - Days::new(u64::from(first.weekday().num_days_from_sunday()));

    (0..GRID_DAYS as u64).map(|offset| start + Days::new(offset)).collect()
}

/// Posts whose scheduled date equals `date`, original order preserved.
pub fn posts_on_date<'a>(posts: &'a [Post], date: NaiveDate) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.scheduled_date == date).collect()
}

/// First day of the month before `anchor`'s.
pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
    first_of_month(anchor) - Months::new(1)
}

/// First day of the month after `anchor`'s.
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    first_of_month(anchor) + Months::new(1)
}

fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).expect("day 1 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Platform, PostStatus};
    use chrono::{NaiveTime, Weekday};
    use uuid::Uuid;

    fn post_on(date: NaiveDate) -> Post {
        Post {
            id: Uuid::new_v4(),
            platform: Platform::Instagram,
            caption: "cell".to_string(),
            media: None,
            scheduled_date: date,
            scheduled_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            status: PostStatus::Scheduled,
        }
    }

    #[test]
    fn test_grid_has_42_consecutive_days_starting_sunday() {
        // Check a spread of months: leap February, a 31-day month, a month
        // starting on Sunday, and a year boundary.
        let anchors = [
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        ];

        for anchor in anchors {
            let days = days_in_grid(anchor);

            assert_eq!(days.len(), GRID_DAYS);
            assert_eq!(days[0].weekday(), Weekday::Sun);
            for pair in days.windows(2) {
                assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
            }
        }
    }

    #[test]
    fn test_grid_starts_on_the_first_when_month_starts_sunday() {
        // June 2025 starts on a Sunday, so no leading cells.
        let days = days_in_grid(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_grid_includes_adjacent_month_days() {
        // July 2025 starts on a Tuesday: the grid leads with June 29-30.
        let days = days_in_grid(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 6, 29).unwrap());
        assert_eq!(days[41], NaiveDate::from_ymd_opt(2025, 8, 9).unwrap());
    }

    #[test]
    fn test_posts_on_date_matches_exactly() {
        let target = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let posts = vec![post_on(target), post_on(other), post_on(target)];

        let hits = posts_on_date(&posts, target);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, posts[0].id);
        assert_eq!(hits[1].id, posts[2].id);

        let empty = posts_on_date(&posts, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_month_navigation() {
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        assert_eq!(prev_month(anchor), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(next_month(anchor), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }
}
