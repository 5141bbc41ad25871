//! Dashboard-facing projections: status tallies and the upcoming list.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{Post, PostStatus};

/// Per-status counts for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub scheduled: usize,
    pub scheduling: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn tally(posts: &[Post]) -> Self {
        let mut counts = Self::default();
        for post in posts {
            counts.total += 1;
            match post.status {
                PostStatus::Scheduled => counts.scheduled += 1,
                PostStatus::Scheduling => counts.scheduling += 1,
                PostStatus::Failed => counts.failed += 1,
            }
        }
        counts
    }
}

/// Posts scheduled strictly after `now`, ordered by schedule instant,
/// truncated to `limit`.
pub fn upcoming<'a>(posts: &'a [Post], now: NaiveDateTime, limit: usize) -> Vec<&'a Post> {
    let mut future: Vec<&Post> = posts.iter().filter(|post| post.scheduled_at() > now).collect();
    future.sort_by_key(|post| post.scheduled_at());
    future.truncate(limit);
    future
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;
    use chrono::{NaiveDate, NaiveTime};

    fn post_at(day: u32, hour: u32, status: PostStatus) -> Post {
        let mut post = Post::new(
            Platform::Twitter,
            format!("post {day}-{hour}"),
            None,
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        );
        post.status = status;
        post
    }

    fn noon_june_10() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_tally_counts_every_status() {
        let posts = vec![
            post_at(1, 9, PostStatus::Scheduled),
            post_at(2, 9, PostStatus::Scheduled),
            post_at(3, 9, PostStatus::Scheduling),
            post_at(4, 9, PostStatus::Failed),
        ];

        let counts = StatusCounts::tally(&posts);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.scheduled, 2);
        assert_eq!(counts.scheduling, 1);
        assert_eq!(counts.failed, 1);
    }

    #[test]
    fn test_upcoming_filters_and_sorts_by_schedule_instant() {
        // Stored out of order; one in the past, one on the boundary day.
        let posts = vec![
            post_at(20, 9, PostStatus::Scheduled),
            post_at(5, 9, PostStatus::Scheduled),
            post_at(10, 13, PostStatus::Scheduled),
            post_at(12, 9, PostStatus::Scheduled),
        ];

        let result = upcoming(&posts, noon_june_10(), 5);
        let days: Vec<u32> = result
            .iter()
            .map(|post| {
                use chrono::Datelike;
                post.scheduled_date.day()
            })
            .collect();

        assert_eq!(days, vec![10, 12, 20]);
    }

    #[test]
    fn test_upcoming_respects_limit() {
        let posts: Vec<Post> =
            (11..=20).map(|day| post_at(day, 9, PostStatus::Scheduled)).collect();

        assert_eq!(upcoming(&posts, noon_june_10(), 5).len(), 5);
    }
}
