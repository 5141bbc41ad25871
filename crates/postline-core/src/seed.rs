//! Demo content shown before anything has been persisted.

use chrono::{Days, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::domain::{Platform, Post, PostStatus};

/// Number of posts in the demo seed.
pub const SEED_LEN: usize = 5;

/// The demo sequence: five posts spread over the five days after `today`.
///
/// Stores return this as a read-time fallback only. It is never written
/// back, so an explicitly saved empty sequence stays empty.
pub fn demo_posts(today: NaiveDate) -> Vec<Post> {
    let entries: [(u64, Platform, &str, (u32, u32), PostStatus); SEED_LEN] = [
        (
            1,
            Platform::Instagram,
            "Check out our new product launch! 🚀",
            (10, 0),
            PostStatus::Scheduled,
        ),
        (
            2,
            Platform::Twitter,
            "Don't miss our live Q&A session this Friday!",
            (15, 30),
            PostStatus::Scheduling,
        ),
        (
            3,
            Platform::Linkedin,
            "We're hiring! Join our amazing team. #careers",
            (9, 0),
            PostStatus::Failed,
        ),
        (
            4,
            Platform::Instagram,
            "Behind the scenes: our creative process.",
            (13, 0),
            PostStatus::Scheduled,
        ),
        (
            5,
            Platform::Twitter,
            "Weekly tips: How to boost your engagement!",
            (11, 0),
            PostStatus::Scheduled,
        ),
    ];

    entries
        .into_iter()
        .map(|(offset, platform, caption, (hour, minute), status)| Post {
            id: Uuid::new_v4(),
            platform,
            caption: caption.to_string(),
            media: None,
            scheduled_date: today + Days::new(offset),
            scheduled_time: NaiveTime::from_hms_opt(hour, minute, 0)
                .expect("seed times are valid"),
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_five_posts_on_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let posts = demo_posts(today);

        assert_eq!(posts.len(), SEED_LEN);
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.scheduled_date, today + Days::new(i as u64 + 1));
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let ids: HashSet<_> = demo_posts(today).into_iter().map(|post| post.id).collect();
        assert_eq!(ids.len(), SEED_LEN);
    }

    #[test]
    fn test_seed_covers_every_status() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let posts = demo_posts(today);

        assert!(posts.iter().any(|p| p.status == PostStatus::Scheduled));
        assert!(posts.iter().any(|p| p.status == PostStatus::Scheduling));
        assert!(posts.iter().any(|p| p.status == PostStatus::Failed));
    }
}
