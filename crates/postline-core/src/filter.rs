//! The management-view filter pipeline.
//!
//! A conjunction of free-text, platform, and status predicates applied to
//! the post sequence. Order-preserving; identity parameters return the
//! input unchanged.

use crate::domain::{Platform, Post, PostStatus};

/// Filter parameters. An empty query and `None` filters are identity
/// predicates.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub query: String,
    pub platform: Option<Platform>,
    pub status: Option<PostStatus>,
}

impl PostFilter {
    /// True when `post` satisfies every active predicate.
    pub fn matches(&self, post: &Post) -> bool {
        let query = self.query.to_lowercase();
        if !query.is_empty()
            && !post.caption.to_lowercase().contains(&query)
            && !post.platform.as_str().contains(&query)
        {
            return false;
        }

        if let Some(platform) = self.platform {
            if post.platform != platform {
                return false;
            }
        }

        if let Some(status) = self.status {
            if post.status != status {
                return false;
            }
        }

        true
    }

    /// The subsequence of `posts` passing the filter, order preserved.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn post(platform: Platform, caption: &str, status: PostStatus) -> Post {
        let mut post = Post::new(
            platform,
            caption.to_string(),
            None,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        );
        post.status = status;
        post
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post(Platform::Instagram, "Product launch!", PostStatus::Scheduled),
            post(Platform::Twitter, "Live Q&A on Friday", PostStatus::Scheduling),
            post(Platform::Linkedin, "We're hiring", PostStatus::Failed),
            post(Platform::Instagram, "Behind the scenes", PostStatus::Scheduled),
        ]
    }

    #[test]
    fn test_identity_filter_returns_input_in_order() {
        let posts = sample_posts();
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();

        let result = PostFilter::default().apply(&posts);
        assert_eq!(result.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_query_matches_caption_case_insensitively() {
        let posts = sample_posts();
        let filter = PostFilter {
            query: "LAUNCH".to_string(),
            ..PostFilter::default()
        };

        let result = filter.apply(&posts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].caption, "Product launch!");
    }

    #[test]
    fn test_query_matches_platform_name() {
        let posts = sample_posts();
        let filter = PostFilter {
            query: "insta".to_string(),
            ..PostFilter::default()
        };

        assert_eq!(filter.apply(&posts).len(), 2);
    }

    #[test]
    fn test_predicates_are_a_conjunction() {
        let posts = sample_posts();
        let filter = PostFilter {
            query: String::new(),
            platform: Some(Platform::Instagram),
            status: Some(PostStatus::Scheduled),
        };

        let result = filter.apply(&posts);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.platform == Platform::Instagram));

        let narrowed = PostFilter {
            query: "behind".to_string(),
            platform: Some(Platform::Instagram),
            status: Some(PostStatus::Scheduled),
        };
        assert_eq!(narrowed.apply(&posts).len(), 1);
    }

    #[test]
    fn test_result_is_subset_and_idempotent() {
        let posts = sample_posts();
        let filter = PostFilter {
            query: "e".to_string(),
            platform: None,
            status: Some(PostStatus::Scheduled),
        };

        let once: Vec<Post> = filter.apply(&posts).into_iter().cloned().collect();
        assert!(once.iter().all(|p| posts.iter().any(|q| q.id == p.id)));

        let twice = filter.apply(&once);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let posts = sample_posts();
        let filter = PostFilter {
            query: "nonexistent".to_string(),
            ..PostFilter::default()
        };

        assert!(filter.apply(&posts).is_empty());
    }
}
