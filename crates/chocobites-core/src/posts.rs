//! Instagram posts featured in the social feed.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Image,
    Video,
}

impl PostKind {
    /// Text under the loading spinner.
    pub fn loading_label(self) -> &'static str {
        match self {
            PostKind::Image => "Loading Post...",
            PostKind::Video => "Loading Video...",
        }
    }
}

/// An externally embeddable post. The permalink doubles as its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub identifier: &'static str,
    pub fallback_image: &'static str,
    pub caption: &'static str,
    pub like_count: &'static str,
    pub comment_count: &'static str,
    pub kind: PostKind,
}

pub static INSTAGRAM_POSTS: [Post; 3] = [
    Post {
        identifier: "https://www.instagram.com/p/DF4vlC_tZfP/",
        fallback_image: "/images/cookies/chocolate-chip.jpg",
        caption: "Fresh chocolate chip cookies hot from the oven! 🍪✨",
        like_count: "2.4k",
        comment_count: "156",
        kind: PostKind::Video,
    },
    Post {
        identifier: "https://www.instagram.com/p/DFKUccpojRe/",
        fallback_image: "/images/cookies/double-chocolate.jpg",
        caption: "Double chocolate delight - perfect with milk! 🥛🍫",
        like_count: "3.1k",
        comment_count: "203",
        kind: PostKind::Video,
    },
    Post {
        identifier: "https://www.instagram.com/p/DEw40pkNQQB/",
        fallback_image: "/images/cookies/white-chocolate.jpg",
        caption: "White chocolate macadamia - a customer favorite! 🥜",
        like_count: "1.8k",
        comment_count: "142",
        kind: PostKind::Image,
    },
];
