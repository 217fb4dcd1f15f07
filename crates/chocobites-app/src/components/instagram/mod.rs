//! The social feed: a grid of lazily activated Instagram embeds.

mod feed;
mod post;

pub use feed::InstagramFeed;
pub use post::InstagramPost;
