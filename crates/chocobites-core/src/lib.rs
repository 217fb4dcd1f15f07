//! chocobites-core: site logic without framework dependencies.
//!
//! This crate provides:
//! - the static product catalog and category filtering
//! - the Instagram post descriptors shown in the social feed
//! - `EmbedFeed` / `VisibilityTracker` - pure state machines for the embed lifecycle
//! - `FeedController` / `PostActivator` - timer-driven drivers, generic over `Scheduler`
//! - scroll thresholds, navigation matching, theme and hero media state

pub mod catalog;
pub mod config;
pub mod embed;
pub mod error;
pub mod media;
pub mod nav;
pub mod posts;
pub mod scroll;
pub mod theme;

pub use catalog::{
    Category, CategoryFilter, CategoryTab, MENU_ITEMS, NutritionalInfo, Product, category_tabs,
    featured_products, filter_products, find_product, format_price,
};
pub use config::EmbedConfig;
pub use embed::{
    EmbedFeed, EmbedRuntime, FeedController, FeedSnapshot, FeedStatus, InitializationState,
    LoadedSet, ManualScheduler, NoRuntime, PostActivator, PostLoadState, ProcessOutcome,
    RetryAction, RetryTicket, Scheduler, TaskHandle, VisibilityAction, VisibilityTracker,
};
pub use error::EmbedError;
pub use media::HeroMediaState;
pub use nav::{NAV_LINKS, NavLink, is_active_path};
pub use posts::{INSTAGRAM_POSTS, Post, PostKind};
pub use scroll::ScrollState;
pub use smol_str::SmolStr;
pub use theme::Theme;
