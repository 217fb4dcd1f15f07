//! Shared components: buttons, product cards, the hero video and the
//! Instagram feed.

pub mod back_to_top;
pub mod button;
pub mod instagram;
pub mod order_button;
pub mod product_card;
pub mod theme_toggle;
pub mod video_background;

pub use back_to_top::BackToTop;
pub use instagram::{InstagramFeed, InstagramPost};
pub use order_button::{InstagramOrderButton, OrderButton};
pub use product_card::ProductCard;
pub use theme_toggle::ThemeToggle;
pub use video_background::VideoBackground;
