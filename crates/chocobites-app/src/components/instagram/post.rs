use chocobites_core::{Post, PostActivator, PostKind, PostLoadState};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_brands_icons::FaInstagram;
use dioxus_free_icons::icons::fa_solid_icons::{FaComment, FaHeart, FaPlay, FaSpinner};

use crate::config::CONFIG;
use crate::platform;

/// DOM id for a post's observed region, built from the permalink's shortcode.
pub(crate) fn post_dom_id(post: &Post) -> String {
    let shortcode = post
        .identifier
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    format!("instagram-post-{shortcode}")
}

/// One post: fallback preview over the live embed, cross-faded by `state`.
///
/// Asks the feed to load it once it has stayed in view for the debounce
/// interval, and again on each later entry while still not loaded.
#[component]
pub fn InstagramPost(
    post: &'static Post,
    state: ReadSignal<PostLoadState>,
    on_request_load: EventHandler<()>,
) -> Element {
    let mut hovered = use_signal(|| false);
    let dom_id = post_dom_id(post);

    let activator = use_hook(move || {
        PostActivator::new(
            platform::timers(),
            CONFIG.embed.visibility_debounce,
            move || *state.peek() == PostLoadState::Loaded,
            move || on_request_load.call(()),
        )
    });

    // Observer handle lives in a signal so it disconnects on unmount
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use chocobites_browser::VisibilityObserver;

        let mut observer: Signal<Option<VisibilityObserver>> = use_signal(|| None);
        let target_id = dom_id.clone();
        let activator = activator.clone();
        use_effect(move || {
            let Some(element) = chocobites_browser::element_by_id(&target_id) else {
                tracing::warn!(id = %target_id, "post element missing, not observing");
                return;
            };
            let activator = activator.clone();
            match VisibilityObserver::observe(
                &element,
                &CONFIG.embed.visibility_thresholds,
                &CONFIG.embed.root_margin,
                move |visible| activator.set_visible(visible),
            ) {
                Ok(handle) => observer.set(Some(handle)),
                Err(e) => tracing::warn!("failed to observe post: {e}"),
            }
        });
    }
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    let _ = activator;

    let current = state();
    let loaded = current == PostLoadState::Loaded;
    let is_hovered = hovered();
    let fallback_class = if loaded {
        "instagram-fallback hidden"
    } else {
        "instagram-fallback"
    };
    let embed_class = if loaded {
        "instagram-embed visible"
    } else {
        "instagram-embed"
    };

    rsx! {
        div {
            id: "{dom_id}",
            class: "instagram-post",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            div { class: "instagram-post-frame",
                div { class: fallback_class,
                    img {
                        src: post.fallback_image,
                        alt: post.caption,
                        class: "instagram-fallback-image",
                    }
                    div {
                        class: "instagram-fallback-shade",
                        "data-hovered": "{is_hovered}",
                    }

                    match current {
                        PostLoadState::Pending => rsx! {
                            div { class: "instagram-loading",
                                if post.kind == PostKind::Video {
                                    span { class: "instagram-spinner video",
                                        span { class: "spin",
                                            Icon { width: 48, height: 48, icon: FaSpinner }
                                        }
                                        span { class: "play",
                                            Icon { width: 24, height: 24, icon: FaPlay }
                                        }
                                    }
                                } else {
                                    span { class: "instagram-spinner spin",
                                        Icon { width: 32, height: 32, icon: FaSpinner }
                                    }
                                }
                                p { "{post.kind.loading_label()}" }
                            }
                        },
                        PostLoadState::Unavailable => rsx! {
                            div { class: "instagram-unavailable",
                                a {
                                    href: post.identifier,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    Icon { width: 20, height: 20, icon: FaInstagram }
                                    "View on Instagram"
                                }
                            }
                        },
                        PostLoadState::Loaded => rsx! {},
                    }

                    div {
                        class: "instagram-engagement",
                        "data-visible": "{is_hovered}",
                        p { class: "instagram-caption", "{post.caption}" }
                        div { class: "instagram-counts",
                            span {
                                Icon { width: 16, height: 16, icon: FaHeart }
                                "{post.like_count}"
                            }
                            span {
                                Icon { width: 16, height: 16, icon: FaComment }
                                "{post.comment_count}"
                            }
                        }
                    }
                }

                div { class: embed_class,
                    blockquote {
                        class: "instagram-media",
                        "data-instgrm-permalink": post.identifier,
                        "data-instgrm-version": "14",
                        "data-instgrm-captioned": "",
                        "data-instgrm-autoplay": "true",
                        style: "max-width: 540px; width: 100%; margin: 0; padding: 0;",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chocobites_core::INSTAGRAM_POSTS;

    #[test]
    fn test_post_dom_id_uses_shortcode() {
        assert_eq!(post_dom_id(&INSTAGRAM_POSTS[0]), "instagram-post-DF4vlC_tZfP");
        assert_eq!(post_dom_id(&INSTAGRAM_POSTS[2]), "instagram-post-DEw40pkNQQB");
    }
}
