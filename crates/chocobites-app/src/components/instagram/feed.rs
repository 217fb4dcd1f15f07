use chocobites_core::{
    EmbedFeed, FeedController, FeedSnapshot, FeedStatus, INSTAGRAM_POSTS, ProcessOutcome,
    RetryAction,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_brands_icons::FaInstagram;
use dioxus_free_icons::icons::fa_solid_icons::FaRotateRight;

use super::post::InstagramPost;
use crate::components::button::{Button, ButtonVariant};
use crate::config::CONFIG;
use crate::platform::{self, SiteFeed};

const INSTAGRAM_CSS: Asset = asset!("/assets/styling/instagram.css");

fn request_load(controller: &SiteFeed, identifier: &str) {
    match controller.process_embed(identifier) {
        Ok(ProcessOutcome::Failed(e)) => tracing::error!("instagram embed failed: {e}"),
        Ok(ProcessOutcome::GaveUp) => {
            tracing::debug!(identifier, "embed runtime never became ready, showing fallback")
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("load request rejected: {e}"),
    }
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
type ScriptSlot = Option<chocobites_browser::ScriptHandle>;
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
type ScriptSlot = ();

/// Injects the embed script (once per page, or again when `refetch` is set)
/// and wires its callbacks into the feed. Returns the listener handle to keep
/// alive, if the script is still loading.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
fn acquire_embed_script(controller: &SiteFeed, refetch: bool) -> ScriptSlot {
    use chocobites_browser::{ScriptAcquisition, acquire_script, reacquire_script};

    let on_load = {
        let controller = controller.clone();
        move || {
            tracing::debug!("embed script loaded");
            controller.script_loaded();
        }
    };
    let on_error = {
        let controller = controller.clone();
        move |e: chocobites_core::EmbedError| {
            tracing::error!("{e}");
            controller.script_failed(&e);
        }
    };
    let url = &CONFIG.embed.script_url;
    let acquired = if refetch {
        reacquire_script(url, on_load, on_error)
    } else {
        acquire_script(url, on_load, on_error)
    };
    match acquired {
        Ok(ScriptAcquisition::Loading(handle)) => Some(handle),
        Ok(ScriptAcquisition::AlreadyLoaded) => {
            controller.script_loaded();
            None
        }
        Err(e) => {
            tracing::error!("{e}");
            controller.script_failed(&e);
            None
        }
    }
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
fn refetch_script(controller: &SiteFeed, mut slot: Signal<ScriptSlot>) {
    slot.set(acquire_embed_script(controller, true));
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
fn refetch_script(_controller: &SiteFeed, _slot: Signal<ScriptSlot>) {
    tracing::debug!("no embed script to fetch outside the browser");
}

/// "Latest from Instagram" grid.
///
/// Owns the feed controller; posts report visibility and get their load
/// state back down as props.
#[component]
pub fn InstagramFeed() -> Element {
    let snapshot = use_signal(FeedSnapshot::default);
    let controller: SiteFeed = use_hook(move || {
        let feed = EmbedFeed::new(&INSTAGRAM_POSTS, platform::embed_runtime(), &CONFIG.embed);
        FeedController::new(feed, platform::timers()).with_listener(move |snap| {
            let mut snapshot = snapshot;
            snapshot.set(snap.clone());
        })
    });

    // Script listeners live in a signal so they detach on unmount
    let script: Signal<ScriptSlot> = use_signal(Default::default);
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        let mut script = script;
        let controller = controller.clone();
        use_effect(move || {
            script.set(acquire_embed_script(&controller, false));
        });
    }

    let snap = snapshot();
    let status = snap.status();
    let header_class = if status == FeedStatus::Initializing {
        "instagram-feed-icon pulse"
    } else {
        "instagram-feed-icon"
    };
    let retry = controller.clone();
    let instagram_url = CONFIG.instagram_url.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: INSTAGRAM_CSS }

        section { class: "instagram-feed",
            div { class: "instagram-feed-header",
                span { class: header_class,
                    Icon { width: 32, height: 32, icon: FaInstagram }
                }
                h2 { "Latest from Instagram" }
            }

            div { class: "instagram-feed-body",
                div { class: "instagram-grid",
                    for post in INSTAGRAM_POSTS.iter() {
                        {
                            let controller = controller.clone();
                            rsx! {
                                InstagramPost {
                                    key: "{post.identifier}",
                                    post,
                                    state: snap.post_state(post.identifier),
                                    on_request_load: move |_| request_load(&controller, post.identifier),
                                }
                            }
                        }
                    }
                }

                if status == FeedStatus::Error {
                    div { class: "instagram-error",
                        p { "Failed to load Instagram posts" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                tracing::info!("retrying instagram feed");
                                if retry.retry_load() == RetryAction::ReacquireScript {
                                    refetch_script(&retry, script);
                                }
                            },
                            Icon { width: 16, height: 16, icon: FaRotateRight }
                            "Try Again"
                        }
                    }
                }
            }

            div { class: "instagram-follow",
                a {
                    href: "{instagram_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { width: 24, height: 24, icon: FaInstagram }
                    span { "Follow @c_hoco_bites" }
                }
            }
        }
    }
}
