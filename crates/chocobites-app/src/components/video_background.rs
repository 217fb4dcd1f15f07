use chocobites_core::HeroMediaState;
use dioxus::prelude::*;

/// Muted looping background video with a poster-image fallback.
///
/// The fallback stays on top until the video can play, and comes back for
/// good if playback is refused or the media fails to load.
#[component]
pub fn VideoBackground(
    #[props(into)] id: String,
    #[props(into)] src: String,
    #[props(into)] fallback_image: String,
    #[props(into, default = "video/mp4".to_string())] media_type: String,
) -> Element {
    let mut media = use_signal(HeroMediaState::default);

    // canplay may have fired before hydration attached the handler
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        let video_id = id.clone();
        use_effect(move || {
            let Some(video) = chocobites_browser::media::video_by_id(&video_id) else {
                return;
            };
            if chocobites_browser::media::can_play(&video) {
                start_playback(media, video_id.clone());
            }
        });
    }

    let canplay_id = id.clone();
    let state = media();
    let fallback_class = if state.show_fallback() {
        "video-fallback visible"
    } else {
        "video-fallback"
    };

    rsx! {
        div { class: "video-background",
            if state.show_video() {
                video {
                    id: "{id}",
                    class: "video-background-media",
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                    playsinline: true,
                    preload: "auto",
                    poster: "{fallback_image}",
                    oncanplay: move |_| start_playback(media, canplay_id.clone()),
                    onerror: move |_| {
                        tracing::warn!("background video failed to load");
                        media.write().media_error();
                    },
                    source { src: "{src}", r#type: "{media_type}" }
                    "Your browser does not support the video tag."
                }
            }
            div {
                class: fallback_class,
                style: "background-image: url('{fallback_image}')",
            }
        }
    }
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
fn start_playback(mut media: Signal<HeroMediaState>, _video_id: String) {
    media.write().can_play();
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
fn start_playback(mut media: Signal<HeroMediaState>, video_id: String) {
    if media.peek().video_loaded {
        return;
    }
    media.write().can_play();
    spawn(async move {
        let Some(video) = chocobites_browser::media::video_by_id(&video_id) else {
            return;
        };
        match chocobites_browser::media::play_muted(&video).await {
            Ok(()) => media.write().playing(),
            Err(e) => {
                tracing::warn!("background video playback refused: {e}");
                media.write().play_failed();
            }
        }
    });
}
