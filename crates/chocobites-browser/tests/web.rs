//! WASM browser tests for chocobites-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chocobites_browser::storage::{load_theme, save_theme};
use chocobites_browser::{
    EmbedError, EmbedRuntime, InstagramRuntime, ScriptAcquisition, Scheduler, TaskHandle, Theme,
    TimeoutScheduler, acquire_script, reacquire_script, script_count,
};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_runtime_global(value: &JsValue) {
    let window = web_sys::window().unwrap();
    Reflect::set(&window, &JsValue::from_str("instgrm"), value).unwrap();
}

fn install_fake_runtime(body: &str) {
    let embeds = Object::new();
    Reflect::set(
        &embeds,
        &JsValue::from_str("process"),
        &Function::new_no_args(body),
    )
    .unwrap();
    let global = Object::new();
    Reflect::set(&global, &JsValue::from_str("Embeds"), &embeds).unwrap();
    set_runtime_global(&global);
}

// === Runtime binding ===

#[wasm_bindgen_test]
fn test_runtime_absent() {
    set_runtime_global(&JsValue::UNDEFINED);
    let rt = InstagramRuntime::new();
    assert!(!rt.is_ready());
    assert_eq!(rt.process(), Err(EmbedError::RuntimeUnavailable));
}

#[wasm_bindgen_test]
fn test_runtime_present_processes() {
    install_fake_runtime("window.__processed = (window.__processed || 0) + 1;");
    let rt = InstagramRuntime::new();
    assert!(rt.is_ready());
    rt.process().unwrap();
    let count = Reflect::get(&web_sys::window().unwrap(), &JsValue::from_str("__processed"))
        .unwrap()
        .as_f64();
    assert_eq!(count, Some(1.0));
    set_runtime_global(&JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
fn test_runtime_throw_maps_to_processing_error() {
    install_fake_runtime("throw new Error('boom');");
    let err = InstagramRuntime::new().process().unwrap_err();
    assert_eq!(err, EmbedError::Processing("boom".into()));
    set_runtime_global(&JsValue::UNDEFINED);
}

// === Script acquisition ===

/// Poll until `done` holds, giving up after about two seconds.
async fn wait_for(done: impl Fn() -> bool) {
    for _ in 0..100 {
        if done() {
            return;
        }
        TimeoutFuture::new(20).await;
    }
}

/// A script that only bumps `window[counter]`.
fn counting_script(counter: &str) -> String {
    format!("data:text/javascript,window.{counter}=(window.{counter}||0)+1;")
}

fn window_number(name: &str) -> Option<f64> {
    Reflect::get(&web_sys::window().unwrap(), &JsValue::from_str(name))
        .unwrap()
        .as_f64()
}

fn counting_callbacks() -> (Rc<Cell<u32>>, Rc<RefCell<Option<EmbedError>>>) {
    (Rc::new(Cell::new(0)), Rc::new(RefCell::new(None)))
}

fn acquire(
    url: &str,
    loads: &Rc<Cell<u32>>,
    error: &Rc<RefCell<Option<EmbedError>>>,
) -> ScriptAcquisition {
    let loads = loads.clone();
    let error = error.clone();
    acquire_script(
        url,
        move || loads.set(loads.get() + 1),
        move |e| *error.borrow_mut() = Some(e),
    )
    .unwrap()
}

#[wasm_bindgen_test]
async fn test_second_acquire_reuses_tag() {
    set_runtime_global(&JsValue::UNDEFINED);
    let url = counting_script("__chocobites_reuse");
    let (loads, error) = counting_callbacks();

    let first = acquire(&url, &loads, &error);
    let second = acquire(&url, &loads, &error);
    assert!(matches!(first, ScriptAcquisition::Loading(_)));
    assert!(matches!(second, ScriptAcquisition::Loading(_)));
    assert_eq!(script_count(&url), 1);

    wait_for(|| loads.get() == 2).await;
    assert_eq!(loads.get(), 2);
    assert_eq!(window_number("__chocobites_reuse"), Some(1.0));
    assert!(error.borrow().is_none());

    let third = acquire(&url, &loads, &error);
    assert!(matches!(third, ScriptAcquisition::AlreadyLoaded));
    assert_eq!(script_count(&url), 1);
}

#[wasm_bindgen_test]
async fn test_load_is_remembered_after_handle_dropped() {
    set_runtime_global(&JsValue::UNDEFINED);
    let url = counting_script("__chocobites_remount");
    let (loads, error) = counting_callbacks();

    // First feed unmounts before the script finishes.
    drop(acquire(&url, &loads, &error));
    wait_for(|| window_number("__chocobites_remount").is_some()).await;
    assert_eq!(loads.get(), 0);

    let again = acquire(&url, &loads, &error);
    assert!(matches!(again, ScriptAcquisition::AlreadyLoaded));
    assert_eq!(script_count(&url), 1);
}

#[wasm_bindgen_test]
async fn test_unreachable_script_reports_error() {
    set_runtime_global(&JsValue::UNDEFINED);
    let url = "/__chocobites_missing_embed.js";
    let (loads, error) = counting_callbacks();

    let _handle = acquire(url, &loads, &error);
    wait_for(|| error.borrow().is_some()).await;
    assert!(matches!(
        error.borrow().as_ref(),
        Some(EmbedError::ScriptLoad { url: failed, .. }) if failed == url
    ));
    assert_eq!(loads.get(), 0);
}

#[wasm_bindgen_test]
async fn test_failed_tag_is_replaced_on_next_acquire() {
    set_runtime_global(&JsValue::UNDEFINED);
    let url = "/__chocobites_missing_remount.js";
    let (loads, error) = counting_callbacks();

    let first = acquire(url, &loads, &error);
    wait_for(|| error.borrow().is_some()).await;
    drop(first);
    error.borrow_mut().take();

    // A later feed still hears about the failure.
    let _second = acquire(url, &loads, &error);
    assert_eq!(script_count(url), 1);
    wait_for(|| error.borrow().is_some()).await;
    assert!(error.borrow().is_some());
    assert_eq!(loads.get(), 0);
}

#[wasm_bindgen_test]
fn test_installed_runtime_skips_injection() {
    install_fake_runtime("");
    let url = counting_script("__chocobites_skipped");
    let (loads, error) = counting_callbacks();
    let acquired = acquire(&url, &loads, &error);
    assert!(matches!(acquired, ScriptAcquisition::AlreadyLoaded));
    assert_eq!(script_count(&url), 0);
    set_runtime_global(&JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
async fn test_reacquire_replaces_loaded_tag_without_runtime() {
    set_runtime_global(&JsValue::UNDEFINED);
    let url = counting_script("__chocobites_refetch");
    let (loads, error) = counting_callbacks();

    let _first = acquire(&url, &loads, &error);
    wait_for(|| loads.get() == 1).await;
    assert!(matches!(
        acquire(&url, &loads, &error),
        ScriptAcquisition::AlreadyLoaded
    ));

    let refetched = loads.clone();
    let acquired = reacquire_script(
        &url,
        move || refetched.set(refetched.get() + 1),
        |e| panic!("unexpected error: {e}"),
    )
    .unwrap();
    assert!(matches!(acquired, ScriptAcquisition::Loading(_)));
    assert_eq!(script_count(&url), 1);
    wait_for(|| loads.get() == 2).await;
    assert_eq!(window_number("__chocobites_refetch"), Some(2.0));
}

// === Timers ===

#[wasm_bindgen_test]
async fn test_timeout_scheduler_runs_task() {
    let hit = Rc::new(Cell::new(false));
    let flag = hit.clone();
    let _handle = TimeoutScheduler.schedule(
        Duration::from_millis(10),
        Box::new(move || flag.set(true)),
    );
    assert!(!hit.get());
    TimeoutFuture::new(50).await;
    assert!(hit.get());
}

#[wasm_bindgen_test]
async fn test_timeout_scheduler_cancel() {
    let hit = Rc::new(Cell::new(false));
    let flag = hit.clone();
    let handle = TimeoutScheduler.schedule(
        Duration::from_millis(10),
        Box::new(move || flag.set(true)),
    );
    handle.cancel();
    TimeoutFuture::new(50).await;
    assert!(!hit.get());
}

// === Theme storage ===

#[wasm_bindgen_test]
fn test_theme_persists() {
    save_theme(Theme::Dark);
    assert_eq!(load_theme(), Theme::Dark);
    save_theme(Theme::Light);
    assert_eq!(load_theme(), Theme::Light);
}
