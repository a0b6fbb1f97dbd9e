//! ブラウザ上の表示テスト
//!
//! Appを専用のコンテナにマウントし、DOMを直接確認する

#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use vision_tour_wasm::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// コンテナにAppをマウントする
fn mount() -> (HtmlElement, impl Sized) {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    let handle = leptos::mount::mount_to(container.clone(), App);
    (container, handle)
}

/// 描画の反映を待つ
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("要素が見つからない: {}", selector))
}

fn text(root: &HtmlElement, selector: &str) -> String {
    find(root, selector).text_content().unwrap_or_default()
}

fn button(root: &HtmlElement, selector: &str) -> HtmlButtonElement {
    find(root, selector).dyn_into().unwrap()
}

fn count(root: &HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

/// 9セクションが固定順に並び、結果は表示されていない
#[wasm_bindgen_test]
async fn test_initial_render() {
    let (root, _handle) = mount();
    settle().await;

    let sections = root.query_selector_all("section.tour-section").unwrap();
    let ids: Vec<String> = (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.id())
        .collect();
    assert_eq!(
        ids,
        vec![
            "intro",
            "overview",
            "captioning",
            "object-detection",
            "tagging",
            "ocr",
            "custom-models",
            "capabilities-comparison",
            "summary",
        ]
    );

    assert_eq!(count(&root, ".caption-result"), 0);
    assert_eq!(count(&root, ".detection-overlay"), 0);
    assert_eq!(count(&root, ".tag-list"), 0);
    assert_eq!(count(&root, ".ocr-line"), 0);
    assert!(text(&root, "#intro .detail-panel").contains("Smart Shelf Monitoring"));
}

/// Healthcareを選ぶと詳細パネルが切り替わる
#[wasm_bindgen_test]
async fn test_select_healthcare() {
    let (root, _handle) = mount();
    settle().await;

    button(&root, "#intro .picker-option[data-key='Healthcare']").click();
    settle().await;

    let detail = text(&root, "#intro .detail-panel");
    assert!(detail.contains("Medical Imaging"));
    assert!(detail.contains("Early diagnosis and reduced human error"));
    assert_eq!(
        find(&root, "#intro .picker-option[data-key='Healthcare']")
            .get_attribute("aria-pressed")
            .as_deref(),
        Some("true")
    );
    assert_eq!(count(&root, "#intro .picker-option.active"), 1);
    assert!(text(&root, "#overview .detail-panel").contains("Azure AI Vision"));
}

/// キャプションは一度表示したら消えない
#[wasm_bindgen_test]
async fn test_caption_reveal() {
    let (root, _handle) = mount();
    settle().await;

    let trigger = button(&root, "#captioning .btn");
    trigger.click();
    settle().await;

    assert!(text(&root, "#captioning .caption-result").contains("skateboard"));
    assert!(trigger.disabled());

    trigger.click();
    settle().await;
    assert_eq!(count(&root, "#captioning .caption-result"), 1);
}

/// Personの行にホバーするとPersonの枠だけが強調される
#[wasm_bindgen_test]
async fn test_detection_hover() {
    let (root, _handle) = mount();
    settle().await;

    button(&root, "#object-detection .btn").click();
    settle().await;
    assert_eq!(count(&root, ".detection-overlay"), 2);
    assert_eq!(count(&root, ".detection-overlay.highlighted"), 0);

    let row = find(&root, ".detection-row[data-name='Person']");
    row.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    settle().await;

    assert_eq!(count(&root, ".detection-overlay.highlighted"), 1);
    let person = find(&root, ".detection-overlay[data-name='Person']");
    let style = person.get_attribute("style").unwrap_or_default();
    assert!(style.contains("solid"));
    assert!(style.contains("width: 36%"));

    row.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    settle().await;
    assert_eq!(count(&root, ".detection-overlay.highlighted"), 0);
}

/// タグの信頼度バーは値どおりの幅
#[wasm_bindgen_test]
async fn test_tag_confidence_bars() {
    let (root, _handle) = mount();
    settle().await;

    button(&root, "#tagging .btn").click();
    settle().await;

    assert_eq!(count(&root, "#tagging .confidence-row"), 8);
    let fill = find(&root, "#tagging .confidence-fill");
    let style = fill.get_attribute("style").unwrap_or_default();
    assert!(style.contains("width: 99.6%"), "{}", style);
}

/// OCRは処理中表示の後、1500msでテキストを表示する
#[wasm_bindgen_test]
async fn test_ocr_delay() {
    let (root, _handle) = mount();
    settle().await;

    let trigger = button(&root, "#ocr .btn");
    trigger.click();
    settle().await;

    assert!(trigger.disabled());
    assert_eq!(trigger.text_content().as_deref(), Some("Processing..."));
    assert_eq!(count(&root, "#ocr .processing-indicator"), 1);
    assert_eq!(count(&root, "#ocr .ocr-line"), 0);

    TimeoutFuture::new(1000).await;
    assert_eq!(count(&root, "#ocr .ocr-line"), 0);

    TimeoutFuture::new(700).await;
    assert_eq!(count(&root, "#ocr .ocr-line"), 12);
    assert_eq!(count(&root, "#ocr .processing-indicator"), 0);
    assert!(text(&root, "#ocr .ocr-line").contains("CONTOSO COFFEE"));
    assert!(trigger.disabled());
}

/// 遅延中にアンマウントしてもエラーにならない
#[wasm_bindgen_test]
async fn test_ocr_unmount_during_delay() {
    let (root, handle) = mount();
    settle().await;

    button(&root, "#ocr .btn").click();
    settle().await;

    drop(handle);
    TimeoutFuture::new(1700).await;
    assert_eq!(count(&root, ".ocr-line"), 0);
}

/// 比較表はObject DetectionとClassificationだけがカスタマイズ可能
#[wasm_bindgen_test]
async fn test_capability_table() {
    let (root, _handle) = mount();
    settle().await;

    assert_eq!(count(&root, ".capability-row"), 5);
    assert_eq!(count(&root, ".customizable.checked"), 2);
    assert_eq!(
        count(&root, ".capability-row[data-name='Object Detection'] .customizable.checked"),
        1
    );
    assert_eq!(
        count(&root, ".capability-row[data-name='Classification'] .customizable.checked"),
        1
    );
}
