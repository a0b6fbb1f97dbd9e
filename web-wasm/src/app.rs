//! メインアプリケーションコンポーネント
//!
//! 9セクションを固定順に並べる。各セクションは自分の状態だけを持ち、
//! セクション間で状態を共有しない。

use leptos::prelude::*;
use crate::components::{
    captioning::ImageCaptioningSection,
    comparison::CapabilitiesComparisonSection,
    custom_models::CustomModelsSection,
    header::Header,
    intro::IntroSection,
    object_detection::ObjectDetectionSection,
    ocr::OcrSection,
    overview::AzureVisionOverviewSection,
    summary::SummarySection,
    tagging::TaggingSection,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <Header />

            <main class="tour">
                <IntroSection />
                <AzureVisionOverviewSection />
                <ImageCaptioningSection />
                <ObjectDetectionSection />
                <TaggingSection />
                <OcrSection />
                <CustomModelsSection />
                <CapabilitiesComparisonSection />
                <SummarySection />
            </main>
        </div>
    }
}
