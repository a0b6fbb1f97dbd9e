//! 表示内容のスナップショット
//!
//! レンダラが描画する内容をセクションごとに写したもの。
//! テストでの比較と、JSONでの確認に使う。

use serde::Serialize;
use vision_tour_common::{
    ApplicationExample, BoundingBox, CapabilityRow, ModelTypeDescriptor, OverlayStyle, Result,
    SectionId, ServiceDescriptor, SummaryPoint, TogglePhase, UseCaseExample,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSnapshot {
    pub page_title: &'static str,
    pub sections: Vec<SectionSnapshot>,
}

impl TourSnapshot {
    pub fn section(&self, id: SectionId) -> Option<&SectionSnapshot> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSnapshot {
    pub id: SectionId,
    pub title: &'static str,
    pub accent_color: &'static str,
    pub body: SectionBody,
}

/// ピッカーの選択肢ボタン
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSnapshot {
    pub id: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// 検出枠
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySnapshot {
    pub name: &'static str,
    pub bounding_box: BoundingBox,
    pub style: OverlayStyle,
}

/// 信頼度バー付きの結果行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceSnapshot {
    pub name: &'static str,
    pub confidence_score: f32,
    pub fill_percent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SectionBody {
    Intro {
        options: Vec<OptionSnapshot>,
        detail: &'static ApplicationExample,
    },
    Overview {
        options: Vec<OptionSnapshot>,
        detail: &'static ServiceDescriptor,
        use_cases: &'static [UseCaseExample],
    },
    Captioning {
        phase: TogglePhase,
        caption: Option<&'static str>,
    },
    ObjectDetection {
        phase: TogglePhase,
        hovered: Option<&'static str>,
        overlays: Vec<OverlaySnapshot>,
        results: Vec<ConfidenceSnapshot>,
    },
    Tagging {
        phase: TogglePhase,
        tags: Vec<ConfidenceSnapshot>,
    },
    Ocr {
        phase: TogglePhase,
        processing: bool,
        control_disabled: bool,
        lines: Option<&'static [&'static str]>,
    },
    CustomModels {
        options: Vec<OptionSnapshot>,
        detail: &'static ModelTypeDescriptor,
    },
    CapabilitiesComparison {
        rows: &'static [CapabilityRow],
    },
    Summary {
        points: &'static [SummaryPoint],
        closing: &'static str,
    },
}

impl SectionBody {
    /// 静的な結果（キャプション・検出結果・タグ・OCRテキスト）が表示されているか
    pub fn shows_result_payload(&self) -> bool {
        match self {
            SectionBody::Captioning { caption, .. } => caption.is_some(),
            SectionBody::ObjectDetection { results, .. } => !results.is_empty(),
            SectionBody::Tagging { tags, .. } => !tags.is_empty(),
            SectionBody::Ocr { lines, .. } => lines.is_some(),
            _ => false,
        }
    }
}
