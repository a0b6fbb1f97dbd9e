//! セクション定義
//!
//! ルートビューが並べる9セクションの識別子・見出し・アクセント色と表示順。

use serde::Serialize;

/// セクション識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Intro,
    Overview,
    Captioning,
    ObjectDetection,
    Tagging,
    Ocr,
    CustomModels,
    CapabilitiesComparison,
    Summary,
}

impl SectionId {
    /// 表示順
    pub const ALL: [SectionId; 9] = [
        SectionId::Intro,
        SectionId::Overview,
        SectionId::Captioning,
        SectionId::ObjectDetection,
        SectionId::Tagging,
        SectionId::Ocr,
        SectionId::CustomModels,
        SectionId::CapabilitiesComparison,
        SectionId::Summary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Intro => "Why Computer Vision?",
            SectionId::Overview => "Azure AI Vision at a Glance",
            SectionId::Captioning => "Image Captioning",
            SectionId::ObjectDetection => "Object Detection",
            SectionId::Tagging => "Image Tagging",
            SectionId::Ocr => "Optical Character Recognition (OCR)",
            SectionId::CustomModels => "Training Custom Models",
            SectionId::CapabilitiesComparison => "Comparing Capabilities",
            SectionId::Summary => "Summary",
        }
    }

    pub fn accent_color(self) -> &'static str {
        match self {
            SectionId::Intro => "#0078d4",
            SectionId::Overview => "#5c2d91",
            SectionId::Captioning => "#008272",
            SectionId::ObjectDetection => "#d83b01",
            SectionId::Tagging => "#107c10",
            SectionId::Ocr => "#b4009e",
            SectionId::CustomModels => "#ca5010",
            SectionId::CapabilitiesComparison => "#004b50",
            SectionId::Summary => "#323130",
        }
    }

    /// DOMのid属性・アンカー名
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::Overview => "overview",
            SectionId::Captioning => "captioning",
            SectionId::ObjectDetection => "object-detection",
            SectionId::Tagging => "tagging",
            SectionId::Ocr => "ocr",
            SectionId::CustomModels => "custom-models",
            SectionId::CapabilitiesComparison => "capabilities-comparison",
            SectionId::Summary => "summary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_order() {
        assert_eq!(SectionId::ALL.first(), Some(&SectionId::Intro));
        assert_eq!(SectionId::ALL.last(), Some(&SectionId::Summary));
        assert_eq!(SectionId::ALL[5], SectionId::Ocr);
    }

    #[test]
    fn test_anchors_unique() {
        let anchors: HashSet<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_accent_colors_are_hex() {
        for section in SectionId::ALL {
            let color = section.accent_color();
            assert!(color.starts_with('#') && color.len() == 7, "{:?}: {}", section, color);
        }
    }
}
