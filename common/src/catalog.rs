//! 固定データカタログ
//!
//! 各セクションが表示するサンプルデータ。すべてコンパイル時に確定する
//! `static` テーブルで、取得・保存・変更は行わない。
//! - APPLICATION_EXAMPLES: 業界別の活用例（Intro）
//! - SERVICES / USE_CASES: サービス概要（Overview）
//! - DETECTED_OBJECTS / TAGS / OCR_TEXT_LINES: 解析結果のサンプル
//! - MODEL_TYPES / CAPABILITIES / SUMMARY_POINTS: カスタムモデル・比較表・まとめ

use serde::Serialize;

/// 業界別の活用例
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationExample {
    pub name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
}

/// Azureのビジョン系サービス
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
}

/// ユースケースカード
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseExample {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// 検出枠（サンプル画像に対するパーセント座標）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// 物体検出結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    pub name: &'static str,
    pub confidence_score: f32,
    pub bounding_box: BoundingBox,
    pub color: &'static str,
}

impl DetectedObject {
    /// 信頼度バーの塗り幅（%）
    pub fn fill_percent(&self) -> f32 {
        confidence_fill(self.confidence_score)
    }
}

/// タグ付け結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: &'static str,
    pub confidence_score: f32,
}

impl Tag {
    /// 信頼度バーの塗り幅（%）
    pub fn fill_percent(&self) -> f32 {
        confidence_fill(self.confidence_score)
    }
}

/// カスタムモデル図解の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualKind {
    /// 画像全体に1つのラベル
    Single,
    /// 画像内の複数領域にラベル
    Multiple,
}

/// カスタムモデルの種類
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTypeDescriptor {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub visual_kind: VisualKind,
}

/// 機能比較表の1行
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRow {
    pub name: &'static str,
    pub icon: &'static str,
    pub is_customizable: bool,
    pub description: &'static str,
}

/// まとめカード
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// 信頼度スコア（0〜100）をバーの塗り幅に変換
pub fn confidence_fill(score: f32) -> f32 {
    score.clamp(0.0, 100.0)
}

pub static APPLICATION_EXAMPLES: [ApplicationExample; 4] = [
    ApplicationExample {
        name: "Retail",
        icon: "🛒",
        title: "Smart Shelf Monitoring",
        color: "#0078d4",
        description: "Cameras spot empty shelves and misplaced products so staff can restock before customers notice.",
        benefit: "Fewer out-of-stock events and happier shoppers",
    },
    ApplicationExample {
        name: "Healthcare",
        icon: "🏥",
        title: "Medical Imaging",
        color: "#d13438",
        description: "Vision models highlight anomalies in X-rays and scans, giving radiologists a second pair of eyes.",
        benefit: "Early diagnosis and reduced human error",
    },
    ApplicationExample {
        name: "Manufacturing",
        icon: "🏭",
        title: "Visual Quality Inspection",
        color: "#ca5010",
        description: "Cameras on the production line flag scratches, dents and missing parts in real time.",
        benefit: "Consistent quality with less waste",
    },
    ApplicationExample {
        name: "Transportation",
        icon: "🚦",
        title: "Traffic Flow Analysis",
        color: "#107c10",
        description: "Detection models count vehicles, cyclists and pedestrians at busy intersections.",
        benefit: "Safer roads and shorter commutes",
    },
];

pub static SERVICES: [ServiceDescriptor; 2] = [
    ServiceDescriptor {
        name: "Azure AI Vision",
        icon: "👁️",
        color: "#0078d4",
        description: "Prebuilt models that analyze images out of the box, with no training data required.",
        capabilities: &[
            "Image captioning",
            "Object detection",
            "Image tagging",
            "Optical character recognition (OCR)",
        ],
    },
    ServiceDescriptor {
        name: "Azure AI Custom Vision",
        icon: "🎯",
        color: "#8764b8",
        description: "Train your own image models with a handful of labeled examples from your domain.",
        capabilities: &[
            "Custom image classification",
            "Custom object detection",
            "Iterative training and evaluation",
            "Export models to edge devices",
        ],
    },
];

pub static USE_CASES: [UseCaseExample; 6] = [
    UseCaseExample {
        icon: "♿",
        name: "Accessibility",
        description: "Generate alt text so screen readers can describe images.",
    },
    UseCaseExample {
        icon: "🛡️",
        name: "Content Moderation",
        description: "Flag unsafe or off-topic images before they are published.",
    },
    UseCaseExample {
        icon: "🛍️",
        name: "Retail Analytics",
        description: "Understand shelf layouts and product placement.",
    },
    UseCaseExample {
        icon: "📄",
        name: "Document Digitization",
        description: "Turn receipts, forms and signs into searchable text.",
    },
    UseCaseExample {
        icon: "🔍",
        name: "Quality Control",
        description: "Detect defects on manufacturing lines.",
    },
    UseCaseExample {
        icon: "🏙️",
        name: "Smart Cities",
        description: "Monitor traffic, parking and public spaces.",
    },
];

/// 画像キャプションのサンプル
pub static IMAGE_CAPTION: &str = "A person riding a skateboard down a city street";

pub static DETECTED_OBJECTS: [DetectedObject; 2] = [
    DetectedObject {
        name: "Person",
        confidence_score: 95.5,
        bounding_box: BoundingBox {
            x: 32.0,
            y: 8.0,
            width: 36.0,
            height: 66.0,
        },
        color: "#d13438",
    },
    DetectedObject {
        name: "Skateboard",
        confidence_score: 90.4,
        bounding_box: BoundingBox {
            x: 30.0,
            y: 74.0,
            width: 40.0,
            height: 14.0,
        },
        color: "#0078d4",
    },
];

pub static TAGS: [Tag; 8] = [
    Tag { name: "sport", confidence_score: 99.6 },
    Tag { name: "outdoor", confidence_score: 99.1 },
    Tag { name: "person", confidence_score: 98.7 },
    Tag { name: "skateboarding", confidence_score: 97.3 },
    Tag { name: "street", confidence_score: 94.2 },
    Tag { name: "skateboarder", confidence_score: 92.8 },
    Tag { name: "city", confidence_score: 88.5 },
    Tag { name: "urban", confidence_score: 85.1 },
];

/// OCRで抽出されるレシートのテキスト（表示順）
pub static OCR_TEXT_LINES: [&str; 12] = [
    "CONTOSO COFFEE",
    "123 Main Street",
    "Seattle, WA 98101",
    "Date: 03/15/2024  08:42 AM",
    "Order #1047",
    "Cappuccino             $4.50",
    "Blueberry Muffin       $3.25",
    "Orange Juice           $3.75",
    "Subtotal              $11.50",
    "Tax                    $1.04",
    "Total                 $12.54",
    "Thank you for visiting!",
];

pub static MODEL_TYPES: [ModelTypeDescriptor; 2] = [
    ModelTypeDescriptor {
        name: "Image Classification",
        icon: "🏷️",
        color: "#008272",
        description: "Assigns a label to the whole image based on what it shows.",
        example: "Is this photo of a ripe or an unripe banana?",
        visual_kind: VisualKind::Single,
    },
    ModelTypeDescriptor {
        name: "Object Detection",
        icon: "📦",
        color: "#ca5010",
        description: "Finds every instance of your custom objects and draws a box around each one.",
        example: "Where is each damaged package on this conveyor belt?",
        visual_kind: VisualKind::Multiple,
    },
];

pub static CAPABILITIES: [CapabilityRow; 5] = [
    CapabilityRow {
        name: "Captions",
        icon: "📝",
        is_customizable: false,
        description: "Describes the whole image in one human-readable sentence.",
    },
    CapabilityRow {
        name: "Object Detection",
        icon: "📦",
        is_customizable: true,
        description: "Locates objects and returns a bounding box for each.",
    },
    CapabilityRow {
        name: "Tagging",
        icon: "🏷️",
        is_customizable: false,
        description: "Returns keywords for objects, scenery and actions.",
    },
    CapabilityRow {
        name: "OCR",
        icon: "🔤",
        is_customizable: false,
        description: "Extracts printed and handwritten text.",
    },
    CapabilityRow {
        name: "Classification",
        icon: "🗂️",
        is_customizable: true,
        description: "Sorts whole images into the categories you define.",
    },
];

pub static SUMMARY_POINTS: [SummaryPoint; 4] = [
    SummaryPoint {
        icon: "👁️",
        title: "Prebuilt analysis",
        text: "Captioning, tagging, detection and OCR work without any training.",
    },
    SummaryPoint {
        icon: "🎯",
        title: "Custom models",
        text: "Custom Vision adapts classification and detection to your own images.",
    },
    SummaryPoint {
        icon: "📊",
        title: "Confidence scores",
        text: "Every result comes with a score so you can decide what to trust.",
    },
    SummaryPoint {
        icon: "🚀",
        title: "Next steps",
        text: "Try the Vision Studio, then call the same models from your own apps.",
    },
];

/// まとめセクションの締めの一文
pub static SUMMARY_CLOSING: &str =
    "Computer vision turns pixels into insight: start with prebuilt models and customize only when you need to.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table_sizes() {
        assert_eq!(APPLICATION_EXAMPLES.len(), 4);
        assert_eq!(SERVICES.len(), 2);
        assert_eq!(USE_CASES.len(), 6);
        assert_eq!(DETECTED_OBJECTS.len(), 2);
        assert_eq!(TAGS.len(), 8);
        assert_eq!(OCR_TEXT_LINES.len(), 12);
        assert_eq!(MODEL_TYPES.len(), 2);
        assert_eq!(CAPABILITIES.len(), 5);
    }

    #[test]
    fn test_healthcare_example() {
        let healthcare = APPLICATION_EXAMPLES
            .iter()
            .find(|a| a.name == "Healthcare")
            .expect("Healthcareが見つからない");
        assert_eq!(healthcare.title, "Medical Imaging");
        assert_eq!(healthcare.benefit, "Early diagnosis and reduced human error");
    }

    #[test]
    fn test_detected_object_scores() {
        assert_eq!(DETECTED_OBJECTS[0].name, "Person");
        assert_eq!(DETECTED_OBJECTS[0].fill_percent(), 95.5);
        assert_eq!(DETECTED_OBJECTS[1].name, "Skateboard");
        assert_eq!(DETECTED_OBJECTS[1].fill_percent(), 90.4);
    }

    #[test]
    fn test_bounding_boxes_inside_illustration() {
        for object in &DETECTED_OBJECTS {
            let b = object.bounding_box;
            assert!(b.x >= 0.0 && b.y >= 0.0);
            assert!(b.x + b.width <= 100.0, "{} が横にはみ出している", object.name);
            assert!(b.y + b.height <= 100.0, "{} が縦にはみ出している", object.name);
        }
    }

    #[test]
    fn test_tag_scores() {
        assert_eq!(TAGS[0].name, "sport");
        assert_eq!(TAGS[0].fill_percent(), 99.6);
        assert!(TAGS.iter().all(|t| (0.0..=100.0).contains(&t.confidence_score)));
    }

    #[test]
    fn test_confidence_fill_clamps() {
        assert_eq!(confidence_fill(-3.0), 0.0);
        assert_eq!(confidence_fill(42.5), 42.5);
        assert_eq!(confidence_fill(120.0), 100.0);
    }

    #[test]
    fn test_customizable_capabilities() {
        let customizable: Vec<&str> = CAPABILITIES
            .iter()
            .filter(|c| c.is_customizable)
            .map(|c| c.name)
            .collect();
        assert_eq!(customizable, vec!["Object Detection", "Classification"]);
    }

    #[test]
    fn test_model_visual_kinds() {
        assert_eq!(MODEL_TYPES[0].visual_kind, VisualKind::Single);
        assert_eq!(MODEL_TYPES[1].visual_kind, VisualKind::Multiple);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(DETECTED_OBJECTS[0]).unwrap();
        assert_eq!(json["confidenceScore"], serde_json::json!(95.5));
        assert_eq!(json["boundingBox"]["width"], serde_json::json!(36.0));
    }
}
