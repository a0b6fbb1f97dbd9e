//! 固定パラメータ
//!
//! 実行時に変更できる設定はない。表示と遅延の定数のみをここにまとめる。

use std::time::Duration;

/// ページ見出し
pub const PAGE_TITLE: &str = "Exploring Azure AI Vision";

/// ページ副題
pub const PAGE_SUBTITLE: &str =
    "An interactive tour of captioning, detection, tagging, OCR and custom models";

/// Sectionのアクセント色（未指定時）
pub const DEFAULT_ACCENT_COLOR: &str = "#0078d4";

/// OCR「処理中」表示から結果表示までの遅延
pub const OCR_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// ホバーされていない検出枠の不透明度
pub const DIMMED_OVERLAY_OPACITY: f32 = 0.5;

/// ホバー中の検出枠の不透明度
pub const HIGHLIGHTED_OVERLAY_OPACITY: f32 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_delay_is_fixed() {
        assert_eq!(OCR_PROCESSING_DELAY.as_millis(), 1500);
    }
}
