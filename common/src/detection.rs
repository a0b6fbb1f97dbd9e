//! 物体検出デモの状態
//!
//! 結果の表示フラグとホバー中の物体名を1か所で保持し、
//! 結果リストと検出枠の両方がここを参照する。

use crate::catalog::{DetectedObject, DETECTED_OBJECTS};
use crate::config::{DIMMED_OVERLAY_OPACITY, HIGHLIGHTED_OVERLAY_OPACITY};
use crate::reveal::{Reveal, TogglePhase};
use serde::Serialize;

/// 検出枠の線種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutlineStyle {
    Solid,
    Dashed,
}

impl OutlineStyle {
    /// CSSのborder-style値
    pub fn as_css(&self) -> &'static str {
        match self {
            OutlineStyle::Solid => "solid",
            OutlineStyle::Dashed => "dashed",
        }
    }
}

/// 検出枠の描画スタイル
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub outline: OutlineStyle,
    pub opacity: f32,
}

impl OverlayStyle {
    pub fn is_highlighted(&self) -> bool {
        self.outline == OutlineStyle::Solid
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DetectionState {
    reveal: Reveal,
    hovered: Option<&'static str>,
}

impl DetectionState {
    pub fn reveal(&mut self) -> bool {
        let changed = self.reveal.trigger();
        if changed {
            log::debug!("object detection: revealed");
        }
        changed
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn phase(&self) -> TogglePhase {
        self.reveal.phase()
    }

    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    /// 結果行へのホバー。表示前、または一覧にない名前は無視する。
    ///
    /// # Returns
    /// ホバー状態が変わった場合true
    pub fn hover(&mut self, name: &str) -> bool {
        if !self.is_revealed() {
            return false;
        }
        let Some(object) = DETECTED_OBJECTS.iter().find(|o| o.name == name) else {
            log::warn!("object detection: unknown object {:?}", name);
            return false;
        };
        if self.hovered == Some(object.name) {
            return false;
        }
        self.hovered = Some(object.name);
        true
    }

    /// 結果行からポインタが離れた
    pub fn clear_hover(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    pub fn overlay_style(&self, object: &DetectedObject) -> OverlayStyle {
        if self.hovered == Some(object.name) {
            OverlayStyle {
                outline: OutlineStyle::Solid,
                opacity: HIGHLIGHTED_OVERLAY_OPACITY,
            }
        } else {
            OverlayStyle {
                outline: OutlineStyle::Dashed,
                opacity: DIMMED_OVERLAY_OPACITY,
            }
        }
    }
}
