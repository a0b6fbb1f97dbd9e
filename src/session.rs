//! ツアーセッション
//!
//! ルートビューと同じ構成で9セクションの状態を保持し、UIイベントを適用する。
//! 各セクションの状態はそのセクションのフィールドだけが持ち、
//! イベントは対応するセクション以外に影響しない。

use std::time::Duration;

use vision_tour_common::catalog::{
    CAPABILITIES, DETECTED_OBJECTS, IMAGE_CAPTION, OCR_TEXT_LINES,
    SUMMARY_CLOSING, SUMMARY_POINTS, TAGS, USE_CASES,
};
use vision_tour_common::config::{OCR_PROCESSING_DELAY, PAGE_TITLE};
use vision_tour_common::{
    DetectionState, IndustryKey, ModelKind, OcrCapture, Picker, PickerKey, Reveal, SectionId,
    ServiceKey,
};

use crate::snapshot::{
    ConfidenceSnapshot, OptionSnapshot, OverlaySnapshot, SectionBody, SectionSnapshot,
    TourSnapshot,
};

/// UIイベント
#[derive(Debug, Clone, PartialEq)]
pub enum TourEvent {
    SelectIndustry(IndustryKey),
    SelectService(ServiceKey),
    RevealCaption,
    RevealDetections,
    /// 検出結果の行にポインタが入った
    HoverObject(String),
    /// 検出結果の行からポインタが離れた
    LeaveObject,
    RevealTags,
    StartOcr,
    /// OCR遅延タイマーの発火
    OcrDelayElapsed,
    SelectModelKind(ModelKind),
}

/// イベント適用後にホストが行うべき副作用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEffect {
    /// `delay` 後に `TourEvent::OcrDelayElapsed` を1回だけ送る
    ScheduleOcrCompletion { delay: Duration },
}

/// 9セクション分の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourSession {
    intro: Picker<IndustryKey>,
    overview: Picker<ServiceKey>,
    captioning: Reveal,
    detection: DetectionState,
    tagging: Reveal,
    ocr: OcrCapture,
    custom_models: Picker<ModelKind>,
}

impl TourSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを1件適用する
    pub fn dispatch(&mut self, event: TourEvent) -> Option<TourEffect> {
        log::trace!("dispatch {:?}", event);
        match event {
            TourEvent::SelectIndustry(key) => {
                self.intro.select(key);
            }
            TourEvent::SelectService(key) => {
                self.overview.select(key);
            }
            TourEvent::RevealCaption => {
                self.captioning.trigger();
            }
            TourEvent::RevealDetections => {
                self.detection.reveal();
            }
            TourEvent::HoverObject(name) => {
                self.detection.hover(&name);
            }
            TourEvent::LeaveObject => {
                self.detection.clear_hover();
            }
            TourEvent::RevealTags => {
                self.tagging.trigger();
            }
            TourEvent::StartOcr => {
                if self.ocr.trigger() {
                    return Some(TourEffect::ScheduleOcrCompletion {
                        delay: OCR_PROCESSING_DELAY,
                    });
                }
            }
            TourEvent::OcrDelayElapsed => {
                self.ocr.complete();
            }
            TourEvent::SelectModelKind(key) => {
                self.custom_models.select(key);
            }
        }
        None
    }

    pub fn intro(&self) -> &Picker<IndustryKey> {
        &self.intro
    }

    pub fn overview(&self) -> &Picker<ServiceKey> {
        &self.overview
    }

    pub fn captioning(&self) -> &Reveal {
        &self.captioning
    }

    pub fn detection(&self) -> &DetectionState {
        &self.detection
    }

    pub fn tagging(&self) -> &Reveal {
        &self.tagging
    }

    pub fn ocr(&self) -> &OcrCapture {
        &self.ocr
    }

    pub fn custom_models(&self) -> &Picker<ModelKind> {
        &self.custom_models
    }

    /// 現在の表示内容
    pub fn snapshot(&self) -> TourSnapshot {
        TourSnapshot {
            page_title: PAGE_TITLE,
            sections: SectionId::ALL
                .iter()
                .map(|&id| SectionSnapshot {
                    id,
                    title: id.title(),
                    accent_color: id.accent_color(),
                    body: self.section_body(id),
                })
                .collect(),
        }
    }

    fn section_body(&self, id: SectionId) -> SectionBody {
        match id {
            SectionId::Intro => SectionBody::Intro {
                options: options(&self.intro, |k| k.example().icon),
                detail: self.intro.selected().example(),
            },
            SectionId::Overview => SectionBody::Overview {
                options: options(&self.overview, |k| k.descriptor().icon),
                detail: self.overview.selected().descriptor(),
                use_cases: &USE_CASES,
            },
            SectionId::Captioning => SectionBody::Captioning {
                phase: self.captioning.phase(),
                caption: self.captioning.is_revealed().then_some(IMAGE_CAPTION),
            },
            SectionId::ObjectDetection => {
                let revealed = self.detection.is_revealed();
                SectionBody::ObjectDetection {
                    phase: self.detection.phase(),
                    hovered: self.detection.hovered(),
                    overlays: if revealed {
                        DETECTED_OBJECTS
                            .iter()
                            .map(|object| OverlaySnapshot {
                                name: object.name,
                                bounding_box: object.bounding_box,
                                style: self.detection.overlay_style(object),
                            })
                            .collect()
                    } else {
                        Vec::new()
                    },
                    results: if revealed {
                        DETECTED_OBJECTS
                            .iter()
                            .map(|object| ConfidenceSnapshot {
                                name: object.name,
                                confidence_score: object.confidence_score,
                                fill_percent: object.fill_percent(),
                            })
                            .collect()
                    } else {
                        Vec::new()
                    },
                }
            }
            SectionId::Tagging => SectionBody::Tagging {
                phase: self.tagging.phase(),
                tags: if self.tagging.is_revealed() {
                    TAGS.iter()
                        .map(|tag| ConfidenceSnapshot {
                            name: tag.name,
                            confidence_score: tag.confidence_score,
                            fill_percent: tag.fill_percent(),
                        })
                        .collect()
                } else {
                    Vec::new()
                },
            },
            SectionId::Ocr => SectionBody::Ocr {
                phase: self.ocr.phase(),
                processing: self.ocr.is_processing(),
                control_disabled: self.ocr.control_disabled(),
                lines: self.ocr.is_revealed().then_some(&OCR_TEXT_LINES[..]),
            },
            SectionId::CustomModels => SectionBody::CustomModels {
                options: options(&self.custom_models, |k| k.descriptor().icon),
                detail: self.custom_models.selected().descriptor(),
            },
            SectionId::CapabilitiesComparison => SectionBody::CapabilitiesComparison {
                rows: &CAPABILITIES,
            },
            SectionId::Summary => SectionBody::Summary {
                points: &SUMMARY_POINTS,
                closing: SUMMARY_CLOSING,
            },
        }
    }
}

fn options<K: PickerKey>(
    picker: &Picker<K>,
    icon: impl Fn(K) -> &'static str,
) -> Vec<OptionSnapshot> {
    K::ALL
        .iter()
        .map(|&key| OptionSnapshot {
            id: key.id(),
            icon: icon(key),
            active: picker.is_active(key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_default() {
        assert_eq!(TourSession::new(), TourSession::default());
    }

    #[test]
    fn test_start_ocr_schedules_once() {
        let mut session = TourSession::new();
        assert_eq!(
            session.dispatch(TourEvent::StartOcr),
            Some(TourEffect::ScheduleOcrCompletion {
                delay: OCR_PROCESSING_DELAY
            })
        );
        assert_eq!(session.dispatch(TourEvent::StartOcr), None);
    }

    #[test]
    fn test_other_events_have_no_effect() {
        let mut session = TourSession::new();
        assert_eq!(session.dispatch(TourEvent::RevealCaption), None);
        assert_eq!(session.dispatch(TourEvent::SelectService(ServiceKey::CustomVision)), None);
        assert_eq!(session.dispatch(TourEvent::HoverObject("Person".into())), None);
    }

    #[test]
    fn test_snapshot_has_nine_sections() {
        let snapshot = TourSession::new().snapshot();
        let ids: Vec<SectionId> = snapshot.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }
}
