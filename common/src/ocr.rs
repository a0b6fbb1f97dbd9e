//! OCRデモの状態
//!
//! Idle -> Processing -> Revealed。Processingからの遷移は遅延タイマーの
//! 1回きりのコールバックだけが行う。タイマーの発火そのものはホスト側
//! （WASMではsetTimeout、ヘッドレスではtokio）の責務。

use crate::reveal::TogglePhase;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OcrCapture {
    phase: TogglePhase,
}

impl OcrCapture {
    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase == TogglePhase::Processing
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == TogglePhase::Revealed
    }

    /// 開始ボタンが無効か（処理中・表示済み）
    pub fn control_disabled(&self) -> bool {
        self.phase != TogglePhase::Idle
    }

    /// 読み取り開始
    ///
    /// # Returns
    /// Idleから開始できた場合true。呼び出し側はこのときだけ遅延タイマーを登録する。
    pub fn trigger(&mut self) -> bool {
        if self.phase != TogglePhase::Idle {
            return false;
        }
        self.phase = TogglePhase::Processing;
        log::debug!("ocr: processing");
        true
    }

    /// 遅延タイマーの完了。Processing以外では何もしない。
    pub fn complete(&mut self) -> bool {
        if self.phase != TogglePhase::Processing {
            log::warn!("ocr: completion ignored in phase {}", self.phase.as_str());
            return false;
        }
        self.phase = TogglePhase::Revealed;
        log::debug!("ocr: revealed");
        true
    }
}
