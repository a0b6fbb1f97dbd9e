//! 結果表示トグル
//!
//! 一方向の状態遷移: Idle -> Revealed。Revealedは終端で、Idleに戻る操作はない。

use serde::Serialize;

/// トグル系セクションの表示段階
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TogglePhase {
    #[default]
    Idle,
    /// OCRのみ: 遅延中
    Processing,
    Revealed,
}

impl TogglePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TogglePhase::Idle => "idle",
            TogglePhase::Processing => "processing",
            TogglePhase::Revealed => "revealed",
        }
    }
}

/// 結果表示フラグ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    /// 結果を表示する。表示済みなら何もしない。
    ///
    /// # Returns
    /// 今回の呼び出しで表示に切り替わった場合true
    pub fn trigger(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        log::debug!("reveal: idle -> revealed");
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn phase(&self) -> TogglePhase {
        if self.revealed {
            TogglePhase::Revealed
        } else {
            TogglePhase::Idle
        }
    }
}
