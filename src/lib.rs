//! Vision Tour
//!
//! Azure AI Vision 学習ツアーのヘッドレス版。
//! Web版と同じ共通ライブラリの状態を使い、9セクションの表示内容を
//! スナップショットとして取り出せる。

pub mod runtime;
pub mod session;
pub mod snapshot;

pub use runtime::TourRuntime;
pub use session::{TourEffect, TourEvent, TourSession};
pub use snapshot::{SectionBody, SectionSnapshot, TourSnapshot};
pub use vision_tour_common as common;
