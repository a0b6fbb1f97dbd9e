//! Vision Tour Common Library
//!
//! ヘッドレスセッションとWeb(WASM)で共有されるデータカタログとセクション状態

pub mod catalog;
pub mod config;
pub mod detection;
pub mod error;
pub mod ocr;
pub mod picker;
pub mod reveal;
pub mod sections;

pub use catalog::{
    ApplicationExample, BoundingBox, CapabilityRow, DetectedObject, ModelTypeDescriptor,
    ServiceDescriptor, SummaryPoint, Tag, UseCaseExample, VisualKind,
};
pub use detection::{DetectionState, OutlineStyle, OverlayStyle};
pub use error::{Error, Result};
pub use ocr::OcrCapture;
pub use picker::{IndustryKey, ModelKind, Picker, PickerKey, ServiceKey};
pub use reveal::{Reveal, TogglePhase};
pub use sections::SectionId;
