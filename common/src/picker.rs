//! 単一選択ピッカー
//!
//! 固定の選択肢から1つだけを選ぶ状態。選択キーは列挙型なので、
//! カタログに存在しない項目を指すことはない。

use crate::catalog::{
    ApplicationExample, ModelTypeDescriptor, ServiceDescriptor, APPLICATION_EXAMPLES, MODEL_TYPES,
    SERVICES,
};
use serde::Serialize;
use std::fmt::Debug;

/// ピッカーの選択肢キー
pub trait PickerKey: Copy + Eq + Debug + Send + Sync + 'static {
    /// ログ表示用のピッカー名
    const PICKER: &'static str;
    /// 初期選択
    const FIRST: Self;
    /// 全選択肢（表示順）
    const ALL: &'static [Self];

    /// 選択肢ID（カタログ上の名前）
    fn id(self) -> &'static str;
}

/// 単一選択の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Picker<K: PickerKey> {
    selected: K,
}

impl<K: PickerKey> Default for Picker<K> {
    fn default() -> Self {
        Self { selected: K::FIRST }
    }
}

impl<K: PickerKey> Picker<K> {
    pub fn selected(&self) -> K {
        self.selected
    }

    pub fn is_active(&self, key: K) -> bool {
        self.selected == key
    }

    /// 選択を変更する。選択中の項目を再選択した場合は何もしない。
    ///
    /// # Returns
    /// 選択が変わった場合true
    pub fn select(&mut self, key: K) -> bool {
        if self.selected == key {
            return false;
        }
        log::debug!("{}: {} -> {}", K::PICKER, self.selected.id(), key.id());
        self.selected = key;
        true
    }
}

/// Introの業界キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndustryKey {
    Retail,
    Healthcare,
    Manufacturing,
    Transportation,
}

impl PickerKey for IndustryKey {
    const PICKER: &'static str = "industry";
    const FIRST: Self = IndustryKey::Retail;
    const ALL: &'static [Self] = &[
        IndustryKey::Retail,
        IndustryKey::Healthcare,
        IndustryKey::Manufacturing,
        IndustryKey::Transportation,
    ];

    fn id(self) -> &'static str {
        self.example().name
    }
}

impl IndustryKey {
    pub fn example(self) -> &'static ApplicationExample {
        match self {
            IndustryKey::Retail => &APPLICATION_EXAMPLES[0],
            IndustryKey::Healthcare => &APPLICATION_EXAMPLES[1],
            IndustryKey::Manufacturing => &APPLICATION_EXAMPLES[2],
            IndustryKey::Transportation => &APPLICATION_EXAMPLES[3],
        }
    }
}

/// Overviewのサービスキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceKey {
    Vision,
    CustomVision,
}

impl PickerKey for ServiceKey {
    const PICKER: &'static str = "service";
    const FIRST: Self = ServiceKey::Vision;
    const ALL: &'static [Self] = &[ServiceKey::Vision, ServiceKey::CustomVision];

    fn id(self) -> &'static str {
        self.descriptor().name
    }
}

impl ServiceKey {
    pub fn descriptor(self) -> &'static ServiceDescriptor {
        match self {
            ServiceKey::Vision => &SERVICES[0],
            ServiceKey::CustomVision => &SERVICES[1],
        }
    }
}

/// CustomModelsのモデル種別キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelKind {
    Classification,
    Detection,
}

impl PickerKey for ModelKind {
    const PICKER: &'static str = "model-type";
    const FIRST: Self = ModelKind::Classification;
    const ALL: &'static [Self] = &[ModelKind::Classification, ModelKind::Detection];

    fn id(self) -> &'static str {
        self.descriptor().name
    }
}

impl ModelKind {
    pub fn descriptor(self) -> &'static ModelTypeDescriptor {
        match self {
            ModelKind::Classification => &MODEL_TYPES[0],
            ModelKind::Detection => &MODEL_TYPES[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VisualKind;

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(Picker::<IndustryKey>::default().selected(), IndustryKey::Retail);
        assert_eq!(Picker::<ServiceKey>::default().selected(), ServiceKey::Vision);
        assert_eq!(Picker::<ModelKind>::default().selected(), ModelKind::Classification);

        assert_eq!(IndustryKey::FIRST.example().name, APPLICATION_EXAMPLES[0].name);
        assert_eq!(ServiceKey::FIRST.descriptor().name, SERVICES[0].name);
        assert_eq!(ModelKind::FIRST.descriptor().name, MODEL_TYPES[0].name);
    }

    #[test]
    fn test_keys_cover_catalog_in_order() {
        let ids: Vec<&str> = IndustryKey::ALL.iter().map(|k| k.id()).collect();
        let names: Vec<&str> = APPLICATION_EXAMPLES.iter().map(|a| a.name).collect();
        assert_eq!(ids, names);

        let ids: Vec<&str> = ServiceKey::ALL.iter().map(|k| k.id()).collect();
        let names: Vec<&str> = SERVICES.iter().map(|s| s.name).collect();
        assert_eq!(ids, names);

        let ids: Vec<&str> = ModelKind::ALL.iter().map(|k| k.id()).collect();
        let names: Vec<&str> = MODEL_TYPES.iter().map(|m| m.name).collect();
        assert_eq!(ids, names);
    }

    #[test]
    fn test_select_changes_selection() {
        let mut picker = Picker::<IndustryKey>::default();
        assert!(picker.select(IndustryKey::Healthcare));
        assert_eq!(picker.selected(), IndustryKey::Healthcare);
        assert!(picker.is_active(IndustryKey::Healthcare));
        assert!(!picker.is_active(IndustryKey::Retail));
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut picker = Picker::<ModelKind>::default();
        picker.select(ModelKind::Detection);
        let before = picker;

        assert!(!picker.select(ModelKind::Detection));
        assert_eq!(picker, before);
        assert_eq!(picker.selected().descriptor().visual_kind, VisualKind::Multiple);
    }

    #[test]
    fn test_ids_are_distinct() {
        // data-key属性として使うため、同じピッカー内で重複しない
        let mut ids: Vec<&str> = IndustryKey::ALL.iter().map(|k| k.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), IndustryKey::ALL.len());
    }
}
