pub mod captioning;
pub mod comparison;
pub mod confidence_bar;
pub mod custom_models;
pub mod header;
pub mod intro;
pub mod object_detection;
pub mod ocr;
pub mod overview;
pub mod section;
pub mod summary;
pub mod tagging;
