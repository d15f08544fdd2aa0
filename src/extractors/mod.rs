// src/extractors/mod.rs
pub mod advice;
pub mod bullets;
pub mod header;
pub mod remark;
pub mod rules;
pub mod section;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use section::{
    extract,
    ExtractedRecord,
    SectionExtractor,
    SectionKey,
    SubsectionKey,
};
#[allow(unused_imports)]
pub use header::{HeaderLocator, SectionSpan};
