// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::section::{ExtractedRecord, SectionKey};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the extracted record as pretty JSON
    pub fn save_record(&self, name: &str, record: &ExtractedRecord) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_sections.json", name));

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json)?;

        tracing::info!("Saved sections to {}", file_path.display());
        Ok(file_path)
    }

    /// Keeps the raw generated text next to what was extracted from it
    pub fn save_raw_text(&self, name: &str, raw: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_raw.txt", name));
        fs::write(&file_path, raw)?;

        tracing::info!("Saved raw text to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format
    pub fn save_metadata(
        &self,
        name: &str,
        record: &ExtractedRecord,
        located: &[SectionKey],
        raw: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", name));

        let sections: Vec<&str> = located.iter().map(|key| key.title()).collect();
        let metadata = serde_json::json!({
            "name": name,
            "located_sections": sections,
            "clothing_recommendation_count": record.clothing_recommendations.len(),
            "styling_tip_count": record.styling_tips.len(),
            "seasonal_variation_count": record.seasonal_variations.len(),
            "accessory_count": record.accessories.as_ref().map(Vec::len),
            "shoe_count": record.shoes.as_ref().map(Vec::len),
            "has_remark": record.remember.is_some(),
            "input_length": raw.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}
