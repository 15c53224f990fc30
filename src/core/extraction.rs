//! Field extraction from photos of packages and receipts.
//!
//! Extraction is an external collaborator: the ledger and the calculator never wait
//! on it. [`MockExtractor`] stands in for a real OCR service by sleeping for a while
//! and returning fixed fields.

use crate::{
    entities::{IngredientDraft, Unit},
    errors::{Error, Result},
};
use std::{future::Future, time::Duration};

/// How long the mock pretends to process an image.
pub const DEFAULT_EXTRACTION_DELAY: Duration = Duration::from_secs(2);

/// Whatever an extractor managed to read; every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    /// Product name printed on the package
    pub name: Option<String>,
    /// Price per unit
    pub price: Option<f64>,
    /// Package size
    pub quantity: Option<f64>,
    /// Unit of the package size
    pub unit: Option<Unit>,
}

/// Reads ingredient fields out of an image.
pub trait FieldExtractor {
    /// Extracts fields from raw image bytes.
    ///
    /// # Errors
    /// Returns [`Error::Extraction`] when the image cannot be read.
    fn extract(&self, image: &[u8]) -> impl Future<Output = Result<ExtractedFields>> + Send;
}

/// Extractor that waits a fixed delay and returns canned fields.
#[derive(Debug, Clone)]
pub struct MockExtractor {
    delay: Duration,
    fields: ExtractedFields,
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self {
            delay: DEFAULT_EXTRACTION_DELAY,
            fields: ExtractedFields {
                name: Some("Farinha de Trigo Especial".to_string()),
                price: Some(8.50),
                quantity: Some(1.0),
                unit: Some(Unit::Kg),
            },
        }
    }
}

impl MockExtractor {
    /// Extractor returning `fields` after `delay`.
    #[must_use]
    pub const fn new(delay: Duration, fields: ExtractedFields) -> Self {
        Self { delay, fields }
    }

    /// Replaces the processing delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl FieldExtractor for MockExtractor {
    fn extract(&self, image: &[u8]) -> impl Future<Output = Result<ExtractedFields>> + Send {
        let delay = self.delay;
        let fields = self.fields.clone();
        let is_empty = image.is_empty();

        async move {
            tokio::time::sleep(delay).await;
            if is_empty {
                return Err(Error::Extraction {
                    message: "Image is empty".to_string(),
                });
            }
            Ok(fields)
        }
    }
}

/// Runs an extractor and returns a blank ingredient draft prefilled with its fields.
///
/// # Errors
/// Propagates the extractor's error; no draft is produced in that case.
pub async fn prefill_draft<E: FieldExtractor>(extractor: &E, image: &[u8]) -> Result<IngredientDraft> {
    let fields = extractor.extract(image).await?;
    let mut draft = IngredientDraft::default();
    draft.apply_extracted(&fields);
    Ok(draft)
}
