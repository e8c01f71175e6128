use scraper::Html;
use serde::{Deserialize, Serialize};

/// Case-sensitive marker a rendered text node must carry to count as an
/// acquisition mention.
pub const ACQUISITION_PATTERN: &str = "acquired by";

/// Crunchbase injects boilerplate descriptions matching the pattern; those
/// are dropped.
pub const EXCLUDED_PATTERN: &str = "Auto-generated";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionMention {
    pub message: String,
}

/// Walks every text node of the rendered page in document order and keeps
/// the ones mentioning an acquisition, trimmed of surrounding whitespace.
pub fn mine_acquisition_mentions(page_source: &str) -> Vec<AcquisitionMention> {
    let html_document = Html::parse_document(page_source);

    html_document
        .root_element()
        .text()
        .filter(|text| text.contains(ACQUISITION_PATTERN))
        .map(str::trim)
        .filter(|text| !text.contains(EXCLUDED_PATTERN))
        .map(|text| AcquisitionMention {
            message: text.to_string(),
        })
        .collect()
}
