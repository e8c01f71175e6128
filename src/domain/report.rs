use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::acquisition::AcquisitionMention;

/// Combined results keyed by source. A key is present only when the
/// corresponding source was queried in this run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub securitytrails: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crunchbase: Option<Vec<AcquisitionMention>>,
}
