use serde::{Deserialize, Serialize};

/// A named grouping that products and shipping charges are assigned to,
/// used as the join key for rate lookup. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxClass {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl TaxClass {
    /// Code of the default tax class; always present, and the bucket
    /// shipping/handling charges are taxed under
    pub const DEFAULT_CODE: &'static str = "DEFAULT";

    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}
