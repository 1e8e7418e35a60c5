use serde::{Deserialize, Serialize};

/// Display metadata for a challenge category
///
/// Carried through for presentation; progression never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    pub icon: String,
    /// Gradient start and end colors
    pub colors: [String; 2],
}
