use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::fields::{FieldId, FieldValue};

/// Rascunho persistido do formulário. O estado completo é gravado por
/// inteiro a cada salvamento (último a gravar vence); `changed_fields`
/// registra o que mudou desde o salvamento anterior para consumidores que
/// queiram o diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub data: HashMap<FieldId, FieldValue>,
    #[serde(rename = "changedFields")]
    pub changed_fields: BTreeSet<FieldId>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
