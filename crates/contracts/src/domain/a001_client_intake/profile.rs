use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{FieldId, FieldValue};

// ============================================================================
// ID
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Perfil parcial devolvido pelo serviço de perfis; usado para pré-preencher
/// os campos de identificação quando o cliente chega de uma etapa anterior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientProfileDto {
    pub id: Option<String>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    #[serde(rename = "dataNascimento")]
    pub data_nascimento: Option<String>,
    pub genero: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Envio final do cadastro: atualização parcial chaveada pelo mesmo
/// identificador usado no rascunho.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRegistrationRequest {
    pub id: String,
    pub fields: HashMap<FieldId, FieldValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRegistrationResponse {
    pub success: bool,
    pub message: Option<String>,
}
