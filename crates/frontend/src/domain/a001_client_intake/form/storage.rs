//! Persistência do rascunho no localStorage do navegador.

use contracts::domain::a001_client_intake::profile::ClientId;
use contracts::domain::a001_client_intake::snapshot::DraftSnapshot;

const DRAFT_KEY_PREFIX: &str = "a001_client_intake_draft_v1";
const SESSION_ID_KEY: &str = "a001_client_intake_session_id";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn draft_key(client_id: &str) -> String {
    format!("{}:{}", DRAFT_KEY_PREFIX, client_id)
}

/// Identificador estável do rascunho quando ainda não existe perfil: um UUID
/// gerado uma vez e guardado no próprio localStorage.
pub fn session_client_id() -> String {
    if let Some(storage) = local_storage() {
        if let Ok(Some(existing)) = storage.get_item(SESSION_ID_KEY) {
            return existing;
        }
        let fresh = ClientId::new_v4().as_string();
        let _ = storage.set_item(SESSION_ID_KEY, &fresh);
        return fresh;
    }
    ClientId::new_v4().as_string()
}

pub fn load_draft(client_id: &str) -> Option<DraftSnapshot> {
    let raw = local_storage()?.get_item(&draft_key(client_id)).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Grava o rascunho por inteiro; o último a gravar vence.
pub fn save_draft(client_id: &str, snapshot: &DraftSnapshot) -> Result<(), String> {
    let storage = local_storage().ok_or_else(|| "localStorage indisponível".to_string())?;
    let raw = serde_json::to_string(snapshot)
        .map_err(|e| format!("falha ao serializar rascunho: {}", e))?;
    storage
        .set_item(&draft_key(client_id), &raw)
        .map_err(|_| "falha ao gravar no localStorage".to_string())
}

pub fn delete_draft(client_id: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(&draft_key(client_id));
    }
}
