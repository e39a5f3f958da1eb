//! Chamadas ao serviço de perfis: pré-preenchimento e envio do cadastro.

use contracts::domain::a001_client_intake::profile::{
    ClientProfileDto, SubmitRegistrationRequest, SubmitRegistrationResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Busca o perfil parcial de um cliente vindo de uma etapa anterior.
pub async fn fetch_profile(id: &str) -> Result<ClientProfileDto, String> {
    let response = Request::get(&format!("{}/api/clients/{}/profile", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Falha ao consultar perfil: {}", e))?;

    if response.status() == 404 {
        return Err("Perfil não encontrado".to_string());
    }
    if !response.ok() {
        return Err(format!("Falha ao consultar perfil: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Resposta inválida do serviço de perfis: {}", e))
}

/// Variante por e-mail, para quem chega sem identificador.
pub async fn fetch_profile_by_email(email: &str) -> Result<ClientProfileDto, String> {
    let response = Request::get(&format!(
        "{}/api/clients/profile?email={}",
        api_base(),
        urlencoding::encode(email)
    ))
    .send()
    .await
    .map_err(|e| format!("Falha ao consultar perfil: {}", e))?;

    if response.status() == 404 {
        return Err("Perfil não encontrado".to_string());
    }
    if !response.ok() {
        return Err(format!("Falha ao consultar perfil: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Resposta inválida do serviço de perfis: {}", e))
}

/// Envia o cadastro completo como atualização parcial do perfil.
pub async fn submit_registration(
    dto: SubmitRegistrationRequest,
) -> Result<SubmitRegistrationResponse, String> {
    let response = Request::post(&format!(
        "{}/api/clients/{}/registration",
        api_base(),
        dto.id
    ))
    .json(&dto)
    .map_err(|e| format!("Falha ao serializar cadastro: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Falha ao enviar cadastro: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), body));
    }

    let parsed: SubmitRegistrationResponse = response
        .json()
        .await
        .map_err(|e| format!("Resposta inválida do serviço de perfis: {}", e))?;
    if !parsed.success {
        return Err(parsed
            .message
            .unwrap_or_else(|| "O serviço recusou o cadastro".to_string()));
    }
    Ok(parsed)
}
