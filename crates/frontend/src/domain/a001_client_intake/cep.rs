//! Consulta de endereço por CEP no serviço público ViaCEP.

use contracts::domain::a001_client_intake::cep::{CepAddress, CepLookupResult};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

const VIACEP_BASE: &str = "https://viacep.com.br/ws";
const LOOKUP_TIMEOUT_MS: u32 = 8_000;

/// Formato de resposta do ViaCEP. `erro` só vem presente quando o CEP é bem
/// formado mas não existe.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// Consulta um CEP já completo (8 dígitos, pontuação tolerada). A consulta
/// em voo nunca é cancelada; quem decide se a resposta ainda interessa é o
/// formulário, comparando com o valor atual do campo.
pub async fn lookup(cep: &str) -> CepLookupResult {
    let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
    let url = format!("{}/{}/json/", VIACEP_BASE, digits);

    let request = Box::pin(fetch(url));
    let timeout = Box::pin(TimeoutFuture::new(LOOKUP_TIMEOUT_MS));
    match select(request, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => CepLookupResult::Failed("tempo de consulta esgotado".to_string()),
    }
}

async fn fetch(url: String) -> CepLookupResult {
    let response = match Request::get(&url).send().await {
        Ok(r) => r,
        Err(e) => return CepLookupResult::Failed(format!("falha na requisição: {}", e)),
    };
    if !response.ok() {
        return CepLookupResult::Failed(format!("HTTP {}", response.status()));
    }
    match response.json::<ViaCepResponse>().await {
        Ok(body) if body.erro.is_some() => CepLookupResult::NotFound,
        Ok(body) => CepLookupResult::Found(CepAddress {
            cep: body.cep,
            logradouro: body.logradouro,
            bairro: body.bairro,
            cidade: body.localidade,
            uf: body.uf,
        }),
        Err(e) => CepLookupResult::Failed(format!("resposta inesperada: {}", e)),
    }
}
