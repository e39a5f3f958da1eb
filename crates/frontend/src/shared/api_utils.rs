//! API utilities for frontend-backend communication

/// Base URL do serviço de perfis, derivada da localização atual da página
/// (porta 3000). Retorna string vazia fora do navegador.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Monta a URL completa de um caminho de API ("/api/...").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
