use serde::{Deserialize, Serialize};

/// Endereço estruturado devolvido pelo serviço de consulta de CEP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CepAddress {
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
}

/// Resultado de uma consulta: endereço encontrado, CEP bem formado porém
/// inexistente, ou falha de transporte.
#[derive(Debug, Clone, PartialEq)]
pub enum CepLookupResult {
    Found(CepAddress),
    NotFound,
    Failed(String),
}
