use serde::{Deserialize, Serialize};

// ============================================================================
// Seções do formulário
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    DadosPessoais,
    Endereco,
    Preferencias,
}

impl Section {
    pub fn code(&self) -> &'static str {
        match self {
            Section::DadosPessoais => "dados_pessoais",
            Section::Endereco => "endereco",
            Section::Preferencias => "preferencias",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::DadosPessoais => "Dados pessoais",
            Section::Endereco => "Endereço",
            Section::Preferencias => "Preferências",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::DadosPessoais,
            Section::Endereco,
            Section::Preferencias,
        ]
    }
}

// ============================================================================
// Campos
// ============================================================================

/// Conjunto fixo de campos do cadastro. A ordem de [`FieldId::all`] é a ordem
/// de apresentação das seções.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    // Dados pessoais
    Nome,
    Cpf,
    DataNascimento,
    Genero,
    Telefone,
    Email,
    Profissao,
    FaixaSalarial,
    // Endereço
    Cep,
    Logradouro,
    Complemento,
    Bairro,
    Cidade,
    Uf,
    // Preferências
    AreaOrientacao,
    OutraArea,
    ComoConheceu,
    AceiteTermos,
    AceiteContato,
}

impl FieldId {
    pub fn code(&self) -> &'static str {
        match self {
            FieldId::Nome => "nome",
            FieldId::Cpf => "cpf",
            FieldId::DataNascimento => "data_nascimento",
            FieldId::Genero => "genero",
            FieldId::Telefone => "telefone",
            FieldId::Email => "email",
            FieldId::Profissao => "profissao",
            FieldId::FaixaSalarial => "faixa_salarial",
            FieldId::Cep => "cep",
            FieldId::Logradouro => "logradouro",
            FieldId::Complemento => "complemento",
            FieldId::Bairro => "bairro",
            FieldId::Cidade => "cidade",
            FieldId::Uf => "uf",
            FieldId::AreaOrientacao => "area_orientacao",
            FieldId::OutraArea => "outra_area",
            FieldId::ComoConheceu => "como_conheceu",
            FieldId::AceiteTermos => "aceite_termos",
            FieldId::AceiteContato => "aceite_contato",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Nome => "Nome completo",
            FieldId::Cpf => "CPF",
            FieldId::DataNascimento => "Data de nascimento",
            FieldId::Genero => "Gênero",
            FieldId::Telefone => "Telefone",
            FieldId::Email => "E-mail",
            FieldId::Profissao => "Profissão",
            FieldId::FaixaSalarial => "Faixa salarial",
            FieldId::Cep => "CEP",
            FieldId::Logradouro => "Endereço",
            FieldId::Complemento => "Complemento",
            FieldId::Bairro => "Bairro",
            FieldId::Cidade => "Cidade",
            FieldId::Uf => "Estado",
            FieldId::AreaOrientacao => "Área de orientação",
            FieldId::OutraArea => "Sugerir outra área",
            FieldId::ComoConheceu => "Como nos conheceu",
            FieldId::AceiteTermos => "Aceite dos termos de uso",
            FieldId::AceiteContato => "Aceite de contato",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            FieldId::Nome
            | FieldId::Cpf
            | FieldId::DataNascimento
            | FieldId::Genero
            | FieldId::Telefone
            | FieldId::Email
            | FieldId::Profissao
            | FieldId::FaixaSalarial => Section::DadosPessoais,
            FieldId::Cep
            | FieldId::Logradouro
            | FieldId::Complemento
            | FieldId::Bairro
            | FieldId::Cidade
            | FieldId::Uf => Section::Endereco,
            FieldId::AreaOrientacao
            | FieldId::OutraArea
            | FieldId::ComoConheceu
            | FieldId::AceiteTermos
            | FieldId::AceiteContato => Section::Preferencias,
        }
    }

    /// Complemento e sugestão de outra área são os dois únicos campos
    /// opcionais; ficam fora do cálculo de progresso.
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::Complemento | FieldId::OutraArea)
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, FieldId::AceiteTermos | FieldId::AceiteContato)
    }

    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::Nome,
            FieldId::Cpf,
            FieldId::DataNascimento,
            FieldId::Genero,
            FieldId::Telefone,
            FieldId::Email,
            FieldId::Profissao,
            FieldId::FaixaSalarial,
            FieldId::Cep,
            FieldId::Logradouro,
            FieldId::Complemento,
            FieldId::Bairro,
            FieldId::Cidade,
            FieldId::Uf,
            FieldId::AreaOrientacao,
            FieldId::OutraArea,
            FieldId::ComoConheceu,
            FieldId::AceiteTermos,
            FieldId::AceiteContato,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        FieldId::all().iter().copied().find(|f| f.code() == code)
    }
}

// ============================================================================
// Valores
// ============================================================================

/// Valor de um campo: texto livre ou marcação booleana. Campo ausente do
/// mapa de valores significa "não preenchido".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(t) => Some(t),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trip() {
        for field in FieldId::all() {
            assert_eq!(FieldId::from_code(field.code()), Some(*field));
        }
        assert_eq!(FieldId::from_code("inexistente"), None);
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<_> = FieldId::all()
            .iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(optional, vec![&FieldId::Complemento, &FieldId::OutraArea]);
    }

    #[test]
    fn test_every_field_has_a_section() {
        for section in Section::all() {
            assert!(FieldId::all().iter().any(|f| f.section() == *section));
        }
    }
}
