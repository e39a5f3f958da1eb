use serde::{Deserialize, Serialize};

/// Áreas de orientação oferecidas para agendamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaOrientacao {
    Psicologica,
    Juridica,
    Financeira,
    Carreira,
    Nutricional,
}

impl AreaOrientacao {
    pub fn code(&self) -> &'static str {
        match self {
            AreaOrientacao::Psicologica => "psicologica",
            AreaOrientacao::Juridica => "juridica",
            AreaOrientacao::Financeira => "financeira",
            AreaOrientacao::Carreira => "carreira",
            AreaOrientacao::Nutricional => "nutricional",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AreaOrientacao::Psicologica => "Orientação psicológica",
            AreaOrientacao::Juridica => "Orientação jurídica",
            AreaOrientacao::Financeira => "Orientação financeira",
            AreaOrientacao::Carreira => "Orientação de carreira",
            AreaOrientacao::Nutricional => "Orientação nutricional",
        }
    }

    pub fn all() -> Vec<AreaOrientacao> {
        vec![
            AreaOrientacao::Psicologica,
            AreaOrientacao::Juridica,
            AreaOrientacao::Financeira,
            AreaOrientacao::Carreira,
            AreaOrientacao::Nutricional,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.code() == code)
    }
}
