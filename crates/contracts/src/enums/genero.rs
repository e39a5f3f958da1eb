use serde::{Deserialize, Serialize};

/// Opções de gênero do cadastro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genero {
    Feminino,
    Masculino,
    NaoBinario,
    PrefiroNaoInformar,
}

impl Genero {
    pub fn code(&self) -> &'static str {
        match self {
            Genero::Feminino => "feminino",
            Genero::Masculino => "masculino",
            Genero::NaoBinario => "nao_binario",
            Genero::PrefiroNaoInformar => "prefiro_nao_informar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Genero::Feminino => "Feminino",
            Genero::Masculino => "Masculino",
            Genero::NaoBinario => "Não binário",
            Genero::PrefiroNaoInformar => "Prefiro não informar",
        }
    }

    pub fn all() -> Vec<Genero> {
        vec![
            Genero::Feminino,
            Genero::Masculino,
            Genero::NaoBinario,
            Genero::PrefiroNaoInformar,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|g| g.code() == code)
    }
}
