use serde::{Deserialize, Serialize};

/// Canais de origem do cadastro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComoConheceu {
    Indicacao,
    Instagram,
    Google,
    Facebook,
    Outro,
}

impl ComoConheceu {
    pub fn code(&self) -> &'static str {
        match self {
            ComoConheceu::Indicacao => "indicacao",
            ComoConheceu::Instagram => "instagram",
            ComoConheceu::Google => "google",
            ComoConheceu::Facebook => "facebook",
            ComoConheceu::Outro => "outro",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComoConheceu::Indicacao => "Indicação de conhecidos",
            ComoConheceu::Instagram => "Instagram",
            ComoConheceu::Google => "Pesquisa no Google",
            ComoConheceu::Facebook => "Facebook",
            ComoConheceu::Outro => "Outro",
        }
    }

    pub fn all() -> Vec<ComoConheceu> {
        vec![
            ComoConheceu::Indicacao,
            ComoConheceu::Instagram,
            ComoConheceu::Google,
            ComoConheceu::Facebook,
            ComoConheceu::Outro,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}
