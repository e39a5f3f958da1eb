use serde::{Deserialize, Serialize};

/// Faixas de renda mensal usadas na seção de dados pessoais
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaixaSalarial {
    Ate1500,
    De1500Ate3000,
    De3000Ate6000,
    De6000Ate10000,
    Acima10000,
    PrefiroNaoInformar,
}

impl FaixaSalarial {
    pub fn code(&self) -> &'static str {
        match self {
            FaixaSalarial::Ate1500 => "ate_1500",
            FaixaSalarial::De1500Ate3000 => "de_1500_ate_3000",
            FaixaSalarial::De3000Ate6000 => "de_3000_ate_6000",
            FaixaSalarial::De6000Ate10000 => "de_6000_ate_10000",
            FaixaSalarial::Acima10000 => "acima_10000",
            FaixaSalarial::PrefiroNaoInformar => "prefiro_nao_informar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FaixaSalarial::Ate1500 => "Até R$ 1.500",
            FaixaSalarial::De1500Ate3000 => "De R$ 1.500 a R$ 3.000",
            FaixaSalarial::De3000Ate6000 => "De R$ 3.000 a R$ 6.000",
            FaixaSalarial::De6000Ate10000 => "De R$ 6.000 a R$ 10.000",
            FaixaSalarial::Acima10000 => "Acima de R$ 10.000",
            FaixaSalarial::PrefiroNaoInformar => "Prefiro não informar",
        }
    }

    pub fn all() -> Vec<FaixaSalarial> {
        vec![
            FaixaSalarial::Ate1500,
            FaixaSalarial::De1500Ate3000,
            FaixaSalarial::De3000Ate6000,
            FaixaSalarial::De6000Ate10000,
            FaixaSalarial::Acima10000,
            FaixaSalarial::PrefiroNaoInformar,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.code() == code)
    }
}
