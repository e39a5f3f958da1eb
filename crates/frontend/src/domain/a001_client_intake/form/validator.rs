//! Regras de validação por campo. Funções puras; a validação de endereço
//! por CEP acontece no adaptador de consulta, não aqui.

use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_client_intake::fields::{FieldId, FieldValue};
use contracts::enums::{AreaOrientacao, ComoConheceu, FaixaSalarial, Genero};
use once_cell::sync::Lazy;
use regex::Regex;

use super::cpf;

pub const MSG_REQUIRED: &str = "Campo obrigatório";
pub const MSG_SELECT: &str = "Selecione uma opção";
pub const MSG_FLAG_UNSET: &str = "É necessário responder para continuar";

// Letras (com diacríticos) e espaços; nada de dígitos ou pontuação.
static NOME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{M} ]+$").unwrap());
// DDD de dois dígitos + número de 8 ou 9 dígitos, pontuação opcional.
static TELEFONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?[1-9][0-9]\)? ?(?:9[0-9]{4}|[0-9]{4})-?[0-9]{4}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static CEP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}-?[0-9]{3}$").unwrap());

/// Valida um único campo contra o valor atual. `today` entra como parâmetro
/// para a regra de idade; os chamadores passam a data corrente.
pub fn validate_field(
    field: FieldId,
    value: Option<&FieldValue>,
    today: NaiveDate,
) -> Result<(), String> {
    if field.is_flag() {
        // Campos booleanos: basta estarem respondidos.
        return match value {
            Some(FieldValue::Flag(_)) => Ok(()),
            _ => Err(MSG_FLAG_UNSET.to_string()),
        };
    }

    let text = match value {
        Some(FieldValue::Text(t)) => t.trim(),
        _ => "",
    };
    // Vazio em obrigatório sempre reporta "obrigatório", nunca erro de formato.
    if text.is_empty() {
        return if field.is_required() {
            Err(MSG_REQUIRED.to_string())
        } else {
            Ok(())
        };
    }
    validate_text(field, text, today)
}

fn validate_text(field: FieldId, text: &str, today: NaiveDate) -> Result<(), String> {
    match field {
        FieldId::Nome => {
            if !NOME_RE.is_match(text) {
                return Err("O nome deve conter apenas letras".to_string());
            }
            if text.chars().count() < 3 {
                return Err("Informe o nome completo".to_string());
            }
            Ok(())
        }
        FieldId::Cpf => {
            if cpf::is_valid(text) {
                Ok(())
            } else {
                Err("CPF inválido".to_string())
            }
        }
        FieldId::Telefone => {
            if TELEFONE_RE.is_match(text) {
                Ok(())
            } else {
                Err("Telefone inválido. Use o formato (11) 91234-5678".to_string())
            }
        }
        FieldId::Email => {
            if EMAIL_RE.is_match(text) {
                Ok(())
            } else {
                Err("E-mail inválido".to_string())
            }
        }
        FieldId::DataNascimento => validate_birth_date(text, today),
        FieldId::Cep => {
            if CEP_RE.is_match(text) {
                Ok(())
            } else {
                Err("CEP inválido. Use o formato 01310-100".to_string())
            }
        }
        FieldId::Genero => check_option(Genero::from_code(text)),
        FieldId::FaixaSalarial => check_option(FaixaSalarial::from_code(text)),
        FieldId::AreaOrientacao => check_option(AreaOrientacao::from_code(text)),
        FieldId::ComoConheceu => check_option(ComoConheceu::from_code(text)),
        // Texto obrigatório simples; logradouro/bairro/cidade/UF chegam
        // preenchidos pelo serviço de CEP.
        FieldId::Profissao
        | FieldId::Logradouro
        | FieldId::Bairro
        | FieldId::Cidade
        | FieldId::Uf
        | FieldId::Complemento
        | FieldId::OutraArea => Ok(()),
        // Tratados antes de chegar aqui.
        FieldId::AceiteTermos | FieldId::AceiteContato => Ok(()),
    }
}

fn check_option<T>(parsed: Option<T>) -> Result<(), String> {
    match parsed {
        Some(_) => Ok(()),
        None => Err(MSG_SELECT.to_string()),
    }
}

fn validate_birth_date(text: &str, today: NaiveDate) -> Result<(), String> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| "Data de nascimento inválida".to_string())?;
    if date > today {
        return Err("Data de nascimento não pode estar no futuro".to_string());
    }
    // Idade em anos completos, descontando mês/dia ainda não alcançados.
    let mut age = today.year() - date.year();
    if (today.month(), today.day()) < (date.month(), date.day()) {
        age -= 1;
    }
    if !(16..=120).contains(&age) {
        return Err("A idade deve estar entre 16 e 120 anos".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(value.to_string()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn check(field: FieldId, value: &str) -> Result<(), String> {
        validate_field(field, text(value).as_ref(), today())
    }

    #[test]
    fn test_empty_required_reports_required_not_format() {
        for field in [FieldId::Nome, FieldId::Cpf, FieldId::Email, FieldId::Cep] {
            assert_eq!(check(field, "   "), Err(MSG_REQUIRED.to_string()));
        }
    }

    #[test]
    fn test_empty_optional_is_ok() {
        assert_eq!(check(FieldId::Complemento, ""), Ok(()));
        assert_eq!(check(FieldId::OutraArea, ""), Ok(()));
    }

    #[test]
    fn test_nome() {
        assert!(check(FieldId::Nome, "Ana Souza").is_ok());
        assert!(check(FieldId::Nome, "José Antônio da Conceição").is_ok());
        assert!(check(FieldId::Nome, "Jo").is_err());
        assert!(check(FieldId::Nome, "Ana 2").is_err());
        assert!(check(FieldId::Nome, "ana@souza").is_err());
    }

    #[test]
    fn test_telefone() {
        assert!(check(FieldId::Telefone, "(11) 91234-5678").is_ok());
        assert!(check(FieldId::Telefone, "11912345678").is_ok());
        assert!(check(FieldId::Telefone, "(21) 3456-7890").is_ok());
        assert!(check(FieldId::Telefone, "1134567890").is_ok());
        // 7 dígitos após o DDD
        assert!(check(FieldId::Telefone, "(11) 1234-567").is_err());
        assert!(check(FieldId::Telefone, "telefone").is_err());
    }

    #[test]
    fn test_email() {
        assert!(check(FieldId::Email, "ana@exemplo.com.br").is_ok());
        assert!(check(FieldId::Email, "ana@exemplo").is_err());
        assert!(check(FieldId::Email, "ana exemplo.com").is_err());
    }

    #[test]
    fn test_cep_format() {
        assert!(check(FieldId::Cep, "01310-100").is_ok());
        assert!(check(FieldId::Cep, "01310100").is_ok());
        assert!(check(FieldId::Cep, "0131-100").is_err());
        assert!(check(FieldId::Cep, "01310-10a").is_err());
    }

    #[test]
    fn test_birth_date_age_range() {
        // Exatamente 16 anos hoje
        assert!(check(FieldId::DataNascimento, "2010-08-07").is_ok());
        // Um dia a menos que 16 anos
        assert_eq!(
            check(FieldId::DataNascimento, "2010-08-08"),
            Err("A idade deve estar entre 16 e 120 anos".to_string())
        );
        assert!(check(FieldId::DataNascimento, "1910-01-01").is_ok());
        // Mais de 120 anos
        assert!(check(FieldId::DataNascimento, "1905-01-01").is_err());
    }

    #[test]
    fn test_birth_date_future_and_garbage() {
        assert_eq!(
            check(FieldId::DataNascimento, "2027-01-01"),
            Err("Data de nascimento não pode estar no futuro".to_string())
        );
        assert!(check(FieldId::DataNascimento, "07/08/1990").is_err());
    }

    #[test]
    fn test_enum_fields() {
        assert!(check(FieldId::Genero, "feminino").is_ok());
        assert!(check(FieldId::Genero, "qualquer").is_err());
        assert!(check(FieldId::FaixaSalarial, "ate_1500").is_ok());
        assert!(check(FieldId::AreaOrientacao, "juridica").is_ok());
        assert!(check(FieldId::ComoConheceu, "indicacao").is_ok());
    }

    #[test]
    fn test_flags_must_be_set() {
        assert_eq!(
            validate_field(FieldId::AceiteTermos, None, today()),
            Err(MSG_FLAG_UNSET.to_string())
        );
        assert!(validate_field(
            FieldId::AceiteTermos,
            Some(&FieldValue::Flag(true)),
            today()
        )
        .is_ok());
        // "false" também é resposta
        assert!(validate_field(
            FieldId::AceiteContato,
            Some(&FieldValue::Flag(false)),
            today()
        )
        .is_ok());
    }
}
