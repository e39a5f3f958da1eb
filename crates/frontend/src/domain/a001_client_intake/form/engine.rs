//! Estado do formulário de cadastro e suas transições.

use std::collections::{BTreeSet, HashMap};
use std::mem;

use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a001_client_intake::cep::CepLookupResult;
use contracts::domain::a001_client_intake::fields::{FieldId, FieldValue, Section};
use contracts::domain::a001_client_intake::snapshot::DraftSnapshot;

use super::validator;

/// Situação de validação de um campo. `Default` cobre campo nunca validado
/// ou esvaziado; só muda por uma execução explícita de validação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Default,
    Valid,
    Invalid,
}

/// Desfecho da aplicação de uma resposta de CEP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupApplied {
    Applied,
    /// O campo mudou depois que a consulta partiu; resposta descartada.
    Stale,
}

/// Estado do formulário. Uma instância por tela de cadastro: criada vazia ou
/// hidratada de um rascunho e destruída no envio final ou no descarte.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    values: HashMap<FieldId, FieldValue>,
    status: HashMap<FieldId, FieldStatus>,
    errors: HashMap<FieldId, String>,
    dirty: BTreeSet<FieldId>,
    last_saved_at: Option<DateTime<Utc>>,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restaura os valores de um rascunho. Situações de validação voltam a
    /// `Default`: rascunho salvo não é prova de valor válido.
    pub fn hydrate(snapshot: DraftSnapshot) -> Self {
        Self {
            values: snapshot.data,
            ..Self::default()
        }
    }

    // -- leitura -------------------------------------------------------------

    pub fn values(&self) -> &HashMap<FieldId, FieldValue> {
        &self.values
    }

    pub fn value(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: FieldId) -> &str {
        match self.values.get(&field) {
            Some(FieldValue::Text(t)) => t,
            _ => "",
        }
    }

    pub fn flag(&self, field: FieldId) -> Option<bool> {
        match self.values.get(&field) {
            Some(FieldValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn status(&self, field: FieldId) -> FieldStatus {
        self.status.get(&field).copied().unwrap_or_default()
    }

    /// Mensagem de erro do campo; vazia exatamente quando o campo não está
    /// `Invalid`.
    pub fn error(&self, field: FieldId) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    pub fn has_unsaved_changes(&self) -> bool {
        !self.dirty.is_empty()
    }

    // -- escrita -------------------------------------------------------------

    /// Ponto único de mutação por edição do usuário. Campo de texto esvaziado
    /// volta a `Default` até a próxima validação.
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) {
        let emptied = matches!(&value, FieldValue::Text(t) if t.trim().is_empty());
        self.values.insert(field, value);
        self.dirty.insert(field);
        if emptied {
            self.status.remove(&field);
            self.errors.remove(&field);
        }
    }

    pub fn set_text(&mut self, field: FieldId, text: impl Into<String>) {
        self.set_value(field, FieldValue::Text(text.into()));
    }

    pub fn set_flag(&mut self, field: FieldId, value: bool) {
        self.set_value(field, FieldValue::Flag(value));
    }

    /// Valida um campo e grava situação e mensagem na mesma operação; nenhum
    /// outro campo é tocado.
    pub fn validate_field(&mut self, field: FieldId, today: NaiveDate) {
        match validator::validate_field(field, self.values.get(&field), today) {
            Ok(()) => {
                if self.is_filled(field) {
                    self.status.insert(field, FieldStatus::Valid);
                } else {
                    // Opcional vazio permanece intocado
                    self.status.remove(&field);
                }
                self.errors.remove(&field);
            }
            Err(message) => {
                self.status.insert(field, FieldStatus::Invalid);
                self.errors.insert(field, message);
            }
        }
    }

    /// Valida o formulário inteiro (porteiro do envio final). Retorna `true`
    /// quando nenhum campo ficou `Invalid`.
    pub fn validate_all(&mut self, today: NaiveDate) -> bool {
        for field in FieldId::all() {
            self.validate_field(*field, today);
        }
        FieldId::all()
            .iter()
            .all(|f| self.status(*f) != FieldStatus::Invalid)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // -- rascunho ------------------------------------------------------------

    /// Monta o rascunho a persistir e esvazia o conjunto de campos alterados
    /// na mesma operação: edições feitas durante uma gravação em andamento
    /// caem no próximo conjunto, nunca se perdem. `None` sem alterações.
    pub fn take_snapshot(&mut self, now: DateTime<Utc>) -> Option<DraftSnapshot> {
        if self.dirty.is_empty() {
            return None;
        }
        let changed_fields = mem::take(&mut self.dirty);
        Some(DraftSnapshot {
            data: self.values.clone(),
            changed_fields,
            timestamp: now,
        })
    }

    /// Registra o instante da última gravação bem-sucedida.
    pub fn mark_saved(&mut self, at: DateTime<Utc>) {
        self.last_saved_at = Some(at);
    }

    // -- CEP -----------------------------------------------------------------

    /// Aplica a resposta do serviço de CEP somente se `requested` ainda for o
    /// valor atual do campo; resposta de consulta antiga é descartada sem
    /// tocar o estado.
    pub fn apply_cep_lookup(
        &mut self,
        requested: &str,
        outcome: CepLookupResult,
    ) -> LookupApplied {
        if digits(requested) != digits(self.text(FieldId::Cep)) {
            return LookupApplied::Stale;
        }
        match outcome {
            CepLookupResult::Found(address) => {
                self.set_enriched(FieldId::Logradouro, address.logradouro);
                self.set_enriched(FieldId::Bairro, address.bairro);
                self.set_enriched(FieldId::Cidade, address.cidade);
                self.set_enriched(FieldId::Uf, address.uf);
                self.status.insert(FieldId::Cep, FieldStatus::Valid);
                self.errors.remove(&FieldId::Cep);
            }
            CepLookupResult::NotFound => {
                self.status.insert(FieldId::Cep, FieldStatus::Invalid);
                self.errors
                    .insert(FieldId::Cep, "CEP não encontrado".to_string());
            }
            CepLookupResult::Failed(_) => {
                self.status.insert(FieldId::Cep, FieldStatus::Invalid);
                self.errors.insert(
                    FieldId::Cep,
                    "Não foi possível consultar o CEP. Tente novamente.".to_string(),
                );
            }
        }
        LookupApplied::Applied
    }

    /// Campo preenchido pelo serviço de CEP dispensa validação própria.
    /// CEPs genéricos podem vir sem logradouro/bairro; campo vazio fica como
    /// está para o usuário completar.
    fn set_enriched(&mut self, field: FieldId, value: String) {
        if value.trim().is_empty() {
            return;
        }
        self.values.insert(field, FieldValue::Text(value));
        self.dirty.insert(field);
        self.status.insert(field, FieldStatus::Valid);
        self.errors.remove(&field);
    }

    // -- progresso -----------------------------------------------------------

    fn is_filled(&self, field: FieldId) -> bool {
        match self.values.get(&field) {
            Some(FieldValue::Text(t)) => !t.trim().is_empty(),
            Some(FieldValue::Flag(_)) => true,
            None => false,
        }
    }

    /// Percentual de preenchimento sobre os campos obrigatórios, arredondado.
    /// Os dois campos opcionais ficam fora do numerador e do denominador.
    pub fn completion_percent(&self) -> u8 {
        let required: Vec<FieldId> = FieldId::all()
            .iter()
            .copied()
            .filter(FieldId::is_required)
            .collect();
        let filled = required.iter().filter(|f| self.is_filled(**f)).count();
        ((filled as f64 / required.len() as f64) * 100.0).round() as u8
    }

    /// Seção completa: todos os obrigatórios dela preenchidos E `Valid`.
    /// Campo preenchido com erro pendente mantém a seção incompleta.
    pub fn is_section_complete(&self, section: Section) -> bool {
        FieldId::all()
            .iter()
            .copied()
            .filter(|f| f.section() == section && f.is_required())
            .all(|f| self.is_filled(f) && self.status(f) == FieldStatus::Valid)
    }
}

fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client_intake::cep::CepAddress;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn address(cep: &str) -> CepAddress {
        CepAddress {
            cep: cep.to_string(),
            logradouro: "Avenida Paulista".to_string(),
            bairro: "Bela Vista".to_string(),
            cidade: "São Paulo".to_string(),
            uf: "SP".to_string(),
        }
    }

    #[test]
    fn test_validate_updates_status_and_error_together() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Email, "ana@exemplo");
        form.validate_field(FieldId::Email, today());
        assert_eq!(form.status(FieldId::Email), FieldStatus::Invalid);
        assert!(!form.error(FieldId::Email).is_empty());

        form.set_text(FieldId::Email, "ana@exemplo.com");
        form.validate_field(FieldId::Email, today());
        assert_eq!(form.status(FieldId::Email), FieldStatus::Valid);
        assert!(form.error(FieldId::Email).is_empty());
    }

    #[test]
    fn test_emptied_field_returns_to_default() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Email, "ana@exemplo");
        form.validate_field(FieldId::Email, today());
        assert_eq!(form.status(FieldId::Email), FieldStatus::Invalid);

        form.set_text(FieldId::Email, "");
        assert_eq!(form.status(FieldId::Email), FieldStatus::Default);
        assert!(form.error(FieldId::Email).is_empty());
    }

    #[test]
    fn test_one_snapshot_covers_a_burst_of_edits() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Nome, "Ana Souza");
        form.set_text(FieldId::Email, "ana@exemplo.com");

        let snapshot = form.take_snapshot(Utc::now()).unwrap();
        assert!(snapshot.changed_fields.contains(&FieldId::Nome));
        assert!(snapshot.changed_fields.contains(&FieldId::Email));
        assert_eq!(snapshot.data.len(), 2);
        assert!(!form.has_unsaved_changes());

        // Sem novas edições não há nada a gravar
        assert!(form.take_snapshot(Utc::now()).is_none());
    }

    #[test]
    fn test_edits_after_snapshot_belong_to_next_set() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Nome, "Ana");
        let first = form.take_snapshot(Utc::now()).unwrap();
        assert!(first.changed_fields.contains(&FieldId::Nome));

        // Edição "durante a gravação"
        form.set_text(FieldId::Cidade, "Santos");
        let second = form.take_snapshot(Utc::now()).unwrap();
        assert!(second.changed_fields.contains(&FieldId::Cidade));
        assert!(!second.changed_fields.contains(&FieldId::Nome));
        // O estado completo continua indo inteiro
        assert_eq!(second.data.len(), 2);
    }

    #[test]
    fn test_cep_found_marks_address_fields_valid() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Cep, "01310-100");
        let applied =
            form.apply_cep_lookup("01310100", CepLookupResult::Found(address("01310-100")));
        assert_eq!(applied, LookupApplied::Applied);
        assert_eq!(form.text(FieldId::Logradouro), "Avenida Paulista");
        assert_eq!(form.status(FieldId::Logradouro), FieldStatus::Valid);
        assert_eq!(form.status(FieldId::Cidade), FieldStatus::Valid);
        assert_eq!(form.status(FieldId::Uf), FieldStatus::Valid);
        assert_eq!(form.status(FieldId::Cep), FieldStatus::Valid);
    }

    #[test]
    fn test_cep_not_found_touches_only_cep_field() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Cep, "99999-999");
        form.apply_cep_lookup("99999999", CepLookupResult::NotFound);
        assert_eq!(form.status(FieldId::Cep), FieldStatus::Invalid);
        assert_eq!(form.error(FieldId::Cep), "CEP não encontrado");
        assert_eq!(form.text(FieldId::Logradouro), "");
        assert_eq!(form.status(FieldId::Logradouro), FieldStatus::Default);
    }

    #[test]
    fn test_stale_lookup_response_is_discarded() {
        let mut form = IntakeForm::new();
        // Consulta A parte; usuário troca para B antes da resposta
        form.set_text(FieldId::Cep, "01310-100");
        form.set_text(FieldId::Cep, "20040-020");

        // Resposta de B chega primeiro e é aplicada
        let b = CepAddress {
            logradouro: "Rua da Assembleia".to_string(),
            bairro: "Centro".to_string(),
            cidade: "Rio de Janeiro".to_string(),
            uf: "RJ".to_string(),
            cep: "20040-020".to_string(),
        };
        assert_eq!(
            form.apply_cep_lookup("20040020", CepLookupResult::Found(b)),
            LookupApplied::Applied
        );

        // Resposta atrasada de A é descartada
        assert_eq!(
            form.apply_cep_lookup("01310100", CepLookupResult::Found(address("01310-100"))),
            LookupApplied::Stale
        );
        assert_eq!(form.text(FieldId::Cidade), "Rio de Janeiro");
        assert_eq!(form.text(FieldId::Uf), "RJ");
    }

    #[test]
    fn test_completion_percent_is_monotonic_and_ignores_optionals() {
        let mut form = IntakeForm::new();
        let start = form.completion_percent();
        assert_eq!(start, 0);

        form.set_text(FieldId::Nome, "Ana Souza");
        let after_one = form.completion_percent();
        assert!(after_one > start);

        // Campos opcionais não mexem no percentual
        form.set_text(FieldId::Complemento, "Apto 12");
        form.set_text(FieldId::OutraArea, "Orientação esportiva");
        assert_eq!(form.completion_percent(), after_one);

        form.set_flag(FieldId::AceiteTermos, true);
        assert!(form.completion_percent() > after_one);
    }

    #[test]
    fn test_section_complete_requires_valid_not_just_filled() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Cep, "01310-100");
        form.apply_cep_lookup("01310100", CepLookupResult::Found(address("01310-100")));
        // Logradouro, bairro, cidade e UF válidos; CEP válido. Seção completa.
        assert!(form.is_section_complete(Section::Endereco));

        // Preenchido mas inválido derruba a seção
        form.set_text(FieldId::Cidade, "São Paulo");
        form.status.insert(FieldId::Cidade, FieldStatus::Invalid);
        form.errors
            .insert(FieldId::Cidade, "erro qualquer".to_string());
        assert!(!form.is_section_complete(Section::Endereco));
    }

    #[test]
    fn test_validate_all_gates_submission() {
        let mut form = IntakeForm::new();
        assert!(!form.validate_all(today()));
        assert_eq!(form.status(FieldId::Nome), FieldStatus::Invalid);
        assert_eq!(form.error(FieldId::Nome), validator::MSG_REQUIRED);
    }

    #[test]
    fn test_hydrate_restores_values_without_status() {
        let mut form = IntakeForm::new();
        form.set_text(FieldId::Nome, "Ana Souza");
        form.set_flag(FieldId::AceiteTermos, true);
        let snapshot = form.take_snapshot(Utc::now()).unwrap();

        let restored = IntakeForm::hydrate(snapshot);
        assert_eq!(restored.text(FieldId::Nome), "Ana Souza");
        assert_eq!(restored.flag(FieldId::AceiteTermos), Some(true));
        assert_eq!(restored.status(FieldId::Nome), FieldStatus::Default);
        assert!(!restored.has_unsaved_changes());
    }
}
