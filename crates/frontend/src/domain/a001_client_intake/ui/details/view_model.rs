//! ViewModel da tela de cadastro: orquestra validação com debounce,
//! rascunho automático, consulta de CEP e envio final.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use contracts::domain::a001_client_intake::fields::{FieldId, FieldValue, Section};
use contracts::domain::a001_client_intake::profile::SubmitRegistrationRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::domain::a001_client_intake::cep as cep_api;
use crate::domain::a001_client_intake::form::engine::LookupApplied;
use crate::domain::a001_client_intake::form::{storage, suggestions, IntakeForm};
use crate::shared::debounce::Debouncer;

/// Pausa de digitação antes de validar um campo.
const VALIDATION_DEBOUNCE_MS: i32 = 300;
/// Período de inatividade antes de gravar o rascunho.
const AUTOSAVE_QUIET_MS: i32 = 2_000;
/// Tamanho do CEP completo, só dígitos.
const CEP_DIGITS: usize = 8;

/// ViewModel do formulário de cadastro. Uma instância por tela, criada pela
/// casca de renderização; nada aqui é singleton.
#[derive(Clone)]
pub struct IntakeDetailsViewModel {
    pub form: RwSignal<IntakeForm>,
    pub suggestions: RwSignal<Vec<&'static str>>,
    pub submit_error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    client_id: String,
    // Um timer por campo para o debounce de validação e um compartilhado
    // para o rascunho automático.
    field_timers: Rc<RefCell<HashMap<FieldId, Debouncer>>>,
    autosave_timer: Rc<RefCell<Debouncer>>,
}

impl IntakeDetailsViewModel {
    /// Cria o view model da tela, hidratando do rascunho salvo quando houver.
    pub fn new(profile_id: Option<String>) -> Self {
        let client_id = profile_id.unwrap_or_else(storage::session_client_id);
        let form = match storage::load_draft(&client_id) {
            Some(snapshot) => IntakeForm::hydrate(snapshot),
            None => IntakeForm::new(),
        };
        Self {
            form: RwSignal::new(form),
            suggestions: RwSignal::new(Vec::new()),
            submit_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            client_id,
            field_timers: Rc::new(RefCell::new(HashMap::new())),
            autosave_timer: Rc::new(RefCell::new(Debouncer::new())),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Ponto de entrada único para digitação e seleção.
    pub fn on_field_input(&self, field: FieldId, value: FieldValue) {
        if field == FieldId::Profissao {
            let query = value.as_text().unwrap_or("");
            self.suggestions.set(suggestions::suggest(query));
        }

        self.form.update(|f| f.set_value(field, value));

        // Só o último valor de uma rajada de digitação é validado.
        let form = self.form;
        self.field_timers
            .borrow_mut()
            .entry(field)
            .or_default()
            .schedule(VALIDATION_DEBOUNCE_MS, move || {
                form.update(|f| f.validate_field(field, Utc::now().date_naive()));
            });

        self.schedule_autosave();

        if field == FieldId::Cep {
            self.maybe_lookup_cep();
        }
    }

    pub fn completion_percent(&self) -> u8 {
        self.form.with(|f| f.completion_percent())
    }

    pub fn is_section_complete(&self, section: Section) -> bool {
        self.form.with(|f| f.is_section_complete(section))
    }

    // -- rascunho ------------------------------------------------------------

    fn schedule_autosave(&self) {
        let this = self.clone();
        self.autosave_timer
            .borrow_mut()
            .schedule(AUTOSAVE_QUIET_MS, move || this.save_draft_now());
    }

    /// Grava imediatamente o rascunho pendente, se houver.
    pub fn save_draft_now(&self) {
        let snapshot = self
            .form
            .try_update(|f| f.take_snapshot(Utc::now()))
            .flatten();
        let Some(snapshot) = snapshot else {
            return;
        };
        match storage::save_draft(&self.client_id, &snapshot) {
            Ok(()) => {
                self.form.update(|f| f.mark_saved(snapshot.timestamp));
                log::debug!(
                    "rascunho salvo ({} campos alterados)",
                    snapshot.changed_fields.len()
                );
            }
            // Falha de gravação não bloqueia a edição; a próxima alteração
            // agenda uma nova tentativa.
            Err(e) => log::warn!("salvamento do rascunho falhou: {}", e),
        }
    }

    // -- CEP -----------------------------------------------------------------

    /// Dispara a consulta quando o CEP atinge os 8 dígitos, guardando o
    /// código consultado como token; a resposta só é aplicada se o campo
    /// ainda tiver o mesmo valor.
    fn maybe_lookup_cep(&self) {
        let requested: String = self.form.with_untracked(|f| {
            f.text(FieldId::Cep)
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect()
        });
        if requested.len() != CEP_DIGITS {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            let outcome = cep_api::lookup(&requested).await;
            let applied = this
                .form
                .try_update(|f| f.apply_cep_lookup(&requested, outcome));
            match applied {
                Some(LookupApplied::Applied) => {
                    // O endereço enriquecido também entra no rascunho.
                    this.schedule_autosave();
                }
                _ => log::debug!("resposta de CEP descartada: campo mudou durante a consulta"),
            }
        });
    }

    // -- perfil --------------------------------------------------------------

    /// Pré-preenche os campos de identificação a partir de um perfil já
    /// existente. Só preenche o que ainda está vazio, para não sobrescrever
    /// um rascunho mais novo.
    pub fn prefill_from_profile(&self, id: Option<String>, email: Option<String>) {
        let this = self.clone();
        spawn_local(async move {
            let fetched = match (id, email) {
                (Some(id), _) => model::fetch_profile(&id).await,
                (None, Some(email)) => model::fetch_profile_by_email(&email).await,
                (None, None) => return,
            };
            let profile = match fetched {
                Ok(profile) => profile,
                Err(e) => {
                    log::warn!("pré-preenchimento indisponível: {}", e);
                    return;
                }
            };
            let today = Utc::now().date_naive();
            this.form.update(|f| {
                let pairs = [
                    (FieldId::Nome, profile.nome),
                    (FieldId::Email, profile.email),
                    (FieldId::Telefone, profile.telefone),
                    (FieldId::DataNascimento, profile.data_nascimento),
                    (FieldId::Genero, profile.genero),
                ];
                for (field, incoming) in pairs {
                    let Some(incoming) = incoming else { continue };
                    if incoming.trim().is_empty() || !f.text(field).trim().is_empty() {
                        continue;
                    }
                    f.set_text(field, incoming);
                    f.validate_field(field, today);
                }
            });
            this.schedule_autosave();
        });
    }

    // -- envio ---------------------------------------------------------------

    /// Envio final. Toda validação roda antes de qualquer chamada de rede;
    /// em falha do serviço o formulário fica intacto e o rascunho volta a
    /// ser agendado para não perder trabalho.
    pub fn submit_command(&self, on_submitted: Rc<dyn Fn()>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            if this.submitting.get_untracked() {
                return;
            }
            let all_valid = this
                .form
                .try_update(|f| f.validate_all(Utc::now().date_naive()))
                .unwrap_or(false);
            if !all_valid {
                this.submit_error.set(Some(
                    "Corrija os campos destacados antes de enviar.".to_string(),
                ));
                return;
            }
            this.submit_error.set(None);
            this.submitting.set(true);

            let dto = SubmitRegistrationRequest {
                id: this.client_id.clone(),
                fields: this.form.with_untracked(|f| f.values().clone()),
            };
            let on_submitted_cb = on_submitted.clone();
            spawn_local(async move {
                match model::submit_registration(dto).await {
                    Ok(_) => {
                        storage::delete_draft(&this.client_id);
                        this.form.update(|f| f.reset());
                        this.suggestions.set(Vec::new());
                        on_submitted_cb();
                    }
                    Err(e) => {
                        this.submit_error.set(Some(e));
                        this.schedule_autosave();
                    }
                }
                this.submitting.set(false);
            });
        }
    }

    /// Descarta o formulário e o rascunho salvo (ação explícita do usuário).
    pub fn reset(&self) {
        self.field_timers.borrow_mut().clear();
        self.autosave_timer.borrow_mut().cancel();
        storage::delete_draft(&self.client_id);
        self.form.update(|f| f.reset());
        self.suggestions.set(Vec::new());
        self.submit_error.set(None);
    }
}
