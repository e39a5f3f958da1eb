//! Debounce sobre `window.setTimeout`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Timer cancelável: cada chamada a [`Debouncer::schedule`] descarta o
/// agendamento anterior, então de uma rajada de eventos só a última ação
/// executa. Uma instância por campo, mais uma compartilhada para o
/// salvamento automático.
#[derive(Default)]
pub struct Debouncer {
    timeout_id: Option<i32>,
    // Mantém o callback vivo até disparar ou ser cancelado.
    closure: Option<Closure<dyn Fn()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay_ms: i32, callback: impl Fn() + 'static) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            delay_ms,
        ) {
            Ok(timeout_id) => {
                self.timeout_id = Some(timeout_id);
                self.closure = Some(closure);
            }
            Err(e) => log::error!("setTimeout falhou: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(timeout_id) = self.timeout_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
        // O timeout já foi limpo; descartar o closure aqui é seguro.
        self.closure = None;
    }

    pub fn is_pending(&self) -> bool {
        self.timeout_id.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
