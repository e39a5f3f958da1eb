pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Inicializa log no console e relatório de panics; a casca de renderização
/// chama uma vez na carga da página.
#[wasm_bindgen]
pub fn init() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
