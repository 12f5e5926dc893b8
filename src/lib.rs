// ============================================================================
// RUTAS FRONTEND - Mejoras de página + widgets de mapa (RUST PURO + WASM)
// ============================================================================
// Dos módulos independientes consumidos por las plantillas del servidor:
// - page_assist: autofoco, confirmación antes de acciones, banner de éxito
// - maps: selector de ubicación editable y mapa público de negocios (Leaflet)
// Ningún módulo depende del otro; ambos degradan a no-op si falta el DOM
// esperado o la librería de mapas.
// ============================================================================

pub mod config;
pub mod dom;
pub mod maps;
pub mod models;
pub mod page_assist;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Rutas frontend cargado");

    Ok(())
}

/// Registra las mejoras de usabilidad sobre el elemento raíz dado.
/// La plantilla anfitriona lo invoca UNA VEZ por carga de página; el listener
/// delegado de confirmación queda vivo durante toda la vida de la página.
#[wasm_bindgen(js_name = initPageAssist)]
pub fn init_page_assist(root: &web_sys::Element) {
    page_assist::init(root);
}

/// Inicializa el selector de ubicación editable (formulario de negocio).
/// `options` es el objeto de configuración que incrusta la plantilla.
#[wasm_bindgen(js_name = initPickerMap)]
pub fn init_picker_map(options: JsValue) {
    maps::picker::init(options);
}

/// Inicializa el mapa público de negocios con popups.
#[wasm_bindgen(js_name = initPublicMap)]
pub fn init_public_map(options: JsValue) {
    maps::public::init(options);
}
