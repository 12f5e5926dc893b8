// ============================================================================
// PAGE ASSIST - Mejoras ligeras de usabilidad para páginas del servidor
// ============================================================================
// Autofoco, confirmación antes de acciones destructivas y auto-ocultado del
// banner de éxito. Todo es best-effort: si falta un elemento o el DOM falla,
// la página sigue funcionando sin la mejora y sin error visible.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::CONFIG;
use crate::dom;
use crate::utils::constants::{
    CONFIRM_ATTR, CONFIRM_SELECTOR, DEFAULT_CONFIRM_PROMPT, FLASH_SUCCESS_ID, HIDDEN_CLASS,
};

/// Aplica las tres mejoras sobre el elemento raíz dado, una vez por página.
pub fn init(root: &Element) {
    focus_first_field(root);

    if let Err(error) = register_confirm_delegate(root) {
        log::warn!("⚠️ No se pudo registrar el delegado de confirmación: {:?}", error);
    }

    schedule_flash_hide();
}

/// Enfoca el primer campo interactivo dentro de un formulario, en orden de
/// documento. Si no hay ninguno, no pasa nada.
fn focus_first_field(root: &Element) {
    let first = root
        .query_selector("form input, form select, form textarea")
        .ok()
        .flatten();

    if let Some(field) = first {
        dom::try_focus(&field);
    }
}

/// Un solo listener delegado de click: si el target (o un ancestro) declara
/// `data-confirm`, se muestra el diálogo bloqueante y, solo si el usuario
/// rechaza, se suprime el click.
fn register_confirm_delegate(root: &Element) -> Result<(), wasm_bindgen::JsValue> {
    dom::on_click(root, move |event: MouseEvent| {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(target) => target,
            None => return,
        };

        let holder = match target.closest(CONFIRM_SELECTOR) {
            Ok(Some(holder)) => holder,
            _ => return,
        };

        let message = holder
            .get_attribute(CONFIRM_ATTR)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIRM_PROMPT.to_string());

        let accepted = dom::window()
            .and_then(|w| w.confirm_with_message(&message).ok())
            .unwrap_or(true);

        if !accepted {
            event.prevent_default();
            event.stop_propagation();
        }
    })
}

/// Programa el ocultado único del banner de éxito. No se programa nada si el
/// banner no existe o ya está oculto. El temporizador no es cancelable y no
/// se reinicia si el contenido cambia después (limitación conocida).
fn schedule_flash_hide() {
    let banner = match dom::get_element_by_id(FLASH_SUCCESS_ID) {
        Some(banner) => banner,
        None => return,
    };

    if dom::has_class(&banner, HIDDEN_CLASS) {
        return;
    }

    Timeout::new(CONFIG.page.flash_hide_ms, move || {
        // Se vuelve a resolver por ID: el nodo pudo haber sido reemplazado
        if let Some(banner) = dom::get_element_by_id(FLASH_SUCCESS_ID) {
            let _ = dom::add_class(&banner, HIDDEN_CLASS);
        }
    })
    .forget();
}
