// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Helper para registrar un click handler en un elemento.
/// Nota: closure.forget() es necesario para mantener el closure vivo en Rust
/// WASM. Este helper se usa para listeners que deben vivir tanto como la
/// página (p.ej. el delegado de confirmación), así que no hay fuga real.
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
