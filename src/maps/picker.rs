// ============================================================================
// PICKER MAP - Selector de ubicación para el formulario de negocio
// ============================================================================
// Un solo marcador arrastrable cuya posición vive sincronizada con los dos
// inputs numéricos del formulario. Click en el mapa o arrastre del marcador
// actualizan campos y re-centran la vista.
// ============================================================================

use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use super::{create_base_map, leaflet, marker_options};
use crate::config::CONFIG;
use crate::dom;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    pub map_id: String,
    /// IDs de los inputs de coordenadas; si faltan, simplemente no se escriben
    #[serde(default)]
    pub lat_input_id: Option<String>,
    #[serde(default)]
    pub lng_input_id: Option<String>,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lng")]
    pub lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_lat() -> f64 {
    CONFIG.map.default_center_lat
}

fn default_lng() -> f64 {
    CONFIG.map.default_center_lng
}

fn default_zoom() -> f64 {
    CONFIG.map.default_zoom
}

pub fn init(options: JsValue) {
    let options: PickerOptions = match serde_wasm_bindgen::from_value(options) {
        Ok(options) => options,
        Err(error) => {
            log::warn!("⚠️ Opciones del selector inválidas: {:?}", error);
            return;
        }
    };

    let map = match create_base_map(&options.map_id, options.lat, options.lng, options.zoom) {
        Some(map) => map,
        None => return,
    };

    let marker = leaflet::new_marker(
        &leaflet::lat_lng(options.lat, options.lng),
        &marker_options(true),
    );
    marker.add_to(&map);

    let lat_input = options.lat_input_id.as_deref().and_then(dom::input_by_id);
    let lng_input = options.lng_input_id.as_deref().and_then(dom::input_by_id);

    // El formulario arranca con un par de coordenadas válido aunque el
    // usuario nunca toque el mapa
    write_fields(&lat_input, &lng_input, options.lat, options.lng);

    // Click en el mapa: mover marcador, escribir campos, re-centrar
    {
        let map_ref = map.clone();
        let marker_ref = marker.clone();
        let lat_ref = lat_input.clone();
        let lng_ref = lng_input.clone();
        let on_map_click = Closure::wrap(Box::new(move |event: leaflet::MapMouseEvent| {
            let position = event.latlng();
            place_marker(
                &map_ref,
                &marker_ref,
                position.lat(),
                position.lng(),
                &lat_ref,
                &lng_ref,
            );
        }) as Box<dyn FnMut(leaflet::MapMouseEvent)>);
        map.on("click", on_map_click.as_ref().unchecked_ref());
        // Nota: closure.forget() mantiene el handler vivo toda la página
        on_map_click.forget();
    }

    // Fin de arrastre: misma actualización que un click, leyendo la posición
    // resultante del marcador
    {
        let map_ref = map.clone();
        let marker_ref = marker.clone();
        let lat_ref = lat_input.clone();
        let lng_ref = lng_input.clone();
        let on_drag_end = Closure::wrap(Box::new(move || {
            let position = marker_ref.get_lat_lng();
            place_marker(
                &map_ref,
                &marker_ref,
                position.lat(),
                position.lng(),
                &lat_ref,
                &lng_ref,
            );
        }) as Box<dyn FnMut()>);
        marker.on("dragend", on_drag_end.as_ref().unchecked_ref());
        on_drag_end.forget();
    }

    log::info!(
        "📍 Selector de ubicación listo en '{}' ({}, {})",
        options.map_id,
        options.lat,
        options.lng
    );
}

fn place_marker(
    map: &leaflet::LeafletMap,
    marker: &leaflet::Marker,
    lat: f64,
    lng: f64,
    lat_input: &Option<HtmlInputElement>,
    lng_input: &Option<HtmlInputElement>,
) {
    marker.set_lat_lng(&leaflet::lat_lng(lat, lng));
    write_fields(lat_input, lng_input, lat, lng);
    map.pan_to(&leaflet::lat_lng(lat, lng));
}

fn write_fields(
    lat_input: &Option<HtmlInputElement>,
    lng_input: &Option<HtmlInputElement>,
    lat: f64,
    lng: f64,
) {
    if let Some(input) = lat_input {
        input.set_value(&format_coord(lat));
    }
    if let Some(input) = lng_input {
        input.set_value(&format_coord(lng));
    }
}

/// Formato fijo de 6 decimales que espera el backend
pub(crate) fn format_coord(value: f64) -> String {
    format!("{:.6}", value)
}
