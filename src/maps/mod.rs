// ============================================================================
// MAPS MODULE - Widgets de mapa sobre Leaflet
// ============================================================================
// Dos modos de presentación: selector editable (formularios) y mapa público
// de negocios (listado). Ambos comparten las guardas y el mapa base.
// ============================================================================

pub mod leaflet;
pub mod picker;
pub mod public;

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::CONFIG;
use crate::dom;
use crate::utils::constants::{TILE_ATTRIBUTION, TILE_URL};

#[derive(Serialize)]
struct TileOptions {
    attribution: &'static str,
    #[serde(rename = "maxZoom")]
    max_zoom: f64,
}

#[derive(Serialize)]
struct MarkerOptions {
    draggable: bool,
}

#[derive(Serialize)]
struct FitOptions {
    padding: [f64; 2],
}

pub(crate) fn marker_options(draggable: bool) -> JsValue {
    serde_wasm_bindgen::to_value(&MarkerOptions { draggable }).unwrap_or(JsValue::UNDEFINED)
}

pub(crate) fn fit_options() -> JsValue {
    let padding = CONFIG.map.fit_padding;
    serde_wasm_bindgen::to_value(&FitOptions { padding: [padding, padding] })
        .unwrap_or(JsValue::UNDEFINED)
}

/// Guardas compartidas y mapa base. Si el contenedor no existe o Leaflet no
/// está cargado, no hay mapa y no hay efecto alguno.
pub(crate) fn create_base_map(
    map_id: &str,
    lat: f64,
    lng: f64,
    zoom: f64,
) -> Option<leaflet::LeafletMap> {
    if dom::get_element_by_id(map_id).is_none() {
        log::warn!("🗺️ Contenedor '{}' inexistente, mapa omitido", map_id);
        return None;
    }

    if !leaflet::available() {
        log::warn!("🗺️ Leaflet no está cargado, mapa omitido");
        return None;
    }

    let map = leaflet::new_map(map_id);
    map.set_view(&leaflet::lat_lng(lat, lng), zoom);

    let tile_options = serde_wasm_bindgen::to_value(&TileOptions {
        attribution: TILE_ATTRIBUTION,
        max_zoom: CONFIG.map.tile_max_zoom,
    })
    .unwrap_or(JsValue::UNDEFINED);
    leaflet::tile_layer(TILE_URL, &tile_options).add_to(&map);

    Some(map)
}
