// ============================================================================
// LEAFLET FFI - Foreign Function Interface para la librería de mapas
// ============================================================================
// Solo wrappers sobre el global `L` - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Instancia de mapa (L.Map)
    #[derive(Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &LeafletMap, center: &JsValue) -> LeafletMap;

    /// Ajustar la vista puede fallar con límites degenerados: se captura
    #[wasm_bindgen(method, catch, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, bounds: &LatLngBounds, options: &JsValue)
        -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(latlng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, latlng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = getLatLng)]
    pub fn get_lat_lng(this: &Marker) -> LatLng;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    pub type Polyline;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    pub fn new_polyline(latlngs: &JsValue) -> Polyline;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Polyline, map: &LeafletMap) -> Polyline;

    /// El cálculo de límites puede fallar (trazado degenerado): se captura
    #[wasm_bindgen(method, catch, js_name = getBounds)]
    pub fn get_bounds(this: &Polyline) -> Result<LatLngBounds, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    pub type LatLng;

    #[wasm_bindgen(method, getter, structural)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter, structural)]
    pub fn lng(this: &LatLng) -> f64;
}

#[wasm_bindgen]
extern "C" {
    pub type LatLngBounds;

    #[wasm_bindgen(catch, js_namespace = L, js_name = latLngBounds)]
    pub fn new_lat_lng_bounds(latlngs: &JsValue) -> Result<LatLngBounds, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// Evento de mouse de Leaflet (lleva la coordenada del click)
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter, structural)]
    pub fn latlng(this: &MapMouseEvent) -> LatLng;
}

/// Verificar si el global `L` está disponible. Las plantillas cargan Leaflet
/// desde CDN; si el script no llegó, todos los widgets degradan a no-op.
pub fn available() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("L")).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Par [lat, lng] en el formato posicional que acepta Leaflet
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair.into()
}
