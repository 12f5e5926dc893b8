// ============================================================================
// PUBLIC MAP - Mapa de negocios del listado público
// ============================================================================
// Marcadores estáticos con popup por negocio y, opcionalmente, el trazado de
// la ruta como línea. La vista final depende de cuántos negocios tienen
// coordenadas válidas: ajuste a límites, zoom cercano, o vista inicial.
// ============================================================================

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use super::{create_base_map, fit_options, leaflet, marker_options};
use crate::config::CONFIG;
use crate::models::BusinessMarker;
use crate::views::business_popup;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMapOptions {
    pub map_id: String,
    #[serde(default)]
    pub markers: Vec<BusinessMarker>,
    /// Trazado opcional de la ruta, como pares [lat, lng] ordenados
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
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
    let options: PublicMapOptions = match serde_wasm_bindgen::from_value(options) {
        Ok(options) => options,
        Err(error) => {
            log::warn!("⚠️ Opciones del mapa público inválidas: {:?}", error);
            return;
        }
    };

    let map = match create_base_map(&options.map_id, options.lat, options.lng, options.zoom) {
        Some(map) => map,
        None => return,
    };

    draw_route_path(&map, &options.path);

    let placed = place_business_markers(&map, &options.markers);
    adjust_view(&map, &placed);

    log::info!(
        "🗺️ Mapa público listo en '{}': {} negocios en el mapa (de {})",
        options.map_id,
        placed.len(),
        options.markers.len()
    );
}

/// Dibuja el trazado de la ruta si tiene al menos dos puntos y ajusta la
/// vista a sus límites. El ajuste es best-effort: si Leaflet no puede
/// calcular o aplicar los límites, el mapa sigue siendo usable sin él.
fn draw_route_path(map: &leaflet::LeafletMap, path: &[[f64; 2]]) {
    if path.len() < 2 {
        return;
    }

    let line = leaflet::new_polyline(&coords_array(path));
    line.add_to(map);

    if let Ok(bounds) = line.get_bounds() {
        let _ = map.fit_bounds(&bounds, &fit_options());
    }
}

/// Coloca un marcador con popup por cada negocio con coordenadas válidas y
/// devuelve las posiciones colocadas. Los descriptores sin coordenadas
/// numéricas se omiten en silencio, sin interrumpir el resto.
fn place_business_markers(
    map: &leaflet::LeafletMap,
    businesses: &[BusinessMarker],
) -> Vec<(f64, f64)> {
    let mut placed = Vec::new();

    for business in businesses {
        let (lat, lng) = match business.coordinates() {
            Some(position) => position,
            None => continue,
        };

        let marker = leaflet::new_marker(&leaflet::lat_lng(lat, lng), &marker_options(false));
        marker.add_to(map);
        marker.bind_popup(&business_popup(business));

        placed.push((lat, lng));
    }

    placed
}

/// Vista final según los marcadores colocados: dos o más → ajustar a los
/// límites combinados; exactamente uno → centrar con zoom cercano; ninguno →
/// dejar la vista inicial intacta.
fn adjust_view(map: &leaflet::LeafletMap, placed: &[(f64, f64)]) {
    match placed {
        [] => {}
        [(lat, lng)] => {
            map.set_view(&leaflet::lat_lng(*lat, *lng), CONFIG.map.single_marker_zoom);
        }
        _ => {
            let positions: Vec<[f64; 2]> = placed.iter().map(|(lat, lng)| [*lat, *lng]).collect();
            if let Ok(bounds) = leaflet::new_lat_lng_bounds(&coords_array(&positions)) {
                let _ = map.fit_bounds(&bounds, &fit_options());
            }
        }
    }
}

fn coords_array(path: &[[f64; 2]]) -> JsValue {
    let coords = js_sys::Array::new();
    for [lat, lng] in path {
        coords.push(&leaflet::lat_lng(*lat, *lng));
    }
    coords.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opciones_con_defaults() {
        let options: PublicMapOptions = serde_json::from_str(r#"{"mapId": "mapa"}"#).unwrap();
        assert_eq!(options.map_id, "mapa");
        assert!(options.markers.is_empty());
        assert!(options.path.is_empty());
        assert_eq!(options.lat, -1.8312);
        assert_eq!(options.lng, -78.1834);
        assert_eq!(options.zoom, 6.0);
    }

    #[test]
    fn marcadores_invalidos_no_aportan_posiciones() {
        let options: PublicMapOptions = serde_json::from_str(
            r#"{
                "mapId": "mapa",
                "markers": [
                    {"lat": -1.0, "lng": -78.0, "name": "Válido"},
                    {"lat": "x", "lng": -78.0, "name": "Lat no numérica"},
                    {"lng": -78.0, "name": "Sin lat"},
                    {"lat": -2.0, "lng": null, "name": "Lng null"}
                ]
            }"#,
        )
        .unwrap();

        let validos: Vec<_> = options
            .markers
            .iter()
            .filter_map(|m| m.coordinates())
            .collect();
        assert_eq!(validos, vec![(-1.0, -78.0)]);
    }

    #[test]
    fn trazado_se_deserializa_ordenado() {
        let options: PublicMapOptions = serde_json::from_str(
            r#"{"mapId": "mapa", "path": [[-1.0, -78.0], [-1.5, -78.5]]}"#,
        )
        .unwrap();
        assert_eq!(options.path, vec![[-1.0, -78.0], [-1.5, -78.5]]);
    }
}
