use serde::{Deserialize, Serialize};

/// Valores por defecto del mapa. El centro inicial apunta a Ecuador
/// continental, donde vive la oferta del listado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Zoom aplicado cuando el mapa público tiene un solo negocio válido
    pub single_marker_zoom: f64,
    /// Zoom máximo de la capa de teselas
    pub tile_max_zoom: f64,
    /// Padding en píxeles al ajustar la vista a un conjunto de puntos
    pub fit_padding: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: -1.8312,
            default_center_lng: -78.1834,
            default_zoom: 6.0,
            single_marker_zoom: 14.0,
            tile_max_zoom: 19.0,
            fit_padding: 30.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Milisegundos antes de ocultar el banner de éxito
    pub flash_hide_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { flash_hide_ms: 8000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub map: MapConfig,
    pub page: PageConfig,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            map: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("-1.8312").parse().unwrap_or(-1.8312),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("-78.1834").parse().unwrap_or(-78.1834),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("6.0").parse().unwrap_or(6.0),
                single_marker_zoom: option_env!("SINGLE_MARKER_ZOOM")
                    .unwrap_or("14.0").parse().unwrap_or(14.0),
                tile_max_zoom: option_env!("TILE_MAX_ZOOM")
                    .unwrap_or("19.0").parse().unwrap_or(19.0),
                fit_padding: option_env!("MAP_FIT_PADDING")
                    .unwrap_or("30.0").parse().unwrap_or(30.0),
            },
            page: PageConfig {
                flash_hide_ms: option_env!("FLASH_HIDE_MS")
                    .unwrap_or("8000").parse().unwrap_or(8000),
            },
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apuntan_a_ecuador() {
        let config = MapConfig::default();
        assert_eq!(config.default_center_lat, -1.8312);
        assert_eq!(config.default_center_lng, -78.1834);
        assert_eq!(config.default_zoom, 6.0);
    }

    #[test]
    fn defaults_de_vista_y_banner() {
        let config = AppConfig::default();
        assert_eq!(config.map.single_marker_zoom, 14.0);
        assert_eq!(config.map.fit_padding, 30.0);
        assert_eq!(config.page.flash_hide_ms, 8000);
    }
}
