// ============================================================================
// POPUP VIEW - Fragmento HTML del popup de un negocio
// ============================================================================
// Todo texto que viene del descriptor se escapa antes de concatenarlo: los
// nombres y rutas los escriben usuarios y no pueden convertirse en marcado.
// ============================================================================

use crate::models::BusinessMarker;
use crate::utils::constants::{
    DEFAULT_BUSINESS_NAME, LISTINGS_URL, POPUP_LISTING_LABEL, POPUP_MAPS_LABEL,
    POPUP_WHATSAPP_LABEL,
};
use crate::utils::html::escape_html;

/// Construye el contenido del popup: nombre, ruta, enlace al listado
/// filtrado y, si existen, enlaces a mapas externos y WhatsApp.
pub fn business_popup(business: &BusinessMarker) -> String {
    let name = business
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_BUSINESS_NAME);
    let route = business.route.as_deref().unwrap_or("");

    let mut html = format!(
        "<div class=\"map-popup\"><strong>{}</strong><br>\
         <span class=\"popup-route\">{}</span><br>\
         <a href=\"{}?route={}\">{}</a>",
        escape_html(name),
        escape_html(route),
        LISTINGS_URL,
        urlencoding::encode(route),
        POPUP_LISTING_LABEL,
    );

    if let Some(maps_url) = business.maps_url.as_deref().filter(|u| !u.is_empty()) {
        html.push_str(&format!(
            "<br><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape_html(maps_url),
            POPUP_MAPS_LABEL,
        ));
    }

    if let Some(phone) = business.whatsapp.as_deref().filter(|p| !p.is_empty()) {
        // wa.me espera el número sin el '+' inicial
        let phone = phone.trim_start_matches('+');
        html.push_str(&format!(
            "<br><a href=\"https://wa.me/{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape_html(phone),
            POPUP_WHATSAPP_LABEL,
        ));
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negocio(name: &str, route: &str) -> BusinessMarker {
        BusinessMarker {
            lat: Some(-1.0),
            lng: Some(-78.0),
            name: Some(name.to_string()),
            route: Some(route.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn popup_basico() {
        let html = business_popup(&negocio("Café Central", "Cuenca"));
        assert!(html.contains("<strong>Café Central</strong>"));
        assert!(html.contains("Cuenca"));
        assert!(html.contains("href=\"/listings?route=Cuenca\""));
        assert!(html.contains(POPUP_LISTING_LABEL));
        // Sin maps_url ni whatsapp no aparecen sus enlaces
        assert!(!html.contains(POPUP_MAPS_LABEL));
        assert!(!html.contains("wa.me"));
    }

    #[test]
    fn nombre_ausente_usa_el_placeholder() {
        let mut business = negocio("", "Tena");
        business.name = None;
        assert!(business_popup(&business).contains("<strong>Negocio</strong>"));

        // Cadena vacía cuenta como ausente
        assert!(business_popup(&negocio("", "Tena")).contains("<strong>Negocio</strong>"));
    }

    #[test]
    fn ruta_se_codifica_en_el_enlace() {
        let html = business_popup(&negocio("Tour", "Ruta Spondylus / Montañita"));
        assert!(html.contains("?route=Ruta%20Spondylus%20%2F%20Monta%C3%B1ita"));
    }

    #[test]
    fn nombre_y_ruta_se_escapan() {
        let html = business_popup(&negocio("<script>alert('x')</script>", "A&B \"tours\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A&amp;B &quot;tours&quot;"));
    }

    #[test]
    fn enlace_de_maps_solo_si_existe() {
        let mut business = negocio("Museo", "Cuenca");
        business.maps_url = Some("https://maps.example.com/?q=museo".to_string());
        let html = business_popup(&business);
        assert!(html.contains("href=\"https://maps.example.com/?q=museo\""));
        assert!(html.contains(POPUP_MAPS_LABEL));
        assert!(html.contains("rel=\"noopener\""));
    }

    #[test]
    fn whatsapp_pierde_el_mas_inicial() {
        let mut business = negocio("Guía", "Tena");
        business.whatsapp = Some("+593991234567".to_string());
        let html = business_popup(&business);
        assert!(html.contains("href=\"https://wa.me/593991234567\""));
        assert!(!html.contains("wa.me/+"));
    }

    #[test]
    fn campos_opcionales_vacios_no_generan_enlaces() {
        let mut business = negocio("Guía", "Tena");
        business.maps_url = Some(String::new());
        business.whatsapp = Some(String::new());
        let html = business_popup(&business);
        assert!(!html.contains(POPUP_MAPS_LABEL));
        assert!(!html.contains("wa.me"));
    }
}
