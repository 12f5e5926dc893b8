/// Capa base de teselas (OpenStreetMap, con atribución obligatoria)
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

/// Banner de éxito que se oculta solo tras unos segundos
pub const FLASH_SUCCESS_ID: &str = "flash-success";
/// Clase CSS que la hoja de estilos usa como convención de visibilidad
pub const HIDDEN_CLASS: &str = "hidden";

/// Atributo que marca un elemento como "pedir confirmación antes del click"
pub const CONFIRM_ATTR: &str = "data-confirm";
pub const CONFIRM_SELECTOR: &str = "[data-confirm]";
pub const DEFAULT_CONFIRM_PROMPT: &str = "¿Estás seguro?";

/// Página de listado filtrable por ruta
pub const LISTINGS_URL: &str = "/listings";

/// Textos del popup de negocio
pub const DEFAULT_BUSINESS_NAME: &str = "Negocio";
pub const POPUP_LISTING_LABEL: &str = "Ver en el listado";
pub const POPUP_MAPS_LABEL: &str = "Cómo llegar";
pub const POPUP_WHATSAPP_LABEL: &str = "WhatsApp";
