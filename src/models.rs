use serde::{de::IgnoredAny, de::Visitor, Deserialize, Deserializer};
use std::fmt;

/// Negocio publicado en el listado, tal como lo incrusta la plantilla del
/// servidor en el objeto de configuración del mapa público. Los alias siguen
/// los nombres de campo del backend (`title`, `contact_whatsapp`, etc.).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BusinessMarker {
    #[serde(default, alias = "latitude", deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitude", deserialize_with = "lenient_coord")]
    pub lng: Option<f64>,
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default, alias = "mapsUrl")]
    pub maps_url: Option<String>,
    #[serde(default, alias = "contact_whatsapp")]
    pub whatsapp: Option<String>,
}

impl BusinessMarker {
    /// Coordenadas del negocio, solo si ambas son números finitos.
    /// Un descriptor sin coordenadas válidas no aporta marcador al mapa.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Deserializador tolerante para coordenadas: cualquier valor que no sea un
/// número (cadena, bool, objeto, null) se descarta como None en lugar de
/// invalidar la colección completa de marcadores.
fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CoordVisitor;

    impl<'de> Visitor<'de> for CoordVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, or any non-numeric value (discarded)")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_str<E>(self, _value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(CoordVisitor)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(CoordVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordenadas_numericas_se_conservan() {
        let marker: BusinessMarker =
            serde_json::from_str(r#"{"lat": -1.05, "lng": -78.5, "name": "Café Central"}"#)
                .unwrap();
        assert_eq!(marker.coordinates(), Some((-1.05, -78.5)));
    }

    #[test]
    fn coordenadas_no_numericas_se_descartan() {
        let marker: BusinessMarker =
            serde_json::from_str(r#"{"lat": "no es número", "lng": -78.5}"#).unwrap();
        assert_eq!(marker.lat, None);
        assert_eq!(marker.coordinates(), None);
    }

    #[test]
    fn coordenadas_ausentes_o_null() {
        let sin_lat: BusinessMarker = serde_json::from_str(r#"{"lng": -78.5}"#).unwrap();
        assert_eq!(sin_lat.coordinates(), None);

        let con_null: BusinessMarker =
            serde_json::from_str(r#"{"lat": null, "lng": -78.5}"#).unwrap();
        assert_eq!(con_null.coordinates(), None);
    }

    #[test]
    fn coordenadas_enteras_tambien_valen() {
        let marker: BusinessMarker = serde_json::from_str(r#"{"lat": -1, "lng": -78}"#).unwrap();
        assert_eq!(marker.coordinates(), Some((-1.0, -78.0)));
    }

    #[test]
    fn coordenadas_no_finitas_no_valen() {
        let marker = BusinessMarker {
            lat: Some(f64::NAN),
            lng: Some(-78.5),
            ..Default::default()
        };
        assert_eq!(marker.coordinates(), None);
    }

    #[test]
    fn alias_del_backend() {
        let marker: BusinessMarker = serde_json::from_str(
            r#"{"latitude": -2.9, "longitude": -79.0, "title": "Museo", "contact_whatsapp": "+593991234567"}"#,
        )
        .unwrap();
        assert_eq!(marker.coordinates(), Some((-2.9, -79.0)));
        assert_eq!(marker.name.as_deref(), Some("Museo"));
        assert_eq!(marker.whatsapp.as_deref(), Some("+593991234567"));
    }
}
