use std::fmt::Display;

/// Escapa un valor para incrustarlo en marcado HTML.
///
/// Reemplaza los cinco caracteres reservados (`& < > " '`) por sus entidades,
/// de modo que texto ingresado por usuarios (nombres de negocio, rutas) nunca
/// pueda interpretarse como marcado ni escapar del elemento que lo contiene.
/// Acepta cualquier valor con representación textual; los números pasan
/// intactos porque no contienen caracteres reservados.
pub fn escape_html(value: impl Display) -> String {
    let text = value.to_string();
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapa_los_cinco_reservados() {
        assert_eq!(
            escape_html(r#"<a href="x" onclick='y'>&"#),
            "&lt;a href=&quot;x&quot; onclick=&#39;y&#39;&gt;&amp;"
        );
    }

    #[test]
    fn script_queda_sin_reservados_sueltos() {
        let escaped = escape_html("<script>alert('hola & chau')</script>");
        for reservado in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(reservado), "quedó {:?} sin escapar", reservado);
        }
        // El único '&' restante es el que abre cada entidad
        assert_eq!(escaped, "&lt;script&gt;alert(&#39;hola &amp; chau&#39;)&lt;/script&gt;");
    }

    #[test]
    fn texto_normal_pasa_intacto() {
        assert_eq!(escape_html("Ruta Spondylus / Montañita"), "Ruta Spondylus / Montañita");
    }

    #[test]
    fn no_doble_escapa_el_ampersand() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn coerciona_valores_no_textuales() {
        assert_eq!(escape_html(6), "6");
        assert_eq!(escape_html(-1.8312), "-1.8312");
    }
}
