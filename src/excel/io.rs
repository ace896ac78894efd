use calamine::Data;

/// Convierte un `Data` de calamine a String (versión genérica para celdas).
/// Los floats enteros (3.0) se imprimen sin decimales porque así llegan los
/// créditos y códigos desde Excel.
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Coacciona una celda a créditos enteros; lo no numérico queda en 0
/// (y un curso con 0 créditos nunca entra a la selección).
pub fn cell_to_creditos(c: &Data) -> i64 {
    match c {
        Data::Int(i) => *i,
        Data::Float(f) => *f as i64,
        Data::String(s) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    }
}

/// Canonicaliza un encabezado de Excel: NBSP -> espacio, mayúsculas, sin
/// acentos, puntuación a espacio y espacios colapsados.
/// "Unid. Negocio " y "UNID NEGOCIO" terminan iguales.
pub fn canon_header(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // mapa simple de acentos comunes en español/latam
    for ch in s.replace('\u{00A0}', " ").chars() {
        let c = match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'á' | 'à' | 'ä' | 'â' | 'ã' => 'A',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'E',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'I',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' | 'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'O',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'U',
            'Ñ' | 'ñ' => 'N',
            'Ç' | 'ç' => 'C',
            other => other,
        };

        if c.is_alphanumeric() {
            for up in c.to_uppercase() {
                out.push(up);
            }
        } else {
            // espacios y puntuación -> espacio
            out.push(' ');
        }
    }

    // colapsar espacios múltiples
    let mut res = String::with_capacity(out.len());
    let mut prev_space = false;
    for ch in out.chars() {
        if ch == ' ' {
            if !prev_space {
                res.push(' ');
                prev_space = true;
            }
        } else {
            res.push(ch);
            prev_space = false;
        }
    }

    res.trim().to_string()
}

/// Busca el índice de una columna canónica entre los encabezados ya
/// canonicalizados, probando también sus sinónimos.
pub fn indice_columna(headers: &[String], canonico: &str, sinonimos: &[&str]) -> Option<usize> {
    if let Some(i) = headers.iter().position(|h| h == canonico) {
        return Some(i);
    }
    for v in sinonimos {
        let vc = canon_header(v);
        if let Some(i) = headers.iter().position(|h| *h == vc) {
            return Some(i);
        }
    }
    None
}
