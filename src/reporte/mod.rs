// Módulo `reporte`: estructuras listas para renderizar (PDF/Excel externos).
// El núcleo expone tablas ya armadas para que los renderizadores no tengan
// que conocer la lógica de convalidación.

use chrono::Local;

use crate::api_json::FichaEstudiante;
use crate::models::{CursoEvaluado, ResultadoConvalidacion};

/// Las tablas de los reportes institucionales tienen SIEMPRE 27 filas de
/// datos más una fila final de total, se llenen o no.
pub const MAX_FILAS_TABLA: usize = 27;

/// Fila de la tabla fija (todo texto, ya en mayúsculas donde corresponde).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FilaTabla {
    pub ciclo: String,
    pub curso: String,
    pub materia: String,
    pub codigo_curso: String,
    pub cr: String,
}

impl FilaTabla {
    fn vacia() -> Self {
        FilaTabla {
            ciclo: String::new(),
            curso: String::new(),
            materia: String::new(),
            codigo_curso: String::new(),
            cr: String::new(),
        }
    }
}

/// Tabla de exactamente `MAX_FILAS_TABLA` filas más el total de créditos.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TablaFija {
    pub filas: Vec<FilaTabla>,
    /// Total sobre TODOS los cursos recibidos, aunque la tabla trunque a 27.
    pub total_cr: i64,
}

/// Arma la tabla fija de 27 filas: trunca si sobran cursos y rellena con
/// filas en blanco si faltan.
pub fn tabla_fija_27(cursos: &[&CursoEvaluado]) -> TablaFija {
    let total_cr: i64 = cursos.iter().map(|c| c.curso.cr).sum();

    let mut filas: Vec<FilaTabla> = cursos
        .iter()
        .take(MAX_FILAS_TABLA)
        .map(|c| FilaTabla {
            ciclo: c.curso.ciclo.clone(),
            curso: c.curso.curso.to_uppercase(),
            materia: c.curso.materia.to_uppercase(),
            codigo_curso: c.curso.codigo_curso.to_uppercase(),
            cr: c.curso.cr.to_string(),
        })
        .collect();

    while filas.len() < MAX_FILAS_TABLA {
        filas.push(FilaTabla::vacia());
    }

    TablaFija { filas, total_cr }
}

/// Pares Campo/Valor de la hoja "Formulario" del Excel de salida.
pub fn resumen_formulario(
    ficha: &FichaEstudiante,
    resultado: &ResultadoConvalidacion,
) -> Vec<(String, String)> {
    let ahora = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
    let alumno = formatear_apellidos_nombres(&ficha.apellidos, &ficha.nombres);

    vec![
        ("Fecha/Hora".to_string(), ahora),
        ("Apellidos y Nombres".to_string(), alumno),
        ("Código de estudiante".to_string(), ficha.codigo.clone()),
        ("Campus / Sede".to_string(), ficha.sede.clone()),
        ("Plan de estudios".to_string(), ficha.plan.clone()),
        ("CRD solicitado".to_string(), ficha.crd.clone()),
        (
            "Máximo permitido (CRD+2)".to_string(),
            resultado.limite_total.to_string(),
        ),
        (
            "Créditos convalidados (resultado)".to_string(),
            resultado.total_convalidado.to_string(),
        ),
        ("Carrera".to_string(), ficha.carrera.clone()),
        ("Unidad de Negocio".to_string(), ficha.unidad.clone()),
        (
            "Nombre elaborado por".to_string(),
            ficha.elaborado_nombre.clone(),
        ),
        (
            "Cargo elaborado por".to_string(),
            ficha.elaborado_cargo.clone(),
        ),
        (
            "Nombre Resp. Académico".to_string(),
            ficha.resp_nombre.clone(),
        ),
        ("Cargo Resp. Académico".to_string(), ficha.resp_cargo.clone()),
    ]
}

/// "Apellidos, Nombres"; si falta una de las partes devuelve la otra sola.
pub fn formatear_apellidos_nombres(apellidos: &str, nombres: &str) -> String {
    let ap = apellidos.trim();
    let nm = nombres.trim();
    if ap.is_empty() && nm.is_empty() {
        return String::new();
    }
    if !ap.is_empty() && !nm.is_empty() {
        return format!("{}, {}", ap, nm);
    }
    if ap.is_empty() { nm.to_string() } else { ap.to_string() }
}

/// Limpia un texto para usarlo como nombre de archivo/carpeta en Windows y
/// Unix: caracteres prohibidos a '_', espacios colapsados, máximo 120 chars.
pub fn safe_filename(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // cada racha de caracteres prohibidos produce UN solo '_', aunque el
    // texto ya traiga guiones bajos alrededor
    let mut en_prohibidos = false;
    for ch in s.trim().chars() {
        match ch {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {
                if !en_prohibidos {
                    out.push('_');
                    en_prohibidos = true;
                }
            }
            c if c.is_whitespace() => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
                en_prohibidos = false;
            }
            c => {
                out.push(c);
                en_prohibidos = false;
            }
        }
    }
    let out = out.trim().to_string();
    out.chars().take(120).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Curso, EstadoConvalidacion};

    fn evaluado(nombre: &str, cr: i64) -> CursoEvaluado {
        CursoEvaluado {
            curso: Curso {
                carrera: "X".to_string(),
                unidad_negocio: "WA".to_string(),
                ciclo: "1".to_string(),
                cr,
                curso: nombre.to_string(),
                materia: "mat".to_string(),
                codigo_curso: "c-1".to_string(),
                requisitos: String::new(),
            },
            estado: EstadoConvalidacion::Convalidado,
            puede_matricular: false,
        }
    }

    #[test]
    fn rellena_hasta_27_filas() {
        let cursos = vec![evaluado("calculo 1", 4), evaluado("fisica 1", 3)];
        let refs: Vec<&CursoEvaluado> = cursos.iter().collect();
        let tabla = tabla_fija_27(&refs);
        assert_eq!(tabla.filas.len(), MAX_FILAS_TABLA);
        assert_eq!(tabla.filas[0].curso, "CALCULO 1");
        assert_eq!(tabla.filas[2], FilaTabla::vacia());
        assert_eq!(tabla.total_cr, 7);
    }

    #[test]
    fn trunca_a_27_pero_totaliza_todo() {
        let cursos: Vec<CursoEvaluado> = (0..30).map(|i| evaluado(&format!("c{}", i), 2)).collect();
        let refs: Vec<&CursoEvaluado> = cursos.iter().collect();
        let tabla = tabla_fija_27(&refs);
        assert_eq!(tabla.filas.len(), MAX_FILAS_TABLA);
        assert_eq!(tabla.total_cr, 60);
    }

    #[test]
    fn apellidos_nombres_formato() {
        assert_eq!(formatear_apellidos_nombres("Quispe", "Ana"), "Quispe, Ana");
        assert_eq!(formatear_apellidos_nombres("", "Ana"), "Ana");
        assert_eq!(formatear_apellidos_nombres("Quispe", ""), "Quispe");
        assert_eq!(formatear_apellidos_nombres("  ", " "), "");
    }

    #[test]
    fn safe_filename_limpia_prohibidos() {
        assert_eq!(safe_filename("N001/Quispe: Ana?"), "N001_Quispe_ Ana_");
        assert_eq!(safe_filename("  a   b  "), "a b");
        let largo = "x".repeat(200);
        assert_eq!(safe_filename(&largo).len(), 120);
    }

    #[test]
    fn safe_filename_un_guion_por_racha() {
        // un '_' por racha de prohibidos, aun junto a '_' literales del texto
        assert_eq!(safe_filename("a_/b"), "a__b");
        assert_eq!(safe_filename("a//:b"), "a_b");
        assert_eq!(safe_filename("a/ /b"), "a_ _b");
    }
}
