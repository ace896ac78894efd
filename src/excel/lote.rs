// lote.rs - lectura del Excel masivo de estudiantes (una fila por alumno).
// Los encabezados reales varían entre sedes; se canonicalizan y se aceptan
// sinónimos conocidos antes de validar.

use calamine::{open_workbook_auto, Reader};
use std::path::Path;

use crate::api_json::FichaEstudiante;
use crate::excel::io::{canon_header, cell_to_string, indice_columna};

/// Columnas obligatorias del Excel de entrada, en forma canónica.
pub const COLUMNAS_LOTE: [&str; 10] = [
    "NOMBRE",
    "APELLIDO",
    "COD ESTUDIANTE",
    "SEDE",
    "PLAN DE ESTUDIOS",
    "CARGO ELABORADO POR",
    "CARGO RESP ACADEMICO",
    "CARRERA",
    "UNIDAD DE NEGOCIO",
    "CRD",
];

/// Sinónimos aceptados por columna canónica.
pub fn sinonimos_de(canonico: &str) -> &'static [&'static str] {
    match canonico {
        "COD ESTUDIANTE" => &[
            "CODIGO ESTUDIANTE",
            "CÓDIGO ESTUDIANTE",
            "COD. ESTUDIANTE",
            "COD EST.",
        ],
        "CARGO RESP ACADEMICO" => &[
            "CARGO RESP. ACADEMICO",
            "CARGO RESP. ACADÉMICO",
            "CARGO RESPONSABLE ACADEMICO",
        ],
        "UNIDAD DE NEGOCIO" => &["UNIDAD NEGOCIO", "UNIDAD"],
        "PLAN DE ESTUDIOS" => &["PLAN ESTUDIOS", "PLAN"],
        _ => &[],
    }
}

/// Verifica que todas las columnas obligatorias existan (directas o por
/// sinónimo). El error lista tanto lo que falta como lo detectado, para que
/// el operador pueda corregir el Excel.
pub fn ensure_columnas_requeridas(headers: &[String]) -> Result<(), String> {
    let faltantes: Vec<&str> = COLUMNAS_LOTE
        .iter()
        .filter(|c| indice_columna(headers, c, sinonimos_de(c)).is_none())
        .copied()
        .collect();

    if faltantes.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Faltan columnas obligatorias en el Excel: {:?}. Columnas detectadas: {:?}",
            faltantes, headers
        ))
    }
}

/// Lee el Excel masivo y devuelve una ficha por fila. Las celdas ausentes
/// quedan vacías; la validación fila a fila ocurre al procesar el lote.
pub fn leer_lote_estudiantes<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<FichaEstudiante>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    if sheet_names.is_empty() {
        return Err("No se encontraron hojas en el archivo Excel".into());
    }

    let range = workbook.worksheet_range(&sheet_names[0])?;
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(fila) => fila.iter().map(|c| canon_header(&cell_to_string(c))).collect(),
        None => return Err("El Excel no tiene filas para procesar".into()),
    };
    eprintln!("Columnas detectadas: {:?}", headers);

    ensure_columnas_requeridas(&headers)?;

    let col = |nombre: &str| indice_columna(&headers, nombre, sinonimos_de(nombre));
    let col_nombre = col("NOMBRE");
    let col_apellido = col("APELLIDO");
    let col_codigo = col("COD ESTUDIANTE");
    let col_sede = col("SEDE");
    let col_plan = col("PLAN DE ESTUDIOS");
    let col_cargo_elab = col("CARGO ELABORADO POR");
    let col_cargo_resp = col("CARGO RESP ACADEMICO");
    let col_carrera = col("CARRERA");
    let col_unidad = col("UNIDAD DE NEGOCIO");
    let col_crd = col("CRD");
    // opcionales: nombres de quien elabora / responsable académico
    let col_nombre_elab = indice_columna(&headers, "NOMBRE ELABORADO POR", &[]);
    let col_nombre_resp = indice_columna(&headers, "NOMBRE RESP ACADEMICO", &["NOMBRE RESP. ACADEMICO"]);

    let mut fichas = Vec::new();
    for fila in rows {
        if fila.iter().all(|c| cell_to_string(c).is_empty()) {
            continue;
        }

        let celda = |i: Option<usize>| -> String {
            i.and_then(|i| fila.get(i)).map(cell_to_string).unwrap_or_default()
        };

        fichas.push(FichaEstudiante {
            nombres: celda(col_nombre),
            apellidos: celda(col_apellido),
            codigo: celda(col_codigo),
            sede: celda(col_sede),
            plan: celda(col_plan),
            carrera: celda(col_carrera),
            unidad: celda(col_unidad),
            crd: celda(col_crd),
            elaborado_nombre: celda(col_nombre_elab),
            elaborado_cargo: celda(col_cargo_elab),
            resp_nombre: celda(col_nombre_resp),
            resp_cargo: celda(col_cargo_resp),
            tolerancia: crate::algorithm::TOLERANCIA_DEFAULT,
        });
    }

    Ok(fichas)
}
