use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::excel::io::{canon_header, cell_to_creditos, cell_to_string, indice_columna};
use crate::models::Curso;

/// Dataset de mallas ya normalizado a columnas canónicas.
pub struct Dataset {
    pub cursos: Vec<Curso>,
    /// `false` si el Excel no traía columna REQUISITOS; en ese caso el
    /// evaluador de matriculables marca todo como no matriculable.
    pub con_requisitos: bool,
}

/// Lee el dataset de mallas (primera hoja, encabezados en la fila 0).
///
/// Columnas obligatorias: CARRERA, UNID. NEGOCIO, CICLO, CR, CURSO.
/// MATERIA, CÓD. CURSO y REQUISITOS son opcionales y quedan vacías si faltan.
pub fn leer_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("No se encontró el archivo: {}", path.display()).into());
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    if sheet_names.is_empty() {
        return Err("No se encontraron hojas en el archivo Excel".into());
    }

    let primera_hoja = &sheet_names[0];
    let range = workbook.worksheet_range(primera_hoja)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(fila) => fila.iter().map(|c| canon_header(&cell_to_string(c))).collect(),
        None => return Err("El dataset está vacío (sin fila de encabezados)".into()),
    };

    let col_carrera = indice_columna(&headers, "CARRERA", &[]);
    let col_unidad = indice_columna(&headers, "UNID NEGOCIO", &["UNIDAD DE NEGOCIO", "UNIDAD NEGOCIO"]);
    let col_ciclo = indice_columna(&headers, "CICLO", &[]);
    let col_cr = indice_columna(&headers, "CR", &["CREDITOS", "CRÉDITOS"]);
    let col_curso = indice_columna(&headers, "CURSO", &[]);

    let mut faltantes: Vec<&str> = Vec::new();
    if col_carrera.is_none() {
        faltantes.push("CARRERA");
    }
    if col_unidad.is_none() {
        faltantes.push("UNID. NEGOCIO");
    }
    if col_ciclo.is_none() {
        faltantes.push("CICLO");
    }
    if col_cr.is_none() {
        faltantes.push("CR");
    }
    if col_curso.is_none() {
        faltantes.push("CURSO");
    }
    if !faltantes.is_empty() {
        return Err(format!(
            "Faltan columnas necesarias en el dataset: {:?} (detectadas: {:?})",
            faltantes, headers
        )
        .into());
    }

    // opcionales
    let col_materia = indice_columna(&headers, "MATERIA", &[]);
    let col_codigo = indice_columna(&headers, "COD CURSO", &["CODIGO CURSO", "CODIGO DE CURSO"]);
    let col_requisitos = indice_columna(&headers, "REQUISITOS", &["PRERREQUISITOS", "REQUISITO"]);

    let celda = |fila: &[Data], col: Option<usize>| -> String {
        col.and_then(|i| fila.get(i)).map(cell_to_string).unwrap_or_default()
    };

    let mut cursos = Vec::new();
    for fila in rows {
        if fila.iter().all(|c| cell_to_string(c).is_empty()) {
            continue;
        }

        let cr = col_cr
            .and_then(|i| fila.get(i))
            .map(cell_to_creditos)
            .unwrap_or(0);

        cursos.push(Curso {
            carrera: celda(fila, col_carrera),
            unidad_negocio: celda(fila, col_unidad),
            ciclo: celda(fila, col_ciclo),
            cr,
            curso: celda(fila, col_curso),
            materia: celda(fila, col_materia),
            codigo_curso: celda(fila, col_codigo),
            requisitos: celda(fila, col_requisitos),
        });
    }

    Ok(Dataset {
        cursos,
        con_requisitos: col_requisitos.is_some(),
    })
}

/// Filtra el dataset a una (carrera, unidad de negocio). Comparación por
/// texto recortado, igual que el flujo masivo original.
pub fn filtrar_carrera_unidad(dataset: &Dataset, carrera: &str, unidad: &str) -> Vec<Curso> {
    let carrera = carrera.trim();
    let unidad = unidad.trim();
    dataset
        .cursos
        .iter()
        .filter(|c| c.carrera.trim() == carrera && c.unidad_negocio.trim() == unidad)
        .cloned()
        .collect()
}

/// Carreras distintas del dataset, ordenadas (para poblar el formulario).
pub fn listar_carreras(dataset: &Dataset) -> Vec<String> {
    let mut carreras: Vec<String> = dataset
        .cursos
        .iter()
        .map(|c| c.carrera.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    carreras.sort();
    carreras.dedup();
    carreras
}

/// Unidades de negocio disponibles para una carrera.
pub fn listar_unidades(dataset: &Dataset, carrera: &str) -> Vec<String> {
    let carrera = carrera.trim();
    let mut unidades: Vec<String> = dataset
        .cursos
        .iter()
        .filter(|c| c.carrera.trim() == carrera)
        .map(|c| c.unidad_negocio.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();
    unidades.sort();
    unidades.dedup();
    unidades
}
