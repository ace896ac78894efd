// export.rs - escritura del workbook de proyección con umya-spreadsheet.
// Hojas: Formulario (Campo/Valor), Malla (todo anotado), Convalidados y
// Matriculables (mismo layout que los reportes en papel).

use std::path::Path;

use umya_spreadsheet::{self, Worksheet};

use crate::api_json::FichaEstudiante;
use crate::models::{CursoEvaluado, EstadoConvalidacion, ResultadoConvalidacion};
use crate::reporte::resumen_formulario;

const ENCABEZADOS_CURSOS: [&str; 6] = [
    "Ciclo",
    "Curso",
    "Materia",
    "Cód. Curso",
    "CR",
    "Requisitos",
];

/// Coordenada estilo "B3" a partir de columna/fila 1-based.
/// Las hojas de salida nunca pasan de la columna Z.
fn coord(col: u32, row: u32) -> String {
    let letra = (b'A' + (col - 1) as u8) as char;
    format!("{}{}", letra, row)
}

fn set_celda(sheet: &mut Worksheet, col: u32, row: u32, valor: &str) {
    sheet.get_cell_mut(coord(col, row)).set_value(valor);
}

fn escribir_hoja_cursos(sheet: &mut Worksheet, cursos: &[&CursoEvaluado]) {
    for (i, h) in ENCABEZADOS_CURSOS.iter().enumerate() {
        set_celda(sheet, i as u32 + 1, 1, h);
    }
    for (i, c) in cursos.iter().enumerate() {
        let row = i as u32 + 2;
        set_celda(sheet, 1, row, &c.curso.ciclo);
        set_celda(sheet, 2, row, &c.curso.curso);
        set_celda(sheet, 3, row, &c.curso.materia);
        set_celda(sheet, 4, row, &c.curso.codigo_curso);
        set_celda(sheet, 5, row, &c.curso.cr.to_string());
        set_celda(sheet, 6, row, &c.curso.requisitos);
    }
    // fila de total, como en la tabla fija de los PDF
    let total: i64 = cursos.iter().map(|c| c.curso.cr).sum();
    let fila_total = cursos.len() as u32 + 2;
    set_celda(sheet, 4, fila_total, "Total");
    set_celda(sheet, 5, fila_total, &total.to_string());
}

/// Escribe el Excel de proyección para un estudiante.
pub fn exportar_proyeccion<P: AsRef<Path>>(
    path: P,
    ficha: &FichaEstudiante,
    resultado: &ResultadoConvalidacion,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    // --- Formulario ---
    {
        let sheet = book.new_sheet("Formulario").map_err(|e| e.to_string())?;
        set_celda(sheet, 1, 1, "Campo");
        set_celda(sheet, 2, 1, "Valor");
        for (i, (campo, valor)) in resumen_formulario(ficha, resultado).iter().enumerate() {
            let row = i as u32 + 2;
            set_celda(sheet, 1, row, campo);
            set_celda(sheet, 2, row, valor);
        }
    }

    // --- Malla completa con estados ---
    {
        let sheet = book.new_sheet("Malla").map_err(|e| e.to_string())?;
        for (i, h) in ENCABEZADOS_CURSOS.iter().enumerate() {
            set_celda(sheet, i as u32 + 1, 1, h);
        }
        set_celda(sheet, 7, 1, "Estado");
        set_celda(sheet, 8, 1, "Puede matricular");
        for (i, c) in resultado.cursos.iter().enumerate() {
            let row = i as u32 + 2;
            set_celda(sheet, 1, row, &c.curso.ciclo);
            set_celda(sheet, 2, row, &c.curso.curso);
            set_celda(sheet, 3, row, &c.curso.materia);
            set_celda(sheet, 4, row, &c.curso.codigo_curso);
            set_celda(sheet, 5, row, &c.curso.cr.to_string());
            set_celda(sheet, 6, row, &c.curso.requisitos);
            let estado = match c.estado {
                EstadoConvalidacion::Convalidado => "CONVALIDADO",
                EstadoConvalidacion::NoConvalidado => "NO CONVALIDADO",
            };
            set_celda(sheet, 7, row, estado);
            set_celda(sheet, 8, row, if c.puede_matricular { "SI" } else { "NO" });
        }
    }

    // --- Convalidados ---
    {
        let sheet = book.new_sheet("Convalidados").map_err(|e| e.to_string())?;
        escribir_hoja_cursos(sheet, &resultado.convalidados());
    }

    // --- Matriculables ---
    {
        let sheet = book.new_sheet("Matriculables").map_err(|e| e.to_string())?;
        escribir_hoja_cursos(sheet, &resultado.matriculables());
    }

    umya_spreadsheet::writer::xlsx::write(&book, path.as_ref())?;
    Ok(())
}
