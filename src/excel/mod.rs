//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: helpers de lectura/canonicalización de celdas y encabezados
//! - `dataset`: lectura del dataset de mallas (catálogo de cursos)
//! - `lote`: lectura del Excel masivo de estudiantes
//! - `export`: escritura del workbook de proyección

/// Helpers de IO y utilidades para parsing de Excel
mod io;

/// Lectura del dataset de mallas: `leer_dataset`
mod dataset;

/// Lectura del Excel masivo de estudiantes: `leer_lote_estudiantes`
mod lote;

/// Escritura del Excel de salida: `exportar_proyeccion`
mod export;

// Re-exports: helpers internos no se exponen; solo la API de alto nivel
pub use dataset::{filtrar_carrera_unidad, leer_dataset, listar_carreras, listar_unidades, Dataset};
pub use export::exportar_proyeccion;
pub use io::{canon_header, cell_to_creditos, cell_to_string, indice_columna};
pub use lote::{ensure_columnas_requeridas, leer_lote_estudiantes, COLUMNAS_LOTE};

use std::path::PathBuf;

/// Nombre por defecto del dataset de mallas.
pub const DATASET_FILE: &str = "dataset.xlsx";

/// Resuelve el directorio de datafiles.
/// Prioridad: variable de entorno CONVA_DATAFILES_DIR, luego candidatos
/// relativos al directorio de trabajo, y como último recurso el CWD.
pub fn get_datafiles_dir() -> PathBuf {
    if let Ok(path) = std::env::var("CONVA_DATAFILES_DIR") {
        let p = PathBuf::from(path);
        if p.exists() {
            return p;
        }
        eprintln!("⚠️ CONVA_DATAFILES_DIR no existe: {:?}", p);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let candidatos = [
        cwd.join("src/datafiles"),
        cwd.join("datafiles"),
        cwd.clone(),
    ];
    for candidato in candidatos {
        if candidato.join(DATASET_FILE).exists() {
            return candidato;
        }
    }

    cwd
}

/// Ruta completa del dataset de mallas.
pub fn resolver_dataset() -> PathBuf {
    get_datafiles_dir().join(DATASET_FILE)
}
