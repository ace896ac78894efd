// lote.rs - proceso masivo: un Excel de estudiantes entra, una carpeta de
// proyecciones sale. Cada fila se procesa de forma aislada y un error en una
// fila nunca aborta el resto del lote.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::algorithm::procesar_convalidacion;
use crate::api_json::{validar_ficha, FichaEstudiante};
use crate::excel::{exportar_proyeccion, filtrar_carrera_unidad, leer_lote_estudiantes, Dataset};
use crate::reporte::{formatear_apellidos_nombres, safe_filename};

/// Resultado agregado de un lote.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResumenLote {
    pub ok: usize,
    pub errores: usize,
    /// Carpeta raíz donde quedaron los archivos generados.
    pub carpeta_salida: String,
    /// Una línea por fila procesada, estilo log.
    pub detalles: Vec<String>,
}

/// Procesa todas las filas del Excel `entrada` contra el `dataset` cargado.
/// Los resultados se escriben bajo `salida_base/PROCESADOS_<stamp>/`.
pub fn procesar_lote<P: AsRef<Path>, Q: AsRef<Path>>(
    dataset: &Dataset,
    entrada: P,
    salida_base: Q,
) -> Result<ResumenLote, Box<dyn Error>> {
    let fichas = leer_lote_estudiantes(&entrada)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let out_root = salida_base.as_ref().join(format!("PROCESADOS_{}", stamp));
    fs::create_dir_all(&out_root)?;
    eprintln!("Carpeta de salida: {}", out_root.display());

    let total = fichas.len();
    if total == 0 {
        eprintln!("El Excel no tiene filas para procesar.");
        return Ok(ResumenLote {
            ok: 0,
            errores: 0,
            carpeta_salida: out_root.to_string_lossy().to_string(),
            detalles: Vec::new(),
        });
    }

    let mut ok_count = 0usize;
    let mut err_count = 0usize;
    let mut detalles = Vec::with_capacity(total);

    for (i, ficha) in fichas.iter().enumerate() {
        let idx = i + 1;
        match procesar_estudiante(dataset, ficha, &out_root) {
            Ok(alumno) => {
                ok_count += 1;
                let linea = format!("✅ {}/{} OK - {} - {}", idx, total, ficha.codigo, alumno);
                eprintln!("{}", linea);
                detalles.push(linea);
            }
            Err(e) => {
                err_count += 1;
                let linea = format!("❌ {}/{} ERROR - {} -> {}", idx, total, ficha.codigo, e);
                eprintln!("{}", linea);
                detalles.push(linea);
            }
        }
    }

    eprintln!("Proceso finalizado. OK={} | ERROR={}", ok_count, err_count);

    Ok(ResumenLote {
        ok: ok_count,
        errores: err_count,
        carpeta_salida: out_root.to_string_lossy().to_string(),
        detalles,
    })
}

/// Procesa una fila: valida, filtra la malla, corre el pipeline y exporta.
/// Devuelve el nombre formateado del alumno para el log.
fn procesar_estudiante(
    dataset: &Dataset,
    ficha: &FichaEstudiante,
    out_root: &Path,
) -> Result<String, Box<dyn Error>> {
    if ficha.codigo.trim().is_empty() {
        return Err("COD ESTUDIANTE vacío".into());
    }

    let crd = validar_ficha(ficha)?;

    let cursos = filtrar_carrera_unidad(dataset, &ficha.carrera, &ficha.unidad);
    if cursos.is_empty() {
        return Err(format!(
            "No hay registros en dataset para Carrera='{}' y Unidad='{}'",
            ficha.carrera, ficha.unidad
        )
        .into());
    }

    let resultado = procesar_convalidacion(cursos, crd, ficha.tolerancia, dataset.con_requisitos);

    let carpeta = safe_filename(&format!(
        "{}_{}_{}",
        ficha.codigo, ficha.apellidos, ficha.nombres
    ));
    let out_student: PathBuf = out_root.join(carpeta);
    fs::create_dir_all(&out_student)?;

    let salida = out_student.join(format!("Proyeccion_Malla_{}.xlsx", ficha.codigo.trim()));
    exportar_proyeccion(salida, ficha, &resultado)?;

    Ok(formatear_apellidos_nombres(&ficha.apellidos, &ficha.nombres))
}
