// Módulo de alto nivel para el pipeline de convalidación.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod matriculables;
pub mod seleccion;
pub mod subset;

// Reexportar solo la API pública que se quiere exponer desde aquí
pub use matriculables::{calcular_matriculables, cumple_requisito};
pub use seleccion::{seleccionar_convalidacion, TOLERANCIA_DEFAULT};
pub use subset::subset_best_between;

use crate::models::{Curso, CursoEvaluado, EstadoConvalidacion, ResultadoConvalidacion};

/// Pipeline completo para un estudiante:
/// 1) selección secuencial por ciclo (qué se convalida)
/// 2) anotación de estados sobre el orden original del dataset
/// 3) evaluación de requisitos (qué queda matriculable)
///
/// Cada invocación trabaja sobre su propia copia de los candidatos: no hay
/// estado compartido entre estudiantes de un lote.
pub fn procesar_convalidacion(
    cursos: Vec<Curso>,
    crd: f64,
    tolerancia: i64,
    con_requisitos: bool,
) -> ResultadoConvalidacion {
    let (seleccion, _suma) = seleccionar_convalidacion(&cursos, crd, tolerancia);

    let mut estados = vec![EstadoConvalidacion::NoConvalidado; cursos.len()];
    for &i in &seleccion {
        estados[i] = EstadoConvalidacion::Convalidado;
    }

    let puede = calcular_matriculables(&cursos, &estados, con_requisitos);

    // la suma reportada se recalcula desde la selección, no se arrastra
    let total_convalidado: i64 = seleccion.iter().map(|&i| cursos[i].cr).sum();

    let crd_int = crd as i64;
    let evaluados: Vec<CursoEvaluado> = cursos
        .into_iter()
        .zip(estados.into_iter())
        .zip(puede.into_iter())
        .map(|((curso, estado), puede_matricular)| CursoEvaluado {
            curso,
            estado,
            puede_matricular,
        })
        .collect();

    ResultadoConvalidacion {
        cursos: evaluados,
        seleccion,
        total_convalidado,
        crd_solicitado: crd_int,
        limite_total: crd_int + tolerancia,
    }
}
