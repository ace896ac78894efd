// matriculables.rs - evaluación de requisitos sobre el resultado de la
// convalidación. Un curso NO convalidado puede matricularse si alguno de
// sus requisitos (lista separada por ; , o /) aparece entre los nombres de
// los cursos convalidados. Los requisitos son disyuntivos (basta uno).

use std::collections::HashSet;

use crate::models::{Curso, EstadoConvalidacion};

/// Marca qué cursos pueden matricularse dado el estado de convalidación.
///
/// `con_requisitos = false` indica que el dataset no traía la columna
/// REQUISITOS: en ese caso nadie es matriculable y el lote sigue corriendo
/// sin tratarlo como error.
pub fn calcular_matriculables(
    cursos: &[Curso],
    estados: &[EstadoConvalidacion],
    con_requisitos: bool,
) -> Vec<bool> {
    if !con_requisitos {
        return vec![false; cursos.len()];
    }

    let aprobados: HashSet<String> = cursos
        .iter()
        .zip(estados.iter())
        .filter(|(_, e)| **e == EstadoConvalidacion::Convalidado)
        .map(|(c, _)| c.curso.trim().to_uppercase())
        .collect();

    cursos
        .iter()
        .zip(estados.iter())
        .map(|(c, e)| {
            // un curso convalidado ya está satisfecho, no se re-ofrece
            if *e == EstadoConvalidacion::Convalidado {
                false
            } else {
                cumple_requisito(&c.requisitos, &aprobados)
            }
        })
        .collect()
}

/// Evalúa el texto de requisitos contra el set de cursos convalidados.
/// Texto vacío o el placeholder "nan" cuentan como "sin requisitos".
pub fn cumple_requisito(requisitos: &str, aprobados: &HashSet<String>) -> bool {
    let req = requisitos.trim();
    if req.is_empty() || req.eq_ignore_ascii_case("nan") {
        return true;
    }

    req.split([';', ',', '/'])
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .any(|p| aprobados.contains(&p.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(nombres: &[&str]) -> HashSet<String> {
        nombres.iter().map(|s| s.to_uppercase()).collect()
    }

    #[test]
    fn sin_requisitos_siempre_cumple() {
        let ok = set(&[]);
        assert!(cumple_requisito("", &ok));
        assert!(cumple_requisito("   ", &ok));
        assert!(cumple_requisito("nan", &ok));
        assert!(cumple_requisito("NaN", &ok));
    }

    #[test]
    fn disyuncion_basta_un_requisito() {
        let ok = set(&["CALC1"]);
        assert!(cumple_requisito("CALC1; FISICA1", &ok));
        assert!(cumple_requisito("FISICA1, calc1", &ok));
        assert!(!cumple_requisito("FISICA1 / QUIMICA1", &ok));
    }

    #[test]
    fn comparacion_insensible_a_mayusculas() {
        let ok = set(&["CALC1"]);
        assert!(cumple_requisito("calc1", &ok));
        let solo_otro = set(&["CALC3"]);
        assert!(!cumple_requisito("calc1", &solo_otro));
    }

    #[test]
    fn solo_delimitadores_no_cumple() {
        // ";" no es vacío ni "nan", y no deja tokens: no cumple
        let ok = set(&["CALC1"]);
        assert!(!cumple_requisito(";", &ok));
        assert!(!cumple_requisito(" , / ", &ok));
    }
}
