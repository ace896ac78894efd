// seleccion.rs - selección de convalidación secuencial por ciclo
//
// Política académica: los créditos se agotan en orden de ciclo (no se
// convalida un curso de 5to ciclo antes de agotar lo disponible en 1-4),
// el total no puede pasar de CRD + tolerancia, y debe alcanzar el CRD
// cuando sea alcanzable. El óptimo es local a cada ciclo, acumulado ciclo
// a ciclo; NO se busca el óptimo global entre todos los ciclos.

use crate::algorithm::subset::subset_best_between;
use crate::models::Curso;

/// Tolerancia por defecto en unidades de crédito (CRD + 2).
pub const TOLERANCIA_DEFAULT: i64 = 2;

/// Selecciona qué cursos convalidar para un CRD dado.
///
/// Devuelve los índices (sobre `cursos`) seleccionados y la suma de créditos
/// lograda. El CRD llega como float (así lo entrega el formulario) y se
/// trunca a entero; cursos con ciclo 0 o créditos <= 0 nunca se seleccionan.
pub fn seleccionar_convalidacion(cursos: &[Curso], crd: f64, tolerancia: i64) -> (Vec<usize>, i64) {
    if cursos.is_empty() {
        return (Vec::new(), 0);
    }

    let crd_int = crd as i64;
    let limite_total = crd_int + tolerancia;

    let mut ciclos: Vec<i64> = cursos
        .iter()
        .map(|c| c.ciclo_num())
        .filter(|&n| n > 0)
        .collect();
    ciclos.sort_unstable();
    ciclos.dedup();

    let mut seleccion_total: Vec<usize> = Vec::new();
    let mut suma_total: i64 = 0;

    for ciclo in ciclos {
        // Si ya llegamos al CRD, no tocar ciclos posteriores
        if suma_total >= crd_int {
            break;
        }

        let max_restante = limite_total - suma_total;
        if max_restante <= 0 {
            break;
        }
        let min_restante = crd_int - suma_total;

        // pool del ciclo ordenado por créditos descendentes; el sort estable
        // conserva el orden del dataset entre cursos con igual crédito
        let mut pool: Vec<(usize, i64)> = cursos
            .iter()
            .enumerate()
            .filter(|(_, c)| c.ciclo_num() == ciclo)
            .map(|(i, c)| (i, c.cr))
            .collect();
        pool.sort_by(|a, b| b.1.cmp(&a.1));

        let (sel_c, suma_c) = subset_best_between(&pool, min_restante, max_restante);

        // Un ciclo que no puede aportar nada se salta: ciclos posteriores con
        // cursos más chicos aún pueden llenar el hueco
        if suma_c <= 0 {
            continue;
        }

        seleccion_total.extend(sel_c);
        suma_total += suma_c;

        if suma_total >= crd_int {
            break;
        }
    }

    (seleccion_total, suma_total)
}
