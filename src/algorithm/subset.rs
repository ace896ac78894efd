// subset.rs - subconjunto acotado por suma (DP de alcanzabilidad 0/1)
//
// Dado un pool de (indice, creditos), busca un subconjunto cuya suma:
// - nunca exceda `max_allowed`
// - si existe una suma >= min_needed, devuelve la MENOR de esas sumas
//   (mínimo exceso sobre lo pedido)
// - si no existe, devuelve la MAYOR suma alcanzable por debajo
//
// El DP guarda un subconjunto representante por cada suma alcanzable y el
// primero que llega a una suma gana. Eso hace que el resultado dependa del
// orden de iteración del pool: el llamador debe pasar el pool ya ordenado
// por créditos descendentes para sesgar los empates hacia cursos grandes.

use std::collections::BTreeMap;

/// Devuelve `(indices, suma)` del mejor subconjunto entre `min_needed` y
/// `max_allowed`. Items con créditos <= 0 se ignoran por completo.
pub fn subset_best_between(
    items: &[(usize, i64)],
    min_needed: i64,
    max_allowed: i64,
) -> (Vec<usize>, i64) {
    if items.is_empty() || max_allowed <= 0 {
        return (Vec::new(), 0);
    }

    // suma -> indices del subconjunto representante (el primero encontrado)
    let mut dp: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    dp.insert(0, Vec::new());

    for &(idx, cr) in items {
        if cr <= 0 {
            continue;
        }
        // snapshot descendente: las sumas nuevas de este item no se revisitan
        let sumas: Vec<i64> = dp.keys().rev().copied().collect();
        for s in sumas {
            let ns = s + cr;
            if ns <= max_allowed && !dp.contains_key(&ns) {
                let mut camino = dp[&s].clone();
                camino.push(idx);
                dp.insert(ns, camino);
            }
        }
    }

    // 1) menor suma que cumpla el mínimo sin pasar el tope
    let piso = min_needed.max(0);
    if piso <= max_allowed {
        if let Some((&s, camino)) = dp.range(piso..=max_allowed).next() {
            return (camino.clone(), s);
        }
    }

    // 2) si no se puede, la mayor suma alcanzable por debajo
    match dp.iter().next_back() {
        Some((&s, camino)) => (camino.clone(), s),
        None => (Vec::new(), 0),
    }
}
