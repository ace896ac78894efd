// Tests de la evaluación de requisitos sobre el resultado de una selección.

use convalidador::algorithm::{calcular_matriculables, procesar_convalidacion};
use convalidador::models::{Curso, EstadoConvalidacion};

fn curso(ciclo: &str, cr: i64, nombre: &str, requisitos: &str) -> Curso {
    Curso {
        carrera: "INGENIERIA DE SISTEMAS".to_string(),
        unidad_negocio: "WA".to_string(),
        ciclo: ciclo.to_string(),
        cr,
        curso: nombre.to_string(),
        materia: String::new(),
        codigo_curso: String::new(),
        requisitos: requisitos.to_string(),
    }
}

use EstadoConvalidacion::{Convalidado, NoConvalidado};

#[test]
fn convalidado_nunca_es_matriculable() {
    let cursos = vec![curso("1", 3, "Comunicación", "")];
    let puede = calcular_matriculables(&cursos, &[Convalidado], true);
    assert_eq!(puede, vec![false]);
}

#[test]
fn sin_requisitos_es_matriculable() {
    let cursos = vec![
        curso("1", 3, "Comunicación", ""),
        curso("1", 3, "Matemática", "   "),
        curso("1", 3, "Física", "nan"),
        curso("1", 3, "Química", "NaN"),
    ];
    let estados = vec![NoConvalidado; 4];
    let puede = calcular_matriculables(&cursos, &estados, true);
    assert_eq!(puede, vec![true, true, true, true]);
}

#[test]
fn requisito_cubierto_por_convalidado() {
    let cursos = vec![
        curso("1", 3, "Matemática básica", ""),
        curso("2", 4, "Cálculo 1", "Matemática básica"),
        curso("3", 4, "Cálculo 2", "Cálculo 1"),
    ];
    let estados = vec![Convalidado, NoConvalidado, NoConvalidado];
    let puede = calcular_matriculables(&cursos, &estados, true);
    // Cálculo 1 tiene su requisito convalidado; Cálculo 2 no
    assert_eq!(puede, vec![false, true, false]);
}

#[test]
fn requisitos_alternativos_basta_uno() {
    let cursos = vec![
        curso("1", 3, "Matemática básica", ""),
        curso("1", 3, "Nivelación de matemática", ""),
        curso("2", 4, "Cálculo 1", "Matemática básica; Nivelación de matemática"),
    ];
    let estados = vec![NoConvalidado, Convalidado, NoConvalidado];
    let puede = calcular_matriculables(&cursos, &estados, true);
    assert!(puede[2]);
}

#[test]
fn comparacion_ignora_mayusculas_y_espacios() {
    let cursos = vec![
        curso("1", 3, "matemática básica", ""),
        curso("2", 4, "Cálculo 1", "  MATEMÁTICA BÁSICA  "),
    ];
    let estados = vec![Convalidado, NoConvalidado];
    let puede = calcular_matriculables(&cursos, &estados, true);
    assert!(puede[1]);
}

#[test]
fn separadores_coma_y_slash() {
    let cursos = vec![
        curso("1", 3, "A", ""),
        curso("1", 3, "B", ""),
        curso("2", 3, "C", "A, Z"),
        curso("2", 3, "D", "Z / B"),
    ];
    let estados = vec![Convalidado, Convalidado, NoConvalidado, NoConvalidado];
    let puede = calcular_matriculables(&cursos, &estados, true);
    assert_eq!(&puede[2..], &[true, true]);
}

#[test]
fn requisito_no_cubierto_bloquea() {
    let cursos = vec![curso("2", 4, "Cálculo 1", "Matemática básica")];
    let puede = calcular_matriculables(&cursos, &[NoConvalidado], true);
    assert_eq!(puede, vec![false]);
}

#[test]
fn dataset_sin_columna_requisitos_deja_todo_en_falso() {
    let cursos = vec![curso("1", 3, "Comunicación", ""), curso("1", 3, "Física", "")];
    let estados = vec![NoConvalidado, NoConvalidado];
    let puede = calcular_matriculables(&cursos, &estados, false);
    assert_eq!(puede, vec![false, false]);
}

#[test]
fn reevaluar_con_los_mismos_estados_da_lo_mismo() {
    let cursos = vec![
        curso("1", 4, "Matemática básica", ""),
        curso("2", 4, "Cálculo 1", "Matemática básica"),
        curso("2", 3, "Redacción", "Comunicación"),
        curso("3", 4, "Cálculo 2", "Cálculo 1 / Matemática avanzada"),
    ];
    let estados = vec![Convalidado, NoConvalidado, NoConvalidado, NoConvalidado];

    // la evaluación no muta estados ni cursos: repetirla sobre la misma
    // tabla de estados produce exactamente el mismo vector
    let primera = calcular_matriculables(&cursos, &estados, true);
    let segunda = calcular_matriculables(&cursos, &estados, true);
    assert_eq!(primera, segunda);
    assert_eq!(primera, vec![false, true, false, false]);

    // también sin columna de requisitos
    let sin_req_1 = calcular_matriculables(&cursos, &estados, false);
    let sin_req_2 = calcular_matriculables(&cursos, &estados, false);
    assert_eq!(sin_req_1, sin_req_2);
}

#[test]
fn pipeline_marca_matriculables_segun_la_seleccion() {
    let cursos = vec![
        curso("1", 4, "Matemática básica", ""),
        curso("1", 3, "Comunicación", ""),
        curso("2", 4, "Cálculo 1", "Matemática básica"),
        curso("2", 3, "Redacción", "Comunicación"),
    ];
    // CRD 7 + 2: se convalida exactamente el ciclo 1
    let resultado = procesar_convalidacion(cursos, 7.0, 2, true);
    assert_eq!(resultado.total_convalidado, 7);

    let matriculables: Vec<&str> = resultado
        .matriculables()
        .iter()
        .map(|c| c.curso.curso.as_str())
        .collect();
    assert_eq!(matriculables, vec!["Cálculo 1", "Redacción"]);
}
