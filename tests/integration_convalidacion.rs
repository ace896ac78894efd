// Flujo completo: ficha -> validación -> selección -> requisitos -> reporte.

use convalidador::algorithm::procesar_convalidacion;
use convalidador::api_json::{parse_json_ficha, validar_ficha};
use convalidador::models::{Curso, EstadoConvalidacion};
use convalidador::reporte::{resumen_formulario, tabla_fija_27, MAX_FILAS_TABLA};

fn curso(ciclo: &str, cr: i64, nombre: &str, requisitos: &str) -> Curso {
    Curso {
        carrera: "INGENIERIA DE SISTEMAS COMPUTACIONALES".to_string(),
        unidad_negocio: "WA".to_string(),
        ciclo: ciclo.to_string(),
        cr,
        curso: nombre.to_string(),
        materia: "Matemáticas".to_string(),
        codigo_curso: format!("SIS-{}", cr),
        requisitos: requisitos.to_string(),
    }
}

fn malla_de_prueba() -> Vec<Curso> {
    vec![
        curso("1", 4, "Matemática básica", ""),
        curso("1", 3, "Comunicación", ""),
        curso("1", 3, "Introducción a la ingeniería", ""),
        curso("2", 4, "Cálculo 1", "Matemática básica"),
        curso("2", 3, "Redacción", "Comunicación"),
        curso("3", 4, "Cálculo 2", "Cálculo 1"),
    ]
}

#[test]
fn flujo_completo_desde_la_ficha() {
    let ficha = parse_json_ficha(
        r#"
        {
            "nombres": "María José",
            "apellidos": "Quispe Rojas",
            "codigo": "N00123456",
            "sede": "LOS OLIVOS",
            "carrera": "INGENIERIA DE SISTEMAS COMPUTACIONALES",
            "unidad": "WA",
            "crd": "13"
        }
        "#,
    )
    .expect("ficha válida");

    let crd = validar_ficha(&ficha).expect("CRD parseable");
    assert_eq!(crd, 13.0);

    let resultado = procesar_convalidacion(malla_de_prueba(), crd, ficha.tolerancia, true);

    // ciclo 1 completo (10) + Cálculo 1 o Redacción del ciclo 2 hasta 13
    assert_eq!(resultado.total_convalidado, 13);
    assert_eq!(resultado.limite_total, 15);
    assert!(resultado.total_convalidado <= resultado.limite_total);

    // el resumen del formulario arrastra los totales reales
    let resumen = resumen_formulario(&ficha, &resultado);
    assert!(resumen
        .iter()
        .any(|(campo, valor)| campo.contains("convalidados") && valor == "13"));
    assert!(resumen
        .iter()
        .any(|(_, valor)| valor == "Quispe Rojas, María José"));
}

#[test]
fn tablas_fijas_de_27_filas() {
    let resultado = procesar_convalidacion(malla_de_prueba(), 10.0, 2, true);

    let tabla = tabla_fija_27(&resultado.convalidados());
    assert_eq!(tabla.filas.len(), MAX_FILAS_TABLA);
    assert_eq!(tabla.total_cr, resultado.total_convalidado);
    // las filas con datos van en mayúsculas
    assert_eq!(tabla.filas[0].curso, "MATEMÁTICA BÁSICA");
    assert_eq!(tabla.filas[3].curso, "");
}

#[test]
fn serializacion_aplana_el_curso() {
    let resultado = procesar_convalidacion(malla_de_prueba(), 10.0, 2, true);
    let json = serde_json::to_value(&resultado.cursos[0]).expect("serializa");

    assert_eq!(json["curso"], "Matemática básica");
    assert_eq!(json["cr"], 4);
    assert_eq!(json["estado"], "CONVALIDADO");
    assert_eq!(json["puede_matricular"], false);
}

#[test]
fn estados_consistentes_con_los_indices() {
    let resultado = procesar_convalidacion(malla_de_prueba(), 10.0, 2, true);

    for (i, evaluado) in resultado.cursos.iter().enumerate() {
        let convalidado = resultado.seleccion.contains(&i);
        assert_eq!(
            evaluado.estado == EstadoConvalidacion::Convalidado,
            convalidado
        );
        if convalidado {
            assert!(!evaluado.puede_matricular);
        }
    }
}

#[test]
fn lote_json_minimo_usa_defaults() {
    let ficha = parse_json_ficha(
        r#"{"nombres":"Ana","apellidos":"Pérez","codigo":"N1","sede":"TRUJILLO","carrera":"DERECHO","unidad":"UG","crd":"0"}"#,
    )
    .expect("parsea");
    assert_eq!(ficha.plan, "2025G");
    assert_eq!(ficha.tolerancia, 2);

    let crd = validar_ficha(&ficha).expect("CRD 0 es válido");
    let resultado = procesar_convalidacion(malla_de_prueba(), crd, ficha.tolerancia, true);
    assert_eq!(resultado.total_convalidado, 0);
    assert!(resultado.seleccion.is_empty());
}
