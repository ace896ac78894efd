use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::algorithm::procesar_convalidacion;
use crate::api_json::{validar_ficha, FichaEstudiante};
use crate::excel::{
    filtrar_carrera_unidad, leer_dataset, listar_carreras, listar_unidades, resolver_dataset,
};
use crate::models::CursoEvaluado;
use crate::reporte::{formatear_apellidos_nombres, tabla_fija_27};

#[derive(Deserialize)]
struct LoteRequest {
    /// Ruta del Excel masivo de estudiantes.
    archivo: String,
    /// Carpeta base para la salida; por defecto el CWD.
    salida: Option<String>,
}

fn cursos_json(cursos: &[&CursoEvaluado]) -> Vec<serde_json::Value> {
    cursos
        .iter()
        .map(|c| {
            json!({
                "ciclo": c.curso.ciclo,
                "curso": c.curso.curso,
                "materia": c.curso.materia,
                "codigo_curso": c.curso.codigo_curso,
                "cr": c.curso.cr,
                "requisitos": c.curso.requisitos,
            })
        })
        .collect()
}

/// POST /convalidar: recibe una `FichaEstudiante`, corre la selección y la
/// evaluación de matriculables, y devuelve el resumen con las tablas listas
/// para renderizar.
async fn convalidar_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let ficha: FichaEstudiante = match serde_json::from_value(body_value) {
        Ok(f) => f,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("failed to parse input: {}", e)}))
        }
    };

    let crd = match validar_ficha(&ficha) {
        Ok(c) => c,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let dataset = match leer_dataset(resolver_dataset()) {
        Ok(d) => d,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("Error cargando dataset: {}", e)}))
        }
    };

    let cursos = filtrar_carrera_unidad(&dataset, &ficha.carrera, &ficha.unidad);
    if cursos.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": format!(
                "No hay registros en dataset para Carrera='{}' y Unidad='{}'",
                ficha.carrera, ficha.unidad
            )
        }));
    }

    let resultado = procesar_convalidacion(cursos, crd, ficha.tolerancia, dataset.con_requisitos);

    let convalidados = resultado.convalidados();
    let matriculables = resultado.matriculables();
    let tabla_convalidados = tabla_fija_27(&convalidados);
    let tabla_matriculables = tabla_fija_27(&matriculables);

    let resumen = format!(
        "CRD solicitado: {:.1} | Convalidados: {} | Máximo permitido (CRD+{}): {}",
        crd, resultado.total_convalidado, ficha.tolerancia, resultado.limite_total
    );

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "alumno": formatear_apellidos_nombres(&ficha.apellidos, &ficha.nombres),
        "codigo": ficha.codigo,
        "resumen": resumen,
        "crd_solicitado": resultado.crd_solicitado,
        "limite_total": resultado.limite_total,
        "total_convalidado": resultado.total_convalidado,
        "convalidados_count": resultado.convalidados_count(),
        "convalidados": cursos_json(&convalidados),
        "matriculables": cursos_json(&matriculables),
        "tabla_convalidados": tabla_convalidados,
        "tabla_matriculables": tabla_matriculables,
        "cursos": resultado.cursos,
    }))
}

/// GET /carreras: sin parámetros lista las carreras del dataset; con
/// `?carrera=` lista las unidades de negocio de esa carrera.
async fn carreras_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let dataset = match leer_dataset(resolver_dataset()) {
        Ok(d) => d,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("Error cargando dataset: {}", e)}))
        }
    };

    let qm = query.into_inner();
    match qm.get("carrera").filter(|s| !s.trim().is_empty()) {
        Some(carrera) => {
            let unidades = listar_unidades(&dataset, carrera);
            HttpResponse::Ok().json(json!({"carrera": carrera, "unidades": unidades}))
        }
        None => {
            let carreras = listar_carreras(&dataset);
            HttpResponse::Ok().json(json!({"carreras": carreras}))
        }
    }
}

/// POST /lote: procesa un Excel masivo. El body indica la ruta del archivo;
/// cada fila se procesa de forma independiente y el resumen reporta OK y
/// ERROR por separado.
async fn lote_handler(body: web::Json<LoteRequest>) -> impl Responder {
    let req = body.into_inner();

    let dataset = match leer_dataset(resolver_dataset()) {
        Ok(d) => d,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("Error cargando dataset: {}", e)}))
        }
    };

    let salida = req.salida.unwrap_or_else(|| ".".to_string());
    match crate::lote::procesar_lote(&dataset, &req.archivo, &salida) {
        Ok(resumen) => HttpResponse::Ok().json(json!({"status": "ok", "resumen": resumen})),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"status": "error", "error": format!("{}", e)})),
    }
}

async fn help_handler() -> impl Responder {
    // Ejemplo de ficha para POST /convalidar
    let example = FichaEstudiante {
        nombres: "María José".to_string(),
        apellidos: "Quispe Rojas".to_string(),
        codigo: "N00123456".to_string(),
        sede: "LOS OLIVOS".to_string(),
        plan: "2025G".to_string(),
        carrera: "INGENIERIA DE SISTEMAS COMPUTACIONALES".to_string(),
        unidad: "WA".to_string(),
        crd: "22".to_string(),
        elaborado_nombre: "J. APOLAYA".to_string(),
        elaborado_cargo: "ASISTENTE".to_string(),
        resp_nombre: String::new(),
        resp_cargo: "COORDINADOR".to_string(),
        tolerancia: 2,
    };

    HttpResponse::Ok().json(json!({
        "description": "API de convalidación de créditos. POST /convalidar procesa un estudiante (ver 'convalidar_example'). GET /carreras lista carreras y unidades del dataset. POST /lote procesa un Excel masivo.",
        "convalidar_example": example,
        "lote_example": {"archivo": "estudiantes.xlsx", "salida": "."},
        "note": "El dataset de mallas se resuelve vía CONVA_DATAFILES_DIR o el directorio de trabajo (dataset.xlsx).",
    }))
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .route("/convalidar", web::post().to(convalidar_handler))
            .route("/carreras", web::get().to(carreras_handler))
            .route("/lote", web::post().to(lote_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
