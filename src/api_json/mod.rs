use serde::{Deserialize, Serialize};

/// Ficha de un estudiante a convalidar (formulario interactivo o fila del
/// Excel masivo).
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "nombres": "María José",
///   "apellidos": "Quispe Rojas",
///   "codigo": "N00123456",
///   "sede": "LOS OLIVOS",
///   "plan": "2025G",
///   "carrera": "INGENIERIA DE SISTEMAS COMPUTACIONALES",
///   "unidad": "WA",
///   "crd": "22",
///   "elaborado_nombre": "J. APOLAYA",
///   "elaborado_cargo": "ASISTENTE",
///   "resp_nombre": "",
///   "resp_cargo": "COORDINADOR",
///   "tolerancia": 2
/// }
/// ```
///
/// `crd` viaja como texto tal cual lo tipean: la validación lo convierte a
/// float y rechaza lo no parseable antes de correr la selección.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FichaEstudiante {
    pub nombres: String,
    pub apellidos: String,
    pub codigo: String,
    #[serde(default)]
    pub sede: String,
    #[serde(default = "plan_default")]
    pub plan: String,
    pub carrera: String,
    pub unidad: String,
    pub crd: String,
    #[serde(default)]
    pub elaborado_nombre: String,
    #[serde(default = "cargo_elaborado_default")]
    pub elaborado_cargo: String,
    #[serde(default)]
    pub resp_nombre: String,
    #[serde(default = "cargo_resp_default")]
    pub resp_cargo: String,
    #[serde(default = "tolerancia_default")]
    pub tolerancia: i64,
}

fn plan_default() -> String {
    "2025G".to_string()
}

fn cargo_elaborado_default() -> String {
    "ASISTENTE".to_string()
}

fn cargo_resp_default() -> String {
    "COORDINADOR".to_string()
}

fn tolerancia_default() -> i64 {
    crate::algorithm::TOLERANCIA_DEFAULT
}

pub fn parse_json_ficha(json_str: &str) -> Result<FichaEstudiante, serde_json::Error> {
    serde_json::from_str::<FichaEstudiante>(json_str)
}

/// Valida la ficha antes de procesar y devuelve el CRD ya parseado.
/// Los mensajes replican las validaciones del formulario original.
pub fn validar_ficha(ficha: &FichaEstudiante) -> Result<f64, String> {
    if ficha.nombres.trim().is_empty()
        || ficha.apellidos.trim().is_empty()
        || ficha.codigo.trim().is_empty()
    {
        return Err("Completa Nombre(s), Apellidos y Código".to_string());
    }
    if ficha.sede.trim().is_empty() || ficha.plan.trim().is_empty() {
        return Err("Completa Sede y Plan de estudios".to_string());
    }
    if ficha.carrera.trim().is_empty() || ficha.unidad.trim().is_empty() {
        return Err("Selecciona Carrera y Unidad de Negocio".to_string());
    }

    match ficha.crd.trim().parse::<f64>() {
        Ok(crd) if crd >= 0.0 => Ok(crd),
        _ => Err("CRD inválido".to_string()),
    }
}
