// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Un curso del dataset de mallas. Inmutable una vez cargado; los estados de
/// convalidación y matriculabilidad viven aparte (ver `CursoEvaluado`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curso {
    pub carrera: String,
    pub unidad_negocio: String,
    /// Etiqueta de ciclo tal como viene del Excel ("Ciclo 3", "3", "III"...)
    pub ciclo: String,
    /// Créditos ya coaccionados a entero; valores no numéricos quedan en 0.
    pub cr: i64,
    pub curso: String,
    pub materia: String,
    pub codigo_curso: String,
    pub requisitos: String,
}

impl Curso {
    /// Número de ciclo: primer entero encontrado en la etiqueta.
    /// Sin dígitos => 0, y el ciclo 0 nunca participa en la selección.
    pub fn ciclo_num(&self) -> i64 {
        primer_entero(&self.ciclo)
    }
}

/// Extrae el primer entero de un texto libre ("Ciclo 10-B" -> 10).
pub fn primer_entero(s: &str) -> i64 {
    let mut digitos = String::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() {
            digitos.push(ch);
        } else if !digitos.is_empty() {
            break;
        }
    }
    digitos.parse::<i64>().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoConvalidacion {
    #[serde(rename = "CONVALIDADO")]
    Convalidado,
    #[serde(rename = "NO CONVALIDADO")]
    NoConvalidado,
}

/// Fila del resultado: el curso original más sus anotaciones derivadas.
/// Se mantiene el orden original del dataset (no se reordena por ciclo).
#[derive(Debug, Clone, Serialize)]
pub struct CursoEvaluado {
    #[serde(flatten)]
    pub curso: Curso,
    pub estado: EstadoConvalidacion,
    pub puede_matricular: bool,
}

/// Salida completa del pipeline de convalidación para un estudiante.
#[derive(Debug, Clone, Serialize)]
pub struct ResultadoConvalidacion {
    /// Todos los cursos candidatos, anotados, en el orden original.
    pub cursos: Vec<CursoEvaluado>,
    /// Índices (sobre `cursos`) de la selección convalidada.
    pub seleccion: Vec<usize>,
    /// Suma real de créditos de la selección.
    pub total_convalidado: i64,
    pub crd_solicitado: i64,
    /// CRD + tolerancia.
    pub limite_total: i64,
}

impl ResultadoConvalidacion {
    pub fn convalidados(&self) -> Vec<&CursoEvaluado> {
        self.cursos
            .iter()
            .filter(|c| c.estado == EstadoConvalidacion::Convalidado)
            .collect()
    }

    pub fn matriculables(&self) -> Vec<&CursoEvaluado> {
        self.cursos.iter().filter(|c| c.puede_matricular).collect()
    }

    pub fn convalidados_count(&self) -> usize {
        self.seleccion.len()
    }
}
