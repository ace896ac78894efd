// Biblioteca raíz del crate `convalidador`.
// Reexporta los módulos principales y la función `run_server` que levanta
// la API HTTP de convalidación.
pub mod algorithm;
pub mod api_json;
pub mod excel;
pub mod lote;
pub mod models;
pub mod reporte;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
