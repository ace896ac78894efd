// --- Sistema de Convalidación de Créditos - Archivo principal ---

use convalidador::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    println!("=== Sistema de Convalidación de Créditos (API) ===");
    let bind = std::env::var("CONVA_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    println!("Iniciando servidor en http://{}", bind);
    run_server(&bind).await
}
