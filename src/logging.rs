// ==========================================
// Inicialização do sistema de logging
// ==========================================
// Usa tracing e tracing-subscriber
// Nível de log configurável via variável de ambiente
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa o sistema de logging
///
/// # Variáveis de ambiente
/// - RUST_LOG: filtro de nível de log (padrão: info)
///   Ex.: RUST_LOG=debug ou RUST_LOG=concurso_radar=trace
///
/// # Exemplo
/// ```no_run
/// use concurso_radar::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Inicializa logging para ambiente de testes
///
/// Nível mais verboso, para facilitar depuração
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
