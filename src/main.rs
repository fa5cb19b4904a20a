// ==========================================
// Concurso Radar - binário de linha de comando
// ==========================================
// Casca fina: abre o banco no diretório de dados da plataforma,
// garante o esquema e o checklist padrão, e imprime a situação
// (e a previsão, quando uma posição é informada).
//
// Uso: concurso-radar <competition_id> [posição]
// ==========================================

use concurso_radar::api::{DocumentApi, PredictionApi};
use concurso_radar::config::ConfigManager;
use concurso_radar::repository::{
    CandidateRepository, ConvocationRepository, DocumentRepository,
};
use concurso_radar::{db, logging};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

fn default_db_path() -> String {
    let mut dir = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    dir.push("concurso-radar");
    let _ = std::fs::create_dir_all(&dir);
    dir.push("concurso-radar.db");
    dir.to_string_lossy().into_owned()
}

#[tokio::main]
async fn main() {
    logging::init();

    let mut args = std::env::args().skip(1);
    let competition_id = match args.next() {
        Some(id) => id,
        None => {
            eprintln!("uso: concurso-radar <competition_id> [posição]");
            std::process::exit(2);
        }
    };
    let position: Option<i64> = args.next().and_then(|raw| raw.parse().ok());

    let db_path = std::env::var("CONCURSO_RADAR_DB").unwrap_or_else(|_| default_db_path());
    info!(db_path, "abrindo banco");

    if let Err(err) = run(&db_path, &competition_id, position).await {
        error!(%err, "falha na execução");
        std::process::exit(1);
    }
}

async fn run(
    db_path: &str,
    competition_id: &str,
    position: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let conn = db::open_sqlite_connection(db_path)?;
    db::init_schema(&conn)?;
    let conn = Arc::new(Mutex::new(conn));

    let config = Arc::new(ConfigManager::from_connection(conn.clone())?);
    let candidate_repo = Arc::new(CandidateRepository::from_connection(conn.clone()));
    let convocation_repo = Arc::new(ConvocationRepository::from_connection(conn.clone()));
    let document_repo = Arc::new(DocumentRepository::from_connection(conn));

    let document_api = DocumentApi::new(document_repo, config.clone());
    document_api.ensure_default_documents(competition_id)?;

    let summary = document_api.status_summary(competition_id).await?;
    println!(
        "documentos: {}/{} completos ({}%) | vencidos: {} | faltando: {} | vacinas com problema: {}",
        summary.completed,
        summary.total,
        summary.percentage,
        summary.expired,
        summary.missing,
        summary.vaccine_problem,
    );

    if let Some(position) = position {
        let prediction_api = PredictionApi::new(candidate_repo, convocation_repo, config);
        let result = prediction_api
            .predict_call_date(competition_id, position)
            .await?;
        match result.predicted_date {
            Some(date) => println!(
                "posição {}: previsão {} ({} dias úteis, {} chamadas restantes, confiança {})",
                position,
                date,
                result.estimated_business_days,
                result.remaining_calls,
                result.confidence,
            ),
            None => println!(
                "posição {}: sem dados suficientes para prever (confiança {})",
                position, result.confidence
            ),
        }
    }

    Ok(())
}
