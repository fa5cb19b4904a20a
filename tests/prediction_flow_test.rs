// ==========================================
// Teste de fluxo completo de previsão
// ==========================================
// Cenário: classificação carregada + eventos de convocação →
// PredictionApi (previsão e progresso) sobre banco real (tempfile).
// ==========================================

use chrono::NaiveDate;
use concurso_radar::api::{CandidateApi, PredictionApi};
use concurso_radar::config::ConfigManager;
use concurso_radar::db;
use concurso_radar::domain::types::{CandidateStatus, ConfidenceTier};
use concurso_radar::domain::ConvocationEvent;
use concurso_radar::repository::{
    CandidateRepository, ConvocationRepository,
};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

// ==========================================
// Auxiliares de teste
// ==========================================

const COMPETITION: &str = "pref-sp-2024";

struct Fixture {
    candidate_api: CandidateApi,
    prediction_api: PredictionApi<ConfigManager>,
    candidate_repo: Arc<CandidateRepository>,
    convocation_repo: Arc<ConvocationRepository>,
    _file: NamedTempFile,
}

fn fixture() -> Fixture {
    let file = NamedTempFile::new().unwrap();
    let conn = db::open_sqlite_connection(file.path().to_str().unwrap()).unwrap();
    db::init_schema(&conn).unwrap();
    let conn = Arc::new(Mutex::new(conn));

    let config = Arc::new(ConfigManager::from_connection(conn.clone()).unwrap());
    let candidate_repo = Arc::new(CandidateRepository::from_connection(conn.clone()));
    let convocation_repo = Arc::new(ConvocationRepository::from_connection(conn));

    Fixture {
        candidate_api: CandidateApi::new(candidate_repo.clone()),
        prediction_api: PredictionApi::new(
            candidate_repo.clone(),
            convocation_repo.clone(),
            config,
        ),
        candidate_repo,
        convocation_repo,
        _file: file,
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Candidato {i}")).collect()
}

fn add_event(fixture: &Fixture, date: NaiveDate, ids: Vec<String>) {
    fixture
        .convocation_repo
        .insert(&ConvocationEvent::with_calls(COMPETITION, date, ids))
        .unwrap();
}

/// Marca como chamados os candidatos até uma posição
fn call_up_to(fixture: &Fixture, position: i64) -> Vec<String> {
    let candidates = fixture.candidate_api.list_candidates(COMPETITION).unwrap();
    let mut called_ids = Vec::new();
    for candidate in candidates.iter().filter(|c| c.position <= position) {
        fixture
            .candidate_repo
            .update_status(COMPETITION, &candidate.id, CandidateStatus::Called)
            .unwrap();
        called_ids.push(candidate.id.clone());
    }
    called_ids
}

// ==========================================
// Casos de teste
// ==========================================

#[tokio::test]
async fn test_no_history_yields_null_prediction_and_zero_progress() {
    let fixture = fixture();
    fixture
        .candidate_api
        .register_batch(COMPETITION, &names(50), 1)
        .unwrap();

    let result = fixture
        .prediction_api
        .predict_call_date_at(COMPETITION, 40, d(2024, 6, 3))
        .await
        .unwrap();
    assert_eq!(result.predicted_date, None);
    assert_eq!(result.confidence, ConfidenceTier::Low);
    assert_eq!(result.remaining_calls, 39);

    assert_eq!(
        fixture.prediction_api.call_progress(COMPETITION, 40).unwrap(),
        0
    );
}

#[tokio::test]
async fn test_reached_position_full_progress_and_zero_remaining() {
    let fixture = fixture();
    fixture
        .candidate_api
        .register_batch(COMPETITION, &names(30), 1)
        .unwrap();
    let called = call_up_to(&fixture, 10);
    add_event(&fixture, d(2024, 5, 6), called);

    // toda posição ≤ 10 está alcançada
    for position in [1, 5, 10] {
        let result = fixture
            .prediction_api
            .predict_call_date_at(COMPETITION, position, d(2024, 6, 3))
            .await
            .unwrap();
        assert_eq!(result.remaining_calls, 0, "posição {position}");
        assert_eq!(
            fixture
                .prediction_api
                .call_progress(COMPETITION, position)
                .unwrap(),
            100
        );
    }

    // 10 de 20 chamados → 50%
    assert_eq!(
        fixture.prediction_api.call_progress(COMPETITION, 20).unwrap(),
        50
    );
}

#[tokio::test]
async fn test_three_event_history_prediction() {
    // eventos: 2024-01-01 (2), 2024-01-15 (3), 2024-02-01 (5);
    // maior posição chamada 10; consulta para a posição 20
    let fixture = fixture();
    fixture
        .candidate_api
        .register_batch(COMPETITION, &names(30), 1)
        .unwrap();
    let called = call_up_to(&fixture, 10);

    add_event(&fixture, d(2024, 1, 1), called[0..2].to_vec());
    add_event(&fixture, d(2024, 1, 15), called[2..5].to_vec());
    add_event(&fixture, d(2024, 2, 1), called[5..10].to_vec());

    let result = fixture
        .prediction_api
        .predict_call_date_at(COMPETITION, 20, d(2024, 2, 5))
        .await
        .unwrap();

    assert_eq!(result.remaining_calls, 10);
    assert!(result.predicted_date.unwrap() > d(2024, 2, 1));
    // 3 datas com chamada: nunca High
    assert!(matches!(
        result.confidence,
        ConfidenceTier::Low | ConfidenceTier::Medium
    ));

    let scenarios = result.scenarios.unwrap();
    assert!(scenarios.optimistic.business_days <= scenarios.realistic.business_days);
    assert!(scenarios.realistic.business_days <= scenarios.pessimistic.business_days);
}

#[tokio::test]
async fn test_rates_are_rounded_and_days_are_integers() {
    let fixture = fixture();
    fixture
        .candidate_api
        .register_batch(COMPETITION, &names(40), 1)
        .unwrap();
    let called = call_up_to(&fixture, 7);
    add_event(&fixture, d(2024, 5, 6), called[0..3].to_vec());
    add_event(&fixture, d(2024, 5, 14), called[3..5].to_vec());
    add_event(&fixture, d(2024, 5, 23), called[5..7].to_vec());

    let result = fixture
        .prediction_api
        .predict_call_date_at(COMPETITION, 30, d(2024, 6, 3))
        .await
        .unwrap();

    for rate in [
        result.rates.overall,
        result.rates.last_30,
        result.rates.last_90,
        result.rates.dynamic,
    ] {
        assert!(((rate * 100.0).round() - rate * 100.0).abs() < 1e-9, "{rate}");
    }
    assert!(result.estimated_business_days > 0);
}

#[tokio::test]
async fn test_invalid_input_rejected() {
    let fixture = fixture();
    assert!(fixture
        .prediction_api
        .predict_call_date_at("", 10, d(2024, 6, 3))
        .await
        .is_err());
    assert!(fixture
        .prediction_api
        .predict_call_date_at(COMPETITION, 0, d(2024, 6, 3))
        .await
        .is_err());
    assert!(fixture.prediction_api.call_progress(COMPETITION, -5).is_err());
}
