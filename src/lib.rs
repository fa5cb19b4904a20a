// ==========================================
// Concurso Radar - biblioteca principal
// ==========================================
// Sistema de apoio ao candidato: acompanhamento de convocações,
// previsão de chamada e checklist de documentos de posse.
// ==========================================

// ==========================================
// Módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de repositório - acesso a dados
pub mod repository;

// Camada de engine - regras de negócio
pub mod engine;

// Camada de configuração
pub mod config;

// Infraestrutura de banco (conexão/PRAGMA unificados)
pub mod db;

// Sistema de logging
pub mod logging;

// Camada de API - interface de negócio
pub mod api;

// ==========================================
// Reexportação de tipos centrais
// ==========================================

// Tipos de domínio
pub use domain::types::{
    CandidateStatus, ConfidenceTier, DocumentKind, ValidityPeriod,
};

// Entidades de domínio
pub use domain::{
    CallDay, Candidate, ConvocationEvent, Document, DocumentStatus, DocumentSummary,
    PredictionResult, RateBreakdown, Scenario, ScenarioRange,
};

// Engines
pub use engine::{
    CallSeriesAggregator, DiffAr1Forecaster, DocumentEligibilityEngine, EligibilityCore,
    PredictionEngine, RateEstimator,
};

// API
pub use api::{CandidateApi, DocumentApi, PredictionApi};

// ==========================================
// Constantes
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "Concurso Radar";
