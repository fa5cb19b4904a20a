// ==========================================
// Concurso Radar - camada de configuração
// ==========================================

pub mod config_manager;
pub mod prediction_config_trait;
pub mod rules_config_trait;

pub use config_manager::ConfigManager;
pub use prediction_config_trait::PredictionConfigReader;
pub use rules_config_trait::RulesConfigReader;
