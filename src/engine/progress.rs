// ==========================================
// Concurso Radar - progresso da fila
// ==========================================
// Converte "maior posição já chamada" vs "posição alvo" em um
// indicador de 0 a 100.
// ==========================================

/// Percentual de avanço da convocação até uma posição
///
/// # Regra
/// - 0 se ninguém foi chamado
/// - 100 se position ≤ maior posição chamada (alcançado)
/// - senão min(99, round(100·highest/position))
///
/// O teto de 99 é deliberado: 100 fica reservado para "efetivamente
/// chamado", evitando um falso sinal de chegada.
pub fn call_progress(highest_called_position: i64, position: i64) -> u32 {
    if highest_called_position <= 0 {
        return 0;
    }
    if position <= highest_called_position {
        return 100;
    }
    let raw = (100.0 * highest_called_position as f64 / position as f64).round() as u32;
    raw.min(99)
}
