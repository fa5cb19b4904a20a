// ==========================================
// Concurso Radar - agregador de convocações
// ==========================================
// Entrada: eventos de convocação brutos
// Saída: série cronológica (data, chamadas no dia, total acumulado)
// ==========================================
// Regras:
// - Só eventos com has_called=true contribuem.
// - Eventos na mesma data são somados.
// - Evento "true" com lista vazia contribui zero (tolerado).
// - Sem eventos com chamada → série vazia; os estimadores a jusante
//   degradam para "sem previsão disponível".
// ==========================================

use crate::domain::{CallDay, ConvocationEvent};
use std::collections::BTreeMap;

// ==========================================
// CallSeriesAggregator - engine sem estado
// ==========================================
pub struct CallSeriesAggregator;

impl CallSeriesAggregator {
    /// Agrega eventos em série cronológica acumulada
    pub fn aggregate(events: &[ConvocationEvent]) -> Vec<CallDay> {
        // BTreeMap ordena por data
        let mut per_day: BTreeMap<chrono::NaiveDate, u32> = BTreeMap::new();
        for event in events {
            if !event.has_called {
                continue;
            }
            *per_day.entry(event.date).or_insert(0) += event.called_candidate_ids.len() as u32;
        }

        let mut cumulative = 0u32;
        per_day
            .into_iter()
            .map(|(date, called_that_day)| {
                cumulative += called_that_day;
                CallDay {
                    date,
                    called_that_day,
                    cumulative_total: cumulative,
                }
            })
            .collect()
    }
}
