//! Result rendering
//!
//! Plain-text output for the terminal and JSON output for scripting.

use crate::error::Result;
use descritivo_common::{LookupResult, MinScore, Record, RecordTable};

/// Render a lookup result as text
pub fn render_text(result: &LookupResult<'_>, min_score: MinScore) -> String {
    let mut lines = Vec::new();

    match result {
        LookupResult::Exact { hits } => {
            lines.push(format!("🎯 Encontrado {} correspondência(s) exata(s)", hits.len()));
            for record in hits {
                push_record(&mut lines, record, None);
            }
        }
        LookupResult::Fuzzy { hits } => {
            lines.push(format!("✅ {} sugestão(ões) encontrada(s)", hits.len()));
            for hit in hits {
                push_record(&mut lines, hit.record, Some(hit.score));
            }
        }
        LookupResult::Substring { hits } => {
            lines.push(format!(
                "🔍 Encontrado {} correspondência(s) por texto parcial",
                hits.len()
            ));
            for record in hits {
                push_record(&mut lines, record, None);
            }
        }
        LookupResult::Keyword { keywords, hits } => {
            lines.push(format!(
                "🔎 Tentando busca por palavras-chave: {}",
                keywords.join(", ")
            ));
            lines.push(format!(
                "✅ Encontrado {} correspondência(s) por palavras-chave",
                hits.len()
            ));
            for record in hits {
                push_record(&mut lines, record, None);
            }
        }
        LookupResult::NoMatch { suggestions } if !suggestions.is_empty() => {
            lines.push(format!("❌ Nenhuma correspondência com score ≥ {}%", min_score));
            lines.push("🔍 Melhores sugestões:".to_string());
            for s in suggestions {
                lines.push(format!("- {} — {}%", s.record.name(), s.score));
            }
        }
        LookupResult::NoMatch { .. } => {
            lines.push("❌ Nenhuma correspondência encontrada.".to_string());
            lines.push(
                "💡 Dica: tente termos mais curtos, sinônimos ou palavras-chave mais específicas"
                    .to_string(),
            );
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn push_record(lines: &mut Vec<String>, record: &Record, score: Option<u8>) {
    lines.push(String::new());
    lines.push(match score {
        Some(score) => format!("{} — {}%", record.name(), score),
        None => record.name().to_string(),
    });
    lines.push(format!("CBO: {}", record.code()));
    lines.push("Atividades:".to_string());
    lines.extend(record.activities().iter().map(|a| format!("• {}", a)));
}

/// Render a lookup result as pretty JSON
pub fn render_json(result: &LookupResult<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Summary line listing every function name in the base
pub fn render_listing(table: &RecordTable) -> String {
    let names: Vec<&str> = table.names().collect();
    format!(
        "Base carregada — linhas: {}\n📋 Funções disponíveis: {}\n",
        table.len(),
        names.join(", ")
    )
}
