//! Built-in example base

use crate::error::Result;
use crate::loader::split_activities;
use descritivo_common::{Record, RecordTable};

/// (função, CBO, atividades)
const SAMPLE_ROWS: &[(&str, &str, &str)] = &[
    (
        "Analista de Recursos Humanos",
        "2524-05",
        "Recrutamento; Seleção; Treinamento e desenvolvimento; Administração de pessoal",
    ),
    (
        "Enfermeiro",
        "2235-10",
        "Assistência de enfermagem, administração de medicamentos, plantões, cuidados ao paciente",
    ),
    (
        "Técnico em Enfermagem",
        "3222-05",
        "Cuidados básicos de enfermagem; curativos; aferição de sinais vitais; suporte à equipe",
    ),
    (
        "Coordenador de Vendas",
        "1421-10",
        "Gestão de equipe de vendas; acompanhamento de metas; planejamento comercial",
    ),
    (
        "Auxiliar Administrativo",
        "4110-05",
        "Atendimento ao cliente; organização de documentos; apoio administrativo",
    ),
    (
        "Analista de Remuneração",
        "2524-10",
        "Cálculo de salários; benefícios; pesquisa salarial; estrutura de cargos e salários",
    ),
];

pub fn sample_table() -> Result<RecordTable> {
    let records = SAMPLE_ROWS
        .iter()
        .map(|(name, code, activities)| Record::new(*name, *code, split_activities(activities)))
        .collect::<descritivo_common::Result<Vec<Record>>>()?;

    Ok(RecordTable::new(records))
}
