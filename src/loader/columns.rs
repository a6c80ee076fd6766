//! Column detection
//!
//! Header names are matched after trimming and lowercasing:
//! - function name: contains "fun" (Função, Funcao, Nome da função...)
//! - CBO code: equals "cbo"
//! - activities: contains "ativ" (Atividades, Atividade principal...)
//!
//! When several headers match the same rule the leftmost one wins.

use crate::error::{LookupAppError, Result};

/// Positions of the three required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub code: usize,
    pub activities: usize,
}

impl ColumnMap {
    pub fn detect(headers: &[String]) -> Result<Self> {
        let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let name = lowered.iter().position(|h| h.contains("fun"));
        let code = lowered.iter().position(|h| h == "cbo");
        let activities = lowered.iter().position(|h| h.contains("ativ"));

        match (name, code, activities) {
            (Some(name), Some(code), Some(activities)) => Ok(Self {
                name,
                code,
                activities,
            }),
            _ => Err(LookupAppError::MissingColumns {
                found: headers.to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_standard_headers() {
        let map = ColumnMap::detect(&headers(&["Função", "CBO", "Atividades"])).unwrap();
        assert_eq!(map, ColumnMap { name: 0, code: 1, activities: 2 });
    }

    #[test]
    fn test_detect_any_order_and_case() {
        let map = ColumnMap::detect(&headers(&[" ATIVIDADES ", "cbo", "Nome da Funcao"])).unwrap();
        assert_eq!(map, ColumnMap { name: 2, code: 1, activities: 0 });
    }

    #[test]
    fn test_cbo_requires_exact_header() {
        let result = ColumnMap::detect(&headers(&["Função", "Código CBO", "Atividades"]));
        assert!(matches!(result, Err(LookupAppError::MissingColumns { .. })));
    }

    #[test]
    fn test_first_matching_column_wins() {
        let map = ColumnMap::detect(&headers(&[
            "Função",
            "Atividades",
            "CBO",
            "Atividades (resumo)",
        ]))
        .unwrap();
        assert_eq!(map.activities, 1);
    }

    #[test]
    fn test_missing_columns_lists_found_headers() {
        let err = ColumnMap::detect(&headers(&["Cargo", "CBO"])).unwrap_err();
        match &err {
            LookupAppError::MissingColumns { found } => {
                assert_eq!(found, &headers(&["Cargo", "CBO"]));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("Cargo, CBO"));
    }
}
