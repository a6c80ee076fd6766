//! Error messages shown to the user

use descritivo_common::MinScore;
use descritivo_funcao::error::LookupAppError;

#[test]
fn test_missing_columns_message_lists_headers() {
    let err = LookupAppError::MissingColumns {
        found: vec!["Cargo".to_string(), "Código".to_string()],
    };
    let message = err.to_string();

    assert!(message.contains("Função, CBO, Atividades"));
    assert!(message.ends_with("Colunas detectadas: Cargo, Código"));
}

#[test]
fn test_unsupported_format_message() {
    let err = LookupAppError::UnsupportedFormat("base.json".to_string());
    assert!(err.to_string().starts_with("Formato não suportado: base.json"));
}

#[test]
fn test_common_errors_are_transparent() {
    let err: LookupAppError = MinScore::new(20).unwrap_err().into();
    assert_eq!(err.to_string(), "Config error: min score 20 out of range (50-100)");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "negado");
    let err: LookupAppError = io.into();
    assert!(matches!(err, LookupAppError::Io(_)));
}
