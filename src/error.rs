use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupAppError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato não suportado: {0}. Envie CSV ou Excel (.csv, .xls, .xlsx)")]
    UnsupportedFormat(String),

    #[error("Colunas esperadas não encontradas. Certifique-se de ter colunas: Função, CBO, Atividades. Colunas detectadas: {}", .found.join(", "))]
    MissingColumns { found: Vec<String> },

    #[error("Nenhuma base carregada. Informe --base com um CSV/Excel ou permita a base de exemplo")]
    NoBaseLoaded,

    #[error("Erro ao ler CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erro ao ler planilha: {0}")]
    Spreadsheet(String),

    #[error("Erro ao gerar Excel: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de entrada interativa: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] descritivo_common::Error),
}

impl From<calamine::Error> for LookupAppError {
    fn from(e: calamine::Error) -> Self {
        LookupAppError::Spreadsheet(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupAppError>;
