use clap::{Args, Parser, Subcommand};
use descritivo_common::ScorerKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "descritivo")]
#[command(about = "Consulta de descritivo de função: CBO e atividades", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Exibe logs detalhados
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which base to load
#[derive(Args, Debug, Clone, Default)]
pub struct BaseArgs {
    /// Base de funções (CSV / XLS / XLSX)
    #[arg(short, long)]
    pub base: Option<PathBuf>,

    /// Não usar a base de exemplo quando nenhuma base for informada
    #[arg(long)]
    pub no_sample: bool,

    /// Ignorar o cache da base
    #[arg(long)]
    pub no_cache: bool,
}

/// How to match
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Sensibilidade da busca fuzzy (50-100), menor = mais permissiva
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(50..=100))]
    pub min_score: Option<u8>,

    /// Algoritmo de similaridade (wratio/jaro-winkler/levenshtein/none)
    #[arg(long)]
    pub scorer: Option<ScorerKind>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Busca uma função pelo nome
    Search {
        /// Nome da função (ex: Analista de RH, Enfermeiro)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        base: BaseArgs,

        #[command(flatten)]
        matching: MatchArgs,

        /// Saída em JSON
        #[arg(long)]
        json: bool,
    },

    /// Busca interativa (linha vazia encerra)
    Interactive {
        #[command(flatten)]
        base: BaseArgs,

        #[command(flatten)]
        matching: MatchArgs,
    },

    /// Lista as funções disponíveis na base
    List {
        #[command(flatten)]
        base: BaseArgs,
    },

    /// Exporta a base atual (CSV ou XLSX)
    Export {
        #[command(flatten)]
        base: BaseArgs,

        /// Arquivo de saída (padrão: base_descritivo_funcoes.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exibe/edita a configuração
    Config {
        /// Exibe a configuração
        #[arg(long)]
        show: bool,

        /// Define a sensibilidade padrão (50-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(50..=100))]
        set_min_score: Option<u8>,

        /// Define o algoritmo padrão
        #[arg(long)]
        set_scorer: Option<ScorerKind>,

        /// Define a base padrão
        #[arg(long)]
        set_base: Option<PathBuf>,

        /// Remove a base padrão
        #[arg(long, conflicts_with = "set_base")]
        clear_base: bool,
    },

    /// Gerencia o cache de bases
    Cache {
        /// Remove o cache
        #[arg(long)]
        clear: bool,

        /// Exibe informações do cache
        #[arg(long)]
        info: bool,
    },
}
