use anyhow::Context;
use clap::Parser;
use descritivo_funcao::{cli, config, export, loader, render, session};
use cli::{Cli, Commands};
use config::Config;
use descritivo_common::{LookupEngine, MinScore, RecordTable};
use dialoguer::Input;
use loader::cache::TableCache;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("falha ao ler a configuração")?;

    match cli.command {
        Commands::Search { query, base, matching, json } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                println!("Informe o nome da função para buscar.");
                return Ok(());
            }

            let table = session::load_base(&base, &config)?;
            let (engine, min_score) = session::resolve_matching(&matching, &config)?;
            let result = engine.lookup(&table, &query, min_score);

            if json {
                println!("{}", render::render_json(&result)?);
            } else {
                print_engine_banner(&engine);
                print!("{}", render::render_text(&result, min_score));
            }
        }

        Commands::Interactive { base, matching } => {
            let table = session::load_base(&base, &config)?;
            let (engine, min_score) = session::resolve_matching(&matching, &config)?;
            run_interactive(&table, &engine, min_score)?;
        }

        Commands::List { base } => {
            let table = session::load_base(&base, &config)?;
            print!("{}", render::render_listing(&table));
        }

        Commands::Export { base, output } => {
            let table = session::load_base(&base, &config)?;
            let output = output.unwrap_or_else(|| PathBuf::from(export::DEFAULT_EXPORT_NAME));

            export::export_table(&table, &output)
                .with_context(|| format!("falha ao exportar para {}", output.display()))?;
            println!("💾 Base exportada ({} linhas): {}", table.len(), output.display());
        }

        Commands::Config { show, set_min_score, set_scorer, set_base, clear_base } => {
            let mut config = config;

            if let Some(value) = set_min_score {
                config.set_min_score(value)?;
                println!("✔ Sensibilidade padrão: {}", config.min_score);
            }

            if let Some(scorer) = set_scorer {
                config.set_scorer(scorer)?;
                println!("✔ Algoritmo padrão: {}", config.scorer);
            }

            if let Some(path) = set_base {
                config.set_base_path(Some(path))?;
                println!("✔ Base padrão definida");
            }

            if clear_base {
                config.set_base_path(None)?;
                println!("✔ Base padrão removida");
            }

            if show {
                println!("Configuração:");
                println!("  Arquivo: {}", Config::config_path()?.display());
                println!("  Sensibilidade: {}", config.min_score);
                println!("  Algoritmo: {}", config.scorer);
                println!(
                    "  Base: {}",
                    config
                        .resolved_base_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "exemplo".into())
                );
                println!("  Cache: {}", if config.use_cache { "ativado" } else { "desativado" });
            }
        }

        Commands::Cache { clear, info } => {
            let dir = TableCache::default_dir().context("diretório de cache não encontrado")?;
            let cache_path = TableCache::cache_path(&dir);

            if info || !clear {
                if cache_path.exists() {
                    let cache = TableCache::load(&dir);
                    println!("Cache:");
                    println!("  Caminho: {}", cache_path.display());
                    println!("  Bases: {}", cache.len());
                    for (name, rows) in cache.summary() {
                        println!("  - {} ({} linhas)", name, rows);
                    }
                } else {
                    println!("Cache inexistente: {}", cache_path.display());
                }
            }

            if clear {
                match TableCache::clear(&dir) {
                    Ok(true) => println!("✔ Cache removido: {}", cache_path.display()),
                    Ok(false) => println!("Cache inexistente"),
                    Err(e) => println!("Erro ao remover cache: {}", e),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_engine_banner(engine: &LookupEngine) {
    match engine.scorer_name() {
        Some(name) => println!("✓ Usando {} para busca fuzzy\n", name),
        None => println!("⚡ Buscando sem algoritmo fuzzy (texto parcial e palavras-chave)\n"),
    }
}

fn run_interactive(table: &RecordTable, engine: &LookupEngine, min_score: MinScore) -> anyhow::Result<()> {
    print!("{}", render::render_listing(table));
    print_engine_banner(engine);

    loop {
        let query: String = Input::new()
            .with_prompt("Nome da função para buscar (Enter para sair)")
            .allow_empty(true)
            .interact_text()?;

        if query.trim().is_empty() {
            break;
        }

        let result = engine.lookup(table, &query, min_score);
        println!("{}", render::render_text(&result, min_score));
    }

    Ok(())
}
