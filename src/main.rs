use clap::Parser;
use dialoguer::Input;
use seating_common::{share_link, LoadStatus, SearchState, SeatingChartService};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use wedding_seating::{cli, config, error, provider, report};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, SeatingError};
use provider::DataSource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, rule } => {
            let source = DataSource::parse(&config.resolve_data_source(cli.data.as_deref())?);
            let rule = rule.unwrap_or(config.match_rule);
            let data = load_ready(&source).await?;

            // 読み込み完了時に一度だけ構築し、以降は明示的に渡す
            let service = SeatingChartService::new(data.seating_chart, rule);
            tracing::debug!(rule = %service.rule(), assignments = service.chart().len(), "lookup service ready");

            match query {
                Some(query) => {
                    let mut state = SearchState::new(query);
                    state.submit(&service);
                    for line in report::format_outcome(&state) {
                        println!("{}", line);
                    }
                }
                None => run_interactive_search(&service)?,
            }
        }

        Commands::Info => {
            let source = DataSource::parse(&config.resolve_data_source(cli.data.as_deref())?);
            let data = load_ready(&source).await?;
            let today = chrono::Local::now().date_naive();
            for line in report::format_event_info(&data, today) {
                println!("{}", line);
            }
        }

        Commands::Link { query, base } => {
            let base = base
                .or_else(|| config.base_url.clone())
                .ok_or(SeatingError::MissingBaseUrl)?;
            println!("{}", share_link(&base, query.trim())?);
        }

        Commands::Config { set_data_url, set_base_url, set_rule, show } => {
            let mut config = config;
            let changed = set_data_url.is_some() || set_base_url.is_some() || set_rule.is_some();

            if let Some(url) = set_data_url {
                config.data_url = Some(url);
            }
            if let Some(url) = set_base_url {
                config.base_url = Some(url);
            }
            if let Some(rule) = set_rule {
                config.match_rule = rule;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  データ取得先: {}", config.data_url.as_deref().unwrap_or("未設定"));
                println!("  共有リンクURL: {}", config.base_url.as_deref().unwrap_or("未設定"));
                println!("  照合ルール: {}", config.match_rule);
                if let Ok(env) = std::env::var(config::DATA_URL_ENV) {
                    println!("  {} (優先): {}", config::DATA_URL_ENV, env);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 読み込みを完了させる。失敗時は `ERROR:` 行を表示して終了コード1で終了する
async fn load_ready(source: &DataSource) -> Result<seating_common::EventData> {
    let status = provider::load(source, std::io::stderr().is_terminal()).await;
    if let Some(line) = report::format_load_error(&status) {
        eprintln!("{}", line);
        std::process::exit(1);
    }
    match status {
        LoadStatus::Ready(data) => Ok(data),
        _ => Err(SeatingError::Fetch("読み込みが完了しませんでした".into())),
    }
}

/// 対話モード: 空行で終了
fn run_interactive_search(service: &SeatingChartService) -> Result<()> {
    println!("名前を入力してください（空行で終了）");
    loop {
        let name: String = Input::new()
            .with_prompt(seating_common::SEARCH_PLACEHOLDER)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SeatingError::Prompt(e.to_string()))?;

        if name.trim().is_empty() {
            break;
        }

        let mut state = SearchState::new(name);
        state.submit(service);
        for line in report::format_outcome(&state) {
            println!("  {}", line);
        }
    }
    Ok(())
}
