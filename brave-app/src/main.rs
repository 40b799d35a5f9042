use brave_common::observability::{LogConfig, init_logging};
use brave_common::{EXIT_FAILURE, SearchError};
use brave_config::SearchConfigLoader;
use brave_web::brave::BRAVE_API_BASE;
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::process;

mod app;
mod cli;

const DEFAULT_PROGRAM: &str = "brave-search";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let prog = program_name();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EXIT_FAILURE } else { 0 });
        }
    };

    let config = match SearchConfigLoader::new().load() {
        Ok(config) => config,
        Err(e) => fail(&prog, SearchError::Config(e.to_string())),
    };

    if let Err(e) = init_logging(LogConfig {
        log_dir: config.log_dir.clone(),
        ..LogConfig::default()
    }) {
        eprintln!("{prog}: logging disabled: {e:#}");
    }

    match app::run(&cli, &config, BRAVE_API_BASE).await {
        Ok(output) => println!("{output}"),
        Err(e) => fail(&prog, e),
    }
}

fn fail(prog: &str, err: SearchError) -> ! {
    tracing::debug!(kind = ?err.kind(), "search.failed");
    eprintln!("{prog}: {err}");
    process::exit(err.exit_code());
}

/// Basename of `argv[0]`, used to prefix error lines.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
