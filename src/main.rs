use clap::Parser;
use small_library::config::LogFormat;
use small_library::utils::error::ErrorSeverity;
use small_library::utils::{logger, validation::Validate};
use small_library::{CliConfig, FileActionLog, LibraryError, Shell};

fn exit_code(err: &LibraryError) -> i32 {
    match err.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(err: &LibraryError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        err,
        err.category(),
        err.severity()
    );
    tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
    eprintln!("❌ {}", err.user_friendly_message());
}

fn run(cli: &CliConfig) -> small_library::Result<()> {
    let config = cli.load_library_config()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated");

    let recorder = FileActionLog::new(config.action_log_path());
    let mut catalog = config.build_catalog(recorder)?;
    tracing::info!(
        "📚 {} items and {} members loaded, action log at {}",
        catalog.items().len(),
        catalog.members().len(),
        catalog.recorder().path().display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&mut catalog, stdin.lock(), stdout.lock())
        .with_title(config.library.name.clone())
        .run()
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::info!("Starting small-library");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(err) = run(&cli) {
        report(&err);
        let code = exit_code(&err);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
