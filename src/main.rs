use clap::Parser;
use course_advisor::app::one_shot;
use course_advisor::core::ConfigProvider;
use course_advisor::utils::logger;
use course_advisor::{AdvisorError, CliConfig, FieldParser, LocalStorage, Session, Settings};

fn main() {
    let config = CliConfig::parse();

    // 載入並驗證配置
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            exit_with(&e);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting course-advisor");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let result = if config.is_one_shot() {
        run_one_shot(&config, &settings)
    } else {
        run_interactive(&settings).map(|_| 0)
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &AdvisorError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn parser_for(settings: &Settings) -> FieldParser {
    FieldParser::new(settings.delimiter(), settings.quote())
}

fn run_interactive(settings: &Settings) -> course_advisor::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), LocalStorage::new(), parser_for(settings));

    if let Some(file) = settings.catalog_file() {
        session.load_file(file)?;
    }
    session.run()
}

fn run_one_shot(config: &CliConfig, settings: &Settings) -> course_advisor::Result<i32> {
    let file = settings
        .catalog_file()
        .ok_or_else(|| AdvisorError::ConfigError {
            message: "--list and --show need a catalog file (--file or [catalog].file)".to_string(),
        })?;

    let query = match config.show.as_deref() {
        Some(id) => one_shot::Query::Show(id),
        None => one_shot::Query::List,
    };

    one_shot::run(
        &LocalStorage::new(),
        file,
        parser_for(settings),
        query,
        settings.output_format(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
