use ccli::adapters::outbound::console::StderrProgressReporter;
use ccli::adapters::outbound::filesystem::FileSystemReader;
use ccli::adapters::outbound::network::{
    GraphQlArchiveUploader, GraphQlCatalogClient, HttpServerProbe,
};
use ccli::application::dto::{OutputFormat, UpdateMode};
use ccli::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use ccli::application::use_cases::{
    render_template, AddPartUseCase, AddProfileUseCase, DeletePartUseCase, ExportUseCase,
    FindUseCase, PingUseCase, QueryUseCase, UpdatePartUseCase, UploadArchiveUseCase,
};
use ccli::catalog::domain::CatalogId;
use ccli::cli::{AddTarget, Args, Command, ExportTarget, EXAMPLES};
use ccli::config::{self, Config};
use ccli::logging;
use ccli::ports::outbound::{DeleteOptions, ProgressReporter};
use ccli::shared::error::ExitCode;
use ccli::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing::subscriber::DefaultGuard;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings {
        config_path: args.config.as_deref(),
        verbose: args.verbose,
    };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(args.command, &settings))
}

/// Command-line settings that locate the config file
struct Settings<'a> {
    config_path: Option<&'a Path>,
    verbose: bool,
}

/// Validated config plus the log subscriber, for commands that reach the server.
/// Logging stops when the session is dropped.
struct Session {
    config: Config,
    _log_guard: DefaultGuard,
}

impl Settings<'_> {
    /// Loads the config and starts logging
    fn open(&self, command: &str) -> Result<Session> {
        let config = config::load_config(self.config_path)?;
        let log_guard = logging::init(&config, self.verbose)?;
        tracing::debug!(command, "starting command");
        Ok(Session {
            config,
            _log_guard: log_guard,
        })
    }
}

fn catalog_client(config: &Config) -> Result<GraphQlCatalogClient> {
    GraphQlCatalogClient::new(config.server_addr.clone(), config.insecure_tls)
}

/// Prints a find/query/mutation result to stdout
fn print_document<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let document = serde_json::to_value(value)?;
    let output = FormatterFactory::create(format, config.json_indent).format(&document)?;
    PresenterFactory::create(PresenterType::Stdout).present(&output)
}

/// Writes an exported record to `output`, or stdout without one
fn write_export(content: &str, output: Option<PathBuf>) -> Result<()> {
    let destination = output.clone();
    PresenterFactory::create(PresenterType::from_output(output)).present(content)?;
    if let Some(path) = destination {
        StderrProgressReporter::new()
            .report_completion(&format!("✅ Exported to {}", path.display()));
    }
    Ok(())
}

async fn dispatch(command: Command, settings: &Settings<'_>) -> Result<()> {
    match command {
        Command::Add { target } => match target {
            AddTarget::Part { file } => {
                let session = settings.open("add part")?;
                let use_case = AddPartUseCase::new(
                    FileSystemReader::new(),
                    catalog_client(&session.config)?,
                    StderrProgressReporter::new(),
                );
                let report = use_case.execute(&file).await?;
                print_document(&report.part, OutputFormat::Json, &session.config)
            }
            AddTarget::Profile { file } => {
                let session = settings.open("add profile")?;
                let use_case = AddProfileUseCase::new(
                    FileSystemReader::new(),
                    catalog_client(&session.config)?,
                    StderrProgressReporter::new(),
                );
                use_case.execute(&file).await?;
                Ok(())
            }
        },
        Command::Update { file } => {
            update(&file, UpdateMode::Sparse, &settings.open("update")?).await
        }
        Command::Set { file } => update(&file, UpdateMode::Overwrite, &settings.open("set")?).await,
        Command::Delete {
            catalog_id,
            recursive,
            force,
        } => {
            let session = settings.open("delete")?;
            let use_case = DeletePartUseCase::new(
                catalog_client(&session.config)?,
                StderrProgressReporter::new(),
            );
            use_case
                .execute(
                    &CatalogId::new(catalog_id),
                    DeleteOptions { recursive, force },
                )
                .await
        }
        Command::Find { target, format } => {
            let session = settings.open("find")?;
            let use_case = FindUseCase::new(
                catalog_client(&session.config)?,
                StderrProgressReporter::new(),
            );
            match use_case.execute(&target.to_request()).await? {
                Some(document) => print_document(&document, format, &session.config),
                None => Ok(()),
            }
        }
        Command::Export { target } => match target {
            ExportTarget::Part { by, value, output } => {
                let session = settings.open("export part")?;
                let content = ExportUseCase::new(catalog_client(&session.config)?)
                    .export_part(&by.lookup(&value))
                    .await?;
                write_export(&content, output)
            }
            ExportTarget::Template { kind, output } => {
                let content = render_template(&kind.into())?;
                write_export(&content, output)
            }
        },
        Command::Query { query, format } => {
            let session = settings.open("query")?;
            let response = QueryUseCase::new(catalog_client(&session.config)?)
                .execute(&query)
                .await?;
            print_document(&response, format, &session.config)
        }
        Command::Upload { path } => {
            let session = settings.open("upload")?;
            let config = &session.config;
            let uploader =
                GraphQlArchiveUploader::new(config.server_addr.clone(), config.insecure_tls)?;
            let receipt = UploadArchiveUseCase::new(uploader, StderrProgressReporter::new())
                .execute(&path)
                .await?;
            print_document(&receipt, OutputFormat::Json, config)
        }
        Command::Ping => {
            let session = settings.open("ping")?;
            let config = &session.config;
            let probe = HttpServerProbe::new(config.server_addr.clone(), config.insecure_tls)?;
            let status = PingUseCase::new(probe).execute(&config.server_addr).await?;
            println!("Ping Result: Success (HTTP {})", status);
            Ok(())
        }
        Command::Examples => {
            println!("{}", EXAMPLES);
            Ok(())
        }
    }
}

async fn update(file: &Path, mode: UpdateMode, session: &Session) -> Result<()> {
    let use_case = UpdatePartUseCase::new(
        FileSystemReader::new(),
        catalog_client(&session.config)?,
        StderrProgressReporter::new(),
    );
    let report = use_case.execute(file, mode).await?;
    print_document(&report.part, OutputFormat::Json, &session.config)
}
