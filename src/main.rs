mod config;

/// Version injected at compile time via VITISTACK_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("VITISTACK_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{Config, OutputFormat};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use vitistack_crds::api::v1alpha1;
use vitistack_crds::resource::{FieldMode, Shape};
use vitistack_crds::{Converter, Document};

/// Convert vitistack.io resources through their typed form
#[derive(Parser, Debug)]
#[command(name = "vitistack-convert", version = VERSION, about, long_about = None)]
struct Args {
    /// Log level for debugging
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered kinds
    Kinds,
    /// Normalise JSON or YAML documents: unknown keys dropped, empty fields omitted, kind filled in
    Convert {
        /// Input file, or - for stdin
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Describe the fields of a kind
    Explain {
        /// Kind name, case-insensitive
        kind: String,

        /// Dotted path of a nested field, e.g. spec.disks
        #[arg(long)]
        field: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }

    /// Level from the command line, then from the config file, then off.
    fn effective(flag: Option<LogLevel>, config: &Config) -> LogLevel {
        flag.or_else(|| {
            config
                .log_level
                .as_deref()
                .and_then(|level| LogLevel::from_str(level, true).ok())
        })
        .unwrap_or(LogLevel::Off)
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(tracing_level).into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("vitistack-convert {} started with log level: {:?}", VERSION, level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("vitistack-crds").join("vitistack-convert.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".vitistack-crds").join("vitistack-convert.log");
    }
    PathBuf::from("vitistack-convert.log")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load();

    let _log_guard = setup_logging(LogLevel::effective(args.log_level, &config))?;

    let registry = v1alpha1::registry().context("Failed to register vitistack.io kinds")?;
    let converter = Converter::new(&registry);

    match args.command {
        Command::Kinds => list_kinds(&converter),
        Command::Convert { file, output } => {
            let format = config.effective_output(output);
            convert(&converter, &file, format)
        }
        Command::Explain { kind, field } => explain(&converter, &kind, field.as_deref()),
    }
}

fn list_kinds(converter: &Converter<'_>) -> Result<()> {
    println!("{:<28} APIVERSION", "KIND");
    for descriptor in converter.registry().kinds() {
        println!("{:<28} {}", descriptor.gvk.kind, descriptor.gvk.api_version());
    }
    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))
}

fn parse_documents(content: &str) -> Result<Vec<Document>> {
    if content.trim_start().starts_with('{') {
        return Ok(vec![Document::from_json(content)?]);
    }
    Ok(Document::from_yaml_stream(content)?)
}

fn convert(converter: &Converter<'_>, file: &Path, format: OutputFormat) -> Result<()> {
    let content = read_input(file)?;
    let documents = parse_documents(&content).with_context(|| format!("Failed to parse {:?}", file))?;
    tracing::info!("Converting {} document(s) from {:?}", documents.len(), file);

    let mut rendered = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        let mut object = converter
            .decode_any(document)
            .with_context(|| format!("Document {} ({})", index, describe(document)))?;
        let normalised = converter.to_document(Some(object.as_mut()))?;
        rendered.push(match format {
            OutputFormat::Yaml => normalised.to_yaml()?,
            OutputFormat::Json => normalised.to_json_pretty()? + "\n",
        });
    }

    let separator = match format {
        OutputFormat::Yaml => "---\n",
        OutputFormat::Json => "",
    };
    print!("{}", rendered.join(separator));
    Ok(())
}

fn describe(document: &Document) -> String {
    match (document.kind(), document.name()) {
        (Some(kind), Some(name)) => format!("{kind} {name}"),
        (Some(kind), None) => kind.to_string(),
        _ => "no kind".to_string(),
    }
}

fn explain(converter: &Converter<'_>, kind: &str, field: Option<&str>) -> Result<()> {
    let Some(descriptor) = converter.registry().find_kind(kind) else {
        bail!("Unknown kind {:?}, see `vitistack-convert kinds`", kind);
    };

    println!("KIND:     {}", descriptor.gvk.kind);
    println!("VERSION:  {}", descriptor.gvk.api_version());

    let shape = match field {
        None => descriptor.shape,
        Some(path) => {
            let Some(target) = descriptor.shape.field_at(path) else {
                bail!("{} has no field {:?}", descriptor.gvk.kind, path);
            };
            println!();
            println!("FIELD:    {} <{}>", path, target.kind.type_name());
            match target.kind.nested_shape() {
                Some(shape) => shape,
                None => return Ok(()),
            }
        }
    };

    println!();
    println!("FIELDS:");
    print_fields(shape);
    Ok(())
}

fn print_fields(shape: &Shape) {
    for field in shape.fields {
        match field.mode {
            FieldMode::Inline => {
                if let Some(inner) = field.kind.nested_shape() {
                    print_fields(inner);
                }
            }
            FieldMode::Always => println!("  {:<32} <{}> -required-", field.key, field.kind.type_name()),
            FieldMode::OmitEmpty => println!("  {:<32} <{}>", field.key, field.kind.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_precedence() {
        let config = Config {
            output: None,
            log_level: Some("DEBUG".to_string()),
        };
        assert!(matches!(LogLevel::effective(None, &config), LogLevel::Debug));
        assert!(matches!(
            LogLevel::effective(Some(LogLevel::Warn), &config),
            LogLevel::Warn
        ));
        assert!(matches!(LogLevel::effective(None, &Config::default()), LogLevel::Off));
    }

    #[test]
    fn test_parse_documents_detects_format() {
        let docs = parse_documents(r#"{"kind": "Machine"}"#).unwrap();
        assert_eq!(docs.len(), 1);

        let docs = parse_documents("kind: Machine\n---\nkind: Datacenter\n").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].kind(), Some("Datacenter"));
    }

    #[test]
    fn test_describe_document() {
        let docs = parse_documents("kind: Machine\nmetadata:\n  name: web-1\n").unwrap();
        assert_eq!(describe(&docs[0]), "Machine web-1");
        assert_eq!(describe(&Document::new()), "no kind");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["vitistack-convert", "convert", "-", "-o", "json"]).unwrap();
        match args.command {
            Command::Convert { file, output } => {
                assert_eq!(file, PathBuf::from("-"));
                assert_eq!(output, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args =
            Args::try_parse_from(["vitistack-convert", "explain", "machine", "--field", "spec.disks"]).unwrap();
        assert!(matches!(args.command, Command::Explain { field: Some(_), .. }));
    }
}
