// Command-line interface for SIGame packages
//
// The sigame program reads packages in either encoding and prints what is in them or
// re-encodes them into the other one. All package handling lives in sigame-babel; this
// binary only resolves paths and formats, and reports progress.
//
// Formats are detected from the file name (`.siq`, `.jsiq.zip`) and can be overridden
// with --in-type / --out-type.
// Usage:
//  sigame query [-i <format>] <FILE>                               - Print a package summary
//  sigame convert [-i <format>] [-o <format>] <SOURCE> <DESTINATION> - Convert a package
//  sigame --list-formats                                            - List available formats
//
// Serializer options (indentation, pretty printing) come from sigame.toml or --config.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use sigame_babel::{Document, FormatRegistry};
use sigame_config::{ConfigError, Loader, SigameConfig};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Format names accepted by --in-type / --out-type.
const AVAILABLE_FORMATS: &[&str] = &["siq", "jsiq"];

/// A failure reported to the user as `Error: <message>`.
#[derive(Debug)]
struct CliError(String);

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<sigame_babel::FormatError> for CliError {
    fn from(err: sigame_babel::FormatError) -> Self {
        CliError(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError(format!("Failed to load configuration: {err}"))
    }
}

fn build_cli() -> Command {
    Command::new("sigame")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for querying and converting SIGame packages")
        .long_about(
            "sigame is a command-line tool for working with SIGame quiz packages.\n\n\
            Commands:\n  \
            - query:   Print the package summary with its rounds and themes\n  \
            - convert: Re-encode a package between .siq and .jsiq.zip\n\n\
            Examples:\n  \
            sigame query quiz.siq                       # Summary of an XML package\n  \
            sigame convert quiz.siq quiz.jsiq.zip       # XML to JSON package\n  \
            sigame convert -o siq quiz.jsiq.zip out/    # Write out/quiz.siq",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a sigame.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("query")
                .about("Query info about a SIGame package")
                .arg(in_type_arg())
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .help("SIGame package file (format is detected automatically)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a SIGame package to another format")
                .long_about(
                    "Convert a SIGame package to another format.\n\n\
                    Formats are detected from the file names. When DESTINATION is a\n\
                    directory, --out-type is required and the output file is named\n\
                    after SOURCE.\n\n\
                    Asset entries (Texts/, Images/, Audio/, Video/) are copied unchanged.",
                )
                .arg(in_type_arg())
                .arg(
                    Arg::new("out-type")
                        .long("out-type")
                        .short('o')
                        .help("Explicitly specify output file format")
                        .long_help(
                            "Explicitly specify output file format.\n\n\
                            Required when DESTINATION is a directory.",
                        )
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("source")
                        .value_name("SOURCE")
                        .help("Source package file (format is detected automatically)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("destination")
                        .value_name("DESTINATION")
                        .help("Destination package file or directory")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::AnyPath),
                ),
        )
}

fn in_type_arg() -> Arg {
    Arg::new("in-type")
        .long("in-type")
        .short('i')
        .help("Explicitly specify input file format")
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
        .value_hint(ValueHint::Other)
}

fn init_tracing() {
    // Diagnostics go to stderr so stdout carries only command output.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sigame=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return Ok(());
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;

    match matches.subcommand() {
        Some(("query", sub_matches)) => {
            let file = required_path(sub_matches, "file")?;
            let in_type = sub_matches.get_one::<String>("in-type").map(|s| s.as_str());
            handle_query_command(&file, in_type)
        }
        Some(("convert", sub_matches)) => {
            let source = required_path(sub_matches, "source")?;
            let destination = required_path(sub_matches, "destination")?;
            let in_type = sub_matches.get_one::<String>("in-type").map(|s| s.as_str());
            let out_type = sub_matches.get_one::<String>("out-type").map(|s| s.as_str());
            handle_convert_command(&source, &destination, in_type, out_type, &config)
        }
        _ => Err(CliError(
            "Unknown subcommand. Use --help for usage information.".to_string(),
        )),
    }
}

fn required_path(matches: &ArgMatches, id: &str) -> Result<PathBuf, CliError> {
    matches
        .get_one::<String>(id)
        .map(PathBuf::from)
        .ok_or_else(|| CliError(format!("Missing required argument '{id}'")))
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<SigameConfig, CliError> {
    let loader = Loader::new().with_optional_file("sigame.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    Ok(loader.build()?)
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions: Vec<String> = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect();
            println!(
                "  {name:<6} - {} ({})",
                format.description(),
                extensions.join(", ")
            );
        }
    }
}

/// Resolves the format of `path`, preferring the explicit one.
fn resolve_format(
    registry: &FormatRegistry,
    path: &Path,
    explicit: Option<&str>,
    role: &str,
) -> Result<String, CliError> {
    if let Some(format) = explicit {
        return Ok(format.to_string());
    }
    registry
        .detect_format_from_filename(&path.to_string_lossy())
        .ok_or_else(|| {
            CliError(format!(
                "Unable to guess type for {role} file '{}'",
                path.display()
            ))
        })
}

fn handle_query_command(file: &Path, in_type: Option<&str>) -> Result<(), CliError> {
    let registry = FormatRegistry::default();
    let format = resolve_format(&registry, file, in_type, "input")?;
    let doc = Document::open(file, &format)?;

    print!("{}", package_report(doc.package()));
    Ok(())
}

fn package_report(package: &sigame_babel::Package) -> String {
    let mut report = format!("{package}\n");
    for round in &package.rounds {
        report.push_str(&format!("  {round}\n"));
        for theme in &round.themes {
            report.push_str(&format!("    {theme}\n"));
        }
    }
    report
}

fn handle_convert_command(
    source: &Path,
    destination: &Path,
    in_type: Option<&str>,
    out_type: Option<&str>,
    config: &SigameConfig,
) -> Result<(), CliError> {
    if source.is_dir() {
        return Err(CliError(format!("'{}' is a directory", source.display())));
    }

    let registry = FormatRegistry::default();
    let input_format = resolve_format(&registry, source, in_type, "input")?;

    let (output_path, output_format) = if destination.is_dir() {
        let Some(format) = out_type else {
            return Err(CliError(format!(
                "'{}' is a directory, please specify full path or provide file type",
                destination.display()
            )));
        };
        let file_name = output_file_name(&registry, source, &input_format, format)?;
        (destination.join(file_name), format.to_string())
    } else {
        let format = resolve_format(&registry, destination, out_type, "output")?;
        (destination.to_path_buf(), format)
    };

    println!("Converting from {input_format} to {output_format} ...");
    let doc = Document::open(source, &input_format)?;
    println!("Load successful");

    let options = config.convert.options_for(&output_format);
    debug!(path = %output_path.display(), ?options, "writing converted package");
    doc.save_with_options(&output_path, &output_format, &options)?;
    println!("Save successful");
    Ok(())
}

/// `<source stem>.<target extension>`, where the stem drops the source format's suffix.
fn output_file_name(
    registry: &FormatRegistry,
    source: &Path,
    input_format: &str,
    output_format: &str,
) -> Result<String, CliError> {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError(format!("'{}' has no file name", source.display())))?;

    let input_suffix = format!(".{}", registry.file_extension(input_format)?);
    let stem = match name.strip_suffix(&input_suffix) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone()),
    };
    Ok(format!("{stem}.{}", registry.file_extension(output_format)?))
}
