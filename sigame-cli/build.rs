use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of AVAILABLE_FORMATS in src/main.rs
// Build scripts can't access src/ modules, so the list is duplicated here
const AVAILABLE_FORMATS: &[&str] = &["siq", "jsiq"];

fn format_arg(id: &'static str, long: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .short(short)
        .help(help)
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("sigame")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for querying and converting SIGame packages")
        .arg_required_else_help(true)
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
                .arg(format_arg(
                    "in-type",
                    "in-type",
                    'i',
                    "Explicitly specify input file format",
                ))
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a SIGame package to another format")
                .arg(format_arg(
                    "in-type",
                    "in-type",
                    'i',
                    "Explicitly specify input file format",
                ))
                .arg(format_arg(
                    "out-type",
                    "out-type",
                    'o',
                    "Explicitly specify output file format",
                ))
                .arg(
                    Arg::new("source")
                        .value_name("SOURCE")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("destination")
                        .value_name("DESTINATION")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::AnyPath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "sigame", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "sigame", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "sigame", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
