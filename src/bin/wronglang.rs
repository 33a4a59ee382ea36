use std::io::{self, Read};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

use wronglang::{convert, LayoutRegistry, LayoutTable, Mode, Role};

#[derive(Parser)]
#[command(
    name = "wronglang",
    about = "Fix text typed with the wrong keyboard-layout selection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text through the physical key positions of two layouts
    Convert {
        /// Text to convert; reads stdin when omitted
        text: Option<String>,
        /// Conversion mode: to-thai, to-english or unshift
        #[arg(short, long, default_value = "to-thai", value_parser = parse_mode)]
        mode: Mode,
        /// Thai-side layout name
        #[arg(long, default_value = "Kedmanee")]
        thai: String,
        /// Latin-side layout name
        #[arg(long, default_value = "Qwerty")]
        english: String,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the built-in layouts
    Layouts {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse().map_err(|e: wronglang::ParseModeError| e.to_string())
}

#[derive(Serialize)]
struct ConvertRecord<'a> {
    mode: Mode,
    thai: &'a str,
    english: &'a str,
    input: &'a str,
    output: &'a str,
}

#[derive(Serialize)]
struct LayoutRecord<'a> {
    role: Role,
    name: &'a str,
    keys: usize,
    normal: String,
    shift: String,
}

fn read_stdin() -> String {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
        eprintln!("Failed to read stdin: {}", e);
        process::exit(1);
    });
    buf
}

/// Render one row as a grid line, padding every key to two columns so the
/// shift and normal rows line up (Thai combining marks report width 0).
fn format_row(row: &[char]) -> String {
    let mut out = String::new();
    for &c in row {
        out.push(c);
        let width = UnicodeWidthChar::width(c).unwrap_or(1);
        for _ in width..2 {
            out.push(' ');
        }
    }
    out
}

fn print_tables(role: Role, tables: &[LayoutTable]) {
    println!("{} layouts:", role);
    for table in tables {
        println!("  {} ({} keys)", table.name(), table.key_count());
        println!("    shift:  {}", format_row(table.shift()));
        println!("    normal: {}", format_row(table.normal()));
    }
}

fn main() {
    wronglang::trace_init::init_tracing(Path::new("."));

    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            mode,
            thai,
            english,
            json,
        } => {
            let input = text.unwrap_or_else(read_stdin);
            let output = convert(mode, &thai, &english, &input).unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });

            if json {
                let record = ConvertRecord {
                    mode,
                    thai: &thai,
                    english: &english,
                    input: &input,
                    output: &output,
                };
                println!(
                    "{}",
                    serde_json::to_string(&record).expect("JSON serialization failed")
                );
            } else if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }

        Command::Layouts { json } => {
            let registry = LayoutRegistry::global();
            if json {
                let records: Vec<LayoutRecord> = [Role::Thai, Role::English]
                    .into_iter()
                    .flat_map(|role| registry.tables(role))
                    .map(|t| LayoutRecord {
                        role: t.role(),
                        name: t.name(),
                        keys: t.key_count(),
                        normal: t.normal().iter().collect(),
                        shift: t.shift().iter().collect(),
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&records).expect("JSON serialization failed")
                );
            } else {
                print_tables(Role::Thai, registry.tables(Role::Thai));
                println!();
                print_tables(Role::English, registry.tables(Role::English));
            }
        }
    }
}
