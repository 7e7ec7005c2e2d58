//! rtfhtml CLI - RTF and HTML document conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use rtfhtml::{
    detect_format, inspect, to_json, Conversion, Converter, Direction, JsonFormat, LineEnding,
    Result as ConvertResult, SourceFormat,
};

#[derive(Parser)]
#[command(name = "rtfhtml")]
#[command(version)]
#[command(about = "Convert rich-text documents between RTF, HTML and plain text", long_about = None)]
struct Cli {
    /// Input file (converted to the other format by content)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct Settings {
    /// Line ending used in RTF output
    #[arg(
        long,
        value_enum,
        global = true,
        default_value = "lf",
        env = "RTFHTML_LINE_ENDING"
    )]
    line_ending: LineEndingArg,

    /// Decode HTML character references before writing RTF
    #[arg(long, global = true, env = "RTFHTML_DECODE_ENTITIES")]
    decode_entities: bool,

    /// Fail instead of falling back to plain text extraction
    #[arg(long, global = true)]
    strict: bool,
}

impl Settings {
    fn converter(&self) -> Converter {
        let converter = Converter::new()
            .with_line_ending(self.line_ending.into())
            .with_entity_decoding(self.decode_entities);
        if self.strict {
            converter.strict()
        } else {
            converter
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert RTF to HTML
    Html {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert HTML to RTF
    Rtf {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert RTF to plain text
    Text {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print compact JSON instead of a summary
        #[arg(long)]
        compact: bool,

        /// Print pretty JSON instead of a summary
        #[arg(long, conflicts_with = "compact")]
        json: bool,
    },

    /// Convert many files at once
    Convert {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Target format
        #[arg(long, value_enum)]
        to: Target,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LineEndingArg {
    /// Unix line endings
    Lf,
    /// Windows line endings
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Target {
    /// HTML for the editor
    Html,
    /// RTF for storage
    Rtf,
    /// Display-only plain text
    Text,
}

impl Target {
    fn direction(&self) -> Direction {
        match self {
            Target::Html => Direction::RtfToHtml,
            Target::Rtf => Direction::HtmlToRtf,
            Target::Text => Direction::RtfToText,
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Target::Html => "html",
            Target::Rtf => "rtf",
            Target::Text => "txt",
        }
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let converter = cli.settings.converter();

    let result = match cli.command {
        Some(Commands::Html { input, output }) => {
            cmd_single(&converter, Direction::RtfToHtml, &input, output.as_deref())
        }
        Some(Commands::Rtf { input, output }) => {
            cmd_single(&converter, Direction::HtmlToRtf, &input, output.as_deref())
        }
        Some(Commands::Text { input, output }) => {
            cmd_single(&converter, Direction::RtfToText, &input, output.as_deref())
        }
        Some(Commands::Info {
            input,
            compact,
            json,
        }) => cmd_info(&input, compact, json),
        Some(Commands::Convert {
            inputs,
            to,
            output_dir,
        }) => cmd_convert(&converter, &inputs, to, output_dir.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_auto(&converter, &input)
            } else {
                println!("{}", "Usage: rtfhtml <FILE>".yellow());
                println!("       rtfhtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a document, replacing invalid UTF-8 sequences.
fn read_document(path: &Path) -> ConvertResult<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_document(path: &Path, content: &str) -> ConvertResult<()> {
    fs::write(path, content)?;
    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        write_document(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Run one conversion, warning on stderr when the fallback was used.
fn run(
    converter: &Converter,
    direction: Direction,
    input: &Path,
    content: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let conversion = converter.try_convert(direction, content)?;

    if let Conversion::Fallback { reason, .. } = &conversion {
        eprintln!(
            "{} {}: {} (plain text recovered)",
            "Warning:".yellow().bold(),
            input.display(),
            reason
        );
    }
    Ok(conversion.into_content())
}

fn cmd_single(
    converter: &Converter,
    direction: Direction,
    input: &Path,
    output: Option<&Path>,
) -> CliResult {
    let content = read_document(input)?;
    let converted = run(converter, direction, input, &content)?;
    write_output(output, &converted)
}

fn cmd_auto(converter: &Converter, input: &Path) -> CliResult {
    let content = read_document(input)?;
    let direction = match detect_format(&content) {
        SourceFormat::Rtf => Direction::RtfToHtml,
        SourceFormat::Html | SourceFormat::PlainText => Direction::HtmlToRtf,
    };
    log::info!("{}: converting {}", input.display(), direction);

    let converted = run(converter, direction, input, &content)?;
    write_output(None, &converted)
}

fn cmd_info(input: &Path, compact: bool, json: bool) -> CliResult {
    let content = read_document(input)?;
    let info = inspect(&content);

    if compact || json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", to_json(&info, format)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), info.format);
    println!("{}: {}", "Bytes".bold(), info.bytes);
    println!("{}: {}", "Characters".bold(), info.chars);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), info.words);
    println!("{}: {}", "Paragraphs".bold(), info.paragraphs);

    if let Some(ref runs) = info.runs {
        println!("{}: {}", "Runs".bold(), runs.total);
        println!("{}: {}", "Bold runs".bold(), runs.bold);
        println!("{}: {}", "Italic runs".bold(), runs.italic);
        println!("{}: {}", "Underlined runs".bold(), runs.underline);
        if !runs.font_sizes.is_empty() {
            let sizes: Vec<String> = runs.font_sizes.iter().map(|s| format!("{}pt", s)).collect();
            println!("{}: {}", "Font sizes".bold(), sizes.join(", "));
        }
    }

    Ok(())
}

fn cmd_convert(
    converter: &Converter,
    inputs: &[PathBuf],
    target: Target,
    output_dir: Option<&Path>,
) -> CliResult {
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = input.file_name().unwrap_or_default().to_string_lossy();
        pb.set_message(name.to_string());

        let content = read_document(input)?;
        let converted = run(converter, target.direction(), input, &content)?;
        let path = output_path(input, target, output_dir);
        write_document(&path, &converted)?;
        written.push(path);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn output_path(input: &Path, target: Target, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input.with_extension(target.extension());
    match output_dir {
        Some(dir) => dir.join(file_name.file_name().unwrap_or_default()),
        None => file_name,
    }
}

fn cmd_version() {
    println!("{} {}", "rtfhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("RTF and HTML document conversion tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path(Path::new("docs/note.rtf"), Target::Html, None);
        assert_eq!(path, PathBuf::from("docs/note.html"));
    }

    #[test]
    fn test_output_path_in_dir() {
        let path = output_path(Path::new("docs/note.html"), Target::Rtf, Some(Path::new("out")));
        assert_eq!(path, PathBuf::from("out/note.rtf"));
    }

    #[test]
    fn test_target_directions() {
        assert_eq!(Target::Html.direction(), Direction::RtfToHtml);
        assert_eq!(Target::Rtf.direction(), Direction::HtmlToRtf);
        assert_eq!(Target::Text.direction(), Direction::RtfToText);
        assert_eq!(Target::Text.extension(), "txt");
    }

    #[test]
    fn test_cli_parses_global_settings() {
        let args = ["rtfhtml", "rtf", "in.html", "--line-ending", "crlf", "--strict"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.settings.strict);
        assert!(cli.settings.line_ending == LineEndingArg::Crlf);
        assert!(matches!(cli.command, Some(Commands::Rtf { .. })));
    }
}
