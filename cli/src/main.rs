//! docubridge CLI - JSON to PDF table and PDF to JSON conversion tool

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docubridge::{
    detect_pdf_from_path, ConvertOptions, Converter, ExtractionStrategy, JsonFormat, OutputDir,
    PageSize, PdfTextExtractor, SupportedFormat, TableStyle,
};

/// Stem of files allocated in the output directory by auto mode.
const AUTO_OUTPUT_STEM: &str = "converted_file";

#[derive(Parser, Debug)]
#[command(name = "docubridge")]
#[command(version)]
#[command(about = "Convert JSON to Key/Value table PDFs and PDF text to JSON", long_about = None)]
struct Cli {
    /// Input JSON or PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory for auto mode
    #[arg(value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    /// Also append log output to this file
    #[arg(long, global = true, value_name = "PATH", env = "DOCUBRIDGE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Remove password/secret/token fields and truncate long strings
    #[arg(long, global = true)]
    sanitize: bool,

    /// Reject inputs larger than this many megabytes (0 disables the check)
    #[arg(long, global = true, value_name = "N", default_value_t = 100)]
    max_size_mb: u64,

    /// Page size of generated PDFs
    #[arg(long, global = true, value_enum, default_value = "letter")]
    page_size: PageSizeArg,

    /// Separator between key path segments in generated PDFs
    #[arg(long, global = true, default_value = ".")]
    separator: String,

    /// Post-processing applied to extracted PDF text
    /// (clean_text, extract_paragraphs; any other name leaves text as extracted)
    #[arg(long, global = true, value_name = "NAME")]
    strategy: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a JSON file to a Key/Value table PDF
    ToPdf {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (next to the input if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract the text of a PDF into JSON
    ToJson {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON file (next to the input if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show page information for a PDF
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the information as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PageSizeArg {
    /// US Letter, 612 x 792 pt
    Letter,
    /// ISO A4, 595 x 842 pt
    A4,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::Letter => PageSize::Letter,
            PageSizeArg::A4 => PageSize::A4,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("{}: cannot open log file: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }

    let options = convert_options(&cli);

    let result = match cli.command {
        Some(Commands::ToPdf { input, output }) => cmd_to_pdf(&input, output.as_deref(), options),
        Some(Commands::ToJson {
            input,
            output,
            compact,
        }) => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            cmd_to_json(&input, output.as_deref(), options.with_json_format(format))
        }
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_auto(&input, cli.output.as_deref(), options)
            } else {
                println!("{}", "Usage: docubridge <FILE> [OUTPUT_DIR]".yellow());
                println!("       docubridge --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Duplicates log output to stderr and a log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.init();
    Ok(())
}

fn convert_options(cli: &Cli) -> ConvertOptions {
    let max_size = (cli.max_size_mb > 0).then_some(cli.max_size_mb);

    ConvertOptions::new()
        .with_separator(cli.separator.clone())
        .with_strategy_name(cli.strategy.as_deref())
        .with_table_style(TableStyle::new().with_page_size(cli.page_size.into()))
        .with_sanitize(cli.sanitize)
        .with_max_file_size_mb(max_size)
}

/// Output path beside `input`, never overwriting an existing file.
fn sibling_output(input: &Path, extension: &str) -> io::Result<PathBuf> {
    let parent = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| AUTO_OUTPUT_STEM.to_string());

    Ok(OutputDir::new(parent)?.unique_path(&stem, extension))
}

fn spinner(message: &str) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    Ok(pb)
}

fn run_conversion(
    message: &str,
    output: &Path,
    convert: impl FnOnce() -> bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = spinner(message)?;
    let ok = convert();
    pb.finish_and_clear();

    if ok {
        println!(
            "{} {}",
            "Conversion successful:".green().bold(),
            output.display()
        );
        Ok(())
    } else {
        Err("Conversion failed".into())
    }
}

fn cmd_to_pdf(
    input: &Path,
    output: Option<&Path>,
    options: ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => sibling_output(input, "pdf")?,
    };

    let converter = Converter::new(options);
    run_conversion("Rendering table...", &output, || {
        converter.json_to_pdf(input, &output)
    })
}

fn cmd_to_json(
    input: &Path,
    output: Option<&Path>,
    options: ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => sibling_output(input, "json")?,
    };

    let converter = Converter::new(options);
    run_conversion("Extracting text...", &output, || {
        converter.pdf_to_json(input, &output)
    })
}

fn cmd_auto(
    input: &Path,
    output_dir: Option<&Path>,
    options: ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = SupportedFormat::from_path(input).ok_or_else(|| {
        format!(
            "Unsupported file type: {} (expected .json, .jsonl, .pdf or .pdfa)",
            input.display()
        )
    })?;

    let dir = OutputDir::new(output_dir.unwrap_or_else(|| Path::new("output")))?;
    let output = dir.unique_path(AUTO_OUTPUT_STEM, format.output_extension());

    let converter = Converter::new(options);
    let message = match format {
        SupportedFormat::Json => "Rendering table...",
        SupportedFormat::Pdf => "Extracting text...",
    };
    run_conversion(message, &output, || converter.convert(input, &output))
}

fn cmd_info(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_pdf_from_path(input)?;
    let doc = PdfTextExtractor::new().extract(input)?;

    if as_json {
        let pages: Vec<_> = doc
            .pages
            .iter()
            .map(|page| {
                serde_json::json!({
                    "page_number": page.page_number,
                    "characters": page.char_count(),
                    "blank": page.is_blank(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "version": format.version,
            "total_pages": doc.metadata.total_pages,
            "pages": pages,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Pages".bold(), doc.page_count());

    println!();
    println!("{}", "Page Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for page in &doc.pages {
        let label = format!("Page {}", page.page_number);
        if page.is_blank() {
            println!("{}: {}", label.bold(), "no text".dimmed());
        } else {
            println!("{}: {} characters", label.bold(), page.char_count());
        }
    }

    let words = doc.plain_text().split_whitespace().count();
    println!();
    println!("{}: {}", "Words".bold(), words);
    println!(
        "{}: {}",
        "Strategies".bold(),
        ExtractionStrategy::ALL
            .iter()
            .filter_map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
