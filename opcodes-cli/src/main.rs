use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use opcodes_extract::HtmlTable;
use opcodes_table::OpcodeTable;

#[derive(Parser)]
#[command(
    name = "opcodes",
    about = "Instruction encoding table scraper and constant generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract `[name, bytes]` pairs from a rendered specification page as JSON
    Extract {
        /// Path to the saved HTML page (`-` for stdin)
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate Rust constant declarations from an extracted JSON table
    Generate {
        /// Path to the JSON table
        #[arg(default_value = "wasm.json")]
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output } => cmd_extract(&input, output.as_deref()),
        Commands::Generate { input, output } => cmd_generate(&input, output.as_deref()),
    }
}

fn cmd_extract(path: &Path, output: Option<&Path>) {
    let source = match HtmlTable::open(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let table = opcodes_extract::extract(&source);
    let json = match table.to_json() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    write_output(output, &format!("{json}\n"));
}

fn cmd_generate(path: &Path, output: Option<&Path>) {
    let table = match OpcodeTable::open(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Rendered in full before anything is written, so a bad entry leaves no
    // partial output behind.
    let source = match opcodes_gen::emit_constants(&table) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    write_output(output, &source);
}

fn write_output(output: Option<&Path>, text: &str) {
    if let Some(path) = output {
        log::debug!("writing {} bytes to {}", text.len(), path.display());
        fs::write(path, text).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", path.display());
            std::process::exit(1);
        });
    } else {
        print!("{text}");
    }
}
