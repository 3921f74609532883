use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use utf64::{decode, decode_raw, encode, encode_raw, AlphabetsConfig};

#[derive(Parser)]
#[command(name = "utf64")]
#[command(about = "Encode text through UTF-8 to Base64 and back, surrogate pairs included", long_about = None)]
struct Cli {
    /// Alphabet to use for encoding/decoding
    #[arg(short, long, default_value = "standard")]
    alphabet: String,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Transcode raw bytes, skipping the UTF-8 code-unit layer
    #[arg(short, long)]
    raw: bool,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabet configuration with user overrides
    let config = AlphabetsConfig::load_with_overrides()?;

    if cli.list {
        println!("Available alphabets:\n");
        let mut alphabets: Vec<_> = config.alphabets.iter().collect();
        alphabets.sort_by_key(|(name, _)| *name);

        for (name, alphabet_config) in alphabets {
            let preview: String = alphabet_config.chars.chars().take(16).collect();
            println!("  {:<12} pad {}  {}...", name, alphabet_config.padding, preview);
        }
        return Ok(());
    }

    let alphabet = config.build(&cli.alphabet)?;

    // Read input data
    let input_data = if let Some(file_path) = cli.file {
        fs::read(&file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let input_str = String::from_utf8(input_data)
            .map_err(|_| "Input must be valid UTF-8 for decoding")?;
        if cli.raw {
            let decoded = decode_raw(input_str.trim(), &alphabet)?;
            io::stdout().write_all(&decoded)?;
        } else {
            let decoded = decode(input_str.trim(), &alphabet)?;
            io::stdout().write_all(decoded.as_bytes())?;
        }
    } else if cli.raw {
        println!("{}", encode_raw(&input_data, &alphabet));
    } else {
        let text = String::from_utf8(input_data)
            .map_err(|_| "Input must be valid UTF-8 text; use --raw for binary data")?;
        println!("{}", encode(&text, &alphabet));
    }

    Ok(())
}
