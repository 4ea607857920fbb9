//! Transpo - classical transposition ciphers.
//!
//! A CLI for the Rail Fence, Columnar Transposition, and Double
//! Transposition ciphers. Educational only: these ciphers are trivially
//! breakable and offer no real security.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use transpo::{columnar, double, normalize, rail_fence};

/// Transpo - classical transposition ciphers
///
/// Encrypts and decrypts text with Rail Fence, Columnar Transposition,
/// and Double Transposition. Encryption keeps only alphabetic characters,
/// upper-cased; decryption expects input of that shape.
#[derive(Parser)]
#[command(name = "transpo")]
#[command(version)]
#[command(about = "Classical transposition ciphers: Rail Fence, Columnar, Double")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rail Fence cipher (zigzag across a number of rails)
    RailFence {
        /// Number of rails; 1 is the identity transform
        #[arg(short, long)]
        rails: usize,

        /// Decrypt instead of encrypt
        #[arg(short, long)]
        decrypt: bool,

        /// Show the normalized input and a round-trip check on stderr
        #[arg(short, long)]
        verbose: bool,

        /// Text to transform (reads from stdin if not provided)
        text: Option<String>,
    },

    /// Columnar Transposition cipher (grid keyed by a keyword)
    ///
    /// Incomplete grid cells are padded with 'X' on encrypt and stripped
    /// on decrypt, so a genuine 'X' in the plaintext does not survive a
    /// round-trip.
    Columnar {
        /// Keyword; only the alphabetic order of its letters matters
        #[arg(short, long)]
        key: String,

        /// Decrypt instead of encrypt
        #[arg(short, long)]
        decrypt: bool,

        /// Show the normalized input and a round-trip check on stderr
        #[arg(short, long)]
        verbose: bool,

        /// Text to transform (reads from stdin if not provided)
        text: Option<String>,
    },

    /// Double Transposition cipher (Columnar applied twice)
    Double {
        /// First keyword
        #[arg(long)]
        key1: String,

        /// Second keyword
        #[arg(long)]
        key2: String,

        /// Decrypt instead of encrypt (keys applied in reverse order)
        #[arg(short, long)]
        decrypt: bool,

        /// Show the normalized input and a round-trip check on stderr
        #[arg(short, long)]
        verbose: bool,

        /// Text to transform (reads from stdin if not provided)
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::RailFence {
            rails,
            decrypt,
            verbose,
            text,
        } => rail_fence_cmd(rails, decrypt, verbose, text.as_deref())?,

        Commands::Columnar {
            key,
            decrypt,
            verbose,
            text,
        } => columnar_cmd(&key, decrypt, verbose, text.as_deref())?,

        Commands::Double {
            key1,
            key2,
            decrypt,
            verbose,
            text,
        } => double_cmd(&key1, &key2, decrypt, verbose, text.as_deref())?,
    }

    Ok(())
}

/// Returns the text argument, or reads it from stdin if absent.
fn read_text(text: Option<&str>) -> Result<String> {
    match text {
        Some(t) => Ok(t.to_string()),
        None => {
            eprintln!("Reading text from stdin (Ctrl+D to finish):");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer.trim_end().to_string())
        }
    }
}

fn rail_fence_cmd(rails: usize, decrypt: bool, verbose: bool, text: Option<&str>) -> Result<()> {
    let input = read_text(text)?;

    let output = if decrypt {
        rail_fence::decrypt(&input, rails).context("Rail Fence decryption failed")?
    } else {
        let ciphertext =
            rail_fence::encrypt(&input, rails).context("Rail Fence encryption failed")?;
        if verbose {
            eprintln!("Normalized input: {}", normalize(&input));
            eprintln!(
                "Round-trip check: {}",
                rail_fence::decrypt(&ciphertext, rails)?
            );
        }
        ciphertext
    };

    println!("{}", output);
    Ok(())
}

fn columnar_cmd(key: &str, decrypt: bool, verbose: bool, text: Option<&str>) -> Result<()> {
    let input = read_text(text)?;

    let output = if decrypt {
        columnar::decrypt(&input, key).context("Columnar decryption failed")?
    } else {
        let ciphertext = columnar::encrypt(&input, key).context("Columnar encryption failed")?;
        if verbose {
            eprintln!("Normalized input: {}", normalize(&input));
            eprintln!("Normalized key:   {}", normalize(key));
            eprintln!("Round-trip check: {}", columnar::decrypt(&ciphertext, key)?);
        }
        ciphertext
    };

    println!("{}", output);
    Ok(())
}

fn double_cmd(
    key1: &str,
    key2: &str,
    decrypt: bool,
    verbose: bool,
    text: Option<&str>,
) -> Result<()> {
    let input = read_text(text)?;

    let output = if decrypt {
        double::decrypt(&input, key1, key2).context("Double Transposition decryption failed")?
    } else {
        let ciphertext =
            double::encrypt(&input, key1, key2).context("Double Transposition encryption failed")?;
        if verbose {
            eprintln!("Normalized input: {}", normalize(&input));
            match double::decrypt(&ciphertext, key1, key2) {
                Ok(roundtrip) => eprintln!("Round-trip check: {}", roundtrip),
                // Inner padding gets stripped early when the normalized
                // length is not a multiple of the first key's length
                Err(e) => eprintln!("Round-trip check: not recoverable ({})", e),
            }
        }
        ciphertext
    };

    println!("{}", output);
    Ok(())
}
