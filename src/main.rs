//! Entropass CLI
//!
//! Thin command-line layer over the generation library: argument
//! parsing, defaults and clamping, output rendering (JSON or plain
//! value) to stdout or a file. All generation semantics live in the
//! library; failures are rendered as a JSON error object and mapped
//! to a nonzero exit status.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use entropass::{
    generate_password, generate_passphrase, ExclusionOptions, GeneratedSecret, PasswordRequest,
    PassphraseRequest, PoolOptions, SecureRng, WordList,
};
use tracing::info;

const DEFAULT_SYMBOLS: &str = r"\/!@#$%^&*()-_=+[]{};:,.?~";

/// Generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Fixed-length character password.
    Password,
    /// Multi-word passphrase.
    Passphrase,
}

/// Strong passwords and passphrases with entropy estimates.
#[derive(Debug, Parser)]
#[command(name = "entropass", version, about)]
struct Args {
    /// Generation mode.
    #[arg(long, value_enum, default_value_t = Mode::Password)]
    mode: Mode,

    /// Emit the full result record as JSON instead of the bare value.
    #[arg(long)]
    json: bool,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    out_file: Option<PathBuf>,

    /// Password length (clamped to 4..=256).
    #[arg(long, default_value_t = 24)]
    length: usize,

    /// Include lowercase letters.
    #[arg(long)]
    lower: bool,

    /// Include uppercase letters.
    #[arg(long)]
    upper: bool,

    /// Include decimal digits.
    #[arg(long)]
    digits: bool,

    /// Include the symbol set.
    #[arg(long)]
    allow_symbols: bool,

    /// Symbol characters to draw from.
    #[arg(long, default_value = DEFAULT_SYMBOLS)]
    symbols: String,

    /// Exclude easily-misread characters (O/0/o, I/l/1, pipes, quotes).
    #[arg(long)]
    exclude_ambiguous: bool,

    /// Exclude symbols that render near-identically in many fonts.
    #[arg(long)]
    exclude_similar_symbols: bool,

    /// Additional characters to exclude.
    #[arg(long, default_value = "")]
    exclude_chars: String,

    /// Require at least one character from every selected class.
    #[arg(long)]
    enforce_each: bool,

    /// Require all output characters to be distinct.
    #[arg(long)]
    no_repeats: bool,

    /// Exclude whitespace and quote characters that break web forms.
    #[arg(long)]
    website_safe: bool,

    /// Passphrase word count (clamped to 2..=20).
    #[arg(long, default_value_t = 5)]
    words: usize,

    /// Separator between words and before appended extras.
    #[arg(long, default_value = "-")]
    separator: String,

    /// Word list file (one word per line); falls back to a built-in
    /// list when missing or empty.
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Randomly capitalize the first letter of each word.
    #[arg(long)]
    capitalize: bool,

    /// Append this many random digits (clamped to 0..=10).
    #[arg(long, default_value_t = 0)]
    append_digits: usize,

    /// Append one random symbol after any appended digits.
    #[arg(long)]
    append_symbol: bool,
}

impl Args {
    fn exclusions(&self) -> ExclusionOptions {
        ExclusionOptions {
            ambiguous: self.exclude_ambiguous,
            similar_symbols: self.exclude_similar_symbols,
            website_safe: self.website_safe,
            exclude_chars: self.exclude_chars.clone(),
        }
    }

    fn password_request(&self) -> PasswordRequest {
        let any_class = self.lower || self.upper || self.digits || self.allow_symbols;
        PasswordRequest {
            length: self.length.clamp(4, 256),
            pool: PoolOptions {
                // Default to a sane alphanumeric pool when nothing
                // was selected.
                lower: self.lower || !any_class,
                upper: self.upper || !any_class,
                digits: self.digits || !any_class,
                symbols: self.allow_symbols.then(|| self.symbols.clone()),
                exclusions: self.exclusions(),
            },
            enforce_each: self.enforce_each,
            no_repeats: self.no_repeats,
        }
    }

    fn passphrase_request(&self) -> PassphraseRequest {
        PassphraseRequest {
            words: self.words.clamp(2, 20),
            separator: self.separator.clone(),
            capitalize: self.capitalize,
            append_digits: self.append_digits.min(10),
            append_symbol: self.append_symbol,
            symbols: self.symbols.clone(),
            exclusions: self.exclusions(),
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("entropass v{}", entropass::VERSION);

    let mut rng = SecureRng::from_os_entropy();

    let result = match args.mode {
        Mode::Password => generate_password(&args.password_request(), &mut rng),
        Mode::Passphrase => {
            let words = WordList::load(args.wordlist.as_deref());
            generate_passphrase(&args.passphrase_request(), &words, &mut rng)
        }
    };

    match result {
        Ok(secret) => {
            let payload = render(&secret, args.json);
            if let Err(e) = write_output(&payload, args.out_file.as_deref()) {
                eprintln!("failed to write output: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            let payload = serde_json::json!({ "error": e.to_string() }).to_string();
            let _ = write_output(&payload, args.out_file.as_deref());
            eprintln!("generation failed: {e}");
            std::process::exit(1);
        }
    }
}

fn render(secret: &GeneratedSecret, as_json: bool) -> String {
    if !as_json {
        return secret.value().to_string();
    }
    match serde_json::to_string(secret) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("failed to serialize result: {e}");
            std::process::exit(1);
        }
    }
}

fn write_output(payload: &str, out_file: Option<&Path>) -> std::io::Result<()> {
    match out_file {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(payload.as_bytes())?;
            file.write_all(b"\n")
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(payload.as_bytes())?;
            out.write_all(b"\n")
        }
    }
}
