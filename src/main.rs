use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use signify_verify::config::AppConfig;
use signify_verify::{armor, Keyring, PublicKey, Signature, Verifier};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "signify-verify")]
#[command(about = "Verify OpenBSD signify signatures")]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a message file against its signature
    Verify {
        /// Public key file
        #[arg(short = 'p', long = "pubkey")]
        pubkey: Option<PathBuf>,

        /// Base64 public key (starting with RW...)
        #[arg(long = "pubkey-b64", conflicts_with = "pubkey")]
        pubkey_b64: Option<String>,

        /// Signature file (defaults to <message>.sig)
        #[arg(short = 'x', long = "sig")]
        sig: Option<PathBuf>,

        /// Message file
        #[arg(short = 'm', long = "message")]
        message: PathBuf,

        /// Only report through the exit code
        #[arg(short = 'q', long = "quiet")]
        quiet: bool,
    },
    /// Show what a key or signature file contains
    Inspect {
        /// Public key or signature file
        file: PathBuf,
    },
    /// Show version
    Version,
}

enum KeySource {
    Single(Verifier),
    Keyring(Keyring),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = AppConfig::load();

    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let log_level: tracing::Level = level.parse().unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(stderr_layer).init();

    match cli.command {
        Commands::Verify { pubkey, pubkey_b64, sig, message, quiet } => {
            let sig = sig.unwrap_or_else(|| default_sig_path(&message));
            match verify(&cfg, pubkey, pubkey_b64, &sig, &message) {
                Ok(()) => {
                    if !quiet {
                        println!("{}", "Signature Verified".green());
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("{}", format!("Verification failed: {}", e).red());
                    }
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Inspect { file } => match inspect(&file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", format!("Cannot inspect {}: {}", file.display(), e).red());
                ExitCode::FAILURE
            }
        },
        Commands::Version => {
            println!("signify-verify v{} ({})", VERSION, std::env::consts::ARCH);
            ExitCode::SUCCESS
        }
    }
}

/// `release.tgz` is checked against `release.tgz.sig` unless told otherwise.
fn default_sig_path(message: &Path) -> PathBuf {
    let mut name = message.as_os_str().to_owned();
    name.push(".sig");
    PathBuf::from(name)
}

fn key_source(
    cfg: &AppConfig,
    pubkey: Option<PathBuf>,
    pubkey_b64: Option<String>,
) -> Result<KeySource, Box<dyn std::error::Error>> {
    if let Some(b64) = pubkey_b64 {
        return Ok(KeySource::Single(Verifier::from_base64(b64.trim())?));
    }
    if let Some(path) = pubkey.or_else(|| cfg.pubkey_path.clone()) {
        return Ok(KeySource::Single(Verifier::from_file(path)?));
    }
    if let Some(dir) = &cfg.keyring_dir {
        let keyring = Keyring::load_dir(dir)?;
        if keyring.is_empty() {
            return Err(format!("no public keys found in {}", dir.display()).into());
        }
        return Ok(KeySource::Keyring(keyring));
    }
    Err("no public key given; use -p, --pubkey-b64 or configure pubkey_path / keyring_dir".into())
}

fn verify(
    cfg: &AppConfig,
    pubkey: Option<PathBuf>,
    pubkey_b64: Option<String>,
    sig: &Path,
    message: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = key_source(cfg, pubkey, pubkey_b64)?;
    tracing::info!(sig = %sig.display(), message = %message.display(), "verifying");
    match source {
        KeySource::Single(verifier) => verifier.verify_file(sig, message)?,
        KeySource::Keyring(keyring) => keyring.verify_file(sig, message)?,
    }
    Ok(())
}

fn inspect(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(file)?;
    let payload = armor::payload(&text)?;
    let comment = armor::comment(&text).unwrap_or_default();

    let (kind, key_number) = match PublicKey::from_base64(payload) {
        Ok(key) => ("public key", *key.key_number()),
        Err(_) => {
            let sig = Signature::from_base64(payload)?;
            ("signature", *sig.key_number())
        }
    };
    println!("{}    {}", "kind:".bold(), kind.cyan());
    println!("{}  {}", "keynum:".bold(), key_number);
    println!("{} {}", "comment:".bold(), comment.dimmed());
    Ok(())
}
