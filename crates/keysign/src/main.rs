use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use keysign::{MessageSigner, MessageVerifier, SignatureError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[clap(version, about = "Sign and verify messages with PEM-encoded RSA keys")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a message and print the base64 signature.
    Sign {
        #[clap(long, env = "KEYSIGN_PRIVATE_KEY")]
        private_key: PathBuf,
        #[clap(flatten)]
        message: MessageArgs,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Verify a base64 signature over a message.
    Verify {
        #[clap(long, env = "KEYSIGN_PUBLIC_KEY")]
        public_key: PathBuf,
        #[clap(long)]
        signature: String,
        #[clap(flatten)]
        message: MessageArgs,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MessageArgs {
    /// Message given inline.
    #[clap(long)]
    message: Option<String>,
    /// Read the message bytes from a file.
    #[clap(long)]
    message_file: Option<PathBuf>,
}

impl MessageArgs {
    fn read(&self) -> Result<Vec<u8>> {
        match (&self.message, &self.message_file) {
            (Some(message), _) => Ok(message.clone().into_bytes()),
            (None, Some(path)) => read_file(path),
            (None, None) => anyhow::bail!("either --message or --message-file is required"),
        }
    }
}

#[derive(Serialize)]
struct SignOutput {
    signature: String,
    algorithm: String,
}

#[derive(Serialize)]
struct VerifyOutput {
    verified: bool,
    algorithm: Option<String>,
    error: Option<String>,
}

/// Display the error followed by its source chain.
fn describe(error: &SignatureError) -> String {
    let mut text = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn sign(private_key: &Path, message: &MessageArgs, format: OutputFormat) -> Result<()> {
    let key = read_file(private_key)?;
    let message = message.read()?;

    let signature = keysign::generate(&key, &message)?;

    match format {
        OutputFormat::Text => println!("{signature}"),
        OutputFormat::Json => {
            let algorithm = keysign::parse_private_key(&key)
                .map_err(SignatureError::PrivateKey)?
                .algorithm()
                .to_string();
            let output = SignOutput { signature, algorithm };
            println!("{}", serde_json::to_string(&output)?);
        }
    }
    Ok(())
}

fn verify(
    public_key: &Path,
    signature: &str,
    message: &MessageArgs,
    format: OutputFormat,
) -> Result<bool> {
    let key = read_file(public_key)?;
    let message = message.read()?;

    let result = keysign::verify(signature, &key, &message);

    match format {
        OutputFormat::Text => match &result {
            Ok(()) => println!("verified"),
            Err(error) if error.is_verification_failure() => {
                println!("not verified: {}", describe(error))
            }
            // Reported once, on stderr, by `main`.
            Err(_) => {}
        },
        OutputFormat::Json => {
            let algorithm = keysign::parse_public_key(&key)
                .ok()
                .map(|key| key.algorithm().to_string());
            let output = VerifyOutput {
                verified: result.is_ok(),
                algorithm,
                error: result.as_ref().err().map(describe),
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    match result {
        Ok(()) => Ok(true),
        Err(error) if error.is_verification_failure() => Ok(false),
        Err(error) => Err(error.into()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match &cli.command {
        Command::Sign { private_key, message, format } => {
            sign(private_key, message, *format).map(|()| true)
        }
        Command::Verify { public_key, signature, message, format } => {
            verify(public_key, signature, message, *format)
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}
