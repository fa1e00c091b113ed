//! Contains the argument definitions and the main `run()` function of the
//! `siphash` command.

use std::{
    fs::File,
    io::{self, Read, Write},
    process::ExitCode,
};

use log::{debug, warn};
use sipdigest::backend::{Active, Backend};
use sipdigest::{Key, Rounds, SipHash, KEY_LEN};

/// Name that stands for standard input in the file list.
pub const STDIN_NAME: &str = "-";

/// Errors surfaced by the command line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `--key` was not exactly 32 hexadecimal characters.
    #[error("invalid argument: key must be exactly {} hexadecimal characters", 2 * KEY_LEN)]
    InvalidKey,

    /// `-c` / `-d` was not a positive integer.
    #[error("invalid argument: round count must be a positive integer, got `{0}`")]
    InvalidRoundCount(String),

    /// An input could not be read.
    #[error("{path}: {source}")]
    Io {
        /// File name as given on the command line.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// The arguments to the program.
#[derive(Debug, Clone, clap::Parser)]
#[clap(
    name = "siphash",
    version,
    about = "Print SipHash digests of files or standard input"
)]
pub struct Arguments {
    /// The files to hash. `-` reads standard input.
    #[clap(default_value = STDIN_NAME)]
    pub files: Vec<String>,

    /// Compression rounds per message word.
    #[clap(
        short = 'c',
        value_name = "ROUNDS",
        default_value = "1",
        allow_hyphen_values = true,
        value_parser = parse_rounds
    )]
    pub compression: u32,

    /// Finalization rounds.
    #[clap(
        short = 'd',
        value_name = "ROUNDS",
        default_value = "3",
        allow_hyphen_values = true,
        value_parser = parse_rounds
    )]
    pub finalization: u32,

    /// The key as 32 hexadecimal characters. Defaults to the all-zero key.
    #[clap(
        long,
        value_name = "HEX",
        default_value = "00000000000000000000000000000000",
        hide_default_value = true,
        value_parser = parse_key
    )]
    pub key: Key,
}

impl Arguments {
    /// Round counts selected by `-c` and `-d`.
    #[must_use]
    pub const fn rounds(&self) -> Rounds {
        Rounds::new(self.compression, self.finalization)
    }
}

/// Parses a round count. Only positive integers are accepted here even
/// though the library executes any count literally.
pub fn parse_rounds(value: &str) -> Result<u32, CliError> {
    match value.parse::<u32>() {
        Ok(rounds) if rounds > 0 => Ok(rounds),
        _ => Err(CliError::InvalidRoundCount(value.to_owned())),
    }
}

/// Parses a key given as exactly 32 hexadecimal characters.
pub fn parse_key(value: &str) -> Result<Key, CliError> {
    if value.len() != 2 * KEY_LEN {
        return Err(CliError::InvalidKey);
    }
    let bytes = hex::decode(value).map_err(|_| CliError::InvalidKey)?;
    Key::from_slice(&bytes).map_err(|_| CliError::InvalidKey)
}

/// Hashes everything `reader` yields and returns the hex digest together
/// with the number of bytes read.
pub fn hash_reader<R: Read>(
    mut reader: R,
    key: Key,
    rounds: Rounds,
) -> io::Result<(String, u64)> {
    let mut hasher = SipHash::new(key, rounds);
    let read = io::copy(&mut reader, &mut hasher)?;
    Ok((hasher.hexdigest(), read))
}

fn hash_source(name: &str, key: Key, rounds: Rounds) -> Result<String, CliError> {
    let result = if name == STDIN_NAME {
        hash_reader(io::stdin().lock(), key, rounds)
    } else {
        File::open(name).and_then(|file| hash_reader(file, key, rounds))
    };

    let (hex, read) = result.map_err(|source| CliError::Io {
        path: name.to_owned(),
        source,
    })?;

    debug!(
        "{name}: {read} bytes, SipHash-{}-{} via {} backend",
        rounds.compression,
        rounds.finalization,
        Active::NAME
    );
    Ok(hex)
}

/// Runs the program with the given arguments.
///
/// Prints `<digest>  <name>` per input. Unreadable inputs are reported on
/// the error stream and skipped; the exit status is then a failure.
#[must_use]
pub fn run(arguments: Arguments) -> ExitCode {
    let rounds = arguments.rounds();
    let mut failed = false;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for name in &arguments.files {
        match hash_source(name, arguments.key, rounds) {
            Ok(hex) => {
                if let Err(error) = writeln!(out, "{hex}  {name}") {
                    eprintln!("siphash: {error}");
                    return ExitCode::FAILURE;
                }
            }
            Err(error) => {
                warn!("skipping input: {error}");
                eprintln!("siphash: {error}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
