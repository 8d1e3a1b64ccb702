use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use ordkey::{Alphabet, KeyGenerator};

/// Command-line arguments for the `ordkey` binary.
///
/// Global options may come from flags, the environment, or a `.env` file
/// loaded at startup.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ordkey",
    version,
    about = "Generate and validate fractional order keys"
)]
pub struct CliArgs {
    /// Digit symbols, strictly ascending ASCII, at least two.
    ///
    /// All keys passed to or printed by one invocation use this alphabet.
    ///
    /// Environment variable: `ORDKEY_ALPHABET`
    #[arg(long, global = true, env = "ORDKEY_ALPHABET", default_value_t = String::from(ordkey::BASE_62))]
    pub alphabet: String,

    /// Upper limit on `--count` for a single invocation.
    ///
    /// Environment variable: `ORDKEY_MAX_COUNT`
    #[arg(long, global = true, env = "ORDKEY_MAX_COUNT", default_value_t = 1_000_000)]
    pub max_count: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print keys that sort strictly between `--after` and `--before`.
    ///
    /// Omit `--after` to insert at the front, omit `--before` to insert at the
    /// back, omit both to seed an empty list.
    Between {
        /// Existing key the new keys sort after.
        #[arg(long)]
        after: Option<String>,

        /// Existing key the new keys sort before.
        #[arg(long)]
        before: Option<String>,

        /// How many keys to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Check that each key is canonical; exits non-zero if any is not.
    Validate {
        /// Keys to check.
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub generator: KeyGenerator,
    pub max_count: usize,
    pub command: Command,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let alphabet: Alphabet = args
            .alphabet
            .parse()
            .with_context(|| format!("ORDKEY_ALPHABET {:?} is not usable", args.alphabet))?;

        if args.max_count == 0 {
            bail!("ORDKEY_MAX_COUNT must be greater than 0");
        }

        if let Command::Between { count, .. } = &args.command {
            if *count > args.max_count {
                bail!(
                    "--count ({}) exceeds ORDKEY_MAX_COUNT ({})",
                    count,
                    args.max_count
                );
            }
        }

        Ok(Self {
            generator: KeyGenerator::new(alphabet),
            max_count: args.max_count,
            command: args.command,
        })
    }
}
