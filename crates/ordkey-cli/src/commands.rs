use crate::config::{CliConfig, Command};
use anyhow::{Context, bail};
use std::io::Write;
use tracing::{info, warn};

/// Executes the configured command, writing results to `out`.
pub fn run(config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match &config.command {
        Command::Between {
            after,
            before,
            count,
        } => {
            let keys = config
                .generator
                .n_between(after.as_deref(), before.as_deref(), *count)
                .with_context(|| {
                    format!(
                        "cannot generate {count} key(s) after {} and before {}",
                        after.as_deref().unwrap_or("<start>"),
                        before.as_deref().unwrap_or("<end>"),
                    )
                })?;
            for key in &keys {
                writeln!(out, "{key}")?;
            }
            info!(count = keys.len(), "generated keys");
        }
        Command::Validate { keys } => {
            let mut invalid = 0_usize;
            for key in keys {
                match config.generator.validate(key) {
                    Ok(()) => writeln!(out, "ok\t{key}")?,
                    Err(e) => {
                        warn!(%key, error = %e, "invalid order key");
                        writeln!(out, "invalid\t{key}\t{e}")?;
                        invalid += 1;
                    }
                }
            }
            if invalid > 0 {
                bail!("{invalid} of {} key(s) are invalid", keys.len());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordkey::{Alphabet, KeyGenerator};

    fn run_to_string(command: Command, alphabet: Alphabet) -> (anyhow::Result<()>, String) {
        let config = CliConfig {
            generator: KeyGenerator::new(alphabet),
            max_count: 100,
            command,
        };
        let mut out = Vec::new();
        let res = run(&config, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn between_prints_one_key_per_line() {
        let (res, out) = run_to_string(
            Command::Between {
                after: Some("a1".into()),
                before: Some("a2".into()),
                count: 3,
            },
            Alphabet::base62(),
        );
        res.unwrap();
        assert_eq!(out, "a1G\na1V\na1l\n");
    }

    #[test]
    fn between_seeds_empty_list() {
        let (res, out) = run_to_string(
            Command::Between {
                after: None,
                before: None,
                count: 5,
            },
            Alphabet::new("0123456789").unwrap(),
        );
        res.unwrap();
        assert_eq!(out, "a0\na1\na2\na3\na4\n");
    }

    #[test]
    fn between_reports_bad_endpoints() {
        let (res, out) = run_to_string(
            Command::Between {
                after: Some("a1".into()),
                before: Some("a0".into()),
                count: 1,
            },
            Alphabet::base62(),
        );
        let err = res.unwrap_err();
        assert!(format!("{err:#}").contains("a1 >= a0"), "{err:#}");
        assert!(out.is_empty());
    }

    #[test]
    fn validate_lists_every_key() {
        let (res, out) = run_to_string(
            Command::Validate {
                keys: vec!["a0".into(), "a00".into(), "a0V".into()],
            },
            Alphabet::base62(),
        );
        assert!(res.is_err());
        assert_eq!(
            out,
            "ok\ta0\ninvalid\ta00\tinvalid order key: a00\nok\ta0V\n"
        );
    }
}
