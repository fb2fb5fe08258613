//! Turns raw arguments into a validated [`Options`] value.
//!
//! Resolution is a single left-to-right fold over the matched options:
//! defaults first, then each match coerces and assigns its field (the last
//! occurrence of a repeated option wins), then the cross-option invariants
//! are checked. The caller receives either a fully valid configuration or a
//! descriptive error, never a partial one.

use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::{BranchLinkage, Command, Options, SimdKernel, StartingTree};
use crate::scanner::{ScanError, TokenMatch, TokenScanner};
use crate::schema::Opt;

/// A failed resolution.
///
/// All variants except [`ResolveError::Malformed`] are semantic violations:
/// well-formed input that names an impossible run. `Malformed` wraps the
/// scanner's syntax errors and is the one fatal-severity case (see
/// [`is_fatal`](ResolveError::is_fatal)).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Malformed argument syntax; the command line surface terminates the
    /// process on this variant instead of diagnosing further.
    #[error(transparent)]
    Malformed(#[from] ScanError),

    /// More than one of `--help`, `--version`, `--evaluate`, `--search`.
    #[error("more than one command specified")]
    ConflictingCommands,

    /// An option required by the selected command is absent.
    #[error("mandatory option '--{option}' for the '{command}' command is missing")]
    MissingMandatoryOption {
        /// Long name of the absent option.
        option: &'static str,
        /// The command that requires it.
        command: Command,
    },

    /// A value was present but failed type coercion.
    #[error("invalid value '{value}' for '--{option}': expected {expected}")]
    InvalidOptionValue {
        /// Long name of the offending option.
        option: &'static str,
        /// The raw text as given.
        value: String,
        /// Human-readable description of the expected form.
        expected: &'static str,
    },

    /// A closed-choice option received a spelling outside its accepted set.
    #[error("unknown value '{value}' for '--{option}' (accepted: {accepted})")]
    UnknownEnumerationValue {
        /// Long name of the offending option.
        option: &'static str,
        /// The raw text as given.
        value: String,
        /// The accepted spellings.
        accepted: &'static str,
    },

    /// The value parses, but denotes a run mode that is not implemented.
    #[error("{0} not supported yet")]
    UnsupportedFeature(&'static str),
}

impl ResolveError {
    /// Whether this failure is unparseable input rather than a semantic
    /// violation. The two severities are deliberate: fatal syntax errors
    /// carry no recoverable diagnostic beyond their message.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ResolveError::Malformed(_))
    }
}

/// Resolve raw arguments (without the program name) into a run
/// configuration.
///
/// Repeated options silently override earlier occurrences, last value wins.
/// Each call owns its scan state, so resolving repeatedly within one
/// process is safe.
pub fn resolve(tokens: &[&str]) -> Result<Options, ResolveError> {
    let mut options = Options::with_defaults();
    // With no command given: search when invoked with arguments, otherwise
    // show the usage screen.
    options.command = if tokens.is_empty() {
        Command::Help
    } else {
        Command::Search
    };

    let mut scanner = TokenScanner::new(tokens);
    let mut commands = 0_usize;

    while let Some(token_match) = scanner.scan()? {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "matched '--{}' with value {:?}",
                token_match.spec.name, token_match.value
            );
        }

        apply(&mut options, &mut commands, token_match)?;
    }

    if commands > 1 {
        return Err(ResolveError::ConflictingCommands);
    }

    check_mandatory(&options)?;

    Ok(options)
}

fn apply(
    options: &mut Options,
    commands: &mut usize,
    token_match: TokenMatch<'_>,
) -> Result<(), ResolveError> {
    let TokenMatch { spec, value } = token_match;

    if spec.opt.is_command() {
        options.command = match spec.opt {
            Opt::Help => Command::Help,
            Opt::Version => Command::Version,
            Opt::Evaluate => Command::Evaluate,
            Opt::Search => Command::Search,
            _ => unreachable!("internal error - non-command option counted as command"),
        };
        *commands += 1;
        return Ok(());
    }

    match spec.opt {
        Opt::Msa => {
            options.msa_file = Some(required(spec.name, value).to_string());
        }
        Opt::Tree => {
            options.start_tree = StartingTree::from(required(spec.name, value));
        }
        Opt::Prefix => {
            options.outfile_prefix = Some(required(spec.name, value).to_string());
        }
        Opt::Model => {
            options.model = required(spec.name, value).to_string();
        }
        Opt::DataType => {
            // Accepted and discarded: the data type is autodetected
            // downstream.
            let _ = required(spec.name, value);
        }
        Opt::OptModel => {
            options.optimize_model = switched_on(value);
        }
        Opt::OptBranches => {
            options.optimize_branch_lengths = switched_on(value);
        }
        Opt::ProbMsa => {
            let on = switched_on(value);
            options.use_prob_msa = on;

            if on {
                // Probabilistic alignments are incompatible with pattern
                // compression and the tip-inner shortcut.
                options.use_pattern_compression = false;
                options.use_tip_inner = false;
            }
        }
        Opt::PatComp => {
            options.use_pattern_compression = switched_on(value);
        }
        Opt::TipInner => {
            options.use_tip_inner = switched_on(value);
        }
        Opt::Brlen => {
            let value = required(spec.name, value);
            options.brlen_linkage = value.parse().map_err(|_| {
                ResolveError::UnknownEnumerationValue {
                    option: spec.name,
                    value: value.to_string(),
                    accepted: BranchLinkage::ACCEPTED,
                }
            })?;

            if options.brlen_linkage == BranchLinkage::Unlinked {
                return Err(ResolveError::UnsupportedFeature("unlinked branch lengths"));
            }
        }
        Opt::SprRadius => {
            let value = required(spec.name, value);
            let radius = value
                .parse::<u32>()
                .ok()
                .filter(|radius| *radius > 0)
                .ok_or_else(|| ResolveError::InvalidOptionValue {
                    option: spec.name,
                    value: value.to_string(),
                    expected: "a positive integer",
                })?;
            options.spr_radius = Some(radius);
        }
        Opt::SprCutoff => {
            let value = required(spec.name, value);

            if value.eq_ignore_ascii_case("off") {
                options.spr_cutoff = 0.0;
            } else {
                options.spr_cutoff = value
                    .parse::<f64>()
                    .ok()
                    .filter(|cutoff| *cutoff >= 0.0)
                    .ok_or_else(|| ResolveError::InvalidOptionValue {
                        option: spec.name,
                        value: value.to_string(),
                        expected: "a non-negative real number or 'off'",
                    })?;
            }
        }
        Opt::LhEpsilon => {
            let value = required(spec.name, value);
            options.lh_epsilon = value
                .parse::<f64>()
                .ok()
                .filter(|epsilon| *epsilon >= 0.0)
                .ok_or_else(|| ResolveError::InvalidOptionValue {
                    option: spec.name,
                    value: value.to_string(),
                    expected: "a non-negative real number",
                })?;
        }
        Opt::Seed => {
            let value = required(spec.name, value);
            options.random_seed =
                value
                    .parse::<i64>()
                    .map_err(|_| ResolveError::InvalidOptionValue {
                        option: spec.name,
                        value: value.to_string(),
                        expected: "an integer",
                    })?;
        }
        Opt::Threads => {
            let value = required(spec.name, value);
            options.num_threads = value
                .parse::<u32>()
                .ok()
                .filter(|threads| *threads > 0)
                .ok_or_else(|| ResolveError::InvalidOptionValue {
                    option: spec.name,
                    value: value.to_string(),
                    expected: "a positive integer",
                })?;
        }
        Opt::Simd => {
            let value = required(spec.name, value);
            options.simd =
                value
                    .parse::<SimdKernel>()
                    .map_err(|_| ResolveError::UnknownEnumerationValue {
                        option: spec.name,
                        value: value.to_string(),
                        accepted: SimdKernel::ACCEPTED,
                    })?;
        }
        Opt::Help | Opt::Version | Opt::Evaluate | Opt::Search => {
            unreachable!("internal error - command options are handled above")
        }
    }

    Ok(())
}

// The scanner guarantees a value for every `Arity::Required` option.
fn required<'t>(name: &str, value: Option<&'t str>) -> &'t str {
    match value {
        Some(value) => value,
        None => unreachable!("internal error - '--{name}' must carry a value"),
    }
}

// Only the literal 'off' (case-insensitive) disables a toggle; bare
// presence and every other value switch it on.
fn switched_on(value: Option<&str>) -> bool {
    value.map_or(true, |value| !value.eq_ignore_ascii_case("off"))
}

fn check_mandatory(options: &Options) -> Result<(), ResolveError> {
    if matches!(options.command, Command::Evaluate | Command::Search)
        && options.msa_file.as_deref().map_or(true, str::is_empty)
    {
        return Err(ResolveError::MissingMandatoryOption {
            option: "msa",
            command: options.command,
        });
    }

    if options.command == Command::Evaluate
        && options.tree_file().map_or(true, str::is_empty)
    {
        return Err(ResolveError::MissingMandatoryOption {
            option: "tree",
            command: options.command,
        });
    }

    Ok(())
}
