//! The closed table of recognized long options.
//!
//! The option set is fixed at build time: long-form names only, no short
//! aliases, no runtime registration.

/// Internal identifier for each recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opt {
    Help,
    Version,
    Evaluate,
    Search,
    Msa,
    Tree,
    Prefix,
    Model,
    DataType,
    OptModel,
    OptBranches,
    ProbMsa,
    PatComp,
    TipInner,
    Brlen,
    SprRadius,
    SprCutoff,
    LhEpsilon,
    Seed,
    Threads,
    Simd,
}

impl Opt {
    pub(crate) fn is_command(self) -> bool {
        matches!(self, Opt::Help | Opt::Version | Opt::Evaluate | Opt::Search)
    }
}

/// How many values an option takes on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    /// A bare flag; an explicit value is a syntax error.
    None,
    /// Precisely one value, from `--name=value` or the following token.
    Required,
    /// At most one value; bare presence is meaningful on its own.
    Maybe,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct OptionSpec {
    pub(crate) name: &'static str,
    pub(crate) opt: Opt,
    pub(crate) arity: Arity,
}

const fn spec(name: &'static str, opt: Opt, arity: Arity) -> OptionSpec {
    OptionSpec { name, opt, arity }
}

pub(crate) const SCHEMA: &[OptionSpec] = &[
    spec("help", Opt::Help, Arity::None),
    spec("version", Opt::Version, Arity::None),
    spec("evaluate", Opt::Evaluate, Arity::None),
    spec("search", Opt::Search, Arity::None),
    spec("msa", Opt::Msa, Arity::Required),
    spec("tree", Opt::Tree, Arity::Required),
    spec("prefix", Opt::Prefix, Arity::Required),
    spec("model", Opt::Model, Arity::Required),
    spec("data-type", Opt::DataType, Arity::Required),
    spec("opt-model", Opt::OptModel, Arity::Maybe),
    spec("opt-branches", Opt::OptBranches, Arity::Maybe),
    spec("prob-msa", Opt::ProbMsa, Arity::Maybe),
    spec("pat-comp", Opt::PatComp, Arity::Maybe),
    spec("tip-inner", Opt::TipInner, Arity::Maybe),
    spec("brlen", Opt::Brlen, Arity::Required),
    spec("spr-radius", Opt::SprRadius, Arity::Required),
    spec("spr-cutoff", Opt::SprCutoff, Arity::Required),
    spec("lh-epsilon", Opt::LhEpsilon, Arity::Required),
    spec("seed", Opt::Seed, Arity::Required),
    spec("threads", Opt::Threads, Arity::Required),
    spec("simd", Opt::Simd, Arity::Required),
];

/// Exact, case-sensitive lookup by long option name (without the `--`).
pub(crate) fn lookup(name: &str) -> Option<&'static OptionSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}
