use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constant::*;
use crate::probe;

/// The spelling does not belong to the accepted set of an enumerated option.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized spelling '{0}'")]
pub struct UnknownSpelling(pub(crate) String);

/// The top-level operating mode of the tool.
/// Exactly one command is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Display the usage screen.
    Help,
    /// Display version information.
    Version,
    /// Evaluate the likelihood of a user-supplied tree.
    Evaluate,
    /// Run the maximum-likelihood tree search.
    Search,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Help => "help",
            Command::Version => "version",
            Command::Evaluate => "evaluate",
            Command::Search => "search",
        };
        write!(f, "{name}")
    }
}

/// The source of the initial tree topology.
///
/// This is a single tagged choice: a user-supplied tree *is* its file path,
/// not a separate flag plus a path field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartingTree {
    /// Construct a random topology.
    Random,
    /// Construct a parsimony-based topology.
    Parsimony,
    /// Load the topology from a newick file.
    File(String),
}

impl From<&str> for StartingTree {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("rand") || value.eq_ignore_ascii_case("random") {
            StartingTree::Random
        } else if value.eq_ignore_ascii_case("pars") || value.eq_ignore_ascii_case("parsimony") {
            StartingTree::Parsimony
        } else {
            // Anything outside the reserved spellings is a file path.
            StartingTree::File(value.to_string())
        }
    }
}

impl FromStr for StartingTree {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(StartingTree::from(value))
    }
}

impl fmt::Display for StartingTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartingTree::Random => write!(f, "random"),
            StartingTree::Parsimony => write!(f, "parsimony"),
            StartingTree::File(path) => write!(f, "{path}"),
        }
    }
}

/// Branch length linkage policy across data partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLinkage {
    /// One set of branch lengths, scaled per partition.
    Scaled,
    /// One set of branch lengths shared by all partitions.
    Linked,
    /// Independent branch lengths per partition.
    Unlinked,
}

impl BranchLinkage {
    pub(crate) const ACCEPTED: &'static str = "scaled, linked, unlinked";
}

impl FromStr for BranchLinkage {
    type Err = UnknownSpelling;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("scaled") {
            Ok(BranchLinkage::Scaled)
        } else if value.eq_ignore_ascii_case("linked") {
            Ok(BranchLinkage::Linked)
        } else if value.eq_ignore_ascii_case("unlinked") {
            Ok(BranchLinkage::Unlinked)
        } else {
            Err(UnknownSpelling(value.to_string()))
        }
    }
}

impl fmt::Display for BranchLinkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BranchLinkage::Scaled => "scaled",
            BranchLinkage::Linked => "linked",
            BranchLinkage::Unlinked => "unlinked",
        };
        write!(f, "{name}")
    }
}

/// CPU vector instruction tier used by the downstream likelihood kernels.
/// Selected here, executed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdKernel {
    /// Portable scalar kernels.
    Generic,
    /// SSE3 kernels.
    Sse3,
    /// AVX kernels.
    Avx,
    /// AVX2 kernels.
    Avx2,
}

impl SimdKernel {
    pub(crate) const ACCEPTED: &'static str = "none, scalar, sse, sse3, avx, avx2";
}

impl FromStr for SimdKernel {
    type Err = UnknownSpelling;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("scalar") {
            Ok(SimdKernel::Generic)
        } else if value.eq_ignore_ascii_case("sse") || value.eq_ignore_ascii_case("sse3") {
            Ok(SimdKernel::Sse3)
        } else if value.eq_ignore_ascii_case("avx") {
            Ok(SimdKernel::Avx)
        } else if value.eq_ignore_ascii_case("avx2") {
            Ok(SimdKernel::Avx2)
        } else {
            Err(UnknownSpelling(value.to_string()))
        }
    }
}

impl fmt::Display for SimdKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimdKernel::Generic => "scalar",
            SimdKernel::Sse3 => "sse3",
            SimdKernel::Avx => "avx",
            SimdKernel::Avx2 => "avx2",
        };
        write!(f, "{name}")
    }
}

/// The fully resolved run configuration.
///
/// Constructed once per invocation by [`resolve`](crate::resolver::resolve);
/// by the time a value of this type leaves the resolver, every invariant has
/// been checked and the value is final.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// The selected command (default: `Search` when any argument was given,
    /// `Help` otherwise).
    pub command: Command,
    /// Path to the multiple sequence alignment; mandatory for
    /// `Evaluate`/`Search`.
    pub msa_file: Option<String>,
    /// Starting tree source (default: random topology).
    pub start_tree: StartingTree,
    /// Prefix for output files (default: derived from the MSA file name
    /// downstream).
    pub outfile_prefix: Option<String>,
    /// Model specification or partition file name (default: `GTR+G`).
    pub model: String,
    /// ML optimization of all model parameters (default: on).
    pub optimize_model: bool,
    /// ML optimization of all branch lengths (default: on).
    pub optimize_branch_lengths: bool,
    /// Probabilistic alignment support (default: off).
    pub use_prob_msa: bool,
    /// Alignment pattern compression (default: on).
    pub use_pattern_compression: bool,
    /// Tip-inner case optimization (default: on).
    pub use_tip_inner: bool,
    /// Branch length linkage across partitions (default: scaled).
    pub brlen_linkage: BranchLinkage,
    /// SPR re-insertion radius; `None` means autodetect (the default).
    pub spr_radius: Option<u32>,
    /// Relative log-likelihood cutoff for SPR subtree descent;
    /// `0.0` disables the cutoff (default: `1.0`).
    pub spr_cutoff: f64,
    /// Log-likelihood epsilon for optimization and search (default: `0.1`).
    pub lh_epsilon: f64,
    /// Pseudo-random number generator seed (default: current time).
    pub random_seed: i64,
    /// Number of worker threads (default: 2).
    pub num_threads: u32,
    /// Vector instruction tier (default: CPU capability autodetection).
    pub simd: SimdKernel,
}

impl Options {
    pub(crate) fn with_defaults() -> Self {
        Self {
            command: Command::Help,
            msa_file: None,
            start_tree: StartingTree::Random,
            outfile_prefix: None,
            model: DEF_MODEL.to_string(),
            optimize_model: true,
            optimize_branch_lengths: true,
            use_prob_msa: false,
            use_pattern_compression: true,
            use_tip_inner: true,
            brlen_linkage: BranchLinkage::Scaled,
            spr_radius: None,
            spr_cutoff: DEF_SPR_CUTOFF,
            lh_epsilon: DEF_LH_EPSILON,
            random_seed: probe::time_seed(),
            num_threads: DEF_NUM_THREADS,
            simd: probe::simd_autodetect(),
        }
    }

    /// The user-supplied tree file, when the starting tree is one.
    pub fn tree_file(&self) -> Option<&str> {
        match &self.start_tree {
            StartingTree::File(path) => Some(path.as_str()),
            _ => None,
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  run mode: {}", self.command)?;
        if let Some(msa) = &self.msa_file {
            writeln!(f, "  alignment: {msa}")?;
        }
        writeln!(f, "  starting tree: {}", self.start_tree)?;
        match &self.outfile_prefix {
            Some(prefix) => writeln!(f, "  output prefix: {prefix}")?,
            None => writeln!(f, "  output prefix: (alignment file name)")?,
        }
        writeln!(f, "  model: {}", self.model)?;
        writeln!(f, "  branch lengths: {}", self.brlen_linkage)?;
        writeln!(f, "  optimize model: {}", on_off(self.optimize_model))?;
        writeln!(
            f,
            "  optimize branch lengths: {}",
            on_off(self.optimize_branch_lengths)
        )?;
        writeln!(
            f,
            "  probabilistic alignment: {}",
            on_off(self.use_prob_msa)
        )?;
        writeln!(
            f,
            "  pattern compression: {}",
            on_off(self.use_pattern_compression)
        )?;
        writeln!(f, "  tip-inner optimization: {}", on_off(self.use_tip_inner))?;
        match self.spr_radius {
            Some(radius) => writeln!(f, "  SPR radius: {radius}")?,
            None => writeln!(f, "  SPR radius: auto")?,
        }
        if self.spr_cutoff == 0.0 {
            writeln!(f, "  SPR cutoff: off")?;
        } else {
            writeln!(f, "  SPR cutoff: {}", self.spr_cutoff)?;
        }
        writeln!(f, "  log-likelihood epsilon: {}", self.lh_epsilon)?;
        writeln!(f, "  random seed: {}", self.random_seed)?;
        writeln!(f, "  threads: {}", self.num_threads)?;
        write!(f, "  SIMD kernels: {}", self.simd)
    }
}
