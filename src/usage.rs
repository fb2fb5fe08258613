//! Static usage screen for the option schema.

use terminal_size::{terminal_size, Width};

use crate::constant::PROGRAM;
use crate::ui::UserInterface;

struct Entry {
    term: &'static str,
    description: &'static str,
}

struct Section {
    title: &'static str,
    entries: &'static [Entry],
}

const fn entry(term: &'static str, description: &'static str) -> Entry {
    Entry { term, description }
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Commands (mutually exclusive)",
        entries: &[
            entry("--help", "display this help and exit."),
            entry("--version", "display version information and exit."),
            entry("--evaluate", "evaluate the likelihood of a user-supplied tree."),
            entry("--search", "maximum-likelihood tree search."),
        ],
    },
    Section {
        title: "Input and output options",
        entries: &[
            entry(
                "--msa FILE",
                "alignment in FASTA, PHYLIP, VCF or CATG format.",
            ),
            entry(
                "--tree FILE | rand | pars",
                "starting tree: rand(om), pars(imony) or user-supplied newick file (default: rand).",
            ),
            entry(
                "--prefix STRING",
                "prefix for output files (default: alignment file name).",
            ),
            entry(
                "--data-type dna | aa | auto",
                "data type of the alignment (default: autodetect).",
            ),
        ],
    },
    Section {
        title: "General options",
        entries: &[
            entry(
                "--seed VALUE",
                "seed for the pseudo-random number generator (default: current time).",
            ),
            entry("--threads VALUE", "number of worker threads (default: 2)."),
            entry(
                "--simd none | sse3 | avx | avx2",
                "vector instruction set for the likelihood kernels (default: autodetect).",
            ),
            entry(
                "--pat-comp on | off",
                "alignment pattern compression (default: on).",
            ),
            entry(
                "--tip-inner on | off",
                "tip-inner case optimization (default: on).",
            ),
        ],
    },
    Section {
        title: "Model options",
        entries: &[
            entry(
                "--model NAME | FILE",
                "model specification or partition file (default: GTR+G).",
            ),
            entry(
                "--brlen scaled | linked | unlinked",
                "branch length linkage between partitions (default: scaled).",
            ),
            entry(
                "--opt-model on | off",
                "ML optimization of all model parameters (default: on).",
            ),
            entry(
                "--opt-branches on | off",
                "ML optimization of all branch lengths (default: on).",
            ),
            entry(
                "--prob-msa on | off",
                "use probabilistic alignment; needs CATG or VCF input (default: off).",
            ),
            entry(
                "--lh-epsilon VALUE",
                "log-likelihood epsilon for optimization and tree search (default: 0.1).",
            ),
        ],
    },
    Section {
        title: "Topology search options",
        entries: &[
            entry(
                "--spr-radius VALUE",
                "SPR re-insertion radius for fast iterations (default: autodetect).",
            ),
            entry(
                "--spr-cutoff VALUE | off",
                "relative log-likelihood cutoff for descending into subtrees (default: 1.0).",
            ),
        ],
    },
];

const INDENT: usize = 2;
const PADDING_WIDTH: usize = 3;
// Assuming an average word length of 5, this fits precisely 3 words with a
// space between them.
const MINIMUM_MIDDLE_WIDTH: usize = 17;
// Never use the literal full terminal width.
const TARGET_TOTAL_FACTOR: f64 = 0.95;
const FALLBACK_TOTAL_WIDTH: usize = 100;

/// Renderer for the usage screen.
///
/// A pure producer over the fixed schema: no resolver state, no validation.
pub struct Usage {
    total_width: usize,
}

impl Usage {
    /// A usage screen sized to the attached terminal.
    pub fn terminal() -> Self {
        let total_width = if let Some((Width(width), _)) = terminal_size() {
            width as usize
        } else {
            FALLBACK_TOTAL_WIDTH
        };

        Self::fixed(total_width)
    }

    pub(crate) fn fixed(total_width: usize) -> Self {
        Self { total_width }
    }

    /// Write the usage screen to the interface, one line at a time.
    pub fn print(&self, interface: &dyn UserInterface) {
        for line in self.render() {
            interface.print(line);
        }
    }

    pub(crate) fn render(&self) -> Vec<String> {
        let left_width = SECTIONS
            .iter()
            .flat_map(|section| section.entries)
            .map(|entry| entry.term.len())
            .max()
            .unwrap_or(0);
        let middle_width = self.middle_width(INDENT + left_width + PADDING_WIDTH);

        let mut out = vec![format!("usage: {PROGRAM} [OPTIONS]")];

        for section in SECTIONS {
            out.push(String::default());
            out.push(format!("{}:", section.title));

            for entry in section.entries {
                for (i, part) in chunk(entry.description, middle_width).iter().enumerate() {
                    if i == 0 {
                        out.push(format!(
                            "{empty:indent$}{term:left_width$}{empty:pad$}{part}",
                            empty = "",
                            indent = INDENT,
                            pad = PADDING_WIDTH,
                            term = entry.term,
                        ));
                    } else {
                        out.push(format!(
                            "{empty:width$}{part}",
                            empty = "",
                            width = INDENT + left_width + PADDING_WIDTH
                        ));
                    }
                }
            }
        }

        out
    }

    fn middle_width(&self, non_middle: usize) -> usize {
        let target = (self.total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

        if non_middle + MINIMUM_MIDDLE_WIDTH <= target {
            target - non_middle
        } else {
            MINIMUM_MIDDLE_WIDTH
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Split a word that overflows the width on its own, marking each break.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let mut left = 0;
    let mut right = increment;

    while right + 1 < word.len() {
        lines.push(format!("{}-", &word[left..right]));
        left += increment;
        right += increment;
    }

    current.push_str(&word[left..]);
}
