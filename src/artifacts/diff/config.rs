use clap::ValueEnum;
use derive_new::new;

pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Which engine computes the edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Mode {
    /// Greedy forward search over the whole edit graph
    #[value(name = "forward")]
    Unidirectional,
    /// Linear-space divide-and-conquer around middle snakes
    #[default]
    #[value(name = "bidirectional")]
    Bidirectional,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffConfig {
    pub mode: Mode,
    /// Solve the two halves around a middle snake on the rayon pool
    pub parallel: bool,
    /// Upper bound on `old.len() + new.len()`
    pub max_input_len: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            parallel: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// A validated pair of sequences
///
/// `old` indexes the rows (y) of the edit graph and `new` the columns (x).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInput {
    old: Vec<char>,
    new: Vec<char>,
}

impl DiffInput {
    pub fn try_new(old: &str, new: &str, config: &DiffConfig) -> anyhow::Result<Self> {
        Self::try_from_chars(old.chars().collect(), new.chars().collect(), config)
    }

    pub fn try_from_chars(
        old: Vec<char>,
        new: Vec<char>,
        config: &DiffConfig,
    ) -> anyhow::Result<Self> {
        let total = old.len() + new.len();
        if total > config.max_input_len {
            anyhow::bail!(
                "inputs are too long: {} + {} characters exceed the limit of {}",
                old.len(),
                new.len(),
                config.max_input_len
            );
        }
        if total > isize::MAX as usize / 2 {
            anyhow::bail!("inputs are too long to index diagonals: {total} characters");
        }

        Ok(Self { old, new })
    }

    pub fn old_chars(&self) -> &[char] {
        &self.old
    }

    pub fn new_chars(&self) -> &[char] {
        &self.new
    }
}
