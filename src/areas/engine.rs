use crate::artifacts::diff::config::{DiffConfig, DiffInput};
use std::cell::{RefCell, RefMut};

/// Entry point of the command layer
///
/// Commands are implemented as `impl Engine` blocks under `commands/` and write
/// their output through `writer()`.
pub struct Engine {
    config: DiffConfig,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Engine {
    pub fn new(config: DiffConfig, writer: Box<dyn std::io::Write>) -> Self {
        Engine {
            config,
            writer: RefCell::new(writer),
        }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn input(&self, old: &str, new: &str) -> anyhow::Result<DiffInput> {
        DiffInput::try_new(old, new, &self.config)
    }
}
