use crate::areas::engine::Engine;
use crate::artifacts::diff::compute_diff;
use crate::artifacts::diff::edit::Edit;
use crate::commands::printable;
use colored::Colorize;

impl Engine {
    pub fn diff(&self, old: &str, new: &str) -> anyhow::Result<()> {
        let input = self.input(old, new)?;
        let outcome = compute_diff(&input, self.config());

        for edit in outcome.tagged.edit_script() {
            let edit = edit.map(printable);
            let line = edit.to_string();
            let line = match edit {
                Edit::Delete { .. } => line.red(),
                Edit::Insert { .. } => line.green(),
                Edit::Equal { .. } => line.normal(),
            };
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
