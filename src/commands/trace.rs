use crate::areas::engine::Engine;
use crate::artifacts::diff::compute_diff;
use crate::artifacts::diff::step_record::StepRecord;
use crate::commands::render_tagged;
use colored::Colorize;

impl Engine {
    pub fn trace(&self, old: &str, new: &str) -> anyhow::Result<()> {
        let input = self.input(old, new)?;
        let outcome = compute_diff(&input, self.config());

        for (index, record) in outcome.trace.iter().enumerate() {
            self.print_record(index, record)?;
        }

        writeln!(
            self.writer(),
            "{}",
            format!("edit script length: {}", outcome.edit_script_length).bold()
        )?;

        Ok(())
    }

    fn print_record(&self, index: usize, record: &StepRecord) -> anyhow::Result<()> {
        let direction = if record.reverse {
            "rev".magenta()
        } else {
            "fwd".cyan()
        };
        let marker = if record.top_level { "*" } else { " " };
        let head = if record.path.is_empty() {
            "-".to_string()
        } else {
            record.head().to_string()
        };

        writeln!(
            self.writer(),
            "{index:>4} {direction} {marker} d={:<4} {head:<10} {}",
            record.diagonal,
            render_tagged(&record.tagged)
        )?;

        Ok(())
    }
}
