use crate::areas::engine::Engine;
use crate::artifacts::diff::middle_snake::compute_middle_snake;
use colored::Colorize;

impl Engine {
    pub fn snake(&self, old: &str, new: &str) -> anyhow::Result<()> {
        let input = self.input(old, new)?;
        let snake = compute_middle_snake(&input);

        let found_by = if snake.found_in_reverse {
            "reverse"
        } else {
            "forward"
        };

        writeln!(
            self.writer(),
            "{}",
            format!("edit script length: {}", snake.edit_script_length).bold()
        )?;
        writeln!(self.writer(), "found by: {found_by} search")?;
        writeln!(self.writer(), "snake: {}", snake.path)?;
        writeln!(self.writer(), "records: {}", snake.trace.len())?;

        Ok(())
    }
}
