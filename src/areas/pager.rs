use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Feeds everything written to it into a minus pager
///
/// The pager only shows its content once `minus::page_all` is called on a clone of
/// the same `Pager`.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where command output goes: the pager on an interactive terminal, stdout otherwise
pub enum Output {
    Paged(Pager),
    Plain,
}

impl Output {
    pub fn detect(allow_pager: bool) -> Self {
        if allow_pager && io::stdout().is_terminal() {
            Output::Paged(Pager::new())
        } else {
            Output::Plain
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Output::Paged(_)) || io::stdout().is_terminal()
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
            Output::Plain => Box::new(io::stdout()),
        }
    }

    /// Hands the buffered output to the pager; a no-op for plain output
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Paged(pager) = self {
            minus::page_all(pager)?;
        }
        Ok(())
    }
}
