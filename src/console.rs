use std::sync::{Arc, Mutex};

/// Output text stream shared by every object in the fixture
///
/// A default console writes each line to stdout. A capturing console keeps the
/// lines in memory instead so callers can inspect exactly what was printed.
#[derive(Debug, Clone, Default)]
pub struct Console {
    transcript: Option<Arc<Mutex<Vec<String>>>>,
}

impl Console {
    /// Console that prints to process stdout
    pub fn stdout() -> Self {
        Self::default()
    }

    /// Console that records lines instead of printing them
    pub fn capturing() -> Self {
        Self {
            transcript: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.transcript.is_some()
    }

    /// Emit one line
    pub fn write_line(&self, line: impl Into<String>) {
        let line = line.into();
        log::trace!("-> {line}");
        match &self.transcript {
            Some(transcript) => transcript.lock().unwrap().push(line),
            None => println!("{line}"),
        }
    }

    /// Lines captured so far. Always empty for a stdout console.
    pub fn lines(&self) -> Vec<String> {
        self.transcript
            .as_ref()
            .map(|transcript| transcript.lock().unwrap().clone())
            .unwrap_or_default()
    }

    /// Drain the captured lines, leaving the transcript empty
    pub fn take_lines(&self) -> Vec<String> {
        self.transcript
            .as_ref()
            .map(|transcript| std::mem::take(&mut *transcript.lock().unwrap()))
            .unwrap_or_default()
    }
}
