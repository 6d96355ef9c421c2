use serde::Serialize;

use widthscan_core::Real;
use widthscan_solvers::sweep::{Action, Config, Event};

/// Metadata printed before a run.
#[derive(Debug, Serialize)]
pub struct RunInfo {
    #[serde(rename = "float type")]
    pub float_type: &'static str,
    pub strategy: &'static str,
    pub tightening: &'static str,
}

impl RunInfo {
    #[must_use]
    pub fn new<T: Real>(config: &Config) -> Self {
        Self {
            float_type: T::NAME,
            strategy: config.strategy.name(),
            tightening: config.tightening.name(),
        }
    }

    /// Serializes as JSON indented by four spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Formats one solved width as `<width>\t<answer>`.
pub fn width_line<T: Real>(width: u32, answer: T) -> String {
    format!("{width}\t{answer}")
}

/// Formats the elapsed-time footer.
pub fn duration_line(elapsed: std::time::Duration) -> String {
    format!("Duration: {:.2} s", elapsed.as_secs_f64())
}

/// Sweep observer that prints each width as soon as it is solved.
pub fn print_width<T: Real>(event: &Event<'_, T>) -> Option<Action> {
    println!("{}", width_line(event.width, event.answer()));
    None
}
