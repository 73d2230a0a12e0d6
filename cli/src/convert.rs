use std::path::Path;

/// Convert the SVG file at `input` into a drawing script.
pub fn convert_(input: &Path) -> Result<String, String> {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Warn);
    }

    let svg = std::fs::read_to_string(input).map_err(|_| "Failed to load SVG file")?;
    let (script, report) = svg2ir::to_text(&svg).map_err(|err| err.to_string())?;

    if !report.is_clean() {
        log::warn!(
            "{} unsupported feature(s) skipped, {} offset stack underflow(s)",
            report.unsupported.len(),
            report.stack_underflows
        );
    }

    Ok(script)
}

/// Writes warnings and errors to stderr, keeping stdout for the script.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = if !record.target().is_empty() {
            record.target()
        } else {
            record.module_path().unwrap_or_default()
        };

        let label = match record.level() {
            log::Level::Error => "Error",
            log::Level::Warn => "Warning",
            log::Level::Info => "Info",
            log::Level::Debug => "Debug",
            log::Level::Trace => "Trace",
        };

        eprintln!("{label} (in {target}:{}): {}", record.line().unwrap_or(0), record.args());
    }

    fn flush(&self) {}
}
