#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use walkdir::WalkDir;

use svg2ir::{Options, Report};

pub const SVG_DIR: &str = "svg";
pub const REF_DIR: &str = "ref";
pub const PDF_DIR: &str = "pdf";

fn files_with_extension(dir: &str, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some(extension))
        .map(|e| e.into_path())
        .collect()
}

lazy_static! {
    pub static ref SVG_FILES: Vec<PathBuf> = files_with_extension(SVG_DIR, "svg");
    pub static ref REF_FILES: Vec<PathBuf> = files_with_extension(REF_DIR, "txt");
}

/// A test case, addressable in each of its formats: the svg input, the reference
/// script and the generated pdf.
#[derive(Debug, Eq, PartialEq)]
pub struct TestFile {
    raw_path: PathBuf,
}

impl TestFile {
    pub fn new(path: &Path) -> Self {
        let mut stripped_path = path.with_extension("");

        for prefix in [SVG_DIR, REF_DIR, PDF_DIR] {
            if let Ok(stripped) = stripped_path.strip_prefix(prefix) {
                stripped_path = stripped.to_path_buf();
                break;
            }
        }

        TestFile { raw_path: stripped_path }
    }

    fn convert_path(&self, prefix: &str, extension: &str) -> PathBuf {
        let mut path_buf = PathBuf::from(prefix);
        path_buf.push(&self.raw_path);
        path_buf.set_extension(extension);
        path_buf
    }

    pub fn as_raw_path(&self) -> &Path {
        &self.raw_path
    }

    pub fn as_svg_path(&self) -> PathBuf {
        self.convert_path(SVG_DIR, "svg")
    }

    pub fn as_ref_path(&self) -> PathBuf {
        self.convert_path(REF_DIR, "txt")
    }

    pub fn as_pdf_path(&self) -> PathBuf {
        self.convert_path(PDF_DIR, "pdf")
    }
}

/// Convert a test file into its script.
pub fn convert_svg(svg_path: &Path) -> Result<(String, Report), String> {
    let svg = fs::read_to_string(svg_path)
        .map_err(|err| format!("failed to read {}: {err}", svg_path.display()))?;
    svg2ir::to_text(&svg).map_err(|err| format!("failed to convert {}: {err}", svg_path.display()))
}

/// Convert a test file into an uncompressed pdf, which is easier to inspect.
pub fn convert_svg_to_pdf(svg_path: &Path) -> Result<Vec<u8>, String> {
    let svg = fs::read_to_string(svg_path)
        .map_err(|err| format!("failed to read {}: {err}", svg_path.display()))?;
    svg2ir::to_pdf(&svg, Options { compress: false })
        .map(|(pdf, _)| pdf)
        .map_err(|err| format!("failed to convert {}: {err}", svg_path.display()))
}

/// Find the first line where the actual script deviates from the expected one.
pub fn first_difference(expected: &str, actual: &str) -> Option<(usize, String, String)> {
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();

    for line in 1.. {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (e, a) if e == a => continue,
            (e, a) => {
                return Some((
                    line,
                    e.unwrap_or("<end of file>").to_string(),
                    a.unwrap_or("<end of file>").to_string(),
                ))
            }
        }
    }

    None
}

/// Compare the script generated for an svg file with its reference.
pub fn run_test_impl(svg_path: &Path, ref_path: &Path) -> Result<Report, String> {
    let expected = fs::read_to_string(ref_path)
        .map_err(|err| format!("failed to read {}: {err}", ref_path.display()))?;
    let (actual, report) = convert_svg(svg_path)?;

    match first_difference(&expected, &actual) {
        None => Ok(report),
        Some((line, expected, actual)) => Err(format!(
            "{} differs on line {line}\n  expected: {expected}\n    actual: {actual}",
            svg_path.display()
        )),
    }
}

/// Run the test case at `name`, relative to the svg directory and without extension.
pub fn run_test(name: &str) -> Report {
    let file = TestFile::new(Path::new(name));
    match run_test_impl(&file.as_svg_path(), &file.as_ref_path()) {
        Ok(report) => report,
        Err(message) => panic!("{message}"),
    }
}
