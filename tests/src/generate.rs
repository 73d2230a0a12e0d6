use std::fs;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

use svg2ir_tests::*;

#[derive(Parser, Debug)]
#[clap(about = "Regenerate the reference scripts", version)]
struct Args {
    /// Generate references for all svg files, not only the ones that already have one.
    #[clap(short, long)]
    full: bool,
    /// Only generate the files whose path matches this expression.
    #[clap(short, long)]
    subset: Option<Regex>,
    /// Write uncompressed pdfs into the pdf directory instead of reference scripts.
    #[clap(short, long)]
    pdf: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.pdf {
        let _ = fs::remove_dir_all(PDF_DIR);
    }

    let matches_subset = |f: &TestFile| {
        args.subset
            .as_ref()
            .map_or(true, |r| r.is_match(&f.as_raw_path().to_string_lossy()))
    };

    let existing_references: Vec<TestFile> =
        REF_FILES.iter().map(|f| TestFile::new(f)).collect();
    let svg_files: Vec<TestFile> = SVG_FILES
        .iter()
        .map(|f| TestFile::new(f))
        .filter(|f| args.full || args.subset.is_some() || existing_references.contains(f))
        .filter(matches_subset)
        .collect();

    if args.full {
        println!("Generating {} reference scripts...", svg_files.len());
    } else {
        println!(
            "Regenerating {} of {} reference scripts...",
            svg_files.len(),
            SVG_FILES.len()
        );
    }

    let progress_bar = ProgressBar::new(svg_files.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:60.yellow} {pos:>7}/{len:7} {msg}",
    ) {
        progress_bar.set_style(style);
    }

    let mut failures = 0;
    for svg_file in &svg_files {
        progress_bar.set_message(svg_file.as_raw_path().display().to_string());

        if let Err(message) = generate(svg_file, args.pdf) {
            progress_bar.println(message);
            failures += 1;
        }

        progress_bar.inc(1);
    }

    progress_bar.finish();

    if failures > 0 {
        println!("{failures} files could not be generated.");
        ExitCode::FAILURE
    } else {
        println!("Reference scripts have been generated successfully.");
        ExitCode::SUCCESS
    }
}

fn generate(svg_file: &TestFile, pdf: bool) -> Result<(), String> {
    let (path, contents) = if pdf {
        (svg_file.as_pdf_path(), convert_svg_to_pdf(&svg_file.as_svg_path())?)
    } else {
        let (script, _) = convert_svg(&svg_file.as_svg_path())?;
        (svg_file.as_ref_path(), script.into_bytes())
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    fs::write(&path, contents).map_err(|err| format!("{}: {err}", path.display()))
}
