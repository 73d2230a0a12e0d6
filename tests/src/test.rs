use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use svg2ir_tests::*;

#[derive(Parser, Debug)]
#[clap(about = "Compare every svg file against its reference script", version)]
struct Args {
    /// Overwrite the references of failing files with the current output.
    #[clap(short, long)]
    replace: bool,
    /// Also print successful and skipped files, and the reason for failures.
    #[clap(short, long)]
    verbose: bool,
}

#[derive(PartialEq, Eq)]
enum TestStatus {
    Success,
    Failure,
    Skipped,
}

impl Display for TestStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TestStatus::Success => write!(f, "SUCCESS"),
            TestStatus::Failure => write!(f, "FAILURE"),
            TestStatus::Skipped => write!(f, "SKIPPED"),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let references: Vec<TestFile> = REF_FILES.iter().map(|f| TestFile::new(f)).collect();
    let svg_files: Vec<TestFile> = SVG_FILES.iter().map(|f| TestFile::new(f)).collect();

    let mut successes = 0;
    let mut failures = 0;
    let mut skipped = 0;

    println!("Testing {} files in total.", svg_files.len());

    for svg_file in &svg_files {
        let status = if !references.contains(svg_file) {
            skipped += 1;
            TestStatus::Skipped
        } else {
            match run_test_impl(&svg_file.as_svg_path(), &svg_file.as_ref_path()) {
                Ok(_) => {
                    successes += 1;
                    TestStatus::Success
                }
                Err(message) => {
                    failures += 1;
                    if args.verbose {
                        println!("{message}");
                    }
                    if args.replace {
                        replace_reference(svg_file);
                    }
                    TestStatus::Failure
                }
            }
        };

        let _ = print_test_case_result(status, svg_file, args.verbose);
    }

    let _ = StandardStream::stdout(ColorChoice::Always).reset();

    println!("SUMMARY");
    println!("TOTAL - {}", svg_files.len());
    println!("SUCCESS - {successes}");
    println!("FAILURE - {failures}");
    println!("SKIPPED - {skipped}");

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn replace_reference(svg_file: &TestFile) {
    match convert_svg(&svg_file.as_svg_path()) {
        Ok((script, _)) => {
            if let Err(err) = fs::write(svg_file.as_ref_path(), script) {
                eprintln!("failed to replace {}: {err}", svg_file.as_ref_path().display());
            }
        }
        Err(message) => eprintln!("{message}"),
    }
}

fn print_test_case_result(
    status: TestStatus,
    file: &TestFile,
    verbose: bool,
) -> io::Result<()> {
    if status != TestStatus::Failure && !verbose {
        return Ok(());
    }

    let color = match status {
        TestStatus::Success => Color::Green,
        TestStatus::Failure => Color::Red,
        TestStatus::Skipped => Color::White,
    };

    let mut stdout = StandardStream::stdout(ColorChoice::Always);
    stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(&mut stdout, "{} - {}", status, file.as_svg_path().display())?;
    stdout.reset()
}
