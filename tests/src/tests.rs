use std::path::Path;

use svg2ir::{Point, Unsupported};

use crate::{convert_svg, convert_svg_to_pdf, run_test, TestFile, REF_FILES, SVG_FILES};

#[test]
fn every_reference_has_an_svg() {
    let svg_files: Vec<TestFile> = SVG_FILES.iter().map(|f| TestFile::new(f)).collect();
    assert!(!REF_FILES.is_empty());

    for reference in REF_FILES.iter() {
        let file = TestFile::new(reference);
        assert!(svg_files.contains(&file), "{} has no svg", reference.display());
    }
}

#[test]
fn path_closed_triangle() {
    assert!(run_test("path/closed-triangle").is_clean());
}

#[test]
fn path_curve_closure() {
    assert!(run_test("path/curve-closure").is_clean());
}

#[test]
fn path_curve_closed_subpaths() {
    assert!(run_test("path/curve-closed-subpaths").is_clean());
}

#[test]
fn path_smooth_and_relative() {
    assert!(run_test("path/smooth-and-relative").is_clean());
}

#[test]
fn path_rounding() {
    assert!(run_test("path/rounding").is_clean());
}

#[test]
fn path_arc_unsupported() {
    let report = run_test("path/arc-unsupported");
    assert_eq!(report.unsupported, vec![Unsupported::Arc { radius: Point::new(5.0, 5.0) }]);
}

#[test]
fn structure_nested_groups() {
    assert!(run_test("structure/nested-groups").is_clean());
}

#[test]
fn structure_view_box_origin() {
    assert!(run_test("structure/view-box-origin").is_clean());
}

#[test]
fn structure_empty_view_box() {
    assert!(run_test("structure/empty-view-box").is_clean());
}

#[test]
fn structure_unsupported_elements() {
    let report = run_test("structure/unsupported-elements");
    assert_eq!(
        report.unsupported,
        vec![
            Unsupported::Rectangle,
            Unsupported::Element("ellipse".into()),
            Unsupported::Transform("rotate(45)".into()),
        ]
    );
    assert_eq!(report.stack_underflows, 0);
}

#[test]
fn style_fill_classes() {
    assert!(run_test("style/fill-classes").is_clean());
}

#[test]
fn conversion_is_deterministic() {
    for path in SVG_FILES.iter() {
        let first = convert_svg(path).unwrap().0;
        let second = convert_svg(path).unwrap().0;
        assert_eq!(first, second, "{} is not deterministic", path.display());
    }
}

#[test]
fn every_file_converts_to_pdf() {
    for path in SVG_FILES.iter() {
        let pdf = convert_svg_to_pdf(path).unwrap();
        assert!(pdf.starts_with(b"%PDF-"), "{} is not a pdf", path.display());
    }
}

#[test]
fn filled_paths_are_painted_in_pdf() {
    let pdf = convert_svg_to_pdf(Path::new("svg/path/closed-triangle.svg")).unwrap();
    let content = String::from_utf8_lossy(&pdf);
    assert!(content.contains("1 0 0 rg"));
    assert!(content.contains("\nf"));
}
