use approx::assert_relative_eq;
use config::constants::ExtrusionConfig;
use extrude_mesh::Triangulation;
use svg2obj::{convert, ConversionError, ConvertOptions, PathId, SubpathMode};
use svg_document::Document;

const DOC: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
  <path id="square" d="M0,0 L10,0 L10,10 L0,10 Z"/>
  <path id="line" d="M0,0 L5,5"/>
  <path id="broken" d="M0,0 C1,2,3"/>
  <path/>
  <path d="M20,20 h10 v10 h-10 z"/>
</svg>"#;

fn options(width: f64, depth: f64) -> ConvertOptions {
    ConvertOptions::new(ExtrusionConfig::new(width, depth, 5).unwrap())
}

fn obj_text(doc: &Document, options: &ConvertOptions) -> String {
    let conversion = convert(doc, options);
    let mut out = Vec::new();
    conversion.write_obj(&mut out, "doc.svg").unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn report_counts_every_outcome() {
    let doc = Document::parse(DOC).unwrap();
    let conversion = convert(&doc, &options(100.0, 10.0));
    let report = &conversion.report;

    assert_eq!(report.paths_found, 5);
    assert_eq!(report.paths_converted, 2);
    assert_eq!(report.paths_without_data, vec![PathId::new(3, None)]);
    assert_eq!(report.skipped_degenerate, vec![PathId::new(1, Some("line".into()))]);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        &report.failed[0],
        ConversionError::MalformedPath { path, .. } if path.to_string() == "#broken"
    ));
}

#[test]
fn solids_are_appended_in_document_order() {
    let doc = Document::parse(DOC).unwrap();
    let mesh = convert(&doc, &options(100.0, 10.0)).mesh;

    // two closed squares of 5 points each
    assert_eq!(mesh.vertex_count(), 20);
    assert_eq!(mesh.triangle_count(), 32);
    assert!(mesh.validate().is_ok());
    // the second solid's first front-cap face starts at vertex 10
    assert_eq!(mesh.triangles()[16], [10, 11, 12]);
}

#[test]
fn scales_to_target_width_and_flips_y() {
    let doc = Document::parse(DOC).unwrap();
    let mesh = convert(&doc, &options(100.0, 4.0)).mesh;

    // scale = 100 / 200
    let v = mesh.vertices()[2];
    assert_relative_eq!(v.x, 5.0);
    assert_relative_eq!(v.y, -5.0);
    assert_relative_eq!(v.z, 2.0);

    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(max.x, 15.0);
    assert_relative_eq!(min.y, -15.0);
    assert_relative_eq!(min.z, -2.0);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let doc = Document::parse(DOC).unwrap();
    let opts = options(100.0, 10.0);
    assert_eq!(obj_text(&doc, &opts), obj_text(&doc, &opts));
}

#[test]
fn obj_text_layout() {
    let doc = Document::parse(
        r#"<svg viewBox="0 0 4 4"><path d="M0,0 L4,0 L4,4 L0,4"/></svg>"#,
    )
    .unwrap();
    let text = obj_text(&doc, &options(4.0, 2.0));
    let expected_head = "# OBJ file generated from SVG\n\
                         # Original SVG: 4.0x4.0\n\
                         # Scaled to: 4 units wide, 2 units deep\n\
                         # Generated from: doc.svg\n\
                         \n\
                         v 0.000000 -0.000000 1.000000\n\
                         v 4.000000 -0.000000 1.000000\n";
    assert!(text.starts_with(expected_head), "{text}");
    assert!(text.contains("\n\nf 1 2 3\nf 1 3 4\nf 5 7 6\nf 5 8 7\nf 1 5 6\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
}

#[test]
fn split_subpaths_extrudes_each_separately() {
    let doc = Document::parse(
        r#"<svg viewBox="0 0 10 10"><path d="M0,0 H4 V4 H0 Z M6,6 h2 v2 h-2 z"/></svg>"#,
    )
    .unwrap();

    let joined = convert(&doc, &options(10.0, 1.0)).mesh;
    let split = convert(&doc, &options(10.0, 1.0).with_subpaths(SubpathMode::Split)).mesh;

    // Z closes each square, so each sub-path has 5 points
    assert_eq!(joined.vertex_count(), 20);
    assert_eq!(split.vertex_count(), 20);
    // one fan over 10 points vs two fans over 5
    assert_eq!(joined.triangle_count(), 2 * 8 + 20);
    assert_eq!(split.triangle_count(), 2 * (2 * 3 + 10));
}

#[test]
fn ear_clip_option_reaches_the_mesh() {
    let doc = Document::parse(
        r#"<svg viewBox="0 0 4 4"><path d="M0,0 L4,0 L4,2 L2,2 L2,4 L0,4 Z"/></svg>"#,
    )
    .unwrap();
    let fan = convert(&doc, &options(4.0, 1.0)).mesh;
    let ear = convert(&doc, &options(4.0, 1.0).with_triangulation(Triangulation::EarClip)).mesh;
    assert_eq!(fan.vertex_count(), ear.vertex_count());
    // 7 points: fan gives 5 triangles per cap, ear clipping 4
    assert_eq!(fan.triangle_count() - ear.triangle_count(), 2);
}

#[test]
fn document_without_paths_gives_empty_mesh() {
    let doc = Document::parse(r#"<svg width="10" height="10"></svg>"#).unwrap();
    let conversion = convert(&doc, &ConvertOptions::default());
    assert!(conversion.mesh.is_empty());
    assert_eq!(conversion.report.paths_found, 0);
    assert!(conversion.report.is_clean());
}
