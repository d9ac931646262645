use documiner::application::ports::ReportRenderer;
use documiner::domain::ExtractedSection;
use documiner::infrastructure::report::PdfReportRenderer;

fn section(title: &str, rank: u8) -> ExtractedSection {
    ExtractedSection {
        document: "report.pdf".to_string(),
        page: 1,
        section_title: title.to_string(),
        importance_rank: rank,
        content: "Some content about the findings.".to_string(),
        tags: Some(vec!["Key Takeaway".to_string()]),
    }
}

#[test]
fn given_sections_when_rendering_then_produces_pdf_bytes() {
    let bytes = PdfReportRenderer::new()
        .render(&[section("Findings", 9), section("Limits", 3)])
        .unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn given_many_sections_when_rendering_then_output_grows_with_pages() {
    let renderer = PdfReportRenderer::new();
    let few = renderer.render(&[section("Findings", 9)]).unwrap();
    let sections: Vec<ExtractedSection> =
        (0..120).map(|i| section(&format!("Section {i}"), 5)).collect();

    let many = renderer.render(&sections).unwrap();

    assert!(many.starts_with(b"%PDF-"));
    assert!(many.len() > few.len());
}

#[test]
fn given_no_sections_when_rendering_then_still_produces_header_only_report() {
    let bytes = PdfReportRenderer::new().render(&[]).unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
}
