use documiner::domain::Document;

#[test]
fn given_new_document_when_created_then_has_no_text() {
    let document = Document::new("report.pdf", b"%PDF-1.4".to_vec());

    assert_eq!(document.name, "report.pdf");
    assert_eq!(document.size_bytes(), 8);
    assert!(document.text.is_none());
}

#[test]
fn given_pdf_header_when_checking_signature_then_detects_pdf() {
    assert!(Document::new("a.pdf", b"%PDF-1.7\n...".to_vec()).has_pdf_signature());
    assert!(!Document::new("a.pdf", b"PK\x03\x04".to_vec()).has_pdf_signature());
    assert!(!Document::new("a.pdf", Vec::<u8>::new()).has_pdf_signature());
}

#[test]
fn given_leading_bytes_before_header_when_checking_signature_then_detects_pdf() {
    let mut data = vec![0u8; 600];
    data.extend_from_slice(b"%PDF-1.4\n...");

    assert!(Document::new("mailed.pdf", data).has_pdf_signature());
}

#[test]
fn given_header_past_first_kilobyte_when_checking_signature_then_rejects() {
    let mut data = vec![b' '; 2048];
    data.extend_from_slice(b"%PDF-1.4\n...");

    assert!(!Document::new("late.pdf", data).has_pdf_signature());
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let a = Document::new("a.pdf", Vec::<u8>::new());
    let b = Document::new("a.pdf", Vec::<u8>::new());

    assert_ne!(a.id, b.id);
}

#[test]
fn given_extracted_text_when_attached_then_document_keeps_it() {
    let document = Document::new("a.pdf", Vec::<u8>::new()).with_text("[Page 1]\nHello".to_string());

    assert_eq!(document.text.as_deref(), Some("[Page 1]\nHello"));
}
