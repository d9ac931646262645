mod pdf_adapter_test;
mod pdf_report_renderer_test;
mod prompt_sanitizer_test;
mod table_layout_test;
mod text_sanitizer_test;
