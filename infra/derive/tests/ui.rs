#[test]
fn codebook_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/codebook_error_pass.rs");
    t.pass("tests/ui/codebook_error_message_only.rs");
    t.compile_fail("tests/ui/codebook_error_tuple_variant.rs");
    t.compile_fail("tests/ui/codebook_error_no_context.rs");
    t.compile_fail("tests/ui/codebook_error_bad_context_type.rs");
    t.compile_fail("tests/ui/codebook_error_duplicate_source.rs");
}
