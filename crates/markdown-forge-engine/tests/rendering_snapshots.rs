use markdown_forge_engine::{MarkdownError, extract_title, render_document};

#[test]
fn fixture_blog_post() {
    assert_fixture("blog_post");
}

#[test]
fn fixture_heading_run() {
    assert_fixture("heading_run");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_code_fence() {
    assert_fixture("code_fence");
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.md", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let html = render_document(&read_fixture(name)).unwrap();
    let fixtures_dir = fixtures_dir();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

#[test]
fn fixture_titles() {
    assert_eq!(extract_title(&read_fixture("blog_post")).unwrap(), "Tolkien Fan Club");
    assert_eq!(extract_title(&read_fixture("heading_run")).unwrap(), "Main");
    assert_eq!(
        extract_title(&read_fixture("lists")),
        Err(MarkdownError::NoTitleFound)
    );
}
