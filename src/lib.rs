pub mod config;
pub mod html;
pub mod inline_parser;

pub use config::Config;
pub use config::ConfigBuilder;
pub use inline_parser::{Delimiter, DelimiterTable, Renderer};

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders inline markup only, without paragraph or document handling.
///
/// # Examples
///
/// ```rust
/// let html = tagdown::render_inline("_a __b__ c_", None);
/// assert_eq!(html, "<em>a <strong>b</strong> c</em>");
/// ```
pub fn render_inline(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    let table = config.delimiter_table();
    Renderer::new(&table)
        .with_max_depth(config.max_depth)
        .render(input)
}

/// Renders a text to HTML.
///
/// Inline markup is rendered first, then blank lines become paragraph
/// boundaries (`paragraphs`), and finally the result is wrapped in an HTML
/// document (`document`).
///
/// # Arguments
///
/// * `input` - The text to render
/// * `config` - Optional configuration (defaults to default config)
pub fn render(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let table = config.delimiter_table();

    log::debug!(
        "Rendering {} bytes with {} delimiters",
        input.len(),
        table.len()
    );

    let mut out = Renderer::new(&table)
        .with_max_depth(config.max_depth)
        .render(input);

    if config.paragraphs {
        out = html::split_paragraphs(&out);
    }

    if config.document {
        out = html::wrap_document(&out, config.title.as_deref());
    }

    out
}

pub fn render_with_defaults(input: &str) -> String {
    render(input, None)
}

/// Lists the delimiter candidates of `input` with their roles, one per line.
pub fn scan(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    let table = config.delimiter_table();

    inline_parser::analyze(input, &table)
        .iter()
        .map(|candidate| format!("{candidate}\n"))
        .collect()
}
