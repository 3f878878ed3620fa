use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagdown")]
#[command(author, version)]
#[command(about = "Render emphasis, strong emphasis and inline code to HTML")]
#[command(
    long_about = "Tagdown turns text with _emphasis_, __strong emphasis__ and `inline code` \
    into HTML. Unmatched or escaped delimiters are left as they are, blank lines become \
    paragraph boundaries, and the result is wrapped in a minimal HTML document."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    tagdown render notes.txt

    # Render to a file
    tagdown render notes.txt -o notes.html

    # Render from stdin, inline HTML only
    echo '_hello_ __world__' | tagdown render --fragment

    # Show how delimiters are classified
    tagdown scan notes.txt

CONFIGURATION:

Tagdown looks for configuration files in this order:
  1. Explicit --config path
  2. tagdown.toml or .tagdown.toml in the input's directory and its parents
  3. ~/.config/tagdown/config.toml (XDG)
  4. Built-in defaults

Example .tagdown.toml:

    max_depth = 16
    title = \"Notes\"

    [delimiters]
    \"_\" = \"em\"
    \"__\" = \"strong\"
    \"`\" = { tag = \"code\", opaque = true }
    \"~~\" = \"del\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, env = "TAGDOWN_CONFIG")]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, tagdown will \
        search for .tagdown.toml or tagdown.toml in the input's directory and its parents, \
        then fall back to ~/.config/tagdown/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a text file to HTML
    #[command(
        long_about = "Render a text file to HTML. Emphasis, strong emphasis and inline code \
        are converted to tags; everything else is copied through. By default the output is \
        a complete HTML document written to stdout."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    tagdown render notes.txt

    # Render to a file
    tagdown render notes.txt --output notes.html

    # Inline HTML only, no document skeleton
    tagdown render --fragment notes.txt

RENDERING RULES:

  - _text_ becomes <em>, __text__ becomes <strong>, `text` becomes <code>
  - Delimiters must touch their content and be separated from surrounding words
  - Nothing inside `code` is interpreted
  - A backslash before a delimiter keeps it literal
  - Blank lines separate paragraphs")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        #[arg(help = "Write the HTML to this file")]
        output: Option<PathBuf>,

        /// Emit inline HTML without the document skeleton
        #[arg(long)]
        #[arg(help = "Emit the rendered fragment without the document skeleton")]
        fragment: bool,

        /// Keep blank lines instead of splitting paragraphs
        #[arg(long)]
        #[arg(help = "Do not turn blank lines into paragraph boundaries")]
        no_paragraphs: bool,
    },
    /// Show delimiter candidates and their roles for debugging
    #[command(
        long_about = "List every delimiter candidate in the input with its byte range, token, \
        scan direction and whether it can open or close a span at the top level."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Scan a file
    tagdown scan notes.txt

    # Scan stdin
    echo '___a___' | tagdown scan")]
    Scan {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
