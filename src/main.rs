//! Linkform CLI
//!
//! Usage:
//!   linkform [OPTIONS] [VALUE]...
//!
//! Options:
//!   -p, --params <FILE>   Format parameters (TOML)
//!       --origin <URL>    Origin of the embedding application
//!       --pathname <PATH> Path of the current page
//!       --base-path <P>   Path the application is mounted under
//!   -t, --text            Emit plain labels instead of markup
//!   -e, --examples        Show annotated examples

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkform::{FieldValue, LocationContext, RenderContext, UrlFormatParams, UrlFormatter};

#[derive(Parser)]
#[command(name = "linkform")]
#[command(about = "Format field values as hyperlinks, image tags, or plain labels")]
struct Cli {
    /// Values to format (reads lines from stdin if not provided)
    values: Vec<String>,

    /// Format parameters file (TOML)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Origin of the embedding application, e.g. https://host:5601
    #[arg(long)]
    origin: Option<String>,

    /// Path of the current page, e.g. /app/discover
    #[arg(long)]
    pathname: Option<String>,

    /// Path the application is mounted under
    #[arg(long)]
    base_path: Option<String>,

    /// Emit plain labels instead of markup
    #[arg(short, long)]
    text: bool,

    /// Show annotated examples
    #[arg(short, long)]
    examples: bool,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if cli.examples {
        print_examples();
        return;
    }

    // Load format parameters
    let params = match &cli.params {
        Some(path) => match UrlFormatParams::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading params '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => UrlFormatParams::default(),
    };

    // A usable location needs at least origin and pathname
    let location = match (cli.origin, cli.pathname) {
        (Some(origin), Some(pathname)) => {
            Some(LocationContext::new(origin, pathname, cli.base_path))
        }
        _ => None,
    };

    // Read values
    let values: Vec<String> = if !cli.values.is_empty() {
        cli.values
    } else if io::stdin().is_terminal() {
        print_intro();
        return;
    } else {
        io::stdin().lock().lines().map_while(Result::ok).collect()
    };

    let formatter = UrlFormatter::new(&params);
    let mut ctx = RenderContext::new();
    if let Some(location) = &location {
        ctx = ctx.with_location(location);
    }

    for value in values {
        let value = FieldValue::from(value);
        if cli.text {
            println!("{}", formatter.format_text(&value));
        } else {
            println!("{}", formatter.format_html(&value, &ctx));
        }
    }
}

fn print_intro() {
    println!(
        r#"Linkform - format field values as hyperlinks, image tags, or labels

USAGE:
    linkform [OPTIONS] [VALUE]...
    printf 'john\njane\n' | linkform --params params.toml

OPTIONS:
    -p, --params       Format parameters file (TOML)
        --origin       Origin of the embedding application
        --pathname     Path of the current page
        --base-path    Path the application is mounted under
    -t, --text         Emit plain labels instead of markup
    -e, --examples     Show annotated examples
    -h, --help         Print help

QUICK START:
    linkform --params params.toml john > out.html

Run --examples for params file patterns."#
    );
}

fn print_examples() {
    println!(
        r#"LINKFORM EXAMPLES
=================

EXAMPLE 1: Link to a user page
------------------------------
# params.toml
url_template = "https://example.com/user/{{{{value}}}}"
label_template = "profile of {{{{value}}}}"

    $ linkform --params params.toml john
    <a href="https://example.com/user/john" target="_blank">profile of john</a>

The value is percent-encoded where it lands in the url ({{{{value}}}}) and
kept verbatim as {{{{rawValue}}}}. The label template can reference the
resolved url as {{{{url}}}}.

EXAMPLE 2: Status icons
-----------------------
# params.toml
type = "img"
url_template = "https://example.com/icons/{{{{value}}}}.png"

    $ linkform --params params.toml go stop
    <img src="https://example.com/icons/go.png" alt="...">
    <img src="https://example.com/icons/stop.png" alt="...">

EXAMPLE 3: Relative urls
------------------------
Urls without an http:// or https:// scheme are only linked when the
embedding location is known:

    $ linkform --origin http://host:5601 --pathname /app/discover \
        --base-path /base '#/discover'
    <a href="http://host:5601/app/discover#/discover" target="_blank">#/discover</a>

Without --origin/--pathname the same value renders as plain text."#
    );
}
