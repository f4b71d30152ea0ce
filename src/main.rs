//! `headermod`: send one HTTP request through a header-modifying transport.
//!
//! ```text
//! headermod [--config FILE] [-X METHOD] [-s 'Name: value']... [-a 'Name: value']...
//!           [-d BODY] [--log-level LEVEL] URL
//! ```
//!
//! Headers given with `--set`/`--add` are appended after the config file's
//! values for the same header. The response status line and headers are
//! printed, followed by the body.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use clap::Parser;
use http::{HeaderName, HeaderValue, Method, Request, Uri};
use http_body_util::{BodyExt, Full};

use header_modification::config::{load_config, HeaderModConfig};
use header_modification::headers::{parse_header_line, HeaderSet};
use header_modification::observability::init_logging;
use header_modification::{Sender, Transport};

#[derive(Parser)]
#[command(name = "headermod")]
#[command(about = "Send an HTTP request with modified headers", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request method.
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Header to overwrite, as `Name: value`. Repeatable.
    #[arg(short, long, value_name = "HEADER", value_parser = parse_header_line)]
    set: Vec<(HeaderName, HeaderValue)>,

    /// Header to append, as `Name: value`. Repeatable.
    #[arg(short, long, value_name = "HEADER", value_parser = parse_header_line)]
    add: Vec<(HeaderName, HeaderValue)>,

    /// Request body.
    #[arg(short, long)]
    data: Option<String>,

    /// Log level used when RUST_LOG is unset; overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Target URL (http only with the default client).
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HeaderModConfig::default(),
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    init_logging(&level)?;

    config
        .headers
        .set
        .extend_from(&cli.set.into_iter().collect::<HeaderSet>());
    config
        .headers
        .add
        .extend_from(&cli.add.into_iter().collect::<HeaderSet>());

    let uri: Uri = cli.url.parse()?;
    if uri.scheme_str() == Some("https") {
        return Err("the default client only speaks plain http".into());
    }
    let method: Method = cli.method.parse()?;
    let body = cli.data.map(Bytes::from).unwrap_or_default();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Full::new(body))?;

    let transport = Transport::from(&config);

    tracing::info!(
        method = %request.method(),
        uri = %request.uri(),
        set_headers = transport.set().len(),
        add_headers = transport.add().len(),
        "Sending request"
    );

    let response = transport.send(Arc::new(request)).await?;
    let (parts, body) = response.into_parts();
    let body = body.collect().await?.to_bytes();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{:?} {}", parts.version, parts.status)?;
    for (name, value) in &parts.headers {
        writeln!(stdout, "{}: {}", name, String::from_utf8_lossy(value.as_bytes()))?;
    }
    writeln!(stdout)?;
    stdout.write_all(&body)?;
    stdout.flush()?;

    Ok(())
}
