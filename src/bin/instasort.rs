//! Command-line front end: sort a saved feed page by views.
//!
//! Reads HTML from a file or stdin, writes the reordered page to stdout (or
//! `--output`) and the JSON response to stderr. Set `RUST_LOG=debug` for
//! scan details.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rs_instasort::{dom, handle_message, sort_html_bytes, Options, Response};

#[derive(Debug, Parser)]
#[command(name = "instasort", version, about = "Sort Instagram feed posts by views")]
struct Args {
    /// HTML file to sort; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write the sorted page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with sorting options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL the page was saved from, checked against the target host
    #[arg(long)]
    url: Option<String>,

    /// Redistribute reels grid tiles over rows of this size
    #[arg(long)]
    row_size: Option<usize>,

    /// Raw JSON request to handle instead of a plain sort
    #[arg(long)]
    request: Option<String>,

    /// Print only the JSON response on stdout
    #[arg(long)]
    response_only: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(response) => exit_code(&response),
        Err(err) => {
            log::error!("{err}");
            eprintln!("instasort: {err}");
            ExitCode::FAILURE
        }
    }
}

fn exit_code(response: &Response) -> ExitCode {
    if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(args: &Args) -> Result<Response, Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => Options::from_json(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };
    if args.url.is_some() {
        options.url.clone_from(&args.url);
    }
    if args.row_size.is_some() {
        options.row_size = args.row_size;
    }
    options.validate()?;

    let html = read_input(args.input.as_ref())?;

    let (response, sorted_html) = match &args.request {
        Some(request) => {
            let decoded = rs_instasort::encoding::decode_html(&html);
            let doc = dom::parse(&decoded);
            let response = handle_message(&doc, request, &options);
            (response, doc.html().to_string())
        }
        None => {
            let outcome = sort_html_bytes(&html, &options);
            (outcome.response, outcome.html)
        }
    };

    let json = response.to_json();
    if args.response_only {
        println!("{json}");
        return Ok(response);
    }

    eprintln!("{json}");
    match &args.output {
        Some(path) => fs::write(path, sorted_html)?,
        None => io::stdout().write_all(sorted_html.as_bytes())?,
    }
    Ok(response)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
