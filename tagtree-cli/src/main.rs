//! tagtree CLI
//!
//! Reads a document written in the strict HTML subset and writes its tag tree
//! as pretty-printed JSON.
//!
//! Usage:
//!   tagtree                         Convert index.html into index.json
//!   tagtree page.html -o page.json  Choose input and output files
//!   tagtree --html '<p>Hi</p>'      Convert an inline string
//!   tagtree page.html --stdout      Print the JSON instead of writing a file
//!   tagtree page.html --tree        Also print an indented outline
//!   tagtree page.html --tokens      Also list the raw tag tokens
//!
//! Any malformed input aborts the conversion: nothing is written and the
//! process exits with status 1.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tagtree_common::warning;
use tagtree_dom::{Tag, outline, to_json_string_pretty};
use tagtree_html::{BuildOptions, TagTokenizer, build_tree_from_reader, build_tree_with_options};

#[derive(Debug, Parser)]
#[command(name = "tagtree", version, about)]
struct Cli {
    /// HTML file to convert
    #[arg(default_value = "index.html")]
    input: PathBuf,

    /// Where to write the JSON
    #[arg(short, long, default_value = "index.json")]
    output: PathBuf,

    /// Convert this HTML string instead of reading INPUT
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the JSON to stdout instead of writing OUTPUT
    #[arg(long)]
    stdout: bool,

    /// Print an indented outline of the tree
    #[arg(short, long)]
    tree: bool,

    /// List the raw tag tokens before building the tree
    #[arg(long)]
    tokens: bool,

    /// Close tags left open at the end of input instead of failing
    #[arg(long)]
    allow_unbalanced: bool,

    /// Do not print warnings about dropped text
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    const fn build_options(&self) -> BuildOptions {
        BuildOptions {
            strict_balance: !self.allow_unbalanced,
        }
    }

    fn source_name(&self) -> String {
        if self.html.is_some() {
            "--html input".to_string()
        } else {
            self.input.display().to_string()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    warning::set_quiet(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.tokens {
        print_tokens(cli)?;
    }

    let root = parse(cli).with_context(|| format!("failed to convert {}", cli.source_name()))?;

    if cli.tree {
        println!("{}", "HTML Preview:".bold());
        print!("{}", outline(&root));
        println!();
    }

    write_json(cli, &root)
}

fn parse(cli: &Cli) -> Result<Tag> {
    let options = cli.build_options();

    if let Some(html) = &cli.html {
        return Ok(build_tree_with_options(html.lines(), options)?);
    }

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    Ok(build_tree_from_reader(BufReader::new(file), options)?)
}

fn print_tokens(cli: &Cli) -> Result<()> {
    let text = match &cli.html {
        Some(html) => html.clone(),
        None => fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to read {}", cli.input.display()))?,
    };

    let tokens = TagTokenizer::tokenize(&text)
        .with_context(|| format!("failed to tokenize {}", cli.source_name()))?;

    println!("{}", format!("=== Tag Tokens ({}) ===", tokens.len()).bold());
    for (i, token) in tokens.iter().enumerate() {
        match &token.content {
            Some(content) => println!("  {i:3}: {token} {}", format!("{content:?}").dimmed()),
            None => println!("  {i:3}: {token}"),
        }
    }
    println!();
    Ok(())
}

fn write_json(cli: &Cli, root: &Tag) -> Result<()> {
    let mut json = to_json_string_pretty(root).context("failed to render JSON")?;
    json.push('\n');

    if cli.stdout {
        print!("{json}");
        return Ok(());
    }

    fs::write(&cli.output, json)
        .with_context(|| format!("failed to save JSON to {}", cli.output.display()))?;
    println!(
        "{}",
        format!("Saved JSON representation to {}", cli.output.display()).green()
    );
    Ok(())
}
