// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Read},
    path::PathBuf,
};

use scraper::Html;

use crate::config::options::{CatalogKind, ExportFormat, ExportOptions, ExtractOptions};
use crate::extract::{self, fields::CompiledSpec, table::Table};
use crate::progress::Progress;
use crate::{file, render};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Default path from `ExportOptions`.
    Default,
    /// `-o <path>`; may be a directory hint.
    Path(String),
    Stdout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
    pub output: Output,
    pub inputs: Vec<Input>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Params),
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", HELP);
            Ok(())
        }
        Command::Run(params) => execute(&params),
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut catalog = CatalogKind::default();
    let mut include_image = false;
    let mut include_shows = false;
    let mut skip_header: Option<bool> = None;
    let mut export = ExportOptions::default();
    let mut output = Output::Default;
    let mut inputs = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--catalog" => {
                let v = args.next().ok_or("Missing value for --catalog")?;
                catalog = v.parse()?;
            }
            "--include-image" => include_image = true,
            "--include-shows" => include_shows = true,
            "--skip-header-row" => skip_header = Some(true),
            "--keep-header-row" => skip_header = Some(false),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                export.format = v.parse::<ExportFormat>()?;
            }
            "--no-headers" => export.include_headers = false,
            "--hyperlinks" => export.hyperlinks = true,
            "-o" | "--out" => output = Output::Path(args.next().ok_or("Missing output path")?),
            "--stdout" => output = Output::Stdout,
            "-h" | "--help" => return Ok(Command::Help),
            "-" => inputs.push(Input::Stdin),
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            other => inputs.push(Input::Path(PathBuf::from(other))),
        }
    }

    if inputs.is_empty() {
        return Err("No input pages given (use '-' for stdin, --help for usage)".into());
    }
    if inputs.iter().filter(|i| **i == Input::Stdin).count() > 1 {
        return Err("stdin ('-') can only be read once".into());
    }

    let mut extract = ExtractOptions::for_catalog(catalog);
    extract.include_image = include_image;
    extract.include_shows = include_shows;
    if let Some(skip) = skip_header {
        extract.skip_header_row = skip;
    }
    export.set_default_stem_for(catalog);

    Ok(Command::Run(Params { extract, export, output, inputs }))
}

/// Read every input, build one table, then write or print it.
pub fn execute(params: &Params) -> Result<(), Box<dyn Error>> {
    let mut prog = CliProgress::default();
    let table = assemble_inputs(&params.inputs, &params.extract, &mut prog)?;

    match &params.output {
        Output::Stdout => {
            print!("{}", render::render(&table, &params.export));
        }
        Output::Default => {
            let path = file::write_export(&params.export, &table)?;
            eprintln!("Wrote {} row(s) to {}", table.row_count(), path.display());
        }
        Output::Path(p) => {
            let default_name = params
                .export
                .out_path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("{}.{}", params.extract.catalog, params.export.format.ext()));
            let path = file::resolve_out_path(p, &default_name)?;
            file::write_export_to(&path, &params.export, &table)?;
            eprintln!("Wrote {} row(s) to {}", table.row_count(), path.display());
        }
    }
    Ok(())
}

/// Unlike the GUI, the CLI stops at the first unreadable input.
fn assemble_inputs(inputs: &[Input], opts: &ExtractOptions, prog: &mut dyn Progress) -> Result<Table, Box<dyn Error>> {
    let spec = CompiledSpec::new(crate::specs::spec_for(opts.catalog));
    let mut table = Table::new(extract::header_for(spec.spec, opts));

    prog.begin(inputs.len());
    for input in inputs {
        let (label, html) = match input {
            Input::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                (s!("<stdin>"), buf)
            }
            Input::Path(p) => match extract::read_page(p) {
                Ok(html) => (p.display().to_string(), html),
                Err(e) => {
                    prog.item_failed(&p.display().to_string(), &e.to_string());
                    return Err(format!("{}: {}", p.display(), e).into());
                }
            },
        };
        let part = extract::extract_document_with(&spec, &Html::parse_document(&html), opts);
        prog.item_done(&label, part.row_count());
        table.extend(part);
    }
    prog.finish();
    Ok(table)
}

/// Progress lines on stderr, so stdout stays clean for `--stdout`.
#[derive(Default)]
struct CliProgress {
    total: usize,
    rows: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, label: &str, rows: usize) {
        self.rows += rows;
        eprintln!("{}: {} row(s)", label, rows);
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        eprintln!("{}: failed: {}", label, err);
    }
    fn finish(&mut self) {
        if self.total > 1 {
            eprintln!("Total: {} row(s) from {} page(s)", self.rows, self.total);
        }
    }
}
