use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use strand::bundle;
use strand::deps::{self, Direction};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Strand(strand::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Strand(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<strand::Error> for CliError {
    fn from(value: strand::Error) -> Self {
        Self::Strand(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Order,
    Deps,
    Bundle,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    root: Option<String>,
    json: bool,
    inverted: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "Usage: strand-cli <command> [options] <root>\n\
     \n\
     Commands:\n\
     \x20 order    Print the dependency-safe file order, one path per line\n\
     \x20 deps     Print the require relation between files as JSON\n\
     \x20 bundle   Concatenate all files in dependency order\n\
     \n\
     Options:\n\
     \x20 --json        order: emit JSON instead of plain lines\n\
     \x20 --inverted    deps: map each file to the files that require it\n\
     \x20 --out <file>  bundle: write to <file> instead of stdout\n\
     \x20 -h, --help    Show this help"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "order" => args.command = Command::Order,
            "deps" => args.command = Command::Deps,
            "bundle" => args.command = Command::Bundle,
            "--json" => args.json = true,
            "--inverted" => args.inverted = true,
            "--out" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(path.clone());
            }
            other => {
                if other.starts_with('-') || args.root.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.root = Some(other.to_string());
            }
        }
    }
    if args.root.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

#[derive(Serialize)]
struct OrderOut<'a> {
    order: &'a [String],
}

fn cmd_order(root: &Path, json: bool) -> Result<(), CliError> {
    let order = bundle::bundle_order(root)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&OrderOut { order: &order })?);
    } else {
        for id in &order {
            println!("{id}");
        }
    }
    Ok(())
}

fn cmd_deps(root: &Path, inverted: bool) -> Result<(), CliError> {
    let direction = if inverted {
        Direction::RequiredBy
    } else {
        Direction::Requires
    };
    let map = deps::dependency_map(root, direction)?;

    // BTreeMap for stable key and member order in the output.
    let sorted: BTreeMap<String, Vec<String>> = map
        .into_iter()
        .map(|(file, others)| {
            let mut others: Vec<String> = others.into_iter().collect();
            others.sort_unstable();
            (file, others)
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);
    Ok(())
}

fn cmd_bundle(root: &Path, out: Option<&str>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            let mut file = File::create(path)?;
            bundle::write_bundle(root, &mut file)?;
            file.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            bundle::write_bundle(root, &mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let root = args.root.as_deref().unwrap_or_default();
    let root = Path::new(root);
    match args.command {
        Command::Order => cmd_order(root, args.json),
        Command::Deps => cmd_deps(root, args.inverted),
        Command::Bundle => cmd_bundle(root, args.out.as_deref()),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Strand(err @ strand::Error::DependencyCycle { .. })) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
