mod network;
mod report;

use network::NetworkConfig;
use report::GraphReport;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Graph(skygraph::Error),
    Config { message: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Config { message } => write!(f, "Invalid network: {message}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<skygraph::Error> for CliError {
    fn from(value: skygraph::Error) -> Self {
        Self::Graph(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    Keys,
    #[default]
    Airports,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    network: Option<String>,
    format: OutputFormat,
    pretty: bool,
    queries: Vec<i32>,
    interactive: bool,
}

fn usage() -> &'static str {
    "skygraph-cli\n\
\n\
USAGE:\n\
  skygraph-cli keys [--format text|json] [--pretty]\n\
  skygraph-cli [airports] [--network <path>] [--format text|json] [--pretty] [--query <id>]... [--interactive]\n\
\n\
NOTES:\n\
  - keys prints the undirected demo graph over the keys 100..500.\n\
  - airports prints the directed airport network; --network loads it from a JSON file.\n\
  - --query prints one airport and its neighbors instead of the full report.\n\
  - --interactive reads airport ids from stdin until -1 or end of input.\n\
  - Set SKYGRAPH_LOG (e.g. SKYGRAPH_LOG=debug) to log graph operations to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "keys" => args.command = Command::Keys,
            "airports" => args.command = Command::Airports,
            "--pretty" => args.pretty = true,
            "--interactive" => args.interactive = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = match fmt.trim().to_ascii_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--network" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.network = Some(path.clone());
            }
            "--query" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.queries
                    .push(id.parse::<i32>().map_err(|_| CliError::Usage(usage()))?);
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    if args.command == Command::Keys
        && (args.network.is_some() || !args.queries.is_empty() || args.interactive)
    {
        return Err(CliError::Usage(usage()));
    }
    if args.format == OutputFormat::Json && (!args.queries.is_empty() || args.interactive) {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn load_network(path: Option<&str>) -> Result<NetworkConfig, CliError> {
    match path {
        None => Ok(NetworkConfig::builtin()),
        Some(path) => {
            tracing::debug!(path, "loading network file");
            NetworkConfig::from_json(&std::fs::read_to_string(path)?)
        }
    }
}

fn run_interactive(
    g: &skygraph::Graph<skygraph::Airport>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let ids: Vec<String> = g.vertices().map(|v| v.payload().id.to_string()).collect();
    let prompt = format!(
        "Enter an airport id ({}) or -1 to quit: ",
        ids.join(", ")
    );

    write!(out, "{prompt}")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line.parse::<i32>() {
            Ok(-1) => break,
            Ok(id) => report::write_airport_query(g, id, out)?,
            Err(_) if line.is_empty() => {}
            Err(_) => writeln!(out, "not an airport id: {line}")?,
        }
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Keys => {
            let mut g = network::key_network()?;
            match args.format {
                OutputFormat::Json => write_json(&GraphReport::new(&g), args.pretty),
                OutputFormat::Text => {
                    report::write_key_report(&mut g, &mut std::io::stdout().lock())?;
                    Ok(())
                }
            }
        }
        Command::Airports => {
            let g = load_network(args.network.as_deref())?.build()?;
            if args.format == OutputFormat::Json {
                return write_json(&GraphReport::new(&g), args.pretty);
            }

            let mut out = std::io::stdout().lock();
            if args.queries.is_empty() && !args.interactive {
                report::write_airport_report(&g, &mut out)?;
            }
            for id in &args.queries {
                report::write_airport_query(&g, *id, &mut out)?;
            }
            if args.interactive {
                run_interactive(&g, std::io::stdin().lock(), &mut out)?;
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SKYGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
