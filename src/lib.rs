#![deny(clippy::all)]

use anyhow::Context;
use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, warn, LevelFilter};
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read, Write};

use searcher::{EdgeWeight, Expansion, Graph, SearchOptions, Searcher, Strategy};

type Error = anyhow::Error;
type Result<T> = ::std::result::Result<T, Error>;
type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn app() -> App<'static, 'static> {
    App::new("graphsearch")
        .version("0.1")
        .about("Search a weighted graph with classical search strategies")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .required(true)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("goal")
                .value_name("GOAL")
                .required(true)
                .takes_value(true)
                .index(2),
        )
        .arg(
            Arg::with_name("graph")
                .value_name("GRAPH")
                .help("Edge list, one `A - B weight` per line (- for stdin)")
                .required(false)
                .takes_value(true)
                .index(3),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .help("dfs, bfs, ucs, greedy or astar (default: all)")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .value_name("NODE=VALUE")
                .help("Heuristic estimate for a node (default: 0)")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after this many frontier pops")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("STEPS")
                .help("Log search progress every this many pops")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
}

/// Settings for one run of the command line tool.
#[derive(Debug)]
pub struct Config {
    pub start: String,
    pub goal: String,
    pub graph: Option<String>,
    pub strategies: Vec<Strategy>,
    pub heuristic: HashMap<String, usize>,
    pub options: SearchOptions,
    pub verbosity: u64,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let strategies = matches
            .values_of("strategy")
            .map(|v| v.map(str::parse).collect::<::std::result::Result<Vec<Strategy>, _>>())
            .transpose()?
            .unwrap_or_else(|| Strategy::all().collect());

        let heuristic = matches
            .values_of("heuristic")
            .map(|v| {
                v.map(parse_heuristic)
                    .collect::<::std::result::Result<HashMap<String, usize>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let options = SearchOptions {
            limit: optional_count(matches, "limit")?,
            verbose: optional_count(matches, "progress")?,
        };

        Ok(Config {
            start: matches.value_of("start").unwrap_or_default().to_string(),
            goal: matches.value_of("goal").unwrap_or_default().to_string(),
            graph: matches.value_of("graph").map(str::to_string),
            strategies,
            heuristic,
            options,
            verbosity: matches.occurrences_of("verbose"),
        })
    }

    /// Heuristic entries were given, but no selected strategy reads them.
    pub fn ignores_heuristic(&self) -> bool {
        !self.heuristic.is_empty() && !self.strategies.iter().any(|s| s.uses_heuristic())
    }
}

fn optional_count(matches: &ArgMatches, name: &str) -> Result<Option<usize>> {
    if matches.is_present(name) {
        Ok(Some(value_t!(matches, name, usize)?))
    } else {
        Ok(None)
    }
}

/// Parse a `NODE=VALUE` heuristic entry.
pub fn parse_heuristic(entry: &str) -> ::std::result::Result<(String, usize), CliError> {
    let mut parts = entry.splitn(2, '=');
    let node = parts.next().map(str::trim).filter(|n| !n.is_empty());
    let value = parts.next().and_then(|v| v.trim().parse().ok());

    match (node, value) {
        (Some(node), Some(value)) => Ok((node.to_string(), value)),
        _ => Err(CliError::InvalidHeuristic(entry.to_string())),
    }
}

pub fn run() -> Result<()> {
    let matches = app().get_matches();
    let config = Config::from_matches(&matches)?;

    init_logging(config.verbosity);
    debug!("{:?}", config);

    let graph = read_graph(get_input_reader(config.graph.as_deref())?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report_all(&mut out, &graph, &config)
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead> {
    let reader: BoxedRead = match filename {
        Some("-") | None => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| CliError::GraphNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

pub fn read_graph(mut reader: BoxedRead) -> Result<Graph<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let graph: Graph<String> = text.parse().context("Unable to read graph")?;
    debug!("Read graph with {} nodes", graph.len());
    Ok(graph)
}

/// Run each configured strategy and write a report for it.
pub fn report_all<W: Write>(out: &mut W, graph: &Graph<String>, config: &Config) -> Result<()> {
    if !graph.contains_node(&config.start) {
        warn!("Start node {} is not in the graph", config.start);
    }
    if config.ignores_heuristic() {
        warn!("Heuristic given, but no selected strategy uses one");
    }

    let searcher = Searcher::new(graph).with_options(config.options);
    for (i, strategy) in config.strategies.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        let expansion = searcher
            .search(
                *strategy,
                config.start.clone(),
                config.goal.clone(),
                &EdgeWeight,
                &config.heuristic,
            )
            .with_context(|| format!("{} failed", title(*strategy)))?;
        report(out, *strategy, graph, &expansion)?;
    }
    Ok(())
}

fn title(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::DepthFirst => "DFS",
        Strategy::BreadthFirst => "BFS",
        Strategy::UniformCost => "UCS",
        Strategy::Greedy => "Greedy Search",
        Strategy::AStar => "A* Search",
    }
}

fn format_nodes(nodes: &[String]) -> String {
    format!("[{}]", nodes.join(", "))
}

pub fn report<W: Write>(
    out: &mut W,
    strategy: Strategy,
    graph: &Graph<String>,
    expansion: &Expansion<String>,
) -> io::Result<()> {
    writeln!(out, "{}:", title(strategy))?;
    writeln!(
        out,
        "Order in which states are expanded: {}",
        format_nodes(&expansion.visited)
    )?;
    match &expansion.path {
        Some(path) => {
            writeln!(out, "Path returned by search: {}", format_nodes(path))?;
            if let Some(cost) = expansion.cost(graph) {
                writeln!(out, "Path cost: {}", cost)?;
            }
        }
        None => writeln!(out, "Goal node not reached")?,
    }
    writeln!(
        out,
        "States that are not expanded: {}",
        format_nodes(&expansion.unexpanded(graph))
    )
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid heuristic {0:?}, expected NODE=VALUE")]
    InvalidHeuristic(String),

    #[error("Graph not found: {0}")]
    GraphNotFound(String, #[source] io::Error),
}
