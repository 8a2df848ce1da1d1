use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Graph;
use crate::errors::ParseGraphError;

impl FromStr for Graph<String, usize> {
    type Err = ParseGraphError;

    /// Read an edge list, one edge per line, as `A - B 3`.
    ///
    /// The weight may be omitted for a unit edge. Blank lines
    /// and lines starting with `#` are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^(?P<a>[\w.]+)\s*-\s*(?P<b>[\w.]+)(?:\s+(?P<weight>\S+))?$").unwrap();
        };

        let mut graph = Graph::new();
        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let cap = match RE.captures(line) {
                None => return Err(ParseGraphError::InvalidEdge(line.to_string())),
                Some(c) => c,
            };

            let weight = match cap.name("weight") {
                Some(w) => w.as_str().parse()?,
                None => 1,
            };
            graph.add_edge(cap["a"].to_string(), cap["b"].to_string(), weight);
        }
        Ok(graph)
    }
}
