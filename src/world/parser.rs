use crate::config::MAX_CLUSTER_ITEMS;
use crate::error::{ParseError, Result};
use crate::vector::Vec2;
use crate::world::scenario::{ClusterSpec, ColonySpec, Scenario};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

/// Parse a scenario file. `width`/`height` apply unless the file has a
/// `world` line.
///
/// ```text
/// # comment
/// world   1000 1000
/// colony  500 500 40
/// cluster 250 250 25 80
/// ```
pub fn parse_scenario(path: &str, width: f32, height: f32) -> Result<Scenario> {
    let file = File::open(path)?;
    read_scenario(BufReader::new(file), width, height)
}

/// Parse a scenario from an in-memory string
pub fn parse_scenario_from_str(src: &str, width: f32, height: f32) -> Result<Scenario> {
    read_scenario(src.as_bytes(), width, height)
}

fn read_scenario<R: BufRead>(reader: R, width: f32, height: f32) -> Result<Scenario> {
    let mut scenario = Scenario::new(width, height);
    let mut colony_set = false;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => &line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let directive = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match directive {
            "world" => {
                let [w, h] = expect_args::<2>(&args, line_no, directive)?;
                scenario.width = number(w, line_no)?;
                scenario.height = number(h, line_no)?;
            }
            "colony" => {
                let [x, y, r] = expect_args::<3>(&args, line_no, directive)?;
                scenario.colony = ColonySpec {
                    position: Vec2::new(number(x, line_no)?, number(y, line_no)?),
                    radius: number(r, line_no)?,
                };
                colony_set = true;
            }
            "cluster" => {
                let [x, y, count, spread] = expect_args::<4>(&args, line_no, directive)?;
                let count: usize = number(count, line_no)?;
                if count > MAX_CLUSTER_ITEMS {
                    return Err(ParseError::InvalidLine {
                        line: line_no,
                        reason: format!("cluster holds {} items, at most {} allowed", count, MAX_CLUSTER_ITEMS),
                    });
                }
                scenario.clusters.push(ClusterSpec {
                    center: Vec2::new(number(x, line_no)?, number(y, line_no)?),
                    count,
                    spread: number(spread, line_no)?,
                });
            }
            other => {
                return Err(ParseError::InvalidLine {
                    line: line_no,
                    reason: format!("unknown directive `{}`", other),
                });
            }
        }
    }

    if !colony_set {
        scenario.colony.position = Vec2::new(scenario.width / 2.0, scenario.height / 2.0);
    }
    Ok(scenario)
}

fn expect_args<'a, const N: usize>(args: &[&'a str], line: usize, directive: &str) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::InvalidLine {
        line,
        reason: format!("`{}` takes {} values, got {}", directive, N, args.len()),
    })
}

fn number<T: FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}
