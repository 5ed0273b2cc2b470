//! Parsing of route files.
//!
//! A route file lists one route per line in the form
//! `address/prefix via gateway`, for example:
//!
//! ```text
//! # campus
//! 192.168.0.0/16 via 1.1.1.1
//! 0.0.0.0/0 via 9.0.0.0
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map_res},
    sequence::{delimited, separated_pair, tuple},
    IResult,
};
use std::{fs, io, path::Path, str::FromStr};

use crate::{ipv4::SubnetError, Ipv4Address, Route};

#[derive(Debug, thiserror::Error)]
pub enum RouteFileError {
    #[error("Line {line}: expected 'address/prefix via gateway', found '{text}'")]
    Syntax { line: usize, text: String },
    #[error("Line {line}: {source}")]
    Subnet { line: usize, source: SubnetError },
    #[error("Could not read route file: {0}")]
    Io(#[from] io::Error),
}

fn address(s: &str) -> IResult<&str, Ipv4Address> {
    map_res(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        Ipv4Address::from_str,
    )(s)
}

fn prefix(s: &str) -> IResult<&str, u8> {
    map_res(digit1, u8::from_str)(s)
}

/// Parses `address/prefix via gateway`, allowing surrounding whitespace.
fn route_line(s: &str) -> IResult<&str, ((Ipv4Address, u8), Ipv4Address)> {
    all_consuming(delimited(
        space0,
        separated_pair(
            separated_pair(address, char('/'), prefix),
            tuple((space1, tag("via"), space1)),
            address,
        ),
        space0,
    ))(s)
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parses every route in `text`.
pub fn parse_routes(text: &str) -> Result<Vec<Route>, RouteFileError> {
    let mut routes = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if is_skipped(raw) {
            continue;
        }
        let (_, ((address, prefix), gateway)) =
            route_line(raw).map_err(|_| RouteFileError::Syntax {
                line,
                text: raw.to_string(),
            })?;
        let route = Route::new(address, prefix, gateway)
            .map_err(|source| RouteFileError::Subnet { line, source })?;
        routes.push(route);
    }
    Ok(routes)
}

/// Reads and parses the route file at `path`.
pub fn load_routes(path: impl AsRef<Path>) -> Result<Vec<Route>, RouteFileError> {
    let text = fs::read_to_string(path)?;
    parse_routes(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_line() {
        let (rest, ((address, prefix), gateway)) =
            route_line("192.168.64.0/18 via 3.3.3.3").unwrap();
        assert_eq!(rest, "");
        assert_eq!(address, Ipv4Address::new([192, 168, 64, 0]));
        assert_eq!(prefix, 18);
        assert_eq!(gateway, Ipv4Address::new([3, 3, 3, 3]));
    }

    #[test]
    fn tolerates_whitespace() -> anyhow::Result<()> {
        let routes = parse_routes("  10.0.0.0/8 \t via  1.1.1.1  \n")?;
        let expected = Route::from_cidr("10.0.0.0/8", [1, 1, 1, 1].into())?;
        assert_eq!(routes, vec![expected]);
        Ok(())
    }

    #[test]
    fn skips_comments_and_blank_lines() -> anyhow::Result<()> {
        let text = "# routes\n\n0.0.0.0/0 via 9.0.0.0\n   # indented comment\n";
        let routes = parse_routes(text)?;
        assert_eq!(routes, vec![Route::default_route([9, 0, 0, 0].into())]);
        Ok(())
    }

    #[test]
    fn reports_syntax_errors_with_line() {
        let text = "10.0.0.0/8 via 1.1.1.1\n10.0.0.0/8 1.1.1.1\n";
        match parse_routes(text) {
            Err(RouteFileError::Syntax { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "10.0.0.0/8 1.1.1.1");
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }

        for bad in [
            "10.0.0/8 via 1.1.1.1",
            "10.0.0.0 via 1.1.1.1",
            "10.0.0.0/8 via",
            "10.0.0.0/300 via 1.1.1.1",
        ] {
            let result = parse_routes(bad);
            assert!(
                matches!(result, Err(RouteFileError::Syntax { line: 1, .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn reports_prefix_range_errors() {
        match parse_routes("\n10.0.0.0/33 via 1.1.1.1") {
            Err(RouteFileError::Subnet { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, SubnetError::PrefixRange(33));
            }
            other => panic!("expected a subnet error, got {:?}", other),
        }
    }
}
