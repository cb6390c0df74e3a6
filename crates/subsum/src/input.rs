//! Collecting input values from arguments and files.

use anyhow::{Context, Result};

use subsum_core::solver::SolverError;

use crate::config::AppConfig;

/// Parse tokens separated by whitespace or commas into values.
pub fn parse_values<'a, I>(tokens: I) -> Result<Vec<u64>, SolverError>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .flat_map(|t| t.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<u64>()
                .map_err(|_| SolverError::InvalidInput(format!("not a non-negative integer: {t:?}")))
        })
        .collect()
}

/// Values from the positional arguments followed by those of `--input`.
pub fn collect_values(config: &AppConfig) -> Result<Vec<u64>> {
    let mut values = parse_values(config.values.iter().map(String::as_str))?;
    if let Some(path) = &config.input {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading values from {path}"))?;
        values.extend(parse_values(content.lines())?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_separators() {
        let got = parse_values(["1,2", "3", " 4 5 ", ",,6"]).unwrap();
        assert_eq!(got, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_tokens() {
        assert!(parse_values(["", " , "]).unwrap().is_empty());
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(
            parse_values(["1", "-2"]),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn garbage_rejected() {
        let err = parse_values(["abc"]).unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
