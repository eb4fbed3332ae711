use std::collections::HashMap;

use modelzip_core::cnf::VarId;
use modelzip_core::error::{Error, Result};

/// Reads one or more `v`-prefixed lines of signed integers, terminated by
/// a literal `0` (a model may span several `v` lines before its
/// terminator, matching DIMACS `v`-line conventions). A repeated id is a
/// parse error; ids beyond the formula's declared range are accepted
/// without complaint (§6/§10).
pub fn parse(input: &str) -> Result<HashMap<VarId, bool>> {
    let mut model = HashMap::new();
    let mut terminated = false;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let rest = line
            .strip_prefix('v')
            .ok_or_else(|| Error::ParseError(format!("model line does not start with `v`: `{}`", line)))?;

        for token in rest.split_whitespace() {
            let value: i64 = token
                .parse()
                .map_err(|e| Error::ParseError(format!("malformed model literal `{}`: {}", token, e)))?;
            if value == 0 {
                terminated = true;
                continue;
            }
            let id = value.unsigned_abs() as VarId;
            if model.insert(id, value > 0).is_some() {
                return Err(Error::ParseError(format!("duplicate model entry for variable {}", id)));
            }
        }
    }

    if !terminated {
        return Err(Error::ParseError("model is missing its terminating 0".to_string()));
    }

    Ok(model)
}

/// Renders a decompressed assignment as the space-separated
/// signed-int-or-`D` line described in §6/§8, `v`-prefixed and
/// `0`-terminated so downstream tooling that expects a DIMACS `v` line
/// keeps working (the `D` tokens are this crate's own extension and are
/// not meant to be read back by third-party DIMACS consumers).
pub fn render(assignment: &HashMap<VarId, bool>, num_variables: usize) -> String {
    use itertools::Itertools;
    let mut tokens = (1..=num_variables).map(|id| match assignment.get(&id) {
        Some(true) => id.to_string(),
        Some(false) => format!("-{}", id),
        None => "D".to_string(),
    });
    format!("v {} 0\n", tokens.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dont_care_tokens() {
        let mut assignment = HashMap::new();
        assignment.insert(1, true);
        assignment.insert(3, false);
        assert_eq!(render(&assignment, 3), "v 1 D -3 0\n");
    }

    #[test]
    fn parses_single_line_model() {
        let model = parse("v 1 -2 3 0\n").unwrap();
        assert_eq!(model.get(&1), Some(&true));
        assert_eq!(model.get(&2), Some(&false));
        assert_eq!(model.get(&3), Some(&true));
    }

    #[test]
    fn parses_multi_line_model() {
        let model = parse("v 1 -2\nv 3 0\n").unwrap();
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn rejects_duplicate_entries() {
        assert!(parse("v 1 -1 0\n").is_err());
    }

    #[test]
    fn rejects_missing_terminator() {
        assert!(parse("v 1 2\n").is_err());
    }
}
