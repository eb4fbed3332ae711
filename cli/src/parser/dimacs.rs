use modelzip_core::cnf::{Formula, Literal};
use modelzip_core::error::{Error, Result};

/// Hand-rolled so the variable-growth and duplicate-literal-tolerance
/// rules stay exactly under this crate's control rather than an external
/// DIMACS crate's own semantics.
///
/// Lines starting with `c` or `p` are recognized; `p cnf n m` seeds the
/// initial variable count, grown automatically if a later literal
/// references a larger id. Everything else is a sequence of
/// whitespace-separated signed integers, each clause closed by a `0`.
pub fn parse(input: &str) -> Result<Formula> {
    let mut declared_n = 0usize;
    let mut clauses: Vec<Vec<Literal>> = Vec::new();
    let mut current: Vec<Literal> = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            let mut fields = line.split_whitespace();
            let _p = fields.next();
            let format = fields
                .next()
                .ok_or_else(|| Error::ParseError("missing format token on p line".to_string()))?;
            if format != "cnf" {
                return Err(Error::ParseError(format!("unsupported DIMACS format `{}`", format)));
            }
            declared_n = fields
                .next()
                .ok_or_else(|| Error::ParseError("missing variable count on p line".to_string()))?
                .parse()
                .map_err(|e| Error::ParseError(format!("malformed variable count: {}", e)))?;
            continue;
        }

        for token in line.split_whitespace() {
            let value: i64 = token
                .parse()
                .map_err(|e| Error::ParseError(format!("malformed literal `{}`: {}", token, e)))?;
            if value == 0 {
                clauses.push(std::mem::take(&mut current));
            } else if value > 0 {
                current.push(Literal::positive(value as usize));
            } else {
                current.push(Literal::negative((-value) as usize));
            }
        }
    }

    if !current.is_empty() {
        return Err(Error::ParseError("formula ends mid-clause (missing terminating 0)".to_string()));
    }

    Ok(Formula::new(clauses, declared_n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comment_and_problem_lines() {
        let formula = parse("c a comment\np cnf 2 1\n1 -2 0\n").unwrap();
        assert_eq!(formula.num_variables(), 2);
        assert_eq!(formula.clauses.len(), 1);
    }

    #[test]
    fn grows_past_declared_n() {
        let formula = parse("p cnf 1 1\n1 3 0\n").unwrap();
        assert_eq!(formula.num_variables(), 3);
    }

    #[test]
    fn rejects_unterminated_clause() {
        assert!(parse("p cnf 1 1\n1").is_err());
    }
}
