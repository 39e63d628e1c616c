//! Instance file format and synthetic instance generation.
//!
//! The `.dat` format round-trips with the generator:
//!
//! ```text
//! param N := 3;
//! param F := 10;
//! param S := 10;
//! param P := 2;
//!
//! param: performance cost staff :=
//! 1 6 5 2
//! 2 5 4 2
//! 3 4 3 2
//! ;
//! ```
//!
//! Parsing is whitespace-insensitive beyond line splitting; blank lines are
//! ignored.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use rand::Rng;

use crate::error::{SolveError, SolveResult};
use crate::model::ProblemInstance;

impl ProblemInstance {
    /// Parse an instance from `.dat` text.
    pub fn from_dat_str(text: &str) -> SolveResult<Self> {
        // Non-blank lines with their original 1-based line numbers.
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        let header = |pos: usize, name: &str| -> SolveResult<u64> {
            let (line_no, line) = *lines.get(pos).ok_or(SolveError::Parse {
                line: text.lines().count(),
                message: format!("missing header 'param {} := <int>;'", name),
            })?;
            parse_header_param(line_no, line, name)
        };

        let n = header(0, "N")?;
        let f = header(1, "F")?;
        let s = header(2, "S")?;
        let p = header(3, "P")?;
        let n = n as usize;

        // Locate the data table header.
        let table_pos = lines
            .iter()
            .position(|(_, l)| {
                l.split_whitespace().collect::<Vec<_>>()
                    == ["param:", "performance", "cost", "staff", ":="]
            })
            .ok_or(SolveError::Parse {
                line: text.lines().count(),
                message: "missing 'param: performance cost staff :=' table header".into(),
            })?;

        let mut performance = Vec::with_capacity(n);
        let mut cost = Vec::with_capacity(n);
        let mut staff = Vec::with_capacity(n);
        let mut terminated = false;
        let mut last_line = lines[table_pos].0;

        for &(line_no, line) in &lines[table_pos + 1..] {
            last_line = line_no;
            if line == ";" {
                terminated = true;
                break;
            }
            let fields: Vec<u64> = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<u64>().map_err(|_| SolveError::Parse {
                        line: line_no,
                        message: format!("non-integer field '{}'", tok),
                    })
                })
                .collect::<SolveResult<_>>()?;
            if fields.len() != 4 {
                return Err(SolveError::Parse {
                    line: line_no,
                    message: format!(
                        "expected '<idx> <performance> <cost> <staff>', got {} fields",
                        fields.len()
                    ),
                });
            }
            performance.push(fields[1]);
            cost.push(fields[2]);
            staff.push(fields[3]);
        }

        if !terminated || performance.len() != n {
            return Err(SolveError::Parse {
                line: last_line,
                message: format!(
                    "expected {} data rows terminated by ';', found {}",
                    n,
                    performance.len()
                ),
            });
        }

        ProblemInstance::new(n, f, s, p, performance, cost, staff)
    }

    /// Read and parse an instance file.
    pub fn from_dat_file(path: impl AsRef<Path>) -> SolveResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_dat_str(&text)
    }

    /// Serialize to the `.dat` format the parser accepts.
    pub fn to_dat_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("param N := {};\n", self.num_projects()));
        out.push_str(&format!("param F := {};\n", self.capital_budget()));
        out.push_str(&format!("param S := {};\n", self.staff_budget()));
        out.push_str(&format!("param P := {};\n\n", self.max_projects()));

        out.push_str("param: performance cost staff :=\n");
        for i in 0..self.num_projects() {
            out.push_str(&format!(
                "{} {} {} {}\n",
                i + 1,
                self.performance()[i],
                self.cost()[i],
                self.staff()[i]
            ));
        }
        out.push_str(";\n");
        out
    }

    /// Write the instance to a `.dat` file.
    pub fn write_dat_file(&self, path: impl AsRef<Path>) -> SolveResult<()> {
        fs::write(path, self.to_dat_string())?;
        Ok(())
    }
}

fn parse_header_param(line_no: usize, line: &str, name: &str) -> SolveResult<u64> {
    let err = |message: String| SolveError::Parse {
        line: line_no,
        message,
    };

    let rest = line
        .strip_suffix(';')
        .ok_or_else(|| err(format!("header 'param {}' must end with ';'", name)))?;
    let tokens: Vec<&str> = rest.split_whitespace().collect();

    match tokens.as_slice() {
        ["param", found, ":=", value] => {
            if *found != name {
                return Err(err(format!("expected 'param {}', found 'param {}'", name, found)));
            }
            value
                .parse::<u64>()
                .map_err(|_| err(format!("'param {}' value '{}' is not an integer", name, value)))
        }
        _ => Err(err(format!("expected 'param {} := <int>;'", name))),
    }
}

/// Parameter ranges for the synthetic instance generator.
///
/// Defaults reproduce the reference generator's distribution: per-project
/// performance in [1, 100], cost in [1, F], staff requirement in [1, S], and
/// a maximum project count drawn from [1, N].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Range for the number of projects N.
    pub num_projects: RangeInclusive<usize>,

    /// Range for the capital budget F.
    pub capital_budget: RangeInclusive<u64>,

    /// Range for the staffing budget S.
    pub staff_budget: RangeInclusive<u64>,

    /// Largest per-project performance value.
    pub max_performance: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_projects: 8000..=9000,
            capital_budget: 1..=100_000,
            staff_budget: 1..=1000,
            max_performance: 100,
        }
    }
}

/// Generate a random instance from the configured ranges.
pub fn generate_instance(config: &GeneratorConfig, rng: &mut impl Rng) -> ProblemInstance {
    let n = rng.gen_range(config.num_projects.clone());
    let f = rng.gen_range(config.capital_budget.clone());
    let s = rng.gen_range(config.staff_budget.clone());
    let p = rng.gen_range(1..=n as u64);

    let mut performance = Vec::with_capacity(n);
    let mut cost = Vec::with_capacity(n);
    let mut staff = Vec::with_capacity(n);
    for _ in 0..n {
        performance.push(rng.gen_range(1..=config.max_performance));
        cost.push(rng.gen_range(1..=f));
        staff.push(rng.gen_range(1..=s));
    }

    ProblemInstance::new(n, f, s, p, performance, cost, staff)
        .expect("generated arrays have exactly N entries")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "\
param N := 3;
param F := 10;
param S := 10;
param P := 2;

param: performance cost staff :=
1 6 5 2
2 5 4 2
3 4 3 2
;
";

    #[test]
    fn test_parse_sample() {
        let inst = ProblemInstance::from_dat_str(SAMPLE).unwrap();
        assert_eq!(inst.num_projects(), 3);
        assert_eq!(inst.capital_budget(), 10);
        assert_eq!(inst.staff_budget(), 10);
        assert_eq!(inst.max_projects(), 2);
        assert_eq!(inst.performance(), &[6, 5, 4]);
        assert_eq!(inst.cost(), &[5, 4, 3]);
        assert_eq!(inst.staff(), &[2, 2, 2]);
    }

    #[test]
    fn test_parse_ignores_extra_whitespace() {
        let text = SAMPLE.replace("param N := 3;", "param   N :=   3;");
        let inst = ProblemInstance::from_dat_str(&text).unwrap();
        assert_eq!(inst.num_projects(), 3);
    }

    #[test]
    fn test_missing_header_param() {
        let text = SAMPLE.replace("param S := 10;\n", "");
        assert!(matches!(
            ProblemInstance::from_dat_str(&text),
            Err(SolveError::Parse { .. })
        ));
    }

    #[test]
    fn test_non_integer_header() {
        let text = SAMPLE.replace("param F := 10;", "param F := ten;");
        let err = ProblemInstance::from_dat_str(&text).unwrap_err();
        assert!(err.to_string().contains("not an integer"), "{}", err);
    }

    #[test]
    fn test_truncated_data_table() {
        let text = SAMPLE.replace("3 4 3 2\n", "");
        let err = ProblemInstance::from_dat_str(&text).unwrap_err();
        assert!(err.to_string().contains("3 data rows"), "{}", err);
    }

    #[test]
    fn test_missing_terminator() {
        let text = SAMPLE.replace(";\n", "");
        // Removes the first ';' (header N) so the header parse fails; also
        // cover the data terminator specifically.
        assert!(ProblemInstance::from_dat_str(&text).is_err());

        let text = SAMPLE.trim_end().trim_end_matches(';');
        assert!(ProblemInstance::from_dat_str(text).is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = GeneratorConfig {
            num_projects: 5..=8,
            capital_budget: 10..=50,
            staff_budget: 4..=20,
            max_performance: 30,
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let inst = generate_instance(&config, &mut rng);
            let reparsed = ProblemInstance::from_dat_str(&inst.to_dat_string()).unwrap();
            assert_eq!(inst, reparsed);
        }
    }

    #[test]
    fn test_sample_round_trip_exact() {
        let inst = ProblemInstance::from_dat_str(SAMPLE).unwrap();
        assert_eq!(inst.to_dat_string(), SAMPLE);
    }
}
