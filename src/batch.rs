use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BatchError;
use crate::search::steps;
use crate::solver::Solver;

/// One row of a query file: `start,end`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Query {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    NoPath,
    Invalid,
}

/// Outcome of one query, serialised as a CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub start: String,
    pub end: String,
    pub status: QueryStatus,
    pub steps: Option<usize>,
    pub path: String,
    pub detail: String,
}

/// Parses a headed `start,end` CSV into queries.
pub fn read_queries<R: Read>(reader: R) -> Result<Vec<Query>, BatchError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let queries = reader.deserialize().collect::<Result<Vec<Query>, _>>()?;
    Ok(queries)
}

pub fn run_batch(solver: &Solver, queries: &[Query]) -> Vec<QueryReport> {
    queries.iter().map(|q| run_query(solver, q)).collect()
}

fn run_query(solver: &Solver, query: &Query) -> QueryReport {
    let (status, path, detail) = match solver.find_shortest_path(&query.start, &query.end) {
        Ok(path) if path.is_empty() => (QueryStatus::NoPath, path, String::new()),
        Ok(path) => (QueryStatus::Found, path, String::new()),
        Err(err) => {
            warn!(start = %query.start, end = %query.end, %err, "skipping invalid query");
            (QueryStatus::Invalid, Vec::new(), err.to_string())
        }
    };

    QueryReport {
        start: query.start.clone(),
        end: query.end.clone(),
        status,
        steps: steps(&path),
        path: path.join(" -> "),
        detail,
    }
}

/// Writes reports as CSV with a header row.
pub fn write_reports<W: Write>(writer: W, reports: &[QueryReport]) -> Result<(), BatchError> {
    let mut writer = csv::Writer::from_writer(writer);
    for report in reports {
        writer.serialize(report)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LadderConfig;
    use crate::dictionary::Dictionary;

    fn solver() -> Solver {
        let dictionary = Dictionary::load(["cat", "cot", "cog", "dog", "dot", "ant", "dogs"]).unwrap();
        Solver::new(dictionary, &LadderConfig::default()).unwrap()
    }

    #[test]
    fn test_read_queries() {
        let data = "start,end\ncat,dog\n DOT , cog \n";
        let queries = read_queries(data.as_bytes()).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0], Query { start: "cat".into(), end: "dog".into() });
        assert_eq!(queries[1].start, "DOT"); // case is left for the solver to normalise
        assert_eq!(queries[1].end, "cog");
    }

    #[test]
    fn test_read_queries_missing_column() {
        let data = "start\ncat\n";
        assert!(matches!(read_queries(data.as_bytes()), Err(BatchError::Csv(_))));
    }

    #[test]
    fn test_run_batch_statuses() {
        let queries = vec![
            Query { start: "cat".into(), end: "dog".into() },
            Query { start: "cat".into(), end: "ant".into() },
            Query { start: "cat".into(), end: "dogs".into() },
        ];
        let reports = run_batch(&solver(), &queries);

        assert_eq!(reports[0].status, QueryStatus::Found);
        assert_eq!(reports[0].steps, Some(3));
        assert_eq!(reports[0].path, "cat -> cot -> dot -> dog");

        assert_eq!(reports[1].status, QueryStatus::NoPath);
        assert_eq!(reports[1].steps, None);
        assert!(reports[1].path.is_empty());

        assert_eq!(reports[2].status, QueryStatus::Invalid);
        assert_eq!(reports[2].detail, "Words must be of the same length!");
    }

    #[test]
    fn test_write_reports() {
        let queries = vec![
            Query { start: "cat".into(), end: "cot".into() },
            Query { start: "cat".into(), end: "ant".into() },
        ];
        let reports = run_batch(&solver(), &queries);

        let mut out = Vec::new();
        write_reports(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "start,end,status,steps,path,detail");
        assert_eq!(lines[1], "cat,cot,found,1,cat -> cot,");
        assert_eq!(lines[2], "cat,ant,no_path,,,");
    }
}
