// src/report.rs
use std::io::{self, Write};

use crate::convert::ConversionOutput;
use crate::schema::LenderSchema;

/// Section header for one schema. Every section after the first is preceded by
/// a blank line.
pub fn write_banner<W: Write>(out: &mut W, schema: &LenderSchema, first: bool) -> io::Result<()> {
    if !first {
        writeln!(out)?;
    }
    writeln!(out, "-- Bulk insert IFS {} lenders", schema.label)?;
    out.flush()
}

pub fn write_statements<W: Write>(out: &mut W, statements: &[String]) -> io::Result<()> {
    for stmt in statements {
        writeln!(out, "{}", stmt)?;
    }
    out.flush()
}

/// Blank line, then one `-- Total <tag> inserts: N` line per job.
pub fn write_totals<W: Write>(out: &mut W, outputs: &[ConversionOutput]) -> io::Result<()> {
    writeln!(out)?;
    for job in outputs {
        writeln!(out, "-- Total {} inserts: {}", job.schema.tag, job.statements.len())?;
    }
    out.flush()
}

/// Whole document for already converted jobs.
pub fn write_report<W: Write>(out: &mut W, outputs: &[ConversionOutput]) -> io::Result<()> {
    for (i, job) in outputs.iter().enumerate() {
        write_banner(out, &job.schema, i == 0)?;
        write_statements(out, &job.statements)?;
    }
    write_totals(out, outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(schema: LenderSchema, statements: &[&str]) -> ConversionOutput {
        ConversionOutput {
            schema,
            statements: statements.iter().map(|s| s.to_string()).collect(),
            skipped: 0,
        }
    }

    #[test]
    fn layout_matches_banner_blank_totals() -> io::Result<()> {
        let outputs = vec![
            output(
                LenderSchema::business_line_of_credit(),
                &["INSERT INTO a VALUES (1);", "INSERT INTO a VALUES (2);"],
            ),
            output(LenderSchema::mca(), &["INSERT INTO b VALUES (3);"]),
        ];
        let mut buf = Vec::new();
        write_report(&mut buf, &outputs)?;
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "-- Bulk insert IFS Business Line of Credit lenders\n\
             INSERT INTO a VALUES (1);\n\
             INSERT INTO a VALUES (2);\n\
             \n\
             -- Bulk insert IFS MCA lenders\n\
             INSERT INTO b VALUES (3);\n\
             \n\
             -- Total BLC inserts: 2\n\
             -- Total MCA inserts: 1\n"
        );
        Ok(())
    }

    #[test]
    fn empty_jobs_still_report_zero() -> io::Result<()> {
        let outputs = vec![
            output(LenderSchema::business_line_of_credit(), &[]),
            output(LenderSchema::mca(), &[]),
        ];
        let mut buf = Vec::new();
        write_report(&mut buf, &outputs)?;
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(
            "-- Bulk insert IFS Business Line of Credit lenders\n\n-- Bulk insert IFS MCA lenders\n"
        ));
        assert!(text.ends_with("-- Total BLC inserts: 0\n-- Total MCA inserts: 0\n"));
        Ok(())
    }
}
