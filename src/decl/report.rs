use std::io::{self, Write};

use anyhow::{Result, Context};

use crate::decl::types::ScanResult;

/// Write the collected declarations to the given sink, one labeled section
/// per category, in the fixed order Classes, Functions, Constants. Every
/// entry is followed by a comma, the last one included; an empty category
/// prints as an empty line under its label.
pub fn write_report(result: &ScanResult, writer: &mut impl Write) -> Result<()> {
    write_section(writer, "Classes", &result.classes)?;
    write_section(writer, "Functions", &result.functions)?;
    write_section(writer, "Constants", &result.constants)?;
    Ok(())
}

/// Write the collected declarations to standard output
pub fn print_report(result: &ScanResult) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(result, &mut handle)
}

fn write_section(writer: &mut impl Write, label: &str, entries: &[String]) -> Result<()> {
    writeln!(writer, "{}: ", label).context("Failed to write report")?;
    for entry in entries {
        write!(writer, "{},", entry).context("Failed to write report")?;
    }
    writeln!(writer).context("Failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::types::ScanResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_labeled_sections_in_fixed_order() {
        let result = ScanResult {
            classes: vec![" Foo".to_string(), " Bar:".to_string()],
            functions: vec![" bar".to_string()],
            constants: vec!["x".to_string(), "y".to_string()],
        };

        let mut sink = Vec::new();
        write_report(&result, &mut sink).unwrap();

        let expected = "Classes: \n Foo, Bar:,\nFunctions: \n bar,\nConstants: \nx,y,\n";
        assert_eq!(String::from_utf8(sink).unwrap(), expected);
    }

    #[test]
    fn empty_result_still_prints_every_label() {
        let mut sink = Vec::new();
        write_report(&ScanResult::default(), &mut sink).unwrap();

        let expected = "Classes: \n\nFunctions: \n\nConstants: \n\n";
        assert_eq!(String::from_utf8(sink).unwrap(), expected);
    }
}
