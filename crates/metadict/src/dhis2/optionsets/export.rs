use std::path::Path;

use crate::dhis2::{create_authenticated_client, Dhis2Config};
use crate::prelude::{println, *};

use metadict_core::dictionary::{dictionary_rows, formatted_export_name, FlatRow};

use super::discover::DEFAULT_PAGE_SIZE;
use super::{discover_option_sets, OnPageError};

/// Default output name, matching the original dictionary workbook name.
const DEFAULT_EXPORT_NAME: &str = "option-set-dictionary";

/// Options for exporting the option set dictionary
#[derive(Debug, clap::Args, Clone)]
pub struct ExportOptions {
    /// Output file name; ".csv" is appended when missing. Spaces and
    /// path separators are collapsed to underscores.
    #[arg(short, long, default_value = DEFAULT_EXPORT_NAME)]
    pub output: String,

    /// Number of option sets requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// What to do when a single page fetch fails
    #[arg(long, value_enum, default_value = "skip")]
    pub on_page_error: OnPageError,

    /// DHIS2 base URL (overrides DHIS2_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Handle the export command
pub async fn run(options: ExportOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Discovering option sets for export...");
    }

    let config = Dhis2Config::from_env()?.with_overrides(options.base_url.clone());
    let client = create_authenticated_client(&config)?;
    let page_size = options.page_size.max(1);

    let option_sets =
        discover_option_sets(&client, &config, page_size, options.on_page_error).await?;

    if option_sets.is_empty() {
        log::info!("No option sets discovered, skipping export");
        println!("No option sets discovered; nothing to export.");
        return Ok(());
    }

    log::info!("Generating dictionary file for option sets");
    let rows = dictionary_rows(&option_sets);
    let path = export_path(&options.output);
    write_dictionary(&rows, Path::new(&path))?;

    println!("Wrote {} row(s) to {}", rows.len(), path);

    Ok(())
}

/// Derive the sanitized output path, appending the extension when missing.
fn export_path(output: &str) -> String {
    let name = formatted_export_name(output);
    if name.ends_with(".csv") {
        name
    } else {
        format!("{name}.csv")
    }
}

/// Write the sorted dictionary rows, header included, as CSV.
///
/// The header row is part of `rows` (its position depends on the sort), so
/// the writer's own header emission is disabled.
fn write_dictionary(rows: &[FlatRow], path: &Path) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::Export(e.to_string()))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    writer.flush().map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadict_core::option_set::{OptionSet, OptionValue};

    #[test]
    fn test_export_path_appends_extension() {
        assert_eq!(
            export_path("option-set-dictionary"),
            "option-set-dictionary.csv"
        );
    }

    #[test]
    fn test_export_path_keeps_existing_extension() {
        assert_eq!(export_path("dictionary.csv"), "dictionary.csv");
    }

    #[test]
    fn test_export_path_sanitizes_spaces() {
        assert_eq!(export_path("optionSet list"), "optionSet_list.csv");
    }

    #[test]
    fn test_write_dictionary_round_trips_rows() {
        let option_sets = vec![OptionSet {
            id: "set-1".to_string(),
            name: "Colors".to_string(),
            code: None,
            value_type: Some("TEXT".to_string()),
            options: vec![OptionValue {
                id: "opt-1".to_string(),
                name: "Red".to_string(),
                code: Some("RED".to_string()),
            }],
        }];
        let rows = dictionary_rows(&option_sets);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.csv");
        write_dictionary(&rows, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        // "Colors" < "Name": the data row lands before the header row.
        assert_eq!(lines[0], "set-1,Colors,,TEXT,opt-1,Red,RED");
        assert_eq!(
            lines[1],
            "ID,Name,Code,value Type,Option Id,Option Name,Option Code"
        );
    }

    #[test]
    fn test_write_dictionary_empty_rows_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_dictionary(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
