use crate::dhis2::{create_authenticated_client, Dhis2Config};
use crate::prelude::{println, *};

use super::discover::DEFAULT_PAGE_SIZE;
use super::{discover_option_sets, OnPageError};

/// Options for listing discovered option sets
#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Number of option sets requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// What to do when a single page fetch fails
    #[arg(long, value_enum, default_value = "skip")]
    pub on_page_error: OnPageError,

    /// DHIS2 base URL (overrides DHIS2_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the list command
pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Discovering option sets...");
    }

    let config = Dhis2Config::from_env()?.with_overrides(options.base_url.clone());
    let client = create_authenticated_client(&config)?;
    let page_size = options.page_size.max(1);

    let option_sets =
        discover_option_sets(&client, &config, page_size, options.on_page_error).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&option_sets)?);
        return Ok(());
    }

    println!("Found {} option set(s):\n", option_sets.len());

    if option_sets.is_empty() {
        println!("No option sets found.");
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID",
        "Name",
        "Code",
        "Value Type",
        "Options"
    ]);

    for option_set in &option_sets {
        table.add_row(prettytable::row![
            &option_set.id,
            &option_set.name,
            option_set.code.as_deref().unwrap_or(""),
            option_set.value_type.as_deref().unwrap_or(""),
            option_set.options.len()
        ]);
    }

    table.printstd();

    Ok(())
}
