use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::extract::{WordType, extract_page};
use crate::fetch::LookupClient;
use crate::output;
use crate::ui::Spinner;

pub struct LookupOptions {
    pub query: String,
    pub count: Option<usize>,
    pub types: Vec<WordType>,
}

/// Runs one dictionary lookup: resolve configuration, fetch the page,
/// extract, render.
pub async fn run_lookup(options: LookupOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default();
    let filter = resolve_config(
        &ResolveOptions {
            count: options.count,
            types: options.types,
        },
        &config_file,
    );

    let client = LookupClient::new()?;

    let spinner = Spinner::new(&format!("Looking up '{}'...", options.query));
    let document = client.fetch_document(&options.query).await;
    spinner.stop();

    let result = extract_page(&document?, &options.query, &filter);
    output::print_result(&result);

    Ok(())
}
