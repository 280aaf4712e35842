use anyhow::Result;
use comfy_table::{Cell, Table};

use super::ui::{self, StyleType};
use crate::catalog;
use crate::core::currency::{Currency, RateProvider};

pub fn build_table(currencies: &[Currency]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
    ]);
    for currency in currencies {
        table.add_row(vec![
            Cell::new(&currency.code),
            Cell::new(&currency.name),
            Cell::new(&currency.symbol),
        ]);
    }
    table
}

pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    let spinner = ui::new_spinner("Fetching currencies...");
    let result = catalog::list_currencies(provider).await;
    spinner.finish_and_clear();

    let currencies = result?;
    println!(
        "{}",
        ui::style_text("Supported currencies", StyleType::Title)
    );
    println!("{}", build_table(&currencies));
    println!(
        "{}",
        ui::style_text(&format!("{} currencies", currencies.len()), StyleType::Subtle)
    );
    Ok(())
}
