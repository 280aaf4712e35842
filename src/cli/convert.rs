use anyhow::{Result, bail};

use super::ui::{self, StyleType};
use crate::core::config::DefaultPair;
use crate::form::{ConverterBackend, ConverterForm};

pub struct ConvertArgs<'a> {
    pub amount: &'a str,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
}

/// Fills the converter form from the command line and submits it once.
pub async fn run(
    backend: &dyn ConverterBackend,
    defaults: &DefaultPair,
    args: ConvertArgs<'_>,
) -> Result<ConverterForm> {
    let mut form = ConverterForm::new(defaults);

    let spinner = ui::new_spinner("Loading currencies...");
    form.load_currencies(backend).await;

    form.set_amount(args.amount);
    if let Some(from) = args.from {
        form.select_from(&from.to_uppercase());
    }
    if let Some(to) = args.to {
        form.select_to(&to.to_uppercase());
    }

    spinner.set_message("Converting...");
    form.submit(backend).await;
    spinner.finish_and_clear();

    Ok(form)
}

pub fn render(form: &ConverterForm) -> Result<()> {
    if let Some(view) = form.result_view() {
        println!("{}", ui::style_text("Conversion Result", StyleType::Title));
        println!("{}", ui::style_text(&view.source, StyleType::Amount));
        println!("{}", ui::style_text("equals", StyleType::Subtle));
        println!("{}", ui::style_text(&view.target, StyleType::Converted));
        println!("{}", ui::style_text(&view.rate, StyleType::Subtle));
        return Ok(());
    }

    match form.error() {
        Some(message) => {
            eprintln!("{}", ui::style_text(message, StyleType::Error));
            bail!("{message}")
        }
        None => bail!("Conversion produced no result"),
    }
}
