use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_model::{deserialize_document, Element, ElementKind};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Structured-form layout file to inspect
    pub file: PathBuf,
}

pub fn inspect(args: InspectArgs, _cwd: &str) -> Result<()> {
    if !args.file.exists() {
        return Err(anyhow!("Layout file does not exist: {:?}", args.file));
    }

    let json = fs::read_to_string(&args.file)?;
    let document = deserialize_document(&json)?;

    println!(
        "{} {}",
        "⊞".bright_blue(),
        args.file.display().to_string().bright_white().bold()
    );
    println!();

    for (index, element) in document.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            format!("{:>3}", index).bright_black(),
            format!("{:<9}", element.kind.to_string()).bright_blue(),
            element.id.bright_black(),
            summary(element)
        );
    }

    println!();
    println!(
        "{} element{}",
        document.len(),
        if document.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

/// One-line gist of an element: its most identifying property.
fn summary(element: &Element) -> String {
    let key = match element.kind {
        ElementKind::Card => "title",
        ElementKind::Image => "src",
        ElementKind::Divider | ElementKind::Section => return String::new(),
        _ => "text",
    };

    let value = element.prop_str(key);
    if value.chars().count() > 48 {
        format!("\"{}…\"", value.chars().take(47).collect::<String>())
    } else {
        format!("\"{}\"", value)
    }
}
