use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{edit_field, Catalog, EditSession, Mutation};
use pagecraft_model::{serialize_document, ElementKind, PropValue};
use std::fs;
use std::path::PathBuf;

const DEFAULT_PAGE_NAME: &str = "page.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Page title
    #[arg(short, long, default_value = "My Portfolio Page")]
    pub title: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);
    let page_path = PathBuf::from(cwd).join(DEFAULT_PAGE_NAME);

    // Check if files already exist
    if (config_path.exists() || page_path.exists()) && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            if config_path.exists() {
                DEFAULT_CONFIG_NAME
            } else {
                DEFAULT_PAGE_NAME
            }
            .bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagecraft project...".bright_blue().bold()
    );

    // Build the starter page
    let document = starter_document(&args.title)?;
    fs::write(&page_path, serialize_document(&document)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_PAGE_NAME);

    // Write config file
    let config = Config {
        title: args.title.clone(),
        out_dir: Some("dist".to_string()),
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", DEFAULT_PAGE_NAME);
    println!("  2. Run: pagecraft export {} --target html", DEFAULT_PAGE_NAME);
    println!("  3. Run: pagecraft inspect {}", DEFAULT_PAGE_NAME);

    Ok(())
}

/// The stock starter page: heading, intro paragraph, divider, featured
/// card, call-to-action button.
fn starter_document(title: &str) -> Result<pagecraft_model::Document> {
    let mut session = EditSession::new(title, Catalog::standard());

    let kinds = [
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::Divider,
        ElementKind::Card,
        ElementKind::Button,
    ];
    let mut ids = Vec::new();
    for (i, kind) in kinds.into_iter().enumerate() {
        let outcome = session.apply(Mutation::InsertElement { kind, index: i })?;
        ids.push(outcome.created.unwrap_or_default());
    }

    session.apply(edit_field(&ids[0], "text", PropValue::from(title)))?;
    session.apply(edit_field(&ids[0], "fontSize", PropValue::Number(42.0)))?;
    session.apply(edit_field(
        &ids[1],
        "text",
        PropValue::from(
            "Welcome to my page built with the drag-and-drop builder. Edit any element by clicking it.",
        ),
    ))?;
    session.apply(edit_field(&ids[3], "title", PropValue::from("Featured Project")))?;
    session.apply(edit_field(
        &ids[3],
        "body",
        PropValue::from("A full-stack application with real-time features."),
    ))?;
    session.apply(edit_field(&ids[4], "text", PropValue::from("View Projects →")))?;

    Ok(session.document().clone())
}
