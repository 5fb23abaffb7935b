use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_to_html, CompileOptions};
use pagecraft_model::{deserialize_document, serialize_document};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Structured-form layout file to export
    pub file: PathBuf,

    /// Target format (html, json)
    #[arg(short, long, default_value = "html")]
    pub target: String,

    /// Output file (defaults to the input name with a new extension)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    if !args.file.exists() {
        return Err(anyhow!("Layout file does not exist: {:?}", args.file));
    }

    let json = fs::read_to_string(&args.file)?;
    let document = deserialize_document(&json)?;

    let (output, extension) = match args.target.as_str() {
        "html" => {
            let options = CompileOptions {
                title: config.title.clone(),
                ..Default::default()
            };
            (compile_to_html(&document, options), "html")
        }
        "json" => (serialize_document(&document)?, "json"),
        target => {
            return Err(anyhow!("Invalid target: {}. Use: html or json", target));
        }
    };

    if args.stdout {
        println!("{}", output);
        return Ok(());
    }

    let out_path = match args.out {
        Some(path) => path,
        None => default_out_path(&args.file, extension, config.out_dir.as_deref(), cwd),
    };

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&out_path, output)?;

    println!(
        "  {} {} → {} ({} elements)",
        "✓".green(),
        args.file.display(),
        out_path.display(),
        document.len()
    );

    Ok(())
}

fn default_out_path(
    input: &PathBuf,
    extension: &str,
    out_dir: Option<&str>,
    cwd: &str,
) -> PathBuf {
    let file_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());

    let dir = match out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => PathBuf::from(cwd),
    };

    dir.join(format!("{}.{}", file_name, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_out_path_uses_out_dir() {
        let path = default_out_path(&PathBuf::from("page.json"), "html", Some("dist"), "/proj");
        assert_eq!(path, PathBuf::from("/proj/dist/page.html"));
    }

    #[test]
    fn test_default_out_path_without_out_dir() {
        let path = default_out_path(&PathBuf::from("page.json"), "html", None, "/proj");
        assert_eq!(path, PathBuf::from("/proj/page.html"));
    }
}
