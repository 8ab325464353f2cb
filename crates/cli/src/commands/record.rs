use anyhow::{Context, Result, bail};
use bankdash_core::bank_details::{RawForm, coerce_form};
use bankdash_core::{JsonFileStore, RecordStore};
use serde_json::Value;
use std::path::PathBuf;

fn open(path: PathBuf) -> RecordStore<JsonFileStore> {
    RecordStore::new(JsonFileStore::new(path))
}

/// Split `name=value` arguments into a raw form. Later duplicates win.
fn parse_fields(fields: &[String]) -> Result<RawForm> {
    let mut raw = RawForm::new();
    for field in fields {
        let Some((name, value)) = field.split_once('=') else {
            bail!("expected name=value, got '{field}'");
        };
        raw.insert(name.trim().to_owned(), Value::String(value.to_owned()));
    }
    Ok(raw)
}

pub(crate) fn run_save(path: PathBuf, fields: &[String]) -> Result<()> {
    let raw = parse_fields(fields)?;
    let record = match coerce_form(&raw) {
        Ok(record) => record,
        Err(errors) => {
            for (field, message) in &errors {
                eprintln!("{field}: {message}");
            }
            bail!("{} field(s) need attention", errors.len());
        },
    };

    let mut slot = open(path);
    slot.save(&record).context("Failed to save bank details")?;
    println!("Bank details saved to {}", slot.into_inner().path().display());
    Ok(())
}

pub(crate) fn run_show(path: PathBuf) -> Result<()> {
    let slot = open(path);
    match slot.load()? {
        Some(details) => println!("{}", serde_json::to_string_pretty(&details)?),
        None => println!("No bank details found."),
    }
    Ok(())
}

pub(crate) fn run_charts(path: PathBuf) -> Result<()> {
    let view = open(path).dashboard();
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

pub(crate) fn run_clear(path: PathBuf) -> Result<()> {
    let mut slot = open(path);
    slot.clear()?;
    println!("Bank details cleared.");
    Ok(())
}
