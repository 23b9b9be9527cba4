// lexiclean/src/commands/variants.rs
//! `lexiclean variants`: lists the dictionary variants a store can load.

use anyhow::Result;
use std::io::Write;

use lexiclean_core::{DictionaryStore, DictionaryVariant};

pub fn run_variants<W: Write>(out: &mut W) -> Result<()> {
    let store = DictionaryStore::embedded();
    for variant in DictionaryVariant::all() {
        store.load(variant.as_str())?;
        writeln!(
            out,
            "{:<10} {:>3} words  ({})",
            variant.as_str(),
            store.len(),
            variant.resource_name()
        )?;
    }
    Ok(())
}
