use std::io::{BufRead, Write};
use crate::error::{Error, Result};
use crate::models::FamilySet;

/// Print every family with its listing index
pub fn print_families(families: &FamilySet, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Found font families:")?;
    for (index, family) in families.iter().enumerate() {
        writeln!(out, "{}:\t{}", index, family.display())?;
    }
    Ok(())
}

/// List the families and ask for one by index
pub fn prompt_family(
    families: &FamilySet,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<String> {
    print_families(families, out)?;
    write!(out, "Select a family (enter its number): ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let choice = line.trim();

    let index: usize = choice
        .parse()
        .map_err(|_| Error::InvalidSelection(format!("\"{}\" is not a number", choice)))?;

    families
        .get_index(index)
        .map(|family| family.name.clone())
        .ok_or_else(|| Error::InvalidSelection(format!("no family numbered {}", index)))
}
