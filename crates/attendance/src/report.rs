use std::io::{self, Write};

use infra::Roster;

/// One line per entry: `<index> -> <identifier>`.
pub fn write_listing<W: Write>(out: &mut W, roster: &Roster) -> io::Result<()> {
    writeln!(out, "Attendee list:")?;
    for (index, id) in roster.iter().enumerate() {
        writeln!(out, "{index} -> {id}")?;
    }
    Ok(())
}

pub fn write_occurrences<W: Write>(out: &mut W, target: &str, count: usize) -> io::Result<()> {
    writeln!(out, "Number of times {target} appeared - {count}")
}
