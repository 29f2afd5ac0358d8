use crate::constants::SEPARATOR;
use crate::models::{FilterCategory, Listing};
use std::io::{self, Write};

/// Writes each listing as a block of labeled lines.
///
/// The output opens with a separator and every block is followed by one.
/// When `listings` is empty only `no_results` is written.
///
/// # Example
///
/// ```
/// use rescue_dogs::models::Listing;
/// use rescue_dogs::ui;
///
/// let mut out = Vec::new();
/// ui::write_listings(&mut out, &Vec::<Listing>::new(), "No new dogs today :(").unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "No new dogs today :(\n");
/// ```
pub fn write_listings<W: Write>(
    out: &mut W,
    listings: &[Listing],
    no_results: &str,
) -> io::Result<()> {
    if listings.is_empty() {
        return writeln!(out, "{no_results}");
    }

    writeln!(out, "{SEPARATOR}")?;
    for listing in listings {
        writeln!(out, "Name: {}", listing.name)?;
        writeln!(out, "Age: {}", listing.age)?;
        writeln!(out, "Gender: {}", listing.gender)?;
        writeln!(out, "Size: {}", listing.size)?;
        writeln!(out, "Breed: {}", breed_label(listing))?;
        writeln!(out, "URL: {}", listing.url)?;
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

/// Prints listings to stdout.
pub fn print_listings(listings: &[Listing], no_results: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_listings(&mut handle, listings, no_results)
}

fn breed_label(listing: &Listing) -> String {
    match listing.breeds.secondary.as_deref() {
        Some(secondary) if !secondary.is_empty() => {
            format!("{} / {}", listing.breeds.primary, secondary)
        }
        _ => listing.breeds.primary.clone(),
    }
}

/// Writes the box listing every accepted filter token.
pub fn write_filter_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "*---------------------------------------*")?;
    writeln!(out, "|            Filter Options             |")?;
    writeln!(out, "| (Enter none to all for each category) |")?;
    writeln!(out, "|                                       |")?;
    for category in [FilterCategory::Age, FilterCategory::Size, FilterCategory::Gender] {
        let label = format!("{}:", category.display_name());
        let line = format!("  {label:<8}{}", category.options().join(", "));
        writeln!(out, "|{line:<39}|")?;
    }
    writeln!(out, "*---------------------------------------*")
}
