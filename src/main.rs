use std::path::PathBuf;

use miette::Result;

use iconcss::{display_path, validate_sources, Bundle, IconSource, Printer, Severity};

/// Packaged icon-set documents bundled with the binary.
const TABLER_JSON: &str = include_str!("../assets/icon-sets/tabler.json");

/// Where the generated CSS lands, relative to the working directory.
const TARGET: &str = "generated-icons.css";

fn main() -> Result<()> {
    let printer = Printer::new();
    let bundle = Bundle::new(sources()?, PathBuf::from(TARGET));

    let report = validate_sources(&bundle.sources);
    for diagnostic in report.iter() {
        match diagnostic.severity {
            Severity::Warning => printer.warning("warning", &diagnostic.message),
            Severity::Error => printer.error("error", &diagnostic.message),
        }
        if let Some(help) = &diagnostic.help {
            printer.info("help", help);
        }
    }

    let path = bundle.run(&printer)?;
    printer.success("Saved", &display_path(&path));

    Ok(())
}

/// The compiled-in source list. Documents are used whole; restrict one with
/// `IconSource::packaged_subset` to bundle only the icons a project uses.
fn sources() -> iconcss::Result<Vec<IconSource>> {
    Ok(vec![
        IconSource::packaged(TABLER_JSON)?,
        // Example for custom SVG icons:
        // IconSource::directory("assets/svg", "custom", false),
    ])
}
