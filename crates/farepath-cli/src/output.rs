//! Output formatting for route results and catalog listings.
//!
//! Renderers write into any [`io::Write`] so they can be exercised without
//! capturing stdout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use farepath_lib::{Route, RouteRenderMode, RouteSummary};

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Single line: `GRU => BRC ao custo de R$ 10`.
    #[default]
    Text,
    /// One location per line with the total cost at the end.
    Listing,
    /// Pretty-printed JSON.
    Json,
}

/// Render a found route.
pub fn render_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Listing => writeln!(out, "{}", summary.render(RouteRenderMode::Listing)),
        OutputFormat::Json => write_json(out, summary),
    }
}

/// Render catalog entries in id order.
pub fn render_routes<W: Write>(
    out: &mut W,
    routes: &[&Route],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &routes),
        OutputFormat::Text | OutputFormat::Listing => {
            if routes.is_empty() {
                return writeln!(out, "No routes in catalog.");
            }
            for route in routes {
                writeln!(
                    out,
                    "{:>4}  {} -> {}  R$ {}",
                    route.id, route.origin, route.destination, route.cost
                )?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}
