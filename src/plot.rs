//! Diagnostic chart comparing source and interpolated samples.
//!
//! The upper panel shows latitude against PK, the lower panel the track in
//! longitude/latitude. Source samples are drawn as dots, interpolated
//! samples as a line.
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::sample::{InterpolatedTable, Sample, SampleTable};

const SIZE: (u32, u32) = (1280, 1200);
const SOURCE_COLOR: RGBColor = RGBColor(200, 0, 60);
const INTERP_COLOR: RGBColor = RGBColor(30, 100, 220);

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Write the chart as SVG to `path`.
pub fn render_svg(path: &Path, samples: &SampleTable, table: &InterpolatedTable) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    draw_chart(root, samples, table).map_err(|e| Error::Plot(e.to_string()))?;
    log::info!("Wrote plot: {}", path.display());
    Ok(())
}

/// Render the chart into an SVG document held in memory.
pub fn render_svg_string(samples: &SampleTable, table: &InterpolatedTable) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, SIZE).into_drawing_area();
        draw_chart(root, samples, table).map_err(|e| Error::Plot(e.to_string()))?;
    }
    Ok(buf)
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    samples: &SampleTable,
    table: &InterpolatedTable,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    let source: Vec<Sample> = samples.iter().collect();
    let interp = table.samples();

    draw_panel(
        &panels[0],
        "Latitude by PK",
        ("PK (km)", "Latitude"),
        &source,
        interp,
        |s| (s.pk, s.latitude),
    )?;
    draw_panel(
        &panels[1],
        "Track",
        ("Longitude", "Latitude"),
        &source,
        interp,
        |s| (s.longitude, s.latitude),
    )?;

    root.present()?;
    Ok(())
}

fn draw_panel<DB, F>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    (x_desc, y_desc): (&str, &str),
    source: &[Sample],
    interp: &[Sample],
    project: F,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Fn(&Sample) -> (f64, f64),
{
    let points: Vec<(f64, f64)> = source.iter().chain(interp).map(&project).collect();
    let x_range = padded_range(points.iter().map(|p| p.0));
    let y_range = padded_range(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .y_label_formatter(&|v| format!("{v:.4}"))
        .draw()?;

    chart
        .draw_series(LineSeries::new(interp.iter().map(&project), &INTERP_COLOR))?
        .label("Interpolated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &INTERP_COLOR));

    chart
        .draw_series(
            source
                .iter()
                .map(|s| Circle::new(project(s), 4, SOURCE_COLOR.filled())),
        )?
        .label("Source samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, SOURCE_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Data range with 5% padding on both sides; never empty.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !(lo.is_finite() && hi.is_finite()) {
        return 0.0..1.0;
    }
    let pad = match hi - lo {
        d if d > 0.0 => 0.05 * d,
        _ => 0.5 * lo.abs().max(1e-6),
    };
    (lo - pad)..(hi + pad)
}
