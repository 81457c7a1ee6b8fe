//! Bar chart of total pay per employee.
//!
//! Rendering goes through the `plotters` bitmap backend. Titles and labels
//! need a TrueType font, which is registered at runtime from the configured
//! candidate paths. Without one the chart is still drawn, just unlabelled.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info, warn};

use crate::config::ChartOptions;
use crate::error::{PipelineError, PipelineResult};
use crate::models::PayrollSummary;

/// File name of the pay chart.
pub const PAY_CHART_PNG: &str = "pay_by_employee.png";

/// Chart size in pixels.
pub const CHART_SIZE: (u32, u32) = (800, 500);

const BAR_COLOR: RGBColor = RGBColor(0x46, 0x82, 0xb4);

// Fonts register process-wide. Until one registers, every render retries
// with its own candidate paths; after that, every render is labelled.
static REGISTERED_FONT: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Renders one bar per payroll row (x = name, y = total pay) to a PNG file.
///
/// # Returns
///
/// Returns `Chart` if the image cannot be drawn or written. A missing font
/// is not an error: the chart is drawn without text and a warning is logged.
///
/// Font registration is process-wide. A call whose `font_paths` yield no
/// font leaves nothing cached, so a later call with a usable path still
/// gets a labelled chart. Once a font is registered it is used for every
/// later chart, whatever that call's `font_paths`.
///
/// # Example
///
/// ```no_run
/// use payroll_report::config::ChartOptions;
/// use payroll_report::models::PayrollSummary;
/// use payroll_report::report::render_pay_chart;
/// use rust_decimal::Decimal;
/// use std::path::Path;
///
/// let rows = vec![PayrollSummary {
///     employee_id: "E1".to_string(),
///     name: "Alice".to_string(),
///     hours_worked: Decimal::new(10, 0),
///     pay: Decimal::new(220, 0),
/// }];
/// render_pay_chart(&rows, Path::new("pay_by_employee.png"), &ChartOptions::default())?;
/// # Ok::<(), payroll_report::error::PipelineError>(())
/// ```
pub fn render_pay_chart(
    rows: &[PayrollSummary],
    path: &Path,
    options: &ChartOptions,
) -> PipelineResult<()> {
    let labelled = ensure_font(&options.font_paths);
    if !labelled {
        warn!(
            path = %path.display(),
            "No usable font found; drawing the pay chart without labels"
        );
    }

    draw_chart(rows, path, labelled).map_err(|e| PipelineError::Chart {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), bars = rows.len(), labelled, "Wrote pay chart");
    Ok(())
}

fn ensure_font(font_paths: &[PathBuf]) -> bool {
    ensure_font_with(&REGISTERED_FONT, font_paths, register_first_font)
}

fn ensure_font_with<F>(
    slot: &Mutex<Option<PathBuf>>,
    font_paths: &[PathBuf],
    register: F,
) -> bool
where
    F: FnOnce(&[PathBuf]) -> Option<PathBuf>,
{
    let mut registered = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if registered.is_none() {
        *registered = register(font_paths);
    }
    registered.is_some()
}

fn register_first_font(font_paths: &[PathBuf]) -> Option<PathBuf> {
    for path in font_paths {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font("sans-serif", FontStyle::Normal, bytes) {
            Ok(()) => {
                debug!(font = %path.display(), "Registered chart font");
                return Some(path.clone());
            }
            Err(_) => debug!(font = %path.display(), "Skipping unreadable font"),
        }
    }
    None
}

/// Returns the y-axis range: always includes zero, with 10% headroom.
fn value_range(values: &[f64]) -> (f64, f64) {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };
    let bottom = if min < 0.0 { min * 1.1 } else { 0.0 };
    (bottom, top)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn draw_chart(rows: &[PayrollSummary], path: &Path, labelled: bool) -> Result<(), Box<dyn Error>> {
    let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
    let values: Vec<f64> = rows.iter().map(|r| to_f64(r.pay)).collect();
    let (bottom, top) = value_range(&values);
    let bars = names.len().max(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labelled {
        builder
            .caption("Total Pay by Employee", ("sans-serif", 24))
            .x_label_area_size(50)
            .y_label_area_size(70);
    }
    let mut chart = builder.build_cartesian_2d((0..bars).into_segmented(), bottom..top)?;

    if labelled {
        let x_label = |value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };
        let y_label = |value: &f64| format!("{:.0}", value);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars)
            .x_label_formatter(&x_label)
            .y_label_formatter(&y_label)
            .x_desc("Employee")
            .y_desc("Total Pay (USD)")
            .draw()?;
    }

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(10)
            .data(values.iter().enumerate().map(|(i, pay)| (i, *pay))),
    )?;

    root.present()?;
    Ok(())
}
