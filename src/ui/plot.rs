use eframe::egui::{Color32, Ui};
use egui_plot::{GridInput, GridMark, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::Dataset;

use super::table::{MAXIMUM_HEADER, PERIOD_HEADER};

const LINE_COLOR: Color32 = Color32::BLUE;
const MARKER_RADIUS: f32 = 3.0;

// ---------------------------------------------------------------------------
// Point construction (pure, kept separate from egui for testability)
// ---------------------------------------------------------------------------

/// Chart points: record `i` plots at `(i, maximum_i)`. The x-axis is purely
/// ordinal, one unit per record in dataset order.
pub fn chart_points(dataset: &Dataset) -> Vec<[f64; 2]> {
    dataset
        .maxima()
        .into_iter()
        .enumerate()
        .map(|(i, maximum)| [i as f64, maximum])
        .collect()
}

/// The period label for the tick at index `idx`, if any.
pub fn tick_label(dataset: &Dataset, idx: usize) -> Option<&str> {
    dataset.records.get(idx).map(|r| r.period.as_str())
}

// ---------------------------------------------------------------------------
// Discharge chart (central panel)
// ---------------------------------------------------------------------------

/// Render the line chart: maxima connected by a line with circular markers,
/// one categorical x tick per record labelled with its period.
pub fn discharge_plot(ui: &mut Ui, dataset: &Dataset) {
    let points = chart_points(dataset);
    let labels: Vec<String> = dataset.periods().iter().map(|p| p.to_string()).collect();
    let n = labels.len();

    Plot::new("discharge_plot")
        .x_axis_label(PERIOD_HEADER)
        .y_axis_label(MAXIMUM_HEADER)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .x_grid_spacer(move |_input: GridInput| -> Vec<GridMark> {
            // One mark per record, at integer positions.
            (0..n)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON {
                return String::new();
            }
            usize::try_from(idx as i64)
                .ok()
                .and_then(|i| labels.get(i).cloned())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            if points.is_empty() {
                return;
            }
            let line = Line::new(PlotPoints::from(points.clone()))
                .color(LINE_COLOR)
                .width(1.5);
            plot_ui.line(line);

            let markers = Points::new(PlotPoints::from(points))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(MARKER_RADIUS)
                .color(LINE_COLOR);
            plot_ui.points(markers);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            Record {
                period: "2020".into(),
                maximum: 5.0,
            },
            Record {
                period: "2021".into(),
                maximum: 9.0,
            },
        ])
    }

    #[test]
    fn points_plot_at_ordinal_positions() {
        assert_eq!(chart_points(&sample()), vec![[0.0, 5.0], [1.0, 9.0]]);
    }

    #[test]
    fn one_tick_label_per_record() {
        let ds = sample();
        assert_eq!(tick_label(&ds, 0), Some("2020"));
        assert_eq!(tick_label(&ds, 1), Some("2021"));
        assert_eq!(tick_label(&ds, 2), None);
    }

    #[test]
    fn empty_dataset_has_no_points() {
        let ds = Dataset::default();
        assert!(chart_points(&ds).is_empty());
        assert_eq!(tick_label(&ds, 0), None);
    }
}
