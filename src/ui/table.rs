use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, format_maximum};

pub const PERIOD_HEADER: &str = "Zeitraum";
pub const MAXIMUM_HEADER: &str = "Maximum (m³/s)";

// Uniform cell geometry and shade, fixed font size (no auto-scaling).
const COLUMN_WIDTH: f32 = 100.0;
const ROW_HEIGHT: f32 = 26.0;
const FONT_SIZE: f32 = 12.0;
const CELL_FILL: Color32 = Color32::from_gray(211);

// ---------------------------------------------------------------------------
// Row construction (pure, kept separate from egui for testability)
// ---------------------------------------------------------------------------

/// Build the table contents: the header row followed by one row per record,
/// in dataset order.
pub fn table_rows(dataset: &Dataset) -> Vec<[String; 2]> {
    let mut rows = Vec::with_capacity(dataset.len() + 1);
    rows.push([PERIOD_HEADER.to_string(), MAXIMUM_HEADER.to_string()]);
    for record in &dataset.records {
        rows.push([record.period.clone(), format_maximum(record.maximum)]);
    }
    rows
}

// ---------------------------------------------------------------------------
// Table panel
// ---------------------------------------------------------------------------

/// Render the two-column data table in the left panel.
pub fn data_table(ui: &mut Ui, dataset: &Dataset) {
    let mut rows = table_rows(dataset).into_iter();
    let header = rows.next().unwrap_or_default();

    TableBuilder::new(ui)
        .striped(false)
        .column(Column::exact(COLUMN_WIDTH))
        .column(Column::exact(COLUMN_WIDTH))
        .header(ROW_HEIGHT, |mut header_row| {
            for text in header {
                header_row.col(|ui| {
                    cell(ui, &text, true);
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    for text in row {
                        table_row.col(|ui| {
                            cell(ui, &text, false);
                        });
                    }
                });
            }
        });
}

fn cell(ui: &mut Ui, text: &str, strong: bool) {
    ui.painter().rect_filled(ui.max_rect(), 0.0, CELL_FILL);
    let mut rich = RichText::new(text).size(FONT_SIZE).color(Color32::BLACK);
    if strong {
        rich = rich.strong();
    }
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(rich);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    #[test]
    fn rows_are_header_plus_one_per_record_in_order() {
        let ds = Dataset::from_records(vec![
            Record {
                period: "2020".into(),
                maximum: 5.0,
            },
            Record {
                period: "2021".into(),
                maximum: 9.0,
            },
        ]);

        assert_eq!(
            table_rows(&ds),
            vec![
                ["Zeitraum".to_string(), "Maximum (m³/s)".to_string()],
                ["2020".to_string(), "5".to_string()],
                ["2021".to_string(), "9".to_string()],
            ]
        );
    }

    #[test]
    fn empty_dataset_yields_header_only() {
        let rows = table_rows(&Dataset::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], [PERIOD_HEADER.to_string(), MAXIMUM_HEADER.to_string()]);
    }
}
