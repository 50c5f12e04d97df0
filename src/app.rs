use eframe::egui;

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// Table : chart width ratio, as fractions of the window width.
const TABLE_WIDTH_FRACTION: f32 = 1.0 / 5.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PegeltafelApp {
    pub state: AppState,
}

impl PegeltafelApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PegeltafelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: data table (1:4 against the chart) ----
        let table_width = ctx.screen_rect().width() * TABLE_WIDTH_FRACTION;
        egui::SidePanel::left("table_panel")
            .exact_width(table_width)
            .resizable(false)
            .show(ctx, |ui| {
                table::data_table(ui, &self.state.dataset);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::discharge_plot(ui, &self.state.dataset);
        });
    }
}
