use eframe::egui;

use crate::state::PlotSession;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlotLogApp {
    pub session: PlotSession,
}

impl PlotLogApp {
    pub fn new(session: PlotSession) -> Self {
        Self { session }
    }
}

impl eframe::App for PlotLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let title = self.session.window_title();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.session);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::benchmark_plot(ui, &self.session);
        });

        // Follow File → Open… in the title bar.
        if self.session.window_title() != title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.session.window_title(),
            ));
        }
    }
}
