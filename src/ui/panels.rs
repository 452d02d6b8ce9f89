use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::PlotSession;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, session: &mut PlotSession) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(session);
                ui.close_menu();
            }
            if ui
                .add_enabled(session.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                reload(session);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} sections, {} series",
            session.document.len(),
            session.series.len()
        ));

        if let Some(msg) = &session.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File actions
// ---------------------------------------------------------------------------

pub fn open_file_dialog(session: &mut PlotSession) {
    let file = rfd::FileDialog::new()
        .set_title("Open benchmark log")
        .add_filter("Log files", &["log", "txt"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = session.load(&path) {
            report(session, e);
        }
    }
}

fn reload(session: &mut PlotSession) {
    if let Err(e) = session.reload() {
        report(session, e);
    }
}

fn report(session: &mut PlotSession, e: anyhow::Error) {
    log::error!("Failed to load log: {e:#}");
    session.status_message = Some(format!("Error: {e:#}"));
}
