//! Room palette side panel: one selectable marker per library entry, the
//! session readout, undo/redo buttons, and the transient status line.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use placement::keybindings::KeyBindings;
use placement::session::PlacementSession;
use placement::templates::RoomLibrary;
use placement::undo_redo::{ActionHistory, RedoRequested, UndoRequested};
use rendering::input::{SnapState, StatusMessage};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);
const INFO_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);

#[allow(clippy::too_many_arguments)]
pub fn palette_ui(
    mut contexts: EguiContexts,
    library: Res<RoomLibrary>,
    mut session: ResMut<PlacementSession>,
    mut snap: ResMut<SnapState>,
    history: Res<ActionHistory>,
    bindings: Res<KeyBindings>,
    mut status: ResMut<StatusMessage>,
    mut undo_events: EventWriter<UndoRequested>,
    mut redo_events: EventWriter<RedoRequested>,
) {
    egui::SidePanel::left("room_palette")
        .default_width(220.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Rooms");
            ui.separator();

            if library.is_empty() {
                ui.label(egui::RichText::new("No templates loaded").color(ERROR_COLOR));
            }

            // Clicking a marker selects that template directly, independent
            // of the scroll-cycling gesture.
            let len = library.len();
            for (index, template) in library.templates.iter().enumerate() {
                let selected = index == session.selected;
                let label = format!("{} ({} doors)", template.name, template.connectors.len());
                if ui.selectable_label(selected, label).clicked() {
                    session.select(index, len);
                }
            }

            ui.separator();
            ui.label(format!("Rotation: {}°", session.rotation_steps * 90));
            ui.checkbox(
                &mut snap.enabled,
                format!("Snap to doors ({})", bindings.toggle_snap.display_label()),
            );

            ui.separator();
            ui.horizontal(|ui| {
                let undo_label = format!("Undo ({})", bindings.undo.display_label());
                if ui
                    .add_enabled(history.can_undo(), egui::Button::new(undo_label))
                    .clicked()
                {
                    undo_events.send(UndoRequested);
                    status.set("Undid last placement", false);
                }
                let redo_label = format!("Redo ({})", bindings.redo.display_label());
                if ui
                    .add_enabled(history.can_redo(), egui::Button::new(redo_label))
                    .clicked()
                {
                    redo_events.send(RedoRequested);
                    status.set("Redid placement", false);
                }
            });

            ui.separator();
            ui.small(format!("Cycle room: {}+Scroll", bindings.cycle_modifier.label()));
            ui.small(format!("Rotate: {}+Scroll", bindings.rotate_modifier.label()));
            ui.small(format!("Place: {}", bindings.confirm.display_label()));
            ui.small(format!("Tool on/off: {}", bindings.toggle_tool.display_label()));

            if status.active() {
                ui.separator();
                let color = if status.is_error { ERROR_COLOR } else { INFO_COLOR };
                ui.label(egui::RichText::new(&status.text).color(color));
            }
        });
}
