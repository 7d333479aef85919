// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les deux façades : session texte (terminal.rs) et fenêtre (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App

pub mod etat;
pub mod terminal;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement la saisie (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // Code 0 : fermeture normale de la fenêtre
        if self.quitter {
            log::info!("fermeture demandée depuis la fenêtre");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
