// src/app/vue.rs
//
// Vue (UI egui) — fenêtre native
// ------------------------------
// - Liste déroulante sur le catalogue (mêmes libellés que le menu texte)
// - Un champ par invite déclarée par l’opération choisie
// - Enter évalue (quand un champ a le focus), "=" aussi
// - Résultat / EXACT / erreur en dessous

use eframe::egui;

use super::etat::AppCalc;
use crate::config::PRECISION_MAX;
use crate::noyau::{chercher, Forme, CATALOGUE};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Scientific Calculator");
                ui.add_space(6.0);

                self.ui_choix(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_operandes(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);
            });
    }

    fn ui_choix(&mut self, ui: &mut egui::Ui) {
        let libelle = chercher(self.code)
            .map(|op| format!("{:>2}. {}", op.code, op.menu))
            .unwrap_or_default();

        let mut choisi = self.code;
        egui::ComboBox::from_label("Operation")
            .selected_text(libelle)
            .width(ui.available_width() * 0.8)
            .show_ui(ui, |ui| {
                for op in CATALOGUE {
                    let texte = match op.forme {
                        Forme::NonSupportee => {
                            format!("{:>2}. {} (not supported)", op.code, op.menu)
                        }
                        _ => format!("{:>2}. {}", op.code, op.menu),
                    };
                    ui.selectable_value(&mut choisi, op.code, texte);
                }
            });
        self.choisir(choisi);
    }

    fn ui_operandes(&mut self, ui: &mut egui::Ui) {
        let invites = chercher(self.code).map(|op| op.invites()).unwrap_or(&[]);

        if invites.is_empty() {
            ui.label("No operand.");
        }

        for (i, inv) in invites.iter().enumerate() {
            ui.label(inv.texte.trim_end().trim_end_matches(':'));

            let champ = self.champ_mut(inv.champ);
            let resp = ui.add(
                egui::TextEdit::singleline(champ)
                    .desired_width(ui.available_width())
                    .id_source(("operande", i))
                    .code_editor(),
            );

            // Après un clic sur un bouton, on redonne le focus au premier champ
            if i == 0 && self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            let enter = ui.input(|inp| inp.key_pressed(egui::Key::Enter));
            if resp.lost_focus() && enter {
                self.evaluer();
            }
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }

            ui.separator();

            // Contrat: C = saisie seulement ; CLR = sorties seulement ; AC = tout
            self.bouton_action(ui, "C", "Clear the operands", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Clear result and error", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Reset everything", Action::ResetTotal);

            ui.separator();

            ui.label("Precision:");
            let mut p = self.precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=PRECISION_MAX as u32),
            );
            if resp.changed() {
                self.precision = p as usize;
            }

            ui.checkbox(&mut self.afficher_exact, "Exact")
                .on_hover_text("Also show P_n(x) as an exact fraction");
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Result:");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);

        if !self.exact.is_empty() {
            ui.add_space(6.0);
            ui.label("EXACT:");
            Self::champ_monospace(ui, "exact_out", &self.exact, 1);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
