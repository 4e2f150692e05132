// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : ligne d’opération en attente + lecture principale (zone "live" AccessKit)
// - Pavé 4×5 : gros boutons, noms accessibles ("All Clear", "Divide", ...)
// - Un clic ne garde pas le focus : Enter reste "=" au clavier

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

const ESPACE: f32 = 8.0;
const HAUTEUR_TOUCHE: f32 = 56.0;

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Fonction,
    Operateur,
    Effacer,
}

impl Genre {
    /// Fond du bouton (None = style egui).
    fn fond(self) -> Option<egui::Color32> {
        match self {
            Genre::Chiffre => None,
            Genre::Fonction => Some(egui::Color32::from_rgb(75, 85, 99)),
            Genre::Operateur => Some(egui::Color32::from_rgb(245, 158, 11)),
            Genre::Effacer => Some(egui::Color32::from_rgb(239, 68, 68)),
        }
    }
}

struct DefTouche {
    label: &'static str,
    nom: &'static str,
    touche: Touche,
    genre: Genre,
}

const fn chiffre(label: &'static str, d: u8) -> DefTouche {
    DefTouche {
        label,
        nom: label,
        touche: Touche::Chiffre(d),
        genre: Genre::Chiffre,
    }
}

const fn op(o: Operateur, nom: &'static str) -> DefTouche {
    DefTouche {
        label: o.symbole(),
        nom,
        touche: Touche::Op(o),
        genre: Genre::Operateur,
    }
}

const fn autre(label: &'static str, nom: &'static str, touche: Touche, genre: Genre) -> DefTouche {
    DefTouche {
        label,
        nom,
        touche,
        genre,
    }
}

/// Disposition du pavé (rangée par rangée).
const RANGEES: [[DefTouche; 4]; 5] = [
    [
        autre("AC", "All Clear", Touche::ToutEffacer, Genre::Effacer),
        autre("±", "Plus Minus", Touche::Signe, Genre::Fonction),
        autre("%", "Percentage", Touche::Pourcent, Genre::Fonction),
        op(Operateur::Divise, "Divide"),
    ],
    [chiffre("7", 7), chiffre("8", 8), chiffre("9", 9), op(Operateur::Fois, "Multiply")],
    [chiffre("4", 4), chiffre("5", 5), chiffre("6", 6), op(Operateur::Moins, "Subtract")],
    [chiffre("1", 1), chiffre("2", 2), chiffre("3", 3), op(Operateur::Plus, "Add")],
    [
        chiffre("0", 0),
        autre(".", "Decimal point", Touche::Point, Genre::Chiffre),
        autre("DEL", "Backspace", Touche::Retour, Genre::Fonction),
        autre("=", "Equals", Touche::Egal, Genre::Operateur),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_ecran(ui);
        ui.add_space(10.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // hauteur stable même sans opération en attente
                    let ligne = self.ligne_operation();
                    let ligne = if ligne.is_empty() { " ".to_string() } else { ligne };
                    ui.label(egui::RichText::new(ligne).size(16.0).weak());

                    let couleur = if self.en_erreur() {
                        ui.visuals().error_fg_color
                    } else {
                        ui.visuals().strong_text_color()
                    };
                    let resp = ui.label(
                        egui::RichText::new(self.texte_affiche())
                            .monospace()
                            .size(36.0)
                            .color(couleur),
                    );
                    annoncer_en_direct(ui.ctx(), resp.id);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ((ui.available_width() - 3.0 * ESPACE) / 4.0).max(40.0);
        let taille = egui::vec2(largeur, HAUTEUR_TOUCHE);

        let mut clic = None;
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for rangee in &RANGEES {
                    for def in rangee {
                        if let Some(t) = bouton(ui, taille, def) {
                            clic = Some(t);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(t) = clic {
            self.appuyer(t);
        }
    }
}

fn bouton(ui: &mut egui::Ui, taille: egui::Vec2, def: &DefTouche) -> Option<Touche> {
    let mut texte = egui::RichText::new(def.label).size(22.0);
    let fond = def.genre.fond();
    if fond.is_some() {
        texte = texte.color(egui::Color32::WHITE);
    }

    let mut b = egui::Button::new(texte);
    if let Some(f) = fond {
        b = b.fill(f);
    }

    let resp = ui.add_sized(taille, b).on_hover_text(def.nom);
    resp.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, def.nom));

    if !resp.clicked() {
        return None;
    }
    // sinon Enter re-déclencherait le bouton au lieu de "="
    resp.surrender_focus();
    Some(def.touche)
}

/// Lecture annoncée par les lecteurs d’écran à chaque changement (aria-live="polite").
fn annoncer_en_direct(ctx: &egui::Context, id: egui::Id) {
    ctx.accesskit_node_builder(id, |node| {
        node.set_live(egui::accesskit::Live::Polite);
    });
}
