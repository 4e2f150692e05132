// src/app/clavier.rs
//
// Clavier -> touches de la calculatrice.
// - Texte tapé (chiffres, . , + - * / = %) : Event::Text (suit la disposition clavier)
// - Touches nommées (Enter, Escape, Backspace) : Event::Key
//
// Ne lit que les événements de la frame : rien à enregistrer ni à désinscrire.

use eframe::egui;

use crate::noyau::{Operateur, Touche};

/// Un caractère tapé -> touche (None si sans effet).
pub fn touche_depuis_caractere(c: char) -> Option<Touche> {
    let t = match c {
        '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
        '.' | ',' => Touche::Point,
        '+' => Touche::Op(Operateur::Plus),
        '-' => Touche::Op(Operateur::Moins),
        '*' | '×' => Touche::Op(Operateur::Fois),
        '/' | '÷' => Touche::Op(Operateur::Divise),
        '=' => Touche::Egal,
        '%' => Touche::Pourcent,
        _ => return None,
    };
    Some(t)
}

/// Touche nommée -> touche.
pub fn touche_depuis_cle(cle: egui::Key) -> Option<Touche> {
    match cle {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Escape => Some(Touche::ToutEffacer),
        egui::Key::Backspace => Some(Touche::Retour),
        _ => None,
    }
}

/// Touches de la frame, dans l’ordre reçu.
pub fn touches_de_la_frame(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(texte) => {
                    out.extend(texte.chars().filter_map(touche_depuis_caractere));
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => out.extend(touche_depuis_cle(*key)),
                _ => {}
            }
        }
        out
    })
}
