//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine d’état + les paramètres d’affichage,
//! et fournir les textes prêts à dessiner.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Calculatrice::appuyer`.
//! - Une instance par widget, aucun état global.

use crate::config::Reglages;
use crate::noyau::format::texte_brut;
use crate::noyau::{formater_affichage, Calculatrice, FormatAffichage, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    calc: Calculatrice,
    format: FormatAffichage,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            calc: Calculatrice::new(),
            format: reglages.format(),
        }
    }

    /// Point d’entrée unique : bouton ou clavier.
    pub fn appuyer(&mut self, touche: Touche) {
        self.calc.appuyer(touche);
    }

    pub fn en_erreur(&self) -> bool {
        self.calc.en_erreur()
    }

    /// Lecture principale (zone "live" pour l’accessibilité).
    pub fn texte_affiche(&self) -> String {
        formater_affichage(self.calc.affichage(), &self.format)
    }

    /// Ligne secondaire : "12 +" tant qu’une opération est en attente.
    pub fn ligne_operation(&self) -> String {
        match (self.calc.operande(), self.calc.operateur()) {
            (Some(a), Some(op)) => {
                let a = formater_affichage(&texte_brut(a), &self.format);
                format!("{a} {}", op.symbole())
            }
            _ => String::new(),
        }
    }
}
