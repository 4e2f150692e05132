//! Machine d’état de la calculatrice (sans vue).
//!
//! Une seule structure, mutée par une touche à la fois (style “reducer”).
//!
//! Contrats :
//! - `affichage` est toujours un littéral numérique en cours d’édition, ou "Error".
//! - Au plus un point décimal ; zéro de tête supprimé sauf pour "0.".
//! - `erreur` <=> affichage == "Error".
//! - Les opérations s’enchaînent de gauche à droite, sans priorité.

use tracing::{debug, warn};

use super::arith::{ErreurCalcul, Operateur};
use super::format::{texte_brut, MARQUEUR_ERREUR};

/// Garde-fou : chiffres saisis au plus (au-delà, f64 ne les distingue plus).
const CHIFFRES_SAISIE_MAX: usize = 16;

/// Événement d’entrée (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Op(Operateur),
    Egal,
    ToutEffacer,
    Signe,
    Pourcent,
    Retour,
}

/// État observable, dérivé des drapeaux.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Saisie,
    AttenteOperande,
    Erreur,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    affichage: String,
    operande: Option<f64>,
    operateur: Option<Operateur>,
    attente_operande: bool,
    erreur: bool,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operande: None,
            operateur: None,
            attente_operande: false,
            erreur: false,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte brut (non formaté).
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operande(&self) -> Option<f64> {
        self.operande
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur
    }

    pub fn mode(&self) -> Mode {
        if self.erreur {
            Mode::Erreur
        } else if self.attente_operande {
            Mode::AttenteOperande
        } else {
            Mode::Saisie
        }
    }

    /// Valeur numérique de l’affichage (0 si illisible).
    fn valeur(&self) -> f64 {
        self.affichage.parse().unwrap_or(0.0)
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Applique une touche. Jamais d’erreur remontée : tout finit dans l’affichage.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Op(op) => self.operateur_suivant(op),
            Touche::Egal => self.egal(),
            Touche::ToutEffacer => self.tout_effacer(),
            Touche::Signe => self.inverser_signe(),
            Touche::Pourcent => self.pourcent(),
            Touche::Retour => self.retour(),
        }
        debug!(?touche, affichage = %self.affichage, mode = ?self.mode(), "touche");
    }

    /* ------------------------ Transitions ------------------------ */

    pub fn chiffre(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let c = char::from(b'0' + d);

        if self.erreur {
            // reprise : on repart d’une saisie neuve
            *self = Self::default();
            self.affichage = c.to_string();
            return;
        }

        if self.attente_operande {
            self.affichage = c.to_string();
            self.attente_operande = false;
            return;
        }

        if self.affichage.chars().filter(char::is_ascii_digit).count() >= CHIFFRES_SAISIE_MAX {
            return;
        }

        match self.affichage.as_str() {
            "0" => self.affichage = c.to_string(),
            "-0" => self.affichage = format!("-{c}"),
            _ => self.affichage.push(c),
        }
    }

    pub fn point(&mut self) {
        if self.erreur {
            *self = Self::default();
            self.affichage = "0.".to_string();
            return;
        }

        if self.attente_operande {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
            return;
        }

        if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    pub fn operateur_suivant(&mut self, op: Operateur) {
        if self.erreur {
            return;
        }

        // Opération en attente : on la résout d’abord avec la valeur affichée.
        let courant = self.valeur();
        match (self.operande, self.operateur) {
            (Some(a), Some(prec)) => match prec.appliquer(a, courant) {
                Ok(r) => {
                    self.operande = Some(r);
                    self.affichage = texte_brut(r);
                }
                Err(e) => {
                    self.passer_en_erreur(e);
                    return;
                }
            },
            _ => self.operande = Some(courant),
        }

        self.operateur = Some(op);
        self.attente_operande = true;
    }

    pub fn egal(&mut self) {
        if self.erreur {
            return;
        }
        let (Some(a), Some(op)) = (self.operande, self.operateur) else {
            return;
        };

        match op.appliquer(a, self.valeur()) {
            Ok(r) => {
                self.affichage = texte_brut(r);
                self.operande = None;
                self.operateur = None;
                self.attente_operande = true;
            }
            Err(e) => self.passer_en_erreur(e),
        }
    }

    /// AC : retour à l’état initial.
    pub fn tout_effacer(&mut self) {
        *self = Self::default();
    }

    pub fn inverser_signe(&mut self) {
        if self.erreur {
            return;
        }
        self.affichage = texte_brut(-self.valeur());
    }

    pub fn pourcent(&mut self) {
        if self.erreur {
            return;
        }
        self.affichage = texte_brut(self.valeur() / 100.0);
    }

    /// Efface le dernier caractère de la saisie en cours ("0" si vide).
    pub fn retour(&mut self) {
        if self.erreur || self.attente_operande {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = "0".to_string();
        }
    }

    /* ------------------------ Erreur ------------------------ */

    fn passer_en_erreur(&mut self, e: ErreurCalcul) {
        warn!(erreur = %e, "calcul impossible");
        self.affichage = MARQUEUR_ERREUR.to_string();
        self.erreur = true;
        self.attente_operande = false;
    }
}
