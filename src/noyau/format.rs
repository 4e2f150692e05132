// src/noyau/format.rs
//
// Affichage : texte brut (état) -> texte lu à l’écran.
// - Error reste Error
// - |x| > seuil   : notation exponentielle (1.234568e+9)
// - sinon         : partie entière groupée, partie décimale gardée telle quelle

/// Marqueur d’erreur, seul texte non numérique autorisé dans l’affichage.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Paramètres de formatage (fournis par les réglages).
#[derive(Clone, Debug, PartialEq)]
pub struct FormatAffichage {
    pub separateur_milliers: char,
    pub seuil_exponentiel: f64,
    pub chiffres_exponentiel: usize,
}

impl Default for FormatAffichage {
    fn default() -> Self {
        Self {
            separateur_milliers: ',',
            seuil_exponentiel: 999_999_999.0,
            chiffres_exponentiel: 6,
        }
    }
}

/// Texte brut d’un résultat : forme décimale la plus courte, jamais "-0".
pub fn texte_brut(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/* ------------------------ Helpers ------------------------ */

/// "1234567" -> "1,234,567" (chiffres seulement, sans signe).
fn grouper_milliers(chiffres: &str, sep: char) -> String {
    let chiffres = chiffres.trim_start_matches('0');
    if chiffres.is_empty() {
        return "0".to_string();
    }

    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Notation exponentielle avec exposant signé : 1.000000e+10, 2.500000e-3.
fn exponentiel(x: f64, chiffres: usize) -> String {
    let brut = format!("{x:.chiffres$e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if exp.starts_with('-') => format!("{mantisse}e{exp}"),
        Some((mantisse, exp)) => format!("{mantisse}e+{exp}"),
        None => brut,
    }
}

/* ------------------------ API ------------------------ */

/// Texte affiché pour un état brut.
///
/// Un brut illisible (ne devrait pas arriver) s’affiche "0".
pub fn formater_affichage(brut: &str, fmt: &FormatAffichage) -> String {
    if brut == MARQUEUR_ERREUR {
        return MARQUEUR_ERREUR.to_string();
    }

    let Ok(x) = brut.parse::<f64>() else {
        return "0".to_string();
    };

    if x.abs() > fmt.seuil_exponentiel {
        return exponentiel(x, fmt.chiffres_exponentiel);
    }

    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut),
    };

    let entier = |e: &str| grouper_milliers(e, fmt.separateur_milliers);
    match corps.split_once('.') {
        // partie décimale verbatim (y compris "3." pendant la saisie)
        Some((e, d)) => format!("{signe}{}.{d}", entier(e)),
        None => format!("{signe}{}", entier(corps)),
    }
}
