//! Noyau de la calculatrice de poche
//!
//! Organisation interne :
//! - arith.rs    : + − × ÷ (pures) + erreurs
//! - machine.rs  : machine d’état (saisie / attente d’opérande / erreur)
//! - format.rs   : texte brut -> texte affiché (milliers, exponentielle)

pub mod arith;
pub mod format;
pub mod machine;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use arith::Operateur;
pub use format::{formater_affichage, FormatAffichage};
pub use machine::{Calculatrice, Touche};
