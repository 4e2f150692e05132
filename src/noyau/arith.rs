// src/noyau/arith.rs
//
// Les quatre opérations (pures, sans état).
// - + − × : totales
// - ÷     : erreur distincte si diviseur nul (0 ou -0)
//
// Génériques sur Float : la vue n’utilise que f64, mais rien ici n’en dépend.

use num_traits::Float;
use thiserror::Error;

/// Seules erreurs possibles du noyau.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini (dépassement)")]
    ResultatNonFini,
}

pub fn additionner<T: Float>(a: T, b: T) -> T {
    a + b
}

pub fn soustraire<T: Float>(a: T, b: T) -> T {
    a - b
}

pub fn multiplier<T: Float>(a: T, b: T) -> T {
    a * b
}

/// a / b, ou `DivisionParZero` si b == 0 (y compris -0).
pub fn diviser<T: Float>(a: T, b: T) -> Result<T, ErreurCalcul> {
    if b.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

/// Opérateur binaire en attente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché (boutons + ligne d’opération).
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Applique l’opérateur et refuse tout résultat non fini.
    pub fn appliquer<T: Float>(self, a: T, b: T) -> Result<T, ErreurCalcul> {
        let r = match self {
            Operateur::Plus => additionner(a, b),
            Operateur::Moins => soustraire(a, b),
            Operateur::Fois => multiplier(a, b),
            Operateur::Divise => diviser(a, b)?,
        };

        if r.is_finite() {
            Ok(r)
        } else {
            Err(ErreurCalcul::ResultatNonFini)
        }
    }
}
