// src/main.rs
//
// Calculatrice de poche — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;
use tracing::{info, warn};

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::Reglages;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Réglages effectifs : un fichier fautif ne bloque jamais le démarrage.
fn reglages_ou_defauts(charge: Result<Reglages, config::ErreurConfig>) -> Reglages {
    charge.unwrap_or_else(|e| {
        warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
        Reglages::default()
    })
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(defaut: &str) {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));
    // déjà installé (tests) : on garde l’existant
    let _ = tracing_subscriber::fmt().with_env_filter(filtre).try_init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let charge = Reglages::charger();
    installer_journal(charge.as_ref().map_or("info", |r| r.journal.as_str()));
    let reglages = reglages_ou_defauts(charge);

    info!(?reglages, "démarrage natif");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([reglages.largeur, reglages.hauteur])
            .with_min_inner_size([280.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{reglages_ou_defauts, AppCalc, Reglages, TITRE_APP};

    use tracing::info;
    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Journal vers la console + panics lisibles
    /// - Fixe le titre de l’onglet (document.title)
    /// - Démarre eframe WebRunner sur <canvas id="the_canvas_id">
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();

        let reglages = reglages_ou_defauts(Reglages::charger());
        info!("démarrage web");

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
