// src/noyau/format.rs
//
// Affichage d’un résultat flottant, façon "double" classique :
// - entier        -> 11.0
// - décimal       -> 0.5, 0.3333333333333333
// - très grand / très petit -> 1.0E7, 1.5E-5
// - spéciaux      -> Infinity, -Infinity, NaN

/// En dessous : notation scientifique.
const SEUIL_BAS: f64 = 1e-3;
/// À partir de : notation scientifique.
const SEUIL_HAUT: f64 = 1e7;

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let abs = v.abs();
    if (SEUIL_BAS..SEUIL_HAUT).contains(&abs) {
        avec_decimale(format!("{v}"))
    } else {
        format_scientifique(v)
    }
}

/// Garantit au moins une décimale ("11" -> "11.0").
fn avec_decimale(s: String) -> String {
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// "1.5e-5" (Rust) -> "1.5E-5" ; "1e7" -> "1.0E7".
fn format_scientifique(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, exposant)) => {
            format!("{}E{exposant}", avec_decimale(mantisse.to_string()))
        }
        None => avec_decimale(s),
    }
}
