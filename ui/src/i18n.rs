//! Internationalization support for `csprime-ui`.
//!
//! Wires together `i18n-embed` (language selection + asset loading),
//! `fluent` (message formatting), `rust-embed` (compile-time embedding of
//! the `.ftl` files) and `i18n-embed-fl` (compile-time checked lookups).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/csprime-ui.ftl   (fallback/reference)
//!   es-ES/csprime-ui.ftl
//!   fr-FR/csprime-ui.ftl
//! ```
//!
//! Call [`init`] once at app start (idempotent), then look messages up
//! with `t!("nav-home")`. To add a locale, copy the en-US file, translate
//! the values keeping ids and placeholders identical, and run the
//! completeness test in `tests/i18n_missing_keys.rs`.
//!
//! Platform notes:
//! - Desktop: `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`); assets are
//!   always embedded there via the `debug-embed` feature.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("hello-user", name = "Ada")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the
/// shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "csprime-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Home");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
