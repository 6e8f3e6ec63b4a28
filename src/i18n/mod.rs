//! Message catalogs and locale resolution.
//!
//! Every user-facing string (validation errors, envelope messages, auth
//! failures) is looked up here by key. The active locale is carried in a
//! task-local set by [`locale_middleware`], so services and error
//! conversions can translate without threading a locale through every call.

mod en;
mod es;

use axum::{
    extract::{Request, State},
    http::header::ACCEPT_LANGUAGE,
    middleware::Next,
    response::Response,
};
use futures::Future;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "es"];
pub const DEFAULT_LOCALE: &str = "en";

static FALLBACK_LOCALE: OnceLock<&'static str> = OnceLock::new();

lazy_static! {
    static ref CATALOG: MessageCatalog = MessageCatalog::builtin();
}

tokio::task_local! {
    static CURRENT_LOCALE: &'static str;
}

/// Locale → key → template table.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locales: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl MessageCatalog {
    /// Catalog with the bundled `en` and `es` messages.
    pub fn builtin() -> Self {
        let mut locales = HashMap::new();
        locales.insert("en", en::MESSAGES.iter().copied().collect());
        locales.insert("es", es::MESSAGES.iter().copied().collect());
        Self { locales }
    }

    /// Template for `key` in `locale`, then in `fallback`.
    pub fn lookup(&self, locale: &str, fallback: &str, key: &str) -> Option<&'static str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.locales
                    .get(fallback)
                    .and_then(|messages| messages.get(key))
            })
            .copied()
    }

    /// Resolves `key` and substitutes `params`. Unknown keys come back verbatim.
    pub fn translate(
        &self,
        locale: &str,
        fallback: &str,
        key: &str,
        params: &[(&str, &str)],
    ) -> String {
        match self.lookup(locale, fallback, key) {
            Some(template) => substitute(template, params),
            None => key.to_string(),
        }
    }
}

/// Replaces `:name`, `:Name` and `:NAME` placeholders. Longer names are
/// replaced first so `:min` never clobbers part of `:minimum`.
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut ordered: Vec<&(&str, &str)> = params.iter().collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = template.to_string();
    for (name, value) in ordered {
        out = out.replace(&format!(":{}", name), value);
        out = out.replace(&format!(":{}", capitalize(name)), &capitalize(value));
        out = out.replace(
            &format!(":{}", name.to_uppercase()),
            &value.to_uppercase(),
        );
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sets the locale consulted for keys missing from the active one. Only the
/// first call takes effect.
pub fn init_fallback_locale(locale: &str) -> bool {
    match supported_locale(locale) {
        Some(supported) => FALLBACK_LOCALE.set(supported).is_ok(),
        None => false,
    }
}

/// Maps a requested locale to a bundled one, if any.
pub fn supported_locale(locale: &str) -> Option<&'static str> {
    let primary = locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == primary)
}

/// First supported language in an `Accept-Language` header.
pub fn negotiate(accept_language: &str) -> Option<&'static str> {
    accept_language
        .split(',')
        .filter_map(|part| part.split(';').next())
        .find_map(supported_locale)
}

pub async fn scope_locale<Fut, R>(locale: &'static str, future: Fut) -> R
where
    Fut: Future<Output = R>,
{
    CURRENT_LOCALE.scope(locale, future).await
}

pub fn fallback_locale() -> &'static str {
    FALLBACK_LOCALE.get().copied().unwrap_or(DEFAULT_LOCALE)
}

pub fn current_locale() -> &'static str {
    CURRENT_LOCALE.try_with(|l| *l).unwrap_or(DEFAULT_LOCALE)
}

/// Translates `key` in the current locale.
pub fn trans(key: &str) -> String {
    trans_with(key, &[])
}

pub fn trans_with(key: &str, params: &[(&str, &str)]) -> String {
    CATALOG.translate(current_locale(), fallback_locale(), key, params)
}

/// Display name for a validated attribute. Attributes without a catalog
/// entry are shown with underscores replaced by spaces.
pub fn attribute(name: &str) -> String {
    let key = format!("validation.attributes.{}", name);
    CATALOG
        .lookup(current_locale(), fallback_locale(), &key)
        .map(str::to_string)
        .unwrap_or_else(|| name.replace('_', " "))
}

/// Picks the request locale from `Accept-Language`, falling back to the
/// configured default, and runs the rest of the stack inside it.
pub async fn locale_middleware(
    State(default_locale): State<&'static str>,
    request: Request,
    next: Next,
) -> Response {
    let locale = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(negotiate)
        .unwrap_or(default_locale);

    scope_locale(locale, next.run(request)).await
}
