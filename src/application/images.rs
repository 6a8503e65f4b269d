//! Image resolution against the local asset bundle.
//!
//! Remote content references images that may never have been uploaded, or
//! whose host has since changed. Resolution maps any reference, plus an
//! optional hint such as the entity slug, to an asset path from a closed
//! table that ships with the site. It is purely lexical: no network calls and
//! no filesystem checks.
//!
//! # Resolution Order
//!
//! First match wins:
//!
//! 1. The hint, as given, equals a keyword
//! 2. The trimmed hint contains a keyword (case-insensitive)
//! 3. The raw reference contains a keyword (case-insensitive)
//! 4. The default asset (or an indexed fallback, see [`ImageResolver::resolve_indexed`])
//!
//! Exact hint matches are checked against the whole table before any
//! substring scan, so a slug that names a keyword always gets that keyword's
//! asset.

use serde::Deserialize;
use std::path::Path;

/// Errors raised while building an [`ImageMap`].
#[derive(Debug, thiserror::Error)]
pub enum ImageMapError {
    #[error("image rule {index} has an empty keyword")]
    EmptyKeyword { index: usize },
    #[error("image rule '{keyword}' has an empty asset path")]
    EmptyAsset { keyword: String },
    #[error("image map default asset must not be empty")]
    EmptyDefault,
    #[error("image map fallback {index} is empty")]
    EmptyFallback { index: usize },
    #[error("invalid image map JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read image map: {0}")]
    Io(#[from] std::io::Error),
}

/// A single `keyword -> asset` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRule {
    pub keyword: String,
    pub asset: String,
}

impl ImageRule {
    pub fn new(keyword: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            asset: asset.into(),
        }
    }
}

#[derive(Deserialize)]
struct ImageMapFile {
    rules: Vec<ImageRule>,
    default_asset: String,
    #[serde(default)]
    fallbacks: Vec<String>,
}

/// Ordered keyword table with a default asset.
///
/// Every asset path in a constructed map is non-empty; keywords are stored
/// lowercase.
#[derive(Debug, Clone)]
pub struct ImageMap {
    rules: Vec<ImageRule>,
    default_asset: String,
    fallbacks: Vec<String>,
}

impl ImageMap {
    /// Builds a validated map.
    ///
    /// # Errors
    ///
    /// Fails if any keyword, asset, fallback or the default is blank.
    pub fn new(
        rules: Vec<ImageRule>,
        default_asset: impl Into<String>,
        fallbacks: Vec<String>,
    ) -> Result<Self, ImageMapError> {
        let default_asset = default_asset.into().trim().to_string();
        if default_asset.is_empty() {
            return Err(ImageMapError::EmptyDefault);
        }

        let mut normalized = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            let keyword = rule.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(ImageMapError::EmptyKeyword { index });
            }
            let asset = rule.asset.trim().to_string();
            if asset.is_empty() {
                return Err(ImageMapError::EmptyAsset { keyword });
            }
            normalized.push(ImageRule { keyword, asset });
        }

        let mut cleaned = Vec::with_capacity(fallbacks.len());
        for (index, fallback) in fallbacks.into_iter().enumerate() {
            let fallback = fallback.trim().to_string();
            if fallback.is_empty() {
                return Err(ImageMapError::EmptyFallback { index });
            }
            cleaned.push(fallback);
        }

        Ok(Self {
            rules: normalized,
            default_asset,
            fallbacks: cleaned,
        })
    }

    /// Parses a map from JSON.
    ///
    /// ```json
    /// {
    ///   "rules": [{ "keyword": "healthcare", "asset": "/landing/health.jpg" }],
    ///   "default_asset": "/landing/default.jpg",
    ///   "fallbacks": ["/landing/avatars/avatar-1.jpg"]
    /// }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ImageMapError> {
        let file: ImageMapFile = serde_json::from_str(json)?;
        Self::new(file.rules, file.default_asset, file.fallbacks)
    }

    /// Reads and parses a JSON map from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ImageMapError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The table bundled with the site.
    pub fn builtin() -> Self {
        let rules = [
            ("healthcare", "/landing/pexels-tiger-lily-7109063.jpg"),
            ("medical", "/landing/pexels-tiger-lily-7109063.jpg"),
            ("technology", "/landing/pexels-technology-3861969.jpg"),
            ("software", "/landing/pexels-technology-3861969.jpg"),
            ("finance", "/landing/pexels-finance-6801648.jpg"),
            ("banking", "/landing/pexels-finance-6801648.jpg"),
            ("manufacturing", "/landing/pexels-manufacturing-3862627.jpg"),
            ("hospitality", "/landing/pexels-hospitality-941861.jpg"),
            ("logistics", "/landing/pexels-logistics-4481259.jpg"),
            ("executive-search", "/landing/pexels-executive-3184292.jpg"),
            ("recruitment", "/landing/pexels-recruitment-5439381.jpg"),
            ("staffing", "/landing/pexels-staffing-3184465.jpg"),
            ("consulting", "/landing/pexels-consulting-3183150.jpg"),
        ]
        .into_iter()
        .map(|(keyword, asset)| ImageRule::new(keyword, asset))
        .collect();

        Self {
            rules,
            default_asset: "/landing/default-hero.jpg".to_string(),
            fallbacks: vec![
                "/landing/avatars/avatar-1.jpg".to_string(),
                "/landing/avatars/avatar-2.jpg".to_string(),
                "/landing/avatars/avatar-3.jpg".to_string(),
            ],
        }
    }

    pub fn rules(&self) -> &[ImageRule] {
        &self.rules
    }

    pub fn default_asset(&self) -> &str {
        &self.default_asset
    }

    /// Every asset path the map can return.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|r| r.asset.as_str())
            .chain(self.fallbacks.iter().map(String::as_str))
            .chain(std::iter::once(self.default_asset.as_str()))
    }
}

impl Default for ImageMap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolves image references to bundled asset paths.
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    map: ImageMap,
}

impl ImageResolver {
    pub fn new(map: ImageMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &ImageMap {
        &self.map
    }

    /// Resolves `raw` with an optional `hint`. Never returns an empty string.
    pub fn resolve(&self, raw: Option<&str>, hint: Option<&str>) -> String {
        self.matching_asset(raw, hint)
            .unwrap_or(self.map.default_asset.as_str())
            .to_string()
    }

    /// Like [`Self::resolve`], but when nothing matches, rotates through the
    /// map's fallback assets by `index` instead of returning the default.
    ///
    /// Used for lists of portraits so neighbouring entries do not all show
    /// the same placeholder.
    pub fn resolve_indexed(&self, raw: Option<&str>, hint: Option<&str>, index: usize) -> String {
        if let Some(asset) = self.matching_asset(raw, hint) {
            return asset.to_string();
        }

        match self.map.fallbacks.len() {
            0 => self.map.default_asset.clone(),
            len => self.map.fallbacks[index % len].clone(),
        }
    }

    fn matching_asset(&self, raw: Option<&str>, hint: Option<&str>) -> Option<&str> {
        let rules = &self.map.rules;

        if let Some(hint) = hint {
            if let Some(rule) = rules.iter().find(|r| r.keyword == hint) {
                return Some(rule.asset.as_str());
            }
        }

        if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
            let hint = hint.to_lowercase();
            if let Some(rule) = rules.iter().find(|r| hint.contains(&r.keyword)) {
                return Some(rule.asset.as_str());
            }
        }

        let raw = raw.map(str::trim).filter(|r| !r.is_empty())?.to_lowercase();
        rules
            .iter()
            .find(|r| raw.contains(&r.keyword))
            .map(|r| r.asset.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ImageResolver {
        ImageResolver::default()
    }

    #[test]
    fn test_healthcare_hint_without_reference() {
        assert_eq!(
            resolver().resolve(None, Some("healthcare")),
            "/landing/pexels-tiger-lily-7109063.jpg"
        );
    }

    #[test]
    fn test_exact_hint_wins_regardless_of_reference() {
        let r = resolver();
        for rule in r.map().rules() {
            for raw in [
                None,
                Some(""),
                Some("https://cdn.example.com/finance.png"),
                Some("/landing/pexels-technology-3861969.jpg"),
            ] {
                assert_eq!(r.resolve(raw, Some(rule.keyword.as_str())), rule.asset);
            }
        }
    }

    #[test]
    fn test_exact_hint_checked_before_substring_scan() {
        let map = ImageMap::new(
            vec![
                ImageRule::new("care", "/care.jpg"),
                ImageRule::new("healthcare", "/health.jpg"),
            ],
            "/default.jpg",
            vec![],
        )
        .unwrap();
        let r = ImageResolver::new(map);

        assert_eq!(r.resolve(None, Some("healthcare")), "/health.jpg");
        assert_eq!(r.resolve(None, Some("elder-care")), "/care.jpg");
    }

    #[test]
    fn test_hint_substring_match() {
        assert_eq!(
            resolver().resolve(None, Some("it-technology-services")),
            "/landing/pexels-technology-3861969.jpg"
        );
    }

    #[test]
    fn test_hint_takes_priority_over_reference() {
        assert_eq!(
            resolver().resolve(Some("https://x.supabase.co/finance.jpg"), Some("logistics")),
            "/landing/pexels-logistics-4481259.jpg"
        );
    }

    #[test]
    fn test_reference_match_is_case_insensitive() {
        assert_eq!(
            resolver().resolve(Some("https://old-host.example/img/HOSPITALITY_01.JPG"), None),
            "/landing/pexels-hospitality-941861.jpg"
        );
    }

    #[test]
    fn test_reference_used_when_hint_does_not_match() {
        assert_eq!(
            resolver().resolve(Some("uploads/banking-hero.png"), Some("unknown-sector")),
            "/landing/pexels-finance-6801648.jpg"
        );
    }

    #[test]
    fn test_unmatched_inputs_fall_back_to_default() {
        let r = resolver();
        let default = r.map().default_asset().to_string();

        for (raw, hint) in [
            (None, None),
            (Some(""), None),
            (Some("   "), Some("")),
            (Some("https://broken.example/123.jpg"), Some("aerospace")),
            (Some("\u{0}\u{fffd}"), Some("\t")),
        ] {
            let resolved = r.resolve(raw, hint);
            assert!(!resolved.is_empty());
            assert_eq!(resolved, default);
        }
    }

    #[test]
    fn test_resolve_indexed_rotates_fallbacks() {
        let r = resolver();
        let a = r.resolve_indexed(None, None, 0);
        let b = r.resolve_indexed(None, None, 1);
        let wrapped = r.resolve_indexed(None, None, 3);

        assert_eq!(a, "/landing/avatars/avatar-1.jpg");
        assert_eq!(b, "/landing/avatars/avatar-2.jpg");
        assert_eq!(wrapped, a);
        assert_eq!(
            r.resolve_indexed(Some("medical-team.jpg"), None, 2),
            "/landing/pexels-tiger-lily-7109063.jpg"
        );
    }

    #[test]
    fn test_resolve_indexed_without_fallbacks_uses_default() {
        let map = ImageMap::new(vec![], "/d.jpg", vec![]).unwrap();
        assert_eq!(ImageResolver::new(map).resolve_indexed(None, None, 7), "/d.jpg");
    }

    #[test]
    fn test_map_rejects_blank_entries() {
        assert!(matches!(
            ImageMap::new(vec![], "  ", vec![]),
            Err(ImageMapError::EmptyDefault)
        ));
        assert!(matches!(
            ImageMap::new(vec![ImageRule::new(" ", "/a.jpg")], "/d.jpg", vec![]),
            Err(ImageMapError::EmptyKeyword { index: 0 })
        ));
        assert!(matches!(
            ImageMap::new(vec![ImageRule::new("a", "")], "/d.jpg", vec![]),
            Err(ImageMapError::EmptyAsset { .. })
        ));
        assert!(matches!(
            ImageMap::new(vec![], "/d.jpg", vec!["".to_string()]),
            Err(ImageMapError::EmptyFallback { index: 0 })
        ));
    }

    #[test]
    fn test_map_from_json_normalizes_keywords() {
        let map = ImageMap::from_json_str(
            r#"{
                "rules": [{ "keyword": " Aerospace ", "asset": "/landing/aero.jpg" }],
                "default_asset": "/landing/d.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(map.rules()[0].keyword, "aerospace");
        let r = ImageResolver::new(map);
        assert_eq!(r.resolve(None, Some("aerospace")), "/landing/aero.jpg");
        assert_eq!(r.resolve(None, None), "/landing/d.jpg");
    }

    #[test]
    fn test_map_from_invalid_json() {
        assert!(matches!(
            ImageMap::from_json_str("{"),
            Err(ImageMapError::Parse(_))
        ));
    }

    #[test]
    fn test_builtin_assets_are_local_paths() {
        assert!(ImageMap::builtin().assets().all(|a| a.starts_with("/landing/")));
    }

    #[test]
    fn test_builtin_assets_exist_in_bundle() {
        let bundle = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");

        for asset in ImageMap::builtin().assets() {
            let file = bundle.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "missing bundled asset {}", file.display());
        }
    }

    #[test]
    fn test_exact_hint_is_not_trimmed() {
        let map = ImageMap::new(
            vec![
                ImageRule::new("care", "/care.jpg"),
                ImageRule::new("healthcare", "/health.jpg"),
            ],
            "/default.jpg",
            vec![],
        )
        .unwrap();
        let r = ImageResolver::new(map);

        assert_eq!(r.resolve(None, Some("healthcare")), "/health.jpg");
        assert_eq!(r.resolve(None, Some(" healthcare ")), "/care.jpg");
    }
}
