//! Token assembly.
//!
//! Merges a colour palette and a typography scale into a named, read-only
//! token set. Names are derived from `(category, index)` only, so the same
//! inputs always produce the same names:
//!
//! - colours: `color-{palette}-{(index + 1) * 100}`
//! - typography: `font-size-{index}`

mod consumer;

pub use consumer::TokenConsumer;

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Result, TokenError};
use crate::generate::{
    create_typography_scale, generate_color_palette, ColorPalette, ColorPaletteOptions,
    TypographyScale, TypographyScaleOptions,
};
use crate::types::Colour;

/// Which generator a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Typography,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCategory::Color => write!(f, "color"),
            TokenCategory::Typography => write!(f, "typography"),
        }
    }
}

/// A token value: a colour or a px size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(Colour),
    Number(f64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(c) => write!(f, "{}", c),
            TokenValue::Number(n) => write!(f, "{}px", n),
        }
    }
}

/// A single named design value.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignToken {
    pub name: String,
    pub value: TokenValue,
    pub category: TokenCategory,
}

/// An immutable set of design tokens.
///
/// Iteration order is assembly order: colour shades lightest first, then
/// typography steps smallest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    tokens: Vec<DesignToken>,
    by_name: BTreeMap<String, usize>,
}

impl TokenSet {
    pub fn get(&self, name: &str) -> Option<&DesignToken> {
        self.by_name.get(name).map(|&i| &self.tokens[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesignToken> {
        self.tokens.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.name.as_str())
    }

    /// Tokens of one category, in assembly order.
    pub fn category(&self, category: TokenCategory) -> impl Iterator<Item = &DesignToken> {
        self.tokens.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Pretty JSON: `{ "<name>": { "value": ..., "category": ... } }`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TokenError::Parse {
            message: format!("Failed to serialise tokens: {}", e),
            help: None,
        })
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            value: &'a TokenValue,
            category: TokenCategory,
        }

        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for token in &self.tokens {
            map.serialize_entry(
                &token.name,
                &Entry {
                    value: &token.value,
                    category: token.category,
                },
            )?;
        }
        map.end()
    }
}

/// Name of the colour token for shade `index` of `palette`.
pub fn color_token_name(palette: &str, index: usize) -> String {
    format!("color-{}-{}", palette, (index + 1) * 100)
}

/// Name of the typography token for step `index`.
pub fn font_size_token_name(index: usize) -> String {
    format!("font-size-{}", index)
}

/// Merge a palette and a scale into a token set.
pub fn assemble(palette: &ColorPalette, scale: &TypographyScale) -> TokenSet {
    let colours = palette.iter().map(|shade| DesignToken {
        name: color_token_name(palette.name(), shade.index),
        value: TokenValue::Color(shade.color),
        category: TokenCategory::Color,
    });

    let sizes = scale.iter().map(|step| DesignToken {
        name: font_size_token_name(step.index),
        value: TokenValue::Number(step.size_px),
        category: TokenCategory::Typography,
    });

    let tokens: Vec<DesignToken> = colours.chain(sizes).collect();
    let by_name = tokens
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.clone(), i))
        .collect();

    TokenSet { tokens, by_name }
}

/// Generate both value sets and assemble them.
pub fn generate_tokens(
    palette: &ColorPaletteOptions,
    typography: &TypographyScaleOptions,
) -> Result<TokenSet> {
    let palette = generate_color_palette(palette)?;
    let scale = create_typography_scale(typography)?;
    Ok(assemble(&palette, &scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Accessibility;
    use pretty_assertions::assert_eq;

    fn scenario() -> (ColorPalette, TypographyScale) {
        let palette = generate_color_palette(
            &ColorPaletteOptions::new("#3b82f6", 9, Accessibility::Aa).with_name("primary"),
        )
        .unwrap();
        let scale = create_typography_scale(&TypographyScaleOptions::new(16.0, 1.25, 8)).unwrap();
        (palette, scale)
    }

    #[test]
    fn test_assemble_counts() {
        let (palette, scale) = scenario();
        let tokens = assemble(&palette, &scale);

        assert_eq!(tokens.len(), 17);
        assert_eq!(tokens.category(TokenCategory::Color).count(), 9);
        assert_eq!(tokens.category(TokenCategory::Typography).count(), 8);
    }

    #[test]
    fn test_names_unique() {
        let (palette, scale) = scenario();
        let tokens = assemble(&palette, &scale);

        let mut names: Vec<&str> = tokens.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tokens.len());
    }

    #[test]
    fn test_token_names() {
        let (palette, scale) = scenario();
        let tokens = assemble(&palette, &scale);
        let names: Vec<&str> = tokens.names().collect();

        insta::assert_debug_snapshot!(names, @r###"
        [
            "color-primary-100",
            "color-primary-200",
            "color-primary-300",
            "color-primary-400",
            "color-primary-500",
            "color-primary-600",
            "color-primary-700",
            "color-primary-800",
            "color-primary-900",
            "font-size-0",
            "font-size-1",
            "font-size-2",
            "font-size-3",
            "font-size-4",
            "font-size-5",
            "font-size-6",
            "font-size-7",
        ]
        "###);
    }

    #[test]
    fn test_base_shade_is_500() {
        let (palette, scale) = scenario();
        let tokens = assemble(&palette, &scale);

        let token = tokens.get("color-primary-500").unwrap();
        assert_eq!(token.value, TokenValue::Color(Colour::rgb(0x3b, 0x82, 0xf6)));
    }

    #[test]
    fn test_typography_values() {
        let (palette, scale) = scenario();
        let tokens = assemble(&palette, &scale);

        let token = tokens.get("font-size-4").unwrap();
        assert_eq!(token.value, TokenValue::Number(39.06));
        assert_eq!(token.category, TokenCategory::Typography);
        assert!(!tokens.contains("font-size-8"));
    }

    #[test]
    fn test_deterministic_json() {
        let (palette, scale) = scenario();
        let first = assemble(&palette, &scale);
        let second = assemble(&palette, &scale);

        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_regeneration_is_identical() {
        let palette = ColorPaletteOptions::new("teal", 5, Accessibility::Aaa);
        let typography = TypographyScaleOptions::new(14.0, 1.2, 6);

        assert_eq!(
            generate_tokens(&palette, &typography).unwrap().to_json().unwrap(),
            generate_tokens(&palette, &typography).unwrap().to_json().unwrap()
        );
    }

    #[test]
    fn test_json_shape() {
        let (palette, scale) = scenario();
        let json: serde_json::Value =
            serde_json::from_str(&assemble(&palette, &scale).to_json().unwrap()).unwrap();

        assert_eq!(
            json["font-size-2"],
            serde_json::json!({ "value": 25.0, "category": "typography" })
        );
        assert_eq!(json["color-primary-500"]["value"], "#3b82f6");
        assert_eq!(json["color-primary-500"]["category"], "color");
    }

    #[test]
    fn test_generate_tokens_propagates_errors() {
        let err = generate_tokens(
            &ColorPaletteOptions::default(),
            &TypographyScaleOptions::new(16.0, 1.0, 8),
        )
        .unwrap_err();
        assert!(matches!(err, TokenError::InvalidScaleParameters { .. }));

        let err = generate_tokens(
            &ColorPaletteOptions::new("nope", 9, Accessibility::Aa),
            &TypographyScaleOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TokenError::InvalidColor { .. }));
    }

    #[test]
    fn test_name_functions_are_injective_per_category() {
        assert_eq!(color_token_name("brand", 0), "color-brand-100");
        assert_eq!(color_token_name("brand", 10), "color-brand-1100");
        assert_eq!(font_size_token_name(3), "font-size-3");
    }
}
