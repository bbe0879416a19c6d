//! Colour palette generation.
//!
//! Shades are produced in OKLCH: hue and chroma come from the base colour,
//! lightness is spread from `lightest` to `darkest` with the base colour pinned
//! at an anchor index. Each candidate lightness is gamut mapped into sRGB and
//! quantised, and the first anchor whose rendered shades are distinct, ordered,
//! and accessible wins. Anchors are tried outward from the midpoint.

use palette::Oklch;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::types::{contrast_ratio, Accessibility, Colour};

/// Largest palette the generator will produce.
pub const MAX_SHADES: usize = 32;

/// Minimum OKLCH lightness separation between adjacent shades.
const MIN_LIGHTNESS_STEP: f32 = 0.01;

/// Bisection rounds when searching for an accessible lightness.
const SEARCH_ITERATIONS: usize = 32;

/// OKLCH lightness bounds for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightnessRange {
    /// Lightness of shade 0.
    pub lightest: f32,
    /// Lightness of the last shade.
    pub darkest: f32,
}

impl Default for LightnessRange {
    fn default() -> Self {
        Self {
            lightest: 0.97,
            darkest: 0.25,
        }
    }
}

impl LightnessRange {
    fn clamp(self, l: f32) -> f32 {
        l.clamp(self.darkest, self.lightest)
    }
}

/// Options for [`generate_color_palette`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPaletteOptions {
    /// Base colour in any notation [`Colour::parse`] accepts.
    pub base_color: String,

    /// Number of shades to produce.
    pub shades: usize,

    /// Contrast tier at least one shade must meet.
    pub accessibility: Accessibility,

    /// Palette identity used in token names. Defaults to the base hex digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub lightness: LightnessRange,
}

impl Default for ColorPaletteOptions {
    fn default() -> Self {
        Self {
            base_color: "#3b82f6".to_string(),
            shades: 9,
            accessibility: Accessibility::Aa,
            name: None,
            lightness: LightnessRange::default(),
        }
    }
}

impl ColorPaletteOptions {
    /// Options for `shades` shades of `base_color` at the given tier.
    pub fn new(base_color: impl Into<String>, shades: usize, accessibility: Accessibility) -> Self {
        Self {
            base_color: base_color.into(),
            shades,
            accessibility,
            ..Default::default()
        }
    }

    /// Set the palette name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the lightness range.
    pub fn with_lightness(mut self, lightest: f32, darkest: f32) -> Self {
        self.lightness = LightnessRange { lightest, darkest };
        self
    }
}

/// One colour in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorShade {
    pub index: usize,
    pub color: Colour,
    pub contrast_with_white: f64,
    pub contrast_with_black: f64,
}

impl ColorShade {
    fn new(index: usize, color: Colour) -> Self {
        Self {
            index,
            color,
            contrast_with_white: contrast_ratio(color, Colour::WHITE),
            contrast_with_black: contrast_ratio(color, Colour::BLACK),
        }
    }

    /// Whether white or black text on this shade meets `level`.
    pub fn meets(&self, level: Accessibility) -> bool {
        self.best_contrast() >= level.min_ratio()
    }

    /// The higher of the two text contrasts.
    pub fn best_contrast(&self) -> f64 {
        self.contrast_with_white.max(self.contrast_with_black)
    }

    /// The text colour (white or black) with the higher contrast.
    pub fn text_colour(&self) -> Colour {
        if self.contrast_with_white >= self.contrast_with_black {
            Colour::WHITE
        } else {
            Colour::BLACK
        }
    }
}

/// An ordered set of shades, lightest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorPalette {
    name: String,
    base_color: Colour,
    accessibility: Accessibility,
    anchor: usize,
    shades: Vec<ColorShade>,
}

impl ColorPalette {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_color(&self) -> Colour {
        self.base_color
    }

    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    /// Index of the shade that carries the base colour.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn anchor_shade(&self) -> &ColorShade {
        &self.shades[self.anchor]
    }

    pub fn shades(&self) -> &[ColorShade] {
        &self.shades
    }

    pub fn get(&self, index: usize) -> Option<&ColorShade> {
        self.shades.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorShade> {
        self.shades.iter()
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Always false for a generated palette.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

/// Generate a palette of shades from a base colour.
///
/// Fails with `InvalidColor` if the base colour does not parse,
/// `InvalidPaletteOptions` for a bad shade count, name or lightness range (or a
/// range too narrow to hold `shades` distinct steps), and
/// `AccessibilityUnsatisfiable` when no distribution reaches the requested tier.
pub fn generate_color_palette(options: &ColorPaletteOptions) -> Result<ColorPalette> {
    let base = Colour::parse(&options.base_color)?;
    check_options(options)?;

    let name = palette_name(options, base);
    let range = options.lightness;
    let level = options.accessibility;
    let base_lch = base.to_oklch();
    let anchor_l = range.clamp(base_lch.l);

    let (anchor, colours) = if options.shades == 1 {
        let l = nearest_accessible_lightness(base_lch, anchor_l, range, level)
            .ok_or_else(|| unsatisfiable(base, options))?;
        (0, vec![render(base_lch, l)])
    } else {
        let mut well_formed = false;
        let found = anchor_order(options.shades).find_map(|k| {
            let lightness = distribute(options.shades, k, anchor_l, range);
            match accept_candidate(base_lch, &lightness, level) {
                Ok(colours) => Some((k, colours)),
                Err(rejection) => {
                    well_formed |= rejection == Rejection::Inaccessible;
                    tracing::debug!(palette = %name, anchor = k, ?rejection, "rejected anchor");
                    None
                }
            }
        });
        match found {
            Some(found) => found,
            None if !well_formed
                && nearest_accessible_lightness(base_lch, anchor_l, range, level).is_some() =>
            {
                return Err(too_narrow(options));
            }
            None => return Err(unsatisfiable(base, options)),
        }
    };

    tracing::debug!(palette = %name, shades = colours.len(), anchor, "generated palette");

    Ok(ColorPalette {
        name,
        base_color: base,
        accessibility: level,
        anchor,
        shades: colours
            .into_iter()
            .enumerate()
            .map(|(i, c)| ColorShade::new(i, c))
            .collect(),
    })
}

fn check_options(options: &ColorPaletteOptions) -> Result<()> {
    if options.shades == 0 || options.shades > MAX_SHADES {
        return Err(TokenError::InvalidPaletteOptions {
            message: format!("shade count must be 1-{}, got {}", MAX_SHADES, options.shades),
            help: None,
        });
    }

    let LightnessRange { lightest, darkest } = options.lightness;
    let ordered = lightest.is_finite() && darkest.is_finite() && darkest < lightest;
    if !ordered || darkest < 0.0 || lightest > 1.0 {
        return Err(TokenError::InvalidPaletteOptions {
            message: format!("invalid lightness range {}..{}", darkest, lightest),
            help: Some("Need 0 <= darkest < lightest <= 1".to_string()),
        });
    }

    if let Some(name) = &options.name {
        if !is_valid_name(name) {
            return Err(TokenError::InvalidPaletteOptions {
                message: format!("invalid palette name: {:?}", name),
                help: Some("Use lowercase letters, digits, '-' or '_'".to_string()),
            });
        }
    }

    Ok(())
}

pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

fn palette_name(options: &ColorPaletteOptions, base: Colour) -> String {
    match &options.name {
        Some(name) => name.clone(),
        None => base.to_string().trim_start_matches('#').to_string(),
    }
}

fn unsatisfiable(base: Colour, options: &ColorPaletteOptions) -> TokenError {
    TokenError::AccessibilityUnsatisfiable {
        message: format!(
            "no {}-shade distribution of {} reaches {} ({}:1)",
            options.shades,
            base,
            options.accessibility,
            options.accessibility.min_ratio()
        ),
        help: Some("Widen the lightness range or add shades".to_string()),
    }
}

fn too_narrow(options: &ColorPaletteOptions) -> TokenError {
    let LightnessRange { lightest, darkest } = options.lightness;
    TokenError::InvalidPaletteOptions {
        message: format!(
            "lightness range {}..{} too narrow for {} distinct shades",
            darkest, lightest, options.shades
        ),
        help: Some("Widen the lightness range or request fewer shades".to_string()),
    }
}

fn render(base: Oklch, l: f32) -> Colour {
    Colour::from_oklch(Oklch::new(l, base.chroma, base.hue))
}

/// Anchor indices ordered by distance from the midpoint, lower index first on ties.
fn anchor_order(n: usize) -> impl Iterator<Item = usize> {
    let mid = (n - 1) as f32 / 2.0;
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|a, b| {
        let da = (*a as f32 - mid).abs();
        let db = (*b as f32 - mid).abs();
        da.total_cmp(&db).then(a.cmp(b))
    });
    order.into_iter()
}

/// Lightness for each shade with the anchor lightness pinned at index `k`.
fn distribute(n: usize, k: usize, anchor_l: f32, range: LightnessRange) -> Vec<f32> {
    (0..n)
        .map(|i| {
            if i < k {
                lerp(range.lightest, anchor_l, i as f32 / k as f32)
            } else if i == k {
                anchor_l
            } else {
                lerp(anchor_l, range.darkest, (i - k) as f32 / (n - 1 - k) as f32)
            }
        })
        .collect()
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Why a candidate distribution was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// Adjacent lightness steps closer than `MIN_LIGHTNESS_STEP`.
    Crowded,
    /// Quantised shades not strictly decreasing in lightness.
    Unordered,
    /// Well-formed, but no shade meets the tier.
    Inaccessible,
}

fn accept_candidate(
    base: Oklch,
    lightness: &[f32],
    level: Accessibility,
) -> std::result::Result<Vec<Colour>, Rejection> {
    if lightness.windows(2).any(|w| w[0] - w[1] < MIN_LIGHTNESS_STEP) {
        return Err(Rejection::Crowded);
    }

    let colours: Vec<Colour> = lightness.iter().map(|&l| render(base, l)).collect();

    // Strictly decreasing lightness also rules out duplicate colours.
    let ordered = colours
        .windows(2)
        .all(|w| w[0].lightness() > w[1].lightness());
    if !ordered {
        return Err(Rejection::Unordered);
    }

    if !colours.iter().any(|&c| level.is_met_by(c)) {
        return Err(Rejection::Inaccessible);
    }

    Ok(colours)
}

/// The lightness closest to `start` whose rendering meets `level`.
///
/// Searches towards white (for dark text) and towards black (for light text)
/// inside `range`; the closer result wins, lighter on a tie.
fn nearest_accessible_lightness(
    base: Oklch,
    start: f32,
    range: LightnessRange,
    level: Accessibility,
) -> Option<f32> {
    if level.is_met_by(render(base, start)) {
        return Some(start);
    }

    let min = level.min_ratio();
    let on_black = |l: f32| contrast_ratio(render(base, l), Colour::BLACK) >= min;
    let on_white = |l: f32| contrast_ratio(render(base, l), Colour::WHITE) >= min;

    let lighter = on_black(range.lightest).then(|| {
        let (mut lo, mut hi) = (start, range.lightest);
        for _ in 0..SEARCH_ITERATIONS {
            let mid = (lo + hi) * 0.5;
            if on_black(mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        hi
    });

    let darker = on_white(range.darkest).then(|| {
        let (mut lo, mut hi) = (range.darkest, start);
        for _ in 0..SEARCH_ITERATIONS {
            let mid = (lo + hi) * 0.5;
            if on_white(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    });

    match (lighter, darker) {
        (Some(up), Some(down)) => Some(if up - start <= start - down { up } else { down }),
        (up, down) => up.or(down),
    }
}
