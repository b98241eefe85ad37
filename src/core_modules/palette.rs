// THEORY:
// The `palette` module holds the reference colors a sample is matched against.
// A palette is an ordered, immutable list of named entries. Order matters only
// for tie-breaking: when two entries are equally close to a sample the classifier
// keeps the one that appears first.
//
// Two built-in tables are provided:
// - `Basic`: the named web colors ("Red", "Dark Sea Green", ...) with no category.
// - `Shades`: a larger table where every entry belongs to a broad category
//   ("red", "cool gray", ...) so results can be reported as "crimson (red)".
//
// A palette is a plain value. Callers that want one instance for the whole process
// use `Palette::shared`, which builds each built-in table at most once behind a
// `OnceLock` and hands out `Arc` clones. Concurrent first calls race only to read
// the same cell; exactly one construction wins.

use crate::core_modules::pixel::pixel::{Channel, Pixel};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// One named reference color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub name: String,
    pub category: Option<String>,
    pub color: Pixel,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, red: Channel, green: Channel, blue: Channel) -> Self {
        Self {
            name: name.into(),
            category: None,
            color: Pixel::rgb(red, green, blue),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// `"name (category)"`, or just the name when uncategorised.
    pub fn display_name(&self) -> String {
        labelled(&self.name, self.category.as_deref())
    }
}

pub(crate) fn labelled(name: &str, category: Option<&str>) -> String {
    match category {
        Some(category) => format!("{name} ({category})"),
        None => name.to_owned(),
    }
}

/// Selects one of the built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Basic,
    Shades,
}

impl PaletteKind {
    pub fn build(self) -> Palette {
        match self {
            PaletteKind::Basic => Palette::basic(),
            PaletteKind::Shades => Palette::shades(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::Basic => "basic",
            PaletteKind::Shades => "shades",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "basic" => Ok(PaletteKind::Basic),
            "shades" => Ok(PaletteKind::Shades),
            other => Err(format!("unknown palette `{other}` (expected `basic` or `shades`)")),
        }
    }
}

static SHARED_BASIC: OnceLock<Arc<Palette>> = OnceLock::new();
static SHARED_SHADES: OnceLock<Arc<Palette>> = OnceLock::new();

/// An ordered, read-only collection of reference colors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The named web colors.
    pub fn basic() -> Self {
        let palette: Palette = BASIC_COLORS
            .iter()
            .map(|&(name, red, green, blue)| PaletteEntry::new(name, red, green, blue))
            .collect();
        info!(entries = palette.len(), "built basic palette");
        palette
    }

    /// The categorised shade table.
    pub fn shades() -> Self {
        let palette: Palette = SHADE_COLORS
            .iter()
            .map(|&(category, name, red, green, blue)| {
                PaletteEntry::new(name, red, green, blue).with_category(category)
            })
            .collect();
        info!(entries = palette.len(), "built shades palette");
        palette
    }

    /// The process-wide instance of a built-in palette, built on first use.
    pub fn shared(kind: PaletteKind) -> Arc<Palette> {
        let cell = match kind {
            PaletteKind::Basic => &SHARED_BASIC,
            PaletteKind::Shades => &SHARED_SHADES,
        };
        Arc::clone(cell.get_or_init(|| Arc::new(kind.build())))
    }

    /// True once the palette holds something to match against.
    pub fn is_initialized(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }
}

impl FromIterator<PaletteEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[rustfmt::skip]
const BASIC_COLORS: &[(&str, Channel, Channel, Channel)] = &[
    ("Aqua", 0x00, 0xFF, 0xFF),
    ("Aquamarine", 0x7F, 0xFF, 0xD4),
    ("Beige", 0xF5, 0xF5, 0xDC),
    ("Black", 0x00, 0x00, 0x00),
    ("Blue", 0x00, 0x00, 0xFF),
    ("Brown", 0xA5, 0x2A, 0x2A),
    ("Cyan", 0x00, 0xFF, 0xFF),
    ("Dark Blue", 0x00, 0x00, 0x8B),
    ("Dark Cyan", 0x00, 0x8B, 0x8B),
    ("Dark Gray", 0xA9, 0xA9, 0xA9),
    ("Dark Green", 0x00, 0x64, 0x00),
    ("Dark Orange", 0xFF, 0x8C, 0x00),
    ("Dark Orchid", 0x99, 0x32, 0xCC),
    ("Dark Red", 0x8B, 0x00, 0x00),
    ("Dark Sea Green", 0x8F, 0xBC, 0x8F),
    ("Deep Sky Blue", 0x00, 0xBF, 0xFF),
    ("Dim Gray", 0x69, 0x69, 0x69),
    ("Fuchsia", 0xFF, 0x00, 0xFF),
    ("Gold", 0xFF, 0xD7, 0x00),
    ("Gray", 0x80, 0x80, 0x80),
    ("Green", 0x00, 0x80, 0x00),
    ("Hot Pink", 0xFF, 0x69, 0xB4),
    ("Indian Red", 0xCD, 0x5C, 0x5C),
    ("Indigo", 0x4B, 0x00, 0x82),
    ("Ivory", 0xFF, 0xFF, 0xF0),
    ("Khaki", 0xF0, 0xE6, 0x8C),
    ("Light Blue", 0xAD, 0xD8, 0xE6),
    ("Light Coral", 0xF0, 0x80, 0x80),
    ("Light Cyan", 0xE0, 0xFF, 0xFF),
    ("Light Gray", 0xD3, 0xD3, 0xD3),
    ("Light Green", 0x90, 0xEE, 0x90),
    ("Light Pink", 0xFF, 0xB6, 0xC1),
    ("Lime", 0x00, 0xFF, 0x00),
    ("Magenta", 0xFF, 0x00, 0xFF),
    ("Navy", 0x00, 0x00, 0x80),
    ("Olive", 0x80, 0x80, 0x00),
    ("Orange", 0xFF, 0xA5, 0x00),
    ("Orange Red", 0xFF, 0x45, 0x00),
    ("Orchid", 0xDA, 0x70, 0xD6),
    ("Pink", 0xFF, 0xC0, 0xCB),
    ("Plum", 0xDD, 0xA0, 0xDD),
    ("Purple", 0x80, 0x00, 0x80),
    ("Red", 0xFF, 0x00, 0x00),
    ("Royal Blue", 0x41, 0x69, 0xE1),
    ("Sky Blue", 0x87, 0xCE, 0xEB),
    ("Tan", 0xD2, 0xB4, 0x8C),
    ("Teal", 0x00, 0x80, 0x80),
    ("Turquoise", 0x40, 0xE0, 0xD0),
    ("Violet", 0xEE, 0x82, 0xEE),
    ("White", 0xFF, 0xFF, 0xFF),
    ("Yellow", 0xFF, 0xFF, 0x00),
];

#[rustfmt::skip]
const SHADE_COLORS: &[(&str, &str, Channel, Channel, Channel)] = &[
    ("white", "white", 0xFF, 0xFF, 0xFF),
    ("white", "white smoke", 0xF5, 0xF5, 0xF5),
    ("white", "ghost white", 0xF8, 0xF8, 0xFF),
    ("white", "baby powder", 0xFE, 0xFE, 0xFA),
    ("white", "snow", 0xFF, 0xFA, 0xFA),
    ("white", "ivory", 0xFF, 0xFF, 0xF0),
    ("white", "floral white", 0xFF, 0xFA, 0xF0),
    ("white", "seashell", 0xFF, 0xF5, 0xEE),
    ("white", "cornsilk", 0xFF, 0xF8, 0xDC),
    ("white", "old lace", 0xFD, 0xF5, 0xE6),
    ("white", "cream", 0xFF, 0xFD, 0xD0),
    ("white", "beige", 0xF5, 0xF5, 0xDC),
    ("white", "linen", 0xFA, 0xF0, 0xE6),
    ("white", "antique white", 0xFA, 0xEB, 0xD7),
    ("white", "champagne", 0xF7, 0xE7, 0xC3),
    ("white", "eggshell", 0xF0, 0xEA, 0xD6),
    ("white", "dutch white", 0xEF, 0xDF, 0xBB),
    ("white", "bone", 0xE3, 0xDA, 0xC9),
    ("white", "vanilla", 0xF3, 0xE5, 0xAB),
    ("white", "flax", 0xEE, 0xDC, 0x82),
    ("white", "navajo white", 0xFF, 0xDE, 0xAD),
    ("white", "ecru", 0xC2, 0xB2, 0x80),
    ("black", "black", 0x00, 0x00, 0x00),
    ("black", "midnight blue", 0x19, 0x19, 0x70),
    ("black", "ebony", 0x55, 0x5D, 0x50),
    ("black", "taupe", 0x48, 0x3C, 0x32),
    ("black", "charcoal", 0x36, 0x45, 0x4F),
    ("black", "outer space", 0x41, 0x4A, 0x4C),
    ("black", "cafe noir", 0x4B, 0x36, 0x21),
    ("black", "black bean", 0x3D, 0x0C, 0x02),
    ("black", "black olive", 0x3B, 0x3C, 0x36),
    ("black", "onyx", 0x35, 0x38, 0x39),
    ("black", "phthalo green", 0x12, 0x35, 0x24),
    ("black", "jet", 0x34, 0x34, 0x34),
    ("black", "black leather jacket", 0x25, 0x35, 0x29),
    ("black", "charleston green", 0x23, 0x2B, 0x2B),
    ("black", "eerie black", 0x1B, 0x1B, 0x1B),
    ("black", "licorice", 0x1A, 0x11, 0x10),
    ("gray", "dark slate gray", 0x2F, 0x4F, 0x4F),
    ("gray", "light slate gray", 0x77, 0x88, 0x99),
    ("achromatic gray", "gainsboro", 0xDC, 0xDC, 0xDC),
    ("achromatic gray", "light gray", 0xD3, 0xD3, 0xD3),
    ("achromatic gray", "silver", 0xC0, 0xC0, 0xC0),
    ("achromatic gray", "medium gray", 0xBE, 0xBE, 0xBE),
    ("achromatic gray", "dark medium gray", 0xA9, 0xA9, 0xA9),
    ("achromatic gray", "spanish gray", 0x98, 0x98, 0x98),
    ("achromatic gray", "gray", 0x80, 0x80, 0x80),
    ("achromatic gray", "dim gray", 0x69, 0x69, 0x69),
    ("achromatic gray", "davy's gray", 0x55, 0x55, 0x55),
    ("off gray", "platinum", 0xB2, 0xBE, 0xB5),
    ("off gray", "battleship gray", 0x84, 0x84, 0x82),
    ("cool gray", "cool gray", 0x8C, 0x92, 0xAC),
    ("cool gray", "cadet gray", 0x91, 0xA3, 0xB0),
    ("cool gray", "blue-gray", 0x66, 0x99, 0xCC),
    ("cool gray", "glaucos", 0x60, 0x82, 0xB6),
    ("cool gray", "slate gray", 0x70, 0x80, 0x90),
    ("warm gray", "puce", 0x72, 0x2F, 0x37),
    ("warm gray", "rose quartz", 0xAA, 0x98, 0xA9),
    ("warm gray", "cinereous", 0x98, 0x81, 0x7B),
    ("warm gray", "rocket metallic", 0x8A, 0x7F, 0x8D),
    ("pink", "coral", 0xFF, 0x7F, 0x50),
    ("pink", "dark magenta", 0x8B, 0x00, 0x8B),
    ("pink", "dark orchid", 0x99, 0x32, 0xCC),
    ("pink", "dark salmon", 0xE9, 0x96, 0x7A),
    ("pink", "deep pink", 0xFF, 0x14, 0x93),
    ("pink", "fuchsia", 0xFF, 0x00, 0xFF),
    ("pink", "light coral", 0xF0, 0x80, 0x80),
    ("pink", "light pink", 0xFF, 0xB6, 0xC1),
    ("pink", "light salmon", 0xFF, 0xA0, 0x7A),
    ("pink", "medium orchid", 0xBA, 0x55, 0xD3),
    ("pink", "orchid", 0xDA, 0x70, 0xD6),
    ("pink", "peach puff", 0xFF, 0xDA, 0xB9),
    ("pink", "salmon", 0xFA, 0x80, 0x72),
    ("pink", "hot magenta", 0xFF, 0x1D, 0xCE),
    ("pink", "pink", 0xFF, 0xC0, 0xCB),
    ("pink", "hot pink", 0xFF, 0x69, 0xB4),
    ("pink", "deep pink", 0xFF, 0x69, 0xB4),
    ("pink", "champagne pink", 0xF1, 0xDD, 0xCF),
    ("pink", "pink lace", 0xFF, 0xDD, 0xF4),
    ("pink", "piggy pink", 0xFD, 0xDD, 0xE6),
    ("pink", "pale pink", 0xF9, 0xCC, 0xCA),
    ("pink", "baby pink", 0xF3, 0xC2, 0xC2),
    ("pink", "spanish pink", 0xF7, 0xBF, 0xBE),
    ("pink", "cameo pink", 0xEF, 0xBB, 0xCC),
    ("pink", "orchid pink", 0xF2, 0xBD, 0xCD),
    ("pink", "cherry blossom pink", 0xFF, 0xB7, 0xC5),
    ("pink", "light hot pink", 0xFF, 0xB3, 0xDE),
    ("pink", "lavendar pink", 0xFB, 0xAE, 0xD2),
    ("pink", "cotton candy", 0xFF, 0xBC, 0xD9),
    ("pink", "carnation pink", 0xFF, 0xA6, 0xC9),
    ("pink", "baker-miller pink", 0xFF, 0x91, 0xAF),
    ("pink", "tickle me pink", 0xFC, 0x89, 0xAC),
    ("pink", "amaranth pink", 0xF1, 0x9C, 0xBB),
    ("pink", "charm pink", 0xE6, 0x8F, 0xAC),
    ("pink", "china pink", 0xDE, 0x6F, 0xA1),
    ("pink", "tango pink", 0xE4, 0x71, 0x7A),
    ("pink", "congo pink", 0xF8, 0x83, 0x79),
    ("pink", "pastel pink", 0xDE, 0xA5, 0xA4),
    ("pink", "new york pink", 0xD7, 0x83, 0x7F),
    ("pink", "solid pink", 0x89, 0x38, 0x43),
    ("pink", "silver pink", 0xC4, 0xAE, 0xAD),
    ("pink", "queen pink", 0xE8, 0xCC, 0xD7),
    ("pink", "pink lavender", 0xD8, 0xB2, 0xD1),
    ("pink", "mountbatten pink", 0x99, 0x7A, 0x8D),
    ("pink", "pink (pantone)", 0xD7, 0x48, 0x94),
    ("pink", "mexican pink", 0xE4, 0x00, 0x7C),
    ("pink", "barbie pink", 0xE0, 0x21, 0x8A),
    ("pink", "fandango pink", 0xDE, 0x52, 0x85),
    ("pink", "paradise pink", 0xE6, 0x3E, 0x62),
    ("pink", "brink pink", 0xFB, 0x60, 0x7F),
    ("pink", "french pink", 0xFD, 0x6C, 0x9E),
    ("pink", "bright pink", 0xFF, 0x00, 0x7F),
    ("pink", "persian pink", 0xF7, 0x7F, 0xBE),
    ("pink", "light deep pink", 0xFF, 0x5C, 0xCD),
    ("pink", "ultra pink", 0xFF, 0x6F, 0xFF),
    ("pink", "shocking pink", 0xFC, 0x0F, 0xC0),
    ("pink", "super pink", 0xCF, 0x6B, 0xA9),
    ("pink", "steel pink", 0xCC, 0x33, 0xCC),
    ("red", "indian red", 0xCD, 0x5C, 0x5C),
    ("red", "indigo", 0x4B, 0x00, 0x82),
    ("red", "misty rose", 0xFF, 0xE4, 0xE1),
    ("red", "orange red", 0xFF, 0x45, 0x00),
    ("red", "red", 0xFF, 0x00, 0x00),
    ("red", "imperial red", 0xED, 0x29, 0x39),
    ("red", "spanish red", 0xE6, 0x00, 0x26),
    ("red", "desire", 0xEA, 0x3C, 0x53),
    ("red", "ruby", 0xE6, 0x20, 0x20),
    ("red", "crimson", 0xDC, 0x14, 0x3C),
    ("red", "rusty red", 0xDA, 0x2C, 0x43),
    ("red", "cardinal red", 0xC4, 0x1E, 0x3A),
    ("red", "cornell red", 0xB3, 0x1B, 0x1B),
    ("red", "fire brick", 0xB2, 0x22, 0x22),
    ("red", "redwood", 0xA4, 0x5A, 0x52),
    ("red", "OU crimson red", 0x99, 0x00, 0x00),
    ("red", "dark red", 0x8B, 0x00, 0x00),
    ("red", "maroon", 0x80, 0x00, 0x00),
    ("red", "barn red", 0x7C, 0x0A, 0x02),
    ("brown", "wheat", 0xF5, 0xDE, 0xB3),
    ("brown", "bisque", 0xFF, 0xE4, 0xC4),
    ("brown", "blanched almond", 0xFF, 0xEB, 0xCD),
    ("brown", "brown", 0xA5, 0x2A, 0x2A),
    ("brown", "burly wood", 0xDE, 0xB8, 0x87),
    ("brown", "chocolate", 0xD2, 0x69, 0x1E),
    ("brown", "dark khaki", 0xBD, 0xB7, 0x6B),
    ("brown", "khaki", 0xF0, 0xE6, 0x8C),
    ("brown", "moccasin", 0xFF, 0xE4, 0xB5),
    ("brown", "olive drab", 0x6B, 0x8E, 0x23),
    ("brown", "saddle brown", 0x8B, 0x45, 0x13),
    ("brown", "sienna", 0xA0, 0x52, 0x2D),
    ("brown", "brown", 0x96, 0x4B, 0x00),
    ("brown", "beaver", 0x9F, 0x81, 0x70),
    ("brown", "beige", 0xF5, 0xF5, 0xDC),
    ("brown", "buff", 0xF0, 0xDC, 0x82),
    ("brown", "burnt umber", 0x8A, 0x33, 0x24),
    ("brown", "chestnut", 0x95, 0x45, 0x35),
    ("brown", "desert sand", 0xED, 0xC9, 0xAF),
    ("brown", "khaki", 0xC3, 0xB0, 0x91),
    ("brown", "kobicha", 0x6B, 0x44, 0x23),
    ("brown", "peru", 0xCD, 0x85, 0x3F),
    ("brown", "raw umber", 0x82, 0x66, 0x44),
    ("brown", "rosy brown", 0xBC, 0x8F, 0x8F),
    ("brown", "russet", 0x80, 0x46, 0x1B),
    ("brown", "sandy brown", 0xF4, 0xA4, 0x60),
    ("brown", "smokey topaz", 0x83, 0x2A, 0x0D),
    ("brown", "tan", 0xD2, 0xB4, 0x8C),
    ("brown", "taupe", 0x48, 0x3C, 0x32),
    ("brown", "wood brown", 0xC1, 0x9A, 0x6B),
    ("orange", "traditional orange", 0xFF, 0x7F, 0x00),
    ("orange", "orange", 0xFF, 0xA5, 0x00),
    ("orange", "dark orange", 0xFF, 0x8C, 0x00),
    ("orange", "papaya whip", 0xFF, 0xEF, 0xD5),
    ("orange", "peach", 0xFF, 0xE5, 0xB4),
    ("orange", "apricot", 0xFB, 0xCE, 0xB1),
    ("orange", "melon", 0xFD, 0xBC, 0xB4),
    ("orange", "atomic tangerine", 0xFF, 0x99, 0x66),
    ("orange", "tea rose", 0xF8, 0x83, 0x79),
    ("orange", "carrot orange", 0xED, 0x91, 0x21),
    ("orange", "orange peel", 0xFF, 0x9F, 0x00),
    ("orange", "princeton orange", 0xF5, 0x80, 0x25),
    ("orange", "spanish orange", 0xE8, 0x61, 0x00),
    ("orange", "pumpkin", 0xFF, 0x75, 0x18),
    ("orange", "giants orange", 0xFE, 0x5A, 0x1D),
    ("orange", "vermillion", 0xE3, 0x42, 0x34),
    ("orange", "tomato", 0xFF, 0x63, 0x47),
    ("orange", "bittersweet", 0xFE, 0x6F, 0x5E),
    ("orange", "persimmon", 0xEC, 0x58, 0x00),
    ("orange", "persian orange", 0xD9, 0x90, 0x58),
    ("orange", "alloy orange", 0xC4, 0x63, 0x10),
    ("orange", "burnt orange", 0xCC, 0x55, 0x00),
    ("orange", "bittersweet shimmer", 0xBF, 0x4F, 0x51),
    ("yellow", "dark golden rod", 0xB8, 0x86, 0x0B),
    ("yellow", "lemon chiffon", 0xFF, 0xFA, 0xCD),
    ("yellow", "light golden rod yellow", 0xFA, 0xFA, 0xD2),
    ("yellow", "light yellow", 0xFF, 0xFF, 0xE0),
    ("yellow", "pale golden rod", 0xEE, 0xE8, 0xAA),
    ("yellow", "yellow", 0xFF, 0xFF, 0x00),
    ("yellow", "light yellow", 0xFF, 0xFF, 0xED),
    ("yellow", "cream", 0xFF, 0xFF, 0xCC),
    ("yellow", "unmellow yellow", 0xFF, 0xFF, 0x66),
    ("yellow", "lemon", 0xFF, 0xAC, 0x0D),
    ("yellow", "mellow yellow", 0xF8, 0xDE, 0x7E),
    ("yellow", "royal yellow", 0xFA, 0xDA, 0x5E),
    ("yellow", "gold", 0xFF, 0xD7, 0x00),
    ("yellow", "cyber yellow", 0xFF, 0xD3, 0x00),
    ("yellow", "safety yellow", 0xED, 0xD2, 0x02),
    ("yellow", "goldenrod", 0xDA, 0xA5, 0x20),
    ("yellow", "olive", 0x80, 0x80, 0x00),
    ("green", "mint cream", 0xF5, 0xFF, 0xFA),
    ("green", "chartreuse", 0x7F, 0xFF, 0x00),
    ("green", "dark olive green", 0x55, 0x6B, 0x2F),
    ("green", "dark sea green", 0x8F, 0xBC, 0x8F),
    ("green", "dark turquoise", 0x00, 0xCE, 0xD1),
    ("green", "honey dew", 0xF0, 0xFF, 0xF0),
    ("green", "lawn green", 0x7C, 0xFC, 0x00),
    ("green", "lime green", 0x32, 0xCD, 0x32),
    ("green", "lime", 0x00, 0xFF, 0x00),
    ("green", "medium sea green", 0x3C, 0xB3, 0x71),
    ("green", "medium spring green", 0x00, 0xFA, 0x9A),
    ("green", "medium turquoise", 0x48, 0xD1, 0xCC),
    ("green", "pale turquoise", 0xAF, 0xEE, 0xEE),
    ("green", "spring green", 0x00, 0xFF, 0x7F),
    ("green", "yellow green", 0x9A, 0xCD, 0x32),
    ("green", "artichoke", 0x8F, 0x97, 0x79),
    ("green", "asparagus", 0x87, 0xA9, 0x6B),
    ("green", "avocado", 0x56, 0x82, 0x03),
    ("green", "fern green", 0x71, 0xBC, 0x78),
    ("green", "forest green", 0x22, 0x8B, 0x22),
    ("green", "hooker's green", 0x49, 0x79, 0x6B),
    ("green", "jungle green", 0x29, 0xAB, 0x87),
    ("green", "laurel green", 0xA9, 0xBA, 0x9D),
    ("green", "light green", 0x90, 0xEE, 0x90),
    ("green", "mantis", 0x74, 0xC3, 0x65),
    ("green", "moss green", 0x8A, 0x9A, 0x58),
    ("green", "myrtle green", 0x31, 0x78, 0x73),
    ("green", "mint green", 0x98, 0xFB, 0x98),
    ("green", "pine green", 0x01, 0x79, 0x6F),
    ("green", "shamrock green", 0x00, 0x9E, 0x60),
    ("green", "teal", 0x00, 0x80, 0x80),
    ("green", "dark green", 0x00, 0x64, 0x00),
    ("green", "bright green", 0x66, 0xFF, 0x00),
    ("green", "brunswick green", 0x1B, 0x4D, 0x3E),
    ("green", "cal poly pomona green", 0x1E, 0x4D, 0x2B),
    ("green", "dark pastel green", 0x03, 0xC0, 0x3C),
    ("green", "dartmouth green", 0x00, 0x70, 0x3C),
    ("green", "emerald", 0x50, 0xC8, 0x78),
    ("green", "feldgrau", 0x4D, 0x5D, 0x53),
    ("green", "go green", 0x00, 0xAB, 0x66),
    ("green", "yellow-green", 0xAD, 0xFF, 0x2F),
    ("green", "harlequin", 0x3F, 0xFF, 0x00),
    ("green", "hunter green", 0x35, 0x5E, 0x3B),
    ("green", "india green", 0x13, 0x88, 0x08),
    ("green", "islamic green", 0x00, 0x99, 0x00),
    ("green", "jade", 0x00, 0xA8, 0x6B),
    ("green", "kelly green", 0x4C, 0xBB, 0x17),
    ("green", "malachite", 0xBD, 0xA5, 0x01),
    ("green", "msu green", 0x18, 0x45, 0x3B),
    ("green", "north texas green", 0x00, 0x27, 0x79),
    ("green", "office green", 0x00, 0x80, 0x00),
    ("green", "pakistan green", 0x00, 0x66, 0x00),
    ("green", "paris green", 0x50, 0xC8, 0x78),
    ("green", "persian green", 0x00, 0xA6, 0x93),
    ("green", "rifle green", 0x44, 0x4C, 0x38),
    ("green", "russian green", 0x67, 0x92, 0x67),
    ("green", "sacramento state green", 0x00, 0x56, 0x3F),
    ("green", "sea green", 0x2E, 0x8B, 0x57),
    ("green", "spanish green", 0x00, 0x91, 0x50),
    ("cyan", "cyan", 0x00, 0xFF, 0xFF),
    ("cyan", "light cyan", 0xE0, 0xFF, 0xFF),
    ("cyan", "aero blue", 0xC9, 0xFF, 0xE5),
    ("cyan", "celeste", 0xB2, 0xFF, 0xFF),
    ("cyan", "electric blue", 0x7D, 0xF9, 0xFF),
    ("cyan", "turquoise", 0x40, 0xE0, 0xD0),
    ("cyan", "robin egg blue", 0x00, 0xCC, 0xCC),
    ("cyan", "light sea green", 0x20, 0xB2, 0xAA),
    ("cyan", "blue-green", 0x0D, 0x98, 0xBA),
    ("cyan", "keppel", 0x3A, 0xB0, 0x9E),
    ("cyan", "cerulean", 0x00, 0x7B, 0xA7),
    ("cyan", "dark cyan", 0x00, 0x8B, 0x8B),
    ("cyan", "midnight green", 0x00, 0x49, 0x53),
    ("cyan", "charleston green", 0x23, 0x2B, 0x2B),
    ("cyan", "aquamarine", 0x7F, 0xFF, 0xD4),
    ("cyan", "medium aqua marine", 0x66, 0xCD, 0xAA),
    ("blue", "alice blue", 0xF0, 0xF8, 0xFF),
    ("blue", "azure", 0xF0, 0xFF, 0xFF),
    ("blue", "blue violet", 0x8A, 0x2B, 0xE2),
    ("blue", "cadet blue", 0x5F, 0x9E, 0xA0),
    ("blue", "cornflower blue", 0x64, 0x95, 0xED),
    ("blue", "dark slate blue", 0x48, 0x3D, 0x8B),
    ("blue", "deep sky blue", 0x00, 0xBF, 0xFF),
    ("blue", "dodger blue", 0x1E, 0x90, 0xFF),
    ("blue", "light sky blue", 0x87, 0xCE, 0xFA),
    ("blue", "light steel blue", 0xB0, 0xC4, 0xDE),
    ("blue", "medium slate blue", 0x7B, 0x68, 0xEE),
    ("blue", "royal blue", 0x41, 0x69, 0xE1),
    ("blue", "sky blue", 0x87, 0xCE, 0xEB),
    ("blue", "slate blue", 0x6A, 0x5A, 0xCD),
    ("blue", "steel blue", 0x46, 0x82, 0xB4),
    ("blue", "blue", 0x00, 0x00, 0xFF),
    ("blue", "periwinkle", 0xCC, 0xCC, 0xFF),
    ("blue", "powder blue", 0xB0, 0xE0, 0xE6),
    ("blue", "light blue", 0xAD, 0xD8, 0xE6),
    ("blue", "baby blue", 0x89, 0xCF, 0xF0),
    ("blue", "crayola blue", 0x1F, 0x75, 0xFE),
    ("blue", "medium blue", 0x00, 0x00, 0xCD),
    ("blue", "spanish blue", 0x00, 0x70, 0xBB),
    ("blue", "liberty", 0x54, 0x5A, 0xA7),
    ("blue", "egyption blue", 0x10, 0x34, 0xA6),
    ("blue", "dark blue", 0x00, 0x00, 0x8B),
    ("blue", "electric ultramarine", 0x3F, 0x00, 0xFF),
    ("blue", "resolution blue", 0x00, 0x23, 0x87),
    ("blue", "navy blue", 0x00, 0x00, 0x80),
    ("blue", "catalina blue", 0x06, 0x2A, 0x78),
    ("blue", "midnight blue", 0x19, 0x19, 0x70),
    ("blue", "independence", 0x4C, 0x51, 0x6D),
    ("blue", "space cadet", 0x1D, 0x29, 0x51),
    ("purple", "purple", 0x80, 0x00, 0x80),
    ("purple", "tyrian purple", 0x66, 0x02, 0x3C),
    ("purple", "royal purple", 0x78, 0x51, 0xA9),
    ("purple", "red-violet", 0xC7, 0x15, 0x85),
    ("purple", "thistle", 0xD8, 0xBF, 0xD8),
    ("purple", "mauve", 0xE0, 0xB0, 0xFF),
    ("purple", "orchid", 0xDA, 0x70, 0xD6),
    ("purple", "heliotrope", 0xDF, 0x73, 0xFF),
    ("purple", "phlox", 0xDF, 0x00, 0xFF),
    ("purple", "purple pizzazz", 0xFE, 0x4E, 0xDA),
    ("purple", "liseran purple", 0xDE, 0x6F, 0xA1),
    ("purple", "mulberry", 0xC5, 0x4B, 0x8C),
    ("purple", "pearly purple", 0xB7, 0x68, 0xA2),
    ("purple", "purpureus", 0x9A, 0x4E, 0xAE),
    ("purple", "ksu purple", 0x51, 0x28, 0x88),
    ("purple", "pomp and power", 0x86, 0x60, 0x8E),
    ("purple", "mardi gras", 0x88, 0x00, 0x95),
    ("purple", "eminence", 0x6C, 0x30, 0x82),
    ("purple", "byzantium", 0x70, 0x29, 0x63),
    ("purple", "pansy", 0x78, 0x18, 0x4A),
    ("purple", "dark violet", 0x94, 0x00, 0xD3),
    ("purple", "lavender blush", 0xFF, 0xF0, 0xF5),
    ("purple", "lavender", 0xE6, 0xE6, 0xFA),
    ("purple", "medium purple", 0x93, 0x70, 0xDB),
    ("purple", "medium violet red", 0xC7, 0x15, 0x85),
    ("purple", "pale violet red", 0xDB, 0x70, 0x93),
    ("purple", "plum", 0xDD, 0xA0, 0xDD),
    ("purple", "purple", 0x80, 0x00, 0x80),
    ("purple", "violet", 0xEE, 0x82, 0xEE),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn building_twice_is_deterministic() {
        assert_eq!(Palette::basic(), Palette::basic());
        assert_eq!(Palette::shades(), Palette::shades());
    }

    #[test]
    fn built_in_tables_have_expected_sizes() {
        assert_eq!(Palette::basic().len(), 51);
        assert_eq!(Palette::shades().len(), 344);
        assert!(Palette::basic().is_initialized());
        assert!(!Palette::empty().is_initialized());
        assert!(Palette::empty().is_empty());
    }

    #[test]
    fn basic_palette_has_primary_colors() {
        let palette = Palette::basic();
        let red = palette.iter().find(|entry| entry.name == "Red").unwrap();
        assert_eq!(red.color, Pixel::rgb(255, 0, 0));
        assert!(red.category.is_none());
        assert!(palette.iter().all(|entry| entry.category.is_none()));
    }

    #[test]
    fn every_shade_carries_a_category() {
        let palette = Palette::shades();
        assert!(palette.iter().all(|entry| entry.category.is_some()));
        let categories: HashSet<&str> = palette
            .iter()
            .filter_map(|entry| entry.category.as_deref())
            .collect();
        for expected in ["red", "green", "blue", "cool gray", "achromatic gray"] {
            assert!(categories.contains(expected), "missing category {expected}");
        }
    }

    #[test]
    fn shared_palettes_are_built_once() {
        let first = Palette::shared(PaletteKind::Basic);
        let second = Palette::shared(PaletteKind::Basic);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &Palette::shared(PaletteKind::Shades)));
    }

    #[test]
    fn shared_palette_survives_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Palette::shared(PaletteKind::Shades)))
            .collect();
        let palettes: Vec<Arc<Palette>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(palettes.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }

    #[test]
    fn display_name_includes_category() {
        let entry = PaletteEntry::new("crimson", 0xDC, 0x14, 0x3C).with_category("red");
        assert_eq!(entry.display_name(), "crimson (red)");
        assert_eq!(PaletteEntry::new("Red", 255, 0, 0).display_name(), "Red");
    }

    #[test]
    fn palette_kind_parses_case_insensitively() {
        assert_eq!("Shades".parse::<PaletteKind>(), Ok(PaletteKind::Shades));
        assert_eq!("basic".parse::<PaletteKind>(), Ok(PaletteKind::Basic));
        assert!("neon".parse::<PaletteKind>().is_err());
        assert_eq!(PaletteKind::default().to_string(), "basic");
    }
}
