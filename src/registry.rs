//! Color role registry
//!
//! UI elements pick their colors through a small set of named roles rather
//! than hard-coded values. [`ColorRegistry`] owns the current value of every
//! role, knows each role's factory default, and can persist its state
//! through any [`ProfileStore`] implementation. Registries are plain values
//! handed to whoever needs one; there is no global instance.

use tracing::debug;

use crate::color::{fractions_to_rgb, rgb_to_fractions, Rgb};

/// Persistence backend for registry state.
///
/// Keyed unsigned-integer storage. A transient session (one whose settings
/// must not outlive it) reports itself through
/// [`is_transient_session`](ProfileStore::is_transient_session), and the
/// registry skips both saving and loading against it.
pub trait ProfileStore {
    /// Store `value` under `key`.
    fn write_int(&mut self, key: &str, value: u32);

    /// Read the value stored under `key`, or `default` if absent.
    fn read_int(&self, key: &str, default: u32) -> u32;

    /// Whether this store belongs to a session whose settings are discarded.
    fn is_transient_session(&self) -> bool;
}

/// The color roles the registry tracks.
///
/// Six roles carry a color; the two `*Opacity` roles carry an alpha level
/// (0 transparent, 255 opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Measurement line color.
    LineForeground,
    /// Crosshair fill color.
    CrosshairBackground,
    /// Crosshair border color.
    CrosshairBorder,
    /// Crosshair fill color when hovered or dragged.
    CrosshairHighlight,
    /// Crosshair opacity level.
    CrosshairOpacity,
    /// Ruler fill color.
    RulerBackground,
    /// Ruler border and tick mark color.
    RulerBorder,
    /// Ruler opacity level.
    RulerOpacity,
}

impl ColorRole {
    /// Every role, in registry storage order.
    pub const ALL: [ColorRole; 8] = [
        ColorRole::LineForeground,
        ColorRole::CrosshairBackground,
        ColorRole::CrosshairBorder,
        ColorRole::CrosshairHighlight,
        ColorRole::CrosshairOpacity,
        ColorRole::RulerBackground,
        ColorRole::RulerBorder,
        ColorRole::RulerOpacity,
    ];

    /// Profile key under which this role is persisted.
    ///
    /// The spellings are load-bearing: they must match profiles written by
    /// earlier releases.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::LineForeground => "LineFore",
            ColorRole::CrosshairBackground => "CrossHairBack",
            ColorRole::CrosshairBorder => "CrossHairBorder",
            ColorRole::CrosshairHighlight => "CrossHairHilite",
            ColorRole::CrosshairOpacity => "CrossHairOpacity",
            ColorRole::RulerBackground => "RulerBack",
            ColorRole::RulerBorder => "RulerBorder",
            ColorRole::RulerOpacity => "RulerOpacity",
        }
    }

    /// Whether this role carries an opacity level rather than a color.
    #[inline]
    pub fn is_opacity(self) -> bool {
        matches!(
            self,
            ColorRole::CrosshairOpacity | ColorRole::RulerOpacity
        )
    }

    /// Index of this role in the registry's value array.
    #[inline]
    fn index(self) -> usize {
        match self {
            ColorRole::LineForeground => 0,
            ColorRole::CrosshairBackground => 1,
            ColorRole::CrosshairBorder => 2,
            ColorRole::CrosshairHighlight => 3,
            ColorRole::CrosshairOpacity => 4,
            ColorRole::RulerBackground => 5,
            ColorRole::RulerBorder => 6,
            ColorRole::RulerOpacity => 7,
        }
    }

    /// Factory default for this role.
    fn default_value(self) -> RoleValue {
        match self {
            ColorRole::LineForeground => RoleValue::Color(Rgb::new(0xFF, 0x00, 0x00)),
            ColorRole::CrosshairBackground => RoleValue::Color(Rgb::new(0xFF, 0x00, 0x00)),
            ColorRole::CrosshairBorder => RoleValue::Color(Rgb::new(0x50, 0x50, 0x50)),
            ColorRole::CrosshairHighlight => RoleValue::Color(Rgb::new(0xFF, 0xFF, 0x00)),
            ColorRole::CrosshairOpacity => RoleValue::Opacity(229),
            ColorRole::RulerBackground => RoleValue::Color(Rgb::new(0xFF, 0xFF, 0xFF)),
            ColorRole::RulerBorder => RoleValue::Color(Rgb::new(0x00, 0x00, 0x00)),
            ColorRole::RulerOpacity => RoleValue::Opacity(229),
        }
    }
}

/// Value carried by a role: a color or an opacity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleValue {
    Color(Rgb),
    Opacity(u8),
}

impl RoleValue {
    /// View this value as a color. An opacity level lands in the red
    /// channel, matching how it round-trips through a packed integer.
    #[inline]
    fn as_rgb(self) -> Rgb {
        match self {
            RoleValue::Color(rgb) => rgb,
            RoleValue::Opacity(o) => Rgb::new(o, 0, 0),
        }
    }

    /// Packed integer form for persistence.
    #[inline]
    fn to_packed(self) -> u32 {
        self.as_rgb().to_packed()
    }
}

/// Current value of every color role, plus persistence.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    values: [RoleValue; 8],
}

impl ColorRegistry {
    /// A registry holding every role's factory default.
    pub fn new() -> Self {
        let mut values = [RoleValue::Opacity(0); 8];
        for role in ColorRole::ALL {
            values[role.index()] = role.default_value();
        }
        Self { values }
    }

    /// Set a color role. Opacity roles keep only the red channel.
    pub fn set(&mut self, role: ColorRole, rgb: Rgb) {
        self.values[role.index()] = if role.is_opacity() {
            RoleValue::Opacity(rgb.r)
        } else {
            RoleValue::Color(rgb)
        };
    }

    /// Set an opacity role directly. Color roles get an `(opacity, 0, 0)`
    /// color, mirroring [`set`](Self::set) on an opacity role.
    pub fn set_opacity(&mut self, role: ColorRole, opacity: u8) {
        self.values[role.index()] = if role.is_opacity() {
            RoleValue::Opacity(opacity)
        } else {
            RoleValue::Color(Rgb::new(opacity, 0, 0))
        };
    }

    /// Current color of a role. Opacity roles read as `(level, 0, 0)`.
    #[inline]
    pub fn get(&self, role: ColorRole) -> Rgb {
        self.values[role.index()].as_rgb()
    }

    /// Red component of a role's current color.
    #[inline]
    pub fn get_r(&self, role: ColorRole) -> u8 {
        self.get(role).r
    }

    /// Green component of a role's current color.
    #[inline]
    pub fn get_g(&self, role: ColorRole) -> u8 {
        self.get(role).g
    }

    /// Blue component of a role's current color.
    #[inline]
    pub fn get_b(&self, role: ColorRole) -> u8 {
        self.get(role).b
    }

    /// Current opacity of a role. Color roles report their red channel.
    #[inline]
    pub fn get_opacity(&self, role: ColorRole) -> u8 {
        match self.values[role.index()] {
            RoleValue::Opacity(o) => o,
            RoleValue::Color(rgb) => rgb.r,
        }
    }

    /// Factory default color of a role, independent of the current value.
    #[inline]
    pub fn get_default(&self, role: ColorRole) -> Rgb {
        role.default_value().as_rgb()
    }

    /// Restore one role to its factory default.
    pub fn reset(&mut self, role: ColorRole) {
        debug!(role = ?role, "resetting color role to default");
        self.values[role.index()] = role.default_value();
    }

    /// Restore every role to its factory default.
    pub fn master_reset(&mut self) {
        debug!("resetting all color roles to defaults");
        for role in ColorRole::ALL {
            self.values[role.index()] = role.default_value();
        }
    }

    /// Persist every role to `store`. Transient sessions are skipped.
    pub fn save_profile(&self, store: &mut dyn ProfileStore) {
        if store.is_transient_session() {
            debug!("transient session, skipping color profile save");
            return;
        }
        for role in ColorRole::ALL {
            store.write_int(role.key(), self.values[role.index()].to_packed());
        }
    }

    /// Load every role from `store`, falling back to defaults for keys the
    /// store does not have. Transient sessions are skipped.
    pub fn load_profile(&mut self, store: &dyn ProfileStore) {
        if store.is_transient_session() {
            debug!("transient session, skipping color profile load");
            return;
        }
        for role in ColorRole::ALL {
            let packed = store.read_int(role.key(), role.default_value().to_packed());
            let rgb = Rgb::from_packed(packed);
            self.set(role, rgb);
        }
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Linearly interpolate between two colors through HSL space.
///
/// `percent` is clamped to `0..=100`; 0 returns `start` and 100 returns
/// `end`. Intermediate positions interpolate hue, saturation and lightness
/// independently, so the blend passes through perceptually sensible
/// intermediate hues rather than desaturated RGB averages.
///
/// # Example
///
/// ```
/// use colorlab::{interpolate_color, Rgb};
///
/// let mid = interpolate_color(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 50);
/// assert_eq!(mid, Rgb::new(128, 128, 128));
/// ```
pub fn interpolate_color(start: Rgb, end: Rgb, percent: u8) -> Rgb {
    if percent == 0 {
        return start;
    }
    if percent >= 100 {
        return end;
    }

    // Interpolating on the unrounded HSL fractions keeps the identity
    // interpolate(c, c, p) == c for every color and position; quantizing to
    // integer HSL first loses it.
    let (h1, s1, l1) = rgb_to_fractions(start);
    let (h2, s2, l2) = rgb_to_fractions(end);
    let p = percent as f64 / 100.0;

    fractions_to_rgb(
        h1 + (h2 - h1) * p,
        s1 + (s2 - s1) * p,
        l1 + (l2 - l1) * p,
    )
}
