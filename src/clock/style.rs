use std::fmt;

use crate::config::{Alignment, ClockConfig, ClockStyle, VerticalAlignment};

/// Lowest font weight handed out for the date line.
pub const MIN_FONT_WEIGHT: u32 = 100;

const DATE_WEIGHT_REDUCTION: u32 = 200;
const DATE_SIZE_DIVISOR: f64 = 4.0;
const OUTLINE_WIDTH_PX: u32 = 2;
const BACKDROP_BLUR_PX: u32 = 10;
const GRADIENT_ANGLE_DEG: u16 = 135;
const NEON_RADII_PX: [u32; 4] = [10, 20, 30, 40];

/// One layer of a text shadow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextShadow {
    /// Horizontal offset in pixels.
    pub offset_x: i32,
    /// Vertical offset in pixels.
    pub offset_y: i32,
    /// Blur radius in pixels.
    pub blur: u32,
    /// Shadow color.
    pub color: String,
}

impl TextShadow {
    /// A glow: no offset, blurred by `radius` pixels.
    pub fn glow(radius: u32, color: &str) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            blur: radius,
            color: color.to_string(),
        }
    }

    /// The fixed drop shadow added by the shadow effect.
    pub fn drop_shadow() -> Self {
        Self {
            offset_x: 4,
            offset_y: 4,
            blur: 8,
            color: "rgba(0,0,0,0.5)".to_string(),
        }
    }
}

impl fmt::Display for TextShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            css_length(i64::from(self.offset_x)),
            css_length(i64::from(self.offset_y)),
            css_length(i64::from(self.blur)),
            self.color
        )
    }
}

/// A linear gradient between two colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearGradient {
    /// Direction in degrees.
    pub angle_deg: u16,
    /// Start color.
    pub from: String,
    /// End color.
    pub to: String,
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {})",
            self.angle_deg, self.from, self.to
        )
    }
}

/// How glyphs are filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFill {
    /// A single color.
    Solid(String),
    /// No fill; only the outline is visible.
    Transparent,
    /// A gradient clipped to the glyph shapes.
    Gradient(LinearGradient),
}

/// Outline drawn around glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStroke {
    /// Stroke width in pixels.
    pub width_px: u32,
    /// Stroke color.
    pub color: String,
}

/// Animation applied when a style property changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Changes apply instantly.
    Disabled,
    /// All properties ease in and out over the duration.
    Ease {
        /// Duration in milliseconds.
        duration_ms: u32,
    },
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Disabled => write!(f, "none"),
            Transition::Ease { duration_ms } => write!(f, "all {duration_ms}ms ease-in-out"),
        }
    }
}

/// Resolved style of one text line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Font weight.
    pub font_weight: u32,
    /// Font family.
    pub font_family: String,
    /// Glyph fill.
    pub fill: TextFill,
    /// Shadow layers, innermost first. Empty means no shadow.
    pub shadows: Vec<TextShadow>,
    /// Optional glyph outline.
    pub stroke: Option<TextStroke>,
    /// Transition applied on changes.
    pub transition: Transition,
}

impl TextStyle {
    /// The shadow layers as a CSS `text-shadow` value, if any.
    pub fn text_shadow(&self) -> Option<String> {
        if self.shadows.is_empty() {
            return None;
        }

        Some(
            self.shadows
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// CSS declarations for this text line, in a stable order.
    pub fn to_css(&self) -> Vec<(&'static str, String)> {
        let mut declarations = vec![
            ("font-size", format!("{}px", self.font_size_px)),
            ("font-weight", self.font_weight.to_string()),
            ("font-family", self.font_family.clone()),
        ];

        match &self.fill {
            TextFill::Solid(color) => declarations.push(("color", color.clone())),
            TextFill::Transparent => declarations.push(("color", "transparent".to_string())),
            TextFill::Gradient(gradient) => {
                declarations.push(("background", gradient.to_string()));
                declarations.push(("-webkit-background-clip", "text".to_string()));
                declarations.push(("background-clip", "text".to_string()));
                declarations.push(("-webkit-text-fill-color", "transparent".to_string()));
            }
        }

        if let Some(shadow) = self.text_shadow() {
            declarations.push(("text-shadow", shadow));
        }

        if let Some(stroke) = &self.stroke {
            declarations.push((
                "-webkit-text-stroke",
                format!("{}px {}", stroke.width_px, stroke.color),
            ));
        }

        declarations.push(("transition", self.transition.to_string()));
        declarations
    }
}

/// Position of content along a flex axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexPosition {
    /// Start of the axis.
    Start,
    /// Middle of the axis.
    Center,
    /// End of the axis.
    End,
}

impl fmt::Display for FlexPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexPosition::Start => write!(f, "flex-start"),
            FlexPosition::Center => write!(f, "center"),
            FlexPosition::End => write!(f, "flex-end"),
        }
    }
}

/// Resolved style of the pane that holds both lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStyle {
    /// Pane background color.
    pub background_color: String,
    /// Opacity as a fraction between 0 and 1.
    pub opacity: f64,
    /// Backdrop blur radius, `None` when blurring is off.
    pub backdrop_blur_px: Option<u32>,
    /// Vertical placement of the content.
    pub align_items: FlexPosition,
    /// Horizontal placement of the content.
    pub justify_content: FlexPosition,
    /// Horizontal alignment of the text lines.
    pub text_align: Alignment,
    /// Inner padding in pixels.
    pub padding_px: u32,
    /// Gap between the time and date lines in pixels.
    pub gap_px: u32,
    /// Corner radius in pixels.
    pub border_radius_px: u32,
}

impl ContainerStyle {
    /// CSS declarations for the pane, in a stable order.
    pub fn to_css(&self) -> Vec<(&'static str, String)> {
        vec![
            ("background-color", self.background_color.clone()),
            ("opacity", self.opacity.to_string()),
            (
                "backdrop-filter",
                self.backdrop_blur_px
                    .map_or_else(|| "none".to_string(), |px| format!("blur({px}px)")),
            ),
            ("align-items", self.align_items.to_string()),
            ("justify-content", self.justify_content.to_string()),
            ("text-align", self.text_align.to_string()),
            ("padding", format!("{}px", self.padding_px)),
            ("gap", format!("{}px", self.gap_px)),
            ("border-radius", format!("{}px", self.border_radius_px)),
        ]
    }
}

/// Every resolved style needed to draw the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyleSheet {
    /// The time line.
    pub time: TextStyle,
    /// The date line, `None` when the date is hidden.
    pub date: Option<TextStyle>,
    /// The pane.
    pub container: ContainerStyle,
}

impl ClockStyleSheet {
    /// Renders the sheet as CSS rules for `.clockface`, `.clockface-time` and `.clockface-date`.
    pub fn to_css(&self) -> String {
        let mut css = css_rule(".clockface", &self.container.to_css());
        css.push('\n');
        css.push_str(&css_rule(".clockface-time", &self.time.to_css()));

        if let Some(date) = &self.date {
            css.push('\n');
            css.push_str(&css_rule(".clockface-date", &date.to_css()));
        }

        css
    }
}

/// Resolves every style of the clock from its config.
pub fn resolve(config: &ClockConfig) -> ClockStyleSheet {
    ClockStyleSheet {
        time: resolve_time_style(config),
        date: config.show_date.then(|| resolve_date_style(config)),
        container: resolve_container_style(config),
    }
}

/// Resolves the time line style.
///
/// Rules apply in order and later rules override earlier ones: base font and
/// color, glow effect, drop shadow, then the clock style treatment.
pub fn resolve_time_style(config: &ClockConfig) -> TextStyle {
    let accent = config.accent_color.as_str();

    let mut style = TextStyle {
        font_size_px: f64::from(config.font_size),
        font_weight: config.font_weight,
        font_family: config.custom_font.clone(),
        fill: TextFill::Solid(config.time_color.clone()),
        shadows: Vec::new(),
        stroke: None,
        transition: transition(config),
    };

    if config.glow_effect {
        style.shadows = vec![
            TextShadow::glow(config.glow_intensity, accent),
            TextShadow::glow(config.glow_intensity.saturating_mul(2), accent),
        ];
    }

    if config.shadow_effect {
        style.shadows.push(TextShadow::drop_shadow());
    }

    match config.clock_style {
        ClockStyle::Minimal | ClockStyle::Bold => {}
        ClockStyle::Outlined => {
            style.fill = TextFill::Transparent;
            style.stroke = Some(TextStroke {
                width_px: OUTLINE_WIDTH_PX,
                color: accent.to_string(),
            });
        }
        ClockStyle::Neon => {
            style.fill = TextFill::Solid(accent.to_string());
            style.shadows = NEON_RADII_PX
                .iter()
                .map(|radius| TextShadow::glow(*radius, accent))
                .collect();
        }
        ClockStyle::Gradient => {
            style.fill = TextFill::Gradient(LinearGradient {
                angle_deg: GRADIENT_ANGLE_DEG,
                from: config.time_color.clone(),
                to: accent.to_string(),
            });
        }
    }

    style
}

/// Resolves the date line style.
///
/// Shares the time line's font family and transition at a quarter of its
/// size and 200 less weight, floored at [`MIN_FONT_WEIGHT`].
pub fn resolve_date_style(config: &ClockConfig) -> TextStyle {
    TextStyle {
        font_size_px: f64::from(config.font_size) / DATE_SIZE_DIVISOR,
        font_weight: config
            .font_weight
            .saturating_sub(DATE_WEIGHT_REDUCTION)
            .max(MIN_FONT_WEIGHT),
        font_family: config.custom_font.clone(),
        fill: TextFill::Solid(config.date_color.clone()),
        shadows: Vec::new(),
        stroke: None,
        transition: transition(config),
    }
}

/// Resolves the pane style.
pub fn resolve_container_style(config: &ClockConfig) -> ContainerStyle {
    ContainerStyle {
        background_color: config.background_color.clone(),
        opacity: f64::from(config.opacity) / 100.0,
        backdrop_blur_px: config.blur_background.then_some(BACKDROP_BLUR_PX),
        align_items: match config.vertical_alignment {
            VerticalAlignment::Top => FlexPosition::Start,
            VerticalAlignment::Middle => FlexPosition::Center,
            VerticalAlignment::Bottom => FlexPosition::End,
        },
        justify_content: match config.alignment {
            Alignment::Left => FlexPosition::Start,
            Alignment::Center => FlexPosition::Center,
            Alignment::Right => FlexPosition::End,
        },
        text_align: config.alignment,
        padding_px: config.spacing.saturating_mul(2),
        gap_px: config.spacing,
        border_radius_px: config.border_radius,
    }
}

fn transition(config: &ClockConfig) -> Transition {
    if config.animate_transition {
        Transition::Ease {
            duration_ms: config.animation_speed,
        }
    } else {
        Transition::Disabled
    }
}

fn css_length(value: i64) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

fn css_rule(selector: &str, declarations: &[(&'static str, String)]) -> String {
    let body: String = declarations
        .iter()
        .map(|(property, value)| format!("  {property}: {value};\n"))
        .collect();

    format!("{selector} {{\n{body}}}\n")
}
