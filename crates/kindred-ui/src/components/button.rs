//! Button Component
//!
//! One button, six variants:
//! - Primary: main actions, blue fill
//! - Secondary: quieter actions, light grey fill with dark label
//! - Danger: destructive actions, red fill
//! - Follow / Following / Unfollow: the follow lifecycle, fixed width
//!
//! Styling is resolved from `const` records rather than ad-hoc merges:
//! every variant maps to a base record, and the `full_width` and
//! `disabled`/`waiting` overrides apply in one fixed order.

use dioxus::prelude::*;

use kindred_core::KindredError;

use crate::components::progress::ProgressIndicator;
use crate::palette;

/// Height of a regular button in px
pub const REGULAR_HEIGHT: f32 = 40.0;
/// Height of a full-width button in px
pub const FULL_WIDTH_HEIGHT: f32 = 48.0;
/// Fixed width of the follow-family buttons in px
pub const FOLLOW_WIDTH: f32 = 154.0;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action, blue fill
    #[default]
    Primary,
    /// Quieter action, light grey fill
    Secondary,
    /// Destructive action, red fill
    Danger,
    /// Start following someone
    Follow,
    /// Already following, white fill with green border
    Following,
    /// Stop following someone
    Unfollow,
}

impl ButtonVariant {
    /// Every variant, in display order
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
        ButtonVariant::Follow,
        ButtonVariant::Following,
        ButtonVariant::Unfollow,
    ];

    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Follow => "btn-follow",
            ButtonVariant::Following => "btn-following",
            ButtonVariant::Unfollow => "btn-unfollow",
        }
    }

    /// Canonical wire name of this variant
    pub fn name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::Danger => "Danger",
            ButtonVariant::Follow => "Follow",
            ButtonVariant::Following => "Following",
            ButtonVariant::Unfollow => "Unfollow",
        }
    }

    /// Base style record for this variant
    pub const fn base_style(self) -> ButtonStyle {
        match self {
            ButtonVariant::Primary => ButtonStyle {
                background: palette::BLUE,
                ..COMMON
            },
            ButtonVariant::Secondary => ButtonStyle {
                background: palette::LIGHT_GREY_2,
                ..COMMON
            },
            ButtonVariant::Danger => ButtonStyle {
                background: palette::RED,
                ..COMMON
            },
            ButtonVariant::Follow => ButtonStyle {
                background: palette::GREEN,
                ..FOLLOW_COMMON
            },
            ButtonVariant::Following => ButtonStyle {
                background: palette::WHITE,
                border: Some(BorderStyle {
                    color: palette::GREEN,
                    width: 2.0,
                }),
                padding_top: 5.0,
                ..FOLLOW_COMMON
            },
            ButtonVariant::Unfollow => ButtonStyle {
                background: palette::BLUE,
                ..FOLLOW_COMMON
            },
        }
    }

    /// Label style record for this variant
    pub const fn label_style(self) -> LabelStyle {
        match self {
            ButtonVariant::Secondary => LabelStyle {
                color: palette::BLACK_75,
                ..LABEL_COMMON
            },
            ButtonVariant::Following => LabelStyle {
                color: palette::GREEN,
                ..LABEL_COMMON
            },
            ButtonVariant::Primary
            | ButtonVariant::Danger
            | ButtonVariant::Follow
            | ButtonVariant::Unfollow => LABEL_COMMON,
        }
    }

    /// Opacity applied while disabled or waiting
    pub const fn disabled_opacity(self) -> f32 {
        match self {
            ButtonVariant::Primary | ButtonVariant::Danger => 0.2,
            ButtonVariant::Secondary
            | ButtonVariant::Follow
            | ButtonVariant::Following
            | ButtonVariant::Unfollow => 0.3,
        }
    }
}

impl std::fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ButtonVariant {
    type Err = KindredError;

    /// Parse a wire name, rejecting anything unrecognized
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Primary" => Ok(ButtonVariant::Primary),
            "Secondary" => Ok(ButtonVariant::Secondary),
            "Danger" => Ok(ButtonVariant::Danger),
            "Follow" => Ok(ButtonVariant::Follow),
            "Following" => Ok(ButtonVariant::Following),
            "Unfollow" => Ok(ButtonVariant::Unfollow),
            other => Err(KindredError::UnknownVariant(other.to_string())),
        }
    }
}

/// Border description for button fills that need one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub color: &'static str,
    pub width: f32,
}

/// Resolved container style for one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background: &'static str,
    pub height: f32,
    pub border_radius: f32,
    pub padding_top: f32,
    pub padding_left: f32,
    pub padding_right: f32,
    /// Fixed width; `None` sizes to content
    pub width: Option<f32>,
    pub border: Option<BorderStyle>,
    /// Dimming applied while non-interactive
    pub opacity: Option<f32>,
    /// Stretch to fill the row
    pub grow: bool,
}

/// Geometry shared by every variant
const COMMON: ButtonStyle = ButtonStyle {
    background: palette::WHITE,
    height: REGULAR_HEIGHT,
    border_radius: 50.0,
    padding_top: 7.0,
    padding_left: 32.0,
    padding_right: 32.0,
    width: None,
    border: None,
    opacity: None,
    grow: false,
};

/// Follow-family buttons render at a fixed width
const FOLLOW_COMMON: ButtonStyle = ButtonStyle {
    width: Some(FOLLOW_WIDTH),
    ..COMMON
};

impl ButtonStyle {
    /// Full-width geometry: taller, stretched, no fixed width
    pub const fn with_full_width(self) -> Self {
        Self {
            height: FULL_WIDTH_HEIGHT,
            padding_top: 10.0,
            width: None,
            grow: true,
            ..self
        }
    }

    /// Dim the button without touching its geometry
    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..self
        }
    }

    /// Render the record as inline CSS
    pub fn css(&self) -> String {
        let mut css = format!(
            "background-color: {}; height: {}px; border-radius: {}px; padding: {}px {}px 0 {}px;",
            self.background,
            self.height,
            self.border_radius,
            self.padding_top,
            self.padding_right,
            self.padding_left
        );
        if let Some(width) = self.width {
            css.push_str(&format!(" width: {}px;", width));
        }
        if self.grow {
            css.push_str(" flex-grow: 1; align-self: stretch;");
        }
        if let Some(border) = self.border {
            css.push_str(&format!(" border: {}px solid {};", border.width, border.color));
        }
        if let Some(opacity) = self.opacity {
            css.push_str(&format!(" opacity: {};", opacity));
        }
        css
    }
}

/// Label style for one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: &'static str,
    pub text_align: &'static str,
}

const LABEL_COMMON: LabelStyle = LabelStyle {
    color: palette::WHITE,
    text_align: "center",
};

impl LabelStyle {
    /// Render the record as inline CSS
    pub fn css(&self) -> String {
        format!("color: {}; text-align: {};", self.color, self.text_align)
    }
}

/// Presentation flags a button can carry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonFlags {
    pub disabled: bool,
    pub waiting: bool,
    pub full_width: bool,
}

/// Outcome of style resolution for one button render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedButton {
    pub style: ButtonStyle,
    pub label: LabelStyle,
    /// False while disabled or waiting; the click handler is dropped
    pub interactive: bool,
}

/// Resolve a variant and its flags into concrete styles
///
/// Overrides apply in one fixed order: base record, then full-width
/// geometry, then dimming. Waiting dims exactly like disabled.
pub fn resolve(variant: ButtonVariant, flags: ButtonFlags) -> ResolvedButton {
    let mut style = variant.base_style();
    if flags.full_width {
        style = style.with_full_width();
    }
    if flags.disabled || flags.waiting {
        style = style.with_opacity(variant.disabled_opacity());
    }
    ResolvedButton {
        style,
        label: variant.label_style(),
        interactive: !flags.disabled && !flags.waiting,
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button label text
    pub label: String,
    /// Click handler; ignored while disabled or waiting
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Whether the action behind the button is in flight
    #[props(default = false)]
    pub waiting: bool,
    /// Stretch to fill the row
    #[props(default = false)]
    pub full_width: bool,
    /// Extra inline CSS appended after the resolved style
    #[props(default)]
    pub style: Option<String>,
}

/// Styled button following the design system
///
/// # Design Notes
///
/// - Pill-shaped fills, one color per variant
/// - `waiting` overlays a progress spinner and drops the click handler
/// - `disabled` and `waiting` dim the fill by a per-variant opacity
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         label: "Search",
///         waiting: searching(),
///         onclick: move |_| run_search(),
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let resolved = resolve(
        props.variant,
        ButtonFlags {
            disabled: props.disabled,
            waiting: props.waiting,
            full_width: props.full_width,
        },
    );

    let variant_class = props.variant.class();
    let container_css = match props.style.as_deref() {
        Some(extra) => format!("{} {}", resolved.style.css(), extra),
        None => resolved.style.css(),
    };
    let label_css = resolved.label.css();
    let onclick = if resolved.interactive {
        props.onclick
    } else {
        None
    };

    rsx! {
        button {
            class: "kindred-button {variant_class}",
            r#type: "button",
            style: "{container_css}",
            disabled: !resolved.interactive,
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            span { class: "button-label", style: "{label_css}", "{props.label}" }
            if props.waiting {
                span { class: "button-progress",
                    ProgressIndicator {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Follow.class(), "btn-follow");
        assert_eq!(ButtonVariant::Following.class(), "btn-following");
        assert_eq!(ButtonVariant::Unfollow.class(), "btn-unfollow");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn shared_geometry_holds_for_every_variant() {
        for variant in ButtonVariant::ALL {
            let style = variant.base_style();
            assert_eq!(style.height, REGULAR_HEIGHT, "{variant}");
            assert_eq!(style.border_radius, 50.0, "{variant}");
            assert_eq!(style.padding_left, 32.0, "{variant}");
            assert_eq!(style.padding_right, 32.0, "{variant}");
            assert_eq!(style.opacity, None, "{variant}");
            assert!(!style.grow, "{variant}");
        }
    }

    #[test]
    fn variant_fills_and_widths() {
        let primary = ButtonVariant::Primary.base_style();
        assert_eq!(primary.background, palette::BLUE);
        assert_eq!(primary.width, None);
        assert_eq!(primary.border, None);

        let secondary = ButtonVariant::Secondary.base_style();
        assert_eq!(secondary.background, palette::LIGHT_GREY_2);

        let danger = ButtonVariant::Danger.base_style();
        assert_eq!(danger.background, palette::RED);

        let follow = ButtonVariant::Follow.base_style();
        assert_eq!(follow.background, palette::GREEN);
        assert_eq!(follow.width, Some(FOLLOW_WIDTH));

        let unfollow = ButtonVariant::Unfollow.base_style();
        assert_eq!(unfollow.background, palette::BLUE);
        assert_eq!(unfollow.width, Some(FOLLOW_WIDTH));
    }

    #[test]
    fn following_keeps_its_border_and_tighter_padding() {
        let following = ButtonVariant::Following.base_style();
        assert_eq!(following.background, palette::WHITE);
        assert_eq!(
            following.border,
            Some(BorderStyle {
                color: palette::GREEN,
                width: 2.0
            })
        );
        assert_eq!(following.padding_top, 5.0);
        assert_eq!(following.width, Some(FOLLOW_WIDTH));
    }

    #[test]
    fn label_colors_per_variant() {
        for variant in ButtonVariant::ALL {
            let label = variant.label_style();
            assert_eq!(label.text_align, "center", "{variant}");
            let expected = match variant {
                ButtonVariant::Secondary => palette::BLACK_75,
                ButtonVariant::Following => palette::GREEN,
                _ => palette::WHITE,
            };
            assert_eq!(label.color, expected, "{variant}");
        }
    }

    #[test]
    fn disabled_opacity_per_variant() {
        assert_eq!(ButtonVariant::Primary.disabled_opacity(), 0.2);
        assert_eq!(ButtonVariant::Secondary.disabled_opacity(), 0.3);
        assert_eq!(ButtonVariant::Danger.disabled_opacity(), 0.2);
        assert_eq!(ButtonVariant::Follow.disabled_opacity(), 0.3);
        assert_eq!(ButtonVariant::Following.disabled_opacity(), 0.3);
        assert_eq!(ButtonVariant::Unfollow.disabled_opacity(), 0.3);
    }

    #[test]
    fn full_width_overrides_geometry_for_every_variant() {
        for variant in ButtonVariant::ALL {
            let style = variant.base_style().with_full_width();
            assert_eq!(style.height, FULL_WIDTH_HEIGHT, "{variant}");
            assert_eq!(style.padding_top, 10.0, "{variant}");
            assert_eq!(style.width, None, "{variant}");
            assert!(style.grow, "{variant}");
            // fill is untouched by the geometry override
            assert_eq!(style.background, variant.base_style().background, "{variant}");
        }
    }

    #[test]
    fn overrides_layer_in_fixed_order() {
        let resolved = resolve(
            ButtonVariant::Follow,
            ButtonFlags {
                disabled: true,
                waiting: false,
                full_width: true,
            },
        );
        assert_eq!(resolved.style.height, FULL_WIDTH_HEIGHT);
        assert_eq!(resolved.style.width, None);
        assert_eq!(resolved.style.opacity, Some(0.3));
    }

    #[test]
    fn handler_is_live_only_when_neither_disabled_nor_waiting() {
        let cases = [
            (false, false, true),
            (true, false, false),
            (false, true, false),
            (true, true, false),
        ];
        for (disabled, waiting, expected) in cases {
            let resolved = resolve(
                ButtonVariant::Primary,
                ButtonFlags {
                    disabled,
                    waiting,
                    full_width: false,
                },
            );
            assert_eq!(resolved.interactive, expected, "disabled={disabled} waiting={waiting}");
        }
    }

    #[test]
    fn waiting_dims_exactly_like_disabled() {
        for variant in ButtonVariant::ALL {
            let waiting = resolve(
                variant,
                ButtonFlags {
                    disabled: false,
                    waiting: true,
                    full_width: false,
                },
            );
            assert_eq!(waiting.style.opacity, Some(variant.disabled_opacity()), "{variant}");
        }
    }

    #[test]
    fn wire_names_roundtrip() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from_str(variant.name()).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        let err = ButtonVariant::from_str("Tertiary").unwrap_err();
        assert_eq!(format!("{}", err), "Unknown variant: Tertiary");
    }

    #[test]
    fn css_emission_spot_checks() {
        let primary = ButtonVariant::Primary.base_style().css();
        assert!(primary.contains("background-color: #33a0ff;"));
        assert!(primary.contains("height: 40px;"));
        assert!(!primary.contains("opacity"));

        let following = ButtonVariant::Following.base_style().css();
        assert!(following.contains("border: 2px solid #3dcc8e;"));

        let dimmed = ButtonVariant::Danger.base_style().with_opacity(0.2).css();
        assert!(dimmed.contains("opacity: 0.2;"));

        let stretched = ButtonVariant::Primary.base_style().with_full_width().css();
        assert!(stretched.contains("height: 48px;"));
        assert!(stretched.contains("flex-grow: 1;"));
    }

    #[test]
    fn label_css_emission() {
        let secondary = ButtonVariant::Secondary.label_style().css();
        assert_eq!(secondary, "color: rgba(0, 0, 0, 0.75); text-align: center;");
    }
}
