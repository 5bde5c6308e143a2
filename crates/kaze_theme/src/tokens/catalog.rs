//! The closed catalog of themeable token keys
//!
//! Every key maps to exactly one CSS custom property. The variable name is
//! the dot key with `.` replaced by `-`, prefixed with `--kz-`; it is spelled
//! out next to each key so the whole catalog is fixed at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownTokenKey;
use crate::tokens::category::{classify, TokenCategory};

/// Prefix shared by every generated CSS custom property
pub const CSS_VAR_PREFIX: &str = "--kz-";

macro_rules! token_catalog {
    ($( $(#[$meta:meta])* $variant:ident => $key:literal, $var:literal; )*) => {
        /// A recognized design-token key
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKey {
            $( $(#[$meta])* $variant, )*
        }

        impl TokenKey {
            /// Every key in catalog order
            pub const ALL: &'static [TokenKey] = &[ $( TokenKey::$variant, )* ];

            /// Dot-separated key, e.g. `color.brand.primary`
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( TokenKey::$variant => $key, )*
                }
            }

            /// CSS custom property this key is materialized as
            pub const fn css_var(self) -> &'static str {
                match self {
                    $( TokenKey::$variant => $var, )*
                }
            }
        }
    };
}

token_catalog! {
    // Brand colors
    BrandPrimary => "color.brand.primary", "--kz-color-brand-primary";
    BrandPrimaryHover => "color.brand.primary.hover", "--kz-color-brand-primary-hover";
    BrandPrimaryActive => "color.brand.primary.active", "--kz-color-brand-primary-active";
    BrandSecondary => "color.brand.secondary", "--kz-color-brand-secondary";
    BrandSecondaryHover => "color.brand.secondary.hover", "--kz-color-brand-secondary-hover";
    BrandSecondaryActive => "color.brand.secondary.active", "--kz-color-brand-secondary-active";
    BrandAccent => "color.brand.accent", "--kz-color-brand-accent";
    BrandAccentSubtle => "color.brand.accent.subtle", "--kz-color-brand-accent-subtle";
    // Surface colors
    SurfaceBackground => "color.surface.background", "--kz-color-surface-background";
    SurfaceBase => "color.surface.base", "--kz-color-surface-base";
    SurfaceElevated => "color.surface.elevated", "--kz-color-surface-elevated";
    SurfaceOverlay => "color.surface.overlay", "--kz-color-surface-overlay";
    SurfaceSunken => "color.surface.sunken", "--kz-color-surface-sunken";
    // Text colors
    TextPrimary => "color.text.primary", "--kz-color-text-primary";
    TextSecondary => "color.text.secondary", "--kz-color-text-secondary";
    TextTertiary => "color.text.tertiary", "--kz-color-text-tertiary";
    TextInverse => "color.text.inverse", "--kz-color-text-inverse";
    TextLink => "color.text.link", "--kz-color-text-link";
    TextDisabled => "color.text.disabled", "--kz-color-text-disabled";
    // Border colors
    BorderDefault => "color.border.default", "--kz-color-border-default";
    BorderSubtle => "color.border.subtle", "--kz-color-border-subtle";
    BorderStrong => "color.border.strong", "--kz-color-border-strong";
    BorderFocus => "color.border.focus", "--kz-color-border-focus";
    BorderError => "color.border.error", "--kz-color-border-error";
    // Status colors
    StatusSuccess => "color.status.success", "--kz-color-status-success";
    StatusSuccessBg => "color.status.success.bg", "--kz-color-status-success-bg";
    StatusWarning => "color.status.warning", "--kz-color-status-warning";
    StatusWarningBg => "color.status.warning.bg", "--kz-color-status-warning-bg";
    StatusError => "color.status.error", "--kz-color-status-error";
    StatusErrorBg => "color.status.error.bg", "--kz-color-status-error-bg";
    StatusInfo => "color.status.info", "--kz-color-status-info";
    StatusInfoBg => "color.status.info.bg", "--kz-color-status-info-bg";
    // Selection colors
    SelectionBg => "color.selection.bg", "--kz-color-selection-bg";
    SelectionText => "color.selection.text", "--kz-color-selection-text";
    // Typography colors
    TypographyHeadingColor => "typography.heading.color", "--kz-typography-heading-color";
    TypographyBodyColor => "typography.body.color", "--kz-typography-body-color";
    TypographyCaptionColor => "typography.caption.color", "--kz-typography-caption-color";
    TypographyCodeColor => "typography.code.color", "--kz-typography-code-color";
    // Font families
    FontFamilySans => "font.family.sans", "--kz-font-family-sans";
    FontFamilySerif => "font.family.serif", "--kz-font-family-serif";
    FontFamilyMono => "font.family.mono", "--kz-font-family-mono";
    // Font weights
    FontWeightRegular => "font.weight.regular", "--kz-font-weight-regular";
    FontWeightMedium => "font.weight.medium", "--kz-font-weight-medium";
    FontWeightSemibold => "font.weight.semibold", "--kz-font-weight-semibold";
    FontWeightBold => "font.weight.bold", "--kz-font-weight-bold";
    // Font sizes
    FontSizeXs => "font.size.xs", "--kz-font-size-xs";
    FontSizeSm => "font.size.sm", "--kz-font-size-sm";
    FontSizeMd => "font.size.md", "--kz-font-size-md";
    FontSizeLg => "font.size.lg", "--kz-font-size-lg";
    FontSizeXl => "font.size.xl", "--kz-font-size-xl";
    FontSize2xl => "font.size.2xl", "--kz-font-size-2xl";
    FontSize3xl => "font.size.3xl", "--kz-font-size-3xl";
    // Line heights
    LineHeightTight => "line.height.tight", "--kz-line-height-tight";
    LineHeightNormal => "line.height.normal", "--kz-line-height-normal";
    LineHeightRelaxed => "line.height.relaxed", "--kz-line-height-relaxed";
    // Spacing scale
    Space0 => "space.0", "--kz-space-0";
    Space1 => "space.1", "--kz-space-1";
    Space2 => "space.2", "--kz-space-2";
    Space3 => "space.3", "--kz-space-3";
    Space4 => "space.4", "--kz-space-4";
    Space5 => "space.5", "--kz-space-5";
    Space6 => "space.6", "--kz-space-6";
    Space8 => "space.8", "--kz-space-8";
    Space10 => "space.10", "--kz-space-10";
    Space12 => "space.12", "--kz-space-12";
    Space16 => "space.16", "--kz-space-16";
    // Radii
    RadiusNone => "radius.none", "--kz-radius-none";
    RadiusSm => "radius.sm", "--kz-radius-sm";
    RadiusMd => "radius.md", "--kz-radius-md";
    RadiusLg => "radius.lg", "--kz-radius-lg";
    RadiusXl => "radius.xl", "--kz-radius-xl";
    RadiusFull => "radius.full", "--kz-radius-full";
    // Shadows
    ShadowElevation0 => "shadow.elevation.0", "--kz-shadow-elevation-0";
    ShadowElevation1 => "shadow.elevation.1", "--kz-shadow-elevation-1";
    ShadowElevation2 => "shadow.elevation.2", "--kz-shadow-elevation-2";
    ShadowElevation3 => "shadow.elevation.3", "--kz-shadow-elevation-3";
    ShadowElevation4 => "shadow.elevation.4", "--kz-shadow-elevation-4";
    ShadowInner => "shadow.inner", "--kz-shadow-inner";
    ShadowFocus => "shadow.focus", "--kz-shadow-focus";
    // Effects
    EffectBlurSm => "effect.blur.sm", "--kz-effect-blur-sm";
    EffectBlurMd => "effect.blur.md", "--kz-effect-blur-md";
    EffectBlurLg => "effect.blur.lg", "--kz-effect-blur-lg";
    EffectGlassOpacity => "effect.glass.opacity", "--kz-effect-glass-opacity";
    EffectGlassSaturation => "effect.glass.saturation", "--kz-effect-glass-saturation";
    // Motion
    MotionDurationInstant => "motion.duration.instant", "--kz-motion-duration-instant";
    MotionDurationFast => "motion.duration.fast", "--kz-motion-duration-fast";
    MotionDurationNormal => "motion.duration.normal", "--kz-motion-duration-normal";
    MotionDurationSlow => "motion.duration.slow", "--kz-motion-duration-slow";
    MotionEasingStandard => "motion.easing.standard", "--kz-motion-easing-standard";
    MotionEasingEmphasized => "motion.easing.emphasized", "--kz-motion-easing-emphasized";
    MotionEasingDecelerate => "motion.easing.decelerate", "--kz-motion-easing-decelerate";
    MotionEasingAccelerate => "motion.easing.accelerate", "--kz-motion-easing-accelerate";
    // Button
    ButtonPrimaryBg => "component.button.primary.bg", "--kz-component-button-primary-bg";
    ButtonPrimaryBgHover => "component.button.primary.bg.hover", "--kz-component-button-primary-bg-hover";
    ButtonPrimaryBgActive => "component.button.primary.bg.active", "--kz-component-button-primary-bg-active";
    ButtonPrimaryFg => "component.button.primary.fg", "--kz-component-button-primary-fg";
    ButtonSecondaryBg => "component.button.secondary.bg", "--kz-component-button-secondary-bg";
    ButtonSecondaryBgHover => "component.button.secondary.bg.hover", "--kz-component-button-secondary-bg-hover";
    ButtonSecondaryFg => "component.button.secondary.fg", "--kz-component-button-secondary-fg";
    ButtonGhostBgHover => "component.button.ghost.bg.hover", "--kz-component-button-ghost-bg-hover";
    ButtonGhostFg => "component.button.ghost.fg", "--kz-component-button-ghost-fg";
    ButtonDangerBg => "component.button.danger.bg", "--kz-component-button-danger-bg";
    ButtonDangerFg => "component.button.danger.fg", "--kz-component-button-danger-fg";
    ButtonBorder => "component.button.border", "--kz-component-button-border";
    ButtonBorderWidth => "component.button.border.width", "--kz-component-button-border-width";
    ButtonRadius => "component.button.radius", "--kz-component-button-radius";
    ButtonGap => "component.button.gap", "--kz-component-button-gap";
    ButtonShadow => "component.button.shadow", "--kz-component-button-shadow";
    ButtonFocusRing => "component.button.focus.ring", "--kz-component-button-focus-ring";
    ButtonDisabledOpacity => "component.button.disabled.opacity", "--kz-component-button-disabled-opacity";
    // Input
    InputBg => "component.input.bg", "--kz-component-input-bg";
    InputBgDisabled => "component.input.bg.disabled", "--kz-component-input-bg-disabled";
    InputFg => "component.input.fg", "--kz-component-input-fg";
    InputPlaceholder => "component.input.placeholder", "--kz-component-input-placeholder";
    InputBorder => "component.input.border", "--kz-component-input-border";
    InputBorderHover => "component.input.border.hover", "--kz-component-input-border-hover";
    InputBorderFocus => "component.input.border.focus", "--kz-component-input-border-focus";
    InputBorderError => "component.input.border.error", "--kz-component-input-border-error";
    InputBorderWidth => "component.input.border.width", "--kz-component-input-border-width";
    InputRadius => "component.input.radius", "--kz-component-input-radius";
    InputFocusRing => "component.input.focus.ring", "--kz-component-input-focus-ring";
    InputDisabledOpacity => "component.input.disabled.opacity", "--kz-component-input-disabled-opacity";
    // Table
    TableHeaderBg => "component.table.header.bg", "--kz-component-table-header-bg";
    TableHeaderFg => "component.table.header.fg", "--kz-component-table-header-fg";
    TableRowBg => "component.table.row.bg", "--kz-component-table-row-bg";
    TableRowBgStriped => "component.table.row.bg.striped", "--kz-component-table-row-bg-striped";
    TableRowBgHover => "component.table.row.bg.hover", "--kz-component-table-row-bg-hover";
    TableRowBgSelected => "component.table.row.bg.selected", "--kz-component-table-row-bg-selected";
    TableBorder => "component.table.border", "--kz-component-table-border";
    TableBorderWidth => "component.table.border.width", "--kz-component-table-border-width";
    TableCellGap => "component.table.cell.gap", "--kz-component-table-cell-gap";
    TableRadius => "component.table.radius", "--kz-component-table-radius";
    // Menu
    MenuBg => "component.menu.bg", "--kz-component-menu-bg";
    MenuFg => "component.menu.fg", "--kz-component-menu-fg";
    MenuItemBgHover => "component.menu.item.bg.hover", "--kz-component-menu-item-bg-hover";
    MenuItemFgDisabled => "component.menu.item.fg.disabled", "--kz-component-menu-item-fg-disabled";
    MenuSeparator => "component.menu.separator", "--kz-component-menu-separator";
    MenuBorder => "component.menu.border", "--kz-component-menu-border";
    MenuRadius => "component.menu.radius", "--kz-component-menu-radius";
    MenuShadow => "component.menu.shadow", "--kz-component-menu-shadow";
    MenuGap => "component.menu.gap", "--kz-component-menu-gap";
    // Dialog
    DialogBg => "component.dialog.bg", "--kz-component-dialog-bg";
    DialogFg => "component.dialog.fg", "--kz-component-dialog-fg";
    DialogBackdrop => "component.dialog.backdrop", "--kz-component-dialog-backdrop";
    DialogBackdropBlur => "component.dialog.backdrop.blur", "--kz-component-dialog-backdrop-blur";
    DialogBackdropOpacity => "component.dialog.backdrop.opacity", "--kz-component-dialog-backdrop-opacity";
    DialogBorder => "component.dialog.border", "--kz-component-dialog-border";
    DialogRadius => "component.dialog.radius", "--kz-component-dialog-radius";
    DialogShadow => "component.dialog.shadow", "--kz-component-dialog-shadow";
    DialogWidth => "component.dialog.width", "--kz-component-dialog-width";
    DialogGap => "component.dialog.gap", "--kz-component-dialog-gap";
    // Tooltip
    TooltipBg => "component.tooltip.bg", "--kz-component-tooltip-bg";
    TooltipFg => "component.tooltip.fg", "--kz-component-tooltip-fg";
    TooltipRadius => "component.tooltip.radius", "--kz-component-tooltip-radius";
    TooltipShadow => "component.tooltip.shadow", "--kz-component-tooltip-shadow";
    // Card
    CardBg => "component.card.bg", "--kz-component-card-bg";
    CardFg => "component.card.fg", "--kz-component-card-fg";
    CardBorder => "component.card.border", "--kz-component-card-border";
    CardRadius => "component.card.radius", "--kz-component-card-radius";
    CardShadow => "component.card.shadow", "--kz-component-card-shadow";
    CardGap => "component.card.gap", "--kz-component-card-gap";
    // Tabs
    TabsIndicator => "component.tabs.indicator", "--kz-component-tabs-indicator";
    TabsFg => "component.tabs.fg", "--kz-component-tabs-fg";
    TabsFgActive => "component.tabs.fg.active", "--kz-component-tabs-fg-active";
    TabsIndicatorWidth => "component.tabs.indicator.width", "--kz-component-tabs-indicator-width";
    TabsGap => "component.tabs.gap", "--kz-component-tabs-gap";
    // Checkbox
    CheckboxBg => "component.checkbox.bg", "--kz-component-checkbox-bg";
    CheckboxBgChecked => "component.checkbox.bg.checked", "--kz-component-checkbox-bg-checked";
    CheckboxBorder => "component.checkbox.border", "--kz-component-checkbox-border";
    CheckboxCheckmark => "component.checkbox.checkmark", "--kz-component-checkbox-checkmark";
    CheckboxRadius => "component.checkbox.radius", "--kz-component-checkbox-radius";
    CheckboxFocusRing => "component.checkbox.focus.ring", "--kz-component-checkbox-focus-ring";
    // Switch
    SwitchTrack => "component.switch.track", "--kz-component-switch-track";
    SwitchTrackChecked => "component.switch.track.checked", "--kz-component-switch-track-checked";
    SwitchThumb => "component.switch.thumb", "--kz-component-switch-thumb";
    SwitchThumbShadow => "component.switch.thumb.shadow", "--kz-component-switch-thumb-shadow";
    // Badge
    BadgeBg => "component.badge.bg", "--kz-component-badge-bg";
    BadgeFg => "component.badge.fg", "--kz-component-badge-fg";
    BadgeRadius => "component.badge.radius", "--kz-component-badge-radius";
    // Glass surfaces
    GlassBg => "component.glass.bg", "--kz-component-glass-bg";
    GlassBorder => "component.glass.border", "--kz-component-glass-border";
    GlassBlur => "component.glass.blur", "--kz-component-glass-blur";
    GlassOpacity => "component.glass.opacity", "--kz-component-glass-opacity";
}

impl TokenKey {
    /// Category whose grammar override values for this key must satisfy
    pub fn category(self) -> TokenCategory {
        classify(self.as_str())
    }

    /// Look up a key by its dot-separated name
    pub fn lookup(key: &str) -> Option<TokenKey> {
        TokenKey::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKey {
    type Err = UnknownTokenKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKey::lookup(s.trim()).ok_or_else(|| UnknownTokenKey(s.to_string()))
    }
}

impl Serialize for TokenKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TokenKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
