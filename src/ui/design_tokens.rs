// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the report form.
//!
//! - **Palette**: base colors, including the glitch accent pair
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius / Border / Shadow**: outline scales

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.1, 0.14);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.15, 0.2);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.33, 0.38);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.48, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.77, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.9, 0.92);

    // Brand colors (blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_800: Color = Color::from_rgb(0.1, 0.3, 0.6);

    // Glitch accent pair used by the title's chromatic-offset pulse
    pub const GLITCH_INDIGO: Color = Color::from_rgb(0.388, 0.4, 0.945);
    pub const GLITCH_TEAL: Color = Color::from_rgb(0.176, 0.831, 0.749);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;

    /// Binary-noise backdrop text
    pub const NOISE: f32 = 0.08;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Height of the attachment preview thumbnail.
    pub const PREVIEW_HEIGHT: f32 = 64.0;

    /// Height of the attachment drop zone.
    pub const ATTACHMENT_ZONE_HEIGHT: f32 = 128.0;

    /// Width of the divider bar under the form title.
    pub const TITLE_DIVIDER_WIDTH: f32 = 96.0;
    pub const TITLE_DIVIDER_HEIGHT: f32 = 4.0;

    pub const FORM_MAX_WIDTH: f32 = 760.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - the glitching form header
    pub const TITLE_LG: f32 = 34.0;

    /// Medium title - confirmation heading
    pub const TITLE_MD: f32 = 26.0;

    /// Large body - intro paragraph, confirmation body
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - labels, inputs
    pub const BODY: f32 = 14.0;

    /// Caption - hints, footer, noise backdrop
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glitch_accents_are_distinct_from_brand() {
        assert_ne!(palette::GLITCH_INDIGO, palette::PRIMARY_500);
        assert_ne!(palette::GLITCH_TEAL, palette::PRIMARY_500);
        assert_ne!(palette::GLITCH_INDIGO, palette::GLITCH_TEAL);
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
        assert!(spacing::XL < spacing::XXL);
    }

    #[test]
    fn noise_opacity_stays_subtle() {
        assert!(opacity::NOISE < opacity::OVERLAY_SUBTLE);
    }
}
