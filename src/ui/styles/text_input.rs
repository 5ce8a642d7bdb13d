// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Color, Theme};

/// Standard form field. When `missing` is set (after a failed submit), the
/// border switches to the error color until the field gets a value.
pub fn form_field(missing: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let palette_ext = theme.extended_palette();

        let border_color = if missing {
            palette::ERROR_500
        } else {
            match status {
                Status::Focused { .. } => palette::PRIMARY_500,
                _ => Color {
                    a: 0.5,
                    ..palette::PRIMARY_500
                },
            }
        };

        let mut style = Style {
            background: palette_ext.background.base.color.into(),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            icon: palette_ext.background.weak.text,
            placeholder: palette_ext.background.strong.text,
            value: palette_ext.background.base.text,
            selection: palette_ext.primary.weak.color,
        };

        if let Status::Disabled = status {
            style.background = palette_ext.background.weak.color.into();
            style.value = palette_ext.background.strong.text;
        }

        style
    }
}
