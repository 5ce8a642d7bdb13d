// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the decorative effects.
//!
//! Subscriptions are declarative: they run while returned from
//! `App::subscription` and are cancelled by the runtime the moment they stop
//! being returned, so every timer dies with the application (or, for the
//! pulse-release tick, with the pulse itself).

use super::Message;
use crate::ui::effects;
use iced::{time, Subscription};

/// Glitch pulse trigger, pulse release (only while a pulse is active), and
/// noise regeneration.
pub fn create_effect_subscription(glitch_active: bool) -> Subscription<Message> {
    let pulse = time::every(effects::GLITCH_PERIOD).map(|_| Message::GlitchPulse);

    let release = if glitch_active {
        time::every(effects::GLITCH_PULSE).map(|_| Message::GlitchRelease)
    } else {
        Subscription::none()
    };

    let noise = time::every(effects::NOISE_PERIOD).map(|_| Message::NoiseTick);

    Subscription::batch([pulse, release, noise])
}
