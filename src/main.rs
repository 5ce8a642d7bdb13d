// SPDX-License-Identifier: MPL-2.0
use glitch_report::app::{self, Flags};

fn main() -> iced::Result {
    glitch_report::logging::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
    };

    app::run(flags)
}
