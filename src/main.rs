// SPDX-License-Identifier: MPL-2.0
use iced_hotspot::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        content_dir: args.opt_value_from_str("--content-dir").unwrap(),
        image_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
