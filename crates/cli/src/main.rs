// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use imgsel::{Cli, Config};

fn main() {
    let cli = Cli::parse();
    let result = Config::load().and_then(|config| {
        imgsel::logging::init(config.log_level.as_deref());
        imgsel::run(cli, &config)
    });
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
