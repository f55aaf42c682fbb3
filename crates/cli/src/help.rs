// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(color(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_images}
  {images}      List images matching filters
  {prune}       Remove unused images

{header_setup}
  {completion}  Generate shell completions
",
        header_images = colors::header("Images:"),
        header_setup = colors::header("Setup:"),
        images = colors::literal("images"),
        prune = colors::literal("prune"),
        completion = colors::literal("completion"),
    )
}

/// Filter grammar shown after the `images` and `prune` options.
pub fn filters() -> String {
    colors::examples(
        "\
Filters:
  before=<image>           Created before <image>
  since=<image>            Created after <image>
  label=<key>[=<value>]    Config carries the label (any listed label matches)
  reference=<pattern>      Name matches the glob or regex (all must match)
  dangling=true|false      Untagged (true) or tagged (false) only",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
