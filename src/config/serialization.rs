// Config file template generation
//
// The template is written on first run so users can discover the
// available options. Values come from the live Config, so regenerating
// after edits preserves effective settings.

use super::{Config, LogRotation};

impl Config {
    /// Render this configuration as a commented TOML file
    pub fn to_toml(&self) -> String {
        let rotation = match self.logging.file_rotation {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        };

        let mut out = String::new();

        out.push_str("# promptdeck configuration\n");
        out.push_str("# Delete this file to regenerate the defaults.\n\n");

        out.push_str("# Base URL the template paths are fetched from.\n");
        out.push_str("# Any static file server works, e.g. `python -m http.server`.\n");
        out.push_str(&format!("base_url = {:?}\n\n", self.base_url));

        out.push_str("# Theme: \"Deck Dark\", \"Deck Light\" or \"Terminal ANSI\"\n");
        out.push_str(&format!("theme = {:?}\n\n", self.theme));

        out.push_str("[logging]\n");
        out.push_str("# Level filter when RUST_LOG is unset: trace, debug, info, warn, error\n");
        out.push_str(&format!("level = {:?}\n", self.logging.level));
        out.push_str("# Write JSON logs to rotating files in addition to the in-app capture\n");
        out.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        out.push_str(&format!(
            "file_dir = {:?}\n",
            self.logging.file_dir.display().to_string()
        ));
        out.push_str(&format!("file_prefix = {:?}\n", self.logging.file_prefix));
        out.push_str("# Rotation: \"hourly\", \"daily\" or \"never\"\n");
        out.push_str(&format!("file_rotation = {rotation:?}\n\n"));

        out.push_str("# Replace the built-in template list by uncommenting\n");
        out.push_str("# one [[resources]] block per template (order is display order):\n");
        out.push_str("#\n");
        out.push_str("# [[resources]]\n");
        out.push_str("# identifier = \"prompts/my-template.txt\"\n");
        out.push_str("# title = \"My Template\"\n");
        out.push_str("# description = \"What this template is for\"\n");

        out
    }
}
