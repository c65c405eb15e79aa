//! Share payloads and export files for a palette.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::ValueEnum;
use serde::Deserialize;
use tracing::info;

use crate::color::HexColor;
use crate::error::{Error, Result};
use crate::types::PALETTE_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON array of hex strings
    #[default]
    Json,
    /// One hex code per line
    Text,
    /// CSS custom properties
    Css,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Text, ExportFormat::Css];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::Css => "css",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Text => "Text",
            ExportFormat::Css => "CSS",
        }
    }

    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

/// Serialize the colors in order.
pub fn render(colors: &[HexColor], format: ExportFormat) -> Result<String> {
    let payload = match format {
        ExportFormat::Json => serde_json::to_string_pretty(colors)?,
        ExportFormat::Text => colors
            .iter()
            .map(|color| color.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        ExportFormat::Css => {
            let mut css = String::from(":root {\n");
            for (index, color) in colors.iter().enumerate() {
                css.push_str(&format!("  --color-{}: {color};\n", index + 1));
            }
            css.push('}');
            css
        }
    };
    Ok(payload)
}

/// Read a JSON share payload back into an ordered palette.
pub fn parse_json(payload: &str) -> Result<[HexColor; PALETTE_SIZE]> {
    let values: Vec<String> = serde_json::from_str(payload)?;
    if values.len() != PALETTE_SIZE {
        return Err(Error::PaletteLength {
            expected: PALETTE_SIZE,
            found: values.len(),
        });
    }
    let mut colors = [HexColor::BLACK; PALETTE_SIZE];
    for (slot, value) in colors.iter_mut().zip(&values) {
        *slot = value.parse()?;
    }
    Ok(colors)
}

/// `palette-YYYYMMDD-HHMMSS.ext`, with `-N` before the extension for `attempt > 0`.
pub fn export_file_name(stamp: &str, attempt: usize, format: ExportFormat) -> String {
    if attempt == 0 {
        format!("palette-{stamp}.{}", format.extension())
    } else {
        format!("palette-{stamp}-{attempt}.{}", format.extension())
    }
}

/// Write the palette into `dir`, creating it if needed. Returns the file path.
/// Existing exports are never overwritten.
pub fn save(colors: &[HexColor], format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let mut payload = render(colors, format)?;
    payload.push('\n');

    let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let mut attempt = 0;
    let (path, mut file) = loop {
        let path = dir.join(export_file_name(&stamp, attempt, format));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => break (path, file),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(err) => return Err(err.into()),
        }
    };
    file.write_all(payload.as_bytes())?;
    info!(path = %path.display(), format = format.label(), "exported palette");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [HexColor; PALETTE_SIZE] {
        ["#FF0000", "#00ff00", "#0000FF", "#FFFFFF", "#000000"].map(|hex| hex.parse().unwrap())
    }

    #[test]
    fn json_keeps_order_and_uppercases() {
        let json = render(&sample(), ExportFormat::Json).unwrap();
        let values: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(values, ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"]);
    }

    #[test]
    fn text_is_one_color_per_line() {
        let text = render(&sample(), ExportFormat::Text).unwrap();
        assert_eq!(text, "#FF0000\n#00FF00\n#0000FF\n#FFFFFF\n#000000");
    }

    #[test]
    fn css_numbers_properties_from_one() {
        let css = render(&sample(), ExportFormat::Css).unwrap();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-1: #FF0000;\n"));
        assert!(css.contains("  --color-5: #000000;\n"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn parse_json_reads_rendered_payload() {
        let json = render(&sample(), ExportFormat::Json).unwrap();
        assert_eq!(parse_json(&json).unwrap(), sample());
    }

    #[test]
    fn parse_json_rejects_wrong_length() {
        let err = parse_json(r##"["#FFFFFF", "#000000"]"##).unwrap_err();
        assert!(matches!(err, Error::PaletteLength { expected: 5, found: 2 }));
    }

    #[test]
    fn parse_json_rejects_bad_colors() {
        let payload = r##"["#FFFFFF", "#000000", "red", "#111111", "#222222"]"##;
        assert!(matches!(parse_json(payload), Err(Error::InvalidHex(value)) if value == "red"));
    }

    #[test]
    fn parse_json_rejects_non_array() {
        assert!(matches!(parse_json(r#"{"colors": []}"#), Err(Error::Json(_))));
    }

    #[test]
    fn suffix_only_after_first_attempt() {
        assert_eq!(
            export_file_name("20261018-203027", 0, ExportFormat::Json),
            "palette-20261018-203027.json"
        );
        assert_eq!(
            export_file_name("20261018-203027", 2, ExportFormat::Css),
            "palette-20261018-203027-2.css"
        );
    }

    #[test]
    fn back_to_back_saves_keep_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = [HexColor::new(0x11, 0x11, 0x11); PALETTE_SIZE];
        let second = [HexColor::new(0x22, 0x22, 0x22); PALETTE_SIZE];
        let p1 = save(&first, ExportFormat::Text, dir.path()).unwrap();
        let p2 = save(&second, ExportFormat::Text, dir.path()).unwrap();

        assert_ne!(p1, p2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
        assert!(std::fs::read_to_string(&p1).unwrap().starts_with("#111111"));
        assert!(std::fs::read_to_string(&p2).unwrap().starts_with("#222222"));
    }

    #[test]
    fn format_cycles_through_all() {
        assert_eq!(ExportFormat::Json.next(), ExportFormat::Text);
        assert_eq!(ExportFormat::Text.next(), ExportFormat::Css);
        assert_eq!(ExportFormat::Css.next(), ExportFormat::Json);
    }

    #[test]
    fn save_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("palettes");
        let path = save(&sample(), ExportFormat::Text, &target).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), PALETTE_SIZE);
    }
}
