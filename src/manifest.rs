//! Manifest rendering - placement records for the game runtime
//!
//! Two formats: a Lua call script matching the legacy runtime loader, and a
//! JSON document for engines that prefer structured metadata.

use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::pack::Atlas;

/// Output format for the placement manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    /// LoadTexture/LoadImage call script
    Lua,
    /// Atlas metadata as a JSON document
    Json,
}

impl ManifestFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ManifestFormat::Lua => "lua",
            ManifestFormat::Json => "json",
        }
    }
}

/// One sprite's frame in the JSON manifest
#[derive(Debug, Clone, Serialize)]
pub struct ManifestFrame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// The JSON manifest document
#[derive(Debug, Clone, Serialize)]
pub struct ManifestDoc {
    pub image: String,
    pub size: [u32; 2],
    pub frames: BTreeMap<String, ManifestFrame>,
}

/// Render the manifest for an atlas named `name`.
pub fn render(atlas: &Atlas, name: &str, format: ManifestFormat) -> Result<String, serde_json::Error> {
    match format {
        ManifestFormat::Lua => Ok(render_lua(atlas, name)),
        ManifestFormat::Json => render_json(atlas, name),
    }
}

/// One header line, then one `LoadImage` line per placement in placement
/// order.
fn render_lua(atlas: &Atlas, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "LoadTexture(\"{}\", \"{}.png\");", name, name);
    for p in &atlas.placements {
        let _ = writeln!(
            out,
            "LoadImage(\"{}\", \"{}\", {}, {}, {}, {});",
            p.name, name, p.x, p.y, p.width, p.height
        );
    }
    out
}

fn render_json(atlas: &Atlas, name: &str) -> Result<String, serde_json::Error> {
    let doc = ManifestDoc {
        image: format!("{}.png", name),
        size: [atlas.size, atlas.size],
        frames: atlas
            .placements
            .iter()
            .map(|p| {
                (p.name.clone(), ManifestFrame { x: p.x, y: p.y, w: p.width, h: p.height })
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}
