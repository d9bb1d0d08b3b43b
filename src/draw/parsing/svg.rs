//! SVG document reading
//!
//! Collects the outline of every `<path>` element in document order. Styling,
//! transforms and non-path shapes are ignored; callers that need them should
//! flatten the document first.

use super::commands::PathCommand;
use super::path_data::parse_path_data;
use anyhow::Context;
use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Parse an SVG file, returning path commands keyed by element id
///
/// Elements without an `id` are named `path{N}` after their position.
pub fn parse_svg_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<IndexMap<String, Vec<PathCommand>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open SVG file {}", path.as_ref().display()))?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.trim_text(true);
    collect_paths(&mut reader)
}

/// Parse SVG markup held in memory
pub fn parse_svg_str(svg: &str) -> anyhow::Result<IndexMap<String, Vec<PathCommand>>> {
    let mut reader = Reader::from_reader(svg.as_bytes());
    reader.trim_text(true);
    collect_paths(&mut reader)
}

fn collect_paths<R: BufRead>(reader: &mut Reader<R>) -> anyhow::Result<IndexMap<String, Vec<PathCommand>>> {
    let mut shapes = IndexMap::new();
    let mut buf = Vec::new();
    let mut saw_root = false;
    let mut path_index = 0usize;

    loop {
        buf.clear();
        let element = match reader.read_event_into(&mut buf)? {
            Event::Start(start) | Event::Empty(start) => start.into_owned(),
            Event::Eof => break,
            _ => continue,
        };

        if !saw_root {
            anyhow::ensure!(
                element.local_name().as_ref() == b"svg",
                "root element is <{}>, expected <svg>",
                String::from_utf8_lossy(element.local_name().as_ref())
            );
            saw_root = true;
            continue;
        }

        if element.local_name().as_ref() != b"path" {
            continue;
        }

        let mut id: Option<String> = None;
        let mut data: Option<String> = None;
        for attr in element.attributes() {
            let attr = attr?;
            let value = String::from_utf8_lossy(attr.value.as_ref()).to_string();
            match attr.key.local_name().as_ref() {
                b"id" => id = Some(value),
                b"d" => data = Some(value),
                _ => {}
            }
        }

        let name = match id {
            Some(id) if !shapes.contains_key(&id) => id,
            Some(id) => format!("{}_{}", id, path_index),
            None => format!("path{}", path_index),
        };
        path_index += 1;

        let Some(data) = data else {
            tracing::warn!(path = %name, "<path> without a d attribute skipped");
            continue;
        };
        let commands = parse_path_data(&data)
            .with_context(|| format!("invalid path data in <path id=\"{}\">", name))?;
        shapes.insert(name, commands);
    }

    anyhow::ensure!(saw_root, "SVG document is empty");
    tracing::debug!(paths = shapes.len(), "collected SVG paths");
    Ok(shapes)
}
