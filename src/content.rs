//! Kiosk catalog: carousel items and the panels they open.
//!
//! Both tables ship as CSV embedded into the binary. Bad rows are skipped
//! and logged rather than failing the whole page.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

// Panel ids end up in DOM ids and class names.
static PANEL_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap());

/// A tile in the carousel. `target` names the panel it opens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub label: String,
    pub target: String,
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Panel {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug)]
pub enum ContentError {
    Csv(csv::Error),
    /// A table had no usable rows.
    Empty(&'static str),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Csv(e) => write!(f, "Malformed CSV: {}", e),
            ContentError::Empty(table) => write!(f, "No usable rows in {} table", table),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Csv(e) => Some(e),
            ContentError::Empty(_) => None,
        }
    }
}

impl From<csv::Error> for ContentError {
    fn from(e: csv::Error) -> Self {
        ContentError::Csv(e)
    }
}

pub fn is_valid_panel_id(id: &str) -> bool {
    PANEL_ID_REGEX.is_match(id)
}

fn reader(csv_content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_content.as_bytes())
}

/// Parse `label,target,accent` rows. Rows that fail to deserialize are
/// skipped.
pub fn read_items_from_csv_string(csv_content: &str) -> Result<Vec<Item>, ContentError> {
    let mut rdr = reader(csv_content);
    rdr.headers()?;

    let mut items = Vec::new();
    for (i, record) in rdr.deserialize::<Item>().enumerate() {
        match record {
            Ok(item) if item.label.is_empty() => {
                debug!("Warning: item on row {} has no label, skipping", i + 2);
            }
            Ok(item) => items.push(item),
            Err(e) => debug!("Warning: item row {}: {}", i + 2, e),
        }
    }

    if items.is_empty() {
        return Err(ContentError::Empty("items"));
    }
    info!("Loaded {} carousel items", items.len());
    Ok(items)
}

/// Parse `id,title,body` rows. The first accepted row is the home panel.
pub fn read_panels_from_csv_string(csv_content: &str) -> Result<Vec<Panel>, ContentError> {
    let mut rdr = reader(csv_content);
    rdr.headers()?;

    let mut panels = Vec::new();
    let mut seen_ids = HashSet::new();
    for (i, record) in rdr.deserialize::<Panel>().enumerate() {
        let panel = match record {
            Ok(panel) => panel,
            Err(e) => {
                debug!("Warning: panel row {}: {}", i + 2, e);
                continue;
            }
        };
        if !is_valid_panel_id(&panel.id) {
            debug!("Warning: invalid panel id '{}' on row {}, skipping", panel.id, i + 2);
            continue;
        }
        if !seen_ids.insert(panel.id.clone()) {
            debug!("Warning: duplicate panel id '{}' on row {}, skipping", panel.id, i + 2);
            continue;
        }
        panels.push(panel);
    }

    if panels.is_empty() {
        return Err(ContentError::Empty("panels"));
    }
    info!("Loaded {} panels, home is '{}'", panels.len(), panels[0].id);
    Ok(panels)
}

/// Items and panels loaded together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub panels: Vec<Panel>,
}

impl Catalog {
    pub fn from_csv(items_csv: &str, panels_csv: &str) -> Result<Self, ContentError> {
        Ok(Self {
            items: read_items_from_csv_string(items_csv)?,
            panels: read_panels_from_csv_string(panels_csv)?,
        })
    }

    /// Id of the home panel, if any panel was loaded.
    pub fn home(&self) -> Option<&str> {
        self.panels.first().map(|p| p.id.as_str())
    }

    pub fn panel_ids(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.id.clone()).collect()
    }
}
