use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, Entity, RecordId};

/// One row of the inventory catalog.
///
/// Everything except `id` is optional; absent values render as blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub item_code: Option<String>,
    #[serde(default)]
    pub hts_code: Option<String>,
    #[serde(default)]
    pub category_tag: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
}

impl InventoryRecord {
    /// A record with only its identifier set.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            item: None,
            item_code: None,
            hts_code: None,
            category_tag: None,
            specifications: None,
        }
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_item_code(mut self, code: impl Into<String>) -> Self {
        self.item_code = Some(code.into());
        self
    }

    pub fn with_hts_code(mut self, code: impl Into<String>) -> Self {
        self.hts_code = Some(code.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_tag = Some(category.into());
        self
    }

    pub fn with_specifications(mut self, text: impl Into<String>) -> Self {
        self.specifications = Some(text.into());
        self
    }

    /// Category used for filtering and the category menu.
    ///
    /// Blank tags collapse into `None` so that `""` and a null column land in
    /// the same menu entry.
    pub fn category(&self) -> Option<&str> {
        self.category_tag
            .as_deref()
            .filter(|tag| !tag.trim().is_empty())
    }

    /// Non-blank lines of the specification text, in order.
    pub fn specification_sections(&self) -> Vec<&str> {
        self.specifications
            .as_deref()
            .map(specification_sections)
            .unwrap_or_default()
    }
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Split a specification block into display sections.
///
/// Any of `\r\n`, `\n` or a lone `\r` ends a section. Empty sections are
/// dropped; the others, whitespace-only ones included, are returned untouched.
pub fn specification_sections(text: &str) -> Vec<&str> {
    text.split(['\r', '\n'])
        .filter(|section| !section.is_empty())
        .collect()
}

/// Columns of the catalog table.
///
/// Each variant maps to a fixed accessor; there is no lookup by arbitrary
/// field name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Item,
    ItemCode,
    Category,
    HtsCode,
    Specifications,
}

impl Column {
    /// Display order.
    pub const ALL: [Column; 5] = [
        Column::Item,
        Column::ItemCode,
        Column::Category,
        Column::HtsCode,
        Column::Specifications,
    ];

    /// Stable key used in URLs.
    pub fn key(self) -> &'static str {
        match self {
            Column::Item => "item",
            Column::ItemCode => "item_code",
            Column::Category => "category",
            Column::HtsCode => "hts_code",
            Column::Specifications => "specifications",
        }
    }

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Column::Item => "Item",
            Column::ItemCode => "Item Code",
            Column::Category => "Category",
            Column::HtsCode => "HTS Code",
            Column::Specifications => "Specifications",
        }
    }

    /// Only the specification column has no sort control.
    pub fn is_sortable(self) -> bool {
        !matches!(self, Column::Specifications)
    }

    pub fn value(self, record: &InventoryRecord) -> Option<&str> {
        match self {
            Column::Item => record.item.as_deref(),
            Column::ItemCode => record.item_code.as_deref(),
            Column::Category => record.category(),
            Column::HtsCode => record.hts_code.as_deref(),
            Column::Specifications => record.specifications.as_deref(),
        }
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown column: {s}")))
    }
}
