//! Tree-shaped record representation for one exportable entity.
//!
//! A [`RecordNode`] tree is the input of the export pipeline. The root
//! represents the entity the export was requested for; its direct children
//! are the "row trees" which become the rows of the final table. Every node
//! carries ordered key-value [`DataItem`]s with the actual data, and owns its
//! children exclusively (no sharing, no cycles, no back-references).

/// A single cell value.
///
/// `Missing` renders as an empty string everywhere downstream; keeping it as
/// its own variant lets collaborator code distinguish "no value recorded"
/// from an empty text field when building trees.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// The cell as text, with `Missing` mapped to `""`.
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Text(text) => text,
            CellValue::Missing => "",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => CellValue::Text(text),
            None => CellValue::Missing,
        }
    }
}

/// One key-value pair of a [`RecordNode`].
///
/// `origin` optionally names the shared base type an item is inherited from.
/// Many node types share fields of a common base type (every process run
/// carries a `timestamp`, for example). Without the marker, that field would
/// end up as unrelated, differently-positioned columns for every process
/// subtype; the schema builder uses `origin` to unify such "shared columns"
/// into one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DataItem {
    pub key: String,
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl DataItem {
    pub fn new(key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            origin: None,
        }
    }

    /// An item inherited from a shared base type, eligible for shared-column
    /// unification across column groups.
    pub fn shared(
        key: impl Into<String>,
        value: impl Into<CellValue>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            origin: Some(origin.into()),
        }
    }
}

/// One node in the record tree.
///
/// `type_name` is the semantic type label, shared by all structurally
/// equivalent nodes ("deposition", "layer"). The name disambiguator rewrites
/// it in place so that it becomes unique where nodes must align into the same
/// column group. `display_label` is the human-facing row label used in the
/// leading column of the table; it defaults to the type name.
///
/// Both `items` and `children` preserve insertion order: sibling order is
/// whatever order children were appended in, and the column order of the
/// final table follows item order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordNode {
    pub type_name: String,
    pub display_label: String,
    #[serde(default)]
    pub items: Vec<DataItem>,
    #[serde(default)]
    pub children: Vec<RecordNode>,
}

impl RecordNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            display_label: type_name.clone(),
            type_name,
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A node with a row label distinct from its type name (a sample's name,
    /// a run number).
    pub fn with_label(type_name: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            display_label: display_label.into(),
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn push_item(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.items.push(DataItem::new(key, value));
    }

    pub fn push_shared_item(
        &mut self,
        key: impl Into<String>,
        value: impl Into<CellValue>,
        origin: impl Into<String>,
    ) {
        self.items.push(DataItem::shared(key, value, origin));
    }

    pub fn push_child(&mut self, child: RecordNode) {
        self.children.push(child);
    }

    /// The display labels of the direct children, in order. One label per
    /// row of the exported table.
    pub fn row_labels(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|child| child.display_label.clone())
            .collect()
    }
}
