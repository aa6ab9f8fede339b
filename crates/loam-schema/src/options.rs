//! Per-call options for checking and synthesis.

/// How array elements are paired with the positional `items` of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemIndexing {
    /// Element `i` uses `items[i]`, or `items[i - len]` once past the end.
    /// Elements at `2 * len` and beyond have no item schema.
    #[default]
    SingleWrap,
    /// Element `i` uses `items[i % len]`.
    Cyclic,
}

impl ItemIndexing {
    /// Returns the item schema index for element `index`, if there is one.
    pub fn resolve(self, index: usize, len: usize) -> Option<usize> {
        let slot = match self {
            ItemIndexing::SingleWrap if index >= len => index - len,
            ItemIndexing::SingleWrap => index,
            ItemIndexing::Cyclic => index.checked_rem(len)?,
        };
        (slot < len).then_some(slot)
    }
}

/// Options for [`check_value_with`](crate::check_value_with) and
/// [`synthesize_with`](crate::synthesize_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Run [`validate_schema`](crate::validate_schema) before anything else.
    pub validate_schema: bool,
    /// Pairing of array elements with item schemas.
    pub item_indexing: ItemIndexing,
    /// Skip missing fields whose node is marked `optional: true`.
    /// Off by default: `optional` is only type-checked.
    pub honor_optional: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            validate_schema: true,
            item_indexing: ItemIndexing::default(),
            honor_optional: false,
        }
    }
}

impl Options {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the schema is validated first.
    pub fn with_schema_validation(mut self, validate: bool) -> Self {
        self.validate_schema = validate;
        self
    }

    /// Set the array item pairing.
    pub fn with_item_indexing(mut self, indexing: ItemIndexing) -> Self {
        self.item_indexing = indexing;
        self
    }

    /// Set whether `optional: true` fields may be missing.
    pub fn with_honor_optional(mut self, honor: bool) -> Self {
        self.honor_optional = honor;
        self
    }
}
