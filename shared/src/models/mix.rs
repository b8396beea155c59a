//! Mix composer: the transient selection a visitor assembles in the builder

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::ingredient::{find_ingredient, Ingredient};

/// Characters left verbatim by `encodeURIComponent`
const SHARE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An ordered, duplicate-free set of catalog ingredients chosen in one
/// session. Lives only in UI state; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixSelection {
    items: Vec<&'static Ingredient>,
}

impl MixSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an ingredient by id: remove it if selected, append otherwise.
    /// Unknown ids are ignored. Returns whether the ingredient is selected
    /// after the call.
    pub fn toggle(&mut self, ingredient_id: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|ing| ing.id == ingredient_id) {
            self.items.remove(pos);
            return false;
        }
        match find_ingredient(ingredient_id) {
            Some(ingredient) => {
                self.items.push(ingredient);
                true
            }
            None => false,
        }
    }

    pub fn ingredients(&self) -> &[&'static Ingredient] {
        &self.items
    }

    pub fn ingredient_ids(&self) -> Vec<&'static str> {
        self.items.iter().map(|ing| ing.id).collect()
    }

    pub fn ingredient_names(&self) -> Vec<String> {
        self.items.iter().map(|ing| ing.name.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of calories over the selection; 0 when empty.
    pub fn total_calories(&self) -> u32 {
        self.items.iter().map(|ing| ing.calories).sum()
    }

    /// Serialize the selection into the shareable query string,
    /// `recipe=<encoded name>&ingredients=<comma-joined ids>`.
    pub fn share_query(&self, name: &str) -> String {
        let encoded_name = utf8_percent_encode(name, SHARE_ENCODE_SET);
        format!(
            "recipe={}&ingredients={}",
            encoded_name,
            self.ingredient_ids().join(",")
        )
    }

    /// Rebuild a selection from the two share-query parameters. Unknown ids
    /// are silently dropped and duplicates collapse to the first occurrence.
    pub fn from_share_query(recipe: Option<&str>, ingredient_ids: Option<&str>) -> (String, Self) {
        let name = recipe
            .map(|r| percent_decode_str(r).decode_utf8_lossy().into_owned())
            .unwrap_or_default();

        let mut selection = Self::new();
        if let Some(csv) = ingredient_ids {
            for id in csv.split(',').filter(|id| !id.is_empty()) {
                if selection.items.iter().any(|ing| ing.id == id) {
                    continue;
                }
                if let Some(ingredient) = find_ingredient(id) {
                    selection.items.push(ingredient);
                }
            }
        }
        (name, selection)
    }
}
