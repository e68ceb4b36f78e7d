use waypoint_config::PinData;

/// Presence lookups over optional pinned data.
///
/// Absent pin data behaves like an empty map.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinDataIndex<'a> {
  pin_data: Option<&'a PinData>,
}

impl<'a> PinDataIndex<'a> {
  pub fn new(pin_data: Option<&'a PinData>) -> Self {
    Self { pin_data }
  }

  /// Whether `node_name` has an entry, regardless of how many items it holds.
  pub fn has_pinned_data(&self, node_name: &str) -> bool {
    self
      .pin_data
      .is_some_and(|pin_data| pin_data.contains_key(node_name))
  }

  /// Pinned items for `node_name`.
  pub fn get(&self, node_name: &str) -> Option<&'a [serde_json::Value]> {
    self
      .pin_data
      .and_then(|pin_data| pin_data.get(node_name))
      .map(|items| items.as_slice())
  }

  pub fn is_empty(&self) -> bool {
    self.pin_data.is_none_or(|pin_data| pin_data.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_absent_pin_data() {
    let index = PinDataIndex::new(None);
    assert!(index.is_empty());
    assert!(!index.has_pinned_data("trigger"));
    assert!(index.get("trigger").is_none());
  }

  #[test]
  fn test_presence_ignores_content() {
    let pin_data = PinData::from([("trigger".to_string(), vec![])]);
    let index = PinDataIndex::new(Some(&pin_data));

    assert!(!index.is_empty());
    assert!(index.has_pinned_data("trigger"));
    assert_eq!(index.get("trigger"), Some(&[][..]));
  }

  #[test]
  fn test_get_items() {
    let pin_data = PinData::from([("Webhook".to_string(), vec![json!({ "json": { "a": 1 } })])]);
    let index = PinDataIndex::new(Some(&pin_data));

    assert_eq!(index.get("Webhook").map(|items| items.len()), Some(1));
    assert!(!index.has_pinned_data("Webhook 2"));
  }
}
