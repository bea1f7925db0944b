use std::collections::HashMap;

use tracing::{debug, trace};

use crate::attributes::ShapeAttributes;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppearanceId(pub u32);

impl AppearanceId {
    pub fn from_index(index: usize) -> Result<Self, AppearanceError> {
        u32::try_from(index)
            .map(AppearanceId)
            .map_err(|_| AppearanceError::TableFull { len: index })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppearanceError {
    TableFull { len: usize },
}

impl std::fmt::Display for AppearanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppearanceError::TableFull { len } => {
                write!(f, "appearance table full: {len} entries, ids are u32")
            }
        }
    }
}

impl std::error::Error for AppearanceError {}

/// Interns attribute sets so shapes that look identical share one id.
///
/// Ids are dense and handed out in first-seen order. The table stores its own
/// copy of each attribute set; later edits to the caller's value do not reach
/// the stored entry. Grouping or ordering by id is left to the renderer.
#[derive(Debug, Default, Clone)]
pub struct AppearanceTable {
    entries: Vec<ShapeAttributes>,
    ids: HashMap<ShapeAttributes, AppearanceId>,
}

impl AppearanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails only once every `u32` id has been handed out.
    pub fn intern(
        &mut self,
        attributes: &ShapeAttributes,
    ) -> Result<AppearanceId, AppearanceError> {
        if let Some(id) = self.ids.get(attributes) {
            trace!(id = id.0, "appearance already interned");
            return Ok(*id);
        }
        let id = AppearanceId::from_index(self.entries.len())?;
        self.entries.push(attributes.clone());
        self.ids.insert(attributes.clone(), id);
        debug!(id = id.0, total = self.entries.len(), "interned new appearance");
        Ok(id)
    }

    pub fn id_of(&self, attributes: &ShapeAttributes) -> Option<AppearanceId> {
        self.ids.get(attributes).copied()
    }

    pub fn get(&self, id: AppearanceId) -> Option<&ShapeAttributes> {
        self.entries.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AppearanceId, &ShapeAttributes)> {
        // `intern` keeps the length within u32, so the zip never stops early.
        (0u32..)
            .zip(self.entries.iter())
            .map(|(i, attrs)| (AppearanceId(i), attrs))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{AppearanceError, AppearanceId, AppearanceTable};
    use crate::attributes::ShapeAttributes;
    use foundation::color::Color;

    #[test]
    fn identical_appearances_share_an_id() {
        let mut table = AppearanceTable::new();
        let a = table.intern(&ShapeAttributes::new()).unwrap();
        let b = table.intern(&ShapeAttributes::new()).unwrap();
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn ids_follow_first_seen_order() {
        let mut table = AppearanceTable::new();
        let mut red_fill = ShapeAttributes::new();
        red_fill.set_interior_color(Color::RED);

        assert_eq!(table.intern(&ShapeAttributes::new()).unwrap(), AppearanceId(0));
        assert_eq!(table.intern(&red_fill).unwrap(), AppearanceId(1));
        assert_eq!(table.intern(&ShapeAttributes::new()).unwrap(), AppearanceId(0));

        let ids: Vec<AppearanceId> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![AppearanceId(0), AppearanceId(1)]);
    }

    #[test]
    fn stored_copy_is_isolated_from_caller() {
        let mut table = AppearanceTable::new();
        let mut attrs = ShapeAttributes::new();
        let id = table.intern(&attrs).unwrap();

        attrs.set_outline_width(8.0);
        assert_eq!(table.get(id).map(|a| a.outline_width()), Some(1.0));
        assert_eq!(table.id_of(&attrs), None);
        assert_ne!(table.intern(&attrs).unwrap(), id);
    }

    #[test]
    fn clear_resets_ids() {
        let mut table = AppearanceTable::new();
        table.intern(&ShapeAttributes::new()).unwrap();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.get(AppearanceId(0)), None);
    }

    #[test]
    fn ids_past_u32_range_are_an_error() {
        assert_eq!(AppearanceId::from_index(7), Ok(AppearanceId(7)));
        assert_eq!(
            AppearanceId::from_index(u32::MAX as usize),
            Ok(AppearanceId(u32::MAX))
        );
        #[cfg(target_pointer_width = "64")]
        assert_eq!(
            AppearanceId::from_index(u32::MAX as usize + 1),
            Err(AppearanceError::TableFull {
                len: u32::MAX as usize + 1
            })
        );
    }
}
