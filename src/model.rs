use self::item::{Item, Priority};

pub mod item;

/// The ordered list of items, the unit of persistence.
///
/// Positions here are zero-based and assumed valid; the command layer
/// converts and validates the 1-based indices users type before calling in.
/// Duplicate names are allowed and distinct by position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<Item>,
}

impl Checklist {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new item with the default priority. The caller has already
    /// trimmed the name and rejected empty text.
    pub fn add(&mut self, name: &str) {
        self.items.push(Item::new(name));
    }

    /// Removes and returns the item at `position`; later items shift toward
    /// the front.
    pub fn remove(&mut self, position: usize) -> Item {
        self.items.remove(position)
    }

    /// Moves the item at `src` so that it ends up at `dst` in the resulting
    /// list. `dst` may be one past the last valid index, meaning "append at
    /// the tail". Returns the position the item actually landed at.
    pub fn move_item(&mut self, src: usize, dst: usize) -> usize {
        let item = self.items.remove(src);
        let dst = dst.min(self.items.len());
        self.items.insert(dst, item);
        dst
    }

    /// Replaces the name of the item at `position`. The caller has already
    /// trimmed the name and rejected empty text. Priority is unaffected.
    pub fn rename(&mut self, position: usize, new_name: &str) {
        self.items[position].name = new_name.to_string();
    }

    /// Exchanges the items at `a` and `b`. `a == b` leaves the list as-is.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    pub fn set_priority(&mut self, position: usize, level: Priority) {
        self.items[position].priority = level;
    }
}
