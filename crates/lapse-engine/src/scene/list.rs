use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Items are rasterized in insertion order (back-to-front). `push()` is O(1)
/// and `clear()` keeps allocated capacity, so a list can be reused across
/// frames without per-frame allocation once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a draw command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push_rounded_rect(Rect::new(0.0, 0.0, 1.0, 1.0), 0.0, Color::black(), None);
        list.push_rounded_rect(Rect::new(1.0, 0.0, 1.0, 1.0), 0.5, Color::white(), None);

        let radii: Vec<f32> = list
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::RoundedRect(rr) => rr.radius,
                _ => panic!("unexpected command"),
            })
            .collect();
        assert_eq!(radii, vec![0.0, 0.5]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_rounded_rect(Rect::new(0.0, 0.0, 1.0, 1.0), 0.0, Color::black(), None);
        list.clear();
        assert!(list.is_empty());
    }
}
