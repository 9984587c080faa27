use crate::types::{Color, Rectangle};

/// Platform-specific backend for executing render items.
pub trait RenderBackend {
    type Error;

    /// Fill one darkening rectangle of the overlay mask.
    fn draw_mask_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), Self::Error>;

    /// Stroke the selection border.
    fn draw_selection_border(
        &mut self,
        rect: Rectangle,
        color: Color,
        width: f32,
    ) -> Result<(), Self::Error>;
}

/// Render primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderItem {
    /// One rectangle of the semi-transparent darkening mask.
    MaskRect {
        rect: Rectangle,
        color: Color,
        z_order: i32,
    },
    /// Selection rectangle outline.
    SelectionBorder {
        rect: Rectangle,
        color: Color,
        width: f32,
        z_order: i32,
    },
}

impl RenderItem {
    pub fn z_order(&self) -> i32 {
        match self {
            RenderItem::MaskRect { z_order, .. } => *z_order,
            RenderItem::SelectionBorder { z_order, .. } => *z_order,
        }
    }
}

/// Ordered list of render items for one overlay repaint.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    items: Vec<RenderItem>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn submit(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    /// Sort items back-to-front. Stable, so submission order is preserved
    /// within a layer.
    pub fn sort_by_z_order(&mut self) {
        self.items.sort_by_key(|item| item.z_order());
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Execute all items against a backend, in list order.
    pub fn execute<B: RenderBackend>(&self, backend: &mut B) -> Result<(), B::Error> {
        for item in &self.items {
            match *item {
                RenderItem::MaskRect { rect, color, .. } => backend.draw_mask_rect(rect, color)?,
                RenderItem::SelectionBorder {
                    rect, color, width, ..
                } => backend.draw_selection_border(rect, color, width)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::z_order;

    #[test]
    fn sort_puts_mask_below_border() {
        let mut list = RenderList::new();
        list.submit(RenderItem::SelectionBorder {
            rect: Rectangle::ZERO,
            color: Color::RED,
            width: 2.0,
            z_order: z_order::SELECTION_BORDER,
        });
        list.submit(RenderItem::MaskRect {
            rect: Rectangle::ZERO,
            color: Color::BLACK,
            z_order: z_order::MASK,
        });

        list.sort_by_z_order();
        let orders: Vec<i32> = list.iter().map(|i| i.z_order()).collect();
        assert_eq!(orders, vec![z_order::MASK, z_order::SELECTION_BORDER]);
    }

    #[test]
    fn execute_visits_items_in_order() {
        struct Recorder(Vec<&'static str>);
        impl RenderBackend for Recorder {
            type Error = ();
            fn draw_mask_rect(&mut self, _: Rectangle, _: Color) -> Result<(), ()> {
                self.0.push("mask");
                Ok(())
            }
            fn draw_selection_border(
                &mut self,
                _: Rectangle,
                _: Color,
                _: f32,
            ) -> Result<(), ()> {
                self.0.push("border");
                Ok(())
            }
        }

        let mut list = RenderList::new();
        list.submit(RenderItem::MaskRect {
            rect: Rectangle::ZERO,
            color: Color::BLACK,
            z_order: z_order::MASK,
        });
        list.submit(RenderItem::SelectionBorder {
            rect: Rectangle::ZERO,
            color: Color::RED,
            width: 2.0,
            z_order: z_order::SELECTION_BORDER,
        });

        let mut recorder = Recorder(Vec::new());
        list.execute(&mut recorder).unwrap();
        assert_eq!(recorder.0, vec!["mask", "border"]);
    }
}
