use super::cell::Color;

/// Supplies colors for cells that come alive without a colored neighbor to inherit from.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Hands out a fixed list of colors in order, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct CycleColors {
    colors: Vec<Color>,
    next: usize,
}

impl CycleColors {
    pub fn new(colors: Vec<Color>) -> Self {
        assert!(!colors.is_empty());
        Self { colors, next: 0 }
    }
}

impl ColorSource for CycleColors {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}
