// gauge.rs
//! Multibagger score dial and its factor breakdown dialog.

pub const MAX_SCORE: u8 = 100;
pub const MAX_FACTOR_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor {
    pub name: &'static str,
    /// Share of the total score, in percent.
    pub weight: u8,
    pub description: &'static str,
    pub score: u8,
}

impl Factor {
    pub fn weight_label(&self) -> String {
        format!("Weight {}%", self.weight)
    }

    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, MAX_FACTOR_SCORE)
    }
}

pub fn total_weight(factors: &[Factor]) -> u32 {
    factors.iter().map(|f| u32::from(f.weight)).sum()
}

/// Dial fill in `[0, 1]`.
pub fn fill_fraction(score: u8) -> f32 {
    f32::from(score.min(MAX_SCORE)) / f32::from(MAX_SCORE)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaugeModal {
    open: bool,
}

impl GaugeModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_clamped() {
        assert_eq!(fill_fraction(0), 0.0);
        assert_eq!(fill_fraction(82), 0.82);
        assert_eq!(fill_fraction(250), 1.0);
    }

    #[test]
    fn modal_opens_and_closes() {
        let mut modal = GaugeModal::default();
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }
}
