use std::ops::RangeInclusive;

/// Visual theme of a personality band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Slate,
    Ocean,
    Ember,
    Emerald,
    Royal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityBand {
    pub min_score: u32,
    pub max_score: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub color: ColorKey,
}

impl PersonalityBand {
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min_score..=self.max_score
    }

    pub fn contains(&self, score: u32) -> bool {
        self.range().contains(&score)
    }
}
