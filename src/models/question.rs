/// One answer a player can pick for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [AnswerOption; 3],
}

impl Question {
    /// Smallest number of points this question can award.
    pub fn min_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).min().unwrap_or(0)
    }

    /// Largest number of points this question can award.
    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }
}
