//! Slide data model.
//!
//! A [`Deck`] is a tree of static string slices: topics hold screens, screens
//! hold the fragments that are revealed one after another.

/// One piece of markdown revealed in a single step.
pub type Fragment = &'static str;

/// One slide, revealed fragment by fragment.
pub type Screen = &'static [Fragment];

/// A named group of screens.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub screens: &'static [Screen],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Deck {
    pub topics: &'static [Topic],
}

impl Deck {
    /// All screens in topic order, then screen order within each topic.
    pub fn screens(&self) -> impl Iterator<Item = Screen> + '_ {
        self.topics
            .iter()
            .flat_map(|topic| topic.screens.iter().copied())
    }

    pub fn screen_count(&self) -> usize {
        self.topics.iter().map(|topic| topic.screens.len()).sum()
    }
}
