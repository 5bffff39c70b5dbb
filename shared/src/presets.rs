use crate::color::palette_color;
use crate::entry::Entry;

/// Entry lists backing the landing-page variants of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    #[default]
    YesNo,
    Raffle,
    Prize,
    Lunch,
    Dinner,
    TeamPicker,
    Numbers,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::YesNo,
        Preset::Raffle,
        Preset::Prize,
        Preset::Lunch,
        Preset::Dinner,
        Preset::TeamPicker,
        Preset::Numbers,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Preset::YesNo => "yes-or-no",
            Preset::Raffle => "raffle-wheel",
            Preset::Prize => "prize-wheel",
            Preset::Lunch => "lunch-decisions",
            Preset::Dinner => "what-for-dinner",
            Preset::TeamPicker => "team-picker",
            Preset::Numbers => "number-wheel",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn title(self) -> &'static str {
        match self {
            Preset::YesNo => "Yes or No Wheel",
            Preset::Raffle => "Raffle Wheel",
            Preset::Prize => "Prize Wheel",
            Preset::Lunch => "Lunch Decision Wheel",
            Preset::Dinner => "What's for Dinner?",
            Preset::TeamPicker => "Team Picker",
            Preset::Numbers => "Number Wheel",
        }
    }

    pub fn labels(self) -> Vec<String> {
        let fixed: &[&str] = match self {
            Preset::YesNo => &["Yes", "No"],
            Preset::Raffle => &["Ticket 1", "Ticket 2", "Ticket 3", "Ticket 4", "Ticket 5", "Ticket 6"],
            Preset::Prize => &["Gift Card", "T-Shirt", "Sticker", "Mug", "Try Again", "Grand Prize"],
            Preset::Lunch => &["Pizza", "Sushi", "Burgers", "Salad", "Tacos", "Ramen", "Sandwich", "Curry"],
            Preset::Dinner => &["Pasta", "Stir Fry", "Steak", "Soup", "Takeout"],
            Preset::TeamPicker => &["Team Red", "Team Blue", "Team Green", "Team Yellow"],
            Preset::Numbers => return (1..=10).map(|n| n.to_string()).collect(),
        };
        fixed.iter().map(|s| s.to_string()).collect()
    }

    pub fn entries(self) -> Vec<Entry> {
        if self == Preset::YesNo {
            return vec![Entry::new("Yes", "#22c55e"), Entry::new("No", "#ef4444")];
        }
        self.labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| Entry::new(label, palette_color(i)))
            .collect()
    }
}
