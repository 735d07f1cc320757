#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Fun => "Fun",
            Self::Misc => "Misc",
        }
    }

    /// Decorative emoji shown next to the label in menus and reports.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Home => "🏠",
            Self::Work => "💼",
            Self::Fun => "🎉",
            Self::Misc => "✨",
        }
    }

    /// Parse a stored label. Case-insensitive, and tolerates a leading emoji
    /// (older rows were written as e.g. "🍔 Food").
    pub fn parse(s: &str) -> Option<Self> {
        let label = s
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_lowercase();
        match label.as_str() {
            "food" => Some(Self::Food),
            "home" => Some(Self::Home),
            "work" => Some(Self::Work),
            "fun" => Some(Self::Fun),
            "misc" => Some(Self::Misc),
            _ => None,
        }
    }

    /// Menu order. Selection numbers shown to the user are 1-based indexes into this.
    pub fn all() -> &'static [Category] {
        &[Self::Food, Self::Home, Self::Work, Self::Fun, Self::Misc]
    }

    /// Map a 1-based menu selection to a category.
    pub fn from_selection(selection: i64) -> Option<Self> {
        let index = usize::try_from(selection).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
