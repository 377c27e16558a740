//! Page navigation state: sections, scrolling, menu and scroll-triggered reveal

/// Sections of the page, in the order they appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Types,
    Benefits,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Types,
        Section::Benefits,
        Section::Contact,
    ];

    /// Sections laid out on the scrolling page (Contact has its own view)
    pub const SCROLLED: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Types,
        Section::Benefits,
    ];

    pub fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Types => "nav.types",
            Self::Benefits => "nav.benefits",
            Self::Contact => "nav.contact",
        }
    }

    /// Rows the section occupies on the page
    pub fn height(self) -> u16 {
        match self {
            Self::Home => 7,
            Self::About => 6,
            Self::Types => 3 + YogaType::ALL.len() as u16 * 4,
            Self::Benefits => 7,
            Self::Contact => 0,
        }
    }

    /// First row of the section on the page
    pub fn offset(self) -> u16 {
        Self::SCROLLED
            .iter()
            .take_while(|s| **s != self)
            .map(|s| s.height())
            .sum()
    }

    /// Section the navbar marks as current when the page is scrolled to `offset`
    pub fn at(offset: u16) -> Section {
        let probe = offset.saturating_add(ScrollState::NAVBAR_HEIGHT);
        Self::SCROLLED
            .iter()
            .rev()
            .find(|s| s.offset() <= probe)
            .copied()
            .unwrap_or(Section::Home)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Total rows of the scrolling page
pub fn page_height() -> u16 {
    Section::SCROLLED.iter().map(|s| s.height()).sum()
}

/// Yoga styles presented as cards in the Types section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YogaType {
    Hatha,
    Vinyasa,
    Ashtanga,
    Kundalini,
}

impl YogaType {
    pub const ALL: [YogaType; 4] = [
        YogaType::Hatha,
        YogaType::Vinyasa,
        YogaType::Ashtanga,
        YogaType::Kundalini,
    ];

    pub fn name_key(self) -> &'static str {
        match self {
            Self::Hatha => "types.hatha.name",
            Self::Vinyasa => "types.vinyasa.name",
            Self::Ashtanga => "types.ashtanga.name",
            Self::Kundalini => "types.kundalini.name",
        }
    }

    pub fn body_key(self) -> &'static str {
        match self {
            Self::Hatha => "types.hatha.body",
            Self::Vinyasa => "types.vinyasa.body",
            Self::Ashtanga => "types.ashtanga.body",
            Self::Kundalini => "types.kundalini.body",
        }
    }
}

/// Vertical scroll position plus the navbar effects that depend on it
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub offset: u16,
    last_offset: u16,
    navbar_hidden: bool,
}

impl ScrollState {
    /// Past this offset the navbar switches to its compact "scrolled" style
    pub const SCROLLED_THRESHOLD: u16 = 2;
    /// Scrolling down past this offset hides the navbar
    pub const HIDE_THRESHOLD: u16 = 4;
    /// Past this offset the back-to-top control is shown
    pub const BACK_TO_TOP_THRESHOLD: u16 = 12;
    /// Rows the navbar covers; section jumps land below it
    pub const NAVBAR_HEIGHT: u16 = 3;

    pub fn scroll_to(&mut self, offset: u16) {
        let offset = offset.min(page_height().saturating_sub(1));
        self.navbar_hidden = offset > self.last_offset && offset > Self::HIDE_THRESHOLD;
        self.last_offset = offset;
        self.offset = offset;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(target as u16);
    }

    /// Jump so the section starts just below the navbar
    pub fn scroll_to_section(&mut self, section: Section) {
        self.scroll_to(section.offset().saturating_sub(Self::NAVBAR_HEIGHT));
    }

    pub fn to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn navbar_visible(&self) -> bool {
        !self.navbar_hidden
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > Self::SCROLLED_THRESHOLD
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.offset > Self::BACK_TO_TOP_THRESHOLD
    }
}

/// Collapsible navigation menu
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub open: bool,
    pub selected: usize,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Section::ALL.len() - 1);
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.selected.min(Section::ALL.len() - 1)]
    }
}

/// Sections that have scrolled into view at least once
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: [bool; Section::ALL.len()],
}

impl RevealState {
    /// Mark every section intersecting the viewport `[offset, offset + height)`
    pub fn observe(&mut self, offset: u16, height: u16) {
        let end = offset.saturating_add(height);
        for section in Section::SCROLLED {
            let start = section.offset();
            let stop = start + section.height();
            if start < end && offset < stop {
                self.revealed[section.index()] = true;
            }
        }
    }

    pub fn reveal(&mut self, section: Section) {
        self.revealed[section.index()] = true;
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()]
    }
}
