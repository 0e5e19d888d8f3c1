/// Distance from the top of the viewport used to decide which section is active.
pub const PROBE_LINE: f64 = 100.0;
/// Scroll offset after which the navbar switches to its compact style.
pub const SCROLLED_OFFSET: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Education,
    Experience,
    LeetCode,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Experience,
        SectionId::LeetCode,
        SectionId::Contact,
    ];

    pub const FOOTER: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::LeetCode => "leetcode",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::LeetCode => "LeetCode",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        match value.trim_start_matches('#') {
            "about" => Self::About,
            "projects" => Self::Projects,
            "education" => Self::Education,
            "experience" => Self::Experience,
            "leetcode" => Self::LeetCode,
            "contact" => Self::Contact,
            _ => Self::Home,
        }
    }
}

/// Viewport-relative vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles_probe(&self) -> bool {
        self.top <= PROBE_LINE && self.bottom >= PROBE_LINE
    }
}

/// First section crossing the probe line, in the order given.
///
/// `None` means no section covers the line (e.g. between sections), and the
/// caller should keep whatever was highlighted before.
pub fn active_section<I>(bounds: I) -> Option<SectionId>
where
    I: IntoIterator<Item = SectionBounds>,
{
    bounds
        .into_iter()
        .find(SectionBounds::straddles_probe)
        .map(|b| b.section)
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(section: SectionId, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            section,
            top,
            bottom: top + height,
        }
    }

    #[test]
    fn test_active_at_top_of_page() {
        let layout = vec![
            bounds(SectionId::Home, 0.0, 900.0),
            bounds(SectionId::About, 900.0, 800.0),
        ];
        assert_eq!(active_section(layout), Some(SectionId::Home));
    }

    #[test]
    fn test_active_after_scrolling() {
        // scrolled 1300px down
        let layout = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| bounds(*s, i as f64 * 600.0 - 1300.0, 600.0))
            .collect::<Vec<_>>();
        assert_eq!(active_section(layout), Some(SectionId::Projects));
    }

    #[test]
    fn test_probe_line_is_inclusive() {
        let layout = vec![
            bounds(SectionId::Education, -500.0, 600.0),
            bounds(SectionId::Experience, 100.0, 600.0),
        ];
        // Education ends exactly on the line and wins by order
        assert_eq!(active_section(layout), Some(SectionId::Education));
    }

    #[test]
    fn test_no_active_section_in_gap() {
        let layout = vec![
            bounds(SectionId::About, -400.0, 450.0),
            bounds(SectionId::Projects, 150.0, 600.0),
        ];
        assert_eq!(active_section(layout), None);
        assert_eq!(active_section(Vec::new()), None);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_ids_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from(section.id()), section);
            assert_eq!(SectionId::from(section.href().as_str()), section);
        }
        assert_eq!(SectionId::from("nowhere"), SectionId::Home);
        assert_eq!(SectionId::LeetCode.label(), "LeetCode");
    }
}
