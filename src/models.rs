#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Company,
    Mobile,
    Personal,
}

impl ProjectCategory {
    /// Tab order; the first entry is the tab shown on load.
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Company,
        ProjectCategory::Mobile,
        ProjectCategory::Personal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Company => "Company",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Personal => "Personal",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub percent: u8,
    pub blurb: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub category: ProjectCategory,
    pub case_study: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Experience {
    pub icon: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub url: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    /// Id of the section element the navigator scrolls to.
    pub target: &'static str,
}
