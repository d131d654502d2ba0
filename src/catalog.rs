//! Static site content. Controllers never mutate anything in here; adding or
//! removing entries requires no code changes elsewhere.

use crate::models::{Experience, NavLink, Project, ProjectCategory, Skill, SocialLink};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", target: "home" },
    NavLink { label: "About", target: "about" },
    NavLink { label: "Skills", target: "skills" },
    NavLink { label: "Experience", target: "experience" },
    NavLink { label: "Projects", target: "projects" },
    NavLink { label: "Contact", target: "contact" },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Rust",
        icon: "fab fa-rust",
        color: "#DEA584",
        percent: 92,
        blurb: "My daily driver for backends, CLIs and WASM frontends — ownership keeps whole bug classes out of my code.",
    },
    Skill {
        name: "WebAssembly",
        icon: "fas fa-cube",
        color: "#654FF0",
        percent: 86,
        blurb: "Shipping Rust to the browser; this very site is compiled to WASM.",
    },
    Skill {
        name: "JavaScript",
        icon: "fab fa-js",
        color: "#F7E018",
        percent: 88,
        blurb: "Still the glue of the web — I reach for it wherever the platform does.",
    },
    Skill {
        name: "TypeScript",
        icon: "fas fa-code",
        color: "#3178C6",
        percent: 84,
        blurb: "Types at the seams make large frontends survivable.",
    },
    Skill {
        name: "HTML5",
        icon: "fab fa-html5",
        color: "#E44D26",
        percent: 95,
        blurb: "Semantic markup first; everything else layers on top.",
    },
    Skill {
        name: "CSS3",
        icon: "fab fa-css3-alt",
        color: "#264DE4",
        percent: 90,
        blurb: "Grid, custom properties and keyframe animation without a framework in sight.",
    },
    Skill {
        name: "React",
        icon: "fab fa-react",
        color: "#61DAFB",
        percent: 82,
        blurb: "Component thinking I now carry into every UI, whatever the framework.",
    },
    Skill {
        name: "Node.js",
        icon: "fab fa-node-js",
        color: "#3C873A",
        percent: 80,
        blurb: "Quick services and tooling when the team already lives in npm.",
    },
    Skill {
        name: "PostgreSQL",
        icon: "fas fa-database",
        color: "#336791",
        percent: 78,
        blurb: "The default answer to \"where do we put the data?\".",
    },
    Skill {
        name: "Docker",
        icon: "fab fa-docker",
        color: "#2496ED",
        percent: 81,
        blurb: "Reproducible builds and deploys, from laptop to cluster.",
    },
    Skill {
        name: "Git & GitHub",
        icon: "fab fa-github",
        color: "#FFFFFF",
        percent: 89,
        blurb: "Small commits, honest history, reviewable diffs.",
    },
    Skill {
        name: "REST APIs",
        icon: "fas fa-plug",
        color: "#EAB308",
        percent: 85,
        blurb: "Designing boring, predictable interfaces other teams enjoy consuming.",
    },
    Skill {
        name: "GraphQL",
        icon: "fas fa-diagram-project",
        color: "#E10098",
        percent: 72,
        blurb: "When clients need to shape their own payloads.",
    },
    Skill {
        name: "Linux",
        icon: "fab fa-linux",
        color: "#FCC624",
        percent: 87,
        blurb: "Home turf — servers, containers and the desktop I work on.",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        icon: "fas fa-chalkboard-teacher",
        role: "Programming Mentor",
        company: "Codeward Academy",
        location: "Pune, Maharashtra",
        period: "May 2021 - Dec 2021",
        summary: "Coached students through their first real programs, ran weekend \
                  workshops on web fundamentals and code review habits.",
    },
    Experience {
        icon: "fas fa-laptop-code",
        role: "Frontend Developer",
        company: "Freelance / Remote",
        location: "Remote",
        period: "Jan 2022 - Aug 2022",
        summary: "Built mobile-first marketing sites and dashboards for clients, \
                  with an emphasis on load time and accessibility.",
    },
    Experience {
        icon: "fas fa-server",
        role: "Full Stack Developer",
        company: "Meridian Systems",
        location: "Pune, Maharashtra",
        period: "Sep 2022 - Present",
        summary: "Designing and operating Rust services with typed web frontends; \
                  owning features from schema to pixels.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Fleet Telemetry Dashboard",
        summary: "Live map and health board for a delivery fleet, streaming vehicle telemetry to the browser.",
        tech: &["Rust", "WebSockets", "PostgreSQL", "TypeScript"],
        link: "https://github.com/aarav-deshmukh/fleet-telemetry",
        category: ProjectCategory::Company,
        case_study: "Replaced a nightly CSV import with a streaming pipeline. A Rust \
                     ingest service fans vehicle pings out over WebSockets while \
                     PostgreSQL keeps the queryable history; the dashboard stays \
                     under a second behind the road.",
    },
    Project {
        title: "Invoice Automation Suite",
        summary: "Internal tool that turns signed delivery notes into reconciled invoices.",
        tech: &["Rust", "REST", "React"],
        link: "https://github.com/aarav-deshmukh/invoice-suite",
        category: ProjectCategory::Company,
        case_study: "Accounting spent two days a month matching paperwork by hand. \
                     The suite OCRs delivery notes, matches them against orders and \
                     drafts the invoice for one-click approval — the backlog now \
                     clears in an afternoon.",
    },
    Project {
        title: "Warehouse Picking API",
        summary: "Route-optimised picking lists served to handheld scanners on the warehouse floor.",
        tech: &["Rust", "Redis", "gRPC"],
        link: "https://github.com/aarav-deshmukh/picking-api",
        category: ProjectCategory::Company,
        case_study: "Orders used to be picked in submission order, walking the same \
                     aisles repeatedly. Batching by shelf zone and serving routes \
                     over gRPC cut average walk distance per order by a third.",
    },
    Project {
        title: "Trail Companion",
        summary: "Offline-first hiking app with route tracking and elevation profiles.",
        tech: &["Flutter", "Rust core", "SQLite"],
        link: "https://github.com/aarav-deshmukh/trail-companion",
        category: ProjectCategory::Mobile,
        case_study: "GPS tracks, maps and waypoints all live on-device; a shared Rust \
                     core does the geometry so the iOS and Android builds can't drift \
                     apart. Sync is a courtesy, not a requirement.",
    },
    Project {
        title: "Split Bills",
        summary: "Group expense tracker that settles debts in the fewest transfers.",
        tech: &["React Native", "Node.js", "MongoDB"],
        link: "https://github.com/aarav-deshmukh/split-bills",
        category: ProjectCategory::Mobile,
        case_study: "The fun part is the settlement graph: netting who-owes-whom down \
                     to a minimal set of transfers. The rest is making expense entry \
                     fast enough that people actually do it at the table.",
    },
    Project {
        title: "Portfolio Website",
        summary: "This site — a single-page portfolio rendered from Rust components.",
        tech: &["Rust", "Dioxus", "WASM", "CSS"],
        link: "https://github.com/aarav-deshmukh/dx_portfolio",
        category: ProjectCategory::Personal,
        case_study: "An experiment in taking a component framework all the way to \
                     marketing-page territory: signals for view state, CSS for every \
                     animation, and no JavaScript written by hand.",
    },
    Project {
        title: "Weekend Ray Tracer",
        summary: "A path tracer grown from a weekend project into a small renderer.",
        tech: &["Rust", "Rayon"],
        link: "https://github.com/aarav-deshmukh/weekend-tracer",
        category: ProjectCategory::Personal,
        case_study: "Started as the classic book exercise, kept growing: BVH \
                     acceleration, textured materials and a tile scheduler that keeps \
                     every core busy. Render times went from minutes to seconds.",
    },
    Project {
        title: "Home Server Dashboard",
        summary: "One page of glanceable status for the machines in my closet.",
        tech: &["Rust", "Axum", "SQLite"],
        link: "https://github.com/aarav-deshmukh/homelab-dash",
        category: ProjectCategory::Personal,
        case_study: "Tiny agents push disk, temperature and backup status to an Axum \
                     collector; the page renders red before the NAS dies instead of \
                     after. Has paid for itself twice.",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "fab fa-github", url: "https://github.com/aarav-deshmukh", color: "#FFFFFF" },
    SocialLink { icon: "fab fa-linkedin", url: "https://linkedin.com/in/aarav-deshmukh", color: "#0A66C2" },
    SocialLink { icon: "fab fa-twitter", url: "https://twitter.com/aaravbuilds", color: "#1DA1F2" },
    SocialLink { icon: "fas fa-envelope", url: "mailto:hello@aarav.dev", color: "#EA4335" },
];

/// Projects shown for a category tab, in catalog order. Recomputed on every
/// render; nothing is memoized.
pub fn projects_in(category: ProjectCategory) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_tab_has_projects() {
        for cat in ProjectCategory::ALL {
            assert!(projects_in(cat).count() > 0, "empty tab: {}", cat.label());
        }
    }

    #[test]
    fn category_filter_matches_and_preserves_order() {
        for cat in ProjectCategory::ALL {
            let filtered: Vec<&str> = projects_in(cat).map(|p| p.title).collect();
            let expected: Vec<&str> = PROJECTS
                .iter()
                .filter(|p| p.category == cat)
                .map(|p| p.title)
                .collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn category_subsets_cover_the_whole_catalog() {
        let total: usize = ProjectCategory::ALL
            .iter()
            .map(|&cat| projects_in(cat).count())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn skill_percentages_are_sane() {
        for skill in SKILLS {
            assert!(skill.percent <= 100, "{} over 100%", skill.name);
        }
    }

    #[test]
    fn nav_targets_are_unique() {
        for (i, a) in NAV_LINKS.iter().enumerate() {
            assert!(!a.target.is_empty());
            for b in &NAV_LINKS[i + 1..] {
                assert_ne!(a.target, b.target);
            }
        }
    }
}
