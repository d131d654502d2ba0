pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod nav_menu;
pub mod navbar;
pub mod particles;
pub mod projects;
pub mod scroll_top;
pub mod skills;
pub mod transition_overlay;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_menu::NavMenu;
pub use navbar::Navbar;
pub use particles::Particles;
pub use projects::Projects;
pub use scroll_top::ScrollTopButton;
pub use skills::Skills;
pub use transition_overlay::TransitionOverlay;
