/// Scroll offset, in pixels, past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        path: "/",
    },
    NavItem {
        name: "About",
        path: "/about",
    },
    NavItem {
        name: "Experiences",
        path: "/experiences",
    },
    NavItem {
        name: "Projects",
        path: "/projects",
    },
    NavItem {
        name: "Contact",
        path: "/contact",
    },
];

impl NavItem {
    pub fn is_active(&self, pathname: &str) -> bool {
        let pathname = match pathname.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        self.path == pathname
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Unscrolled,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(y: f64) -> Self {
        if y > SCROLL_THRESHOLD {
            Self::Scrolled
        } else {
            Self::Unscrolled
        }
    }
}
