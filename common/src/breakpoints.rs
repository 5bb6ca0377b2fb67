use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        };
        write!(f, "{}", name)
    }
}

// maximum viewport widths, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

pub const BREAKPOINTS: Breakpoints = Breakpoints {
    xs: 500,
    sm: 850,
    md: 1000,
    lg: 1275,
    xl: 1800,
};

impl Default for Breakpoints {
    fn default() -> Self {
        BREAKPOINTS
    }
}

// one flag per breakpoint, true when the viewport is at most that wide
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQueries {
    pub xs: bool,
    pub sm: bool,
    pub md: bool,
    pub lg: bool,
    pub xl: bool,
}

impl Breakpoints {
    pub fn threshold(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    pub fn resolve(&self, width: u32) -> MediaQueries {
        MediaQueries {
            xs: width <= self.xs,
            sm: width <= self.sm,
            md: width <= self.md,
            lg: width <= self.lg,
            xl: width <= self.xl,
        }
    }

    pub fn max_width_query(&self, breakpoint: Breakpoint) -> String {
        format!("(max-width: {}px)", self.threshold(breakpoint))
    }
}

pub fn resolve_breakpoints(width: u32) -> MediaQueries {
    BREAKPOINTS.resolve(width)
}
