use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::GenerateError;

/// The client brands an icon set can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Guara,
    ValeDasMinas,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Guara, Brand::ValeDasMinas];

    /// Key accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Brand::Guara => "guara",
            Brand::ValeDasMinas => "vale_das_minas",
        }
    }

    /// Directory name under the icons root. Differs from the key for Vale das Minas.
    pub fn dir_alias(self) -> &'static str {
        match self {
            Brand::Guara => "guara",
            Brand::ValeDasMinas => "valedasminas",
        }
    }

    pub fn color(self) -> Rgba<u8> {
        match self {
            // #1976D2
            Brand::Guara => Rgba([25, 118, 210, 255]),
            // #4CAF50
            Brand::ValeDasMinas => Rgba([76, 175, 80, 255]),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Brand::Guara => 'G',
            Brand::ValeDasMinas => 'V',
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Brand::Guara => "Guará Park",
            Brand::ValeDasMinas => "Vale das Minas",
        }
    }
}

impl FromStr for Brand {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .into_iter()
            .find(|brand| brand.key() == s)
            .ok_or_else(|| GenerateError::InvalidInput(s.to_string()))
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
