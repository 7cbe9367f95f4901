use std::fmt;

/// Output slot of a weight, 1 (Thin) through 9 (Black)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightSlot(u8);

impl WeightSlot {
    /// The regular (400) weight every module must carry
    pub const BASELINE: WeightSlot = WeightSlot(4);

    /// Map a standard OS/2 weight class to its slot.
    ///
    /// Only the nine values 100, 200, ... 900 have a slot.
    pub fn from_weight_class(weight_class: u16) -> Option<Self> {
        if weight_class % 100 == 0 && (100..=900).contains(&weight_class) {
            Some(WeightSlot((weight_class / 100) as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Standard weight class of the slot
    pub fn weight_class(self) -> u16 {
        self.0 as u16 * 100
    }

    pub fn is_baseline(self) -> bool {
        self == Self::BASELINE
    }

    /// File name the slot's font is installed under
    pub fn file_name(self) -> String {
        format!("fontw{}.ttf", self.0)
    }
}

impl fmt::Display for WeightSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common name of a standard weight class
pub fn weight_name(weight_class: u16) -> &'static str {
    match weight_class {
        100 => "Thin",
        200 => "ExtraLight",
        300 => "Light",
        400 => "Regular",
        500 => "Medium",
        600 => "SemiBold",
        700 => "Bold",
        800 => "ExtraBold",
        900 => "Black",
        _ => "Non-standard",
    }
}
