use core::fmt;

/// Binary scaled size units, labelled the French way (`o` for octet).
///
/// Each unit is 1024 times the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// Octet, 1 byte.
    Octet,
    /// Kilooctet, 2^10 bytes.
    Kilo,
    /// Megaoctet, 2^20 bytes.
    Mega,
    /// Gigaoctet, 2^30 bytes.
    Giga,
    /// Teraoctet, 2^40 bytes.
    Tera,
    /// Petaoctet, 2^50 bytes.
    Peta,
    /// Exaoctet, 2^60 bytes.
    Exa,
    /// Zettaoctet, 2^70 bytes.
    Zetta,
    /// Yottaoctet, 2^80 bytes.
    Yotta,
}

impl Unit {
    /// All units, from the smallest to the largest.
    pub const ALL: [Self; 9] = [
        Self::Octet,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zetta,
        Self::Yotta,
    ];

    /// Short label written after the number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Octet => "o",
            Self::Kilo => "ko",
            Self::Mega => "Mo",
            Self::Giga => "Go",
            Self::Tera => "To",
            Self::Peta => "Po",
            Self::Exa => "Eo",
            Self::Zetta => "Zo",
            Self::Yotta => "Yo",
        }
    }

    /// Position of the unit in [`Unit::ALL`], which is also its power of 1024.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Octet => 0,
            Self::Kilo => 1,
            Self::Mega => 2,
            Self::Giga => 3,
            Self::Tera => 4,
            Self::Peta => 5,
            Self::Exa => 6,
            Self::Zetta => 7,
            Self::Yotta => 8,
        }
    }

    /// Number of bytes in one of this unit.
    #[must_use]
    pub fn factor(self) -> f64 {
        1024_f64.powi(i32::from(self.index()))
    }

    /// Select the unit to display `size` bytes with, and the value expressed in it.
    ///
    /// The unit is `floor(log2(size) / 10)`, clamped to the known units:
    /// sizes under one byte stay in octets, sizes over 1024 `Yo` stay in `Yo`.
    #[must_use]
    pub fn for_byte_count(size: f64) -> (Self, f64) {
        let power = (size.log2() / 10.).floor();
        let last = Self::ALL.len() - 1;
        // Negative powers fail the conversion and stay in octets.
        let idx = cast::usize(power).map_or(0, |idx| idx.min(last));
        let unit = Self::ALL[idx];
        (unit, size / unit.factor())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn labels_in_order() {
        let labels: Vec<_> = Unit::ALL.iter().map(|unit| unit.label()).collect();
        assert_eq!(labels, ["o", "ko", "Mo", "Go", "To", "Po", "Eo", "Zo", "Yo"]);
        for (idx, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(usize::from(unit.index()), idx);
        }
    }

    #[test]
    fn factors() {
        assert_eq!(Unit::Octet.factor(), 1.);
        assert_eq!(Unit::Kilo.factor(), 1024.);
        assert_eq!(Unit::Giga.factor(), 1_073_741_824.);
        assert_eq!(Unit::Yotta.factor(), 2_f64.powi(80));
    }

    #[test]
    fn unit_selection() {
        assert_eq!(Unit::for_byte_count(1.), (Unit::Octet, 1.));
        assert_eq!(Unit::for_byte_count(1023.), (Unit::Octet, 1023.));
        assert_eq!(Unit::for_byte_count(1024.), (Unit::Kilo, 1.));
        assert_eq!(Unit::for_byte_count(1536.), (Unit::Kilo, 1.5));
        assert_eq!(Unit::for_byte_count(3. * 1024. * 1024.), (Unit::Mega, 3.));
    }

    #[test]
    fn below_one_byte() {
        assert_eq!(Unit::for_byte_count(0.5), (Unit::Octet, 0.5));
        assert_eq!(Unit::for_byte_count(f64::MIN_POSITIVE).0, Unit::Octet);
    }

    #[test]
    fn clamp_to_largest_unit() {
        assert_eq!(Unit::for_byte_count(2_f64.powi(90)), (Unit::Yotta, 1024.));
        assert_eq!(Unit::for_byte_count(f64::MAX).0, Unit::Yotta);
    }

    #[test]
    fn display() {
        assert_eq!(Unit::Mega.to_string(), "Mo");
        assert_eq!(format!("{} {}", 12, Unit::Tera), "12 To");
    }
}
