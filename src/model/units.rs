//! Unit conversions for OOXML measurements.
//!
//! The model stores measurements in the units WordprocessingML uses on
//! the wire: font sizes in half-points, paragraph spacing in twentieths
//! of a point, indents and page margins in twips, and image extents in
//! EMUs (914,400 per inch).

/// Convert points to half-points (`w:sz`).
pub fn half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}

/// Convert points to twentieths of a point (`w:spacing`).
pub fn pt_to_twentieths(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

/// Convert centimeters to twips (`w:ind`, `w:pgMar`).
pub fn cm_to_twips(cm: f32) -> u32 {
    (cm * 566.93).round() as u32
}

/// Convert inches to EMUs (`wp:extent`).
pub fn inches_to_emu(inches: f32) -> u32 {
    (inches * 914_400.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_points() {
        assert_eq!(half_points(10.5), 21);
        assert_eq!(half_points(9.5), 19);
        assert_eq!(half_points(22.0), 44);
    }

    #[test]
    fn test_pt_to_twentieths() {
        assert_eq!(pt_to_twentieths(18.0), 360);
        assert_eq!(pt_to_twentieths(4.0), 80);
    }

    #[test]
    fn test_cm_to_twips() {
        assert_eq!(cm_to_twips(2.5), 1417);
        assert_eq!(cm_to_twips(3.0), 1701);
    }

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(5.5), 5_029_200);
        assert_eq!(inches_to_emu(1.0), 914_400);
    }
}
