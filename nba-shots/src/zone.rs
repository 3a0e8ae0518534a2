use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the six court regions used to bucket shot attempts.
///
/// The declaration order is the display order of every chart axis and
/// details listing: RA, NRA, MR, LC3, RC3, AB3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShotZone {
    RestrictedArea,
    NonRestrictedArea,
    MidRange,
    LeftCorner3,
    RightCorner3,
    AboveTheBreak3,
}

impl ShotZone {
    /// All zones in display order.
    pub const ALL: [ShotZone; 6] = [
        ShotZone::RestrictedArea,
        ShotZone::NonRestrictedArea,
        ShotZone::MidRange,
        ShotZone::LeftCorner3,
        ShotZone::RightCorner3,
        ShotZone::AboveTheBreak3,
    ];

    /// Short code used as the JSON key by the statistics endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            ShotZone::RestrictedArea => "RA",
            ShotZone::NonRestrictedArea => "NRA",
            ShotZone::MidRange => "MR",
            ShotZone::LeftCorner3 => "LC3",
            ShotZone::RightCorner3 => "RC3",
            ShotZone::AboveTheBreak3 => "AB3",
        }
    }

    /// Human-readable label for details panels.
    pub fn label(&self) -> &'static str {
        match self {
            ShotZone::RestrictedArea => "Restricted Area",
            ShotZone::NonRestrictedArea => "In The Paint (Non-RA)",
            ShotZone::MidRange => "Mid-Range",
            ShotZone::LeftCorner3 => "Left Corner 3",
            ShotZone::RightCorner3 => "Right Corner 3",
            ShotZone::AboveTheBreak3 => "Above the Break 3",
        }
    }

    /// Points scored by a make from this zone.
    pub fn point_value(&self) -> u8 {
        if self.is_three() {
            3
        } else {
            2
        }
    }

    pub fn is_three(&self) -> bool {
        matches!(
            self,
            ShotZone::LeftCorner3 | ShotZone::RightCorner3 | ShotZone::AboveTheBreak3
        )
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ShotZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ShotZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShotZone::ALL
            .into_iter()
            .find(|zone| zone.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shot zone: {}", s))
    }
}

impl Serialize for ShotZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A value for each of the six zones, always iterated in display order.
///
/// Backed by a fixed array, so a `ZoneMap` can never be missing a zone and
/// its order never depends on how the source payload ordered its keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMap<T>([T; 6]);

impl<T> ZoneMap<T> {
    /// Build a map by evaluating `f` once per zone, in display order.
    pub fn try_from_fn<E>(mut f: impl FnMut(ShotZone) -> Result<T, E>) -> Result<Self, E> {
        let [a, b, c, d, e, g] = ShotZone::ALL;
        Ok(ZoneMap([f(a)?, f(b)?, f(c)?, f(d)?, f(e)?, f(g)?]))
    }

    pub fn from_fn(mut f: impl FnMut(ShotZone) -> T) -> Self {
        ZoneMap(ShotZone::ALL.map(&mut f))
    }

    pub fn get(&self, zone: ShotZone) -> &T {
        &self.0[zone.index()]
    }

    /// Iterate `(zone, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ShotZone, &T)> {
        ShotZone::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(ShotZone, &T) -> U) -> ZoneMap<U> {
        ZoneMap::from_fn(|zone| f(zone, self.get(zone)))
    }
}

impl<T: Serialize> Serialize for ZoneMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        for (zone, value) in self.iter() {
            map.serialize_entry(zone.code(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_order_and_codes() {
        let codes: Vec<&str> = ShotZone::ALL.iter().map(|z| z.code()).collect();
        assert_eq!(codes, vec!["RA", "NRA", "MR", "LC3", "RC3", "AB3"]);
    }

    #[test]
    fn test_point_values() {
        assert_eq!(ShotZone::RestrictedArea.point_value(), 2);
        assert_eq!(ShotZone::MidRange.point_value(), 2);
        assert_eq!(ShotZone::LeftCorner3.point_value(), 3);
        assert_eq!(ShotZone::AboveTheBreak3.point_value(), 3);
    }

    #[test]
    fn test_parse_zone_code() {
        assert_eq!("lc3".parse::<ShotZone>().unwrap(), ShotZone::LeftCorner3);
        assert_eq!(" AB3 ".parse::<ShotZone>().unwrap(), ShotZone::AboveTheBreak3);
        assert_eq!("C3".parse::<ShotZone>().unwrap_err(), "unknown shot zone: C3");
    }

    #[test]
    fn test_zone_map_iterates_in_display_order() {
        let map = ZoneMap::from_fn(|zone| zone.code().len());
        let zones: Vec<ShotZone> = map.iter().map(|(z, _)| z).collect();
        assert_eq!(zones, ShotZone::ALL.to_vec());
        assert_eq!(*map.get(ShotZone::NonRestrictedArea), 3);
    }

    #[test]
    fn test_zone_map_serializes_as_object() {
        let map = ZoneMap::from_fn(|zone| zone.point_value());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"RA":2,"NRA":2,"MR":2,"LC3":3,"RC3":3,"AB3":3}"#);
    }
}
