//! Team statistics as served by `/api/team-data`.
//!
//! The payload is a JSON object keyed by team name. Each team holds a
//! `current` block, an `optimal` block and an `impact` block, with one
//! entry per shot zone in each. Parsing walks the JSON by hand so that a
//! missing field is reported with its full path (`current.RA.makes`).

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, ShotsError};
use crate::zone::{ShotZone, ZoneMap};

/// Attempts, makes and efficiency for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneRecord {
    pub attempts: f64,
    pub makes: f64,
    /// Field-goal percentage as a fraction in [0, 1]
    pub percentage: f64,
    /// Expected points per shot attempted
    pub ev: f64,
}

/// Suggested change for one zone (optimal minus current).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneImpact {
    pub attempt_difference: f64,
    pub makes_difference: f64,
}

/// A full six-zone shot profile plus the points per game it produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotProfile {
    pub zones: ZoneMap<ZoneRecord>,
    pub ppg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreeThrows {
    pub attempts: f64,
    /// Fraction in [0, 1]
    pub percentage: f64,
    pub points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamImpact {
    pub zones: ZoneMap<ZoneImpact>,
    pub points_difference: f64,
}

/// Win projection fields. Only present when the endpoint computes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinProjection {
    pub current_wins: f64,
    pub current_win_percentage: Option<f64>,
    pub current_plus_minus: Option<f64>,
    pub projected_wins: f64,
    pub projected_win_percentage: Option<f64>,
    pub projected_plus_minus: Option<f64>,
    pub wins_difference: f64,
    pub plus_minus_difference: Option<f64>,
}

/// Complete statistics for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub team: String,
    pub current: ShotProfile,
    pub optimal: ShotProfile,
    pub free_throws: FreeThrows,
    pub impact: TeamImpact,
    pub wins: Option<WinProjection>,
}

impl TeamStatistics {
    /// Parse the statistics of `team` from a full `/api/team-data` body.
    pub fn from_payload(body: &str, team: &str) -> Result<TeamStatistics> {
        let payload: Value = serde_json::from_str(body)
            .map_err(|e| ShotsError::MalformedData(format!("invalid JSON: {}", e)))?;
        let teams = payload
            .as_object()
            .ok_or_else(|| ShotsError::MalformedData("expected an object keyed by team".to_string()))?;
        debug!("team-data payload holds {} teams", teams.len());

        let entry = teams
            .get(team)
            .ok_or_else(|| ShotsError::NotFound(team.to_string()))?;
        TeamStatistics::from_value(team, entry)
    }

    /// Parse one team's entry of the payload.
    pub fn from_value(team: &str, entry: &Value) -> Result<TeamStatistics> {
        let current = object(entry, "current")?;
        let optimal = object(entry, "optimal")?;
        let impact = object(entry, "impact")?;

        let current_zones = ZoneMap::try_from_fn(|zone| {
            let path = format!("current.{}", zone.code());
            let z = object_at(current, zone.code(), &path)?;
            let record = ZoneRecord {
                attempts: required(z, "attempts", &path)?,
                makes: required(z, "makes", &path)?,
                percentage: required(z, "percentage", &path)?,
                ev: required(z, "ev", &path)?,
            };
            validate_record(&record, &path)?;
            Ok::<_, ShotsError>(record)
        })?;

        // The optimal distribution keeps each zone's shooting percentage,
        // so percentage and ev fall back to the current values.
        let optimal_zones = ZoneMap::try_from_fn(|zone| {
            let path = format!("optimal.{}", zone.code());
            let z = object_at(optimal, zone.code(), &path)?;
            let fallback = current_zones.get(zone);
            let record = ZoneRecord {
                attempts: required(z, "attempts", &path)?,
                makes: required(z, "makes", &path)?,
                percentage: optional(z, "percentage", &path)?.unwrap_or(fallback.percentage),
                ev: optional(z, "ev", &path)?.unwrap_or(fallback.ev),
            };
            validate_record(&record, &path)?;
            Ok::<_, ShotsError>(record)
        })?;

        let impact_zones = ZoneMap::try_from_fn(|zone| {
            let path = format!("impact.{}", zone.code());
            let z = object_at(impact, zone.code(), &path)?;
            Ok::<_, ShotsError>(ZoneImpact {
                attempt_difference: required(z, "attempt_difference", &path)?,
                makes_difference: required(z, "makes_difference", &path)?,
            })
        })?;

        let ft_path = "current.free_throws";
        let ft = object_at(current, "free_throws", ft_path)?;
        let free_throws = FreeThrows {
            attempts: non_negative(required(ft, "attempts", ft_path)?, ft_path, "attempts")?,
            percentage: free_throw_percentage(required(ft, "percentage", ft_path)?)?,
            points: optional(ft, "points", ft_path)?
                .map(|points| non_negative(points, ft_path, "points"))
                .transpose()?,
        };

        Ok(TeamStatistics {
            team: team.to_string(),
            current: ShotProfile {
                zones: current_zones,
                ppg: required(current, "ppg", "current")?,
            },
            optimal: ShotProfile {
                zones: optimal_zones,
                ppg: required(optimal, "ppg", "optimal")?,
            },
            free_throws,
            impact: TeamImpact {
                zones: impact_zones,
                points_difference: required(impact, "points_difference", "impact")?,
            },
            wins: parse_win_projection(current, optimal, impact)?,
        })
    }
}

impl ShotProfile {
    /// Total field-goal attempts across the six zones.
    pub fn total_attempts(&self) -> f64 {
        self.zones.values().map(|z| z.attempts).sum()
    }

    pub fn total_makes(&self) -> f64 {
        self.zones.values().map(|z| z.makes).sum()
    }
}

/// Parse the `/test` body into its list of team names.
pub fn parse_team_list(body: &str) -> Result<Vec<String>> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| ShotsError::MalformedData(format!("invalid JSON: {}", e)))?;
    let teams = payload
        .get("available_teams")
        .and_then(Value::as_array)
        .ok_or_else(|| ShotsError::MalformedData("missing available_teams".to_string()))?;

    let names = teams
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| ShotsError::MalformedData(format!("team name is not a string: {}", v)))
        })
        .collect::<Result<Vec<String>>>()?;

    if names.is_empty() {
        return Err(ShotsError::EmptyResult);
    }
    Ok(names)
}

fn parse_win_projection(
    current: &Map<String, Value>,
    optimal: &Map<String, Value>,
    impact: &Map<String, Value>,
) -> Result<Option<WinProjection>> {
    let current_wins = optional(current, "wins", "current")?;
    let projected_wins = optional(optimal, "projected_wins", "optimal")?;
    let (Some(current_wins), Some(projected_wins)) = (current_wins, projected_wins) else {
        return Ok(None);
    };

    Ok(Some(WinProjection {
        current_wins,
        current_win_percentage: optional(current, "win_percentage", "current")?,
        current_plus_minus: optional(current, "plus_minus", "current")?,
        projected_wins,
        projected_win_percentage: optional(optimal, "projected_win_percentage", "optimal")?,
        projected_plus_minus: optional(optimal, "projected_plus_minus", "optimal")?,
        wins_difference: optional(impact, "wins_difference", "impact")?
            .unwrap_or(projected_wins - current_wins),
        plus_minus_difference: optional(impact, "plus_minus_difference", "impact")?,
    }))
}

/// The free-throw percentage arrives either as a fraction or on a 0-100
/// scale; anything above 1 is read as the latter. Zone percentages get no
/// such leniency and must be fractions.
fn free_throw_percentage(value: f64) -> Result<f64> {
    let value = non_negative(value, "current.free_throws", "percentage")?;
    if value > 100.0 {
        return Err(ShotsError::MalformedData(format!(
            "current.free_throws.percentage is out of range: {}",
            value
        )));
    }
    Ok(if value > 1.0 { value / 100.0 } else { value })
}

fn non_negative(value: f64, path: &str, name: &str) -> Result<f64> {
    if value < 0.0 {
        return Err(ShotsError::MalformedData(format!(
            "{}.{} is negative: {}",
            path, name, value
        )));
    }
    Ok(value)
}

fn validate_record(record: &ZoneRecord, path: &str) -> Result<()> {
    let fields = [
        ("attempts", record.attempts),
        ("makes", record.makes),
        ("percentage", record.percentage),
        ("ev", record.ev),
    ];
    for (name, value) in fields {
        non_negative(value, path, name)?;
    }
    if record.makes > record.attempts {
        return Err(ShotsError::MalformedData(format!(
            "{}.makes exceeds attempts: {} > {}",
            path, record.makes, record.attempts
        )));
    }
    if record.percentage > 1.0 {
        return Err(ShotsError::MalformedData(format!(
            "{}.percentage is not a fraction: {}",
            path, record.percentage
        )));
    }
    Ok(())
}

fn object<'a>(value: &'a Value, key: &str) -> Result<&'a Map<String, Value>> {
    value
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ShotsError::MalformedData(format!("missing {}", key)))
}

fn object_at<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Map<String, Value>> {
    parent
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ShotsError::MalformedData(format!("missing {}", path)))
}

fn required(parent: &Map<String, Value>, key: &str, path: &str) -> Result<f64> {
    optional(parent, key, path)?
        .ok_or_else(|| ShotsError::MalformedData(format!("missing {}.{}", path, key)))
}

fn optional(parent: &Map<String, Value>, key: &str, path: &str) -> Result<Option<f64>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| ShotsError::MalformedData(format!("{}.{} is not a number: {}", path, key, v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SAMPLE_TEAM_DATA, SAMPLE_TEAM_LIST};
    use serde_json::json;

    #[test]
    fn test_parse_sample_team() {
        let stats = TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Chicago Bulls").unwrap();
        assert_eq!(stats.team, "Chicago Bulls");

        let ra = stats.current.zones.get(ShotZone::RestrictedArea);
        assert_eq!(ra.attempts, 29.9);
        assert_eq!(ra.percentage, 0.63);

        let nra = stats.impact.zones.get(ShotZone::NonRestrictedArea);
        assert_eq!(nra.attempt_difference, -5.0);

        // 78.0 on the wire is stored as a fraction
        assert!((stats.free_throws.percentage - 0.78).abs() < 1e-12);
        assert_eq!(stats.free_throws.points, Some(15.7));

        let wins = stats.wins.unwrap();
        assert_eq!(wins.current_wins, 39.0);
        assert_eq!(wins.projected_wins, 42.1);
    }

    #[test]
    fn test_optimal_inherits_percentage_and_ev() {
        let stats = TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Chicago Bulls").unwrap();
        let current = stats.current.zones.get(ShotZone::LeftCorner3);
        let optimal = stats.optimal.zones.get(ShotZone::LeftCorner3);
        assert_eq!(optimal.attempts, 7.6);
        assert_eq!(optimal.percentage, current.percentage);
        assert_eq!(optimal.ev, current.ev);
    }

    #[test]
    fn test_team_without_win_projection() {
        let stats = TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Boston Celtics").unwrap();
        assert!(stats.wins.is_none());
        assert_eq!(stats.free_throws.points, None);
        assert_eq!(stats.impact.points_difference, 0.0);
    }

    #[test]
    fn test_unknown_team_is_not_found() {
        let err = TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Seattle SuperSonics").unwrap_err();
        assert_eq!(err, ShotsError::NotFound("Seattle SuperSonics".to_string()));
    }

    #[test]
    fn test_missing_zone_field_is_malformed() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["current"]["MR"]
            .as_object_mut()
            .unwrap()
            .remove("makes");
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert_eq!(err, ShotsError::MalformedData("missing current.MR.makes".to_string()));
    }

    #[test]
    fn test_missing_zone_is_malformed() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["impact"]
            .as_object_mut()
            .unwrap()
            .remove("AB3");
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert_eq!(err, ShotsError::MalformedData("missing impact.AB3".to_string()));
    }

    #[test]
    fn test_non_numeric_field_is_malformed() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["current"]["RA"]["attempts"] = json!("lots");
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert!(matches!(err, ShotsError::MalformedData(msg) if msg.starts_with("current.RA.attempts")));
    }

    #[test]
    fn test_makes_above_attempts_is_malformed() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["current"]["RA"]["attempts"] = json!(5.0);
        payload["Chicago Bulls"]["current"]["RA"]["makes"] = json!(50.0);
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert_eq!(
            err,
            ShotsError::MalformedData("current.RA.makes exceeds attempts: 50 > 5".to_string())
        );
    }

    #[test]
    fn test_optimal_makes_above_attempts_is_malformed() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["optimal"]["AB3"]["makes"] = json!(40.0);
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert!(matches!(err, ShotsError::MalformedData(msg) if msg.starts_with("optimal.AB3.makes exceeds")));
    }

    #[test]
    fn test_negative_free_throws_are_malformed() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["current"]["free_throws"] =
            json!({"attempts": -3.0, "percentage": 0.5});
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert_eq!(
            err,
            ShotsError::MalformedData("current.free_throws.attempts is negative: -3".to_string())
        );

        payload["Chicago Bulls"]["current"]["free_throws"] =
            json!({"attempts": 3.0, "percentage": -0.5});
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert!(matches!(err, ShotsError::MalformedData(msg) if msg.starts_with("current.free_throws.percentage is negative")));

        payload["Chicago Bulls"]["current"]["free_throws"] =
            json!({"attempts": 3.0, "percentage": 0.5, "points": -1.0});
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert!(matches!(err, ShotsError::MalformedData(msg) if msg.starts_with("current.free_throws.points is negative")));
    }

    #[test]
    fn test_free_throw_percentage_scale() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["current"]["free_throws"] =
            json!({"attempts": 20.0, "percentage": 100.0});
        let stats = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap();
        assert_eq!(stats.free_throws.percentage, 1.0);

        payload["Chicago Bulls"]["current"]["free_throws"] =
            json!({"attempts": 20.0, "percentage": 150.0});
        let err = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap_err();
        assert!(matches!(err, ShotsError::MalformedData(msg) if msg.contains("out of range")));
    }

    #[test]
    fn test_zero_attempts_passes_values_through() {
        let mut payload: Value = serde_json::from_str(SAMPLE_TEAM_DATA).unwrap();
        payload["Chicago Bulls"]["current"]["MR"] =
            json!({"attempts": 0.0, "makes": 0.0, "percentage": 0.41, "ev": 0.82});
        let stats = TeamStatistics::from_payload(&payload.to_string(), "Chicago Bulls").unwrap();
        let mr = stats.current.zones.get(ShotZone::MidRange);
        assert_eq!(mr.attempts, 0.0);
        assert_eq!(mr.ev, 0.82);
    }

    #[test]
    fn test_parse_team_list() {
        let teams = parse_team_list(SAMPLE_TEAM_LIST).unwrap();
        assert_eq!(teams, vec!["Boston Celtics".to_string(), "Chicago Bulls".to_string()]);
    }

    #[test]
    fn test_empty_team_list() {
        let err = parse_team_list(r#"{"available_teams": []}"#).unwrap_err();
        assert_eq!(err, ShotsError::EmptyResult);
    }

    #[test]
    fn test_team_list_without_key() {
        let err = parse_team_list(r#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, ShotsError::MalformedData(_)));
    }
}
