//! Behaviour shared by every persisted entity.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The entity types served by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    System,
    Vendor,
    AssetCategory,
}

impl EntityKind {
    /// Singular label used in messages ("Asset Category").
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::System => "System",
            EntityKind::Vendor => "Vendor",
            EntityKind::AssetCategory => "Asset Category",
        }
    }

    /// Plural label used in messages ("Asset Categories").
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::System => "Systems",
            EntityKind::Vendor => "Vendors",
            EntityKind::AssetCategory => "Asset Categories",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Store-managed timestamps carried by every record.
///
/// Both dates are `None` until the record has been saved once. They are
/// written with nanosecond precision and a `Z` suffix so that the document
/// store can order records by comparing the strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    #[serde(default, with = "fixed_width")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "fixed_width")]
    pub latest_update_date: Option<DateTime<Utc>>,
}

mod fixed_width {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Nanos, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|date| date.with_timezone(&Utc))
                    .map_err(D::Error::custom)
            })
            .transpose()
    }
}

impl Timestamps {
    /// Stamp a save: the creation date is set once, the update date every time.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.creation_date.is_none() {
            self.creation_date = Some(now);
        }
        self.latest_update_date = Some(now);
    }
}

/// A persisted entity as seen by the storage layer.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Which entity type this record is
    const KIND: EntityKind;

    /// Document store collection holding records of this type
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn timestamps(&self) -> &Timestamps;

    fn timestamps_mut(&mut self) -> &mut Timestamps;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_touch_sets_creation_once() {
        let first = Utc::now();
        let later = first + Duration::seconds(30);

        let mut stamps = Timestamps::default();
        stamps.touch(first);
        stamps.touch(later);

        assert_eq!(stamps.creation_date, Some(first));
        assert_eq!(stamps.latest_update_date, Some(later));
    }

    #[test]
    fn test_stamps_sort_as_strings() {
        let whole = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 20).unwrap();
        let half_later = whole + Duration::milliseconds(500);
        let stamps = |date| Timestamps {
            creation_date: Some(date),
            latest_update_date: None,
        };

        let earlier = serde_json::to_value(stamps(whole)).unwrap();
        let later = serde_json::to_value(stamps(half_later)).unwrap();
        let earlier = earlier["creationDate"].as_str().unwrap();
        let later = later["creationDate"].as_str().unwrap();

        assert_eq!(earlier, "2024-05-01T10:00:20.000000000Z");
        assert!(earlier < later);
    }

    #[test]
    fn test_stamps_read_back() {
        let json = r#"{"creationDate": "2024-05-01T10:00:20+00:00", "latestUpdateDate": null}"#;
        let stamps: Timestamps = serde_json::from_str(json).unwrap();
        assert_eq!(
            stamps.creation_date,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 20).unwrap())
        );
        assert_eq!(stamps.latest_update_date, None);

        let missing: Timestamps = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, Timestamps::default());

        let written = serde_json::to_string(&stamps).unwrap();
        assert_eq!(serde_json::from_str::<Timestamps>(&written).unwrap(), stamps);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(EntityKind::AssetCategory.label(), "Asset Category");
        assert_eq!(EntityKind::AssetCategory.plural(), "Asset Categories");
        assert_eq!(EntityKind::System.to_string(), "System");
    }
}
