//! Shared fixture for service tests

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::RepositoryProvider;
use crate::infrastructure::{InMemoryStore, SeedData};

/// Two Paris sites and one in Lyon. Stations 1 and 2 share site 1, station 3
/// (site 2) only has a daytime tariff. Station 1 is booked 10:00–12:00.
const PARIS: &str = r#"
[[sites]]
id = 1
instructions = "Parking principal"

[[sites]]
id = 2
instructions = "Niveau -1"

[[sites]]
id = 3
instructions = "Cour interieure"

[[addresses]]
id = 1
name = "Adresse Paris 1"
street = "123 rue de la Paix"
postal_code = "75001"
city = "Paris"
country = "France"
site_id = 1

[[addresses]]
id = 2
name = "Adresse Paris 2"
street = "8 rue de Rivoli"
postal_code = "75004"
city = "Paris"
country = "France"
site_id = 2

[[addresses]]
id = 3
name = "Adresse Lyon 1"
street = "2 place Bellecour"
postal_code = "69002"
city = "Lyon"
country = "France"
site_id = 3

[[stations]]
id = 1
name = "Borne Paris 1"
latitude = "48.8566"
longitude = "2.3522"
power_kw = "22"
site_id = 1

[[stations]]
id = 2
name = "Borne Paris 2"
latitude = "48.8567"
longitude = "2.3523"
power_kw = "22"
site_id = 1

[[stations]]
id = 3
name = "Borne Paris 3"
latitude = "48.8700"
longitude = "2.3300"
power_kw = "7.4"
site_id = 2

[[stations]]
id = 4
name = "Borne Lyon 1"
latitude = "45.7640"
longitude = "4.8357"
power_kw = "50"
site_id = 3

[[tariffs]]
id = 1
station_id = 1
rate_per_minute = "0.004167"
valid_from = "2025-01-01"
start = "08:00:00"
end = "18:00:00"

[[tariffs]]
id = 2
station_id = 1
rate_per_minute = "0.003333"
valid_from = "2025-01-01"
start = "18:00:00"
end = "08:00:00"

[[tariffs]]
id = 3
station_id = 2
rate_per_minute = "0.004167"
valid_from = "2025-01-01"
start = "08:00:00"
end = "18:00:00"

[[tariffs]]
id = 4
station_id = 2
rate_per_minute = "0.003333"
valid_from = "2025-01-01"
start = "18:00:00"
end = "08:00:00"

[[tariffs]]
id = 5
station_id = 3
rate_per_minute = "0.005"
valid_from = "2025-01-01"
start = "08:00:00"
end = "18:00:00"

[[reservations]]
id = 1
station_id = 1
user_id = 7
start = "2025-06-02T10:00:00"
end = "2025-06-02T12:00:00"
status = "ACCEPTED"
"#;

pub async fn paris_store() -> Arc<dyn RepositoryProvider> {
    let store = InMemoryStore::default();
    SeedData::from_toml(PARIS)
        .expect("fixture parses")
        .apply(&store)
        .await
        .expect("fixture loads");
    Arc::new(store)
}

/// 2 June 2025 at `h:m`
pub fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 2)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}
