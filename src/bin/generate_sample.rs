use std::path::{Path, PathBuf};

use bikeshare_explorer::data::model::City;
use chrono::{Duration, NaiveDate, NaiveDateTime};

const TRIPS_PER_CITY: usize = 2000;

const STATIONS: [(City, [&str; 6]); 3] = [
    (
        City::Chicago,
        [
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Theater on the Lake",
            "Canal St & Adams St",
            "Michigan Ave & Oak St",
        ],
    ),
    (
        City::NewYorkCity,
        [
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "West St & Chambers St",
            "Broadway & E 22 St",
            "Lafayette St & E 8 St",
        ],
    ),
    (
        City::Washington,
        [
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "Smithsonian-National Mall / Jefferson Dr & 12th St SW",
        ],
    ),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Index into `weights`, chosen proportionally to its weight.
    fn weighted(&mut self, weights: &[f64]) -> usize {
        let mut target = self.next_f64() * weights.iter().sum::<f64>();
        for (i, w) in weights.iter().enumerate() {
            if target < *w {
                return i;
            }
            target -= w;
        }
        weights.len() - 1
    }
}

/// Random start time in the first half of 2017, skewed towards commute hours.
fn start_time(rng: &mut SimpleRng) -> NaiveDateTime {
    let first_day = NaiveDate::from_ymd_opt(2017, 1, 1).expect("valid date");
    let day = first_day + Duration::days(rng.below(181) as i64);

    let hour_weights: Vec<f64> = (0..24)
        .map(|h| match h {
            7..=9 => 6.0,
            16..=18 => 7.0,
            10..=15 => 3.0,
            19..=22 => 2.0,
            _ => 0.5,
        })
        .collect();
    let hour = rng.weighted(&hour_weights) as u32;

    day.and_hms_opt(hour, rng.below(60) as u32, rng.below(60) as u32)
        .expect("valid time")
}

fn write_city(dir: &Path, city: City, stations: &[&str], rng: &mut SimpleRng) -> usize {
    let path = dir.join(city.file_name());
    let mut writer = csv::Writer::from_path(&path).expect("Failed to create output file");

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if city.supports_demographics() {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header).expect("Failed to write header");

    let station_weights: Vec<f64> = (0..stations.len()).map(|i| 1.0 / (i as f64 + 1.0)).collect();

    for id in 0..TRIPS_PER_CITY {
        let start = start_time(rng);
        let minutes = 2.0 + rng.next_f64().powi(3) * 120.0;
        let end = start + Duration::seconds((minutes * 60.0) as i64);

        let from = stations[rng.weighted(&station_weights)];
        let to = stations[rng.weighted(&station_weights)];
        let user_type = if rng.next_f64() < 0.8 { "Subscriber" } else { "Customer" };

        let mut row = vec![
            (1_000_000 + id).to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{minutes:.3}"),
            from.to_string(),
            to.to_string(),
            user_type.to_string(),
        ];
        if city.supports_demographics() {
            // Casual riders often leave demographics blank.
            let blank = user_type == "Customer" && rng.next_f64() < 0.7;
            let gender = match (blank, rng.below(2)) {
                (true, _) => "",
                (false, 0) => "Male",
                (false, _) => "Female",
            };
            let birth_year = if blank {
                String::new()
            } else {
                format!("{:.1}", 1950.0 + rng.below(50) as f64)
            };
            row.push(gender.to_string());
            row.push(birth_year);
        }
        writer.write_record(&row).expect("Failed to write trip");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {TRIPS_PER_CITY} trips for {city} to {}", path.display());
    TRIPS_PER_CITY
}

fn main() {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).expect("Failed to create output directory");

    let mut rng = SimpleRng::new(42);
    let total: usize = STATIONS
        .iter()
        .map(|(city, stations)| write_city(&dir, *city, stations, &mut rng))
        .sum();

    println!("Wrote {total} trips across {} cities", City::ALL.len());
}
